use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use super::{ImageRecord, KeyValueStore, StoreError};
use crate::listener::ListenerId;
use crate::{ImageCollectionModel, ImageModel};

/// Where a gallery lives inside the key-value store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StoreConfig {
    /// Prefix for every key this gallery writes.
    pub namespace: String,
}

impl Default for StoreConfig {
    fn default() -> Self {
        StoreConfig {
            namespace: "gallery".to_string(),
        }
    }
}

/// Saves and restores an [`ImageCollectionModel`] through a [`KeyValueStore`].
#[derive(Debug, Clone)]
pub struct GalleryStore<S> {
    store: S,
    config: StoreConfig,
}

impl<S: KeyValueStore> GalleryStore<S> {
    pub fn new(store: S, config: StoreConfig) -> Self {
        Self { store, config }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn config(&self) -> &StoreConfig {
        &self.config
    }

    fn index_key(&self) -> String {
        format!("{}:images", self.config.namespace)
    }

    fn image_key(&self, path: &str) -> String {
        format!("{}:image:{}", self.config.namespace, path)
    }

    fn stored_paths(&self) -> Result<Vec<String>, StoreError> {
        match self.store.get(&self.index_key())? {
            Some(json) => Ok(serde_json::from_str(&json)?),
            None => Ok(Vec::new()),
        }
    }

    /// Write one image's record.
    pub fn save_image(&self, model: &ImageModel) -> Result<(), StoreError> {
        let json = serde_json::to_string(&ImageRecord::from(model))?;
        self.store.set(&self.image_key(model.path()), json)
    }

    /// Read one image's record, if stored.
    pub fn load_image(&self, path: &str) -> Result<Option<ImageModel>, StoreError> {
        match self.store.get(&self.image_key(path))? {
            Some(json) => {
                let record: ImageRecord = serde_json::from_str(&json)?;
                Ok(Some(ImageModel::try_from(record)?))
            }
            None => Ok(None),
        }
    }

    /// Write the member list and every member's record. Records of images
    /// that left the collection since the last save are deleted.
    ///
    /// Fails without writing anything if two members share a path.
    pub fn save_collection(&self, collection: &ImageCollectionModel) -> Result<(), StoreError> {
        let models = collection.image_models();
        let paths: Vec<String> = models.iter().map(|m| m.path().to_string()).collect();

        let mut seen = HashSet::new();
        if let Some(path) = paths.iter().find(|path| !seen.insert(path.as_str())) {
            return Err(StoreError::DuplicatePath { path: path.clone() });
        }

        for stale in self.stored_paths()? {
            if !paths.contains(&stale) {
                self.store.remove(&self.image_key(&stale))?;
            }
        }
        for model in &models {
            self.save_image(model)?;
        }
        self.store
            .set(&self.index_key(), serde_json::to_string(&paths)?)?;

        tracing::debug!(
            namespace = %self.config.namespace,
            images = paths.len(),
            "gallery saved"
        );
        Ok(())
    }

    /// Rebuild a collection from the store. Nothing stored yields an empty
    /// collection.
    pub fn load_collection(&self) -> Result<ImageCollectionModel, StoreError> {
        let collection = ImageCollectionModel::new();
        for path in self.stored_paths()? {
            let model = self
                .load_image(&path)?
                .ok_or_else(|| StoreError::MissingRecord { path: path.clone() })?;
            collection.add_image_model(model)?;
        }

        tracing::debug!(
            namespace = %self.config.namespace,
            images = collection.len(),
            "gallery loaded"
        );
        Ok(collection)
    }

    /// Delete every key of this namespace. Other namespaces are untouched.
    pub fn clear(&self) -> Result<(), StoreError> {
        for path in self.stored_paths()? {
            self.store.remove(&self.image_key(&path))?;
        }
        self.store.remove(&self.index_key())?;
        Ok(())
    }
}

impl<S: KeyValueStore + Clone + 'static> GalleryStore<S> {
    /// Save `collection` after every notification it emits. A failed save is
    /// logged and does not interrupt the notification pass.
    pub fn autosave(&self, collection: &ImageCollectionModel) -> ListenerId {
        let gallery = self.clone();
        collection.add_listener(move |collection, _| {
            if let Err(err) = gallery.save_collection(collection) {
                tracing::warn!(
                    namespace = %gallery.config.namespace,
                    error = %err,
                    "autosave failed"
                );
            }
        })
    }
}
