//! Store - key-value persistence for galleries.
//!
//! The models know nothing about storage. A [`GalleryStore`] reads a
//! collection out of a [`KeyValueStore`] and writes it back, either on demand
//! or automatically after every change via [`GalleryStore::autosave`].
//!
//! ## Layout
//!
//! ```text
//! {namespace}:images          -> ["images/a.jpg", "images/b.jpg"]
//! {namespace}:image:{path}    -> {"path":..,"modification_date":..,"caption":..,"rating":..}
//! ```
//!
//! ## Example
//!
//! ```ignore
//! use gallery_model::store::{GalleryStore, InMemoryStore, StoreConfig};
//!
//! let store = GalleryStore::new(InMemoryStore::new(), StoreConfig::default());
//! let gallery = store.load_collection()?;
//! store.autosave(&gallery);
//! ```

mod gallery_store;
mod in_memory;
mod kv;
mod record;

use thiserror::Error;

use crate::ModelError;

/// Error type for store operations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    /// Serialization/deserialization error.
    #[error("store serialization error: {0}")]
    Serde(String),

    /// Backend failure.
    #[error("store backend error: {0}")]
    Storage(String),

    /// Two members share a path, so their records would overwrite each other.
    #[error("more than one image at {path}; records are keyed by path")]
    DuplicatePath { path: String },

    /// The member list names an image whose record is missing.
    #[error("no stored record for image {path}")]
    MissingRecord { path: String },

    /// A stored record the models refuse (e.g. rating out of range).
    #[error("invalid stored record: {0}")]
    InvalidRecord(#[from] ModelError),
}

impl From<serde_json::Error> for StoreError {
    fn from(err: serde_json::Error) -> Self {
        StoreError::Serde(err.to_string())
    }
}

pub use gallery_store::{GalleryStore, StoreConfig};
pub use in_memory::InMemoryStore;
pub use kv::KeyValueStore;
pub use record::ImageRecord;
