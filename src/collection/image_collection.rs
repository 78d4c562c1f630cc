use std::cell::RefCell;
use std::fmt;
use std::rc::{Rc, Weak};

use chrono::{DateTime, Utc};

use super::RatingFilter;
use crate::listener::{Listener, ListenerId, ListenerRegistry};
use crate::{time, ImageModel, ModelError};

/// A member image and the standing subscription the collection holds on it.
struct Member {
    model: ImageModel,
    subscription: ListenerId,
}

struct CollectionInner {
    members: RefCell<Vec<Member>>,
    listeners: ListenerRegistry<ImageCollectionModel>,
}

impl Drop for CollectionInner {
    fn drop(&mut self) {
        for member in self.members.get_mut().drain(..) {
            member.model.remove_listener(member.subscription);
        }
    }
}

/// Ordered collection of images.
///
/// Listeners on the collection are called with `(collection, timestamp)` on
/// every add, every remove and every mutation of a current member. Each
/// image instance can be a member at most once.
#[derive(Clone)]
pub struct ImageCollectionModel {
    inner: Rc<CollectionInner>,
}

impl Default for ImageCollectionModel {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for ImageCollectionModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let members = self.inner.members.borrow();
        let paths: Vec<&str> = members.iter().map(|m| m.model.path()).collect();
        f.debug_struct("ImageCollectionModel")
            .field("members", &paths)
            .field("listeners", &self.inner.listeners.len())
            .finish()
    }
}

impl ImageCollectionModel {
    /// Create a new empty collection.
    pub fn new() -> Self {
        ImageCollectionModel {
            inner: Rc::new(CollectionInner {
                members: RefCell::new(Vec::new()),
                listeners: ListenerRegistry::new(),
            }),
        }
    }

    /// True if both handles refer to the same collection.
    pub fn ptr_eq(a: &ImageCollectionModel, b: &ImageCollectionModel) -> bool {
        Rc::ptr_eq(&a.inner, &b.inner)
    }

    /// Snapshot of the members in insertion order.
    pub fn image_models(&self) -> Vec<ImageModel> {
        self.inner
            .members
            .borrow()
            .iter()
            .map(|m| m.model.clone())
            .collect()
    }

    pub fn len(&self) -> usize {
        self.inner.members.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.members.borrow().is_empty()
    }

    pub fn contains(&self, model: &ImageModel) -> bool {
        self.inner
            .members
            .borrow()
            .iter()
            .any(|m| ImageModel::ptr_eq(&m.model, model))
    }

    /// First member with this path.
    pub fn find_by_path(&self, path: &str) -> Option<ImageModel> {
        self.inner
            .members
            .borrow()
            .iter()
            .find(|m| m.model.path() == path)
            .map(|m| m.model.clone())
    }

    /// Like [`find_by_path`](Self::find_by_path) but absent paths are an error.
    pub fn image_model(&self, path: &str) -> Result<ImageModel, ModelError> {
        self.find_by_path(path)
            .ok_or_else(|| ModelError::NotFound(format!("no image at {} in collection", path)))
    }

    /// Members that pass `filter`, in insertion order.
    pub fn filtered(&self, filter: RatingFilter) -> Vec<ImageModel> {
        self.inner
            .members
            .borrow()
            .iter()
            .filter(|m| filter.matches(&m.model))
            .map(|m| m.model.clone())
            .collect()
    }

    /// Append `model`, subscribe to its changes and notify listeners.
    ///
    /// Adding an image that is already a member is rejected without touching
    /// the collection or notifying anyone.
    pub fn add_image_model(&self, model: ImageModel) -> Result<(), ModelError> {
        if self.contains(&model) {
            return Err(ModelError::InvalidArgument(format!(
                "{} is already in this collection",
                model.path()
            )));
        }

        let collection: Weak<CollectionInner> = Rc::downgrade(&self.inner);
        let subscription = model.add_listener(move |model, at| {
            let Some(inner) = collection.upgrade() else {
                return;
            };
            // A listener earlier in this pass may have removed the member.
            let collection = ImageCollectionModel { inner };
            if collection.contains(model) {
                collection.notify(at);
            }
        });

        tracing::debug!(path = model.path(), %subscription, "image added to collection");
        self.inner.members.borrow_mut().push(Member {
            model,
            subscription,
        });

        self.notify(time::now());
        Ok(())
    }

    /// Remove `model`, unsubscribe from it and notify listeners.
    ///
    /// Returns false, without notifying, if `model` is not a member.
    pub fn remove_image_model(&self, model: &ImageModel) -> bool {
        let removed = {
            let mut members = self.inner.members.borrow_mut();
            members
                .iter()
                .position(|m| ImageModel::ptr_eq(&m.model, model))
                .map(|index| members.remove(index))
        };

        let Some(member) = removed else {
            return false;
        };

        member.model.remove_listener(member.subscription);
        tracing::debug!(path = member.model.path(), "image removed from collection");

        self.notify(time::now());
        true
    }

    /// Register a listener called with `(collection, timestamp)`.
    pub fn add_listener<F>(&self, listener: F) -> ListenerId
    where
        F: Fn(&ImageCollectionModel, DateTime<Utc>) + 'static,
    {
        self.inner.listeners.add(Rc::new(listener))
    }

    /// Register an already shared listener; see [`ImageModel::add_shared_listener`].
    pub fn add_shared_listener(&self, listener: Listener<ImageCollectionModel>) -> ListenerId {
        self.inner.listeners.add(listener)
    }

    /// Returns false if `id` is not registered on this collection.
    pub fn remove_listener(&self, id: ListenerId) -> bool {
        self.inner.listeners.remove(id)
    }

    /// Remove every registration of `listener`. Returns how many were removed.
    pub fn remove_shared_listener(&self, listener: &Listener<ImageCollectionModel>) -> usize {
        self.inner.listeners.remove_matching(listener)
    }

    pub fn listener_count(&self) -> usize {
        self.inner.listeners.len()
    }

    fn notify(&self, at: DateTime<Utc>) {
        self.inner.listeners.notify(self, at);
    }

    #[cfg(test)]
    fn subscriptions(&self) -> Vec<ListenerId> {
        self.inner
            .members
            .borrow()
            .iter()
            .map(|m| m.subscription)
            .collect()
    }
}
