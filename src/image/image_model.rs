use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

use chrono::{DateTime, Utc};

use super::Rating;
use crate::listener::{Listener, ListenerId, ListenerRegistry};
use crate::{time, ModelError};

struct ImageState {
    modification_date: DateTime<Utc>,
    caption: String,
    rating: Rating,
}

struct ImageInner {
    path: String,
    state: RefCell<ImageState>,
    listeners: ListenerRegistry<ImageModel>,
}

/// Metadata of one image: path, modification date, caption and rating.
#[derive(Clone)]
pub struct ImageModel {
    inner: Rc<ImageInner>,
}

impl fmt::Debug for ImageModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let state = self.inner.state.borrow();
        f.debug_struct("ImageModel")
            .field("path", &self.inner.path)
            .field("modification_date", &state.modification_date)
            .field("caption", &state.caption)
            .field("rating", &state.rating)
            .field("listeners", &self.inner.listeners.len())
            .finish()
    }
}

impl ImageModel {
    /// Create an image. Fails if `rating` is outside `0..=5`.
    pub fn new(
        path: impl Into<String>,
        modification_date: DateTime<Utc>,
        caption: impl Into<String>,
        rating: u8,
    ) -> Result<Self, ModelError> {
        let rating = Rating::new(rating)?;
        Ok(Self::with_rating(path, modification_date, caption, rating))
    }

    /// Create an image from an already validated rating.
    pub fn with_rating(
        path: impl Into<String>,
        modification_date: DateTime<Utc>,
        caption: impl Into<String>,
        rating: Rating,
    ) -> Self {
        ImageModel {
            inner: Rc::new(ImageInner {
                path: path.into(),
                state: RefCell::new(ImageState {
                    modification_date,
                    caption: caption.into(),
                    rating,
                }),
                listeners: ListenerRegistry::new(),
            }),
        }
    }

    /// True if both handles refer to the same image.
    pub fn ptr_eq(a: &ImageModel, b: &ImageModel) -> bool {
        Rc::ptr_eq(&a.inner, &b.inner)
    }

    pub fn path(&self) -> &str {
        &self.inner.path
    }

    /// Display name: the last segment of the path. Both `/` and `\` count as
    /// separators and trailing separators are ignored.
    pub fn name(&self) -> &str {
        let trimmed = self.inner.path.trim_end_matches(['/', '\\']);
        trimmed.rsplit(['/', '\\']).next().unwrap_or(trimmed)
    }

    pub fn caption(&self) -> String {
        self.inner.state.borrow().caption.clone()
    }

    pub fn rating(&self) -> Rating {
        self.inner.state.borrow().rating
    }

    pub fn modification_date(&self) -> DateTime<Utc> {
        self.inner.state.borrow().modification_date
    }

    /// Replace the caption (empty is allowed) and notify listeners.
    pub fn set_caption(&self, caption: impl Into<String>) {
        let caption = caption.into();
        self.mutate(|state| state.caption = caption);
    }

    /// Replace the rating and notify listeners. Values outside `0..=5` are
    /// rejected and leave the image untouched.
    pub fn set_rating(&self, rating: u8) -> Result<(), ModelError> {
        let rating = Rating::new(rating).map_err(|err| {
            tracing::warn!(path = %self.inner.path, rating, "rejected rating");
            err
        })?;
        self.mutate(|state| state.rating = rating);
        Ok(())
    }

    /// Register a listener called with `(image, modification_date)` after
    /// every mutation.
    pub fn add_listener<F>(&self, listener: F) -> ListenerId
    where
        F: Fn(&ImageModel, DateTime<Utc>) + 'static,
    {
        self.inner.listeners.add(Rc::new(listener))
    }

    /// Register an already shared listener. The same `Rc` may be added more
    /// than once and is then called once per registration.
    pub fn add_shared_listener(&self, listener: Listener<ImageModel>) -> ListenerId {
        self.inner.listeners.add(listener)
    }

    /// Returns false if `id` is not registered on this image.
    pub fn remove_listener(&self, id: ListenerId) -> bool {
        self.inner.listeners.remove(id)
    }

    /// Remove every registration of `listener`. Returns how many were removed.
    pub fn remove_shared_listener(&self, listener: &Listener<ImageModel>) -> usize {
        self.inner.listeners.remove_matching(listener)
    }

    /// Number of registrations, including those installed by collections.
    pub fn listener_count(&self) -> usize {
        self.inner.listeners.len()
    }

    pub(crate) fn has_listener(&self, id: ListenerId) -> bool {
        self.inner.listeners.contains(id)
    }

    fn mutate(&self, apply: impl FnOnce(&mut ImageState)) {
        let at = time::now();
        {
            let mut state = self.inner.state.borrow_mut();
            apply(&mut state);
            state.modification_date = at;
        }
        self.inner.listeners.notify(self, at);
    }
}
