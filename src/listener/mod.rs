//! Listeners - synchronous change callbacks shared by every model.
//!
//! A listener has the shape `(model, timestamp)`. Registrations are kept in
//! insertion order and duplicates are allowed; each registration gets its own
//! [`ListenerId`].
//!
//! ## Example
//!
//! ```ignore
//! use gallery_model::ImageModel;
//!
//! let image = ImageModel::new("images/pic.jpg", now(), "", 0)?;
//! let id = image.add_listener(|model, at| {
//!     println!("{} changed at {}", model.name(), at);
//! });
//! image.set_caption("sup");
//! image.remove_listener(id);
//! ```

mod registry;

use std::fmt;
use std::rc::Rc;
use std::sync::atomic::{AtomicU64, Ordering};

use chrono::{DateTime, Utc};

pub use registry::ListenerRegistry;

/// A change callback receiving the model that changed and when it changed.
pub type Listener<T> = Rc<dyn Fn(&T, DateTime<Utc>)>;

static NEXT_LISTENER_ID: AtomicU64 = AtomicU64::new(1);

/// Handle identifying one listener registration.
///
/// Ids are unique across the process, so an id only ever matches the
/// registration that produced it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ListenerId(u64);

impl ListenerId {
    pub(crate) fn next() -> Self {
        ListenerId(NEXT_LISTENER_ID.fetch_add(1, Ordering::Relaxed))
    }
}

impl fmt::Display for ListenerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "listener#{}", self.0)
    }
}
