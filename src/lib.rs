//! Observable state models for a photo gallery.
//!
//! [`ImageModel`] holds one image's metadata and notifies its listeners after
//! every change. [`ImageCollectionModel`] groups images and notifies its own
//! listeners on membership changes and on every change of a member, so a
//! renderer only has to subscribe to the collection.

mod collection;
mod error;
mod image;
pub mod listener;
#[cfg(feature = "persistence")]
pub mod store;
pub mod time;

pub use collection::{ImageCollectionModel, RatingFilter};
pub use error::ModelError;
pub use image::{ImageModel, Rating};
pub use listener::{Listener, ListenerId};
