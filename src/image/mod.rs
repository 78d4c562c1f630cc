//! Images - the metadata of a single gallery image.
//!
//! An [`ImageModel`] is a shared handle: clones point at the same image, so a
//! renderer, the caller and any number of collections can hold it at once.
//! Every successful mutation refreshes the modification date and notifies
//! the image's listeners before the call returns.

mod image_model;
mod rating;

pub use image_model::ImageModel;
pub use rating::Rating;
