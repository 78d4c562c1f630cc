//! Collections - ordered groups of images with cascading notification.
//!
//! An [`ImageCollectionModel`] notifies its own listeners when a member is
//! added or removed, and whenever any current member changes. The cascade
//! runs through one standing subscription per member, installed on add and
//! uninstalled on remove (or when the collection is dropped).
//!
//! ## Example
//!
//! ```ignore
//! use gallery_model::{ImageCollectionModel, ImageModel, RatingFilter};
//!
//! let gallery = ImageCollectionModel::new();
//! gallery.add_listener(|collection, _| println!("{} images", collection.len()));
//!
//! let image = ImageModel::new("images/pic.jpg", now(), "", 0)?;
//! gallery.add_image_model(image.clone())?; // notifies
//! image.set_rating(4)?;                    // notifies the image, then the gallery
//!
//! let favourites = gallery.filtered(RatingFilter::from_value(4)?);
//! ```

mod filter;
mod image_collection;

pub use filter::RatingFilter;
pub use image_collection::ImageCollectionModel;
