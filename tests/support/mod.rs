#![allow(dead_code)]

pub mod spy;

use chrono::{DateTime, TimeZone, Utc};
use gallery_model::ImageModel;

pub fn fixed_date() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2016, 3, 4, 9, 5, 7).unwrap()
}

pub fn picture() -> ImageModel {
    ImageModel::new("images/pic.jpg", fixed_date(), "", 0).unwrap()
}

pub fn image(path: &str, rating: u8) -> ImageModel {
    ImageModel::new(path, fixed_date(), "", rating).unwrap()
}
