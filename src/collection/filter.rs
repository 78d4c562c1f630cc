use std::fmt;

use crate::{ImageModel, ModelError, Rating};

/// Which members of a collection to show, by rating.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum RatingFilter {
    /// No filtering.
    #[default]
    All,
    /// Only images with exactly this rating.
    Exactly(Rating),
}

impl RatingFilter {
    /// Map a toolbar value in `0..=5` to a filter, 0 meaning no filtering.
    pub fn from_value(value: u8) -> Result<Self, ModelError> {
        let rating = Rating::new(value)?;
        if rating.is_unrated() {
            Ok(RatingFilter::All)
        } else {
            Ok(RatingFilter::Exactly(rating))
        }
    }

    pub fn value(self) -> u8 {
        match self {
            RatingFilter::All => 0,
            RatingFilter::Exactly(rating) => rating.value(),
        }
    }

    pub fn matches(self, image: &ImageModel) -> bool {
        match self {
            RatingFilter::All => true,
            RatingFilter::Exactly(rating) => image.rating() == rating,
        }
    }
}

impl fmt::Display for RatingFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RatingFilter::All => write!(f, "all"),
            RatingFilter::Exactly(rating) => write!(f, "{} stars", rating),
        }
    }
}
