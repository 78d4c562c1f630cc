use std::fmt;

use crate::ModelError;

/// Star rating of an image, always within `0..=5`. Zero means unrated.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Rating(u8);

impl Rating {
    pub const MIN: Rating = Rating(0);
    pub const MAX: Rating = Rating(5);
    pub const UNRATED: Rating = Rating(0);

    pub fn new(value: u8) -> Result<Self, ModelError> {
        if value > Self::MAX.0 {
            return Err(ModelError::InvalidArgument(format!(
                "rating {} is outside {}..={}",
                value,
                Self::MIN.0,
                Self::MAX.0
            )));
        }
        Ok(Rating(value))
    }

    pub fn value(self) -> u8 {
        self.0
    }

    pub fn is_unrated(self) -> bool {
        self.0 == 0
    }
}

impl TryFrom<u8> for Rating {
    type Error = ModelError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Rating::new(value)
    }
}

impl From<Rating> for u8 {
    fn from(rating: Rating) -> Self {
        rating.0
    }
}

impl PartialEq<u8> for Rating {
    fn eq(&self, other: &u8) -> bool {
        self.0 == *other
    }
}

impl fmt::Display for Rating {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
