use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::{ImageModel, ModelError};

/// The persisted fields of one image.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImageRecord {
    pub path: String,
    pub modification_date: DateTime<Utc>,
    #[serde(default)]
    pub caption: String,
    #[serde(default)]
    pub rating: u8,
}

impl From<&ImageModel> for ImageRecord {
    fn from(model: &ImageModel) -> Self {
        ImageRecord {
            path: model.path().to_string(),
            modification_date: model.modification_date(),
            caption: model.caption(),
            rating: model.rating().value(),
        }
    }
}

impl TryFrom<ImageRecord> for ImageModel {
    type Error = ModelError;

    fn try_from(record: ImageRecord) -> Result<Self, Self::Error> {
        ImageModel::new(
            record.path,
            record.modification_date,
            record.caption,
            record.rating,
        )
    }
}
