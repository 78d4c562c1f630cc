//! Timestamp utilities

use chrono::{DateTime, Utc};

/// Prefix renderers put in front of a formatted modification date.
pub const LAST_MODIFIED: &str = "Last Modified: ";

const DISPLAY_FORMAT: &str = "%b %-d, %Y %H:%M:%S";

/// Get current UTC timestamp
pub fn now() -> DateTime<Utc> {
    Utc::now()
}

/// Format a modification date for display, e.g. `Mar 4, 2016 09:05:07`.
pub fn format_modification_date(date: DateTime<Utc>) -> String {
    date.format(DISPLAY_FORMAT).to_string()
}

/// The full label shown next to an image: `Last Modified: <date>`.
pub fn last_modified_label(date: DateTime<Utc>) -> String {
    format!("{}{}", LAST_MODIFIED, format_modification_date(date))
}
