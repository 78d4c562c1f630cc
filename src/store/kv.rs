//! KeyValueStore - abstract string storage.

use super::StoreError;

/// String key-value storage, shaped like the browser's local storage.
pub trait KeyValueStore {
    /// Get a value by key. Returns None if not found.
    fn get(&self, key: &str) -> Result<Option<String>, StoreError>;

    /// Insert or overwrite a value.
    fn set(&self, key: &str, value: String) -> Result<(), StoreError>;

    /// Delete a key. Returns true if it existed.
    fn remove(&self, key: &str) -> Result<bool, StoreError>;

    /// Delete every key.
    fn clear(&self) -> Result<(), StoreError>;
}
