//! The storage area contract and the in-memory implementation.

use super::error::StoreError;
use super::types::Entry;

/// A scoped key-value namespace holding encoded text entries.
///
/// This mirrors the host storage contract the facade is built over: item
/// access by key, a full clear, an entry count, and positional key lookup
/// over the insertion-order key sequence. Keys are unique per area; an
/// overwrite keeps the key's original position.
pub trait StorageArea {
    /// Create or overwrite the entry for `key`.
    fn set_item(&mut self, key: &str, value: &str) -> Result<(), StoreError>;

    /// Read the entry text for `key`, or `None` if absent.
    fn get_item(&self, key: &str) -> Result<Option<String>, StoreError>;

    /// Delete the entry for `key` if present. Absent keys are not an error.
    fn remove_item(&mut self, key: &str) -> Result<(), StoreError>;

    /// Delete every entry in the area.
    fn clear(&mut self) -> Result<(), StoreError>;

    /// Number of entries currently held.
    fn len(&self) -> usize;

    /// Returns `true` if the area holds no entries.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Key name at the given zero-based position in the current
    /// insertion-order key sequence, or `None` if out of range.
    ///
    /// Positions are not stable across intervening mutations.
    fn key(&self, index: usize) -> Option<&str>;
}

/// A volatile, insertion-ordered storage area.
///
/// Used for the session scope and as the persistent scope of an in-memory
/// store. Contents are lost on drop.
#[derive(Debug, Clone, Default)]
pub struct MemoryArea {
    entries: Vec<Entry>,
}

impl MemoryArea {
    /// Create an empty area.
    pub fn new() -> Self {
        Self::default()
    }
}

impl StorageArea for MemoryArea {
    fn set_item(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
        match self.entries.iter_mut().find(|e| e.key == key) {
            Some(entry) => entry.value = value.to_string(),
            None => self.entries.push(Entry::new(key, value)),
        }
        Ok(())
    }

    fn get_item(&self, key: &str) -> Result<Option<String>, StoreError> {
        Ok(self
            .entries
            .iter()
            .find(|e| e.key == key)
            .map(|e| e.value.clone()))
    }

    fn remove_item(&mut self, key: &str) -> Result<(), StoreError> {
        self.entries.retain(|e| e.key != key);
        Ok(())
    }

    fn clear(&mut self) -> Result<(), StoreError> {
        self.entries.clear();
        Ok(())
    }

    fn len(&self) -> usize {
        self.entries.len()
    }

    fn key(&self, index: usize) -> Option<&str> {
        self.entries.get(index).map(|e| e.key.as_str())
    }
}
