//! Data types for the storage module.

use serde::{Deserialize, Serialize};

/// A single key/encoded-text pair held by a storage area.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Entry {
    /// Entry key, unique within its area.
    pub key: String,

    /// Encoded value text as produced by the codec.
    pub value: String,
}

impl Entry {
    /// Create a new entry.
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
        }
    }
}
