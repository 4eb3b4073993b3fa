//! Error types for the storage module.

use thiserror::Error;

use crate::codec::CodecError;

/// Errors that can occur during storage operations.
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Snapshot format error: {0}")]
    Snapshot(#[from] serde_json::Error),

    #[error("Snapshot version mismatch: stored {stored}, current {current}")]
    SnapshotVersion { stored: u32, current: u32 },

    #[error("Codec error: {0}")]
    Codec(#[from] CodecError),
}
