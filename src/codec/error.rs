//! Error types for the codec module.

use thiserror::Error;

/// Errors that can occur while encoding a value.
///
/// Decoding never fails: unparseable text falls back to a plain string
/// (see [`decode`](super::decode)).
#[derive(Error, Debug)]
pub enum CodecError {
    #[error("serialization failed: {0}")]
    Serialize(#[from] serde_json::Error),
}
