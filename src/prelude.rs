//! Convenient re-exports for common usage patterns.
//!
//! This module provides a single import to bring all commonly used types
//! into scope.
//!
//! # Example
//!
//! ```ignore
//! use duostore::prelude::*;
//!
//! let mut store = Store::in_memory();
//! store.set("greeting", &Value::from("hi"), Scope::Persistent)?;
//! ```

// Unified error handling
pub use crate::error::{Error, Result};

// Codec types and operations
pub use crate::codec::{decode, encode, is_parseable, CodecError, Number, Value};

// Storage types
#[cfg(feature = "persist")]
pub use crate::store::FileArea;
pub use crate::store::{Entry, MemoryArea, Scope, StorageArea, Store, StoreError};
