//! Scoped key-value storage with container-preserving JSON encoding.
//!
//! This library wraps two disjoint key-value areas, one persistent and one
//! session-scoped, behind a single [`Store`] facade so callers can store and
//! retrieve structured values without serializing by hand. Values pass
//! through a JSON codec that keeps set and map containers typed across the
//! round trip by rewriting them into tagged records on the wire.
//!
//! # Quick Start
//!
//! ```ignore
//! use duostore::prelude::*;
//!
//! // Open a store backed by a snapshot file
//! let mut store = Store::open("app-state.json")?;
//!
//! // Store structured values in either scope
//! store.set("visits", &Value::from(3), Scope::Persistent)?;
//! store.set("tags", &Value::set_of(["a", "b"]), Scope::Persistent)?;
//! store.set("draft", &Value::from("wip"), Scope::Session)?;
//!
//! // Containers come back with their type intact
//! let tags = store.get("tags", Scope::Persistent)?;
//! assert!(tags.unwrap().as_set().is_some());
//! ```
//!
//! # Modules
//!
//! - [`codec`] - JSON encoding/decoding with container-type preservation
//! - [`store`] - The storage facade and its area implementations
//!
//! # Feature Flags
//!
//! - `persist` - Enable the file-backed persistent area (enabled by default)
//! - `logging` - Enable library-level tracing (consumers provide their own subscriber)
//! - `full` - Enable all features

pub mod codec;
mod logging;
pub mod store;

pub mod prelude;

mod error;

// Re-export the unified error type
pub use error::{Error, Result};

// Re-export codec types and operations at crate root for convenience
pub use codec::{decode, encode, is_parseable, CodecError, Number, Value};

// Re-export storage types at crate root for convenience
#[cfg(feature = "persist")]
pub use store::FileArea;
pub use store::{Entry, MemoryArea, Scope, StorageArea, Store, StoreError};
