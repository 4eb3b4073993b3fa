//! Scoped key-value storage module.
//!
//! This module provides the [`Store`] facade over two disjoint storage
//! areas, one persistent and one session-scoped, selected per operation
//! via [`Scope`]. Values travel through the codec on the way in and out.

mod area;
mod error;
#[cfg(feature = "persist")]
mod file;
#[allow(clippy::module_inception)]
mod store;
mod types;

pub use area::{MemoryArea, StorageArea};
pub use error::StoreError;
#[cfg(feature = "persist")]
pub use file::FileArea;
pub use store::{Scope, Store};
pub use types::Entry;
