//! The storage facade over the persistent and session areas.

use crate::codec::{self, Value};
use crate::logging::{debug, trace};

use super::area::{MemoryArea, StorageArea};
use super::error::StoreError;
#[cfg(feature = "persist")]
use super::file::FileArea;

/// Selects which storage area an operation targets.
///
/// The two scopes are disjoint namespaces; every operation targets exactly
/// one of them. The persistent scope is the default.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Scope {
    /// The persistent area.
    #[default]
    Persistent,
    /// The session-scoped area, discarded when the store is dropped.
    Session,
}

/// Scoped key-value storage for structured values.
///
/// `Store` pairs one persistent and one session area behind a uniform
/// surface, encoding values through the codec on write and decoding on
/// read. Set and map containers keep their type across the round trip.
///
/// # Example
///
/// ```ignore
/// use duostore::{Scope, Store, Value};
///
/// let mut store = Store::open("app-state.json")?;
///
/// store.set("visits", &Value::from(3), Scope::Persistent)?;
/// store.set("draft", &Value::from("wip"), Scope::Session)?;
///
/// if let Some(visits) = store.get("visits", Scope::Persistent)? {
///     println!("visits: {visits}");
/// }
/// ```
///
/// # Failure semantics
///
/// Every operation is a single synchronous attempt; backend errors
/// propagate as [`StoreError`] with no retries and no cross-operation
/// atomicity. An out-of-range index in [`key_name_at`](Self::key_name_at)
/// is `None`, not an error.
pub struct Store {
    persistent: Box<dyn StorageArea>,
    session: Box<dyn StorageArea>,
}

impl Store {
    /// Create a store where both scopes are volatile in-memory areas.
    pub fn in_memory() -> Self {
        Self {
            persistent: Box::new(MemoryArea::new()),
            session: Box::new(MemoryArea::new()),
        }
    }

    /// Open a store whose persistent scope is backed by the snapshot file
    /// at `path`. The session scope is always in-memory.
    #[cfg(feature = "persist")]
    pub fn open(path: impl AsRef<std::path::Path>) -> Result<Self, StoreError> {
        let persistent = FileArea::open(path)?;
        Ok(Self {
            persistent: Box::new(persistent),
            session: Box::new(MemoryArea::new()),
        })
    }

    /// Build a store from explicit area implementations.
    pub fn with_areas(persistent: Box<dyn StorageArea>, session: Box<dyn StorageArea>) -> Self {
        Self {
            persistent,
            session,
        }
    }

    fn area(&self, scope: Scope) -> &dyn StorageArea {
        match scope {
            Scope::Persistent => self.persistent.as_ref(),
            Scope::Session => self.session.as_ref(),
        }
    }

    fn area_mut(&mut self, scope: Scope) -> &mut dyn StorageArea {
        match scope {
            Scope::Persistent => self.persistent.as_mut(),
            Scope::Session => self.session.as_mut(),
        }
    }

    /// Encode `value` and write it under `key`, creating or overwriting
    /// the entry.
    pub fn set(&mut self, key: &str, value: &Value, scope: Scope) -> Result<(), StoreError> {
        let text = codec::encode(value)?;
        debug!(key = key, scope = ?scope, "set entry");
        self.area_mut(scope).set_item(key, &text)
    }

    /// Read and decode the value under `key`, or `None` if absent.
    ///
    /// Entry text that is not valid JSON decodes to itself as a plain
    /// string (see [`codec::decode`]).
    pub fn get(&self, key: &str, scope: Scope) -> Result<Option<Value>, StoreError> {
        trace!(key = key, scope = ?scope, "get entry");
        Ok(self
            .area(scope)
            .get_item(key)?
            .map(|text| codec::decode(&text)))
    }

    /// Read the stored entry text without decoding it.
    pub fn get_raw(&self, key: &str, scope: Scope) -> Result<Option<String>, StoreError> {
        self.area(scope).get_item(key)
    }

    /// Delete the entry for `key` if present. Absent keys are not an error.
    pub fn remove(&mut self, key: &str, scope: Scope) -> Result<(), StoreError> {
        debug!(key = key, scope = ?scope, "remove entry");
        self.area_mut(scope).remove_item(key)
    }

    /// Delete every entry in the selected scope.
    pub fn clear_all(&mut self, scope: Scope) -> Result<(), StoreError> {
        debug!(scope = ?scope, "clear area");
        self.area_mut(scope).clear()
    }

    /// Number of entries currently held by the selected scope.
    pub fn current_length(&self, scope: Scope) -> usize {
        self.area(scope).len()
    }

    /// Key name at the given zero-based position in the scope's current
    /// insertion-order key sequence, or `None` if out of range.
    ///
    /// This is a snapshot query; positions are not stable across
    /// intervening `set`/`remove` calls.
    pub fn key_name_at(&self, index: usize, scope: Scope) -> Option<String> {
        self.area(scope).key(index).map(str::to_string)
    }

    /// Returns `true` if the selected scope holds an entry for `key`.
    pub fn contains_key(&self, key: &str, scope: Scope) -> Result<bool, StoreError> {
        Ok(self.area(scope).get_item(key)?.is_some())
    }

    /// Snapshot of the scope's keys in insertion order.
    pub fn keys(&self, scope: Scope) -> Vec<String> {
        let area = self.area(scope);
        (0..area.len())
            .filter_map(|i| area.key(i))
            .map(str::to_string)
            .collect()
    }
}
