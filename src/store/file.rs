//! File-backed storage area with atomic JSON snapshots.
//!
//! The whole area is rewritten to disk after every mutation: the snapshot is
//! serialized to a temporary file in the same directory and renamed over the
//! target path, so a crash mid-write leaves the previous snapshot intact.

use std::io::{self, Write};
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::logging::{debug, error, trace};

use super::area::StorageArea;
use super::error::StoreError;
use super::types::Entry;

/// Current snapshot format version.
/// Increment this when changing the on-disk layout.
/// Opening a snapshot with a different version is rejected.
const SNAPSHOT_VERSION: u32 = 1;

#[derive(Serialize)]
struct SnapshotOut<'a> {
    version: u32,
    entries: &'a [Entry],
}

#[derive(Deserialize)]
struct Snapshot {
    version: u32,
    entries: Vec<Entry>,
}

/// A persistent, insertion-ordered storage area backed by a snapshot file.
///
/// Entries live in memory; every mutation persists the full snapshot before
/// returning. Reads never touch the disk after [`open`](Self::open).
///
/// # Example
///
/// ```ignore
/// use duostore::FileArea;
///
/// let mut area = FileArea::open("app-state.json")?;
/// area.set_item("theme", "\"dark\"")?;
/// ```
#[derive(Debug)]
pub struct FileArea {
    path: PathBuf,
    entries: Vec<Entry>,
}

impl FileArea {
    /// Open the area at `path`, loading the snapshot if one exists.
    ///
    /// A missing file yields an empty area; the snapshot is first written
    /// on the first mutation.
    pub fn open(path: impl AsRef<Path>) -> Result<Self, StoreError> {
        let path = path.as_ref().to_path_buf();
        debug!(path = %path.display(), "opening file area");

        let entries = match std::fs::read_to_string(&path) {
            Ok(text) => {
                let snapshot: Snapshot = serde_json::from_str(&text)?;
                if snapshot.version != SNAPSHOT_VERSION {
                    error!(
                        stored_version = snapshot.version,
                        expected_version = SNAPSHOT_VERSION,
                        "snapshot version mismatch"
                    );
                    return Err(StoreError::SnapshotVersion {
                        stored: snapshot.version,
                        current: SNAPSHOT_VERSION,
                    });
                }
                snapshot.entries
            }
            Err(err) if err.kind() == io::ErrorKind::NotFound => Vec::new(),
            Err(err) => return Err(StoreError::Io(err)),
        };

        debug!(path = %path.display(), entries = entries.len(), "file area loaded");
        Ok(Self { path, entries })
    }

    /// Path of the snapshot file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn persist(&self) -> Result<(), StoreError> {
        let snapshot = SnapshotOut {
            version: SNAPSHOT_VERSION,
            entries: &self.entries,
        };
        let text = serde_json::to_string(&snapshot)?;

        let dir = self
            .path
            .parent()
            .filter(|p| !p.as_os_str().is_empty())
            .unwrap_or_else(|| Path::new("."));
        let mut tmp = tempfile::NamedTempFile::new_in(dir)?;
        tmp.write_all(text.as_bytes())?;
        tmp.persist(&self.path).map_err(|e| StoreError::Io(e.error))?;

        trace!(path = %self.path.display(), entries = self.entries.len(), "snapshot persisted");
        Ok(())
    }
}

impl StorageArea for FileArea {
    fn set_item(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
        match self.entries.iter_mut().find(|e| e.key == key) {
            Some(entry) => entry.value = value.to_string(),
            None => self.entries.push(Entry::new(key, value)),
        }
        self.persist()
    }

    fn get_item(&self, key: &str) -> Result<Option<String>, StoreError> {
        Ok(self
            .entries
            .iter()
            .find(|e| e.key == key)
            .map(|e| e.value.clone()))
    }

    fn remove_item(&mut self, key: &str) -> Result<(), StoreError> {
        let before = self.entries.len();
        self.entries.retain(|e| e.key != key);
        if self.entries.len() == before {
            // Nothing changed, skip the disk write
            return Ok(());
        }
        self.persist()
    }

    fn clear(&mut self) -> Result<(), StoreError> {
        self.entries.clear();
        self.persist()
    }

    fn len(&self) -> usize {
        self.entries.len()
    }

    fn key(&self, index: usize) -> Option<&str> {
        self.entries.get(index).map(|e| e.key.as_str())
    }
}
