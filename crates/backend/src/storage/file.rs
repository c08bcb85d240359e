//! File-backed storage backend.
//!
//! Persists the whole key-value map as a single JSON file, the way browser
//! storage keeps one blob per origin. This is what survives a "page reload"
//! (process restart) in the demo. Concurrent writers from other processes
//! are not coordinated; the last write wins.

use std::collections::HashMap;
use std::fs;
use std::path::PathBuf;
use std::sync::RwLock;

use super::{StorageBackend, StorageError};

/// Storage backend persisting to a single JSON map file.
#[derive(Debug)]
pub struct FileBackend {
    path: PathBuf,
    map: RwLock<HashMap<String, String>>,
}

impl FileBackend {
    /// Open a backend at `path`, loading any existing map.
    ///
    /// A missing file starts empty; an unparsable file is logged and
    /// discarded, matching the read-recovery contract of the layer above.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError::Io`] if the parent directory cannot be
    /// created or an existing file cannot be read.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self, StorageError> {
        let path = path.into();
        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent)?;
        }

        let map = if path.exists() {
            let raw = fs::read_to_string(&path)?;
            match serde_json::from_str(&raw) {
                Ok(map) => map,
                Err(err) => {
                    tracing::warn!(path = %path.display(), error = %err, "discarding unparsable storage file");
                    HashMap::new()
                }
            }
        } else {
            HashMap::new()
        };

        Ok(Self {
            path,
            map: RwLock::new(map),
        })
    }

    /// Write the full map to disk via a temporary sibling and rename, so a
    /// crash mid-write never leaves a truncated file behind.
    fn persist(&self, map: &HashMap<String, String>) -> Result<(), StorageError> {
        let raw = serde_json::to_string_pretty(map)?;
        let tmp = self.path.with_extension("tmp");
        fs::write(&tmp, raw)?;
        fs::rename(&tmp, &self.path)?;
        Ok(())
    }
}

impl StorageBackend for FileBackend {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        let map = self.map.read().map_err(|_| StorageError::LockPoisoned)?;
        Ok(map.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        let mut map = self.map.write().map_err(|_| StorageError::LockPoisoned)?;
        map.insert(key.to_string(), value.to_string());
        self.persist(&map)
    }

    fn keys_with_prefix(&self, prefix: &str) -> Result<Vec<String>, StorageError> {
        let map = self.map.read().map_err(|_| StorageError::LockPoisoned)?;
        Ok(map
            .keys()
            .filter(|key| key.starts_with(prefix))
            .cloned()
            .collect())
    }
}
