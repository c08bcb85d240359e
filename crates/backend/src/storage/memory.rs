//! In-memory storage backend.

use std::collections::HashMap;
use std::sync::RwLock;

use super::{StorageBackend, StorageError};

/// Process-lifetime string map, the in-memory fake engines are tested
/// against. Contents vanish when the process exits.
#[derive(Debug, Default)]
pub struct MemoryBackend {
    map: RwLock<HashMap<String, String>>,
}

impl MemoryBackend {
    /// Create an empty backend.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl StorageBackend for MemoryBackend {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        let map = self.map.read().map_err(|_| StorageError::LockPoisoned)?;
        Ok(map.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        let mut map = self.map.write().map_err(|_| StorageError::LockPoisoned)?;
        map.insert(key.to_string(), value.to_string());
        Ok(())
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
