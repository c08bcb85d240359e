//! Persistent key-value layer.
//!
//! [`JsonStore`] is the handle every engine receives: JSON-serialized
//! collections under namespaced string keys, mirroring the browser storage
//! a client-side demo persists into.
//!
//! # Keys
//!
//! - `cart:<userId>` - one cart per user, a JSON array of line items
//! - `orders` - the global order log, a JSON array of orders
//!
//! Reads never fail: a missing key, an unreadable backend, or unparsable
//! persisted JSON all resolve to the caller-supplied fallback. Writes
//! propagate errors - the file backend can genuinely fail where browser
//! storage could not.

pub mod file;
pub mod memory;

pub use file::FileBackend;
pub use memory::MemoryBackend;

use std::sync::Arc;

use serde::Serialize;
use serde::de::DeserializeOwned;
use thiserror::Error;

/// Errors that can occur in the storage layer.
#[derive(Debug, Error)]
pub enum StorageError {
    /// Underlying filesystem operation failed.
    #[error("storage I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Value could not be serialized to JSON.
    #[error("serialization error: {0}")]
    Serialize(#[from] serde_json::Error),

    /// A storage lock was poisoned by a panicking writer.
    #[error("storage lock poisoned")]
    LockPoisoned,
}

/// Raw string-keyed storage, the localStorage analogue.
///
/// Implementations are synchronous; the engines' single asynchronous
/// suspension point is the simulated round trip, not the storage access.
pub trait StorageBackend: Send + Sync {
    /// Get the raw value stored under `key`, if any.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError`] if the backend cannot be read.
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Store `value` under `key`, replacing any previous value.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError`] if the value cannot be persisted.
    fn set(&self, key: &str, value: &str) -> Result<(), StorageError>;

    /// List every stored key starting with `prefix`.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError`] if the backend cannot be read.
    fn keys_with_prefix(&self, prefix: &str) -> Result<Vec<String>, StorageError>;
}

/// JSON-typed view over a [`StorageBackend`].
///
/// Cheaply cloneable; clones share the same backend.
#[derive(Clone)]
pub struct JsonStore {
    backend: Arc<dyn StorageBackend>,
}

impl JsonStore {
    /// Create a store over the given backend.
    #[must_use]
    pub fn new(backend: Arc<dyn StorageBackend>) -> Self {
        Self { backend }
    }

    /// Create a store over a fresh in-memory backend.
    #[must_use]
    pub fn in_memory() -> Self {
        Self::new(Arc::new(MemoryBackend::new()))
    }

    /// Read the collection stored under `key`, or `fallback` if the key is
    /// absent or its value cannot be parsed.
    ///
    /// Corrupt persisted data is logged and discarded locally; it is never
    /// surfaced to the caller.
    pub fn read_or<T: DeserializeOwned>(&self, key: &str, fallback: T) -> T {
        match self.backend.get(key) {
            Ok(Some(raw)) => match serde_json::from_str(&raw) {
                Ok(value) => value,
                Err(err) => {
                    tracing::warn!(key, error = %err, "discarding unparsable persisted value");
                    fallback
                }
            },
            Ok(None) => fallback,
            Err(err) => {
                tracing::warn!(key, error = %err, "storage read failed, using fallback");
                fallback
            }
        }
    }

    /// Serialize `value` as JSON and store it under `key`.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError`] if serialization or the backend write fails.
    pub fn write<T: Serialize>(&self, key: &str, value: &T) -> Result<(), StorageError> {
        let raw = serde_json::to_string(value)?;
        self.backend.set(key, &raw)
    }

    /// List every stored key starting with `prefix`.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError`] if the backend cannot be read.
    pub fn keys_with_prefix(&self, prefix: &str) -> Result<Vec<String>, StorageError> {
        self.backend.keys_with_prefix(prefix)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_write_then_read_round_trips() {
        let store = JsonStore::in_memory();
        let items = vec!["a".to_string(), "b".to_string()];

        store.write("cart:user1", &items).expect("write");
        let back: Vec<String> = store.read_or("cart:user1", Vec::new());
        assert_eq!(back, items);
    }

    #[test]
    fn test_read_missing_key_returns_fallback() {
        let store = JsonStore::in_memory();
        let fallback = vec![42_i64];
        let value: Vec<i64> = store.read_or("never-written", fallback.clone());
        assert_eq!(value, fallback);
    }

    #[test]
    fn test_read_corrupt_value_returns_fallback() {
        let backend = Arc::new(MemoryBackend::new());
        backend
            .set("cart:user1", "{not json")
            .expect("raw set");

        let store = JsonStore::new(backend);
        let value: Vec<String> = store.read_or("cart:user1", Vec::new());
        assert!(value.is_empty());
    }

    #[test]
    fn test_keys_with_prefix_filters() {
        let store = JsonStore::in_memory();
        store.write("cart:user1", &Vec::<i64>::new()).expect("write");
        store.write("cart:user2", &Vec::<i64>::new()).expect("write");
        store.write("orders", &Vec::<i64>::new()).expect("write");

        let mut keys = store.keys_with_prefix("cart:").expect("keys");
        keys.sort();
        assert_eq!(keys, vec!["cart:user1", "cart:user2"]);
    }

    #[test]
    fn test_last_writer_wins() {
        let store = JsonStore::in_memory();
        store.write("key", &1_i64).expect("write");
        store.write("key", &2_i64).expect("write");
        assert_eq!(store.read_or("key", 0_i64), 2);
    }
}
