/// In-memory implementation of the key-value storage interface
///
/// Backs the store with a plain map. Nothing survives the process; useful for
/// tests and for embedding the model without a database file.

use std::collections::HashMap;
use std::sync::{Mutex, PoisonError};

use crate::storage::{KeyValueStorage, StorageError};

/// Map-backed storage adapter
#[derive(Debug, Default)]
pub struct MemoryStorage {
    entries: Mutex<HashMap<String, String>>,
}

impl MemoryStorage {
    /// Create an empty in-memory storage
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of keys currently stored (useful in tests)
    pub fn len(&self) -> usize {
        self.lock_entries().len()
    }

    /// Whether nothing has been stored yet
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn lock_entries(&self) -> std::sync::MutexGuard<'_, HashMap<String, String>> {
        // A panic mid-insert cannot corrupt a String map, so recover the guard
        self.entries.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl KeyValueStorage for MemoryStorage {
    fn load(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.lock_entries().get(key).cloned())
    }

    fn save(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.lock_entries().insert(key.to_string(), value.to_string());
        Ok(())
    }
}
