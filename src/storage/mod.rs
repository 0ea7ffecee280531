/// Storage layer for persisting application state
///
/// This module defines the key-value boundary the store persists through.
/// State is written as opaque text blobs under fixed keys, so adapters stay
/// trivial: SQLite for real installs, an in-memory map for tests.

pub mod memory;
pub mod sqlite;

// Re-export the adapter types
pub use memory::*;
pub use sqlite::*;

use thiserror::Error;

/// Key under which the serialized habit collection is stored
pub const HABITS_KEY: &str = "habits";

/// Key under which the profile image reference is stored
pub const PROFILE_IMAGE_KEY: &str = "profile_image";

/// Errors that can occur during storage operations
#[derive(Error, Debug)]
pub enum StorageError {
    #[error("Database connection error: {0}")]
    Connection(String),

    #[error("Database query error: {0}")]
    Query(#[from] rusqlite::Error),
}

/// Trait defining the key-value persistence boundary
///
/// Adapters only move opaque strings; serialization policy belongs to the
/// store. Keeping the interface this small is what lets the whole model stay
/// free of database concerns.
pub trait KeyValueStorage {
    /// Load the value stored under a key, or None if the key was never written
    fn load(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Store a value under a key, replacing any previous value
    fn save(&self, key: &str, value: &str) -> Result<(), StorageError>;
}
