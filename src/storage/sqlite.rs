/// SQLite implementation of the key-value storage interface
///
/// This module provides the concrete SQLite adapter. Everything lives in one
/// app_state table keyed by string, so there is no schema to migrate.

use std::path::{Path, PathBuf};

use rusqlite::{params, Connection};

use crate::storage::{KeyValueStorage, StorageError};

/// File name used inside the chosen database directory
const DB_FILE_NAME: &str = "habits.db";

/// SQLite-based storage adapter
///
/// Holds a connection to the database file and implements the load/save
/// operations defined by the KeyValueStorage trait.
pub struct SqliteStorage {
    conn: Connection,
}

impl SqliteStorage {
    /// Create a new SQLite storage instance at the given path
    ///
    /// Opens the database file and creates the app_state table if it does
    /// not exist yet.
    pub fn new(db_path: PathBuf) -> Result<Self, StorageError> {
        let conn = Connection::open(&db_path)
            .map_err(|e| StorageError::Connection(format!("Failed to open database: {}", e)))?;

        Self::initialize(&conn)?;

        tracing::info!("SQLite storage initialized at: {:?}", db_path);

        Ok(Self { conn })
    }

    /// Create a storage instance backed by an in-memory database
    ///
    /// State lives only as long as the connection; mainly useful in tests.
    pub fn in_memory() -> Result<Self, StorageError> {
        let conn = Connection::open_in_memory()
            .map_err(|e| StorageError::Connection(format!("Failed to open database: {}", e)))?;

        Self::initialize(&conn)?;

        Ok(Self { conn })
    }

    /// Create a storage instance at the platform default location
    ///
    /// Tries the user's home, data, and config directories in order, falling
    /// back to the current directory and finally a temp directory, taking the
    /// first candidate that is actually writable.
    pub fn open_default() -> Result<Self, StorageError> {
        let db_path = default_database_path()?;
        Self::new(db_path)
    }

    fn initialize(conn: &Connection) -> Result<(), StorageError> {
        conn.execute(
            "CREATE TABLE IF NOT EXISTS app_state (
                key TEXT PRIMARY KEY,
                value TEXT NOT NULL
            )",
            [],
        )?;
        Ok(())
    }
}

impl KeyValueStorage for SqliteStorage {
    /// Load the value stored under a key
    fn load(&self, key: &str) -> Result<Option<String>, StorageError> {
        let result = self.conn.query_row(
            "SELECT value FROM app_state WHERE key = ?1",
            params![key],
            |row| row.get::<_, String>(0),
        );

        match result {
            Ok(value) => Ok(Some(value)),
            Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
            Err(e) => Err(StorageError::Query(e)),
        }
    }

    /// Store a value under a key, replacing any previous value
    fn save(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.conn.execute(
            "INSERT OR REPLACE INTO app_state (key, value) VALUES (?1, ?2)",
            params![key, value],
        )?;

        tracing::debug!("Saved {} bytes under key: {}", value.len(), key);
        Ok(())
    }
}

/// Pick a writable location for the database file
///
/// Mirrors the preference order users expect: home directory first, then the
/// platform data/config directories, then the working directory. Each
/// candidate is probed with a throwaway write before being accepted.
fn default_database_path() -> Result<PathBuf, StorageError> {
    let candidates = [
        dirs::home_dir().map(|home| home.join(".habit_pulse")),
        dirs::data_dir().map(|data| data.join("habit_pulse")),
        dirs::config_dir().map(|config| config.join("habit_pulse")),
        std::env::current_dir().ok().map(|cwd| cwd.join(".habit_pulse")),
    ];

    for dir in candidates.into_iter().flatten() {
        if is_writable_dir(&dir) {
            return Ok(dir.join(DB_FILE_NAME));
        }
    }

    // Last resort: a temp directory that at least lets the app start
    let fallback = std::env::temp_dir().join("habit_pulse");
    std::fs::create_dir_all(&fallback)
        .map_err(|e| StorageError::Connection(format!("No writable database location: {}", e)))?;

    tracing::warn!("Using temporary directory for database: {}", fallback.display());
    Ok(fallback.join(DB_FILE_NAME))
}

/// Create the directory if needed and confirm a file can actually be written
fn is_writable_dir(dir: &Path) -> bool {
    if std::fs::create_dir_all(dir).is_err() {
        return false;
    }

    let probe = dir.join(".write_probe");
    if std::fs::write(&probe, b"ok").is_err() {
        return false;
    }
    let _ = std::fs::remove_file(&probe);
    true
}
