//! Durable key-value storage.
//!
//! All persistent state lives behind the [`KeyValueStore`] trait: a flat
//! string-to-string map with `get` and `set`. The production implementation
//! is [`Database`], a SQLite file with a single `kv` table accessed through
//! an r2d2 connection pool. [`MemoryStore`] backs unit tests.
//!
//! Writes are single-statement upserts, so each `set` is all-or-nothing:
//! a failed call leaves the previously stored value intact.

use crate::errors::{AppResult, StorageError};
use r2d2::Pool;
use r2d2_sqlite::SqliteConnectionManager;
use rusqlite::params;
use std::collections::HashMap;
use std::path::Path;
use std::sync::Mutex;
use tracing::{debug, info, warn};

/// A durable string-to-string map.
///
/// `set` must be atomic per call and must have completed (or failed
/// observably) by the time it returns.
pub trait KeyValueStore {
    /// Returns the stored value for `key`, or `None` if the key is absent.
    fn get(&self, key: &str) -> AppResult<Option<String>>;

    /// Stores `value` under `key`, replacing any previous value.
    fn set(&self, key: &str, value: &str) -> AppResult<()>;
}

impl<T: KeyValueStore + ?Sized> KeyValueStore for &T {
    fn get(&self, key: &str) -> AppResult<Option<String>> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &str) -> AppResult<()> {
        (**self).set(key, value)
    }
}

/// Type alias for a pooled SQLite connection.
pub type PooledConnection = r2d2::PooledConnection<SqliteConnectionManager>;

/// SQLite-backed key-value store.
///
/// The pool is capped at a single connection: the engine is a single-writer
/// design, and funneling every operation through one connection serializes
/// access without any further locking.
pub struct Database {
    pool: Pool<SqliteConnectionManager>,
}

impl Database {
    /// Opens or creates the database file and initializes the schema.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be opened or the schema cannot
    /// be created.
    pub fn open(db_path: &Path) -> AppResult<Self> {
        debug!("Opening database at: {:?}", db_path);
        let manager = SqliteConnectionManager::file(db_path);
        Self::from_manager(manager)
    }

    /// Opens a fresh in-memory database. Intended for tests.
    pub fn open_in_memory() -> AppResult<Self> {
        Self::from_manager(SqliteConnectionManager::memory())
    }

    fn from_manager(manager: SqliteConnectionManager) -> AppResult<Self> {
        let pool = Pool::builder()
            .max_size(1) // single writer
            .build(manager)
            .map_err(StorageError::Pool)?;

        let db = Database { pool };
        db.initialize_schema()?;
        info!("Database opened successfully");
        Ok(db)
    }

    /// Gets a connection from the pool.
    ///
    /// # Errors
    ///
    /// Returns an error if no connection is available.
    pub fn get_conn(&self) -> AppResult<PooledConnection> {
        self.pool
            .get()
            .map_err(|e| StorageError::Pool(e).into())
    }

    /// Creates the `kv` table if it does not exist. Idempotent.
    fn initialize_schema(&self) -> AppResult<()> {
        let conn = self.get_conn()?;
        conn.execute_batch(
            r#"
            CREATE TABLE IF NOT EXISTS kv (
                key TEXT PRIMARY KEY,
                value TEXT NOT NULL
            );
            "#,
        )
        .map_err(StorageError::Sqlite)?;
        debug!("Database schema initialized");
        Ok(())
    }
}

impl KeyValueStore for Database {
    fn get(&self, key: &str) -> AppResult<Option<String>> {
        let conn = self.get_conn()?;
        let result = conn.query_row(
            "SELECT value FROM kv WHERE key = ?1",
            params![key],
            |row| row.get(0),
        );

        match result {
            Ok(value) => Ok(Some(value)),
            Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
            Err(e) => Err(StorageError::Sqlite(e).into()),
        }
    }

    fn set(&self, key: &str, value: &str) -> AppResult<()> {
        let conn = self.get_conn()?;
        conn.execute(
            r#"
            INSERT INTO kv (key, value) VALUES (?1, ?2)
            ON CONFLICT(key) DO UPDATE SET value = excluded.value
            "#,
            params![key, value],
        )
        .map_err(StorageError::Sqlite)?;
        debug!("Persisted {} ({} bytes)", key, value.len());
        Ok(())
    }
}

/// In-memory key-value store for tests and ephemeral sessions.
///
/// # Examples
///
/// ```
/// use solace::storage::{KeyValueStore, MemoryStore};
///
/// let store = MemoryStore::new();
/// store.set("greeting", "hello").unwrap();
/// assert_eq!(store.get("greeting").unwrap(), Some("hello".to_string()));
/// assert_eq!(store.get("missing").unwrap(), None);
/// ```
#[derive(Debug, Default)]
pub struct MemoryStore {
    cells: Mutex<HashMap<String, String>>,
}

impl MemoryStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> AppResult<Option<String>> {
        let cells = self.cells.lock().expect("storage mutex poisoned");
        Ok(cells.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> AppResult<()> {
        let mut cells = self.cells.lock().expect("storage mutex poisoned");
        cells.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// Stores `value` under `key`, retrying once on failure.
///
/// Persistence failures are surfaced, not silently retried forever: one
/// immediate retry, then the error propagates to the caller.
///
/// # Errors
///
/// Returns the error from the second attempt if both attempts fail.
pub fn set_with_retry(store: &dyn KeyValueStore, key: &str, value: &str) -> AppResult<()> {
    if let Err(first) = store.set(key, value) {
        warn!("Persisting '{}' failed, retrying once: {}", key, first);
        store.set(key, value)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::AppError;
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[test]
    fn test_database_set_and_get() {
        let db = Database::open_in_memory().unwrap();

        assert_eq!(db.get("diaryPasscode").unwrap(), None);
        db.set("diaryPasscode", "1234").unwrap();
        assert_eq!(db.get("diaryPasscode").unwrap(), Some("1234".to_string()));
    }

    #[test]
    fn test_database_set_overwrites() {
        let db = Database::open_in_memory().unwrap();

        db.set("k", "first").unwrap();
        db.set("k", "second").unwrap();
        assert_eq!(db.get("k").unwrap(), Some("second".to_string()));
    }

    #[test]
    fn test_memory_store_round_trip() {
        let store = MemoryStore::new();
        store.set("a", "1").unwrap();
        store.set("a", "2").unwrap();
        assert_eq!(store.get("a").unwrap(), Some("2".to_string()));
        assert_eq!(store.get("b").unwrap(), None);
    }

    /// Store that fails a configurable number of `set` calls before working.
    struct FlakyStore {
        inner: MemoryStore,
        failures_left: AtomicUsize,
        attempts: AtomicUsize,
    }

    impl FlakyStore {
        fn failing(times: usize) -> Self {
            Self {
                inner: MemoryStore::new(),
                failures_left: AtomicUsize::new(times),
                attempts: AtomicUsize::new(0),
            }
        }
    }

    impl KeyValueStore for FlakyStore {
        fn get(&self, key: &str) -> AppResult<Option<String>> {
            self.inner.get(key)
        }

        fn set(&self, key: &str, value: &str) -> AppResult<()> {
            self.attempts.fetch_add(1, Ordering::SeqCst);
            if self
                .failures_left
                .fetch_update(Ordering::SeqCst, Ordering::SeqCst, |n| n.checked_sub(1))
                .is_ok()
            {
                return Err(AppError::Config("injected write failure".to_string()));
            }
            self.inner.set(key, value)
        }
    }

    #[test]
    fn test_set_with_retry_recovers_from_one_failure() {
        let store = FlakyStore::failing(1);
        set_with_retry(&store, "k", "v").unwrap();
        assert_eq!(store.attempts.load(Ordering::SeqCst), 2);
        assert_eq!(store.get("k").unwrap(), Some("v".to_string()));
    }

    #[test]
    fn test_set_with_retry_gives_up_after_second_failure() {
        let store = FlakyStore::failing(2);
        let result = set_with_retry(&store, "k", "v");
        assert!(result.is_err());
        assert_eq!(store.attempts.load(Ordering::SeqCst), 2);
        assert_eq!(store.get("k").unwrap(), None);
    }
}
