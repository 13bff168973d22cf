//! SQLite-backed key-value store.
//!
//! One `settings` table with a primary-key column holds every persisted
//! entry. The store is single-writer, single-reader; a `Mutex` around the
//! connection is all the concurrency contract this crate needs.

use std::path::Path;
use std::sync::Mutex;

use rusqlite::{params, Connection, OptionalExtension};

use columna_core::errors::{ColumnaResult, StoreError};
use columna_core::KeyValueStore;

/// Map a rusqlite error into the workspace error type.
fn to_store_err(e: rusqlite::Error) -> columna_core::ColumnaError {
    StoreError::Sqlite {
        message: e.to_string(),
    }
    .into()
}

/// Durable key-value store over a single SQLite database file.
pub struct SqliteStore {
    conn: Mutex<Connection>,
}

impl SqliteStore {
    /// Open (creating if needed) the database at `path` and ensure the
    /// schema exists. Parent directories are created as well.
    pub fn open(path: &Path) -> ColumnaResult<Self> {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent).map_err(|e| StoreError::Io {
                    message: e.to_string(),
                })?;
            }
        }
        let conn = Connection::open(path).map_err(to_store_err)?;
        Self::init_schema(&conn)?;
        tracing::debug!("opened settings store at {}", path.display());
        Ok(Self {
            conn: Mutex::new(conn),
        })
    }

    /// Open an in-memory store (for testing). Contents do not survive drop.
    pub fn open_in_memory() -> ColumnaResult<Self> {
        let conn = Connection::open_in_memory().map_err(to_store_err)?;
        Self::init_schema(&conn)?;
        Ok(Self {
            conn: Mutex::new(conn),
        })
    }

    fn init_schema(conn: &Connection) -> ColumnaResult<()> {
        conn.execute(
            "CREATE TABLE IF NOT EXISTS settings (
                key   TEXT PRIMARY KEY,
                value TEXT NOT NULL
            )",
            [],
        )
        .map_err(to_store_err)?;
        Ok(())
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, Connection> {
        // A poisoned lock means a previous statement panicked mid-write;
        // the connection itself is still usable.
        self.conn.lock().unwrap_or_else(|p| p.into_inner())
    }
}

impl KeyValueStore for SqliteStore {
    fn get(&self, key: &str) -> ColumnaResult<Option<String>> {
        self.lock()
            .query_row(
                "SELECT value FROM settings WHERE key = ?1",
                params![key],
                |row| row.get(0),
            )
            .optional()
            .map_err(to_store_err)
    }

    fn set(&self, key: &str, value: &str) -> ColumnaResult<()> {
        self.lock()
            .execute(
                "INSERT INTO settings (key, value) VALUES (?1, ?2)
                 ON CONFLICT(key) DO UPDATE SET value = excluded.value",
                params![key, value],
            )
            .map_err(to_store_err)?;
        Ok(())
    }

    fn remove(&self, key: &str) -> ColumnaResult<()> {
        self.lock()
            .execute("DELETE FROM settings WHERE key = ?1", params![key])
            .map_err(to_store_err)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn set_get_remove_round_trip() {
        let store = SqliteStore::open_in_memory().unwrap();
        assert_eq!(store.get("serverIp").unwrap(), None);

        store.set("serverIp", "10.0.0.1").unwrap();
        assert_eq!(store.get("serverIp").unwrap(), Some("10.0.0.1".to_string()));

        store.set("serverIp", "10.0.0.2").unwrap();
        assert_eq!(store.get("serverIp").unwrap(), Some("10.0.0.2".to_string()));

        store.remove("serverIp").unwrap();
        assert_eq!(store.get("serverIp").unwrap(), None);
    }

    #[test]
    fn remove_missing_key_is_ok() {
        let store = SqliteStore::open_in_memory().unwrap();
        store.remove("nothing-here").unwrap();
    }

    #[test]
    fn sql_metacharacters_in_values_are_inert() {
        let store = SqliteStore::open_in_memory().unwrap();
        let hostile = "'; DROP TABLE settings; --";
        store.set("serverIp", hostile).unwrap();
        assert_eq!(store.get("serverIp").unwrap(), Some(hostile.to_string()));
    }
}
