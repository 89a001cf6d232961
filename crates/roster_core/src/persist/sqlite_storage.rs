//! SQLite-backed key-value storage.
//!
//! # Invariants
//! - One row per key in `kv_store`; writes are upserts.
//! - The connection is migrated before the first read or write.

use crate::db::{open_db, open_db_in_memory};
use crate::persist::storage::{KeyValueStorage, StorageResult};
use rusqlite::{params, Connection, OptionalExtension};
use std::path::Path;

/// Durable storage over a single SQLite database.
pub struct SqliteStorage {
    conn: Connection,
}

impl SqliteStorage {
    /// Opens (or creates) the database at `path`.
    pub fn open(path: impl AsRef<Path>) -> StorageResult<Self> {
        Ok(Self {
            conn: open_db(path)?,
        })
    }

    /// Opens a private in-memory database.
    pub fn in_memory() -> StorageResult<Self> {
        Ok(Self {
            conn: open_db_in_memory()?,
        })
    }

    /// Wraps a connection already returned by `open_db*`.
    pub fn new(conn: Connection) -> Self {
        Self { conn }
    }

    pub fn connection(&self) -> &Connection {
        &self.conn
    }
}

impl KeyValueStorage for SqliteStorage {
    fn get_item(&self, key: &str) -> StorageResult<Option<String>> {
        let value = self
            .conn
            .query_row(
                "SELECT value FROM kv_store WHERE key = ?1;",
                params![key],
                |row| row.get::<_, String>(0),
            )
            .optional()?;
        Ok(value)
    }

    fn set_item(&mut self, key: &str, value: &str) -> StorageResult<()> {
        self.conn.execute(
            "INSERT INTO kv_store (key, value) VALUES (?1, ?2)
             ON CONFLICT(key) DO UPDATE SET
                value = excluded.value,
                updated_at = (strftime('%s', 'now') * 1000);",
            params![key, value],
        )?;
        Ok(())
    }

    fn remove_item(&mut self, key: &str) -> StorageResult<()> {
        self.conn.execute("DELETE FROM kv_store WHERE key = ?1;", params![key])?;
        Ok(())
    }
}
