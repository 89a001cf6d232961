//! Key-value storage contract and the in-memory implementation.

use crate::db::DbError;
use std::collections::HashMap;
use std::error::Error;
use std::fmt::{Display, Formatter};

pub type StorageResult<T> = Result<T, StorageError>;

/// Failure of the underlying key-value backend.
#[derive(Debug)]
pub enum StorageError {
    Db(DbError),
}

impl Display for StorageError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Db(err) => write!(f, "storage backend error: {err}"),
        }
    }
}

impl Error for StorageError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Db(err) => Some(err),
        }
    }
}

impl From<DbError> for StorageError {
    fn from(value: DbError) -> Self {
        Self::Db(value)
    }
}

impl From<rusqlite::Error> for StorageError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Db(DbError::Sqlite(value))
    }
}

/// String-to-string local store, modeled on browser local storage.
pub trait KeyValueStorage {
    fn get_item(&self, key: &str) -> StorageResult<Option<String>>;
    fn set_item(&mut self, key: &str, value: &str) -> StorageResult<()>;
    fn remove_item(&mut self, key: &str) -> StorageResult<()>;
}

/// Process-local storage; contents are lost when dropped.
#[derive(Debug, Clone, Default)]
pub struct MemoryStorage {
    items: HashMap<String, String>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStorage for MemoryStorage {
    fn get_item(&self, key: &str) -> StorageResult<Option<String>> {
        Ok(self.items.get(key).cloned())
    }

    fn set_item(&mut self, key: &str, value: &str) -> StorageResult<()> {
        self.items.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove_item(&mut self, key: &str) -> StorageResult<()> {
        self.items.remove(key);
        Ok(())
    }
}
