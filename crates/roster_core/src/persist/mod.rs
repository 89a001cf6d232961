//! Persistence adapter for roster state.
//!
//! # Responsibility
//! - Abstract a local key-value store behind `KeyValueStorage`.
//! - Serialize the whole state into one versioned blob under a fixed key.
//! - Rehydrate state at startup on a best-effort basis.
//!
//! # Invariants
//! - Flushing then rehydrating reproduces an equal collection.
//! - Rehydration never fails; unreadable state resets to empty.

pub mod persistor;
pub mod sqlite_storage;
pub mod storage;

pub use persistor::{PersistConfig, PersistError, PersistResult, Persistor};
pub use sqlite_storage::SqliteStorage;
pub use storage::{KeyValueStorage, MemoryStorage, StorageError, StorageResult};
