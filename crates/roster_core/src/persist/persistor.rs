//! Whole-state blob persistence.
//!
//! Blob layout under `persist:<key>`:
//! `{ "students": [...], "_persist": { "version": N } }`

use crate::model::student::{Student, StudentId};
use crate::persist::storage::{KeyValueStorage, StorageError};
use crate::store::reducer::StudentState;
use log::{info, warn};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::time::Instant;

/// Default logical key of the roster blob.
pub const DEFAULT_PERSIST_KEY: &str = "root";
/// Version tag written into every blob.
pub const PERSIST_VERSION: u32 = 1;
const KEY_PREFIX: &str = "persist:";

pub type PersistResult<T> = Result<T, PersistError>;

/// Strict load/flush failure. `rehydrate` swallows these.
#[derive(Debug)]
pub enum PersistError {
    Storage(StorageError),
    Serialization(serde_json::Error),
    /// Blob parsed but binds two records to one id.
    DuplicateId(StudentId),
}

impl Display for PersistError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Storage(err) => write!(f, "{err}"),
            Self::Serialization(err) => write!(f, "invalid persisted roster: {err}"),
            Self::DuplicateId(id) => write!(f, "persisted roster repeats student id {id}"),
        }
    }
}

impl Error for PersistError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Storage(err) => Some(err),
            Self::Serialization(err) => Some(err),
            Self::DuplicateId(_) => None,
        }
    }
}

impl From<StorageError> for PersistError {
    fn from(value: StorageError) -> Self {
        Self::Storage(value)
    }
}

impl From<serde_json::Error> for PersistError {
    fn from(value: serde_json::Error) -> Self {
        Self::Serialization(value)
    }
}

/// Where and how the blob is written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PersistConfig {
    /// Logical key; stored as `persist:<key>`.
    pub key: String,
    /// Version tag written on flush.
    pub version: u32,
}

impl Default for PersistConfig {
    fn default() -> Self {
        Self {
            key: DEFAULT_PERSIST_KEY.to_string(),
            version: PERSIST_VERSION,
        }
    }
}

impl PersistConfig {
    /// Full storage key of the blob.
    pub fn storage_key(&self) -> String {
        format!("{KEY_PREFIX}{}", self.key)
    }
}

#[derive(Debug, Serialize, Deserialize)]
struct PersistMeta {
    version: u32,
}

#[derive(Serialize)]
struct PersistedRosterRef<'a> {
    students: &'a [Student],
    #[serde(rename = "_persist")]
    persist: PersistMeta,
}

#[derive(Deserialize)]
struct PersistedRoster {
    #[serde(default)]
    students: Vec<Student>,
    #[serde(rename = "_persist")]
    persist: Option<PersistMeta>,
}

/// Serializes store state into `S` and reads it back.
pub struct Persistor<S: KeyValueStorage> {
    storage: S,
    config: PersistConfig,
}

impl<S: KeyValueStorage> Persistor<S> {
    pub fn new(storage: S, config: PersistConfig) -> Self {
        Self { storage, config }
    }

    pub fn config(&self) -> &PersistConfig {
        &self.config
    }

    /// Releases the underlying storage.
    pub fn into_storage(self) -> S {
        self.storage
    }

    /// Serializes and writes the whole state.
    pub fn flush(&mut self, state: &StudentState) -> PersistResult<()> {
        let started_at = Instant::now();
        let blob = serde_json::to_string(&PersistedRosterRef {
            students: &state.students,
            persist: PersistMeta {
                version: self.config.version,
            },
        })?;
        self.storage.set_item(&self.config.storage_key(), &blob)?;
        info!(
            "event=persist_flush module=persist status=ok count={} bytes={} duration_ms={}",
            state.students.len(),
            blob.len(),
            started_at.elapsed().as_millis()
        );
        Ok(())
    }

    /// Strictly reads the blob.
    ///
    /// Returns `Ok(None)` when nothing has been persisted yet.
    pub fn load(&self) -> PersistResult<Option<StudentState>> {
        let Some(blob) = self.storage.get_item(&self.config.storage_key())? else {
            return Ok(None);
        };

        let persisted: PersistedRoster = serde_json::from_str(&blob)?;
        let mut seen = HashSet::with_capacity(persisted.students.len());
        for student in &persisted.students {
            if !seen.insert(student.id) {
                return Err(PersistError::DuplicateId(student.id));
            }
        }

        let stored_version = persisted.persist.map(|meta| meta.version);
        if stored_version != Some(self.config.version) {
            warn!(
                "event=persist_rehydrate module=persist status=version_mismatch stored={:?} expected={}",
                stored_version, self.config.version
            );
        }

        Ok(Some(StudentState::new(persisted.students)))
    }

    /// Best-effort startup read.
    ///
    /// Absent, unreadable or malformed state yields an empty collection.
    pub fn rehydrate(&self) -> StudentState {
        match self.load() {
            Ok(Some(state)) => {
                info!(
                    "event=persist_rehydrate module=persist status=ok count={}",
                    state.students.len()
                );
                state
            }
            Ok(None) => {
                info!("event=persist_rehydrate module=persist status=empty");
                StudentState::default()
            }
            Err(err) => {
                warn!(
                    "event=persist_rehydrate module=persist status=reset error={}",
                    err
                );
                StudentState::default()
            }
        }
    }

    /// Removes the persisted blob.
    pub fn purge(&mut self) -> PersistResult<()> {
        self.storage.remove_item(&self.config.storage_key())?;
        info!("event=persist_purge module=persist status=ok");
        Ok(())
    }
}
