//! Explicit roster state container.
//!
//! # Responsibility
//! - Build the store from persisted state once at startup.
//! - Route view-layer actions (submit, delete, filter) to the store.
//! - Flush every real change through the persistor.
//!
//! # Invariants
//! - Flushes are fire-and-forget: failures are logged, never returned from
//!   mutations.
//! - `close` performs a final flush and reports its outcome.

use crate::config::RosterConfig;
use crate::form::{submit_form, FormState, SubmitOutcome};
use crate::model::student::{Student, StudentId};
use crate::persist::{
    KeyValueStorage, MemoryStorage, PersistConfig, PersistResult, Persistor, SqliteStorage,
    StorageError,
};
use crate::search::filter::{filter_students, student_rows, StudentRow};
use crate::store::student_store::StudentStore;
use chrono::{Local, NaiveDate};
use log::{error, info};
use std::error::Error;
use std::fmt::{Display, Formatter};

pub type SessionResult<T> = Result<T, SessionError>;

/// Failure to open a durable session.
#[derive(Debug)]
pub enum SessionError {
    Io(std::io::Error),
    Storage(StorageError),
}

impl Display for SessionError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io(err) => write!(f, "failed to prepare data directory: {err}"),
            Self::Storage(err) => write!(f, "{err}"),
        }
    }
}

impl Error for SessionError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Io(err) => Some(err),
            Self::Storage(err) => Some(err),
        }
    }
}

impl From<std::io::Error> for SessionError {
    fn from(value: std::io::Error) -> Self {
        Self::Io(value)
    }
}

impl From<StorageError> for SessionError {
    fn from(value: StorageError) -> Self {
        Self::Storage(value)
    }
}

/// One running roster: store plus persistence.
pub struct RosterSession<S: KeyValueStorage> {
    store: StudentStore,
    persistor: Persistor<S>,
}

impl RosterSession<SqliteStorage> {
    /// Opens the durable roster under `config.data_dir`.
    ///
    /// # Errors
    /// - Failing to create the data directory or open/migrate the SQLite
    ///   file (corrupt file, newer schema) is returned to the caller.
    /// - Only blob read and parse failures after opening are swallowed;
    ///   those reset the roster to empty.
    pub fn open(config: &RosterConfig) -> SessionResult<Self> {
        std::fs::create_dir_all(&config.data_dir)?;
        let storage = SqliteStorage::open(config.db_path())?;
        Ok(Self::with_persistor(Persistor::new(
            storage,
            config.persist.clone(),
        )))
    }
}

impl RosterSession<MemoryStorage> {
    /// Ephemeral roster starting empty.
    pub fn in_memory() -> Self {
        Self::with_persistor(Persistor::new(
            MemoryStorage::new(),
            PersistConfig::default(),
        ))
    }
}

impl<S: KeyValueStorage> RosterSession<S> {
    /// Rehydrates the store from `persistor`.
    pub fn with_persistor(persistor: Persistor<S>) -> Self {
        let store = StudentStore::new(persistor.rehydrate());
        info!(
            "event=session_open module=session status=ok count={}",
            store.select_all().len()
        );
        Self { store, persistor }
    }

    pub fn store(&self) -> &StudentStore {
        &self.store
    }

    /// Current ordered collection.
    pub fn students(&self) -> &[Student] {
        self.store.select_all()
    }

    pub fn find(&self, id: StudentId) -> Option<&Student> {
        self.store.find(id)
    }

    /// Records whose name or email contains `query`, ignoring case.
    pub fn filter(&self, query: &str) -> Vec<&Student> {
        filter_students(self.store.select_all(), query)
    }

    /// List-table rows for `query`.
    pub fn rows(&self, query: &str) -> Vec<StudentRow> {
        student_rows(self.store.select_all(), query)
    }

    /// Empty create form.
    pub fn new_form(&self) -> FormState {
        FormState::create()
    }

    /// Update form for `id`, or `None` when the record no longer exists.
    pub fn edit_form(&self, id: StudentId) -> Option<FormState> {
        self.store.find(id).map(FormState::edit)
    }

    /// Submits `form` using the local calendar date as "today".
    pub fn submit(&mut self, form: &mut FormState) -> SubmitOutcome {
        self.submit_on(form, Local::now().date_naive())
    }

    /// Submits `form` against an explicit "today".
    pub fn submit_on(&mut self, form: &mut FormState, today: NaiveDate) -> SubmitOutcome {
        let before = self.store.revision();
        let outcome = submit_form(form, &mut self.store, today);
        self.persist_if_changed(before);
        outcome
    }

    /// Deletes `id`; returns whether a record was removed.
    pub fn delete(&mut self, id: StudentId) -> bool {
        let before = self.store.revision();
        let removed = self.store.delete(id);
        self.persist_if_changed(before);
        removed
    }

    /// Final flush; returns the storage for reuse.
    pub fn close(mut self) -> PersistResult<S> {
        self.persistor.flush(&self.store.state())?;
        info!("event=session_close module=session status=ok");
        Ok(self.persistor.into_storage())
    }

    fn persist_if_changed(&mut self, before_revision: u64) {
        if self.store.revision() == before_revision {
            return;
        }
        if let Err(err) = self.persistor.flush(&self.store.state()) {
            error!(
                "event=persist_flush module=session status=error revision={} error={}",
                self.store.revision(),
                err
            );
        }
    }
}
