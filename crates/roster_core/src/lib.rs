//! Core domain logic for the student roster.
//! This crate is the single source of truth for roster invariants.

pub mod config;
pub mod db;
pub mod form;
pub mod logging;
pub mod model;
pub mod persist;
pub mod search;
pub mod session;
pub mod store;
pub mod validation;

pub use config::RosterConfig;
pub use form::{
    form_reducer, submit_form, FormEvent, FormMode, FormState, FormStatus, SubmitOutcome,
};
pub use logging::{default_log_level, init_logging, logging_status};
pub use model::draft::StudentDraft;
pub use model::student::{Student, StudentField, StudentId, StudentInput};
pub use persist::{
    KeyValueStorage, MemoryStorage, PersistConfig, PersistError, PersistResult, Persistor,
    SqliteStorage, StorageError, StorageResult,
};
pub use search::filter::{filter_students, student_rows, StudentRow};
pub use session::{RosterSession, SessionError, SessionResult};
pub use store::reducer::{reduce, StudentAction, StudentState};
pub use store::student_store::StudentStore;
pub use validation::{
    check_conflicts, validate_field, validate_fields, validate_submission, FieldErrors,
};

/// Minimal health-check API for early integration.
pub fn ping() -> &'static str {
    "pong"
}

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
