//! Create/update form state.
//!
//! # Responsibility
//! - Hold every field's current value, error and touched flag in one
//!   controlled-value struct.
//! - Update that struct only through the pure `form_reducer`.
//! - Gate store mutations behind full validation on submit.
//!
//! # Invariants
//! - A rejected submit never mutates the store.
//! - Create-mode submits always assign an id not present in the store.

pub mod state;
pub mod submit;

pub use state::{form_reducer, FormEvent, FormMode, FormState, FormStatus};
pub use submit::{submit_form, SubmitOutcome};
