//! Roster domain model.
//!
//! # Responsibility
//! - Define canonical data structures used by core business logic.
//! - Keep the raw form shape (`StudentDraft`) separate from the validated
//!   record shape (`Student`).
//!
//! # Invariants
//! - Every record is identified by a stable `StudentId`.
//! - Absent optional fields are `None`, never empty strings.

pub mod draft;
pub mod student;
