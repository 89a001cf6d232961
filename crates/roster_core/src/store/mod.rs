//! In-memory student store.
//!
//! # Responsibility
//! - Hold the authoritative ordered collection of student records.
//! - Apply add/update/delete mutations through a pure reducer.
//!
//! # Invariants
//! - Mutations never modify a published state value in place; a changed
//!   collection is always a new `Arc`.
//! - A mutation that matches nothing returns the previous `Arc` unchanged.
//! - Store operations are total and never return errors.

pub mod reducer;
pub mod student_store;
