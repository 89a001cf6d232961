//! Student store container.
//!
//! # Responsibility
//! - Own the current published `StudentState`.
//! - Route every mutation through `reduce` and track real changes.
//!
//! # Invariants
//! - `revision` increases by exactly one per mutation that changed state.
//! - `select_all` order is insertion order.

use crate::model::student::{Student, StudentId};
use crate::store::reducer::{reduce, StudentAction, StudentState};
use log::debug;
use std::sync::Arc;

/// Authoritative in-memory student collection.
#[derive(Debug, Default)]
pub struct StudentStore {
    state: Arc<StudentState>,
    revision: u64,
}

impl StudentStore {
    /// Creates a store seeded with `initial` (usually rehydrated state).
    pub fn new(initial: StudentState) -> Self {
        Self {
            state: Arc::new(initial),
            revision: 0,
        }
    }

    /// Applies one action.
    ///
    /// Returns `true` when the collection changed.
    pub fn dispatch(&mut self, action: StudentAction) -> bool {
        let action_name = action_name(&action);
        let next = reduce(&self.state, action);
        if Arc::ptr_eq(&next, &self.state) {
            debug!("event=store_dispatch module=store status=noop action={action_name}");
            return false;
        }

        self.state = next;
        self.revision += 1;
        debug!(
            "event=store_dispatch module=store status=ok action={} revision={} count={}",
            action_name,
            self.revision,
            self.state.students.len()
        );
        true
    }

    /// Appends `student` at the end of the collection.
    pub fn add(&mut self, student: Student) -> bool {
        self.dispatch(StudentAction::Add(student))
    }

    /// Replaces the record bound to `id`; no-op when `id` is missing.
    pub fn update(&mut self, id: StudentId, updated: Student) -> bool {
        self.dispatch(StudentAction::Update { id, updated })
    }

    /// Removes the record bound to `id`; no-op when `id` is missing.
    pub fn delete(&mut self, id: StudentId) -> bool {
        self.dispatch(StudentAction::Delete(id))
    }

    /// Returns the current ordered collection.
    pub fn select_all(&self) -> &[Student] {
        &self.state.students
    }

    /// Finds one record by id.
    pub fn find(&self, id: StudentId) -> Option<&Student> {
        self.state.students.iter().find(|student| student.id == id)
    }

    /// Returns the current published state value.
    pub fn state(&self) -> Arc<StudentState> {
        Arc::clone(&self.state)
    }

    /// Number of mutations that changed the collection since construction.
    pub fn revision(&self) -> u64 {
        self.revision
    }
}

fn action_name(action: &StudentAction) -> &'static str {
    match action {
        StudentAction::Add(_) => "add",
        StudentAction::Update { .. } => "update",
        StudentAction::Delete(_) => "delete",
    }
}
