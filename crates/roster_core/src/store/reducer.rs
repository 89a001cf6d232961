//! Pure reducer over the student collection.

use crate::model::student::{Student, StudentId};
use std::sync::Arc;

/// Whole store state: the ordered student collection.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StudentState {
    /// Insertion order; updates keep their slot.
    pub students: Vec<Student>,
}

impl StudentState {
    /// Creates a state from an already ordered collection.
    pub fn new(students: Vec<Student>) -> Self {
        Self { students }
    }

    /// Returns the index of the record with `id`, if any.
    pub fn position(&self, id: StudentId) -> Option<usize> {
        self.students.iter().position(|student| student.id == id)
    }
}

/// The only ways the collection can change.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StudentAction {
    /// Appends a fully formed record. No uniqueness check at this layer.
    Add(Student),
    /// Replaces the record bound to `id` in place.
    Update { id: StudentId, updated: Student },
    /// Removes the record bound to `id`.
    Delete(StudentId),
}

/// Applies one action and returns the resulting state.
///
/// Returns a clone of `state` (same allocation) when the action is a no-op,
/// so callers can detect change with `Arc::ptr_eq`.
pub fn reduce(state: &Arc<StudentState>, action: StudentAction) -> Arc<StudentState> {
    match action {
        StudentAction::Add(student) => {
            let mut students = Vec::with_capacity(state.students.len() + 1);
            students.extend(state.students.iter().cloned());
            students.push(student);
            Arc::new(StudentState { students })
        }
        StudentAction::Update { id, mut updated } => {
            let Some(index) = state.position(id) else {
                return Arc::clone(state);
            };
            // The slot stays bound to its original identity.
            updated.id = id;
            let mut students = state.students.clone();
            students[index] = updated;
            Arc::new(StudentState { students })
        }
        StudentAction::Delete(id) => {
            if state.position(id).is_none() {
                return Arc::clone(state);
            }
            let students = state
                .students
                .iter()
                .filter(|student| student.id != id)
                .cloned()
                .collect();
            Arc::new(StudentState { students })
        }
    }
}
