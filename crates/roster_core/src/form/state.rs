//! Form state and its reducer.

use crate::model::draft::StudentDraft;
use crate::model::student::{Student, StudentField, StudentId};
use crate::validation::{validate_field, FieldErrors};
use chrono::NaiveDate;
use std::collections::BTreeSet;

/// Which mutation a submit dispatches.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormMode {
    Create,
    Update(StudentId),
}

/// Form lifecycle.
///
/// There is no pending state: submits are synchronous and local.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormStatus {
    /// Accepting input; field errors are computed per change.
    Editing,
    /// Last submit failed; errors are shown and input is still accepted.
    Invalid,
    /// Last submit dispatched a mutation for this id.
    Submitted(StudentId),
}

/// Input events handled by [`form_reducer`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormEvent {
    Change { field: StudentField, value: String },
    Blur(StudentField),
    /// Pre-fills the form from an existing record and switches to update mode.
    Load(Student),
    /// Clears values, errors and touched flags, keeping the mode.
    Reset,
}

/// Controlled form state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormState {
    pub mode: FormMode,
    pub values: StudentDraft,
    pub errors: FieldErrors,
    pub touched: BTreeSet<StudentField>,
    pub status: FormStatus,
}

impl FormState {
    /// Empty form in the given mode.
    pub fn new(mode: FormMode) -> Self {
        Self {
            mode,
            values: StudentDraft::default(),
            errors: FieldErrors::default(),
            touched: BTreeSet::new(),
            status: FormStatus::Editing,
        }
    }

    /// Empty create form.
    pub fn create() -> Self {
        Self::new(FormMode::Create)
    }

    /// Update form pre-filled from `student`.
    pub fn edit(student: &Student) -> Self {
        Self {
            mode: FormMode::Update(student.id),
            values: StudentDraft::from_student(student),
            ..Self::create()
        }
    }

    /// Id of the record being edited, if any.
    pub fn editing(&self) -> Option<StudentId> {
        match self.mode {
            FormMode::Create => None,
            FormMode::Update(id) => Some(id),
        }
    }

    /// Error to render next to `field`; hidden until the field is touched.
    pub fn visible_error(&self, field: StudentField) -> Option<&str> {
        if self.touched.contains(&field) {
            self.errors.get(field)
        } else {
            None
        }
    }

    /// Marks every field touched so all errors become visible.
    pub fn touch_all(&mut self) {
        self.touched.extend(StudentField::ALL);
    }
}

/// Applies one event and returns the next form state.
pub fn form_reducer(mut state: FormState, event: FormEvent, today: NaiveDate) -> FormState {
    match event {
        FormEvent::Change { field, value } => {
            state.values.set(field, value);
            refresh_field_error(&mut state, field, today);
            state.status = FormStatus::Editing;
        }
        FormEvent::Blur(field) => {
            state.touched.insert(field);
            refresh_field_error(&mut state, field, today);
        }
        FormEvent::Load(student) => {
            state = FormState::edit(&student);
        }
        FormEvent::Reset => {
            state = FormState::new(state.mode);
        }
    }
    state
}

fn refresh_field_error(state: &mut FormState, field: StudentField, today: NaiveDate) {
    match validate_field(&state.values, field, today) {
        Some(message) => state.errors.insert(field, message),
        None => state.errors.remove(field),
    }
}
