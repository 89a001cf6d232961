//! Cross-record uniqueness rules.
//!
//! These need the full collection and run only at submit time.

use crate::model::draft::StudentDraft;
use crate::model::student::{normalize_optional_text, Student, StudentField, StudentId};
use crate::validation::errors::FieldErrors;

pub const ROLL_CONFLICT_MESSAGE: &str = "Roll number already exists";
pub const EMAIL_CONFLICT_MESSAGE: &str = "Email already exists";

/// Reports roll and email collisions with records other than `editing`.
///
/// Unparseable rolls and blank emails never conflict; the field rules
/// report those.
pub fn check_conflicts(
    draft: &StudentDraft,
    existing: &[Student],
    editing: Option<StudentId>,
) -> FieldErrors {
    let mut errors = FieldErrors::default();

    if let Ok(roll) = draft.roll.trim().parse::<u32>() {
        if others(existing, editing).any(|student| student.roll == roll) {
            errors.insert(StudentField::Roll, ROLL_CONFLICT_MESSAGE);
        }
    }

    if let Some(email) = normalize_optional_text(&draft.email) {
        if others(existing, editing).any(|student| student.has_email(&email)) {
            errors.insert(StudentField::Email, EMAIL_CONFLICT_MESSAGE);
        }
    }

    errors
}

fn others(existing: &[Student], editing: Option<StudentId>) -> impl Iterator<Item = &Student> {
    existing
        .iter()
        .filter(move |student| Some(student.id) != editing)
}
