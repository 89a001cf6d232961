//! Student validation rules.
//!
//! # Responsibility
//! - Evaluate per-field rules over raw form input.
//! - Evaluate cross-record uniqueness rules at submit time.
//! - Convert a clean draft into a `StudentInput`.
//!
//! # Invariants
//! - Every field is evaluated independently; one field failing never hides
//!   another field's error.
//! - Within one field, the first failing rule wins.
//! - Cross-record conflicts never override a field-rule message.

pub mod conflicts;
pub mod errors;
pub mod rules;

use crate::model::draft::{StudentDraft, DATE_FORMAT};
use crate::model::student::{
    normalize_optional_text, Student, StudentField, StudentId, StudentInput,
};
use chrono::NaiveDate;

pub use conflicts::check_conflicts;
pub use errors::FieldErrors;
pub use rules::{validate_field, validate_fields};

/// Runs the full submit-time validation.
///
/// Returns the parsed input when the draft passes every field rule and has
/// no conflict with `existing` (ignoring the record bound to `editing`).
pub fn validate_submission(
    draft: &StudentDraft,
    existing: &[Student],
    editing: Option<StudentId>,
    today: NaiveDate,
) -> Result<StudentInput, FieldErrors> {
    let mut errors = validate_fields(draft, today);
    errors.merge_missing(check_conflicts(draft, existing, editing));
    if !errors.is_empty() {
        return Err(errors);
    }

    parse_input(draft).ok_or_else(|| {
        let mut errors = FieldErrors::default();
        errors.insert(StudentField::Roll, rules::ROLL_INTEGER_MESSAGE);
        errors
    })
}

/// Parses a draft that already passed the field rules.
fn parse_input(draft: &StudentDraft) -> Option<StudentInput> {
    let roll = draft.roll.trim().parse::<u32>().ok()?;
    let dob = NaiveDate::parse_from_str(draft.dob.trim(), DATE_FORMAT).ok()?;
    Some(StudentInput {
        roll,
        name: draft.name.trim().to_string(),
        dob,
        email: normalize_optional_text(&draft.email),
        phone: normalize_optional_text(&draft.phone),
        address: normalize_optional_text(&draft.address),
    })
}

#[cfg(test)]
mod tests {
    use super::validate_submission;
    use crate::model::draft::StudentDraft;
    use crate::model::student::StudentField;
    use chrono::NaiveDate;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 6, 1).expect("valid date")
    }

    #[test]
    fn clean_draft_parses_into_trimmed_input() {
        let draft = StudentDraft {
            roll: " 5 ".to_string(),
            name: "  Bob Johnson ".to_string(),
            dob: "1999-05-05".to_string(),
            email: "".to_string(),
            phone: "0123456789".to_string(),
            address: "   ".to_string(),
        };

        let input = validate_submission(&draft, &[], None, today()).expect("draft is valid");
        assert_eq!(input.roll, 5);
        assert_eq!(input.name, "Bob Johnson");
        assert_eq!(input.email, None);
        assert_eq!(input.phone.as_deref(), Some("0123456789"));
        assert_eq!(input.address, None);
    }

    #[test]
    fn empty_draft_reports_every_required_field() {
        let errors = validate_submission(&StudentDraft::default(), &[], None, today())
            .expect_err("empty draft must fail");

        assert!(errors.get(StudentField::Roll).is_some());
        assert!(errors.get(StudentField::Name).is_some());
        assert!(errors.get(StudentField::Dob).is_some());
        assert!(errors.get(StudentField::Email).is_none());
        assert_eq!(errors.len(), 3);
    }
}
