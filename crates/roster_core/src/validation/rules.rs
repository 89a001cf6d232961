//! Per-field rule list.
//!
//! Rules are an ordered table of `(field, check, message)` triples. Checks
//! receive the trimmed raw value and return `true` when the value passes.
//! Optional-field checks pass on empty input.

use crate::model::draft::{StudentDraft, DATE_FORMAT};
use crate::model::student::StudentField;
use crate::validation::errors::FieldErrors;
use chrono::NaiveDate;
use once_cell::sync::Lazy;
use regex::Regex;

pub const ROLL_REQUIRED_MESSAGE: &str = "Roll number is required";
pub const ROLL_INTEGER_MESSAGE: &str = "Roll number must be an integer";
pub const ROLL_MIN_MESSAGE: &str = "Roll number must be greater than or equal to 1";
pub const ROLL_MAX_MESSAGE: &str = "Roll number must be less than or equal to 4294967295";
pub const NAME_REQUIRED_MESSAGE: &str = "Name is required";
pub const NAME_MIN_MESSAGE: &str = "Name must be at least 5 characters";
pub const NAME_MAX_MESSAGE: &str = "Name must be at most 50 characters";
pub const DOB_REQUIRED_MESSAGE: &str = "Date of birth is required";
pub const DOB_FORMAT_MESSAGE: &str = "Date of birth must be a valid date";
pub const DOB_FUTURE_MESSAGE: &str = "Date of birth cannot be a future date";
pub const EMAIL_FORMAT_MESSAGE: &str = "Invalid email address";
pub const PHONE_FORMAT_MESSAGE: &str = "Phone number must be exactly 10 digits";
pub const ADDRESS_MIN_MESSAGE: &str = "Address must be at least 10 characters";

const NAME_MIN_CHARS: usize = 5;
const NAME_MAX_CHARS: usize = 50;
const ADDRESS_MIN_CHARS: usize = 10;

static EMAIL_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"^[A-Za-z0-9.!#$%&'*+/=?^_`{|}~-]+@[A-Za-z0-9](?:[A-Za-z0-9-]{0,61}[A-Za-z0-9])?(?:\.[A-Za-z0-9](?:[A-Za-z0-9-]{0,61}[A-Za-z0-9])?)+$",
    )
    .expect("valid email regex")
});
static PHONE_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[0-9]{10}$").expect("valid phone regex"));

type Check = fn(&str, NaiveDate) -> bool;

#[derive(Clone, Copy)]
struct FieldRule {
    field: StudentField,
    check: Check,
    message: &'static str,
}

const FIELD_RULES: &[FieldRule] = &[
    FieldRule {
        field: StudentField::Roll,
        check: |value, _| !value.is_empty(),
        message: ROLL_REQUIRED_MESSAGE,
    },
    FieldRule {
        field: StudentField::Roll,
        check: |value, _| value.parse::<i64>().is_ok(),
        message: ROLL_INTEGER_MESSAGE,
    },
    FieldRule {
        field: StudentField::Roll,
        check: |value, _| value.parse::<i64>().map_or(true, |roll| roll >= 1),
        message: ROLL_MIN_MESSAGE,
    },
    FieldRule {
        field: StudentField::Roll,
        check: |value, _| {
            value
                .parse::<i64>()
                .map_or(true, |roll| roll <= i64::from(u32::MAX))
        },
        message: ROLL_MAX_MESSAGE,
    },
    FieldRule {
        field: StudentField::Name,
        check: |value, _| !value.is_empty(),
        message: NAME_REQUIRED_MESSAGE,
    },
    FieldRule {
        field: StudentField::Name,
        check: |value, _| value.chars().count() >= NAME_MIN_CHARS,
        message: NAME_MIN_MESSAGE,
    },
    FieldRule {
        field: StudentField::Name,
        check: |value, _| value.chars().count() <= NAME_MAX_CHARS,
        message: NAME_MAX_MESSAGE,
    },
    FieldRule {
        field: StudentField::Dob,
        check: |value, _| !value.is_empty(),
        message: DOB_REQUIRED_MESSAGE,
    },
    FieldRule {
        field: StudentField::Dob,
        check: |value, _| parse_date(value).is_some(),
        message: DOB_FORMAT_MESSAGE,
    },
    FieldRule {
        field: StudentField::Dob,
        check: |value, today| parse_date(value).map_or(true, |dob| dob <= today),
        message: DOB_FUTURE_MESSAGE,
    },
    FieldRule {
        field: StudentField::Email,
        check: |value, _| value.is_empty() || EMAIL_RE.is_match(value),
        message: EMAIL_FORMAT_MESSAGE,
    },
    FieldRule {
        field: StudentField::Phone,
        check: |value, _| value.is_empty() || PHONE_RE.is_match(value),
        message: PHONE_FORMAT_MESSAGE,
    },
    FieldRule {
        field: StudentField::Address,
        check: |value, _| value.is_empty() || value.chars().count() >= ADDRESS_MIN_CHARS,
        message: ADDRESS_MIN_MESSAGE,
    },
];

/// Evaluates the rules of one field and returns the first failing message.
pub fn validate_field(
    draft: &StudentDraft,
    field: StudentField,
    today: NaiveDate,
) -> Option<&'static str> {
    let value = draft.get(field).trim();
    FIELD_RULES
        .iter()
        .filter(|rule| rule.field == field)
        .find(|rule| !(rule.check)(value, today))
        .map(|rule| rule.message)
}

/// Evaluates every field and collects all failures.
pub fn validate_fields(draft: &StudentDraft, today: NaiveDate) -> FieldErrors {
    let mut errors = FieldErrors::default();
    for field in StudentField::ALL {
        if let Some(message) = validate_field(draft, field, today) {
            errors.insert(field, message);
        }
    }
    errors
}

fn parse_date(value: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(value, DATE_FORMAT).ok()
}

#[cfg(test)]
mod tests {
    use super::{
        validate_field, validate_fields, ADDRESS_MIN_MESSAGE, DOB_FORMAT_MESSAGE,
        DOB_FUTURE_MESSAGE, EMAIL_FORMAT_MESSAGE, NAME_MAX_MESSAGE, NAME_MIN_MESSAGE,
        PHONE_FORMAT_MESSAGE, ROLL_INTEGER_MESSAGE, ROLL_MIN_MESSAGE, ROLL_REQUIRED_MESSAGE,
    };
    use crate::model::draft::StudentDraft;
    use crate::model::student::StudentField;
    use chrono::NaiveDate;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 6, 1).expect("valid date")
    }

    fn draft_with(field: StudentField, value: &str) -> StudentDraft {
        let mut draft = StudentDraft::default();
        draft.set(field, value);
        draft
    }

    fn check(field: StudentField, value: &str) -> Option<&'static str> {
        validate_field(&draft_with(field, value), field, today())
    }

    #[test]
    fn roll_rules() {
        assert_eq!(check(StudentField::Roll, ""), Some(ROLL_REQUIRED_MESSAGE));
        assert_eq!(check(StudentField::Roll, "abc"), Some(ROLL_INTEGER_MESSAGE));
        assert_eq!(check(StudentField::Roll, "1.5"), Some(ROLL_INTEGER_MESSAGE));
        assert_eq!(check(StudentField::Roll, "0"), Some(ROLL_MIN_MESSAGE));
        assert_eq!(check(StudentField::Roll, "-3"), Some(ROLL_MIN_MESSAGE));
        assert_eq!(check(StudentField::Roll, "5"), None);
        assert!(check(StudentField::Roll, "99999999999").is_some());
    }

    #[test]
    fn name_length_bounds() {
        assert_eq!(check(StudentField::Name, "Abcd"), Some(NAME_MIN_MESSAGE));
        assert_eq!(check(StudentField::Name, "Abcde"), None);
        assert_eq!(check(StudentField::Name, &"a".repeat(50)), None);
        assert_eq!(check(StudentField::Name, &"a".repeat(51)), Some(NAME_MAX_MESSAGE));
        assert_eq!(check(StudentField::Name, "  Abcd  "), Some(NAME_MIN_MESSAGE));
    }

    #[test]
    fn dob_rules() {
        assert_eq!(check(StudentField::Dob, "2024-02-30"), Some(DOB_FORMAT_MESSAGE));
        assert_eq!(check(StudentField::Dob, "yesterday"), Some(DOB_FORMAT_MESSAGE));
        assert_eq!(check(StudentField::Dob, "2024-06-02"), Some(DOB_FUTURE_MESSAGE));
        assert_eq!(check(StudentField::Dob, "2024-06-01"), None);
    }

    #[test]
    fn optional_fields_pass_when_blank_and_check_format_when_present() {
        assert_eq!(check(StudentField::Email, ""), None);
        assert_eq!(check(StudentField::Email, "bob@example.com"), None);
        assert_eq!(check(StudentField::Email, "bob@"), Some(EMAIL_FORMAT_MESSAGE));
        assert_eq!(check(StudentField::Email, "bob example.com"), Some(EMAIL_FORMAT_MESSAGE));

        assert_eq!(check(StudentField::Phone, "  "), None);
        assert_eq!(check(StudentField::Phone, "0123456789"), None);
        assert_eq!(check(StudentField::Phone, "012345678"), Some(PHONE_FORMAT_MESSAGE));
        assert_eq!(check(StudentField::Phone, "01234-6789"), Some(PHONE_FORMAT_MESSAGE));

        assert_eq!(check(StudentField::Address, ""), None);
        assert_eq!(check(StudentField::Address, "12 Main"), Some(ADDRESS_MIN_MESSAGE));
        assert_eq!(check(StudentField::Address, "12 Main Street"), None);
    }

    #[test]
    fn validate_fields_reports_all_failures_at_once() {
        let draft = StudentDraft {
            roll: "0".to_string(),
            name: "Bob".to_string(),
            dob: "2000-01-01".to_string(),
            email: "nope".to_string(),
            phone: "123".to_string(),
            address: "short".to_string(),
        };

        let errors = validate_fields(&draft, today());
        assert_eq!(errors.len(), 5);
        assert!(errors.get(StudentField::Dob).is_none());
        assert_eq!(errors.get(StudentField::Roll), Some(ROLL_MIN_MESSAGE));
    }
}
