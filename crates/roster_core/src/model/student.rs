//! Student domain model.
//!
//! # Responsibility
//! - Define the canonical record held by the roster store.
//! - Normalize optional contact fields so absence has one representation.
//!
//! # Invariants
//! - `id` is assigned once at creation and never bound to another record.
//! - `roll` is at least 1.
//! - `email`, `phone` and `address` are `None` when blank.

use chrono::NaiveDate;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt::{Display, Formatter};
use uuid::Uuid;

/// Stable identifier for one student record.
pub type StudentId = Uuid;

/// Field selector shared by validation, form state and error maps.
///
/// Declaration order is the display order of the form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StudentField {
    Roll,
    Name,
    Dob,
    Email,
    Phone,
    Address,
}

impl StudentField {
    /// All fields in form order.
    pub const ALL: [StudentField; 6] = [
        StudentField::Roll,
        StudentField::Name,
        StudentField::Dob,
        StudentField::Email,
        StudentField::Phone,
        StudentField::Address,
    ];

    /// Stable wire/form name of this field.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Roll => "roll",
            Self::Name => "name",
            Self::Dob => "dob",
            Self::Email => "email",
            Self::Phone => "phone",
            Self::Address => "address",
        }
    }
}

impl Display for StudentField {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Validated field values for a record that has no identity yet.
///
/// Produced by the validation layer; turned into a [`Student`] by attaching
/// an id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StudentInput {
    pub roll: u32,
    pub name: String,
    pub dob: NaiveDate,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub address: Option<String>,
}

/// Canonical student record.
///
/// `email`, `phone` and `address` are normalized on both read and write:
/// values are trimmed and blank values become `None`. Build records through
/// [`Student::new`] or [`Student::with_id`] so in-memory values already match
/// their persisted form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Student {
    /// Assigned at creation, immutable afterwards.
    pub id: StudentId,
    /// Unique across the collection; enforced at submit time.
    pub roll: u32,
    pub name: String,
    /// Serialized as `YYYY-MM-DD`.
    pub dob: NaiveDate,
    /// Unique across records that have one.
    #[serde(
        default,
        skip_serializing_if = "is_blank",
        serialize_with = "serialize_optional_text",
        deserialize_with = "deserialize_optional_text"
    )]
    pub email: Option<String>,
    #[serde(
        default,
        skip_serializing_if = "is_blank",
        serialize_with = "serialize_optional_text",
        deserialize_with = "deserialize_optional_text"
    )]
    pub phone: Option<String>,
    #[serde(
        default,
        skip_serializing_if = "is_blank",
        serialize_with = "serialize_optional_text",
        deserialize_with = "deserialize_optional_text"
    )]
    pub address: Option<String>,
}

impl Student {
    /// Creates a record with a freshly generated id.
    pub fn new(input: StudentInput) -> Self {
        Self::with_id(Uuid::new_v4(), input)
    }

    /// Creates a record bound to a caller-provided id.
    ///
    /// Used by update paths where identity already exists.
    pub fn with_id(id: StudentId, input: StudentInput) -> Self {
        Self {
            id,
            roll: input.roll,
            name: input.name,
            dob: input.dob,
            email: input.email.as_deref().and_then(normalize_optional_text),
            phone: input.phone.as_deref().and_then(normalize_optional_text),
            address: input.address.as_deref().and_then(normalize_optional_text),
        }
    }

    /// Returns whether `email` matches this record's email.
    ///
    /// Records without an email never match.
    pub fn has_email(&self, email: &str) -> bool {
        self.email.as_deref() == Some(email)
    }
}

/// Trims `value` and maps blank input to `None`.
pub fn normalize_optional_text(value: &str) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

fn is_blank(value: &Option<String>) -> bool {
    value.as_deref().and_then(normalize_optional_text).is_none()
}

fn serialize_optional_text<S>(value: &Option<String>, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    value
        .as_deref()
        .and_then(normalize_optional_text)
        .serialize(serializer)
}

fn deserialize_optional_text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<String>::deserialize(deserializer)?;
    Ok(value.as_deref().and_then(normalize_optional_text))
}
