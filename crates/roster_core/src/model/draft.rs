//! Raw form values for a student record.
//!
//! A draft holds exactly what the user typed, including partial or invalid
//! input. Validation turns a clean draft into a `StudentInput`.

use crate::model::student::{Student, StudentField};
use chrono::NaiveDate;

/// Date wire format used by drafts, list rows and the persisted blob.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Text values of every form field.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StudentDraft {
    pub roll: String,
    pub name: String,
    pub dob: String,
    pub email: String,
    pub phone: String,
    pub address: String,
}

impl StudentDraft {
    /// Pre-fills a draft from an existing record (update form).
    pub fn from_student(student: &Student) -> Self {
        Self {
            roll: student.roll.to_string(),
            name: student.name.clone(),
            dob: format_date(student.dob),
            email: student.email.clone().unwrap_or_default(),
            phone: student.phone.clone().unwrap_or_default(),
            address: student.address.clone().unwrap_or_default(),
        }
    }

    /// Returns the raw value of one field.
    pub fn get(&self, field: StudentField) -> &str {
        match field {
            StudentField::Roll => &self.roll,
            StudentField::Name => &self.name,
            StudentField::Dob => &self.dob,
            StudentField::Email => &self.email,
            StudentField::Phone => &self.phone,
            StudentField::Address => &self.address,
        }
    }

    /// Replaces the raw value of one field.
    pub fn set(&mut self, field: StudentField, value: impl Into<String>) {
        let value = value.into();
        match field {
            StudentField::Roll => self.roll = value,
            StudentField::Name => self.name = value,
            StudentField::Dob => self.dob = value,
            StudentField::Email => self.email = value,
            StudentField::Phone => self.phone = value,
            StudentField::Address => self.address = value,
        }
    }
}

/// Formats a date as `YYYY-MM-DD`.
pub fn format_date(date: NaiveDate) -> String {
    date.format(DATE_FORMAT).to_string()
}
