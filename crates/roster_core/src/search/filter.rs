//! Case-insensitive name/email filter and list rows.

use crate::model::draft::format_date;
use crate::model::student::{Student, StudentId};

/// Placeholder rendered for absent optional fields.
pub const MISSING_VALUE: &str = "N/A";

/// One row of the student list table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StudentRow {
    pub id: StudentId,
    pub roll: String,
    pub name: String,
    pub dob: String,
    pub email: String,
    pub phone: String,
    pub address: String,
}

impl From<&Student> for StudentRow {
    fn from(student: &Student) -> Self {
        Self {
            id: student.id,
            roll: student.roll.to_string(),
            name: student.name.clone(),
            dob: format_date(student.dob),
            email: display_optional(student.email.as_deref()),
            phone: display_optional(student.phone.as_deref()),
            address: display_optional(student.address.as_deref()),
        }
    }
}

/// Returns records whose name or email contains `query`, ignoring case.
pub fn filter_students<'a>(students: &'a [Student], query: &str) -> Vec<&'a Student> {
    if query.is_empty() {
        return students.iter().collect();
    }

    let needle = query.to_lowercase();
    students
        .iter()
        .filter(|student| matches_query(student, &needle))
        .collect()
}

/// Filters and projects in one pass.
pub fn student_rows(students: &[Student], query: &str) -> Vec<StudentRow> {
    filter_students(students, query)
        .into_iter()
        .map(StudentRow::from)
        .collect()
}

fn matches_query(student: &Student, needle: &str) -> bool {
    student.name.to_lowercase().contains(needle)
        || student
            .email
            .as_deref()
            .is_some_and(|email| email.to_lowercase().contains(needle))
}

fn display_optional(value: Option<&str>) -> String {
    value.unwrap_or(MISSING_VALUE).to_string()
}
