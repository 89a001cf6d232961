//! Field-to-message error map.

use crate::model::student::StudentField;
use std::collections::BTreeMap;

/// Human-readable error message per failing field, in form order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldErrors {
    messages: BTreeMap<StudentField, String>,
}

impl FieldErrors {
    /// Records `message` for `field`, replacing any previous message.
    pub fn insert(&mut self, field: StudentField, message: impl Into<String>) {
        self.messages.insert(field, message.into());
    }

    /// Clears the message for `field`.
    pub fn remove(&mut self, field: StudentField) {
        self.messages.remove(&field);
    }

    pub fn get(&self, field: StudentField) -> Option<&str> {
        self.messages.get(&field).map(String::as_str)
    }

    /// Whether every field passed.
    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (StudentField, &str)> {
        self.messages
            .iter()
            .map(|(field, message)| (*field, message.as_str()))
    }

    /// Adds messages from `other` only for fields that have none yet.
    pub fn merge_missing(&mut self, other: FieldErrors) {
        for (field, message) in other.messages {
            self.messages.entry(field).or_insert(message);
        }
    }
}
