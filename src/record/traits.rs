//! Trait abstraction for the external record to enable mocking in tests

use crate::state::FieldValue;
use thiserror::Error;

/// A commit action named a field the record cannot bind
#[derive(Debug, Error, PartialEq, Eq)]
#[error("record has no settable field named `{field}`")]
pub struct CommitBindingError {
    pub field: String,
}

impl CommitBindingError {
    pub fn new(field: impl Into<String>) -> Self {
        Self {
            field: field.into(),
        }
    }
}

/// An external mutable record with named, settable slots.
///
/// Field discovery stays on the host side: whoever builds a form derives one
/// `NamedField` per slot it wants editable, and the commit protocol writes
/// back through this same trait. Names are caller-supplied, so an unknown
/// name must be reported rather than ignored.
#[cfg_attr(test, mockall::automock)]
pub trait SettingsRecord {
    /// Set the slot `name` to `value`
    fn set_field(&mut self, name: &str, value: &FieldValue) -> Result<(), CommitBindingError>;
}
