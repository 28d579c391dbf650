//! Form state management

use super::field::{CycleDirection, NamedField};
use super::queue::{ActionQueue, CommitAction};
use std::collections::HashSet;
use thiserror::Error;

/// Errors from assembling a form out of named fields
#[derive(Debug, Error, PartialEq, Eq)]
pub enum FormConfigError {
    #[error("duplicate field name `{0}` in form")]
    DuplicateFieldName(String),
    #[error("a form needs at least one field")]
    Empty,
}

/// One renderable row of a form
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldRow {
    pub name: String,
    pub alias: String,
    pub description: Option<String>,
}

/// Presentation-neutral view of a form: ordered rows plus the cursor index.
/// Renderers decide how to highlight the row at `cursor`; the form never
/// touches drawing primitives.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormSnapshot {
    pub rows: Vec<FieldRow>,
    pub cursor: usize,
}

/// An ordered collection of named fields, a single-field cursor, and the
/// queue of pending commit actions produced by field transitions.
///
/// Insertion order is presentation order is navigation order. The cursor
/// clamps at both ends rather than wrapping. Transitions on committable
/// fields enqueue a `(name, value)` snapshot; nothing reaches the external
/// record until the pending queue is handed to the commit protocol.
#[derive(Debug, Clone)]
pub struct FormState {
    fields: Vec<NamedField>,
    cursor: usize,
    pending: ActionQueue,
}

impl FormState {
    /// Build a form over a non-empty field list with unique names
    pub fn new(fields: Vec<NamedField>) -> Result<Self, FormConfigError> {
        if fields.is_empty() {
            return Err(FormConfigError::Empty);
        }
        let mut seen = HashSet::new();
        for field in &fields {
            if !seen.insert(field.name()) {
                return Err(FormConfigError::DuplicateFieldName(field.name().to_string()));
            }
        }
        Ok(Self {
            fields,
            cursor: 0,
            pending: ActionQueue::new(),
        })
    }

    /// Move the cursor up one field; a no-op at the top
    pub fn move_up(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    /// Move the cursor down one field; a no-op at the bottom
    pub fn move_down(&mut self) {
        self.cursor = (self.cursor + 1).min(self.fields.len() - 1);
    }

    /// Cycle the selected field and, when it is committable, queue the
    /// resulting value for commit.
    ///
    /// Repeated cycles on one field accumulate one action each; replayed in
    /// order at commit time, the last transition wins.
    pub fn cycle_selected(&mut self, direction: CycleDirection) {
        let field = &mut self.fields[self.cursor];
        field.cycle(direction);
        if field.is_committable() {
            self.pending
                .push(CommitAction::new(field.name(), field.current_value().clone()));
        }
    }

    /// Discard all pending actions. Field selections stay where the user
    /// left them; only the commit to the external record is suppressed.
    pub fn cancel(&mut self) {
        self.pending.clear();
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn selected_field(&self) -> &NamedField {
        &self.fields[self.cursor]
    }

    pub fn fields(&self) -> &[NamedField] {
        &self.fields
    }

    pub fn field_count(&self) -> usize {
        self.fields.len()
    }

    pub fn pending(&self) -> &ActionQueue {
        &self.pending
    }

    /// Take ownership of the pending queue, leaving the form's own empty.
    /// This is the hand-off point to the commit protocol and what makes a
    /// commit drain-once.
    pub fn take_pending(&mut self) -> ActionQueue {
        std::mem::take(&mut self.pending)
    }

    /// Snapshot the form for rendering
    pub fn snapshot(&self) -> FormSnapshot {
        FormSnapshot {
            rows: self
                .fields
                .iter()
                .map(|field| FieldRow {
                    name: field.name().to_string(),
                    alias: field.current_alias().to_string(),
                    description: field.description().map(str::to_string),
                })
                .collect(),
            cursor: self.cursor,
        }
    }
}
