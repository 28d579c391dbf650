//! Form domain layer
//!
//! Pure, synchronous form state: cyclable fields, the navigation cursor, and
//! the queue of deferred commit actions. Nothing in here draws or reads keys.

mod field;
mod form_state;
mod queue;

pub use field::{CycleDirection, EnumField, FieldConfigError, FieldValue, NamedField};
pub use form_state::{FieldRow, FormConfigError, FormSnapshot, FormState};
pub use queue::{ActionQueue, CommitAction};
