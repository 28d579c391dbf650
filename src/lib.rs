//! enumform - interactive terminal forms for cyclable enum settings
//!
//! A form presents a set of enumerable settings (boolean flags, fixed-choice
//! values) as a navigable list. The user cycles each setting's value in
//! place; every transition queues a deferred commit action, and nothing is
//! written to the target record until the user confirms. Cancelling discards
//! the queue.
//!
//! The core is pure synchronous state ([`state`]); the terminal collaborators
//! ([`ui`], [`input`]) and the record binding ([`record`]) sit behind traits
//! so hosts can substitute their own.

pub mod config;
pub mod input;
pub mod record;
pub mod session;
pub mod state;
pub mod ui;

pub use input::{Intent, IntentSource};
pub use record::{CommitBindingError, SettingsRecord};
pub use session::{run_session, SessionError, SessionOutcome};
pub use state::{CycleDirection, EnumField, FieldValue, FormState, NamedField};
