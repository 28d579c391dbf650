//! Commit protocol: apply queued actions to an external record

use super::traits::{CommitBindingError, SettingsRecord};
use crate::state::ActionQueue;
use tracing::debug;

/// Drain `pending` front to back and apply each action to `record`.
///
/// Returns the number of actions applied. Apply order equals enqueue order,
/// so when one field was transitioned several times the last transition
/// wins. Stops at the first binding failure: earlier writes stay applied,
/// the failed and later actions do not run, and the error names the
/// offending field.
pub fn commit<R>(pending: &mut ActionQueue, record: &mut R) -> Result<usize, CommitBindingError>
where
    R: SettingsRecord + ?Sized,
{
    let mut applied = 0;
    while let Some(action) = pending.pop() {
        record.set_field(&action.field_name, &action.value)?;
        debug!(field = %action.field_name, value = %action.value, "applied commit action");
        applied += 1;
    }
    Ok(applied)
}
