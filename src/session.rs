//! Interactive session loop driving a form over its collaborators

use crate::input::{Intent, IntentSource};
use crate::record::{commit, CommitBindingError, SettingsRecord};
use crate::state::{CycleDirection, FormState};
use crate::ui::FormRenderer;
use thiserror::Error;
use tracing::{debug, info};

/// How a session ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionOutcome {
    /// The user confirmed; `applied` actions were written to the record
    Committed { applied: usize },
    /// The user cancelled; the record was not touched
    Aborted,
}

/// Errors that end a session early
#[derive(Debug, Error)]
pub enum SessionError {
    #[error(transparent)]
    Commit(#[from] CommitBindingError),
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// Drive a form to completion.
///
/// Synchronous cycle: render the form, block for the next intent, apply it,
/// repeat. `Confirm` drains the pending queue into `record` and ends the
/// session; `Cancel` discards the queue and ends it. Commits cannot
/// interleave with navigation: no intent is read while one is in flight.
pub fn run_session<R, D, I>(
    form: &mut FormState,
    record: &mut R,
    renderer: &mut D,
    intents: &mut I,
) -> Result<SessionOutcome, SessionError>
where
    R: SettingsRecord,
    D: FormRenderer,
    I: IntentSource,
{
    info!(fields = form.field_count(), "session started");
    loop {
        renderer.render(&form.snapshot())?;
        let intent = intents.next_intent()?;
        debug!(?intent, cursor = form.cursor(), "handling intent");
        match intent {
            Intent::MoveUp => form.move_up(),
            Intent::MoveDown => form.move_down(),
            Intent::CycleForward => form.cycle_selected(CycleDirection::Forward),
            Intent::CycleBack => form.cycle_selected(CycleDirection::Backward),
            Intent::Confirm => {
                let mut pending = form.take_pending();
                let applied = commit(&mut pending, record)?;
                info!(applied, "session committed");
                return Ok(SessionOutcome::Committed { applied });
            }
            Intent::Cancel => {
                form.cancel();
                info!("session aborted");
                return Ok(SessionOutcome::Aborted);
            }
        }
    }
}
