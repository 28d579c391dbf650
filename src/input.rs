//! Normalized input intents and their terminal source

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use std::io;

/// A normalized user action, independent of the raw key encoding
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Intent {
    MoveUp,
    MoveDown,
    CycleForward,
    CycleBack,
    Confirm,
    Cancel,
}

/// Blocking source of normalized intents.
///
/// Implementations own the raw event decoding; the form core never parses
/// key codes.
pub trait IntentSource {
    /// Block until the next intent arrives
    fn next_intent(&mut self) -> io::Result<Intent>;
}

/// Decodes crossterm key events into intents.
///
/// Arrow keys and their vim equivalents navigate and cycle (Up/`k`,
/// Down/`j`, Right/`l` forward, Left/`h` back); Enter confirms; Esc, `q`,
/// and Ctrl+C cancel. Anything else is swallowed.
#[derive(Debug, Clone, Copy, Default)]
pub struct TerminalIntents;

impl TerminalIntents {
    pub fn new() -> Self {
        Self
    }

    fn map_key(key: KeyEvent) -> Option<Intent> {
        // Windows terminals also deliver key releases
        if key.kind != KeyEventKind::Press {
            return None;
        }
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            return Some(Intent::Cancel);
        }
        match key.code {
            KeyCode::Up | KeyCode::Char('k') => Some(Intent::MoveUp),
            KeyCode::Down | KeyCode::Char('j') => Some(Intent::MoveDown),
            KeyCode::Right | KeyCode::Char('l') => Some(Intent::CycleForward),
            KeyCode::Left | KeyCode::Char('h') => Some(Intent::CycleBack),
            KeyCode::Enter => Some(Intent::Confirm),
            KeyCode::Esc | KeyCode::Char('q') => Some(Intent::Cancel),
            _ => None,
        }
    }
}

impl IntentSource for TerminalIntents {
    fn next_intent(&mut self) -> io::Result<Intent> {
        loop {
            if let Event::Key(key) = event::read()? {
                if let Some(intent) = Self::map_key(key) {
                    return Ok(intent);
                }
            }
        }
    }
}
