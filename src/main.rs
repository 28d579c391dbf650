//! enumform demo - edit a playback settings record in the terminal
//!
//! Runs one form session over an in-process record and prints the
//! before/after state on exit.

use anyhow::Result;
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use enumform::config::FormConfig;
use enumform::input::TerminalIntents;
use enumform::record::{CommitBindingError, SettingsRecord};
use enumform::session::{run_session, SessionOutcome};
use enumform::state::{FieldValue, FormState, NamedField};
use enumform::ui::TerminalRenderer;
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Demo record: playback window settings
#[derive(Debug)]
struct PlayerSettings {
    fullscreen: bool,
    maximized: bool,
    animated: bool,
    scale_mode: String,
}

impl Default for PlayerSettings {
    fn default() -> Self {
        Self {
            fullscreen: true,
            maximized: false,
            animated: false,
            scale_mode: "fit".to_string(),
        }
    }
}

impl SettingsRecord for PlayerSettings {
    fn set_field(&mut self, name: &str, value: &FieldValue) -> Result<(), CommitBindingError> {
        match name {
            "fullscreen" => {
                self.fullscreen = value
                    .as_bool()
                    .ok_or_else(|| CommitBindingError::new(name))?;
            }
            "maximized" => {
                self.maximized = value
                    .as_bool()
                    .ok_or_else(|| CommitBindingError::new(name))?;
            }
            "animated" => {
                self.animated = value
                    .as_bool()
                    .ok_or_else(|| CommitBindingError::new(name))?;
            }
            "scale_mode" => {
                self.scale_mode = value
                    .as_text()
                    .ok_or_else(|| CommitBindingError::new(name))?
                    .to_string();
            }
            _ => return Err(CommitBindingError::new(name)),
        }
        Ok(())
    }
}

/// One field per editable slot, in presentation order
fn settings_form(record: &PlayerSettings) -> Result<FormState> {
    let fields = vec![
        NamedField::boolean("fullscreen", record.fullscreen)?
            .with_description("Use the whole screen"),
        NamedField::boolean("maximized", record.maximized)?,
        NamedField::boolean("animated", record.animated)?
            .with_description("Animate window transitions"),
        NamedField::choice(
            "scale_mode",
            &["fit", "fill", "stretch"],
            Some(record.scale_mode.as_str()),
        )?
        .with_description("How frames fill the window"),
    ];
    Ok(FormState::new(fields)?)
}

fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "enumform=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    let config = FormConfig::load().unwrap_or_else(|err| {
        tracing::warn!("failed to load config, using defaults: {err:#}");
        FormConfig::default()
    });

    let mut record = PlayerSettings::default();
    let before = format!("{record:?}");
    let mut form = settings_form(&record)?;

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut renderer = TerminalRenderer::new(&mut terminal, config.theme());
    let mut intents = TerminalIntents::new();
    let result = run_session(&mut form, &mut record, &mut renderer, &mut intents);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    match result {
        Ok(SessionOutcome::Committed { applied }) => {
            println!("Applied {applied} change(s)");
            println!("{before} -> {record:?}");
        }
        Ok(SessionOutcome::Aborted) => {
            println!("Cancelled, record unchanged");
        }
        Err(err) => {
            eprintln!("Error: {err:?}");
            std::process::exit(1);
        }
    }

    Ok(())
}
