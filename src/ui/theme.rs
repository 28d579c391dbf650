//! Panel and highlight styling

use ratatui::style::{Color, Modifier, Style};

/// Visual styling for the form panel
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Theme {
    /// Panel title
    pub title: String,
    /// Border style for the surrounding panel
    pub border: Style,
    /// Style of the selected row
    pub selected: Style,
    /// Style of secondary text (descriptions, footer)
    pub dimmed: Style,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            title: "Settings".to_string(),
            border: Style::default().fg(Color::Green),
            selected: Style::default()
                .fg(Color::Black)
                .bg(Color::Green)
                .add_modifier(Modifier::BOLD),
            dimmed: Style::default().fg(Color::DarkGray),
        }
    }
}
