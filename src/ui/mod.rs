//! UI module for rendering the form panel

mod theme;

pub use theme::Theme;

use crate::state::FormSnapshot;
use ratatui::{
    backend::Backend,
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState},
    Frame, Terminal,
};
use std::io;

/// Rendering surface for a form session.
///
/// The session loop hands over a fresh snapshot after every intent; the
/// renderer owns highlighting and layout.
pub trait FormRenderer {
    fn render(&mut self, snapshot: &FormSnapshot) -> io::Result<()>;
}

/// Ratatui renderer drawing the form as a bordered panel over the whole
/// terminal area
pub struct TerminalRenderer<'a, B: Backend> {
    terminal: &'a mut Terminal<B>,
    theme: Theme,
}

impl<'a, B: Backend> TerminalRenderer<'a, B> {
    pub fn new(terminal: &'a mut Terminal<B>, theme: Theme) -> Self {
        Self { terminal, theme }
    }
}

impl<B: Backend> FormRenderer for TerminalRenderer<'_, B> {
    fn render(&mut self, snapshot: &FormSnapshot) -> io::Result<()> {
        let theme = self.theme.clone();
        self.terminal
            .draw(|frame| draw_form(frame, frame.area(), snapshot, &theme))?;
        Ok(())
    }
}

/// Draw the form panel: one row per field (`name  alias`), the row at the
/// cursor highlighted, with the cursor position and key help in the bottom
/// border.
pub fn draw_form(frame: &mut Frame, area: Rect, snapshot: &FormSnapshot, theme: &Theme) {
    let name_width = snapshot
        .rows
        .iter()
        .map(|row| row.name.chars().count())
        .max()
        .unwrap_or(0);

    let items: Vec<ListItem> = snapshot
        .rows
        .iter()
        .map(|row| {
            let mut spans = vec![
                Span::raw(format!("{:<name_width$}", row.name)),
                Span::raw("  "),
                Span::raw(row.alias.clone()),
            ];
            if let Some(description) = &row.description {
                spans.push(Span::styled(format!("  ({description})"), theme.dimmed));
            }
            ListItem::new(Line::from(spans))
        })
        .collect();

    let block = Block::default()
        .title(format!(" {} ", theme.title))
        .borders(Borders::ALL)
        .border_style(theme.border)
        .title_bottom(
            Line::from(format!(" {}/{} ", snapshot.cursor + 1, snapshot.rows.len()))
                .left_aligned(),
        )
        .title_bottom(
            Line::styled(" j/k move  h/l cycle  Enter apply  Esc cancel ", theme.dimmed)
                .right_aligned(),
        );

    let list = List::new(items)
        .block(block)
        .highlight_style(theme.selected);

    let mut list_state = ListState::default().with_selected(Some(snapshot.cursor));
    frame.render_stateful_widget(list, area, &mut list_state);
}
