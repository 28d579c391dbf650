//! Configuration handling for the form panel

use crate::ui::Theme;
use anyhow::Result;
use directories::ProjectDirs;
use ratatui::style::{Color, Style};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

/// User configuration for form appearance
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct FormConfig {
    /// Panel title
    pub panel_title: Option<String>,
    /// Border color name or hex value
    pub border_color: Option<String>,
    /// Foreground color of the selected row
    pub highlight_fg: Option<String>,
    /// Background color of the selected row
    pub highlight_bg: Option<String>,
}

impl FormConfig {
    /// Get the config file path
    fn config_path() -> Option<PathBuf> {
        ProjectDirs::from("io", "centy", "enumform")
            .map(|dirs| dirs.config_dir().join("config.json"))
    }

    /// Load configuration from file
    pub fn load() -> Result<Self> {
        let path = Self::config_path();

        if let Some(path) = path {
            if path.exists() {
                let content = fs::read_to_string(&path)?;
                let config: FormConfig = serde_json::from_str(&content)?;
                return Ok(config);
            }
        }

        Ok(Self::default())
    }

    /// Save configuration to file
    pub fn save(&self) -> Result<()> {
        if let Some(path) = Self::config_path() {
            if let Some(parent) = path.parent() {
                fs::create_dir_all(parent)?;
            }
            let content = serde_json::to_string_pretty(self)?;
            fs::write(&path, content)?;
        }
        Ok(())
    }

    /// Build a theme from this config, falling back to the defaults for
    /// anything unset or unparseable
    pub fn theme(&self) -> Theme {
        let mut theme = Theme::default();
        if let Some(title) = &self.panel_title {
            theme.title = title.clone();
        }
        if let Some(color) = self.border_color.as_deref().and_then(parse_color) {
            theme.border = Style::default().fg(color);
        }
        if let Some(color) = self.highlight_fg.as_deref().and_then(parse_color) {
            theme.selected = theme.selected.fg(color);
        }
        if let Some(color) = self.highlight_bg.as_deref().and_then(parse_color) {
            theme.selected = theme.selected.bg(color);
        }
        theme
    }
}

fn parse_color(value: &str) -> Option<Color> {
    value.parse().ok()
}
