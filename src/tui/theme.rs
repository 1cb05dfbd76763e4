//! # Theme
//!
//! The colors every drill renders with, parsed once from config and passed
//! down by reference. Nothing here is mutable after startup.

use log::warn;
use ratatui::style::Color;

use crate::core::config::{
    DEFAULT_ACCENT_COLOR, DEFAULT_FOCUSED_COLOR, DEFAULT_MUTED_COLOR, ResolvedConfig,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Theme {
    /// Border of the focused column, focused spinner row.
    pub focused: Color,
    /// Borders of unfocused columns, help text.
    pub muted: Color,
    /// Remembered cursor in unfocused columns.
    pub accent: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            focused: Color::Cyan,
            muted: Color::DarkGray,
            accent: Color::Yellow,
        }
    }
}

impl Theme {
    pub fn from_config(config: &ResolvedConfig) -> Self {
        Self {
            focused: parse_color(&config.focused_color, DEFAULT_FOCUSED_COLOR, Color::Cyan),
            muted: parse_color(&config.muted_color, DEFAULT_MUTED_COLOR, Color::DarkGray),
            accent: parse_color(&config.accent_color, DEFAULT_ACCENT_COLOR, Color::Yellow),
        }
    }
}

fn parse_color(value: &str, default_name: &str, fallback: Color) -> Color {
    match value.parse::<Color>() {
        Ok(color) => color,
        Err(_) => {
            warn!(
                "Unknown color '{}', falling back to {}",
                value, default_name
            );
            fallback
        }
    }
}
