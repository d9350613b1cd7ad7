//! Style definitions for the page and the host chrome.

use ratatui::style::{Color, Modifier, Style};

use crate::domain::host_user::AppliedTheme;

// =============================================================================
// Page styles
// =============================================================================

/// Body style derived from the host theme. Colours that are not `#rrggbb`
/// leave the terminal default in place.
pub fn page_style(theme: &AppliedTheme) -> Style {
    let mut style = Style::default();
    if let Some(bg) = parse_hex_color(&theme.background) {
        style = style.bg(bg);
    }
    if let Some(fg) = parse_hex_color(&theme.text) {
        style = style.fg(fg);
    }
    style
}

pub fn parse_hex_color(value: &str) -> Option<Color> {
    let hex = value.strip_prefix('#')?;
    if hex.len() != 6 || !hex.chars().all(|ch| ch.is_ascii_hexdigit()) {
        return None;
    }

    let channel = |range: std::ops::Range<usize>| u8::from_str_radix(&hex[range], 16).ok();
    Some(Color::Rgb(channel(0..2)?, channel(2..4)?, channel(4..6)?))
}

pub fn heading_style() -> Style {
    Style::default().add_modifier(Modifier::BOLD)
}

pub fn label_style() -> Style {
    Style::default().add_modifier(Modifier::BOLD)
}

pub fn focused_border_style() -> Style {
    Style::default().fg(Color::Cyan)
}

pub fn unfocused_border_style() -> Style {
    Style::default().fg(Color::DarkGray)
}

pub fn focused_button_style() -> Style {
    Style::default().add_modifier(Modifier::REVERSED | Modifier::BOLD)
}

pub fn button_style() -> Style {
    Style::default()
}

// =============================================================================
// Host chrome styles
// =============================================================================

/// Telegram-blue main button bar.
pub fn main_button_style() -> Style {
    Style::default()
        .fg(Color::White)
        .bg(Color::Rgb(0x24, 0x81, 0xcc))
        .add_modifier(Modifier::BOLD)
}

pub fn hint_style() -> Style {
    Style::default().fg(Color::DarkGray)
}

pub fn dialog_border_style() -> Style {
    Style::default().fg(Color::Yellow)
}
