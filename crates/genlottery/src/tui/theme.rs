//! Color palette and shared styles for the form surface.

use ratatui::style::{Color, Modifier, Style};

pub const ACCENT: Color = Color::Cyan;
pub const HIGHLIGHT: Color = Color::Magenta;
pub const DIM: Color = Color::DarkGray;
pub const TEXT: Color = Color::Gray;
pub const ERROR: Color = Color::Red;
pub const SUCCESS: Color = Color::Green;

/// Section titles and focused field labels.
pub fn title() -> Style {
    Style::default().fg(ACCENT).add_modifier(Modifier::BOLD)
}

/// The footer key-hint line.
pub fn key_hint() -> Style {
    Style::default().fg(DIM)
}

/// Style for a field label depending on focus.
pub fn field_label(focused: bool) -> Style {
    if focused {
        Style::default().fg(ACCENT)
    } else {
        Style::default().fg(TEXT)
    }
}

/// Border style for a field depending on focus.
pub fn field_border(focused: bool) -> Style {
    if focused {
        Style::default().fg(HIGHLIGHT)
    } else {
        Style::default().fg(DIM)
    }
}
