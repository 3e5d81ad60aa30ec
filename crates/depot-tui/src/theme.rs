//! Harborlight palette and the style helpers built on it.

use ratatui::style::{Color, Modifier, Style};

pub const DEEP_TEAL: Color = Color::Rgb(95, 220, 200); // #5fdcc8
pub const HARBOR_BLUE: Color = Color::Rgb(120, 170, 255); // #78aaff
pub const SUCCESS_GREEN: Color = Color::Rgb(105, 240, 130); // #69f082
pub const WARNING_AMBER: Color = Color::Rgb(255, 184, 108); // #ffb86c
pub const ERROR_RED: Color = Color::Rgb(255, 105, 97); // #ff6961

pub const FOG: Color = Color::Rgb(200, 204, 214); // #c8ccd6
pub const SLATE: Color = Color::Rgb(96, 108, 144); // #606c90
pub const WAVE: Color = Color::Rgb(42, 46, 60); // #2a2e3c

/// Panel/block title.
pub fn panel_title() -> Style {
    Style::new().fg(DEEP_TEAL).add_modifier(Modifier::BOLD)
}

/// Panel border, brighter when the panel is the active screen.
pub fn border(focused: bool) -> Style {
    Style::new().fg(if focused { HARBOR_BLUE } else { SLATE })
}

/// Table header row.
pub fn header() -> Style {
    Style::new()
        .fg(DEEP_TEAL)
        .add_modifier(Modifier::BOLD | Modifier::UNDERLINED)
}

/// Ordinary table row text.
pub fn row() -> Style {
    Style::new().fg(FOG)
}

/// The row under the cursor.
pub fn selected() -> Style {
    Style::new()
        .fg(HARBOR_BLUE)
        .bg(WAVE)
        .add_modifier(Modifier::BOLD)
}

/// Tab-bar entry.
pub fn tab(active: bool) -> Style {
    if active {
        Style::new().fg(HARBOR_BLUE).add_modifier(Modifier::BOLD)
    } else {
        Style::new().fg(FOG)
    }
}

/// Key-hint descriptive text ("quit", "search").
pub fn hint() -> Style {
    Style::new().fg(SLATE)
}

/// Key-hint key character ("q", "/").
pub fn hint_key() -> Style {
    Style::new().fg(DEEP_TEAL).add_modifier(Modifier::BOLD)
}

/// Numeric cell tiered by a severity threshold.
pub fn severity(ok: bool) -> Style {
    Style::new().fg(if ok { SUCCESS_GREEN } else { WARNING_AMBER })
}
