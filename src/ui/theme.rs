//! # Theme
//!
//! Colours used by the renderer, grouped by role. Rendering code references
//! these fields instead of hardcoding `ratatui::style::Color` values.

use ratatui::style::Color;

#[derive(Debug, Clone)]
pub struct Theme {
    /// Logo foreground.
    pub logo: Color,
    /// Table border and header separator.
    pub border: Color,
    /// Regular cell text.
    pub fg: Color,
    /// Text of the whole table while it is unfocused, and the help line.
    pub fg_dim: Color,
    /// Cursor row text.
    pub selected_fg: Color,
    /// Cursor row background.
    pub selected_bg: Color,
}

static QERNAL: Theme = Theme {
    logo: Color::Rgb(76, 74, 210), // #4C4AD2
    border: Color::Indexed(240),
    fg: Color::Reset,
    fg_dim: Color::Indexed(241),
    selected_fg: Color::Indexed(229),
    selected_bg: Color::Indexed(57),
};

impl Theme {
    pub fn default_theme() -> &'static Theme {
        &QERNAL
    }
}
