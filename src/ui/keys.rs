//! # Key Bindings
//!
//! Maps raw crossterm key events onto the closed set of [`Action`]s the
//! function table understands.
//!
//! | Key | Action |
//! |-----|--------|
//! | `Esc` | toggle focus |
//! | `q` / `Ctrl+c` | quit |
//! | `Enter` | select the highlighted function |
//! | `↑` / `k` | up one row |
//! | `↓` / `j` | down one row |
//! | `PgUp` / `b` | up one page |
//! | `PgDn` / `f` / `Space` | down one page |
//! | `u` / `Ctrl+u` | up half a page |
//! | `d` / `Ctrl+d` | down half a page |
//! | `Home` / `g` | first row |
//! | `End` / `G` | last row |

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    ToggleFocus,
    Quit,
    Select,
    Navigate(Motion),
    None,
}

/// Cursor movements delegated to the table body.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Motion {
    Up,
    Down,
    PageUp,
    PageDown,
    HalfPageUp,
    HalfPageDown,
    Top,
    Bottom,
}

impl From<KeyEvent> for Action {
    fn from(key: KeyEvent) -> Self {
        if key.kind != KeyEventKind::Press {
            return Action::None;
        }

        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);

        match key.code {
            KeyCode::Char('c') if ctrl => Action::Quit,
            KeyCode::Char('u') if ctrl => Action::Navigate(Motion::HalfPageUp),
            KeyCode::Char('d') if ctrl => Action::Navigate(Motion::HalfPageDown),
            _ if ctrl => Action::None,
            KeyCode::Esc => Action::ToggleFocus,
            KeyCode::Char('q') => Action::Quit,
            KeyCode::Enter => Action::Select,
            KeyCode::Up | KeyCode::Char('k') => Action::Navigate(Motion::Up),
            KeyCode::Down | KeyCode::Char('j') => Action::Navigate(Motion::Down),
            KeyCode::PageUp | KeyCode::Char('b') => Action::Navigate(Motion::PageUp),
            KeyCode::PageDown | KeyCode::Char('f') | KeyCode::Char(' ') => {
                Action::Navigate(Motion::PageDown)
            }
            KeyCode::Char('u') => Action::Navigate(Motion::HalfPageUp),
            KeyCode::Char('d') => Action::Navigate(Motion::HalfPageDown),
            KeyCode::Home | KeyCode::Char('g') => Action::Navigate(Motion::Top),
            KeyCode::End | KeyCode::Char('G') => Action::Navigate(Motion::Bottom),
            _ => Action::None,
        }
    }
}
