use crate::rows::DisplayRow;
use crate::ui::keys::{Action, Motion};
use crossterm::event::KeyEvent;
use tracing::debug;

/// Number of table rows shown at once.
pub const DEFAULT_HEIGHT: usize = 7;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    Focused,
    Unfocused,
}

/// Result of a key press that leaves the table itself.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// The user confirmed the highlighted function.
    Selected(String),
    Quit,
}

impl Outcome {
    /// Line to print for this outcome, if any.
    pub fn message(&self) -> Option<String> {
        match self {
            Outcome::Selected(name) => Some(format!("Let's go to {}!", name)),
            Outcome::Quit => None,
        }
    }
}

pub struct App {
    pub rows: Vec<DisplayRow>,
    pub selected_index: usize,
    pub focus: Focus,
    pub height: usize,
    /// First visible row; only moves when the cursor would leave the window.
    pub scroll_offset: usize,
    pub should_quit: bool,
}

impl App {
    pub fn new(rows: Vec<DisplayRow>, height: usize) -> Self {
        Self {
            rows,
            selected_index: 0,
            focus: Focus::Focused,
            height: height.max(1),
            scroll_offset: 0,
            should_quit: false,
        }
    }

    pub fn is_focused(&self) -> bool {
        self.focus == Focus::Focused
    }

    pub fn toggle_focus(&mut self) {
        self.focus = match self.focus {
            Focus::Focused => Focus::Unfocused,
            Focus::Unfocused => Focus::Focused,
        };
    }

    pub fn selected_row(&self) -> Option<&DisplayRow> {
        self.rows.get(self.selected_index)
    }

    pub fn handle_key(&mut self, key: KeyEvent) -> Option<Outcome> {
        self.apply(Action::from(key))
    }

    /// Run one action against the table. Nothing happens once the session
    /// has quit.
    pub fn apply(&mut self, action: Action) -> Option<Outcome> {
        if self.should_quit {
            return None;
        }

        match action {
            Action::ToggleFocus => {
                self.toggle_focus();
                debug!(focus = ?self.focus, "focus toggled");
                None
            }
            Action::Quit => {
                self.should_quit = true;
                Some(Outcome::Quit)
            }
            Action::Select => {
                if !self.is_focused() {
                    return None;
                }
                self.selected_row()
                    .map(|row| Outcome::Selected(row.name.clone()))
            }
            Action::Navigate(motion) => {
                if self.is_focused() {
                    self.move_cursor(motion);
                }
                None
            }
            Action::None => None,
        }
    }

    fn move_cursor(&mut self, motion: Motion) {
        let Some(last) = self.rows.len().checked_sub(1) else {
            return;
        };

        let half = (self.height / 2).max(1);
        let current = self.selected_index;

        self.selected_index = match motion {
            Motion::Up => current.saturating_sub(1),
            Motion::Down => current + 1,
            Motion::PageUp => current.saturating_sub(self.height),
            Motion::PageDown => current + self.height,
            Motion::HalfPageUp => current.saturating_sub(half),
            Motion::HalfPageDown => current + half,
            Motion::Top => 0,
            Motion::Bottom => last,
        }
        .min(last);
        self.scroll_offset = self.offset();
    }

    /// Index of the first row in the visible window. The stored offset is
    /// kept while the cursor is inside `[offset, offset + height)`.
    pub fn offset(&self) -> usize {
        if self.selected_index < self.scroll_offset {
            self.selected_index
        } else if self.selected_index >= self.scroll_offset + self.height {
            self.selected_index + 1 - self.height
        } else {
            self.scroll_offset
        }
    }

    /// Rows currently inside the window, with their absolute indices.
    pub fn visible_rows(&self) -> impl Iterator<Item = (usize, &DisplayRow)> {
        self.rows
            .iter()
            .enumerate()
            .skip(self.offset())
            .take(self.height)
    }
}
