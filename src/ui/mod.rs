//! # UI Module
//!
//! The interactive function table and everything needed to draw it.
//!
//! ## Components
//!
//! - [`App`] - Table state: rows, cursor, focus and quit flag
//! - [`keys`] - Key event to [`keys::Action`] mapping
//! - [`mod@render`] - Rendering of the logo, table and help line
//!
//! ## Layout
//!
//! The view is drawn inline, below the shell prompt:
//!
//! ```text
//!  ██████  ███████ ██████  ███    ██  █████  ██
//!  ...                                    (logo)
//! ┌──────────────────────────────────────────────┐
//! │Function          Type Providers  Regions ... │
//! │──────────────────────────────────────────────│
//! │checkout-api      http aws        US, DE  ... │
//! │...                                           │
//! └──────────────────────────────────────────────┘
//!   ↑/k up • ↓/j down • enter select • esc focus • q quit
//! ```

pub mod app;
pub mod keys;
pub mod render;
pub mod theme;

pub use app::{App, Focus, Outcome};
pub use render::{render, viewport_height};
