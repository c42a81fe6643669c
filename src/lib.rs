//! Qernal TUI - a terminal viewer for the functions deployed in a Qernal project
//!
//! This library provides the pieces behind the `qernal` binary: startup
//! configuration, the client-credentials exchange, the function listing
//! client, row aggregation and the interactive table.

pub mod api;
pub mod auth;
pub mod config;
pub mod error;
pub mod fetch;
pub mod logging;
pub mod rows;
pub mod ui;

pub use config::Config;
pub use error::{Error, Result};
pub use fetch::load_rows;
