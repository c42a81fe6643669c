//! # Qernal CLI Entry Point
//!
//! Shows the functions of a Qernal project as an interactive table.
//!
//! ## Usage
//!
//! ```bash
//! export QERNAL_TOKEN="client-id@client-secret"
//! export QERNAL_PROJECT_ID="..."
//! qernal
//! ```
//!
//! ## Architecture
//!
//! Startup runs in two phases:
//!
//! 1. **Fetch**: read the environment, exchange the token for an access token,
//!    list the project's functions and flatten them into rows
//! 2. **UI**: draw the table inline below the prompt and process key events
//!    one at a time until the user quits
//!
//! A failure in the fetch phase ends the program before the terminal is
//! touched.
//!
//! ## Key Bindings
//!
//! - `↑` / `k`, `↓` / `j` - Move the cursor
//! - `Enter` - Print `Let's go to <function>!` above the table
//! - `Esc` - Focus / unfocus the table
//! - `q` / `Ctrl+c` - Quit

use qernal::config::{Config, LOG_FILE_VAR};
use qernal::logging;
use qernal::ui::{self, app::DEFAULT_HEIGHT, App, Outcome};

use anyhow::{Context, Result};
use clap::Parser;
use crossterm::{
    event::{self, Event},
    terminal::{disable_raw_mode, enable_raw_mode},
};
use ratatui::{
    backend::{Backend, CrosstermBackend},
    text::Line,
    widgets::{Paragraph, Widget},
    Terminal, TerminalOptions, Viewport,
};
use std::io;
use std::panic;
use std::path::PathBuf;
use std::time::Duration;
use tracing::{error, info};

const POLL_TIMEOUT: Duration = Duration::from_millis(250);

/// Trait for reading terminal events (allows dependency injection for testing)
trait EventReader {
    fn read_event(&mut self, timeout: Duration) -> Result<Option<Event>>;
}

/// Production event reader that uses crossterm's event polling + read
struct CrosstermEventReader;

impl EventReader for CrosstermEventReader {
    fn read_event(&mut self, timeout: Duration) -> Result<Option<Event>> {
        if event::poll(timeout).context("Failed to poll for events")? {
            Ok(Some(
                event::read().context("Failed to read keyboard event")?,
            ))
        } else {
            Ok(None)
        }
    }
}

/// Browse the functions deployed in a Qernal project
///
/// Configuration is read from QERNAL_TOKEN, QERNAL_PROJECT_ID,
/// QERNAL_HOST_CHAOS and QERNAL_HOST_HYDRA.
#[derive(Parser, Debug)]
#[command(name = "qernal")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Browse the functions deployed in a Qernal project")]
struct Args {}

#[tokio::main]
async fn main() -> Result<()> {
    let _args = Args::parse();

    let log_file = std::env::var_os(LOG_FILE_VAR).map(PathBuf::from);
    logging::init_tracing(log_file.as_deref())?;

    // Set up panic hook to ensure terminal is restored on panic
    let original_hook = panic::take_hook();
    panic::set_hook(Box::new(move |panic_info| {
        let _ = disable_raw_mode();
        original_hook(panic_info);
    }));

    let result = run_application().await;

    // Restore panic hook
    let _ = panic::take_hook();

    if let Err(ref e) = result {
        error!("{e:#}");
    }
    result
}

/// Read the startup configuration from a variable source.
fn load_config<F>(lookup: F) -> Result<Config>
where
    F: Fn(&str) -> Option<String>,
{
    Config::from_lookup(lookup).context("Failed to load configuration")
}

async fn run_application() -> Result<()> {
    let config = load_config(|key| std::env::var(key).ok())?;
    info!(?config, "starting");

    let rows = qernal::load_rows(&config)
        .await
        .context("Failed to load functions")?;

    let mut app = App::new(rows, DEFAULT_HEIGHT);
    let mut terminal = setup_terminal(ui::viewport_height(&app))?;

    // Run the app and ensure cleanup happens even on error
    let mut event_reader = CrosstermEventReader;
    let run_result = run_app(&mut terminal, &mut app, &mut event_reader);

    // Restore terminal (always runs, even if run_app failed)
    let cleanup_result = cleanup_terminal(&mut terminal);

    // Return the first error that occurred, or Ok if both succeeded
    run_result?;
    cleanup_result?;

    Ok(())
}

/// Enable raw mode and reserve an inline viewport below the prompt.
fn setup_terminal(height: u16) -> Result<Terminal<CrosstermBackend<io::Stdout>>> {
    enable_raw_mode().context("Failed to enable raw mode for terminal")?;

    let backend = CrosstermBackend::new(io::stdout());
    Terminal::with_options(
        backend,
        TerminalOptions {
            viewport: Viewport::Inline(height),
        },
    )
    .inspect_err(|_| {
        let _ = disable_raw_mode();
    })
    .context("Failed to create terminal")
}

/// Clean up terminal state
fn cleanup_terminal(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>) -> Result<()> {
    // Only the printed selections stay behind.
    terminal.clear().context("Failed to clear table")?;

    disable_raw_mode().context("Failed to disable raw mode")?;

    terminal.show_cursor().context("Failed to show cursor")?;

    Ok(())
}

/// Print a line above the inline viewport.
fn print_above<B>(terminal: &mut Terminal<B>, message: &str) -> Result<()>
where
    B: Backend,
    B::Error: std::error::Error + Send + Sync + 'static,
{
    let line = Line::from(message.to_string());
    terminal
        .insert_before(1, |buf| Paragraph::new(line).render(buf.area, buf))
        .context("Failed to print selection")
}

fn run_app<B>(
    terminal: &mut Terminal<B>,
    app: &mut App,
    event_reader: &mut dyn EventReader,
) -> Result<()>
where
    B: Backend,
    B::Error: std::error::Error + Send + Sync + 'static,
{
    loop {
        terminal
            .draw(|f| ui::render(f, app))
            .context("Failed to draw terminal UI")?;

        let event = match event_reader.read_event(POLL_TIMEOUT)? {
            Some(e) => e,
            None => continue,
        };

        if let Event::Key(key) = event {
            match app.handle_key(key) {
                Some(Outcome::Quit) => break,
                Some(outcome) => {
                    if let Some(message) = outcome.message() {
                        info!(%message, "function selected");
                        print_above(terminal, &message)?;
                    }
                }
                None => {}
            }
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}
