//! Terminal User Interface (TUI) module
//!
//! Single-window front end for the mediator: a long URL input, the
//! "Generate Short URL" trigger, the read-only result and a copy button.
//! Background results are drained between input polls, so every state
//! change happens on the UI thread.

use std::io::{self, Stderr};
use std::time::Duration;

use ratatui::{
    Terminal,
    backend::CrosstermBackend,
    crossterm::{
        cursor::Show,
        event::{self, DisableBracketedPaste, EnableBracketedPaste, Event},
        execute,
        terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
    },
};
use tracing::{debug, info};

mod app;
mod constants;
mod event_handler;
mod input_handler;
mod ui;

use crate::config::StaticConfig;
use app::App;
use constants::EVENT_POLL_INTERVAL_MS;
use ui::ui;

/// Run the TUI application
///
/// Must be called from within a tokio runtime; the mediator spawns its
/// requests onto it.
pub fn run_tui(config: &StaticConfig) -> io::Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stderr = io::stderr();
    execute!(stderr, EnterAlternateScreen, EnableBracketedPaste)?;
    let backend = CrosstermBackend::new(stderr);
    let mut terminal = Terminal::new(backend)?;

    let mut app = App::new(config);
    info!("TUI started, provider: {}", app.mediator.provider_name());
    let res = run_app(&mut terminal, &mut app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableBracketedPaste
    )?;
    terminal.show_cursor()?;

    if app.mediator.is_in_flight() {
        debug!("Exiting with a request still in flight; its result is discarded");
    }
    info!("TUI exited");

    res
}

/// Best-effort terminal restore for the panic hook
pub fn restore_terminal() {
    let _ = disable_raw_mode();
    let _ = execute!(
        io::stderr(),
        LeaveAlternateScreen,
        DisableBracketedPaste,
        Show
    );
}

/// Main application loop
fn run_app(terminal: &mut Terminal<CrosstermBackend<Stderr>>, app: &mut App) -> io::Result<()> {
    let poll_interval = Duration::from_millis(EVENT_POLL_INTERVAL_MS);

    loop {
        app.drain_completions();

        // Render UI
        terminal.draw(|f| ui(f, app))?;

        // Handle events
        if !event::poll(poll_interval)? {
            continue;
        }
        match event::read()? {
            Event::Key(key) => {
                if event_handler::handle_key_event(app, key) {
                    return Ok(());
                }
            }
            Event::Paste(text) => input_handler::handle_paste(app, &text),
            _ => {}
        }
    }
}
