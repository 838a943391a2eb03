//! Panic handler module
//!
//! Provides different panic handling strategies based on running mode:
//! - CLI mode: colored message on stderr
//! - TUI mode: restore the terminal first, then a simple message
//!
//! Panics on background threads are only logged; the mediator turns them
//! into an `UnexpectedError` for the user.

use std::any::Any;
use std::panic;

/// Running mode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunMode {
    Cli,
    Tui,
}

/// Extract the human-readable message from a panic payload
pub fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(s) = payload.downcast_ref::<&str>() {
        s.to_string()
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else {
        "Unknown panic".to_string()
    }
}

/// Install custom panic hook
pub fn install_panic_hook(mode: RunMode) {
    panic::set_hook(Box::new(move |panic_info| {
        let message = panic_message(panic_info.payload());
        let location = panic_info
            .location()
            .map(|loc| format!("{}:{}:{}", loc.file(), loc.line(), loc.column()))
            .unwrap_or_else(|| "Unknown location".to_string());

        let thread = std::thread::current();
        let thread_name = thread.name().unwrap_or("<unnamed>");
        tracing::error!(
            "Panic on thread '{}' at {}: {}",
            thread_name,
            location,
            message
        );

        if thread_name != "main" {
            return;
        }

        match mode {
            RunMode::Tui => {
                #[cfg(feature = "tui")]
                crate::interfaces::tui::restore_terminal();
                display_simple_panic(&message, &location);
            }
            RunMode::Cli => display_colored_panic(&message, &location),
        }
    }));
}

fn display_colored_panic(message: &str, location: &str) {
    use colored::Colorize;

    eprintln!();
    eprintln!("{} {}", "Program panicked:".red().bold(), message.white());
    eprintln!("{} {}", "Location:".yellow().bold(), location.white());
    eprintln!();
}

/// TUI mode: Display simple error message
fn display_simple_panic(message: &str, location: &str) {
    eprintln!();
    eprintln!("Program panicked: {}", message);
    eprintln!("Location: {}", location);
    eprintln!();
}
