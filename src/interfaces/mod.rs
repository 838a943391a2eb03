//! User-facing surfaces: one-shot CLI commands and the terminal UI

pub mod cli;

#[cfg(feature = "tui")]
pub mod tui;
