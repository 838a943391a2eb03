//! CLI interface module
//!
//! One-shot commands that reuse the same mediator as the TUI.

pub mod commands;

use std::fmt;
use std::sync::Arc;

use crate::cli::{Commands, ConfigCommands};
use crate::clipboard::handoff_clipboard;
use crate::config::StaticConfig;
use crate::errors::CompactorError;
use crate::mediator::Mediator;
use crate::provider::TinyUrlProvider;
use commands::{config_generate, shorten_url};

#[derive(Debug)]
pub enum CliError {
    Compactor(CompactorError),
    CommandError(String),
}

impl CliError {
    /// Format as simple output
    pub fn format_simple(&self) -> String {
        match self {
            CliError::Compactor(err) => err.format_simple(),
            CliError::CommandError(msg) => format!("Command error: {}", msg),
        }
    }

    /// Format as colored output
    pub fn format_colored(&self) -> String {
        use colored::Colorize;
        match self {
            CliError::Compactor(err) => err.format_colored(),
            CliError::CommandError(msg) => {
                format!("{} {}", "Command error:".red().bold(), msg.white())
            }
        }
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.format_simple())
    }
}

impl std::error::Error for CliError {}

impl From<CompactorError> for CliError {
    fn from(err: CompactorError) -> Self {
        CliError::Compactor(err)
    }
}

impl From<std::io::Error> for CliError {
    fn from(err: std::io::Error) -> Self {
        CliError::Compactor(err.into())
    }
}

/// Run a CLI command from clap-parsed input
pub async fn run_cli_command(cmd: Commands, config: &StaticConfig) -> Result<(), CliError> {
    match cmd {
        Commands::Shorten { url, copy } => {
            let mut mediator = Mediator::new(
                Arc::new(TinyUrlProvider::from_config(&config.provider)),
                handoff_clipboard(),
            );
            shorten_url(&mut mediator, &url, copy).await
        }

        Commands::Config {
            action: ConfigCommands::Generate { output_path, force },
        } => config_generate(output_path, force),

        #[cfg(feature = "tui")]
        Commands::Tui => Err(CliError::CommandError(
            "the tui command is not a one-shot command".to_string(),
        )),
    }
}
