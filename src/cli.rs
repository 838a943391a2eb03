//! Command-line interface definitions using clap
//!
//! Every argument is optional: running the binary with none starts the
//! terminal UI.

use clap::{Parser, Subcommand};

/// Uniform Resource Compactor - turn long URLs into short ones
#[derive(Parser, Debug)]
#[command(name = "url-compactor")]
#[command(version)]
#[command(about = "Turn long URLs into short ones via a public shortening service", long_about = None)]
pub struct Cli {
    /// Configuration file (default: compactor.toml, optional)
    #[arg(long, short = 'c', global = true)]
    pub config: Option<String>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available commands
#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum Commands {
    /// Start TUI mode (default)
    #[cfg(feature = "tui")]
    Tui,

    /// Shorten a single URL and print the result
    Shorten {
        /// The long URL to shorten
        url: String,

        /// Also copy the short URL to the clipboard
        #[arg(long)]
        copy: bool,
    },

    /// Manage configuration
    Config {
        #[command(subcommand)]
        action: ConfigCommands,
    },
}

/// Configuration management commands
#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum ConfigCommands {
    /// Generate example configuration file
    Generate {
        /// Output path (default: compactor.example.toml)
        output_path: Option<String>,

        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
}
