//! Uniform Resource Compactor - turn long URLs into short ones
//!
//! A small desktop utility: paste a long URL, get a short one from a public
//! shortening service, copy it to the clipboard.
//!
//! # Features
//! - **tui**: Terminal user interface and system clipboard (default)
//!
//! # Architecture
//! - `mediator`: Request lifecycle between the UI and the provider
//! - `provider`: Shortening service abstraction (TinyURL)
//! - `clipboard`: Clipboard abstraction
//! - `interfaces`: User interfaces (CLI, TUI)
//! - `config`: Configuration management
//! - `system`: Logging and panic handling

pub mod cli;
pub mod clipboard;
pub mod config;
pub mod errors;
pub mod interfaces;
pub mod mediator;
pub mod provider;
pub mod system;
