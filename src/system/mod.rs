//! System-level modules
//!
//! - Logging initialization
//! - Panic handling per run mode
//! - Async runtime startup and shutdown

pub mod logging;
pub mod panic_handler;
pub mod runtime;

pub use logging::init_logging;
pub use panic_handler::{RunMode, install_panic_hook};
pub use runtime::{build_runtime, shutdown_runtime};
