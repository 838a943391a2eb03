//! Tokio runtime lifecycle
//!
//! Provider calls run on the blocking pool. Shutdown does not wait for
//! them: a request still in flight on exit is abandoned with its result.

use tokio::runtime::{Builder, Runtime};
use tracing::debug;

use crate::errors::{CompactorError, Result};

/// Build the multi-threaded runtime the mediator spawns onto
pub fn build_runtime() -> Result<Runtime> {
    Builder::new_multi_thread()
        .enable_all()
        .thread_name("compactor-worker")
        .build()
        .map_err(|e| CompactorError::io(format!("Failed to start async runtime: {}", e)))
}

/// Shut the runtime down without joining in-flight blocking tasks
pub fn shutdown_runtime(runtime: Runtime) {
    debug!("Shutting down runtime");
    runtime.shutdown_background();
}
