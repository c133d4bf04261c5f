//! OS signal handling.
//!
//! Ctrl+C (SIGINT) triggers graceful shutdown. Nothing is reloadable, so no
//! other signal is handled.

use crate::lifecycle::shutdown::Shutdown;

/// Trigger `shutdown` on the first Ctrl+C.
pub fn spawn_ctrl_c_handler(shutdown: Shutdown) {
    tokio::spawn(async move {
        match tokio::signal::ctrl_c().await {
            Ok(()) => tracing::info!("Ctrl+C received"),
            Err(e) => tracing::error!(error = %e, "Failed to install Ctrl+C handler"),
        }
        shutdown.trigger();
    });
}
