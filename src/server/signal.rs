// Signal handling module
//
// Supported signals:
// - SIGTERM: Graceful shutdown
// - SIGINT:  Graceful shutdown (Ctrl+C)

use std::sync::Arc;
use tokio::sync::Notify;

use crate::logger;

/// Start signal handlers (Unix only)
///
/// Spawns a background task that waits for SIGTERM or SIGINT and then
/// notifies `shutdown` once. `notify_one` stores a permit, so a signal that
/// arrives before the accept loop awaits is not lost.
///
/// | Signal  | Action           |
/// |---------|------------------|
/// | SIGTERM | Graceful stop    |
/// | SIGINT  | Graceful stop    |
#[cfg(unix)]
pub fn start_signal_handler(shutdown: Arc<Notify>) {
    use tokio::signal::unix::{signal, SignalKind};

    tokio::spawn(async move {
        let (mut sigterm, mut sigint) =
            match (signal(SignalKind::terminate()), signal(SignalKind::interrupt())) {
                (Ok(term), Ok(int)) => (term, int),
                (Err(e), _) | (_, Err(e)) => {
                    logger::log_error(&format!("Failed to register signal handlers: {e}"));
                    return;
                }
            };

        logger::log_info(&format!(
            "Signal handlers registered (SIGTERM, SIGINT), pid {}",
            std::process::id()
        ));

        let name = tokio::select! {
            _ = sigterm.recv() => "SIGTERM",
            _ = sigint.recv() => "SIGINT",
        };

        logger::log_info(&format!("{name} received, initiating graceful shutdown"));
        shutdown.notify_one();
    });
}

/// Non-Unix fallback - only handles Ctrl+C
#[cfg(not(unix))]
pub fn start_signal_handler(shutdown: Arc<Notify>) {
    tokio::spawn(async move {
        match tokio::signal::ctrl_c().await {
            Ok(()) => {
                logger::log_info("Ctrl+C received, initiating graceful shutdown");
                shutdown.notify_one();
            }
            Err(e) => logger::log_error(&format!("Failed to listen for Ctrl+C: {e}")),
        }
    });
}
