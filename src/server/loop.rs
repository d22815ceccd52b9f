// Server loop module
// Accepts connections until shutdown is signalled, then drains in-flight ones

use std::sync::Arc;
use std::time::Duration;
use tokio::net::TcpListener;
use tokio::sync::Notify;

use super::connection::accept_connection;
use crate::config::AppState;
use crate::logger;

/// Poll interval while waiting for in-flight connections to finish
const DRAIN_POLL: Duration = Duration::from_millis(50);

/// Accept connections until `shutdown` is notified.
///
/// The listener is closed as soon as shutdown arrives; connections already
/// accepted get up to `grace` to finish before this function returns.
#[allow(clippy::ignored_unit_patterns)]
pub async fn start_server_loop(
    listener: TcpListener,
    state: Arc<AppState>,
    shutdown: Arc<Notify>,
    grace: Duration,
) -> Result<(), Box<dyn std::error::Error>> {
    let local_addr = listener.local_addr()?;

    loop {
        tokio::select! {
            accept_result = listener.accept() => {
                match accept_result {
                    Ok((stream, peer_addr)) => accept_connection(stream, peer_addr, &state),
                    Err(e) => logger::log_error(&format!("Failed to accept connection: {e}")),
                }
            }

            _ = shutdown.notified() => {
                logger::log_info(&format!("Shutdown requested, closing listener on {local_addr}"));
                break;
            }
        }
    }

    drop(listener);
    drain_connections(&state, grace).await;
    Ok(())
}

/// Wait until no connection is active or `grace` has elapsed.
async fn drain_connections(state: &AppState, grace: Duration) {
    let deadline = tokio::time::Instant::now() + grace;

    loop {
        let active = state.active_connections();
        if active == 0 {
            logger::log_info("All connections closed");
            return;
        }
        if tokio::time::Instant::now() >= deadline {
            logger::log_warning(&format!(
                "Grace period of {grace:?} elapsed with {active} connection(s) still open"
            ));
            return;
        }
        tokio::time::sleep(DRAIN_POLL).await;
    }
}
