// Connection handling module
// Accepts a TCP connection and serves it over HTTP/1.1 on its own task

use std::sync::atomic::Ordering;
use std::sync::Arc;

use hyper::server::conn::http1;
use hyper::service::service_fn;
use hyper_util::rt::TokioIo;

use crate::config::AppState;
use crate::handler;
use crate::logger;

/// Accept and process a connection, checking limits and logging.
///
/// # Arguments
///
/// * `stream` - The TCP stream to handle
/// * `peer_addr` - The peer's socket address
/// * `state` - Shared application state
pub fn accept_connection(
    stream: tokio::net::TcpStream,
    peer_addr: std::net::SocketAddr,
    state: &Arc<AppState>,
) {
    // Increment counter first, then check limit (prevents race condition)
    let prev_count = state.active_connections.fetch_add(1, Ordering::SeqCst);

    if let Some(max_conn) = state.config.performance.max_connections {
        if prev_count >= usize::try_from(max_conn).unwrap_or(usize::MAX) {
            state.active_connections.fetch_sub(1, Ordering::SeqCst);
            logger::log_warning(&format!(
                "Max connections reached: {prev_count}/{max_conn}. Connection from {peer_addr} rejected."
            ));
            drop(stream);
            return;
        }
    }

    logger::log_connection_accepted(&peer_addr);
    handle_connection(stream, peer_addr, Arc::clone(state));
}

/// Serve a single connection in a spawned task.
///
/// Keep-alive follows `performance.keep_alive_timeout`; the whole connection
/// is bounded by the larger of the read and write timeouts. The connection
/// counter is decremented when the task ends, whatever the outcome.
fn handle_connection(
    stream: tokio::net::TcpStream,
    peer_addr: std::net::SocketAddr,
    state: Arc<AppState>,
) {
    tokio::spawn(async move {
        let io = TokioIo::new(stream);

        let performance = &state.config.performance;
        let timeout_duration = std::time::Duration::from_secs(std::cmp::max(
            performance.read_timeout,
            performance.write_timeout,
        ));

        let mut builder = http1::Builder::new();
        builder.keep_alive(performance.keep_alive_timeout > 0);

        let service_state = Arc::clone(&state);
        let conn = builder.serve_connection(
            io,
            service_fn(move |req| {
                let response = handler::handle_request(&req, &service_state, peer_addr);
                async move { response }
            }),
        );

        match tokio::time::timeout(timeout_duration, conn).await {
            Ok(Ok(())) => {}
            Ok(Err(err)) => logger::log_connection_error(&err),
            Err(_) => {
                logger::log_warning(&format!(
                    "Connection from {peer_addr} timed out after {} seconds",
                    timeout_duration.as_secs()
                ));
            }
        }

        state.active_connections.fetch_sub(1, Ordering::SeqCst);
    });
}
