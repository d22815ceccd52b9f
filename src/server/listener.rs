// Listener module
// Creates the TCP listener through socket2 so socket options are set before bind

use socket2::{Domain, Protocol, Socket, Type};
use tokio::net::TcpListener;

/// Pending connection queue length passed to `listen(2)`
const BACKLOG: i32 = 128;

/// Create a `TcpListener` with `SO_REUSEADDR` enabled.
///
/// Lets the service rebind its port right after a restart while old
/// connections sit in `TIME_WAIT`.
///
/// # Arguments
///
/// * `addr` - The socket address to bind to (port 0 picks an ephemeral port)
pub fn create_listener(addr: std::net::SocketAddr) -> std::io::Result<TcpListener> {
    let domain = if addr.is_ipv4() {
        Domain::IPV4
    } else {
        Domain::IPV6
    };

    let socket = Socket::new(domain, Type::STREAM, Some(Protocol::TCP))?;
    socket.set_reuse_address(true)?;
    // Required before handing the socket to tokio
    socket.set_nonblocking(true)?;
    socket.bind(&addr.into())?;
    socket.listen(BACKLOG)?;

    let std_listener: std::net::TcpListener = socket.into();
    TcpListener::from_std(std_listener)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_binds_ephemeral_port() {
        let listener = create_listener("127.0.0.1:0".parse().unwrap()).unwrap();
        let addr = listener.local_addr().unwrap();
        assert!(addr.ip().is_loopback());
        assert_ne!(addr.port(), 0);
    }

    #[tokio::test]
    async fn test_port_in_use_is_an_error() {
        let first = create_listener("127.0.0.1:0".parse().unwrap()).unwrap();
        let taken = first.local_addr().unwrap();
        assert!(create_listener(taken).is_err());
    }
}
