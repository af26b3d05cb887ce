pub mod udp;

use async_trait::async_trait;
use ferrous_lookup_domain::DomainError;
use std::io;
use std::net::SocketAddr;
use std::time::Duration;

pub use udp::{validate_response_id, UdpTransport};

#[derive(Debug)]
pub struct TransportResponse {
    pub bytes: Vec<u8>,

    pub protocol_used: &'static str,
}

/// Opaque request/response exchange with one resolver.
///
/// Implementations send the datagram once and hand back whatever single
/// reply arrives; timeouts are theirs to enforce, retries are nobody's.
#[async_trait]
pub trait DnsTransport: Send + Sync {
    async fn send(
        &self,
        message_bytes: &[u8],
        timeout: Duration,
    ) -> Result<TransportResponse, DomainError>;

    fn protocol_name(&self) -> &'static str;

    fn server_addr(&self) -> SocketAddr;
}

pub(crate) fn map_io_error(server: SocketAddr, err: io::Error) -> DomainError {
    let server = server.to_string();
    match err.kind() {
        io::ErrorKind::TimedOut | io::ErrorKind::WouldBlock => {
            DomainError::TransportTimeout { server }
        }
        io::ErrorKind::ConnectionRefused => DomainError::TransportConnectionRefused { server },
        io::ErrorKind::ConnectionReset | io::ErrorKind::ConnectionAborted => {
            DomainError::TransportConnectionReset { server }
        }
        _ => DomainError::TransportIo {
            server,
            reason: err.to_string(),
        },
    }
}
