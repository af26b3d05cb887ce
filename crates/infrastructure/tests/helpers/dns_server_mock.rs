#![allow(dead_code)]
use async_trait::async_trait;
use ferrous_lookup_domain::DomainError;
use ferrous_lookup_infrastructure::dns::transport::{DnsTransport, TransportResponse};
use std::net::SocketAddr;
use std::sync::Mutex;
use std::time::Duration;
use tokio::net::UdpSocket;
use tokio::sync::oneshot;

pub type Responder = fn(&[u8]) -> Option<Vec<u8>>;

/// Loopback UDP server answering each datagram through a [`Responder`].
pub struct MockDnsServer {
    addr: SocketAddr,
    shutdown_tx: Option<oneshot::Sender<()>>,
}

impl MockDnsServer {
    /// Answers every query with one A record, 93.184.216.34, TTL 60.
    pub async fn start() -> Result<Self, std::io::Error> {
        Self::start_with(Self::build_mock_response).await
    }

    /// Receives queries and never replies.
    pub async fn start_silent() -> Result<Self, std::io::Error> {
        Self::start_with(|_| None).await
    }

    pub async fn start_with(responder: Responder) -> Result<Self, std::io::Error> {
        let socket = UdpSocket::bind(SocketAddr::from(([127, 0, 0, 1], 0))).await?;
        let local_addr = socket.local_addr()?;

        let (shutdown_tx, mut shutdown_rx) = oneshot::channel();

        tokio::spawn(async move {
            let mut buf = vec![0u8; 512];

            loop {
                tokio::select! {
                    _ = &mut shutdown_rx => {
                        break;
                    }
                    result = socket.recv_from(&mut buf) => {
                        if let Ok((len, peer)) = result {
                            if let Some(response) = responder(&buf[..len]) {
                                let _ = socket.send_to(&response, peer).await;
                            }
                        }
                    }
                }
            }
        });

        Ok(Self {
            addr: local_addr,
            shutdown_tx: Some(shutdown_tx),
        })
    }

    pub fn addr(&self) -> SocketAddr {
        self.addr
    }

    pub fn build_mock_response(query: &[u8]) -> Option<Vec<u8>> {
        if query.len() < 12 {
            return None;
        }

        let mut response = Vec::with_capacity(512);
        response.extend_from_slice(&query[0..2]);
        response.extend_from_slice(&[0x81, 0x80]);
        response.extend_from_slice(&query[4..6]);
        response.extend_from_slice(&[0x00, 0x01]);
        response.extend_from_slice(&[0x00, 0x00]);
        response.extend_from_slice(&[0x00, 0x00]);
        response.extend_from_slice(&query[12..]);
        response.extend_from_slice(&[
            0xC0, 0x0C, // owner -> question name
            0x00, 0x01, // A
            0x00, 0x01, // IN
            0x00, 0x00, 0x00, 0x3C, // TTL 60
            0x00, 0x04, // RDLENGTH
            93, 184, 216, 34,
        ]);
        Some(response)
    }
}

impl Drop for MockDnsServer {
    fn drop(&mut self) {
        if let Some(tx) = self.shutdown_tx.take() {
            let _ = tx.send(());
        }
    }
}

/// In-memory transport: hands every request to a [`Responder`] and records it.
pub struct MockTransport {
    responder: Responder,
    requests: Mutex<Vec<Vec<u8>>>,
}

impl MockTransport {
    pub fn new(responder: Responder) -> Self {
        Self {
            responder,
            requests: Mutex::new(Vec::new()),
        }
    }

    pub fn request_count(&self) -> usize {
        self.requests.lock().unwrap().len()
    }

    pub fn last_request(&self) -> Option<Vec<u8>> {
        self.requests.lock().unwrap().last().cloned()
    }
}

#[async_trait]
impl DnsTransport for MockTransport {
    async fn send(
        &self,
        message_bytes: &[u8],
        _timeout: Duration,
    ) -> Result<TransportResponse, DomainError> {
        self.requests.lock().unwrap().push(message_bytes.to_vec());

        match (self.responder)(message_bytes) {
            Some(bytes) => Ok(TransportResponse {
                bytes,
                protocol_used: "MOCK",
            }),
            None => Err(DomainError::TransportTimeout {
                server: self.server_addr().to_string(),
            }),
        }
    }

    fn protocol_name(&self) -> &'static str {
        "MOCK"
    }

    fn server_addr(&self) -> SocketAddr {
        SocketAddr::from(([192, 0, 2, 53], 53))
    }
}
