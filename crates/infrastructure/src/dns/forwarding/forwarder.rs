use super::message_builder::MessageBuilder;
use super::message_parser::MessageParser;
use crate::dns::transport::{validate_response_id, DnsTransport};
use ferrous_lookup_domain::{DomainError, Message, RecordType};
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::{Duration, Instant};
use tracing::{debug, info, warn};

/// Outcome of one query/response round-trip.
#[derive(Debug, Clone)]
pub struct LookupResponse {
    pub query_id: u16,

    pub message: Message,

    /// From just before the send until the reply arrived.
    pub elapsed: Duration,

    pub response_size: usize,

    pub protocol: &'static str,

    pub server: SocketAddr,
}

/// Single-shot DNS client: build one query, exchange it once, parse the reply.
///
/// No caching, no retries, no TCP fallback. Each call is independent.
pub struct DnsForwarder {
    transport: Arc<dyn DnsTransport>,
    timeout: Duration,
}

impl DnsForwarder {
    pub fn new(transport: Arc<dyn DnsTransport>, timeout: Duration) -> Self {
        Self { transport, timeout }
    }

    /// Query the configured server for `domain`
    pub async fn query(
        &self,
        domain: &str,
        record_type: &RecordType,
    ) -> Result<LookupResponse, DomainError> {
        let (query_id, request_bytes) = MessageBuilder::build_query_with_id(domain, record_type)?;
        let server = self.transport.server_addr();

        info!(
            domain = %domain,
            qtype = %record_type,
            server = %server,
            protocol = self.transport.protocol_name(),
            "Sending DNS query"
        );

        let started = Instant::now();
        let response = self.transport.send(&request_bytes, self.timeout).await?;
        let elapsed = started.elapsed();

        validate_response_id(&request_bytes, &response.bytes, server)?;

        let message = MessageParser::parse(&response.bytes)?;

        if message.is_truncated() {
            warn!(
                domain = %domain,
                server = %server,
                "Response has TC flag set; showing the truncated answer as received"
            );
        }

        debug!(
            id = query_id,
            rcode = %message.header.response_code(),
            elapsed_ms = elapsed.as_millis() as u64,
            bytes = response.bytes.len(),
            "DNS query completed"
        );

        Ok(LookupResponse {
            query_id,
            response_size: response.bytes.len(),
            message,
            elapsed,
            protocol: response.protocol_used,
            server,
        })
    }
}
