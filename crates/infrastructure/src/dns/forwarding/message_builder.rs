//! DNS Message Builder
//!
//! Constructs DNS query messages in wire format: the fixed 12-byte header
//! followed by a single question.

use super::name_codec::NameCodec;
use super::wire::encode_header;
use ferrous_lookup_domain::{DomainError, Header, RecordClass, RecordType};
use tracing::debug;

/// Builds DNS query messages in wire format
pub struct MessageBuilder;

impl MessageBuilder {
    /// Build a DNS query message and serialize to wire format bytes
    ///
    /// Creates a standard recursive query with:
    /// - The given ID for request/response matching
    /// - RD (Recursion Desired) flag set, every other flag clear
    /// - Single IN-class question
    ///
    /// Deterministic: the same inputs always give the same bytes.
    pub fn build_query(
        id: u16,
        domain: &str,
        record_type: &RecordType,
    ) -> Result<Vec<u8>, DomainError> {
        let mut buf = Vec::with_capacity(512);
        buf.extend_from_slice(&encode_header(&Header::query(id)));

        NameCodec::encode_into(domain, &mut buf)?;
        buf.extend_from_slice(&record_type.to_u16().to_be_bytes());
        buf.extend_from_slice(&RecordClass::IN.to_u16().to_be_bytes());

        debug!(
            id = id,
            domain = %domain,
            qtype = %record_type,
            bytes = buf.len(),
            "DNS query built"
        );

        Ok(buf)
    }

    /// Build a query with a random ID and return both
    ///
    /// Useful when you need the message ID for response matching.
    pub fn build_query_with_id(
        domain: &str,
        record_type: &RecordType,
    ) -> Result<(u16, Vec<u8>), DomainError> {
        let id = fastrand::u16(..);
        let bytes = Self::build_query(id, domain, record_type)?;
        Ok((id, bytes))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_a_query_bytes() {
        let bytes = MessageBuilder::build_query(0x1234, "example.com", &RecordType::A).unwrap();

        let mut expected = vec![
            0x12, 0x34, 0x01, 0x00, 0x00, 0x01, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
        ];
        expected.extend_from_slice(b"\x07example\x03com\x00");
        expected.extend_from_slice(&[0x00, 0x01, 0x00, 0x01]);

        assert_eq!(bytes, expected);
    }

    #[test]
    fn test_build_mx_query_qtype() {
        let bytes = MessageBuilder::build_query(1, "example.com", &RecordType::MX).unwrap();
        let qtype = u16::from_be_bytes([bytes[bytes.len() - 4], bytes[bytes.len() - 3]]);
        assert_eq!(qtype, 15);
    }

    #[test]
    fn test_build_query_with_id() {
        let (id, bytes) = MessageBuilder::build_query_with_id("test.com", &RecordType::A).unwrap();
        // ID is in the first 2 bytes (big-endian)
        let wire_id = u16::from_be_bytes([bytes[0], bytes[1]]);
        assert_eq!(wire_id, id, "Wire ID should match returned ID");
    }

    #[test]
    fn test_invalid_domain_fails_before_io() {
        let domain = format!("{}.example.com", "x".repeat(64));
        let err = MessageBuilder::build_query(7, &domain, &RecordType::A).unwrap_err();
        assert!(err.is_encoding());
    }
}
