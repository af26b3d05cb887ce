use thiserror::Error;

use crate::config::ConfigError;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("Invalid domain name: {0}")]
    InvalidDomainName(String),

    #[error("Malformed DNS message: {0}")]
    MalformedMessage(String),

    #[error("Transport timeout talking to {server}")]
    TransportTimeout { server: String },

    #[error("Transport connection refused by {server}")]
    TransportConnectionRefused { server: String },

    #[error("Transport connection reset by {server}")]
    TransportConnectionReset { server: String },

    #[error("Transport I/O error with {server}: {reason}")]
    TransportIo { server: String, reason: String },

    #[error("Response ID mismatch from {server}: expected {expected:#06x}, received {received:#06x}")]
    TransportResponseMismatch {
        server: String,
        expected: u16,
        received: u16,
    },

    #[error("Configuration error: {0}")]
    ConfigError(String),
}

/// Coarse classification of a [`DomainError`].
///
/// Every failure of a query/response cycle belongs to exactly one kind;
/// none of them is retried.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// The domain name cannot be put on the wire. Raised before any I/O.
    Encoding,
    /// The response datagram does not decode.
    MalformedMessage,
    /// Sending or receiving the datagram failed.
    Transport,
    Config,
}

impl DomainError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            DomainError::InvalidDomainName(_) => ErrorKind::Encoding,
            DomainError::MalformedMessage(_) => ErrorKind::MalformedMessage,
            DomainError::TransportTimeout { .. }
            | DomainError::TransportConnectionRefused { .. }
            | DomainError::TransportConnectionReset { .. }
            | DomainError::TransportIo { .. }
            | DomainError::TransportResponseMismatch { .. } => ErrorKind::Transport,
            DomainError::ConfigError(_) => ErrorKind::Config,
        }
    }

    pub fn is_encoding(&self) -> bool {
        self.kind() == ErrorKind::Encoding
    }

    pub fn is_malformed(&self) -> bool {
        self.kind() == ErrorKind::MalformedMessage
    }

    pub fn is_transport(&self) -> bool {
        self.kind() == ErrorKind::Transport
    }
}

impl From<ConfigError> for DomainError {
    fn from(err: ConfigError) -> Self {
        DomainError::ConfigError(err.to_string())
    }
}
