//! ferrous-lookup domain layer: DNS message model, errors and configuration.
pub mod config;
pub mod dns_header;
pub mod dns_message;
pub mod dns_record;
pub mod errors;

pub use config::{CliOverrides, Config, ConfigError};
pub use dns_header::{Header, Opcode, ResponseCode};
pub use dns_message::{Message, Question};
pub use dns_record::{RecordClass, RecordData, RecordType, ResourceRecord};
pub use errors::{DomainError, ErrorKind};
