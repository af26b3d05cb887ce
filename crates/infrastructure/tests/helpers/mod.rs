#![allow(dead_code)]
pub mod builders;
pub mod dns_server_mock;

pub use builders::{encode_name, ResponseBuilder, Section, PTR_FIRST_QUESTION};
pub use dns_server_mock::{MockDnsServer, MockTransport};
