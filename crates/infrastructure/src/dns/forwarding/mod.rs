pub mod forwarder;
pub mod message_builder;
pub mod message_parser;
pub mod name_codec;
pub mod wire;

pub use forwarder::{DnsForwarder, LookupResponse};
pub use message_builder::MessageBuilder;
pub use message_parser::MessageParser;
pub use name_codec::NameCodec;
pub use wire::{decode_header, encode_header, WireReader};
