pub mod forwarding;
pub mod transport;

pub use forwarding::{DnsForwarder, LookupResponse, MessageBuilder, MessageParser, NameCodec};
pub use transport::{DnsTransport, TransportResponse, UdpTransport};
