//! ferrous-lookup infrastructure: DNS wire codec, UDP transport and the
//! single-shot query client built on them.
pub mod dns;
