use super::{RecordClass, RecordType};
use std::fmt;
use std::net::Ipv4Addr;

/// Type-specific payload of a resource record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RecordData {
    A(Ipv4Addr),

    Mx { preference: u16, exchange: String },

    /// RDATA of any other type, kept byte for byte.
    Unknown(Vec<u8>),
}

impl fmt::Display for RecordData {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RecordData::A(addr) => write!(f, "{}", addr),
            RecordData::Mx {
                preference,
                exchange,
            } => {
                if exchange.ends_with('.') {
                    write!(f, "{} {}", preference, exchange)
                } else {
                    write!(f, "{} {}.", preference, exchange)
                }
            }
            RecordData::Unknown(bytes) => {
                write!(f, "\\# {}", bytes.len())?;
                if !bytes.is_empty() {
                    f.write_str(" ")?;
                    for b in bytes {
                        write!(f, "{:02x}", b)?;
                    }
                }
                Ok(())
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResourceRecord {
    pub name: String,

    pub rtype: u16,

    pub class: u16,

    pub ttl: u32,

    /// RDLENGTH as it appeared on the wire.
    pub rdlength: u16,

    pub data: RecordData,
}

impl ResourceRecord {
    pub fn record_type(&self) -> Option<RecordType> {
        RecordType::from_u16(self.rtype)
    }

    pub fn record_class(&self) -> RecordClass {
        RecordClass::from_u16(self.class)
    }
}
