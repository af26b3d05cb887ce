#![allow(dead_code)]
use ferrous_lookup_domain::{RecordData, RecordType, ResourceRecord};
use std::net::Ipv4Addr;

pub struct ResourceRecordBuilder {
    name: String,
    rtype: u16,
    class: u16,
    ttl: u32,
    data: RecordData,
}

impl ResourceRecordBuilder {
    pub fn new() -> Self {
        Self {
            name: "example.com".to_string(),
            rtype: RecordType::A.to_u16(),
            class: 1,
            ttl: 300,
            data: RecordData::A(Ipv4Addr::new(192, 0, 2, 1)),
        }
    }

    pub fn name(mut self, name: &str) -> Self {
        self.name = name.to_string();
        self
    }

    pub fn ttl(mut self, ttl: u32) -> Self {
        self.ttl = ttl;
        self
    }

    pub fn class(mut self, class: u16) -> Self {
        self.class = class;
        self
    }

    pub fn a(mut self, addr: Ipv4Addr) -> Self {
        self.rtype = RecordType::A.to_u16();
        self.data = RecordData::A(addr);
        self
    }

    pub fn mx(mut self, preference: u16, exchange: &str) -> Self {
        self.rtype = RecordType::MX.to_u16();
        self.data = RecordData::Mx {
            preference,
            exchange: exchange.to_string(),
        };
        self
    }

    pub fn raw(mut self, rtype: u16, rdata: &[u8]) -> Self {
        self.rtype = rtype;
        self.data = RecordData::Unknown(rdata.to_vec());
        self
    }

    pub fn build(self) -> ResourceRecord {
        let rdlength = match &self.data {
            RecordData::A(_) => 4,
            RecordData::Mx { exchange, .. } => {
                2 + exchange.split('.').filter(|l| !l.is_empty()).map(|l| l.len() + 1).sum::<usize>() as u16 + 1
            }
            RecordData::Unknown(bytes) => bytes.len() as u16,
        };

        ResourceRecord {
            name: self.name,
            rtype: self.rtype,
            class: self.class,
            ttl: self.ttl,
            rdlength,
            data: self.data,
        }
    }
}
