//! Bounds-checked cursor over a raw DNS message, plus the fixed header codec.

use ferrous_lookup_domain::dns_header::HEADER_LEN;
use ferrous_lookup_domain::{DomainError, Header};

/// Read cursor over a complete message buffer.
///
/// Every read is checked against the end of the buffer; running past it is a
/// malformed message, never a panic.
pub struct WireReader<'a> {
    buf: &'a [u8],
    pos: usize,
}

impl<'a> WireReader<'a> {
    pub fn new(buf: &'a [u8]) -> Self {
        Self { buf, pos: 0 }
    }

    pub fn buffer(&self) -> &'a [u8] {
        self.buf
    }

    pub fn position(&self) -> usize {
        self.pos
    }

    pub fn set_position(&mut self, pos: usize) {
        self.pos = pos;
    }

    pub fn remaining(&self) -> usize {
        self.buf.len().saturating_sub(self.pos)
    }

    pub fn read_bytes(&mut self, len: usize) -> Result<&'a [u8], DomainError> {
        let end = self.pos.checked_add(len).ok_or_else(|| out_of_bounds(self.pos, len))?;
        let bytes = self
            .buf
            .get(self.pos..end)
            .ok_or_else(|| out_of_bounds(self.pos, len))?;
        self.pos = end;
        Ok(bytes)
    }

    pub fn read_u8(&mut self) -> Result<u8, DomainError> {
        Ok(self.read_bytes(1)?[0])
    }

    pub fn read_u16(&mut self) -> Result<u16, DomainError> {
        let b = self.read_bytes(2)?;
        Ok(u16::from_be_bytes([b[0], b[1]]))
    }

    pub fn read_u32(&mut self) -> Result<u32, DomainError> {
        let b = self.read_bytes(4)?;
        Ok(u32::from_be_bytes([b[0], b[1], b[2], b[3]]))
    }
}

fn out_of_bounds(pos: usize, len: usize) -> DomainError {
    DomainError::MalformedMessage(format!(
        "read of {} bytes at offset {} exceeds message bounds",
        len, pos
    ))
}

pub fn encode_header(header: &Header) -> [u8; HEADER_LEN] {
    let mut buf = [0u8; HEADER_LEN];
    buf[0..2].copy_from_slice(&header.id.to_be_bytes());
    buf[2..4].copy_from_slice(&header.flags.to_be_bytes());
    buf[4..6].copy_from_slice(&header.question_count.to_be_bytes());
    buf[6..8].copy_from_slice(&header.answer_count.to_be_bytes());
    buf[8..10].copy_from_slice(&header.authority_count.to_be_bytes());
    buf[10..12].copy_from_slice(&header.additional_count.to_be_bytes());
    buf
}

pub fn decode_header(reader: &mut WireReader<'_>) -> Result<Header, DomainError> {
    if reader.remaining() < HEADER_LEN {
        return Err(DomainError::MalformedMessage(format!(
            "message is {} bytes, shorter than the {}-byte header",
            reader.buffer().len(),
            HEADER_LEN
        )));
    }

    Ok(Header {
        id: reader.read_u16()?,
        flags: reader.read_u16()?,
        question_count: reader.read_u16()?,
        answer_count: reader.read_u16()?,
        authority_count: reader.read_u16()?,
        additional_count: reader.read_u16()?,
    })
}
