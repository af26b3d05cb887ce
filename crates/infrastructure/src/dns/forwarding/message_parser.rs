use super::name_codec::NameCodec;
use super::wire::{decode_header, WireReader};
use ferrous_lookup_domain::{
    DomainError, Message, Question, RecordData, RecordType, ResourceRecord,
};
use std::net::Ipv4Addr;
use tracing::debug;

/// TYPE + CLASS + TTL + RDLENGTH
const RR_FIXED_LEN: usize = 10;

pub struct MessageParser;

impl MessageParser {
    /// Decode a complete response datagram.
    ///
    /// Either every section decodes and the record counts match the header
    /// exactly, or an error is returned; no partial message is produced.
    pub fn parse(response_bytes: &[u8]) -> Result<Message, DomainError> {
        let mut reader = WireReader::new(response_bytes);
        let header = decode_header(&mut reader)?;

        let mut questions = Vec::with_capacity(header.question_count as usize);
        for _ in 0..header.question_count {
            questions.push(Self::read_question(&mut reader)?);
        }

        let answers = Self::read_records(&mut reader, header.answer_count)?;
        let authorities = Self::read_records(&mut reader, header.authority_count)?;
        let additionals = Self::read_records(&mut reader, header.additional_count)?;

        if reader.remaining() != 0 {
            return Err(DomainError::MalformedMessage(format!(
                "{} bytes left over after {} records announced by the header",
                reader.remaining(),
                header.record_count()
            )));
        }

        debug!(
            id = header.id,
            rcode = %header.response_code(),
            truncated = header.truncated(),
            questions = questions.len(),
            answers = answers.len(),
            authority = authorities.len(),
            additional = additionals.len(),
            "DNS response parsed"
        );

        Ok(Message {
            header,
            questions,
            answers,
            authorities,
            additionals,
        })
    }

    fn read_name(reader: &mut WireReader<'_>) -> Result<String, DomainError> {
        let (name, next) = NameCodec::decode(reader.buffer(), reader.position())?;
        reader.set_position(next);
        Ok(name)
    }

    fn read_question(reader: &mut WireReader<'_>) -> Result<Question, DomainError> {
        let name = Self::read_name(reader)?;
        let qtype = reader.read_u16()?;
        let qclass = reader.read_u16()?;

        Ok(Question {
            name,
            qtype,
            qclass,
        })
    }

    fn read_records(
        reader: &mut WireReader<'_>,
        count: u16,
    ) -> Result<Vec<ResourceRecord>, DomainError> {
        let mut records = Vec::with_capacity(count as usize);
        for _ in 0..count {
            records.push(Self::read_record(reader)?);
        }
        Ok(records)
    }

    fn read_record(reader: &mut WireReader<'_>) -> Result<ResourceRecord, DomainError> {
        let name = Self::read_name(reader)?;

        if reader.remaining() < RR_FIXED_LEN {
            return Err(DomainError::MalformedMessage(format!(
                "record '{}' at offset {} is cut short",
                name,
                reader.position()
            )));
        }

        let rtype = reader.read_u16()?;
        let class = reader.read_u16()?;
        let ttl = reader.read_u32()?;
        let rdlength = reader.read_u16()?;

        let rdata_start = reader.position();
        let rdata = reader.read_bytes(rdlength as usize)?;
        let data = Self::decode_rdata(reader.buffer(), rtype, rdata_start, rdata)?;

        Ok(ResourceRecord {
            name,
            rtype,
            class,
            ttl,
            rdlength,
            data,
        })
    }

    /// Interpret RDATA by TYPE. `rdata_start` is the offset of `rdata` in
    /// `buf`, needed because names inside RDATA may point anywhere earlier in
    /// the message.
    fn decode_rdata(
        buf: &[u8],
        rtype: u16,
        rdata_start: usize,
        rdata: &[u8],
    ) -> Result<RecordData, DomainError> {
        match RecordType::from_u16(rtype) {
            Some(RecordType::A) => {
                let octets: [u8; 4] = rdata.try_into().map_err(|_| {
                    DomainError::MalformedMessage(format!(
                        "A record RDATA is {} bytes, expected 4",
                        rdata.len()
                    ))
                })?;
                Ok(RecordData::A(Ipv4Addr::from(octets)))
            }
            Some(RecordType::MX) => {
                if rdata.len() < 3 {
                    return Err(DomainError::MalformedMessage(format!(
                        "MX record RDATA is {} bytes, too short for preference and exchange",
                        rdata.len()
                    )));
                }

                let preference = u16::from_be_bytes([rdata[0], rdata[1]]);
                let rdata_end = rdata_start + rdata.len();
                let (exchange, next) = NameCodec::decode(&buf[..rdata_end], rdata_start + 2)?;

                if next != rdata_end {
                    return Err(DomainError::MalformedMessage(format!(
                        "MX exchange ends at offset {} but RDATA ends at {}",
                        next, rdata_end
                    )));
                }

                Ok(RecordData::Mx {
                    preference,
                    exchange,
                })
            }
            _ => Ok(RecordData::Unknown(rdata.to_vec())),
        }
    }
}
