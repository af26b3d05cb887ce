//! Domain name wire codec (RFC 1035 §3.1, §4.1.4)
//!
//! Names are a run of length-prefixed labels closed by a zero byte. On decode
//! a label length byte whose top two bits are `11` is a compression pointer:
//! the low 14 bits of it and the next byte give an earlier offset in the same
//! message where the rest of the name continues.

use ferrous_lookup_domain::DomainError;

pub const MAX_LABEL_LEN: usize = 63;
pub const MAX_NAME_LEN: usize = 255;

const LABEL_TYPE_MASK: u8 = 0b1100_0000;
const POINTER_TAG: u8 = 0b1100_0000;
const LITERAL_TAG: u8 = 0b0000_0000;
const POINTER_OFFSET_MASK: u8 = 0b0011_1111;

/// Root name, as produced by [`NameCodec::decode`] for a lone zero byte.
pub const ROOT: &str = ".";

pub struct NameCodec;

impl NameCodec {
    /// Encode `name` verbatim, without compression.
    ///
    /// Empty labels are skipped, so `"example.com."` and `"example.com"`
    /// encode the same and `""` / `"."` encode to the root name. A backslash
    /// takes the next character literally, so `a\.b` is one label `a.b`.
    pub fn encode(name: &str) -> Result<Vec<u8>, DomainError> {
        let mut buf = Vec::with_capacity(name.len() + 2);
        Self::encode_into(name, &mut buf)?;
        Ok(buf)
    }

    pub fn encode_into(name: &str, buf: &mut Vec<u8>) -> Result<(), DomainError> {
        let start = buf.len();

        let labels = split_labels(name)?;

        for label in labels.iter().filter(|l| !l.is_empty()) {
            if label.len() > MAX_LABEL_LEN {
                buf.truncate(start);
                return Err(DomainError::InvalidDomainName(format!(
                    "label '{}' in '{}' is {} bytes, limit is {}",
                    String::from_utf8_lossy(label),
                    name,
                    label.len(),
                    MAX_LABEL_LEN
                )));
            }
            buf.push(label.len() as u8);
            buf.extend_from_slice(label);
        }
        buf.push(0);

        let encoded_len = buf.len() - start;
        if encoded_len > MAX_NAME_LEN {
            buf.truncate(start);
            return Err(DomainError::InvalidDomainName(format!(
                "'{}' encodes to {} bytes, limit is {}",
                name, encoded_len, MAX_NAME_LEN
            )));
        }

        Ok(())
    }

    /// Decode the name starting at `offset` in `buf`.
    ///
    /// Returns the dotted name and the offset just past the name as seen by
    /// the caller: after the terminating zero byte, or after the first
    /// compression pointer when one is followed. Bytes reached through a
    /// pointer are read but never advance the caller's cursor.
    ///
    /// A pointer must target an offset below the start of the label run it
    /// was found in, so every jump moves strictly backwards and decoding
    /// always terminates.
    pub fn decode(buf: &[u8], offset: usize) -> Result<(String, usize), DomainError> {
        let mut labels: Vec<String> = Vec::new();
        let mut pos = offset;
        let mut run_start = offset;
        let mut resume_at: Option<usize> = None;
        let mut encoded_len = 0usize;

        loop {
            let len_byte = *buf.get(pos).ok_or_else(|| {
                DomainError::MalformedMessage(format!("name at offset {} runs past end of message", offset))
            })?;

            match len_byte & LABEL_TYPE_MASK {
                LITERAL_TAG if len_byte == 0 => {
                    pos += 1;
                    break;
                }
                LITERAL_TAG => {
                    let len = len_byte as usize;
                    let start = pos + 1;
                    let label = buf.get(start..start + len).ok_or_else(|| {
                        DomainError::MalformedMessage(format!(
                            "label at offset {} runs past end of message",
                            pos
                        ))
                    })?;

                    encoded_len += 1 + len;
                    if encoded_len + 1 > MAX_NAME_LEN {
                        return Err(DomainError::MalformedMessage(format!(
                            "name at offset {} exceeds {} bytes",
                            offset, MAX_NAME_LEN
                        )));
                    }

                    labels.push(escape_label(label));
                    pos = start + len;
                }
                POINTER_TAG => {
                    let low = *buf.get(pos + 1).ok_or_else(|| {
                        DomainError::MalformedMessage(format!(
                            "compression pointer at offset {} is cut short",
                            pos
                        ))
                    })?;
                    let target = (((len_byte & POINTER_OFFSET_MASK) as usize) << 8) | low as usize;

                    if target >= run_start {
                        return Err(DomainError::MalformedMessage(format!(
                            "compression pointer at offset {} targets {}, which is not before {}",
                            pos, target, run_start
                        )));
                    }

                    if resume_at.is_none() {
                        resume_at = Some(pos + 2);
                    }
                    pos = target;
                    run_start = target;
                }
                other => {
                    return Err(DomainError::MalformedMessage(format!(
                        "unsupported label type {:#04x} at offset {}",
                        other, pos
                    )));
                }
            }
        }

        let name = if labels.is_empty() {
            ROOT.to_string()
        } else {
            labels.join(".")
        };

        Ok((name, resume_at.unwrap_or(pos)))
    }
}

/// Split a presentation-format name on unescaped dots.
fn split_labels(name: &str) -> Result<Vec<Vec<u8>>, DomainError> {
    let mut labels = Vec::new();
    let mut current = Vec::new();
    let mut bytes = name.bytes();

    while let Some(b) = bytes.next() {
        match b {
            b'\\' => {
                let escaped = bytes.next().ok_or_else(|| {
                    DomainError::InvalidDomainName(format!("'{}' ends with a lone backslash", name))
                })?;
                current.push(escaped);
            }
            b'.' => labels.push(std::mem::take(&mut current)),
            other => current.push(other),
        }
    }
    labels.push(current);

    Ok(labels)
}

/// Label bytes as text, with `.` and `\\` escaped so the dotted name splits
/// back into the same labels.
fn escape_label(label: &[u8]) -> String {
    let text = String::from_utf8_lossy(label);
    if !text.contains(['.', '\\']) {
        return text.into_owned();
    }

    let mut escaped = String::with_capacity(text.len() + 2);
    for c in text.chars() {
        if c == '.' || c == '\\' {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped
}
