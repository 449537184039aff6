//! Single-instruction decoder.

use std::fmt;

use crate::argument::{Argument, BinaryString, Reference};
use crate::opcode::{Opcode, unpack};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DecodeError {
    #[error("truncated instruction: need {needed} bytes, have {available}")]
    Truncated { needed: usize, available: usize },

    #[error("{opcode} payload is not valid UTF-8")]
    InvalidUtf8 { opcode: Opcode },
}

/// Decodes the instruction at the start of `bytes`.
///
/// Returns the number of bytes the instruction occupies (including padding),
/// its opcode and its typed argument:
/// - `NATLONG`, `LINE`, `IFIELD`, `IGET`, `IDEF`: [`Argument::Int`]
/// - `IEEE754DP`: [`Argument::Float`]
/// - `UTF8`, `ISTR`, `FSTR`, `NAME`: [`Argument::Str`]
/// - `BITS`, `NIBBLES`, `OCTETS`: [`Argument::Binary`]
/// - `REF`, `FROZEN_REF`, `GOTO`, and `SCAN`/`APPLY` in the goto class:
///   [`Argument::Reference`] holding a byte offset
/// - everything else: [`Argument::Int`] if the immediate is non-zero
pub fn decode(bytes: &[u8]) -> Result<(usize, Opcode, Argument), DecodeError> {
    let word = read_u32(bytes, 0)?;
    let (opcode, x) = unpack(word);

    let decoded = match opcode {
        Opcode::NATLONG => {
            let i = read_u32(bytes, 4)? as i32;
            (8, Argument::Int(i64::from(i)))
        }
        Opcode::IEEE754DP => {
            let lo = u64::from(read_u32(bytes, 4)?);
            let hi = u64::from(read_u32(bytes, 8)?);
            (12, Argument::Float(f64::from_bits(hi << 32 | lo)))
        }
        Opcode::UTF8 | Opcode::ISTR | Opcode::FSTR | Opcode::NAME => {
            let len = read_u32(bytes, 4)? as usize;
            let (n, content) = payload(bytes, len)?;
            let s = std::str::from_utf8(content)
                .map_err(|_| DecodeError::InvalidUtf8 { opcode })?;
            (n, Argument::Str(s.to_string()))
        }
        Opcode::BITS | Opcode::NIBBLES | Opcode::OCTETS => {
            let len = read_u32(bytes, 4)?;
            let bits = opcode.bits_per_element().unwrap_or(8) * u64::from(len);
            let (n, content) = payload(bytes, bits.div_ceil(8) as usize)?;
            (n, Argument::Binary(BinaryString::new(len, content.to_vec())))
        }
        Opcode::REF | Opcode::FROZEN_REF | Opcode::GOTO => (4, Argument::Reference(Reference(x))),
        Opcode::LINE | Opcode::IFIELD | Opcode::IGET | Opcode::IDEF => {
            (4, Argument::Int(i64::from(x)))
        }
        Opcode::SCAN | Opcode::APPLY if bytes[0] & 0x3 == 0x3 && x == 0 => (4, Argument::None),
        Opcode::SCAN | Opcode::APPLY => (4, Argument::Reference(Reference(x))),
        _ if x != 0 => (4, Argument::Int(i64::from(x))),
        _ => (4, Argument::None),
    };

    Ok((decoded.0, opcode, decoded.1))
}

/// One decoded instruction with its position in the buffer.
#[derive(Debug, Clone, PartialEq)]
pub struct Instruction {
    pub offset: usize,
    pub len: usize,
    pub opcode: Opcode,
    pub argument: Argument,
}

impl fmt::Display for Instruction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.argument.is_none() {
            write!(f, "{}", self.opcode)
        } else {
            write!(f, "{} {}", self.opcode, self.argument)
        }
    }
}

/// Iterator over the instructions of a buffer, see [`instructions`].
pub struct Instructions<'b> {
    bytes: &'b [u8],
    offset: usize,
    failed: bool,
}

/// Decodes a buffer instruction by instruction.
///
/// Iteration stops after the first error.
pub fn instructions(bytes: &[u8]) -> Instructions<'_> {
    Instructions {
        bytes,
        offset: 0,
        failed: false,
    }
}

impl Iterator for Instructions<'_> {
    type Item = Result<Instruction, DecodeError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.failed || self.offset >= self.bytes.len() {
            return None;
        }
        match decode(&self.bytes[self.offset..]) {
            Ok((len, opcode, argument)) => {
                let offset = self.offset;
                self.offset += len;
                Some(Ok(Instruction {
                    offset,
                    len,
                    opcode,
                    argument,
                }))
            }
            Err(err) => {
                self.failed = true;
                Some(Err(err))
            }
        }
    }
}

fn read_u32(bytes: &[u8], at: usize) -> Result<u32, DecodeError> {
    let word = bytes.get(at..at + 4).ok_or(DecodeError::Truncated {
        needed: at + 4,
        available: bytes.len(),
    })?;
    Ok(u32::from_le_bytes([word[0], word[1], word[2], word[3]]))
}

/// Returns the padded instruction length and the payload content.
fn payload(bytes: &[u8], len: usize) -> Result<(usize, &[u8]), DecodeError> {
    let padded = len.div_ceil(4).saturating_mul(4);
    let needed = padded.saturating_add(8);
    if bytes.len() < needed {
        return Err(DecodeError::Truncated {
            needed,
            available: bytes.len(),
        });
    }
    Ok((needed, &bytes[8..8 + len]))
}
