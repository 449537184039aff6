//! Instruction encoder with deferred relocation.
//!
//! Every instruction starts with one packed word. Payload-carrying opcodes
//! append a 4-byte element count and the content, zero padded to a 4-byte
//! boundary. `IEEE754DP` appends the 8 bytes of the double, `NATLONG` a
//! 32-bit integer.
//!
//! References name their target by instruction index. If the target has not
//! been emitted yet, a placeholder is written and a patch queued; the patch is
//! applied as soon as the target instruction is encoded. Patches still
//! pending at [`Encoder::assemble`] are reported as unknown references.

use indexmap::IndexMap;

use crate::argument::{Argument, BinaryString, Reference};
use crate::opcode::{Opcode, pack};

/// Written in place of a reference whose target is not known yet.
const PLACEHOLDER: u32 = 0xffff_fffc;

/// Largest byte offset any reference class can address.
const MAX_OFFSET: usize = 0x3fff_fffc;

/// Largest line number the line class can hold.
const MAX_LINE: i64 = 0x3fff_ffff;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum EncodeErrorKind {
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    #[error("unknown reference: instruction {0} was never emitted")]
    UnknownReference(u32),

    #[error("unknown reference: placeholder was never bound")]
    UnboundReference,
}

/// Error for one instruction, located by its byte offset.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("[{offset:#06x}] {opcode}: {kind}")]
pub struct EncodeError {
    pub offset: usize,
    pub opcode: Opcode,
    pub kind: EncodeErrorKind,
}

#[derive(Debug, Clone, Copy)]
struct Patch {
    /// Byte offset of the word to rewrite.
    offset: usize,
    opcode: Opcode,
}

#[derive(Debug, Default)]
pub struct Encoder {
    buf: Vec<u8>,
    /// Instruction index to byte offset.
    offsets: Vec<u32>,
    /// Target instruction index to the patches waiting for it.
    pending: IndexMap<u32, Vec<Patch>>,
    /// Placeholders emitted without a target, keyed by instruction index.
    unbound: IndexMap<usize, Patch>,
}

impl Encoder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of emitted instructions.
    pub fn len(&self) -> usize {
        self.offsets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.offsets.is_empty()
    }

    /// Size of the encoded buffer in bytes.
    pub fn byte_len(&self) -> usize {
        self.buf.len()
    }

    /// Byte offset of an emitted instruction.
    pub fn offset_of(&self, index: usize) -> Option<u32> {
        self.offsets.get(index).copied()
    }

    pub fn reset(&mut self) {
        self.buf.clear();
        self.offsets.clear();
        self.pending.clear();
        self.unbound.clear();
    }

    /// Encodes one instruction and returns its instruction index.
    ///
    /// On error nothing is written and the instruction index is not consumed.
    pub fn encode(&mut self, opcode: Opcode, arg: Argument) -> Result<usize, EncodeError> {
        let offset = self.buf.len();
        let index = self.offsets.len();

        if let Err(kind) = self.encode_at(index, opcode, arg) {
            self.buf.truncate(offset);
            return Err(EncodeError {
                offset,
                opcode,
                kind,
            });
        }

        self.offsets.push(offset as u32);
        self.resolve_pending(index, offset as u32);
        Ok(index)
    }

    /// Emits a reference instruction whose target is supplied later with
    /// [`Encoder::bind`].
    pub fn encode_placeholder(&mut self, opcode: Opcode) -> Result<usize, EncodeError> {
        let offset = self.buf.len();
        if !opcode.is_reference() {
            return Err(EncodeError {
                offset,
                opcode,
                kind: EncodeErrorKind::InvalidArgument("not a reference opcode".to_string()),
            });
        }
        self.check_size(offset).map_err(|kind| EncodeError {
            offset,
            opcode,
            kind,
        })?;

        let index = self.offsets.len();
        self.unbound.insert(index, Patch { offset, opcode });
        self.push_u32(pack(opcode, PLACEHOLDER));
        self.offsets.push(offset as u32);
        Ok(index)
    }

    /// Points the placeholder emitted at instruction `site` to `target`.
    pub fn bind(&mut self, site: usize, target: Reference) -> Result<(), EncodeError> {
        let Some(patch) = self.unbound.swap_remove(&site) else {
            let offset = self.offset_of(site).map_or(self.buf.len(), |o| o as usize);
            return Err(EncodeError {
                offset,
                opcode: Opcode::REF,
                kind: EncodeErrorKind::InvalidArgument(format!(
                    "instruction {site} is not an unbound placeholder"
                )),
            });
        };

        tracing::trace!(site, target = target.0, "binding placeholder");
        match self.offset_of(target.0 as usize) {
            Some(offset) => self.write_reference(patch, offset),
            None => self.pending.entry(target.0).or_default().push(patch),
        }
        Ok(())
    }

    /// Returns the encoded buffer together with every reference that could
    /// not be resolved.
    ///
    /// The buffer is returned even when errors are present; unresolved words
    /// keep their placeholder value. Safe to call more than once.
    pub fn assemble(&self) -> (Vec<u8>, Vec<EncodeError>) {
        let mut errors = Vec::new();
        for (&target, patches) in &self.pending {
            for patch in patches {
                errors.push(EncodeError {
                    offset: patch.offset,
                    opcode: patch.opcode,
                    kind: EncodeErrorKind::UnknownReference(target),
                });
            }
        }
        for patch in self.unbound.values() {
            errors.push(EncodeError {
                offset: patch.offset,
                opcode: patch.opcode,
                kind: EncodeErrorKind::UnboundReference,
            });
        }
        errors.sort_by_key(|e| e.offset);
        (self.buf.clone(), errors)
    }

    fn encode_at(
        &mut self,
        index: usize,
        opcode: Opcode,
        arg: Argument,
    ) -> Result<(), EncodeErrorKind> {
        self.check_size(self.buf.len())?;

        match (opcode, arg) {
            (Opcode::SCAN | Opcode::APPLY, Argument::None) => {
                self.push_u32(pack(opcode, 0));
                Ok(())
            }
            (op, Argument::Reference(target)) if op.is_reference() => {
                self.encode_reference(index, op, target);
                Ok(())
            }
            (op, arg) if op.is_reference() => Err(expected("reference", &arg)),

            (Opcode::IEEE754DP, Argument::Float(x)) => {
                self.push_u32(pack(opcode, 0));
                self.buf.extend_from_slice(&x.to_bits().to_le_bytes());
                Ok(())
            }
            (Opcode::IEEE754DP, arg) => Err(expected("float", &arg)),

            (Opcode::NATLONG, Argument::Int(i)) => {
                let i = i32::try_from(i).map_err(|_| {
                    EncodeErrorKind::InvalidArgument(format!("argument too large: {i}"))
                })?;
                self.push_u32(pack(opcode, 0));
                self.buf.extend_from_slice(&i.to_le_bytes());
                Ok(())
            }
            (Opcode::NATLONG, arg) => Err(expected("integer", &arg)),

            (Opcode::UTF8 | Opcode::ISTR | Opcode::FSTR | Opcode::NAME, Argument::Str(s)) => {
                let len = u32::try_from(s.len()).map_err(|_| too_long(s.len()))?;
                self.push_payload(opcode, len, s.as_bytes());
                Ok(())
            }
            (Opcode::UTF8 | Opcode::ISTR | Opcode::FSTR | Opcode::NAME, arg) => {
                Err(expected("string", &arg))
            }

            (Opcode::BITS | Opcode::NIBBLES | Opcode::OCTETS, Argument::Binary(b)) => {
                self.encode_binary(opcode, &b)
            }
            (Opcode::BITS | Opcode::NIBBLES | Opcode::OCTETS, arg) => {
                Err(expected("binary string", &arg))
            }

            (Opcode::LINE, Argument::Int(line)) if (0..=MAX_LINE).contains(&line) => {
                self.push_u32(pack(opcode, line as u32));
                Ok(())
            }
            (Opcode::LINE, Argument::Int(line)) => Err(EncodeErrorKind::InvalidArgument(
                format!("argument too large: {line}"),
            )),
            (Opcode::LINE, arg) => Err(expected("integer", &arg)),

            (op, Argument::None) => {
                self.push_u32(pack(op, 0));
                Ok(())
            }
            (op, Argument::Int(i)) if (0..=0xffff).contains(&i) => {
                self.push_u32(pack(op, i as u32));
                Ok(())
            }
            (_, Argument::Int(i)) => Err(EncodeErrorKind::InvalidArgument(format!(
                "argument too large: {i}"
            ))),
            (_, arg) => Err(expected("integer", &arg)),
        }
    }

    fn encode_reference(&mut self, index: usize, opcode: Opcode, target: Reference) {
        let patch = Patch {
            offset: self.buf.len(),
            opcode,
        };
        match self.offset_of(target.0 as usize) {
            Some(offset) => self.push_u32(pack(opcode, offset)),
            None => {
                tracing::trace!(site = index, target = target.0, "deferring reference");
                self.pending.entry(target.0).or_default().push(patch);
                self.push_u32(pack(opcode, PLACEHOLDER));
            }
        }
    }

    fn encode_binary(&mut self, opcode: Opcode, b: &BinaryString) -> Result<(), EncodeErrorKind> {
        let bits = opcode.bits_per_element().unwrap_or(8) * u64::from(b.len());
        let needed = bits.div_ceil(8) as usize;
        if b.bytes().len() != needed {
            return Err(EncodeErrorKind::InvalidArgument(format!(
                "{} elements need {needed} bytes, got {}",
                b.len(),
                b.bytes().len()
            )));
        }
        self.push_payload(opcode, b.len(), b.bytes());
        Ok(())
    }

    fn resolve_pending(&mut self, index: usize, offset: u32) {
        let Some(patches) = self.pending.swap_remove(&(index as u32)) else {
            return;
        };
        tracing::trace!(target = index, count = patches.len(), "resolving patches");
        for patch in patches {
            self.write_reference(patch, offset);
        }
    }

    fn write_reference(&mut self, patch: Patch, offset: u32) {
        let word = pack(patch.opcode, offset).to_le_bytes();
        self.buf[patch.offset..patch.offset + 4].copy_from_slice(&word);
    }

    fn check_size(&self, offset: usize) -> Result<(), EncodeErrorKind> {
        if offset > MAX_OFFSET {
            return Err(EncodeErrorKind::InvalidArgument(
                "code exceeds the addressable range".to_string(),
            ));
        }
        Ok(())
    }

    fn push_payload(&mut self, opcode: Opcode, len: u32, content: &[u8]) {
        self.push_u32(pack(opcode, 0));
        self.push_u32(len);
        self.buf.extend_from_slice(content);
        let padding = (4 - content.len() % 4) % 4;
        self.buf.extend(std::iter::repeat_n(0, padding));
    }

    fn push_u32(&mut self, word: u32) {
        self.buf.extend_from_slice(&word.to_le_bytes());
    }
}

fn expected(what: &str, arg: &Argument) -> EncodeErrorKind {
    EncodeErrorKind::InvalidArgument(format!("{what} argument expected: {arg:?}"))
}

fn too_long(len: usize) -> EncodeErrorKind {
    EncodeErrorKind::InvalidArgument(format!("too long to encode: {len}"))
}
