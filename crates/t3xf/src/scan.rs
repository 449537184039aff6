//! Structural scanner.
//!
//! [`Scanner::new`] walks a whole buffer once, keeping a stack of open `SCAN`
//! instructions. Each `BLOCK` pops its partner and both get the other's
//! position as argument, so a consumer can skip a whole block in O(1).
//!
//! Instructions are addressed by word index (byte offset / 4); payload words
//! of string and float instructions occupy slots of their own that are never
//! visited by [`Scanner::scan`].

use std::io::{self, Seek, SeekFrom};

use crate::opcode::{Opcode, unpack};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ScanError {
    #[error("unmatched SCAN instruction at {0:#06x}")]
    UnmatchedScan(usize),

    #[error("unmatched BLOCK instruction at {0:#06x}")]
    UnmatchedBlock(usize),

    #[error("deprecated ESWAP instruction at {0:#06x}")]
    DeprecatedEswap(usize),

    #[error("deprecated WIDEN instruction at {0:#06x}")]
    DeprecatedWiden(usize),

    #[error("truncated instruction at {0:#06x}")]
    Truncated(usize),
}

#[derive(Debug, Clone, Copy, Default)]
struct Slot {
    opcode: Opcode,
    /// NATLONG value, payload length in bits, or partner word index.
    arg: i64,
    /// Instruction length in bytes; zero for payload words.
    len: u32,
}

/// Cursor over a structurally indexed T3XF buffer.
///
/// Successive calls to [`Scanner::scan`] step through the instructions. The
/// first indexing error is sticky: it is available through
/// [`Scanner::error`] and ends scanning.
pub struct Scanner<'b> {
    bytes: &'b [u8],
    code: Vec<Slot>,
    pos: usize,
    next: usize,
    done: bool,
    error: Option<ScanError>,
}

impl<'b> Scanner<'b> {
    pub fn new(bytes: &'b [u8]) -> Self {
        let mut scanner = Self {
            bytes,
            code: vec![Slot::default(); bytes.len() / 4],
            pos: 0,
            next: 0,
            done: false,
            error: None,
        };
        scanner.index();
        scanner
    }

    fn index(&mut self) {
        let mut stack: Vec<usize> = Vec::with_capacity(20);
        let words = self.code.len();
        let mut pos = 0;

        while pos < words {
            let (opcode, x) = unpack(self.word(pos));
            let mut slot = Slot {
                opcode,
                arg: i64::from(x),
                len: 4,
            };
            let mut extra = 0;

            if let Some(factor) = opcode.bits_per_element() {
                if pos + 1 >= words {
                    return self.fail(ScanError::Truncated(pos * 4));
                }
                let bits = u64::from(self.word(pos + 1)) * factor;
                let payload = bits.div_ceil(32) as usize;
                extra = 1 + payload;
                slot.arg = bits as i64;
            } else {
                match opcode {
                    Opcode::IEEE754DP => extra = 2,
                    Opcode::NATLONG => {
                        extra = 1;
                        if pos + 1 < words {
                            slot.arg = i64::from(self.word(pos + 1) as i32);
                        }
                    }
                    Opcode::SCAN => stack.push(pos),
                    Opcode::BLOCK => {
                        let Some(scan) = stack.pop() else {
                            return self.fail(ScanError::UnmatchedBlock(pos * 4));
                        };
                        self.code[scan].arg = pos as i64;
                        slot.arg = scan as i64;
                    }
                    Opcode::ESWAP => return self.fail(ScanError::DeprecatedEswap(pos * 4)),
                    Opcode::WIDEN => return self.fail(ScanError::DeprecatedWiden(pos * 4)),
                    _ => {}
                }
            }

            if pos + extra >= words {
                return self.fail(ScanError::Truncated(pos * 4));
            }
            slot.len = (4 * (1 + extra)) as u32;
            self.code[pos] = slot;
            pos += 1 + extra;
        }

        if self.bytes.len() % 4 != 0 {
            return self.fail(ScanError::Truncated(words * 4));
        }
        if let Some(&open) = stack.last() {
            self.fail(ScanError::UnmatchedScan(open * 4));
        }
    }

    fn word(&self, pos: usize) -> u32 {
        let at = pos * 4;
        let b = &self.bytes[at..at + 4];
        u32::from_le_bytes([b[0], b[1], b[2], b[3]])
    }

    fn fail(&mut self, error: ScanError) {
        tracing::debug!(%error, "structural scan failed");
        if self.error.is_none() {
            self.error = Some(error);
        }
        self.done = true;
    }

    /// Advances to the next instruction. Returns false at the end of the
    /// buffer or after an error.
    pub fn scan(&mut self) -> bool {
        if self.done {
            return false;
        }
        self.pos = self.next;
        if self.pos >= self.code.len() {
            self.pos = self.code.len().saturating_sub(1);
            self.done = true;
            return false;
        }
        self.next = self.pos + (self.slot().len as usize / 4).max(1);
        true
    }

    /// Makes the next [`Scanner::scan`] continue after the partner `BLOCK`
    /// of the current `SCAN`. Returns false if the current instruction is
    /// not a `SCAN`.
    pub fn skip_block(&mut self) -> bool {
        if self.opcode() != Opcode::SCAN {
            return false;
        }
        match self.partner() {
            Some(block) => {
                self.next = block + 1;
                true
            }
            None => false,
        }
    }

    /// Restarts scanning from the first instruction. No effect after an
    /// indexing error.
    pub fn reset(&mut self) {
        if self.error.is_none() {
            self.pos = 0;
            self.next = 0;
            self.done = false;
        }
    }

    /// Byte offset of the current instruction.
    pub fn offset(&self) -> usize {
        self.pos * 4
    }

    /// Raw bytes of the current instruction, payload included.
    pub fn raw(&self) -> &'b [u8] {
        let at = self.offset();
        self.bytes
            .get(at..at + self.slot().len as usize)
            .unwrap_or(&[])
    }

    pub fn opcode(&self) -> Opcode {
        self.slot().opcode
    }

    /// Argument of the current instruction.
    ///
    /// The integer value for `NATLONG`, the payload length in bits for
    /// string-like opcodes and the partner's word index for `SCAN`/`BLOCK`.
    pub fn arg(&self) -> i64 {
        self.slot().arg
    }

    /// Word index of the matching `SCAN` or `BLOCK`.
    pub fn partner(&self) -> Option<usize> {
        match self.opcode() {
            Opcode::SCAN | Opcode::BLOCK => usize::try_from(self.arg()).ok(),
            _ => None,
        }
    }

    /// Payload content of a string-like instruction, without padding.
    pub fn bytes(&self) -> &'b [u8] {
        let at = self.offset() + 8;
        let len = (self.arg().max(0) as usize).div_ceil(8);
        self.bytes.get(at..at + len).unwrap_or(&[])
    }

    /// Value of an `IEEE754DP` instruction, NaN if the payload is missing.
    pub fn float(&self) -> f64 {
        let at = self.offset() + 4;
        match self.bytes.get(at..at + 8) {
            Some(b) => f64::from_le_bytes([b[0], b[1], b[2], b[3], b[4], b[5], b[6], b[7]]),
            None => f64::NAN,
        }
    }

    pub fn error(&self) -> Option<&ScanError> {
        self.error.as_ref()
    }

    fn slot(&self) -> Slot {
        self.code.get(self.pos).copied().unwrap_or_default()
    }
}

impl Seek for Scanner<'_> {
    /// Positions the cursor on a 4-byte aligned offset; the next
    /// [`Scanner::scan`] yields the instruction there.
    fn seek(&mut self, pos: SeekFrom) -> io::Result<u64> {
        let target = match pos {
            SeekFrom::Start(offset) => Some(offset / 4),
            SeekFrom::Current(delta) => (self.pos as u64).checked_add_signed(delta / 4),
            SeekFrom::End(delta) => (self.code.len() as u64).checked_add_signed(delta / 4),
        };
        let Some(target) = target else {
            return Err(io::Error::new(
                io::ErrorKind::InvalidInput,
                "seek to a negative position",
            ));
        };
        self.pos = target as usize;
        self.next = self.pos;
        if self.error.is_none() {
            self.done = false;
        }
        Ok(target * 4)
    }
}
