//! Opcodes and the 32-bit instruction word layout.
//!
//! The two low bits of every word select how the rest is read:
//!
//! | bits | class       | payload                                                  |
//! |------|-------------|----------------------------------------------------------|
//! | `00` | reference   | byte offset; bit 31 marks a frozen reference             |
//! | `01` | goto        | byte offset; bits 30..31 select `APPLY`, `SCAN` or `GOTO` |
//! | `10` | line        | line number in bits 2..31                                |
//! | `11` | instruction | opcode in bits 0..15, immediate argument in bits 16..31  |

use std::fmt;

const REF_CLASS: u32 = 0;
const GOTO_CLASS: u32 = 1;
const LINE_CLASS: u32 = 2;

const FROZEN_BIT: u32 = 1 << 31;
const APPLY_BITS: u32 = 1 << 30;
const SCAN_BITS: u32 = 2 << 30;
const GOTO_OFFSET_MASK: u32 = 0x3fff_fffc;

/// A T3XF opcode.
///
/// Wraps the raw 16-bit value, so unassigned values can still be decoded and
/// displayed.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Opcode(u16);

macro_rules! opcodes {
    ($($name:ident = $value:literal, $text:literal;)*) => {
        impl Opcode {
            $(pub const $name: Opcode = Opcode($value);)*

            /// Lower-case mnemonic, `None` for unassigned values.
            pub fn name(self) -> Option<&'static str> {
                match self.0 {
                    $($value => Some($text),)*
                    _ => None,
                }
            }

            /// Looks up an opcode by its mnemonic.
            pub fn from_name(name: &str) -> Option<Opcode> {
                match name {
                    $($text => Some(Opcode::$name),)*
                    _ => None,
                }
            }
        }
    };
}

include!("opcode_table.rs");

impl Opcode {
    #[inline]
    pub const fn new(raw: u16) -> Self {
        Self(raw)
    }

    #[inline]
    pub const fn raw(self) -> u16 {
        self.0
    }

    /// Opcodes whose argument is a relocatable byte offset.
    pub fn is_reference(self) -> bool {
        matches!(
            self,
            Self::REF | Self::FROZEN_REF | Self::GOTO | Self::SCAN | Self::APPLY
        )
    }

    /// Opcodes followed by a length field and a padded payload.
    pub fn has_payload(self) -> bool {
        matches!(
            self,
            Self::UTF8
                | Self::ISTR
                | Self::FSTR
                | Self::NAME
                | Self::BITS
                | Self::NIBBLES
                | Self::OCTETS
        )
    }

    /// Number of bits per payload element for string-like opcodes.
    pub(crate) fn bits_per_element(self) -> Option<u64> {
        match self {
            Self::UTF8 | Self::ISTR | Self::FSTR | Self::NAME | Self::OCTETS => Some(8),
            Self::NIBBLES => Some(4),
            Self::BITS => Some(1),
            _ => None,
        }
    }
}

impl fmt::Display for Opcode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.name() {
            Some(name) => f.write_str(name),
            None => write!(f, "unknown_opcode({:#x})", self.0),
        }
    }
}

impl fmt::Debug for Opcode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self, f)
    }
}

/// Packs an opcode and its argument into one instruction word.
///
/// `x` is a byte offset for reference-class opcodes, a line number for `LINE`
/// and a 16-bit immediate otherwise. `APPLY` and `SCAN` fall back to the
/// instruction class when `x` is zero.
pub fn pack(op: Opcode, x: u32) -> u32 {
    match op {
        Opcode::REF => x,
        Opcode::FROZEN_REF => x | FROZEN_BIT,
        Opcode::LINE => (x << 2) | LINE_CLASS,
        Opcode::GOTO => x | GOTO_CLASS,
        Opcode::APPLY if x != 0 => x | GOTO_CLASS | APPLY_BITS,
        Opcode::SCAN if x != 0 => x | GOTO_CLASS | SCAN_BITS,
        _ => (x << 16) | u32::from(op.0),
    }
}

/// Splits an instruction word into opcode and argument.
pub fn unpack(word: u32) -> (Opcode, u32) {
    match word & 0x3 {
        REF_CLASS if word & FROZEN_BIT != 0 => (Opcode::FROZEN_REF, word & !FROZEN_BIT),
        REF_CLASS => (Opcode::REF, word),
        GOTO_CLASS => match word >> 30 {
            1 => (Opcode::APPLY, word & GOTO_OFFSET_MASK),
            2 => (Opcode::SCAN, word & GOTO_OFFSET_MASK),
            _ => (Opcode::GOTO, word & !0x3),
        },
        LINE_CLASS => (Opcode::LINE, word >> 2),
        _ => (Opcode((word & 0xffff) as u16), word >> 16),
    }
}
