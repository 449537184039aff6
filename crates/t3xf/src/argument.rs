use std::fmt;

/// A relocatable pointer to another instruction.
///
/// When passed to the [`Encoder`](crate::Encoder) it holds the target's
/// instruction index (emission order). When produced by
/// [`decode`](crate::decode) it holds the resolved byte offset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Reference(pub u32);

impl fmt::Display for Reference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:#06x}", self.0)
    }
}

/// Bit, hex or octet string payload.
///
/// `len` counts elements in the unit of the opcode that carries it: bits for
/// `BITS`, nibbles for `NIBBLES`, bytes for `OCTETS`. Elements are packed
/// most significant first.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct BinaryString {
    len: u32,
    bytes: Vec<u8>,
}

impl BinaryString {
    pub fn new(len: u32, bytes: Vec<u8>) -> Self {
        Self { len, bytes }
    }

    /// Parses binary digits such as `0110`.
    pub fn from_bits(digits: &str) -> Option<Self> {
        Self::from_digits(digits, 2)
    }

    /// Parses hex digits such as `a0f`, one nibble per digit.
    pub fn from_hex(digits: &str) -> Option<Self> {
        Self::from_digits(digits, 16)
    }

    /// Parses an even number of hex digits as octets.
    pub fn from_octets(digits: &str) -> Option<Self> {
        if digits.len() % 2 != 0 {
            return None;
        }
        let nibbles = Self::from_digits(digits, 16)?;
        Some(Self::new(nibbles.len / 2, nibbles.bytes))
    }

    fn from_digits(digits: &str, radix: u32) -> Option<Self> {
        let width = if radix == 2 { 1 } else { 4 };
        let mut bytes = Vec::new();
        let mut bit = 0u32;
        for c in digits.chars() {
            let value = c.to_digit(radix)? as u8;
            let shift = 8 - width - (bit % 8);
            if bit % 8 == 0 {
                bytes.push(0);
            }
            if let Some(last) = bytes.last_mut() {
                *last |= value << shift;
            }
            bit += width;
        }
        let len = u32::try_from(digits.chars().count()).ok()?;
        Some(Self::new(len, bytes))
    }

    /// Number of elements.
    pub fn len(&self) -> u32 {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn bytes(&self) -> &[u8] {
        &self.bytes
    }
}

/// Typed argument of one instruction.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Argument {
    #[default]
    None,
    Int(i64),
    Float(f64),
    Str(String),
    Binary(BinaryString),
    Reference(Reference),
}

impl Argument {
    pub fn is_none(&self) -> bool {
        matches!(self, Argument::None)
    }
}

impl From<Reference> for Argument {
    fn from(reference: Reference) -> Self {
        Argument::Reference(reference)
    }
}

impl From<&str> for Argument {
    fn from(s: &str) -> Self {
        Argument::Str(s.to_string())
    }
}

impl fmt::Display for Argument {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Argument::None => Ok(()),
            Argument::Int(i) => write!(f, "{i}"),
            Argument::Float(x) => write!(f, "{x:?}"),
            Argument::Str(s) => write!(f, "{s:?}"),
            Argument::Binary(b) => {
                f.write_str("'")?;
                for byte in b.bytes() {
                    write!(f, "{byte:02x}")?;
                }
                write!(f, "'/{}", b.len())
            }
            Argument::Reference(r) => write!(f, "{r}"),
        }
    }
}
