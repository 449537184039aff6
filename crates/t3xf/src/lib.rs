//! T3XF bytecode format.
//!
//! This crate contains:
//! - the opcode registry and the 32-bit instruction word layout
//! - [`Encoder`], which packs instructions and relocates forward references
//! - [`decode`], the inverse of a single encoder call
//! - [`Scanner`], a buffer-wide pass that pairs `SCAN`/`BLOCK` instructions
//! - [`dump`], a human-readable listing for debugging and tests

#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

mod argument;
mod decode;
mod dump;
mod encode;
pub mod opcode;
mod scan;

#[cfg(test)]
mod encode_tests;

pub use argument::{Argument, BinaryString, Reference};
pub use decode::{DecodeError, Instruction, Instructions, decode, instructions};
pub use dump::dump;
pub use encode::{EncodeError, EncodeErrorKind, Encoder};
pub use opcode::{Opcode, pack, unpack};
pub use scan::{ScanError, Scanner};
