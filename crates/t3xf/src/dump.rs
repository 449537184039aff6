//! Human-readable listing of a T3XF buffer.

use std::fmt::Write as _;

use crate::decode::instructions;
use crate::opcode::Opcode;

/// Disassembles `bytes` into one line per instruction.
///
/// Each line starts with the byte offset, followed by the mnemonic and the
/// argument. Instructions between `SCAN` and its `BLOCK` are indented. A
/// decode failure ends the listing with a `!!` line.
pub fn dump(bytes: &[u8]) -> String {
    let mut out = String::new();
    let mut depth = 0usize;

    for instr in instructions(bytes) {
        let instr = match instr {
            Ok(instr) => instr,
            Err(err) => {
                writeln!(out, "!! {err}").expect("String write never fails");
                break;
            }
        };

        if instr.opcode == Opcode::BLOCK {
            depth = depth.saturating_sub(1);
        }
        writeln!(out, "{:04x}  {:indent$}{instr}", instr.offset, "", indent = depth * 2)
            .expect("String write never fails");
        if instr.opcode == Opcode::SCAN {
            depth += 1;
        }
    }

    out
}
