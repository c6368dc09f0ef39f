//! Assembly listing and token projection of decoded instructions.

use ethernity_core::{error::Result, utils::decode_hex};
use serde::{Deserialize, Serialize};

use crate::parser::{parse_instructions, Instruction};

impl Instruction {
    /// Listing line, e.g. `0004: PUSH2 0x0102` or
    /// `0000: PUSH1 0x  ; TRUNCATED (0/1)`.
    pub fn asm_line(&self) -> String {
        match &self.immediate {
            Some(data) if self.truncated => format!(
                "{:04x}: {} 0x{}  ; TRUNCATED ({}/{})",
                self.pos,
                self.mnemonic,
                hex::encode(data),
                data.len(),
                self.declared_width()
            ),
            Some(data) => format!("{:04x}: {} 0x{}", self.pos, self.mnemonic, hex::encode(data)),
            None => format!("{:04x}: {}", self.pos, self.mnemonic),
        }
    }

    /// Token for sequence models. Pushes carry their immediate as
    /// `PUSH{n}_0x{hex}` when `include_immediate` is set, truncated or not.
    pub fn token(&self, include_immediate: bool) -> String {
        match &self.immediate {
            Some(data) if include_immediate => format!("{}_0x{}", self.mnemonic, hex::encode(data)),
            _ => self.mnemonic.clone(),
        }
    }
}

/// Index-aligned assembly lines and tokens, one entry per instruction.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DecodeResult {
    pub assembly: Vec<String>,
    pub tokens: Vec<String>,
}

impl DecodeResult {
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// Listing as written to `.asm` files: newline separated, no trailing newline.
    pub fn assembly_text(&self) -> String {
        self.assembly.join("\n")
    }

    pub fn into_parts(self) -> (Vec<String>, Vec<String>) {
        (self.assembly, self.tokens)
    }
}

/// Disassembles raw bytecode. Unknown opcodes and short pushes are
/// represented in the output, so this never fails.
pub fn disassemble(code: &[u8], include_immediate_in_token: bool) -> DecodeResult {
    let instructions = parse_instructions(code);
    let mut result = DecodeResult {
        assembly: Vec::with_capacity(instructions.len()),
        tokens: Vec::with_capacity(instructions.len()),
    };
    for ins in &instructions {
        result.assembly.push(ins.asm_line());
        result.tokens.push(ins.token(include_immediate_in_token));
    }
    result
}

/// Disassembles normalized hex text (no prefix, no whitespace).
///
/// An odd trailing nibble is dropped; any non-hex character fails with
/// `Error::InvalidInput`.
pub fn disassemble_hex(hex_text: &str, include_immediate_in_token: bool) -> Result<DecodeResult> {
    if hex_text.is_empty() {
        return Ok(DecodeResult::default());
    }
    let code = decode_hex(hex_text)?;
    Ok(disassemble(&code, include_immediate_in_token))
}
