use crate::opcodes::{mnemonic, push_width};

/// Decoded instruction from bytecode.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Instruction {
    /// Offset of the opcode byte.
    pub pos: usize,
    pub opcode: u8,
    pub mnemonic: String,
    /// Immediate bytes, present only for pushes. May be shorter than the
    /// declared width when the code ends early.
    pub immediate: Option<Vec<u8>>,
    pub truncated: bool,
}

impl Instruction {
    pub fn is_push(&self) -> bool {
        self.immediate.is_some()
    }

    /// Immediate width the opcode claims, independent of what was available.
    pub fn declared_width(&self) -> usize {
        push_width(self.opcode).unwrap_or(0)
    }

    /// Bytes consumed from the stream, opcode included.
    pub fn size(&self) -> usize {
        1 + self.immediate.as_ref().map_or(0, Vec::len)
    }
}

/// Decodes raw bytecode into a list of instructions.
///
/// Every byte belongs to exactly one instruction. A push whose immediate runs
/// past the end takes whatever bytes remain and is flagged as truncated.
pub fn parse_instructions(code: &[u8]) -> Vec<Instruction> {
    let mut instructions = Vec::new();
    let mut i = 0;
    while i < code.len() {
        let pos = i;
        let opcode = code[i];
        i += 1;

        let mut immediate = None;
        let mut truncated = false;
        if let Some(n) = push_width(opcode) {
            let end = if i + n > code.len() {
                truncated = true;
                code.len()
            } else {
                i + n
            };
            immediate = Some(code[i..end].to_vec());
            i = end;
        }

        instructions.push(Instruction {
            pos,
            opcode,
            mnemonic: mnemonic(opcode).to_string(),
            immediate,
            truncated,
        });
    }
    instructions
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_code_has_no_instructions() {
        assert!(parse_instructions(&[]).is_empty());
    }

    #[test]
    fn push_consumes_immediate() {
        let insts = parse_instructions(&[0x61, 0xaa, 0xbb, 0x01]);
        assert_eq!(insts.len(), 2);
        assert_eq!(insts[0].pos, 0);
        assert_eq!(insts[0].mnemonic, "PUSH2");
        assert_eq!(insts[0].immediate.as_deref(), Some(&[0xaa, 0xbb][..]));
        assert!(!insts[0].truncated);
        assert_eq!(insts[1].pos, 3);
        assert_eq!(insts[1].mnemonic, "ADD");
        assert_eq!(insts[1].immediate, None);
    }

    #[test]
    fn short_push_takes_remaining_bytes() {
        let insts = parse_instructions(&[0x00, 0x63, 0x01, 0x02]);
        assert_eq!(insts.len(), 2);
        let push = &insts[1];
        assert_eq!(push.mnemonic, "PUSH4");
        assert_eq!(push.declared_width(), 4);
        assert_eq!(push.immediate.as_deref(), Some(&[0x01, 0x02][..]));
        assert!(push.truncated);
        assert_eq!(push.size(), 3);
    }

    #[test]
    fn trailing_push_has_empty_immediate() {
        let insts = parse_instructions(&[0x7f]);
        assert_eq!(insts.len(), 1);
        assert_eq!(insts[0].mnemonic, "PUSH32");
        assert_eq!(insts[0].immediate.as_deref(), Some(&[] as &[u8]));
        assert!(insts[0].truncated);
    }

    #[test]
    fn exact_fit_is_not_truncated() {
        let insts = parse_instructions(&[0x60, 0xff]);
        assert_eq!(insts.len(), 1);
        assert!(!insts[0].truncated);
    }
}
