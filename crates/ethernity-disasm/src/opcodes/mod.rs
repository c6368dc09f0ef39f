//! Byte to mnemonic lookup for EVM opcodes.

use once_cell::sync::Lazy;

/// First and last push opcodes (`PUSH1`..`PUSH32`).
pub const PUSH1: u8 = 0x60;
pub const PUSH32: u8 = 0x7f;

/// Opcodes with a fixed, individually assigned mnemonic.
const NAMED_OPCODES: &[(u8, &str)] = &[
    (0x00, "STOP"),
    (0x01, "ADD"),
    (0x02, "MUL"),
    (0x03, "SUB"),
    (0x04, "DIV"),
    (0x05, "SDIV"),
    (0x06, "MOD"),
    (0x07, "SMOD"),
    (0x08, "ADDMOD"),
    (0x09, "MULMOD"),
    (0x0a, "EXP"),
    (0x0b, "SIGNEXTEND"),
    (0x10, "LT"),
    (0x11, "GT"),
    (0x12, "SLT"),
    (0x13, "SGT"),
    (0x14, "EQ"),
    (0x15, "ISZERO"),
    (0x16, "AND"),
    (0x17, "OR"),
    (0x18, "XOR"),
    (0x19, "NOT"),
    (0x1a, "BYTE"),
    (0x1b, "SHL"),
    (0x1c, "SHR"),
    (0x1d, "SAR"),
    (0x20, "SHA3"),
    (0x30, "ADDRESS"),
    (0x31, "BALANCE"),
    (0x32, "ORIGIN"),
    (0x33, "CALLER"),
    (0x34, "CALLVALUE"),
    (0x35, "CALLDATALOAD"),
    (0x36, "CALLDATASIZE"),
    (0x37, "CALLDATACOPY"),
    (0x38, "CODESIZE"),
    (0x39, "CODECOPY"),
    (0x3a, "GASPRICE"),
    (0x3b, "EXTCODESIZE"),
    (0x3c, "EXTCODECOPY"),
    (0x3d, "RETURNDATASIZE"),
    (0x3e, "RETURNDATACOPY"),
    (0x3f, "EXTCODEHASH"),
    (0x40, "BLOCKHASH"),
    (0x41, "COINBASE"),
    (0x42, "TIMESTAMP"),
    (0x43, "NUMBER"),
    (0x44, "DIFFICULTY"),
    (0x45, "GASLIMIT"),
    (0x46, "CHAINID"),
    (0x47, "SELFBALANCE"),
    (0x50, "POP"),
    (0x51, "MLOAD"),
    (0x52, "MSTORE"),
    (0x53, "MSTORE8"),
    (0x54, "SLOAD"),
    (0x55, "SSTORE"),
    (0x56, "JUMP"),
    (0x57, "JUMPI"),
    (0x58, "PC"),
    (0x59, "MSIZE"),
    (0x5a, "GAS"),
    (0x5b, "JUMPDEST"),
    (0xf0, "CREATE"),
    (0xf1, "CALL"),
    (0xf2, "CALLCODE"),
    (0xf3, "RETURN"),
    (0xf4, "DELEGATECALL"),
    (0xf5, "CREATE2"),
    (0xfa, "STATICCALL"),
    (0xfd, "REVERT"),
    (0xfe, "INVALID"),
    (0xff, "SELFDESTRUCT"),
];

static OPCODE_TABLE: Lazy<OpcodeTable> = Lazy::new(OpcodeTable::build);

/// Total mapping from every byte value to its mnemonic.
///
/// Bytes outside the named set and the `PUSH`/`DUP`/`SWAP`/`LOG` families
/// resolve to `UNKNOWN_0x{byte:02x}`.
#[derive(Debug, Clone)]
pub struct OpcodeTable {
    names: Vec<String>,
    known: [bool; 256],
}

impl OpcodeTable {
    /// Shared, lazily built table.
    pub fn global() -> &'static OpcodeTable {
        &OPCODE_TABLE
    }

    fn build() -> Self {
        let mut names: Vec<String> = (0..=255u8).map(|b| format!("UNKNOWN_0x{:02x}", b)).collect();
        let mut known = [false; 256];
        for &(op, name) in NAMED_OPCODES {
            names[op as usize] = name.to_string();
            known[op as usize] = true;
        }
        for op in 0..=255u8 {
            if let Some(name) = family_mnemonic(op) {
                names[op as usize] = name;
                known[op as usize] = true;
            }
        }
        Self { names, known }
    }

    /// Mnemonic for `opcode`. Never fails.
    pub fn lookup(&self, opcode: u8) -> &str {
        &self.names[opcode as usize]
    }

    /// Whether `opcode` has a real mnemonic rather than the sentinel.
    pub fn is_known(&self, opcode: u8) -> bool {
        self.known[opcode as usize]
    }
}

/// Mnemonic for the parametrized families, `None` outside them.
fn family_mnemonic(op: u8) -> Option<String> {
    match op {
        PUSH1..=PUSH32 => Some(format!("PUSH{}", op - 0x5f)),
        0x80..=0x8f => Some(format!("DUP{}", op - 0x7f)),
        0x90..=0x9f => Some(format!("SWAP{}", op - 0x8f)),
        0xa0..=0xa4 => Some(format!("LOG{}", op - 0xa0)),
        _ => None,
    }
}

/// Number of immediate bytes a push opcode declares (1..=32).
pub fn push_width(opcode: u8) -> Option<usize> {
    match opcode {
        PUSH1..=PUSH32 => Some((opcode - 0x5f) as usize),
        _ => None,
    }
}

/// Shorthand for `OpcodeTable::global().lookup(opcode)`.
pub fn mnemonic(opcode: u8) -> &'static str {
    OpcodeTable::global().lookup(opcode)
}
