//! Ethernity Disasm
//!
//! Linear disassembler for EVM bytecode. Produces a human-readable assembly
//! listing and a flat opcode token sequence for feature extraction.

pub mod opcodes;
pub mod parser;
pub mod render;
pub mod source;
pub mod corpus;
pub mod config;

pub use config::DisassemblerConfig;
pub use corpus::{collect_contract_files, ContractJob, CorpusProcessor, CorpusReport, FileOutcome};
pub use opcodes::OpcodeTable;
pub use parser::{parse_instructions, Instruction};
pub use render::{disassemble, disassemble_hex, DecodeResult};
pub use source::{read_contract, sniff_source, ContractSource};
