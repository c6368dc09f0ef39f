//! Loading contract bytecode from disk in either hex-text or raw form.

use std::fs;
use std::path::{Path, PathBuf};

use ethernity_core::{
    error::Result,
    types::SourceFormat,
    utils::{is_hex_text, normalize_hex_text},
};

/// Bytecode read from a contract file, as clean lowercase hex text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContractSource {
    pub path: PathBuf,
    pub format: SourceFormat,
    pub hex: String,
}

impl ContractSource {
    pub fn is_empty(&self) -> bool {
        self.hex.is_empty()
    }
}

/// Classifies raw file contents and returns their hex text.
///
/// Valid UTF-8 made only of an optional `0x` prefix, hex digits and
/// whitespace is taken as hex text; anything else is raw bytecode.
pub fn sniff_source(raw: &[u8]) -> (SourceFormat, String) {
    match std::str::from_utf8(raw) {
        Ok(text) if is_hex_text(text) => (SourceFormat::HexText, normalize_hex_text(text)),
        _ => (SourceFormat::Binary, hex::encode(raw)),
    }
}

/// Reads and classifies a contract file.
pub fn read_contract(path: impl AsRef<Path>) -> Result<ContractSource> {
    let path = path.as_ref();
    let raw = fs::read(path)?;
    let (format, hex) = sniff_source(&raw);
    Ok(ContractSource {
        path: path.to_path_buf(),
        format,
        hex,
    })
}
