/*!
 * Ethernity Utils
 *
 * Utilitários comuns usados em toda a workspace Ethernity
 */

use crate::error::{Error, Result};

/// Remove o prefixo `0x` (ou `0X`) de uma string hexadecimal
pub fn strip_hex_prefix(hex: &str) -> &str {
    if hex.starts_with("0x") || hex.starts_with("0X") {
        &hex[2..]
    } else {
        hex
    }
}

/// Verifica se o texto é bytecode em hexadecimal: prefixo `0x` opcional
/// seguido de ao menos um dígito hexadecimal ou espaço em branco
pub fn is_hex_text(text: &str) -> bool {
    let body = strip_hex_prefix(text.trim());
    !body.is_empty()
        && body
            .chars()
            .all(|c| c.is_ascii_hexdigit() || c.is_whitespace())
}

/// Normaliza texto hexadecimal: sem prefixo, sem espaços e em minúsculas
pub fn normalize_hex_text(text: &str) -> String {
    strip_hex_prefix(text.trim())
        .chars()
        .filter(|c| !c.is_whitespace())
        .map(|c| c.to_ascii_lowercase())
        .collect()
}

/// Converte texto hexadecimal em bytes.
///
/// Um número ímpar de nibbles é truncado (o último nibble é descartado),
/// nunca completado. Caracteres não hexadecimais geram `Error::InvalidInput`.
pub fn decode_hex(hex: &str) -> Result<Vec<u8>> {
    let hex = match hex.char_indices().nth(hex.chars().count() & !1) {
        Some((cut, _)) => &hex[..cut],
        None => hex,
    };
    hex::decode(hex).map_err(|e| Error::InvalidInput {
        len: hex.chars().count(),
        reason: e.to_string(),
    })
}
