/*!
 * Ethernity Types
 *
 * Tipos comuns usados em toda a workspace Ethernity
 */

use serde::{Deserialize, Serialize};
use std::fmt;

/// Rótulo de um contrato dentro de um conjunto de treino
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContractLabel {
    Vulnerable,
    Benign,
}

impl ContractLabel {
    /// Converte a flag booleana usada pelos datasets (`true` => vulnerável)
    pub fn from_flag(vulnerable: bool) -> Self {
        if vulnerable {
            ContractLabel::Vulnerable
        } else {
            ContractLabel::Benign
        }
    }

    /// Nome do subdiretório de saída associado ao rótulo
    pub fn as_str(&self) -> &'static str {
        match self {
            ContractLabel::Vulnerable => "vulnerable",
            ContractLabel::Benign => "benign",
        }
    }
}

impl fmt::Display for ContractLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Formato em que o bytecode foi encontrado no arquivo de origem
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SourceFormat {
    /// Texto hexadecimal, com ou sem prefixo `0x`
    HexText,
    /// Bytes crus
    Binary,
}

impl fmt::Display for SourceFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SourceFormat::HexText => write!(f, "hex_text"),
            SourceFormat::Binary => write!(f, "binary"),
        }
    }
}
