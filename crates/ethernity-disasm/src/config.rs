use std::env;
use std::path::PathBuf;

use ethernity_core::{error::Result, Error};
use serde::{Deserialize, Serialize};

pub const ENV_PUSH_DATA: &str = "ETHERNITY_DISASM_PUSH_DATA";
pub const ENV_OUTPUT_DIR: &str = "ETHERNITY_DISASM_OUTPUT_DIR";
pub const ENV_PARALLEL: &str = "ETHERNITY_DISASM_PARALLEL";

/// Configuração da desmontagem em lote
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DisassemblerConfig {
    /// Inclui o imediato dos PUSH no token (`PUSH1_0x80`)
    pub include_push_data_as_token: bool,
    /// Diretório raiz dos arquivos `.asm`
    pub output_dir: PathBuf,
    /// Processa os contratos em paralelo
    pub enable_parallel: bool,
}

impl Default for DisassemblerConfig {
    fn default() -> Self {
        Self {
            include_push_data_as_token: false,
            output_dir: PathBuf::from("output/disasm"),
            enable_parallel: true,
        }
    }
}

impl DisassemblerConfig {
    /// Configuração padrão sobrescrita pelas variáveis `ETHERNITY_DISASM_*`
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Lê a configuração de um documento JSON; campos ausentes usam o padrão
    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json).map_err(|e| Error::ConfigError(e.to_string()))
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let mut config = Self::default();
        if let Some(v) = lookup(ENV_PUSH_DATA) {
            config.include_push_data_as_token = parse_bool(ENV_PUSH_DATA, &v)?;
        }
        if let Some(v) = lookup(ENV_OUTPUT_DIR) {
            config.output_dir = PathBuf::from(v);
        }
        if let Some(v) = lookup(ENV_PARALLEL) {
            config.enable_parallel = parse_bool(ENV_PARALLEL, &v)?;
        }
        Ok(config)
    }
}

fn parse_bool(key: &str, value: &str) -> Result<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        other => Err(Error::ConfigError(format!("{key}: valor booleano inválido '{other}'"))),
    }
}
