use thiserror::Error;

/// Erros comuns da biblioteca Ethernity
#[derive(Error, Debug)]
pub enum Error {
    /// Texto hexadecimal que não pode ser convertido em bytes
    #[error("Entrada hexadecimal inválida (len={len}): {reason}")]
    InvalidInput { len: usize, reason: String },

    /// Falha de leitura ou escrita em disco
    #[error("Erro de E/S: {0}")]
    Io(#[from] std::io::Error),

    /// Configuração inválida
    #[error("Erro de configuração: {0}")]
    ConfigError(String),

    /// Erro genérico
    #[error("{0}")]
    Other(String),
}

/// Tipo de resultado usado em toda a biblioteca
pub type Result<T> = std::result::Result<T, Error>;
