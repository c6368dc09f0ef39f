//! Batch disassembly of labeled contract files.
//!
//! Each file is decoded independently; a failing file is recorded and the
//! batch moves on. Listings land in `<output_dir>/<label>/<stem>.asm`.

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use ethernity_core::{error::Result, types::ContractLabel, Error};
use rayon::prelude::*;
use tracing::{debug, info, warn};

use crate::config::DisassemblerConfig;
use crate::render::disassemble_hex;
use crate::source::read_contract;

/// A contract file and its dataset label.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContractJob {
    pub path: PathBuf,
    pub label: ContractLabel,
}

impl ContractJob {
    pub fn new(path: impl Into<PathBuf>, label: ContractLabel) -> Self {
        Self { path: path.into(), label }
    }
}

/// Result of processing one file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FileOutcome {
    Disassembled { asm_path: PathBuf, tokens: Vec<String> },
    /// The file held no bytecode.
    Skipped,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FailedContract {
    pub path: PathBuf,
    pub reason: String,
}

/// Aggregated output of a batch, in job order.
#[derive(Debug, Clone, Default)]
pub struct CorpusReport {
    pub token_sequences: Vec<Vec<String>>,
    pub file_tokens: BTreeMap<PathBuf, Vec<String>>,
    pub skipped: Vec<PathBuf>,
    pub failures: Vec<FailedContract>,
}

impl CorpusReport {
    pub fn processed(&self) -> usize {
        self.token_sequences.len()
    }

    fn record(&mut self, path: &Path, outcome: Result<FileOutcome>) {
        match outcome {
            Ok(FileOutcome::Disassembled { tokens, .. }) => {
                self.file_tokens.insert(path.to_path_buf(), tokens.clone());
                self.token_sequences.push(tokens);
            }
            Ok(FileOutcome::Skipped) => self.skipped.push(path.to_path_buf()),
            Err(e) => {
                warn!(path = %path.display(), error = %e, "falha ao processar contrato");
                self.failures.push(FailedContract {
                    path: path.to_path_buf(),
                    reason: e.to_string(),
                });
            }
        }
    }
}

/// Disassembles contract files and writes their listings.
#[derive(Debug, Clone)]
pub struct CorpusProcessor {
    config: DisassemblerConfig,
}

impl CorpusProcessor {
    pub fn new(config: DisassemblerConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &DisassemblerConfig {
        &self.config
    }

    /// Where the listing for `path` is written.
    pub fn asm_path(&self, path: &Path, label: ContractLabel) -> Result<PathBuf> {
        let stem = path
            .file_stem()
            .ok_or_else(|| Error::Other(format!("caminho sem nome de arquivo: {}", path.display())))?;
        let mut name = stem.to_os_string();
        name.push(".asm");
        Ok(self.config.output_dir.join(label.as_str()).join(name))
    }

    /// Reads, decodes and writes the listing of a single contract.
    pub fn process_file(&self, path: &Path, label: ContractLabel) -> Result<FileOutcome> {
        let source = read_contract(path)?;
        if source.is_empty() {
            info!(path = %path.display(), "arquivo vazio ignorado");
            return Ok(FileOutcome::Skipped);
        }

        let result = disassemble_hex(&source.hex, self.config.include_push_data_as_token)?;
        let asm_path = self.asm_path(path, label)?;
        if let Some(parent) = asm_path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&asm_path, result.assembly_text())?;
        debug!(
            path = %path.display(),
            asm = %asm_path.display(),
            format = %source.format,
            instructions = result.len(),
            "contrato desmontado"
        );

        let (_, tokens) = result.into_parts();
        Ok(FileOutcome::Disassembled { asm_path, tokens })
    }

    /// Processes every job, isolating per-file failures.
    pub fn process_batch(&self, jobs: &[ContractJob]) -> CorpusReport {
        let outcomes: Vec<Result<FileOutcome>> = if self.config.enable_parallel {
            jobs.par_iter()
                .map(|job| self.process_file(&job.path, job.label))
                .collect()
        } else {
            jobs.iter()
                .map(|job| self.process_file(&job.path, job.label))
                .collect()
        };

        let mut report = CorpusReport::default();
        for (job, outcome) in jobs.iter().zip(outcomes) {
            report.record(&job.path, outcome);
        }
        info!(
            total = jobs.len(),
            processed = report.processed(),
            skipped = report.skipped.len(),
            failed = report.failures.len(),
            "lote concluído"
        );
        report
    }
}

/// Regular files directly under `dir`, sorted by path.
pub fn collect_contract_files(dir: impl AsRef<Path>) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();
    for entry in fs::read_dir(dir)? {
        let entry = entry?;
        if entry.file_type()?.is_file() {
            files.push(entry.path());
        }
    }
    files.sort();
    Ok(files)
}
