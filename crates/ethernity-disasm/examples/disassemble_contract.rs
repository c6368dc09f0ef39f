use std::env;
use std::path::PathBuf;

use ethernity_core::types::ContractLabel;
use ethernity_disasm::{collect_contract_files, ContractJob, CorpusProcessor, DisassemblerConfig};
use tracing::info;

/// Disassembles a contract file, or every file in a directory, into
/// `<output_dir>/<vulnerable|benign>/<stem>.asm` and prints token stats.
fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();

    let args: Vec<String> = env::args().collect();
    if args.len() < 2 {
        eprintln!("Uso: {} <ARQUIVO_OU_DIRETORIO> [--vulnerable]", args[0]);
        std::process::exit(1);
    }

    let target = PathBuf::from(&args[1]);
    let label = ContractLabel::from_flag(args.iter().any(|a| a == "--vulnerable"));
    let config = DisassemblerConfig::from_env()?;
    info!("Saída em {}", config.output_dir.display());

    let files = if target.is_dir() {
        collect_contract_files(&target)?
    } else {
        vec![target]
    };
    let jobs: Vec<ContractJob> = files
        .into_iter()
        .map(|path| ContractJob::new(path, label))
        .collect();

    let report = CorpusProcessor::new(config).process_batch(&jobs);

    for (path, tokens) in &report.file_tokens {
        println!("{}: {} tokens", path.display(), tokens.len());
        let preview: Vec<&str> = tokens.iter().take(20).map(String::as_str).collect();
        println!("  {}", preview.join(" "));
    }
    for path in &report.skipped {
        println!("{}: vazio, ignorado", path.display());
    }
    for failed in &report.failures {
        println!("{}: erro: {}", failed.path.display(), failed.reason);
    }
    Ok(())
}
