use clap::Parser;
use colored::*;
use lineage_bench::backend::TaxdumpBackend;
use lineage_bench::{paths, pipeline, LineageError};
use std::io;
use std::path::PathBuf;
use std::process;
use tracing_subscriber::EnvFilter;

/// Resolve taxid lineages from stdin against NCBI nodes.dmp/names.dmp files
/// loaded into memory at startup, one tab-separated line per taxid.
#[derive(Parser)]
#[command(name = "get-lineage-taxdump", version)]
struct Args {
    /// Directory holding nodes.dmp and names.dmp
    #[arg(long, env = "LINEAGE_BENCH_TAXDUMP_DIR")]
    dir: Option<PathBuf>,
}

fn main() {
    init_logging();

    let args = Args::parse();

    if let Err(e) = run(args) {
        eprintln!("{} {}", "Error:".red().bold(), e);

        let exit_code = match e.downcast_ref::<LineageError>() {
            Some(LineageError::Io(_)) => 3,
            Some(LineageError::UnknownTaxid(_)) | Some(LineageError::Parse(_)) => 4,
            _ => 1,
        };
        process::exit(exit_code);
    }
}

fn run(args: Args) -> anyhow::Result<()> {
    let dir = args.dir.unwrap_or_else(paths::taxdump_dir);
    let backend = TaxdumpBackend::load(&dir)?;

    let stdin = io::stdin();
    pipeline::run(&backend, stdin.lock(), io::stdout())?;
    Ok(())
}

fn init_logging() {
    let log_level = std::env::var("LINEAGE_BENCH_LOG").unwrap_or_else(|_| "warn".to_string());

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&log_level)),
        )
        .with_writer(io::stderr)
        .init();
}
