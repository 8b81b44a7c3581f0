use clap::Parser;
use colored::*;
use lineage_bench::backend::EntrezBackend;
use lineage_bench::{pipeline, LineageError};
use std::io;
use std::process;
use tracing_subscriber::EnvFilter;

/// Resolve taxid lineages from stdin against the remote NCBI E-utilities
/// taxonomy service, one HTTP request and one tab-separated line per taxid.
#[derive(Parser)]
#[command(name = "get-lineage-entrez", version)]
struct Args {
    /// Contact email sent with every E-utilities request
    #[arg(long, env = "ENTREZ_EMAIL", default_value = "anonymous@test.com")]
    email: String,
}

fn main() {
    init_logging();

    let args = Args::parse();

    if let Err(e) = run(args) {
        eprintln!("{} {}", "Error:".red().bold(), e);

        let exit_code = match e.downcast_ref::<LineageError>() {
            Some(LineageError::Io(_)) => 3,
            Some(LineageError::UnknownTaxid(_)) | Some(LineageError::Xml(_)) => 4,
            Some(LineageError::Http(_)) => 6,
            _ => 1,
        };
        process::exit(exit_code);
    }
}

fn run(args: Args) -> anyhow::Result<()> {
    let backend = EntrezBackend::new(&args.email)?;

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
