//! Fetching and unpacking the NCBI taxdump archive for the cached backend.

use anyhow::{Context, Result};
use flate2::read::GzDecoder;
use indicatif::{ProgressBar, ProgressStyle};
use std::path::Path;
use tar::Archive;

pub const TAXDUMP_URL: &str = "https://ftp.ncbi.nlm.nih.gov/pub/taxonomy/taxdump.tar.gz";

/// Make sure `dir` contains nodes.dmp and names.dmp, downloading and
/// extracting the NCBI taxdump archive on first use.
pub fn ensure_taxdump(dir: &Path) -> Result<()> {
    if has_dump_files(dir) {
        tracing::debug!(dir = %dir.display(), "using cached taxdump");
        return Ok(());
    }

    std::fs::create_dir_all(dir)
        .with_context(|| format!("Failed to create cache directory {}", dir.display()))?;

    let pb = ProgressBar::new_spinner();
    pb.set_style(
        ProgressStyle::default_spinner()
            .template("{spinner:.green} {msg}")
            .unwrap(),
    );
    pb.set_message("Downloading NCBI taxdump...");

    let response = reqwest::blocking::get(TAXDUMP_URL)
        .context("Failed to download taxdump")?
        .error_for_status()
        .context("Taxdump download rejected by server")?;

    pb.set_message("Extracting taxdump files...");

    let tar_gz = GzDecoder::new(response);
    let mut archive = Archive::new(tar_gz);
    archive
        .unpack(dir)
        .with_context(|| format!("Failed to extract taxdump into {}", dir.display()))?;

    pb.finish_with_message(format!("Taxdump cached at {}", dir.display()));
    Ok(())
}

pub fn has_dump_files(dir: &Path) -> bool {
    dir.join("nodes.dmp").exists() && dir.join("names.dmp").exists()
}
