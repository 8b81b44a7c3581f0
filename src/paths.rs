//! Default locations of the backing taxonomy resources.
//!
//! Each path honors an environment variable override and falls back to the
//! conventional dot-directory under the user's home, matching where the
//! benchmarked libraries keep their data.

use std::path::PathBuf;
use std::sync::OnceLock;

// Cache the paths to avoid repeated environment lookups
static HOME_DIR: OnceLock<PathBuf> = OnceLock::new();
static TAXADB_PATH: OnceLock<PathBuf> = OnceLock::new();
static TAXDUMP_DIR: OnceLock<PathBuf> = OnceLock::new();
static CACHE_DIR: OnceLock<PathBuf> = OnceLock::new();

/// Get the user's home directory, falling back to the current directory
pub fn home_dir() -> PathBuf {
    HOME_DIR
        .get_or_init(|| {
            let home = std::env::var("HOME").unwrap_or_else(|_| {
                std::env::var("USERPROFILE").unwrap_or_else(|_| ".".to_string())
            });
            PathBuf::from(home)
        })
        .clone()
}

/// Path to the taxadb-schema SQLite database
/// Checks LINEAGE_BENCH_TAXADB, falls back to ${HOME}/.taxadb/taxadb.sqlite
pub fn taxadb_path() -> PathBuf {
    TAXADB_PATH
        .get_or_init(|| {
            if let Ok(path) = std::env::var("LINEAGE_BENCH_TAXADB") {
                PathBuf::from(path)
            } else {
                home_dir().join(".taxadb").join("taxadb.sqlite")
            }
        })
        .clone()
}

/// Directory holding pre-fetched nodes.dmp and names.dmp
/// Checks LINEAGE_BENCH_TAXDUMP_DIR, falls back to ${HOME}/.taxopy
pub fn taxdump_dir() -> PathBuf {
    TAXDUMP_DIR
        .get_or_init(|| {
            if let Ok(path) = std::env::var("LINEAGE_BENCH_TAXDUMP_DIR") {
                PathBuf::from(path)
            } else {
                home_dir().join(".taxopy")
            }
        })
        .clone()
}

/// Managed cache directory for the auto-downloading backend
/// Checks LINEAGE_BENCH_CACHE_DIR, falls back to ${HOME}/.lineage-bench/taxdump
pub fn cache_dir() -> PathBuf {
    CACHE_DIR
        .get_or_init(|| {
            if let Ok(path) = std::env::var("LINEAGE_BENCH_CACHE_DIR") {
                PathBuf::from(path)
            } else {
                home_dir().join(".lineage-bench").join("taxdump")
            }
        })
        .clone()
}
