//! SQLite-backed lookup against a taxadb-schema database.
//!
//! The database holds one `taxa` row per node: `ncbi_taxid`, `parent_taxid`,
//! `tax_name`. The lineage walk climbs parent pointers one query at a time and
//! stops when it reaches the row named `root`, whose name is not collected.
//! The queried taxon's own name IS included, root-side first in the result.

use crate::pipeline::LineageSource;
use crate::{LineageError, Result};
use anyhow::Context;
use rusqlite::{params, Connection, OpenFlags};
use std::path::Path;

pub struct SqliteBackend {
    conn: Connection,
}

impl SqliteBackend {
    /// Open an existing taxonomy database read-only; missing file is an error
    pub fn open<P: AsRef<Path>>(path: P) -> anyhow::Result<Self> {
        let path = path.as_ref();
        let conn = Connection::open_with_flags(
            path,
            OpenFlags::SQLITE_OPEN_READ_ONLY | OpenFlags::SQLITE_OPEN_NO_MUTEX,
        )
        .with_context(|| format!("Failed to open taxonomy database {}", path.display()))?;

        tracing::debug!(path = %path.display(), "opened taxonomy database");
        Ok(Self { conn })
    }

    fn taxon_row(&self, taxid: i64) -> Result<(String, i64)> {
        let mut stmt = self
            .conn
            .prepare_cached("SELECT tax_name, parent_taxid FROM taxa WHERE ncbi_taxid = ?1")?;

        stmt.query_row(params![taxid], |row| Ok((row.get(0)?, row.get(1)?)))
            .map_err(|e| match e {
                rusqlite::Error::QueryReturnedNoRows => {
                    LineageError::UnknownTaxid(taxid.to_string())
                }
                other => LineageError::Database(other),
            })
    }
}

impl LineageSource for SqliteBackend {
    fn name_lineage(&self, taxid: &str) -> Result<Vec<String>> {
        let start: i64 = taxid
            .parse()
            .map_err(|_| LineageError::UnknownTaxid(taxid.to_string()))?;

        let mut names = Vec::new();
        let (mut name, mut parent) = self.taxon_row(start)?;
        let mut current = start;

        while name != "root" {
            names.push(name);
            // root is its own parent
            if parent == current {
                break;
            }
            current = parent;
            let row = self.taxon_row(current)?;
            name = row.0;
            parent = row.1;
        }

        names.reverse();
        Ok(names)
    }
}
