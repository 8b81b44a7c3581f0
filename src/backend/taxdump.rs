//! Flat-file backend: nodes.dmp + names.dmp loaded into memory at startup.
//!
//! Mirrors the taxopy-style name lineage: the full self-to-root chain is
//! materialized (root included), reversed, and the leading `root` entry is
//! dropped. The queried taxon's own name is the last element.

use crate::pipeline::LineageSource;
use crate::taxonomy::TaxonomyDb;
use crate::{LineageError, Result};
use anyhow::Context;
use std::path::Path;

pub struct TaxdumpBackend {
    db: TaxonomyDb,
}

impl TaxdumpBackend {
    /// Load the dump files under `dir` (expects nodes.dmp and names.dmp)
    pub fn load(dir: &Path) -> anyhow::Result<Self> {
        let nodes = dir.join("nodes.dmp");
        let names = dir.join("names.dmp");

        let db = TaxonomyDb::from_dump_files(&nodes, &names)
            .with_context(|| format!("Failed to load taxonomy dump from {}", dir.display()))?;

        Ok(Self { db })
    }

    pub fn from_db(db: TaxonomyDb) -> Self {
        Self { db }
    }
}

impl LineageSource for TaxdumpBackend {
    fn name_lineage(&self, taxid: &str) -> Result<Vec<String>> {
        let taxid: u32 = taxid
            .parse()
            .map_err(|_| LineageError::UnknownTaxid(taxid.to_string()))?;

        let ids = self.db.id_lineage(taxid)?;
        let mut names = ids
            .iter()
            .map(|&id| {
                self.db
                    .name_of(id)
                    .map(String::from)
                    .ok_or_else(|| LineageError::Parse(format!("no scientific name for taxid {}", id)))
            })
            .collect::<Result<Vec<_>>>()?;

        // self-to-root order: the root name sits at the end
        names.pop();
        names.reverse();
        Ok(names)
    }
}
