//! Managed backend: taxdump files cached under a data directory owned by this
//! tool, downloaded from NCBI on first use and loaded into memory.
//!
//! Mirrors the ete3-style lookup: the lineage is a root-first taxid path, the
//! leading root node is dropped, and the remaining ids (queried taxon
//! included) are translated to scientific names.

use crate::download;
use crate::pipeline::LineageSource;
use crate::taxonomy::TaxonomyDb;
use crate::{LineageError, Result};
use anyhow::Context;
use std::path::Path;

pub struct CachedBackend {
    db: TaxonomyDb,
}

impl CachedBackend {
    /// Open the cache at `dir`, fetching the taxdump archive if absent
    pub fn open(dir: &Path) -> anyhow::Result<Self> {
        download::ensure_taxdump(dir)?;

        let db = TaxonomyDb::from_dump_files(dir.join("nodes.dmp"), dir.join("names.dmp"))
            .with_context(|| format!("Failed to load cached taxdump from {}", dir.display()))?;

        Ok(Self { db })
    }

    pub fn from_db(db: TaxonomyDb) -> Self {
        Self { db }
    }
}

impl LineageSource for CachedBackend {
    fn name_lineage(&self, taxid: &str) -> Result<Vec<String>> {
        let taxid: u32 = taxid
            .parse()
            .map_err(|_| LineageError::UnknownTaxid(taxid.to_string()))?;

        let mut ids = self.db.id_lineage(taxid)?;
        ids.reverse();

        // ids[0] is the root node; names are translated for the rest
        ids.iter()
            .skip(1)
            .map(|&id| {
                self.db
                    .name_of(id)
                    .map(String::from)
                    .ok_or_else(|| LineageError::Parse(format!("no scientific name for taxid {}", id)))
            })
            .collect()
    }
}
