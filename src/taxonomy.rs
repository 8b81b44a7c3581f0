//! In-memory model of the NCBI taxonomy dump files.
//!
//! `nodes.dmp` and `names.dmp` are `\t|\t`-delimited; only the taxid, parent
//! taxid, and scientific name columns are consumed here. The root node (taxid
//! 1) is its own parent, which terminates every parent-chain walk.

use crate::{LineageError, Result};
use std::collections::HashMap;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

/// Taxid -> scientific name and taxid -> parent maps, loaded once at startup
#[derive(Debug, Default)]
pub struct TaxonomyDb {
    names: HashMap<u32, String>,
    parents: HashMap<u32, u32>,
}

impl TaxonomyDb {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build the database from a nodes.dmp / names.dmp pair
    pub fn from_dump_files<P: AsRef<Path>>(nodes_path: P, names_path: P) -> Result<Self> {
        let parents = load_nodes(nodes_path)?;
        let names = load_names(names_path)?;
        tracing::debug!(taxa = parents.len(), "loaded taxonomy dump");
        Ok(Self { names, parents })
    }

    pub fn insert(&mut self, taxid: u32, parent: u32, name: &str) {
        self.parents.insert(taxid, parent);
        self.names.insert(taxid, name.to_string());
    }

    pub fn len(&self) -> usize {
        self.parents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.parents.is_empty()
    }

    pub fn name_of(&self, taxid: u32) -> Option<&str> {
        self.names.get(&taxid).map(|s| s.as_str())
    }

    /// Walk the parent chain starting at `taxid`, returning taxids in
    /// self-to-root order (both endpoints included). Errors if `taxid` or any
    /// ancestor on the chain is absent from nodes.dmp.
    pub fn id_lineage(&self, taxid: u32) -> Result<Vec<u32>> {
        if !self.parents.contains_key(&taxid) {
            return Err(LineageError::UnknownTaxid(taxid.to_string()));
        }

        let mut lineage = Vec::new();
        let mut current = taxid;
        loop {
            lineage.push(current);
            let parent = *self
                .parents
                .get(&current)
                .ok_or_else(|| LineageError::UnknownTaxid(current.to_string()))?;
            if parent == current {
                break;
            }
            current = parent;
        }

        Ok(lineage)
    }
}

/// Load taxid -> scientific name from names.dmp, skipping synonym and
/// common-name rows
pub fn load_names<P: AsRef<Path>>(path: P) -> Result<HashMap<u32, String>> {
    let file = File::open(path)?;
    let reader = BufReader::new(file);
    let mut names = HashMap::new();

    for line in reader.lines() {
        let line = line?;
        let parts: Vec<&str> = line.split("\t|\t").collect();

        if parts.len() >= 4 && parts[3].trim_end_matches("\t|") == "scientific name" {
            if let Ok(taxid) = parts[0].parse::<u32>() {
                names.insert(taxid, parts[1].to_string());
            }
        }
    }

    Ok(names)
}

/// Load taxid -> parent taxid from nodes.dmp
pub fn load_nodes<P: AsRef<Path>>(path: P) -> Result<HashMap<u32, u32>> {
    let file = File::open(path)?;
    let reader = BufReader::new(file);
    let mut nodes = HashMap::new();

    for line in reader.lines() {
        let line = line?;
        let parts: Vec<&str> = line.split("\t|\t").collect();

        if parts.len() >= 2 {
            if let (Ok(taxid), Ok(parent)) = (parts[0].parse::<u32>(), parts[1].parse::<u32>()) {
                nodes.insert(taxid, parent);
            }
        }
    }

    Ok(nodes)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn toy_db() -> TaxonomyDb {
        let mut db = TaxonomyDb::new();
        db.insert(1, 1, "root");
        db.insert(131567, 1, "cellular organisms");
        db.insert(2759, 131567, "Eukaryota");
        db.insert(9605, 2759, "Homo");
        db.insert(9606, 9605, "Homo sapiens");
        db
    }

    #[test]
    fn id_lineage_walks_to_root() {
        let db = toy_db();
        assert_eq!(db.id_lineage(9606).unwrap(), vec![9606, 9605, 2759, 131567, 1]);
    }

    #[test]
    fn id_lineage_of_root_is_root_alone() {
        let db = toy_db();
        assert_eq!(db.id_lineage(1).unwrap(), vec![1]);
    }

    #[test]
    fn unknown_taxid_is_an_error() {
        let db = toy_db();
        assert!(matches!(
            db.id_lineage(4242),
            Err(crate::LineageError::UnknownTaxid(_))
        ));
    }

    #[test]
    fn load_names_keeps_only_scientific_names() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "9606\t|\tHomo sapiens\t|\t\t|\tscientific name\t|").unwrap();
        writeln!(file, "9606\t|\thuman\t|\t\t|\tgenbank common name\t|").unwrap();
        writeln!(file, "1\t|\troot\t|\t\t|\tscientific name\t|").unwrap();

        let names = load_names(file.path()).unwrap();
        assert_eq!(names.len(), 2);
        assert_eq!(names[&9606], "Homo sapiens");
        assert_eq!(names[&1], "root");
    }

    #[test]
    fn load_nodes_maps_taxid_to_parent() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "1\t|\t1\t|\tno rank\t|").unwrap();
        writeln!(file, "9606\t|\t9605\t|\tspecies\t|").unwrap();

        let nodes = load_nodes(file.path()).unwrap();
        assert_eq!(nodes[&1], 1);
        assert_eq!(nodes[&9606], 9605);
    }
}
