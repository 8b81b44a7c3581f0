#![allow(dead_code)]
//! Shared fixtures: a toy taxonomy seeded into each backing-resource format.
//!
//! The chain is root(1) -> cellular organisms(131567) -> Eukaryota(2759)
//! -> Homo(9605) -> Homo sapiens(9606), plus Bacteria(2) directly under root.

use rusqlite::{params, Connection};
use std::fs;
use std::path::Path;

pub const TAXA: &[(u32, u32, &str)] = &[
    (1, 1, "root"),
    (131567, 1, "cellular organisms"),
    (2759, 131567, "Eukaryota"),
    (9605, 2759, "Homo"),
    (9606, 9605, "Homo sapiens"),
    (2, 1, "Bacteria"),
];

/// Write nodes.dmp and names.dmp for the toy taxonomy into `dir`
pub fn write_dump_files(dir: &Path) {
    let mut nodes = String::new();
    let mut names = String::new();

    for (taxid, parent, name) in TAXA {
        nodes.push_str(&format!("{}\t|\t{}\t|\tno rank\t|\n", taxid, parent));
        names.push_str(&format!("{}\t|\t{}\t|\t\t|\tscientific name\t|\n", taxid, name));
        // a non-scientific row that loaders must skip
        names.push_str(&format!("{}\t|\talias {}\t|\t\t|\tsynonym\t|\n", taxid, name));
    }

    fs::write(dir.join("nodes.dmp"), nodes).unwrap();
    fs::write(dir.join("names.dmp"), names).unwrap();
}

/// Seed a taxadb-schema SQLite database with the toy taxonomy
pub fn seed_sqlite(path: &Path) {
    let conn = Connection::open(path).unwrap();
    conn.execute(
        "CREATE TABLE taxa (
            ncbi_taxid INTEGER PRIMARY KEY,
            parent_taxid INTEGER NOT NULL,
            tax_name TEXT NOT NULL,
            lineage_level TEXT
        )",
        [],
    )
    .unwrap();

    for (taxid, parent, name) in TAXA {
        conn.execute(
            "INSERT INTO taxa (ncbi_taxid, parent_taxid, tax_name, lineage_level)
             VALUES (?1, ?2, ?3, 'no rank')",
            params![taxid, parent, name],
        )
        .unwrap();
    }
}
