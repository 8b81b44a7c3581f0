mod common;

use lineage_bench::backend::{CachedBackend, TaxdumpBackend};
use lineage_bench::pipeline::{self, LineageSource};
use lineage_bench::LineageError;
use pretty_assertions::assert_eq;
use std::io::Cursor;
use tempfile::TempDir;

fn dump_dir() -> TempDir {
    let dir = TempDir::new().unwrap();
    common::write_dump_files(dir.path());
    dir
}

#[test]
fn taxdump_lineage_includes_self_and_excludes_root() {
    let dir = dump_dir();
    let backend = TaxdumpBackend::load(dir.path()).unwrap();

    assert_eq!(
        backend.name_lineage("9606").unwrap(),
        vec!["cellular organisms", "Eukaryota", "Homo", "Homo sapiens"]
    );
}

#[test]
fn taxdump_root_has_empty_lineage() {
    let dir = dump_dir();
    let backend = TaxdumpBackend::load(dir.path()).unwrap();
    assert_eq!(backend.name_lineage("1").unwrap(), Vec::<String>::new());
}

#[test]
fn taxdump_unknown_taxid_is_an_error() {
    let dir = dump_dir();
    let backend = TaxdumpBackend::load(dir.path()).unwrap();
    assert!(matches!(
        backend.name_lineage("424242"),
        Err(LineageError::UnknownTaxid(_))
    ));
}

#[test]
fn taxdump_missing_files_fail_to_load() {
    let dir = TempDir::new().unwrap();
    assert!(TaxdumpBackend::load(dir.path()).is_err());
}

#[test]
fn cached_backend_uses_preexisting_dump_without_downloading() {
    let dir = dump_dir();
    let backend = CachedBackend::open(dir.path()).unwrap();

    assert_eq!(
        backend.name_lineage("9606").unwrap(),
        vec!["cellular organisms", "Eukaryota", "Homo", "Homo sapiens"]
    );
}

#[test]
fn cached_and_taxdump_backends_agree_on_the_toy_taxonomy() {
    let dir = dump_dir();
    let taxdump = TaxdumpBackend::load(dir.path()).unwrap();
    let cached = CachedBackend::open(dir.path()).unwrap();

    for (taxid, _, _) in common::TAXA {
        let id = taxid.to_string();
        assert_eq!(
            taxdump.name_lineage(&id).unwrap(),
            cached.name_lineage(&id).unwrap(),
            "taxid {}",
            id
        );
    }
}

#[test]
fn pipeline_over_taxdump_preserves_line_count_and_order() {
    let dir = dump_dir();
    let backend = TaxdumpBackend::load(dir.path()).unwrap();

    let mut out = Vec::new();
    pipeline::run(&backend, Cursor::new("2\n9605\n2759\n"), &mut out).unwrap();

    let output = String::from_utf8(out).unwrap();
    assert_eq!(
        output,
        "2\tBacteria\n\
         9605\tcellular organisms; Eukaryota; Homo\n\
         2759\tcellular organisms; Eukaryota\n"
    );
}
