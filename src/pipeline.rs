//! The per-line lookup loop shared by all four binaries.

use crate::Result;
use std::io::{BufRead, BufWriter, Write};

/// A backing taxonomy resource that resolves one taxid into its ordered
/// lineage of scientific names (root side first). Which endpoints of the
/// chain are included is a per-backend quirk; see each implementation.
pub trait LineageSource {
    fn name_lineage(&self, taxid: &str) -> Result<Vec<String>>;
}

/// Read taxids line by line, resolve each against `source`, and write
/// `<taxid>\t<name; name; ...>` per line. Strictly sequential: one line is
/// fully resolved and emitted before the next is read. Any lookup failure
/// aborts the run.
pub fn run<S, R, W>(source: &S, input: R, output: W) -> Result<()>
where
    S: LineageSource,
    R: BufRead,
    W: Write,
{
    let mut out = BufWriter::new(output);

    for line in input.lines() {
        let line = line?;
        let taxid = line.trim();

        let names = source.name_lineage(taxid)?;
        writeln!(out, "{}\t{}", taxid, names.join("; "))?;
    }

    out.flush()?;
    Ok(())
}
