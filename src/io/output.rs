//! # Genetic Value Writer
//!
//! Writes one `id<TAB>gv` line per individual after an `id\tgv` header.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use tracing::info_span;

use crate::data::individual::Individuals;
use crate::error::{GenvalError, Result};

/// Write genetic values to `path`, in individual order
pub fn write_genetic_values(path: &Path, individuals: &Individuals, values: &[f64]) -> Result<()> {
    info_span!("write_genetic_values", path = ?path).in_scope(|| {
        let file = File::create(path)?;
        let mut writer = BufWriter::new(file);
        write_table(&mut writer, individuals, values)?;
        writer.flush()?;
        Ok(())
    })
}

/// Write the table to any writer
pub fn write_table<W: Write>(writer: &mut W, individuals: &Individuals, values: &[f64]) -> Result<()> {
    if individuals.len() != values.len() {
        return Err(GenvalError::dimension_mismatch(
            "genetic values",
            individuals.len(),
            values.len(),
        ));
    }

    writeln!(writer, "id\tgv")?;
    for (id, gv) in individuals.ids().iter().zip(values) {
        writeln!(writer, "{}\t{}", id, gv)?;
    }
    Ok(())
}
