//! # I/O Module
//!
//! File reading/writing boundaries. Converts between text tables on disk and
//! the in-memory `GenotypeMatrix` / `MarkerEffects` representations.

pub mod dosage;
pub mod effects;
pub mod output;

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use flate2::read::MultiGzDecoder;

use crate::error::Result;

pub use dosage::DosageReader;
pub use effects::{EffectsReader, EffectsTable};
pub use output::write_genetic_values;

/// Open a text file, gzip-decoding `.gz` / `.bgz` files.
///
/// BGZF is a series of gzip members, so the multi-member decoder covers both.
pub fn open_text(path: &Path) -> Result<Box<dyn BufRead + Send>> {
    let file = File::open(path)?;
    let is_gzipped = path
        .extension()
        .map(|e| e == "gz" || e == "bgz")
        .unwrap_or(false);

    let reader: Box<dyn BufRead + Send> = if is_gzipped {
        Box::new(BufReader::new(MultiGzDecoder::new(file)))
    } else {
        Box::new(BufReader::new(file))
    };
    Ok(reader)
}

/// Data lines of a table: 1-based line number and the trimmed text.
///
/// Blank lines are skipped. Lines starting with `#` are comments only before
/// the header; after it they are data, so an id such as `#12` is kept.
pub(crate) fn data_lines<R: BufRead>(
    reader: R,
) -> impl Iterator<Item = std::io::Result<(usize, String)>> {
    let mut in_preamble = true;
    reader
        .lines()
        .enumerate()
        .filter_map(move |(i, line)| match line {
            Ok(line) => {
                let trimmed = line.trim();
                if trimmed.is_empty() || (in_preamble && trimmed.starts_with('#')) {
                    None
                } else {
                    in_preamble = false;
                    Some(Ok((i + 1, trimmed.to_string())))
                }
            }
            Err(e) => Some(Err(e)),
        })
}
