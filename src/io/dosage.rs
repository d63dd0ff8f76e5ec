//! # Dosage Table Reader
//!
//! Reads an individuals x markers dosage table:
//!
//! ```text
//! id    snp1  snp2  snp3
//! ind1  0     1     2
//! ind2  2     1     0
//! ```
//!
//! Fields are separated by tabs or spaces. The first header token is a label
//! and is ignored.

use std::io::BufRead;
use std::path::Path;
use std::sync::Arc;

use tracing::{debug, info_span};

use crate::data::individual::Individuals;
use crate::data::marker::Markers;
use crate::data::storage::GenotypeMatrix;
use crate::error::{GenvalError, Result};
use crate::io::{data_lines, open_text};

/// Reader for dosage tables with a fixed ploidy
#[derive(Clone, Copy, Debug)]
pub struct DosageReader {
    ploidy: u8,
}

impl DosageReader {
    pub fn new(ploidy: u8) -> Self {
        Self { ploidy }
    }

    /// Read a dosage table from a (possibly gzipped) file
    pub fn read_path(&self, path: &Path) -> Result<GenotypeMatrix> {
        info_span!("read_dosages", path = ?path).in_scope(|| {
            let reader = open_text(path)?;
            self.read(reader)
        })
    }

    /// Read a dosage table from any buffered reader
    pub fn read<R: BufRead>(&self, reader: R) -> Result<GenotypeMatrix> {
        if self.ploidy == 0 {
            return Err(GenvalError::invalid_argument("ploidy must be at least 1"));
        }

        let mut lines = data_lines(reader);
        let (_, header) = lines
            .next()
            .transpose()?
            .ok_or_else(|| GenvalError::parse(0, "missing header line"))?;

        let marker_ids: Vec<String> = header
            .split_whitespace()
            .skip(1)
            .map(str::to_string)
            .collect();
        let n_markers = marker_ids.len();
        let markers = Markers::from_ids(marker_ids)?;

        let mut ind_ids = Vec::new();
        let mut dosages = Vec::new();
        for line in lines {
            let (line_no, text) = line?;
            let mut fields = text.split_whitespace();
            let id = fields
                .next()
                .ok_or_else(|| GenvalError::parse(line_no, "empty row"))?;

            let start = dosages.len();
            for field in fields {
                let dosage: u8 = field.parse().map_err(|_| {
                    GenvalError::parse(line_no, format!("invalid dosage '{}'", field))
                })?;
                if dosage > self.ploidy {
                    return Err(GenvalError::parse(
                        line_no,
                        format!("dosage {} exceeds ploidy {}", dosage, self.ploidy),
                    ));
                }
                dosages.push(dosage);
            }

            let found = dosages.len() - start;
            if found != n_markers {
                return Err(GenvalError::parse(
                    line_no,
                    format!("expected {} dosages, got {}", n_markers, found),
                ));
            }
            ind_ids.push(id.to_string());
        }

        let individuals = Individuals::from_ids(ind_ids)?;
        debug!(
            n_individuals = individuals.len(),
            n_markers, "dosage table loaded"
        );

        GenotypeMatrix::new(
            Arc::new(individuals),
            Arc::new(markers),
            dosages,
            self.ploidy,
        )
    }
}
