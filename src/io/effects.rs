//! # Effects Table Reader
//!
//! Reads per-marker effects keyed by marker id:
//!
//! ```text
//! marker  additive  dominance
//! snp1    0.25      -0.10
//! snp3    -1.00     0.40
//! ```
//!
//! The dominance column is optional. Markers may be a subset of the genotyped
//! markers and in any order; they are aligned by id later.

use std::io::BufRead;
use std::path::Path;

use tracing::{debug, info_span};

use crate::data::effects::MarkerEffects;
use crate::data::marker::Markers;
use crate::error::{GenvalError, Result};
use crate::io::{data_lines, open_text};

/// Effects together with the marker ids they belong to
#[derive(Clone, Debug, PartialEq)]
pub struct EffectsTable {
    pub markers: Markers,
    pub effects: MarkerEffects,
}

/// Reader for effects tables
#[derive(Clone, Copy, Debug, Default)]
pub struct EffectsReader {
    intercept: f64,
}

impl EffectsReader {
    /// `intercept` is attached to the effects that are read
    pub fn new(intercept: f64) -> Self {
        Self { intercept }
    }

    pub fn read_path(&self, path: &Path) -> Result<EffectsTable> {
        info_span!("read_effects", path = ?path).in_scope(|| {
            let reader = open_text(path)?;
            self.read(reader)
        })
    }

    pub fn read<R: BufRead>(&self, reader: R) -> Result<EffectsTable> {
        let mut lines = data_lines(reader);
        let (header_line, header) = lines
            .next()
            .transpose()?
            .ok_or_else(|| GenvalError::parse(0, "missing header line"))?;

        let n_columns = header.split_whitespace().count();
        if !(2..=3).contains(&n_columns) {
            return Err(GenvalError::parse(
                header_line,
                format!(
                    "expected 'marker additive [dominance]' header, got {} columns",
                    n_columns
                ),
            ));
        }
        let has_dominance = n_columns == 3;

        let mut ids = Vec::new();
        let mut additive = Vec::new();
        let mut dominance = Vec::new();
        for line in lines {
            let (line_no, text) = line?;
            let fields: Vec<&str> = text.split_whitespace().collect();
            if fields.len() != n_columns {
                return Err(GenvalError::parse(
                    line_no,
                    format!("expected {} columns, got {}", n_columns, fields.len()),
                ));
            }

            ids.push(fields[0].to_string());
            additive.push(parse_effect(fields[1], line_no)?);
            if has_dominance {
                dominance.push(parse_effect(fields[2], line_no)?);
            }
        }

        let markers = Markers::from_ids(ids)?;
        debug!(n_markers = markers.len(), has_dominance, "effects table loaded");

        let effects = if has_dominance {
            MarkerEffects::with_dominance(additive, dominance, self.intercept)?
        } else {
            MarkerEffects::additive(additive, self.intercept)
        };
        Ok(EffectsTable { markers, effects })
    }
}

/// Parse one effect; `nan` and `inf` are rejected
fn parse_effect(field: &str, line_no: usize) -> Result<f64> {
    match field.parse::<f64>() {
        Ok(value) if value.is_finite() => Ok(value),
        _ => Err(GenvalError::parse(
            line_no,
            format!("invalid effect '{}'", field),
        )),
    }
}
