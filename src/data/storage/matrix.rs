//! # Genotype Matrix
//!
//! The main data structure: a dense matrix of allele dosages
//! (individuals x markers, row-major).
//!
//! One row per individual keeps each individual's dosages contiguous, which is
//! the access pattern of the genetic value kernels.

use std::sync::Arc;

use crate::data::individual::{IndIdx, Individuals};
use crate::data::marker::{MarkerIdx, Markers};
use crate::data::storage::view::GenotypeView;
use crate::error::{GenvalError, Result};

/// Default ploidy (diploid, dosages 0/1/2)
pub const DEFAULT_PLOIDY: u8 = 2;

/// Owned dosage matrix with individual and marker ids.
#[derive(Clone, Debug, PartialEq)]
pub struct GenotypeMatrix {
    /// Row ids
    individuals: Arc<Individuals>,

    /// Column ids
    markers: Arc<Markers>,

    /// Dosages, `n_individuals * n_markers`, row-major
    dosages: Vec<u8>,

    /// Upper bound of a valid dosage
    ploidy: u8,
}

impl GenotypeMatrix {
    /// Create a matrix, validating shape and dosage range
    pub fn new(
        individuals: Arc<Individuals>,
        markers: Arc<Markers>,
        dosages: Vec<u8>,
        ploidy: u8,
    ) -> Result<Self> {
        let expected = checked_len(individuals.len(), markers.len())?;
        if dosages.len() != expected {
            return Err(GenvalError::dimension_mismatch(
                "dosage buffer",
                expected,
                dosages.len(),
            ));
        }
        validate_dosages(&dosages, ploidy)?;

        Ok(Self {
            individuals,
            markers,
            dosages,
            ploidy,
        })
    }

    /// Create from per-individual rows with numbered ids
    pub fn from_rows<R: AsRef<[u8]>>(rows: &[R], ploidy: u8) -> Result<Self> {
        let n_markers = rows.first().map(|r| r.as_ref().len()).unwrap_or(0);
        let mut dosages = Vec::with_capacity(rows.len() * n_markers);
        for row in rows {
            let row = row.as_ref();
            if row.len() != n_markers {
                return Err(GenvalError::dimension_mismatch(
                    "genotype row",
                    n_markers,
                    row.len(),
                ));
            }
            dosages.extend_from_slice(row);
        }

        Self::new(
            Arc::new(Individuals::numbered(rows.len())),
            Arc::new(Markers::numbered(n_markers)),
            dosages,
            ploidy,
        )
    }

    /// Number of individuals (rows)
    pub fn n_individuals(&self) -> usize {
        self.individuals.len()
    }

    /// Number of markers (columns)
    pub fn n_markers(&self) -> usize {
        self.markers.len()
    }

    pub fn ploidy(&self) -> u8 {
        self.ploidy
    }

    pub fn individuals(&self) -> &Individuals {
        &self.individuals
    }

    pub fn markers(&self) -> &Markers {
        &self.markers
    }

    /// Raw row-major dosages
    pub fn dosages(&self) -> &[u8] {
        &self.dosages
    }

    /// All dosages of one individual, in marker order
    #[inline]
    pub fn row(&self, ind: IndIdx) -> &[u8] {
        self.row_at(ind.as_usize())
    }

    /// Row by plain index, for callers iterating `0..n_individuals`
    #[inline]
    pub(crate) fn row_at(&self, ind: usize) -> &[u8] {
        let n_markers = self.n_markers();
        let start = ind * n_markers;
        &self.dosages[start..start + n_markers]
    }

    /// Dosage at (individual, marker)
    #[inline]
    pub fn dosage(&self, ind: IndIdx, marker: MarkerIdx) -> u8 {
        self.dosages[ind.as_usize() * self.n_markers() + marker.as_usize()]
    }

    /// Read-only view over the whole matrix
    pub fn view(&self) -> GenotypeView<'_> {
        GenotypeView::Matrix(self)
    }

    /// Approximate memory usage in bytes
    pub fn size_bytes(&self) -> usize {
        self.dosages.len() + std::mem::size_of::<Self>()
    }
}

/// `n_individuals * n_markers`, or `InvalidArgument` if it overflows `usize`
pub(crate) fn checked_len(n_individuals: usize, n_markers: usize) -> Result<usize> {
    n_individuals.checked_mul(n_markers).ok_or_else(|| {
        GenvalError::invalid_argument(format!(
            "shape {} x {} overflows the address space",
            n_individuals, n_markers
        ))
    })
}

/// Reject ploidy 0 and any dosage above `ploidy`
pub(crate) fn validate_dosages(dosages: &[u8], ploidy: u8) -> Result<()> {
    if ploidy == 0 {
        return Err(GenvalError::invalid_argument("ploidy must be at least 1"));
    }
    if let Some(pos) = dosages.iter().position(|&d| d > ploidy) {
        return Err(GenvalError::invalid_argument(format!(
            "dosage {} at offset {} exceeds ploidy {}",
            dosages[pos], pos, ploidy
        )));
    }
    Ok(())
}
