//! # Genotype View
//!
//! A read-only, non-owning view over dosage data. The genetic value kernels
//! take a view so they can run on an owned `GenotypeMatrix`, a borrowed
//! row-major buffer, or a subset of a matrix's markers without copying.

use crate::data::storage::matrix::{checked_len, validate_dosages, GenotypeMatrix};
use crate::error::{GenvalError, Result};

/// Read-only view of dosage data (individuals x markers)
#[derive(Clone, Copy, Debug)]
pub enum GenotypeView<'a> {
    /// View over a whole `GenotypeMatrix`
    Matrix(&'a GenotypeMatrix),
    /// View over a caller-owned row-major buffer
    Slice {
        dosages: &'a [u8],
        n_individuals: usize,
        n_markers: usize,
        ploidy: u8,
    },
    /// View over selected marker columns of a matrix, in `markers` order
    Subset {
        matrix: &'a GenotypeMatrix,
        markers: &'a [usize],
    },
}

/// Dosages of one individual as seen through a view
#[derive(Clone, Copy, Debug)]
pub enum DosageRow<'a> {
    /// Row is contiguous in memory
    Contiguous(&'a [u8]),
    /// Row must be gathered through a column index
    Gathered { row: &'a [u8], markers: &'a [usize] },
}

impl<'a> GenotypeView<'a> {
    /// View a borrowed row-major buffer, validating its shape and dosages
    pub fn from_slice(
        dosages: &'a [u8],
        n_individuals: usize,
        n_markers: usize,
        ploidy: u8,
    ) -> Result<Self> {
        let expected = checked_len(n_individuals, n_markers)?;
        if dosages.len() != expected {
            return Err(GenvalError::dimension_mismatch(
                "dosage buffer",
                expected,
                dosages.len(),
            ));
        }
        validate_dosages(dosages, ploidy)?;
        Ok(GenotypeView::Slice {
            dosages,
            n_individuals,
            n_markers,
            ploidy,
        })
    }

    /// View selected marker columns of `matrix`
    pub fn subset(matrix: &'a GenotypeMatrix, markers: &'a [usize]) -> Result<Self> {
        let n_markers = matrix.n_markers();
        if let Some(&bad) = markers.iter().find(|&&m| m >= n_markers) {
            return Err(GenvalError::invalid_argument(format!(
                "marker index {} out of range for {} markers",
                bad, n_markers
            )));
        }
        Ok(GenotypeView::Subset { matrix, markers })
    }

    /// Number of individuals
    #[inline]
    pub fn n_individuals(&self) -> usize {
        match self {
            GenotypeView::Matrix(m) => m.n_individuals(),
            GenotypeView::Slice { n_individuals, .. } => *n_individuals,
            GenotypeView::Subset { matrix, .. } => matrix.n_individuals(),
        }
    }

    /// Number of markers visible through the view
    #[inline]
    pub fn n_markers(&self) -> usize {
        match self {
            GenotypeView::Matrix(m) => m.n_markers(),
            GenotypeView::Slice { n_markers, .. } => *n_markers,
            GenotypeView::Subset { markers, .. } => markers.len(),
        }
    }

    #[inline]
    pub fn ploidy(&self) -> u8 {
        match self {
            GenotypeView::Matrix(m) => m.ploidy(),
            GenotypeView::Slice { ploidy, .. } => *ploidy,
            GenotypeView::Subset { matrix, .. } => matrix.ploidy(),
        }
    }

    /// Dosages of one individual
    #[inline]
    pub fn row(&self, ind: usize) -> DosageRow<'a> {
        match *self {
            GenotypeView::Matrix(m) => DosageRow::Contiguous(m.row_at(ind)),
            GenotypeView::Slice {
                dosages, n_markers, ..
            } => {
                let start = ind * n_markers;
                DosageRow::Contiguous(&dosages[start..start + n_markers])
            }
            GenotypeView::Subset { matrix, markers } => DosageRow::Gathered {
                row: matrix.row_at(ind),
                markers,
            },
        }
    }

    /// Dosage at (individual, marker) in view coordinates
    #[inline]
    pub fn dosage(&self, ind: usize, marker: usize) -> u8 {
        match self.row(ind) {
            DosageRow::Contiguous(row) => row[marker],
            DosageRow::Gathered { row, markers } => row[markers[marker]],
        }
    }
}

impl DosageRow<'_> {
    /// Fold over `(view_marker, dosage)` pairs in marker order
    #[inline]
    pub fn fold<F>(self, init: f64, mut f: F) -> f64
    where
        F: FnMut(f64, usize, u8) -> f64,
    {
        match self {
            DosageRow::Contiguous(row) => row
                .iter()
                .enumerate()
                .fold(init, |acc, (k, &x)| f(acc, k, x)),
            DosageRow::Gathered { row, markers } => markers
                .iter()
                .enumerate()
                .fold(init, |acc, (k, &j)| f(acc, k, row[j])),
        }
    }
}

impl<'a> From<&'a GenotypeMatrix> for GenotypeView<'a> {
    fn from(matrix: &'a GenotypeMatrix) -> Self {
        GenotypeView::Matrix(matrix)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slice_view() {
        let dosages = [0u8, 1, 2, 2, 1, 0];
        let view = GenotypeView::from_slice(&dosages, 2, 3, 2).unwrap();
        assert_eq!(view.n_individuals(), 2);
        assert_eq!(view.n_markers(), 3);
        assert_eq!(view.dosage(1, 0), 2);
        assert_eq!(view.dosage(0, 2), 2);
    }

    #[test]
    fn test_slice_view_validation() {
        let dosages = [0u8, 1, 2];
        assert!(matches!(
            GenotypeView::from_slice(&dosages, 2, 2, 2),
            Err(GenvalError::DimensionMismatch { .. })
        ));
        assert!(matches!(
            GenotypeView::from_slice(&dosages, 1, 3, 1),
            Err(GenvalError::InvalidArgument { .. })
        ));
    }

    #[test]
    fn test_slice_view_shape_overflow() {
        let dosages: [u8; 0] = [];
        assert!(matches!(
            GenotypeView::from_slice(&dosages, 1 << (usize::BITS - 1), 2, 2),
            Err(GenvalError::InvalidArgument { .. })
        ));
        assert!(matches!(
            GenotypeView::from_slice(&dosages, usize::MAX, usize::MAX, 2),
            Err(GenvalError::InvalidArgument { .. })
        ));
    }

    #[test]
    fn test_subset_view() {
        let matrix = GenotypeMatrix::from_rows(&[[0u8, 1, 2], [2, 0, 1]], 2).unwrap();
        let cols = [2usize, 0];
        let view = GenotypeView::subset(&matrix, &cols).unwrap();

        assert_eq!(view.n_markers(), 2);
        assert_eq!(view.n_individuals(), 2);
        assert_eq!(view.dosage(0, 0), 2);
        assert_eq!(view.dosage(0, 1), 0);
        assert_eq!(view.dosage(1, 0), 1);
    }

    #[test]
    fn test_row_fold_matches_dosage() {
        let matrix = GenotypeMatrix::from_rows(&[[0u8, 1, 2], [2, 0, 1]], 2).unwrap();
        let cols = [2usize, 1];
        let view = GenotypeView::subset(&matrix, &cols).unwrap();

        // columns 2 and 1 of [2, 0, 1] are 1 and 0
        let weighted = view
            .row(1)
            .fold(0.0, |acc, k, x| acc + f64::from(x) * [1.0, 10.0][k]);
        assert_eq!(weighted, 1.0);

        let sum = matrix.view().row(0).fold(0.0, |acc, _, x| acc + f64::from(x));
        assert_eq!(sum, 3.0);
    }

    #[test]
    fn test_subset_out_of_range() {
        let matrix = GenotypeMatrix::from_rows(&[[0u8, 1]], 2).unwrap();
        let cols = [0usize, 2];
        assert!(matches!(
            GenotypeView::subset(&matrix, &cols),
            Err(GenvalError::InvalidArgument { .. })
        ));
    }
}
