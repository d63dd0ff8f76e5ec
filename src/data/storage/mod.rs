//! # Genotype Storage
//!
//! ## Role
//! Owned dosage storage and the borrowed views the kernels read from.
//!
//! ```rust,ignore
//! let matrix = GenotypeMatrix::from_rows(&[[0u8, 2], [1, 1]], 2)?;
//! let full = matrix.view();
//! let cols = [1usize];
//! let subset = GenotypeView::subset(&matrix, &cols)?;
//! ```

pub mod matrix;
pub mod view;

pub use matrix::{GenotypeMatrix, DEFAULT_PLOIDY};
pub use view::{DosageRow, GenotypeView};
