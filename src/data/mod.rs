//! # Data Module
//!
//! In-memory representations of genotypes and marker effects.
//!
//! - **Zero-cost newtypes:** `IndIdx` and `MarkerIdx` keep row and column
//!   indices apart at compile time.
//! - **Borrowed views:** kernels read through `GenotypeView` and never own or
//!   mutate the dosages.

pub mod effects;
pub mod individual;
pub mod marker;
pub mod storage;

// Re-export commonly used types
pub use effects::MarkerEffects;
pub use individual::{IndIdx, Individuals};
pub use marker::{MarkerIdx, Markers};
pub use storage::{DosageRow, GenotypeMatrix, GenotypeView, DEFAULT_PLOIDY};
