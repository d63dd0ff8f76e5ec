//! # Genval Library
//!
//! Genetic values of individuals from allele dosages and marker effects,
//! computed in parallel over individuals.
//!
//! ## Modules
//! - `config`: CLI argument parsing and validation
//! - `data`: Genotype storage, ids, and marker effects
//! - `error`: Error types and result aliases
//! - `io`: Dosage/effects table reading and output writing
//! - `model`: Additive and additive+dominance kernels, summaries
//! - `pipelines`: High-level workflow orchestration
//! - `utils`: Shared utilities (thread pools)
//!
//! ## Example
//! ```
//! use genval::{calc_gv_a, GenotypeMatrix};
//!
//! // rows are individuals, columns are markers
//! let geno = GenotypeMatrix::from_rows(&[[0u8, 2], [1, 1], [2, 0]], 2).unwrap();
//! let gv = calc_gv_a(&geno, &[1.0, 2.0], 0.5, 2).unwrap();
//! assert_eq!(gv, vec![4.5, 3.5, 2.5]);
//! ```

pub mod config;
pub mod data;
pub mod error;
pub mod io;
pub mod model;
pub mod pipelines;
pub mod utils;

// Re-export commonly used types
pub use config::Config;
pub use data::effects::MarkerEffects;
pub use data::individual::{IndIdx, Individuals};
pub use data::marker::{MarkerIdx, Markers};
pub use data::storage::{GenotypeMatrix, GenotypeView};
pub use error::{GenvalError, Result};
pub use io::{DosageReader, EffectsReader, EffectsTable};
pub use model::{calc_gv_a, calc_gv_ad, GvSummary};

pub use pipelines::GvPipeline;
