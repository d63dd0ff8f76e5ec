//! # Model Module
//!
//! Genetic value computation and summaries over the resulting vectors.

pub mod genetic_value;
pub mod summary;

pub use genetic_value::{calc_gv_a, calc_gv_ad, DominanceCoding};
pub use summary::GvSummary;
