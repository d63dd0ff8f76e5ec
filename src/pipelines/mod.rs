//! # Pipeline Module
//!
//! High-level orchestration of a genetic value run.
//! Coordinates I/O, marker alignment, and the kernels.

pub mod genetic_value;

pub use genetic_value::{compute_aligned, GvPipeline};
