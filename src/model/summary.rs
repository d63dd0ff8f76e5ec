//! # Genetic Value Summary
//!
//! Population mean and variance of a genetic value vector.

use serde::{Deserialize, Serialize};

/// Summary statistics over individuals
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct GvSummary {
    pub n: usize,
    pub mean: f64,
    /// Population variance (divides by `n`)
    pub variance: f64,
    pub min: f64,
    pub max: f64,
}

impl GvSummary {
    /// Summarize values. An empty slice yields `n = 0` and NaN statistics.
    pub fn from_values(values: &[f64]) -> Self {
        let n = values.len();
        if n == 0 {
            return Self {
                n,
                mean: f64::NAN,
                variance: f64::NAN,
                min: f64::NAN,
                max: f64::NAN,
            };
        }

        let mean = values.iter().sum::<f64>() / n as f64;
        let variance = values.iter().map(|v| (v - mean) * (v - mean)).sum::<f64>() / n as f64;
        let min = values.iter().copied().fold(f64::INFINITY, f64::min);
        let max = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);

        Self {
            n,
            mean,
            variance,
            min,
            max,
        }
    }
}
