//! # Marker Effects
//!
//! Additive effects, optional dominance effects, and the intercept of one
//! trait, kept together so they are always applied as a unit.

use serde::{Deserialize, Serialize};

use crate::data::storage::GenotypeView;
use crate::error::{GenvalError, Result};
use crate::model::genetic_value::{calc_gv_a, calc_gv_ad};

/// Marker effects of one trait, aligned by index to a marker set
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MarkerEffects {
    pub additive: Vec<f64>,
    pub dominance: Option<Vec<f64>>,
    pub intercept: f64,
}

impl MarkerEffects {
    /// Additive-only effects
    pub fn additive(additive: Vec<f64>, intercept: f64) -> Self {
        Self {
            additive,
            dominance: None,
            intercept,
        }
    }

    /// Additive and dominance effects of equal length
    pub fn with_dominance(additive: Vec<f64>, dominance: Vec<f64>, intercept: f64) -> Result<Self> {
        if dominance.len() != additive.len() {
            return Err(GenvalError::dimension_mismatch(
                "dominance effects",
                additive.len(),
                dominance.len(),
            ));
        }
        Ok(Self {
            additive,
            dominance: Some(dominance),
            intercept,
        })
    }

    /// Number of markers the effects cover
    pub fn n_markers(&self) -> usize {
        self.additive.len()
    }

    pub fn has_dominance(&self) -> bool {
        self.dominance.is_some()
    }

    /// Drop dominance effects
    pub fn without_dominance(self) -> Self {
        Self {
            dominance: None,
            ..self
        }
    }

    /// Genetic values for every individual of `geno`
    pub fn genetic_values<'a>(
        &self,
        geno: impl Into<GenotypeView<'a>>,
        n_threads: usize,
    ) -> Result<Vec<f64>> {
        match &self.dominance {
            Some(d) => calc_gv_ad(geno, &self.additive, d, self.intercept, n_threads),
            None => calc_gv_a(geno, &self.additive, self.intercept, n_threads),
        }
    }
}
