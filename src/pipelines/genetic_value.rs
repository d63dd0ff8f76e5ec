//! # Genetic Value Pipeline
//!
//! Orchestrates one run: read dosages and effects, pull the effect markers out
//! of the genotype table, compute genetic values, and write them.

use tracing::{info_span, instrument};

use crate::config::Config;
use crate::data::effects::MarkerEffects;
use crate::data::marker::Markers;
use crate::data::storage::{GenotypeMatrix, GenotypeView};
use crate::error::Result;
use crate::io::{write_genetic_values, DosageReader, EffectsReader};
use crate::model::GvSummary;

/// Genetic value pipeline
pub struct GvPipeline {
    config: Config,
}

impl GvPipeline {
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    /// Run the pipeline and return a summary of the written values
    #[instrument(name = "gv_pipeline", skip(self))]
    pub fn run(&mut self) -> Result<GvSummary> {
        let geno = DosageReader::new(self.config.ploidy).read_path(&self.config.geno)?;
        eprintln!(
            "Genotypes: {} individuals x {} markers",
            geno.n_individuals(),
            geno.n_markers()
        );

        let table = EffectsReader::new(self.config.intercept).read_path(&self.config.effects)?;
        let effects = if self.config.additive_only {
            table.effects.without_dominance()
        } else {
            table.effects
        };
        eprintln!(
            "Effects: {} markers ({})",
            effects.n_markers(),
            if effects.has_dominance() {
                "additive + dominance"
            } else {
                "additive"
            }
        );

        let values = compute_aligned(&geno, &table.markers, &effects, self.config.nthreads())?;

        write_genetic_values(&self.config.out, geno.individuals(), &values)?;
        Ok(GvSummary::from_values(&values))
    }
}

/// Genetic values for effects keyed by `effect_markers`.
///
/// Every effect marker must be genotyped. When the effect markers are exactly
/// the genotyped markers in order, the whole matrix is used; otherwise the
/// matching columns are selected through a subset view.
pub fn compute_aligned(
    geno: &GenotypeMatrix,
    effect_markers: &Markers,
    effects: &MarkerEffects,
    n_threads: usize,
) -> Result<Vec<f64>> {
    let columns = info_span!("align_markers").in_scope(|| effect_markers.positions_in(geno.markers()))?;

    let is_identity = columns.len() == geno.n_markers()
        && columns.iter().enumerate().all(|(k, &j)| k == j);
    if is_identity {
        return effects.genetic_values(geno, n_threads);
    }

    tracing::debug!(
        n_selected = columns.len(),
        n_genotyped = geno.n_markers(),
        "using marker subset"
    );
    let view = GenotypeView::subset(geno, &columns)?;
    effects.genetic_values(view, n_threads)
}
