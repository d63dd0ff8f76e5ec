//! # Genetic Value Kernels
//!
//! Per-individual genetic values from dosages and marker effects:
//!
//! ```text
//! additive:            gv_i = intercept + sum_j x_ij * a_j
//! additive+dominance:  gv_i = intercept + sum_j (x_ij * a_j + delta(x_ij) * d_j)
//!
//! delta(x) = x * (P - x) / (P/2)^2        P = ploidy
//! ```
//!
//! For diploids `delta` is the heterozygote indicator: 0, 1, 0 for dosages
//! 0, 1, 2. Each individual is accumulated on one worker, starting from the
//! intercept and walking markers in order, so the result does not depend on
//! the thread count.

use tracing::{debug, info_span};

use crate::data::storage::GenotypeView;
use crate::error::{GenvalError, Result};
use crate::utils::threading::{check_thread_count, par_fill};

/// Dominance coefficient for every dosage `0..=ploidy`
#[derive(Clone, Debug, PartialEq)]
pub struct DominanceCoding {
    coef: Vec<f64>,
}

impl DominanceCoding {
    pub fn new(ploidy: u8) -> Self {
        let p = f64::from(ploidy);
        let half_sq = (p / 2.0) * (p / 2.0);
        let coef = (0..=ploidy)
            .map(|x| {
                let x = f64::from(x);
                x * (p - x) / half_sq
            })
            .collect();
        Self { coef }
    }

    /// Coefficient for a dosage (dosages are validated against ploidy upstream)
    #[inline]
    pub fn coef(&self, dosage: u8) -> f64 {
        self.coef[dosage as usize]
    }
}

/// Additive genetic values, one per individual in row order.
///
/// Fails with `DimensionMismatch` if `a` does not have one effect per marker
/// and with `InvalidArgument` if `n_threads` is zero.
pub fn calc_gv_a<'a>(
    geno: impl Into<GenotypeView<'a>>,
    a: &[f64],
    intercept: f64,
    n_threads: usize,
) -> Result<Vec<f64>> {
    let geno = geno.into();
    check_effects("additive effects", a, &geno)?;
    check_thread_count(n_threads)?;

    let n_individuals = geno.n_individuals();
    let _span = info_span!(
        "calc_gv_a",
        n_individuals,
        n_markers = geno.n_markers(),
        n_threads
    )
    .entered();

    let mut out = vec![0.0; n_individuals];
    par_fill(&mut out, n_threads, |i| {
        geno.row(i)
            .fold(intercept, |acc, j, x| acc + f64::from(x) * a[j])
    })?;

    debug!(n_individuals, "additive genetic values computed");
    Ok(out)
}

/// Additive plus dominance genetic values, one per individual in row order.
///
/// Same contract as [`calc_gv_a`]; `d` must also have one effect per marker.
pub fn calc_gv_ad<'a>(
    geno: impl Into<GenotypeView<'a>>,
    a: &[f64],
    d: &[f64],
    intercept: f64,
    n_threads: usize,
) -> Result<Vec<f64>> {
    let geno = geno.into();
    check_effects("additive effects", a, &geno)?;
    check_effects("dominance effects", d, &geno)?;
    check_thread_count(n_threads)?;

    let n_individuals = geno.n_individuals();
    let _span = info_span!(
        "calc_gv_ad",
        n_individuals,
        n_markers = geno.n_markers(),
        n_threads
    )
    .entered();

    let coding = DominanceCoding::new(geno.ploidy());
    let mut out = vec![0.0; n_individuals];
    par_fill(&mut out, n_threads, |i| {
        geno.row(i).fold(intercept, |acc, j, x| {
            acc + (f64::from(x) * a[j] + coding.coef(x) * d[j])
        })
    })?;

    debug!(n_individuals, "additive+dominance genetic values computed");
    Ok(out)
}

fn check_effects(what: &str, effects: &[f64], geno: &GenotypeView<'_>) -> Result<()> {
    if effects.len() != geno.n_markers() {
        return Err(GenvalError::dimension_mismatch(
            what,
            geno.n_markers(),
            effects.len(),
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::storage::GenotypeMatrix;

    /// 3 individuals x 2 markers; marker rows [0,1,2] and [2,1,0]
    fn example_matrix() -> GenotypeMatrix {
        GenotypeMatrix::from_rows(&[[0u8, 2], [1, 1], [2, 0]], 2).unwrap()
    }

    #[test]
    fn test_additive_worked_example() {
        let geno = example_matrix();
        let gv = calc_gv_a(&geno, &[1.0, 2.0], 0.5, 1).unwrap();
        assert_eq!(gv, vec![4.5, 3.5, 2.5]);
    }

    #[test]
    fn test_result_length_matches_individuals() {
        let geno = example_matrix();
        let gv = calc_gv_a(&geno, &[0.3, -0.7], 0.0, 2).unwrap();
        assert_eq!(gv.len(), geno.n_individuals());
    }

    #[test]
    fn test_zero_effects_give_intercept() {
        let geno = example_matrix();
        let gv = calc_gv_a(&geno, &[0.0, 0.0], 7.25, 3).unwrap();
        assert!(gv.iter().all(|&v| v == 7.25));

        let gv = calc_gv_ad(&geno, &[0.0, 0.0], &[0.0, 0.0], -1.5, 3).unwrap();
        assert!(gv.iter().all(|&v| v == -1.5));
    }

    #[test]
    fn test_zero_dominance_matches_additive() {
        let geno = GenotypeMatrix::from_rows(&[[0u8, 1, 2, 1], [2, 2, 1, 0], [1, 0, 0, 2]], 2)
            .unwrap();
        let a = [0.13, -2.5, 1.0 / 3.0, 0.7];
        let additive = calc_gv_a(&geno, &a, 0.25, 2).unwrap();
        let with_dom = calc_gv_ad(&geno, &a, &[0.0; 4], 0.25, 2).unwrap();
        assert_eq!(additive, with_dom);
    }

    #[test]
    fn test_dominance_only_at_heterozygotes() {
        let geno = example_matrix();
        // a = 0 isolates the dominance term; only the middle individual is het
        let gv = calc_gv_ad(&geno, &[0.0, 0.0], &[1.5, 0.5], 0.0, 1).unwrap();
        assert_eq!(gv, vec![0.0, 2.0, 0.0]);
    }

    #[test]
    fn test_additive_plus_dominance() {
        let geno = example_matrix();
        let gv = calc_gv_ad(&geno, &[1.0, 2.0], &[0.5, -1.0], 0.5, 2).unwrap();
        // individual 2: 0.5 + (1*1 + 0.5) + (1*2 - 1.0)
        assert_eq!(gv, vec![4.5, 3.0, 2.5]);
    }

    #[test]
    fn test_dominance_coding() {
        let diploid = DominanceCoding::new(2);
        assert_eq!(
            (diploid.coef(0), diploid.coef(1), diploid.coef(2)),
            (0.0, 1.0, 0.0)
        );

        let tetraploid = DominanceCoding::new(4);
        assert_eq!(tetraploid.coef(0), 0.0);
        assert_eq!(tetraploid.coef(1), 0.75);
        assert_eq!(tetraploid.coef(2), 1.0);
        assert_eq!(tetraploid.coef(3), 0.75);
        assert_eq!(tetraploid.coef(4), 0.0);
    }

    #[test]
    fn test_thread_count_does_not_change_result() {
        let rows: Vec<Vec<u8>> = (0..257)
            .map(|i| (0..31).map(|j| ((i * 7 + j * 3) % 3) as u8).collect())
            .collect();
        let geno = GenotypeMatrix::from_rows(&rows, 2).unwrap();
        let a: Vec<f64> = (0..31).map(|j| (j as f64 * 0.37).sin()).collect();
        let d: Vec<f64> = (0..31).map(|j| (j as f64 * 0.11).cos()).collect();

        let a1 = calc_gv_a(&geno, &a, 1.0, 1).unwrap();
        let ad1 = calc_gv_ad(&geno, &a, &d, 1.0, 1).unwrap();
        for n_threads in [2, 3, 8] {
            assert_eq!(calc_gv_a(&geno, &a, 1.0, n_threads).unwrap(), a1);
            assert_eq!(calc_gv_ad(&geno, &a, &d, 1.0, n_threads).unwrap(), ad1);
        }
    }

    #[test]
    fn test_dimension_mismatch() {
        let geno = example_matrix();
        let err = calc_gv_a(&geno, &[1.0], 0.0, 1).unwrap_err();
        assert!(matches!(
            err,
            GenvalError::DimensionMismatch { expected: 2, found: 1, .. }
        ));

        let err = calc_gv_ad(&geno, &[1.0, 2.0], &[1.0, 2.0, 3.0], 0.0, 1).unwrap_err();
        assert!(matches!(
            err,
            GenvalError::DimensionMismatch { expected: 2, found: 3, .. }
        ));
    }

    #[test]
    fn test_zero_threads_rejected() {
        let geno = example_matrix();
        assert!(matches!(
            calc_gv_a(&geno, &[1.0, 2.0], 0.0, 0),
            Err(GenvalError::InvalidArgument { .. })
        ));
        assert!(matches!(
            calc_gv_ad(&geno, &[1.0, 2.0], &[0.0, 0.0], 0.0, 0),
            Err(GenvalError::InvalidArgument { .. })
        ));
    }

    #[test]
    fn test_slice_view_input() {
        let dosages = [0u8, 2, 1, 1, 2, 0];
        let view = GenotypeView::from_slice(&dosages, 3, 2, 2).unwrap();
        assert_eq!(
            calc_gv_a(view, &[1.0, 2.0], 0.5, 2).unwrap(),
            vec![4.5, 3.5, 2.5]
        );
    }

    #[test]
    fn test_subset_matches_materialized() {
        let full = GenotypeMatrix::from_rows(&[[0u8, 1, 2], [2, 2, 1], [1, 0, 0]], 2).unwrap();
        let cols = [2usize, 0];
        let subset = GenotypeView::subset(&full, &cols).unwrap();
        let materialized = GenotypeMatrix::from_rows(&[[2u8, 0], [1, 2], [0, 1]], 2).unwrap();

        let a = [0.4, -1.1];
        let d = [0.2, 0.9];
        assert_eq!(
            calc_gv_ad(subset, &a, &d, 3.0, 2).unwrap(),
            calc_gv_ad(&materialized, &a, &d, 3.0, 1).unwrap()
        );
    }

    #[test]
    fn test_no_markers_and_no_individuals() {
        let rows: Vec<Vec<u8>> = vec![Vec::new(), Vec::new()];
        let geno = GenotypeMatrix::from_rows(&rows, 2).unwrap();
        assert_eq!(calc_gv_a(&geno, &[], 1.0, 2).unwrap(), vec![1.0, 1.0]);

        let empty: Vec<Vec<u8>> = Vec::new();
        let geno = GenotypeMatrix::from_rows(&empty, 2).unwrap();
        assert!(calc_gv_a(&geno, &[], 1.0, 2).unwrap().is_empty());
    }
}
