// src/algorithms/vikor.rs

//! VIseKriterijumska Optimizacija I Kompromisno Resenje (VIKOR).
//!
//! Blends group utility `S` and individual regret `R` into a compromise score
//! `Q`. Lower `Q` is better.

use super::Criteria;
use crate::core::{
    DecisionMatrix, McdaError, PreferenceOrder, PreferenceVector, Result, TypeVector, WeightVector,
};
use crate::normalization::Normalization;
use crate::traits::{McdaMethod, Normalize};
use crate::utils::{equal_element_indices, normalize_matrix, same_elements_at_same_index};
use ndarray::{Array1, Axis, Zip};
use tracing::{debug, trace};

/// Configuration for the VIKOR method.
#[derive(Debug, Clone, Copy)]
pub struct VikorConfig {
    /// Weight of the group-utility strategy; `1 - v` goes to individual regret.
    pub v: f64,
}

impl Default for VikorConfig {
    fn default() -> Self {
        VikorConfig { v: 0.5 }
    }
}

#[derive(Debug, Clone)]
pub struct Vikor<N: Normalize = Normalization> {
    criteria: Criteria,
    normalization: N,
    config: VikorConfig,
}

impl<N: Normalize> Vikor<N> {
    pub fn new(
        matrix: DecisionMatrix,
        weights: WeightVector,
        types: TypeVector,
        normalization: N,
        config: Option<VikorConfig>,
    ) -> Result<Self> {
        let vikor = Vikor {
            criteria: Criteria::new(matrix, weights, types),
            normalization,
            config: config.unwrap_or_default(),
        };
        vikor.validate()?;
        debug!(
            alternatives = vikor.criteria.n_alternatives(),
            criteria = vikor.criteria.n_criteria(),
            normalization = vikor.normalization.name(),
            v = vikor.config.v,
            "constructed VIKOR"
        );
        Ok(vikor)
    }

    pub fn config(&self) -> &VikorConfig {
        &self.config
    }

    pub fn criteria(&self) -> &Criteria {
        &self.criteria
    }
}

impl<N: Normalize> McdaMethod for Vikor<N> {
    fn validate(&self) -> Result<()> {
        self.criteria.validate()?;
        let v = self.config.v;
        if !(0.0..=1.0).contains(&v) {
            return Err(McdaError::InvalidInput(format!(
                "VIKOR strategy weight v must lie in [0, 1], got {}.",
                v
            )));
        }
        Ok(())
    }

    fn resolve(&self) -> Result<PreferenceVector> {
        let normalized = normalize_matrix(
            self.criteria.matrix.view(),
            &self.normalization,
            Some(&self.criteria.types),
        )?;

        let f_star = normalized.fold_axis(Axis(0), f64::NEG_INFINITY, |&acc, &x| acc.max(x));
        let f_minus = normalized.fold_axis(Axis(0), f64::INFINITY, |&acc, &x| acc.min(x));

        if same_elements_at_same_index(f_star.view(), f_minus.view())? {
            return Err(McdaError::DegenerateCriterion {
                criteria: equal_element_indices(f_star.view(), f_minus.view())?,
                reason: "contains equal values for all alternatives, VIKOR cannot be applied. \
                         Consider removing the criterion or using another method."
                    .to_string(),
            });
        }

        let weighted = (&f_star - &normalized) / (&f_star - &f_minus) * &self.criteria.weights;

        let s = weighted.sum_axis(Axis(1));
        let r = weighted.fold_axis(Axis(1), f64::NEG_INFINITY, |&acc, &x| acc.max(x));
        trace!(?s, ?r, "VIKOR group utility and individual regret");

        let v = self.config.v;
        let s_term = scaled_distance("S", &s, v)?;
        let r_term = scaled_distance("R", &r, 1.0 - v)?;

        Ok(Zip::from(&s_term).and(&r_term).map_collect(|&a, &b| a + b))
    }

    fn name(&self) -> &'static str {
        "VIKOR"
    }

    fn preference_order(&self) -> PreferenceOrder {
        PreferenceOrder::Ascending
    }
}

/// `weight * (x - min) / (max - min)` over `values`.
///
/// A zero weight drops the term, so a tie across all alternatives only fails
/// when the term actually contributes.
fn scaled_distance(label: &str, values: &Array1<f64>, weight: f64) -> Result<Array1<f64>> {
    if weight == 0.0 {
        return Ok(Array1::zeros(values.len()));
    }

    let best = values.fold(f64::INFINITY, |acc, &x| acc.min(x));
    let worst = values.fold(f64::NEG_INFINITY, |acc, &x| acc.max(x));
    if worst == best {
        return Err(McdaError::UndefinedArithmetic(format!(
            "VIKOR: every alternative has the same {} value ({}), compromise ratio is undefined",
            label, best
        )));
    }

    Ok(values.mapv(|x| weight * (x - best) / (worst - best)))
}
