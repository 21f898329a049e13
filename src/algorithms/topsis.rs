// src/algorithms/topsis.rs

//! Technique for Order of Preference by Similarity to Ideal Solution.
//!
//! Alternatives are scored by their relative closeness to the positive ideal
//! solution (column maxima of the weighted matrix) versus the negative ideal
//! solution (column minima). Higher is better.

use super::Criteria;
use crate::core::{
    DecisionMatrix, McdaError, PreferenceOrder, PreferenceVector, Result, TypeVector, WeightVector,
};
use crate::normalization::Normalization;
use crate::traits::{McdaMethod, Normalize};
use crate::utils::normalize_matrix;
use ndarray::{Axis, Zip};
use tracing::{debug, trace};

#[derive(Debug, Clone)]
pub struct Topsis<N: Normalize = Normalization> {
    criteria: Criteria,
    normalization: N,
}

impl<N: Normalize> Topsis<N> {
    pub fn new(
        matrix: DecisionMatrix,
        weights: WeightVector,
        types: TypeVector,
        normalization: N,
    ) -> Result<Self> {
        let topsis = Topsis {
            criteria: Criteria::new(matrix, weights, types),
            normalization,
        };
        topsis.validate()?;
        debug!(
            alternatives = topsis.criteria.n_alternatives(),
            criteria = topsis.criteria.n_criteria(),
            normalization = topsis.normalization.name(),
            "constructed TOPSIS"
        );
        Ok(topsis)
    }

    pub fn criteria(&self) -> &Criteria {
        &self.criteria
    }
}

impl<N: Normalize> McdaMethod for Topsis<N> {
    fn validate(&self) -> Result<()> {
        self.criteria.validate()
    }

    fn resolve(&self) -> Result<PreferenceVector> {
        let normalized = normalize_matrix(
            self.criteria.matrix.view(),
            &self.normalization,
            Some(&self.criteria.types),
        )?;

        let weighted = normalized * &self.criteria.weights;

        let pis = weighted.fold_axis(Axis(0), f64::NEG_INFINITY, |&acc, &x| acc.max(x));
        let nis = weighted.fold_axis(Axis(0), f64::INFINITY, |&acc, &x| acc.min(x));
        trace!(?pis, ?nis, "TOPSIS ideal solutions");

        let dp = (&weighted - &pis)
            .mapv(|x| x * x)
            .sum_axis(Axis(1))
            .mapv(f64::sqrt);
        let dm = (&weighted - &nis)
            .mapv(|x| x * x)
            .sum_axis(Axis(1))
            .mapv(f64::sqrt);

        let collapsed: Vec<usize> = Zip::from(&dp)
            .and(&dm)
            .map_collect(|&p, &m| p + m == 0.0)
            .iter()
            .enumerate()
            .filter_map(|(i, &zero)| zero.then_some(i))
            .collect();
        if !collapsed.is_empty() {
            return Err(McdaError::UndefinedArithmetic(format!(
                "TOPSIS: alternatives {:?} coincide with both ideal solutions, closeness is undefined",
                collapsed
            )));
        }

        Ok(Zip::from(&dp).and(&dm).map_collect(|&p, &m| m / (m + p)))
    }

    fn name(&self) -> &'static str {
        "TOPSIS"
    }

    fn preference_order(&self) -> PreferenceOrder {
        PreferenceOrder::Descending
    }
}
