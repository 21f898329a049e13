// src/algorithms/mabac.rs

//! Multi-Attributive Border Approximation area Comparison (MABAC).
//!
//! Scores each alternative by its summed signed distance from the border
//! approximation area, the geometric mean of every weighted criterion column.
//! Positive sums lie in the upper approximation area; larger is better.

use super::Criteria;
use crate::core::{
    DecisionMatrix, McdaError, PreferenceOrder, PreferenceVector, Result, TypeVector, WeightVector,
};
use crate::normalization::Normalization;
use crate::traits::{McdaMethod, Normalize};
use crate::utils::normalize_matrix;
use ndarray::{Array1, Array2, Axis};
use tracing::{debug, trace};

#[derive(Debug, Clone)]
pub struct Mabac<N: Normalize = Normalization> {
    criteria: Criteria,
    normalization: N,
}

impl<N: Normalize> Mabac<N> {
    pub fn new(
        matrix: DecisionMatrix,
        weights: WeightVector,
        types: TypeVector,
        normalization: N,
    ) -> Result<Self> {
        let mabac = Mabac {
            criteria: Criteria::new(matrix, weights, types),
            normalization,
        };
        mabac.validate()?;
        debug!(
            alternatives = mabac.criteria.n_alternatives(),
            criteria = mabac.criteria.n_criteria(),
            normalization = mabac.normalization.name(),
            "constructed MABAC"
        );
        Ok(mabac)
    }

    pub fn criteria(&self) -> &Criteria {
        &self.criteria
    }
}

impl<N: Normalize> McdaMethod for Mabac<N> {
    fn validate(&self) -> Result<()> {
        self.criteria.validate()
    }

    fn resolve(&self) -> Result<PreferenceVector> {
        let normalized = normalize_matrix(
            self.criteria.matrix.view(),
            &self.normalization,
            Some(&self.criteria.types),
        )?;
        let weighted = (normalized + 1.0) * &self.criteria.weights;

        let border = border_approximation_area(&weighted)?;
        trace!(?border, "MABAC border approximation area");

        Ok((&weighted - &border).sum_axis(Axis(1)))
    }

    fn name(&self) -> &'static str {
        "MABAC"
    }

    fn preference_order(&self) -> PreferenceOrder {
        PreferenceOrder::Descending
    }
}

/// Geometric mean of each weighted column, taken in log space so long columns
/// do not underflow. A zero entry pulls the mean to zero.
fn border_approximation_area(weighted: &Array2<f64>) -> Result<Array1<f64>> {
    let n = weighted.nrows() as f64;
    let mut border = Array1::zeros(weighted.ncols());
    for (j, column) in weighted.axis_iter(Axis(1)).enumerate() {
        if let Some(&bad) = column.iter().find(|&&x| !x.is_finite() || x < 0.0) {
            return Err(McdaError::UndefinedArithmetic(format!(
                "MABAC: criterion {} has weighted value {}; weighted values must be non-negative",
                j, bad
            )));
        }
        if column.iter().any(|&x| x == 0.0) {
            continue;
        }
        border[j] = (column.mapv(f64::ln).sum() / n).exp();
    }
    Ok(border)
}
