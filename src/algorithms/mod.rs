// src/algorithms/mod.rs

pub mod mabac;
pub mod spotis;
pub mod topsis;
pub mod vikor;

pub use mabac::Mabac;
pub use spotis::Spotis;
pub use topsis::Topsis;
pub use vikor::{Vikor, VikorConfig};

use crate::core::{DecisionMatrix, McdaError, Result, TypeVector, WeightVector};
use tracing::warn;

/// Inputs shared by every ranking method: the decision matrix and its
/// per-criterion weights and types.
#[derive(Debug, Clone)]
pub struct Criteria {
    pub matrix: DecisionMatrix,
    pub weights: WeightVector,
    pub types: TypeVector,
}

impl Criteria {
    pub fn new(matrix: DecisionMatrix, weights: WeightVector, types: TypeVector) -> Self {
        Criteria {
            matrix,
            weights,
            types,
        }
    }

    pub fn n_alternatives(&self) -> usize {
        self.matrix.nrows()
    }

    pub fn n_criteria(&self) -> usize {
        self.matrix.ncols()
    }

    /// Base validation every method runs before its own checks.
    pub fn validate(&self) -> Result<()> {
        if self.matrix.is_empty() {
            return Err(McdaError::InvalidInput(format!(
                "Decision matrix must have at least one alternative and one criterion, got shape {:?}.",
                self.matrix.shape()
            )));
        }

        if self.weights.len() != self.n_criteria() || self.types.len() != self.n_criteria() {
            return Err(McdaError::ShapeMismatch(format!(
                "Number of criteria ({}) should be same as number of weights ({}) and number of types ({}).",
                self.n_criteria(),
                self.weights.len(),
                self.types.len()
            )));
        }

        let total = self.weights.sum();
        if (total - 1.0).abs() > 1e-6 {
            warn!(total, "criteria weights do not sum to 1; scores will be rescaled accordingly");
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::criterion_types;
    use ndarray::{array, Array2};

    #[test]
    fn validate_accepts_matching_shapes() {
        let criteria = Criteria::new(
            array![[1.0, 2.0], [3.0, 4.0]],
            array![0.5, 0.5],
            criterion_types(&[1, -1]),
        );
        assert!(criteria.validate().is_ok());
        assert_eq!(criteria.n_alternatives(), 2);
        assert_eq!(criteria.n_criteria(), 2);
    }

    #[test]
    fn validate_rejects_weight_mismatch() {
        let criteria = Criteria::new(
            array![[1.0, 2.0], [3.0, 4.0]],
            array![1.0],
            criterion_types(&[1, -1]),
        );
        assert!(matches!(criteria.validate(), Err(McdaError::ShapeMismatch(_))));
    }

    #[test]
    fn validate_rejects_type_mismatch() {
        let criteria = Criteria::new(
            array![[1.0, 2.0], [3.0, 4.0]],
            array![0.5, 0.5],
            criterion_types(&[1, -1, 1]),
        );
        assert!(matches!(criteria.validate(), Err(McdaError::ShapeMismatch(_))));
    }

    #[test]
    fn validate_rejects_empty_matrix() {
        let criteria = Criteria::new(Array2::zeros((0, 2)), array![0.5, 0.5], criterion_types(&[1, 1]));
        assert!(matches!(criteria.validate(), Err(McdaError::InvalidInput(_))));
    }
}
