// src/algorithms/spotis.rs

//! Stable Preference Ordering Towards Ideal Solution (SPOTIS).
//!
//! Distances are measured against an ideal point taken from caller-supplied
//! bounds rather than from the data, so adding or removing alternatives never
//! reorders the rest. Lower is better.

use super::Criteria;
use crate::core::{
    BoundsMatrix, CriterionType, DecisionMatrix, McdaError, PreferenceOrder, PreferenceVector,
    Result, TypeVector, WeightVector,
};
use crate::traits::McdaMethod;
use crate::utils::{equal_element_indices, same_elements_at_same_index};
use ndarray::{Array1, Axis, Zip};
use tracing::{debug, trace};

#[derive(Debug, Clone)]
pub struct Spotis {
    criteria: Criteria,
    /// Row `j` holds `[min, max]` for criterion `j`.
    bounds: BoundsMatrix,
}

impl Spotis {
    pub fn new(
        matrix: DecisionMatrix,
        weights: WeightVector,
        types: TypeVector,
        bounds: BoundsMatrix,
    ) -> Result<Self> {
        let spotis = Spotis {
            criteria: Criteria::new(matrix, weights, types),
            bounds,
        };
        spotis.validate()?;
        debug!(
            alternatives = spotis.criteria.n_alternatives(),
            criteria = spotis.criteria.n_criteria(),
            "constructed SPOTIS"
        );
        Ok(spotis)
    }

    pub fn bounds(&self) -> &BoundsMatrix {
        &self.bounds
    }

    pub fn criteria(&self) -> &Criteria {
        &self.criteria
    }

    /// Ideal solution point: the upper bound of profit criteria and the lower
    /// bound of cost criteria.
    pub fn ideal_solution_point(&self) -> Array1<f64> {
        Zip::from(self.bounds.rows())
            .and(&self.criteria.types)
            .map_collect(|bound, &kind| match kind {
                CriterionType::Profit => bound[1],
                CriterionType::Cost => bound[0],
            })
    }
}

impl McdaMethod for Spotis {
    fn validate(&self) -> Result<()> {
        self.criteria.validate()?;

        if self.bounds.dim() != (self.criteria.n_criteria(), 2) {
            return Err(McdaError::ShapeMismatch(format!(
                "Bounds must have shape [{}, 2] (one [min, max] row per criterion), got {:?}.",
                self.criteria.n_criteria(),
                self.bounds.shape()
            )));
        }

        let lower = self.bounds.column(0);
        let upper = self.bounds.column(1);
        if same_elements_at_same_index(lower, upper)? {
            return Err(McdaError::DegenerateCriterion {
                criteria: equal_element_indices(lower, upper)?,
                reason: "bounds are equal. Consider changing the min and max values, \
                         removing the criterion or using another method."
                    .to_string(),
            });
        }
        Ok(())
    }

    fn resolve(&self) -> Result<PreferenceVector> {
        let isp = self.ideal_solution_point();
        trace!(?isp, "SPOTIS ideal solution point");

        let span = &self.bounds.column(0) - &self.bounds.column(1);
        let distances = ((&self.criteria.matrix - &isp) / &span).mapv(f64::abs);

        Ok((distances * &self.criteria.weights).sum_axis(Axis(1)))
    }

    fn name(&self) -> &'static str {
        "SPOTIS"
    }

    fn preference_order(&self) -> PreferenceOrder {
        PreferenceOrder::Ascending
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::criterion_types;
    use crate::utils::assert_close;
    use ndarray::array;

    fn fixture() -> (DecisionMatrix, WeightVector, TypeVector, BoundsMatrix) {
        (
            array![
                [10.5, -3.1, 1.7],
                [-4.7, 0.0, 3.4],
                [8.1, 0.3, 1.3],
                [3.2, 7.3, -5.3]
            ],
            array![0.2, 0.3, 0.5],
            criterion_types(&[1, -1, 1]),
            array![[-5.0, 12.0], [-6.0, 10.0], [-8.0, 5.0]],
        )
    }

    #[test]
    fn resolves_published_example() -> Result<()> {
        let (matrix, weights, types, bounds) = fixture();
        let spotis = Spotis::new(matrix, weights, types, bounds)?;
        let prefs = spotis.resolve()?;
        assert_close(prefs.view(), &[0.1989, 0.3705, 0.3063, 0.7491], 5e-5);

        let ranking = spotis.rank()?;
        assert_eq!(ranking.best(), Some(0));
        assert_eq!(ranking.ranks, vec![1, 3, 2, 4]);
        Ok(())
    }

    #[test]
    fn ideal_point_follows_criterion_type() -> Result<()> {
        let (matrix, weights, types, bounds) = fixture();
        let spotis = Spotis::new(matrix, weights, types, bounds)?;
        assert_eq!(spotis.ideal_solution_point(), array![12.0, -6.0, 5.0]);
        Ok(())
    }

    #[test]
    fn rejects_equal_bounds_naming_criteria() {
        let (matrix, weights, types, _) = fixture();
        let bounds = array![[1.0, 1.0], [-6.0, 10.0], [2.0, 2.0]];
        let err = Spotis::new(matrix, weights, types, bounds).unwrap_err();
        match err {
            McdaError::DegenerateCriterion { ref criteria, .. } => assert_eq!(criteria, &vec![0, 2]),
            ref other => panic!("expected degenerate criterion error, got {:?}", other),
        }
        assert!(err.to_string().contains("0, 2"));
    }

    #[test]
    fn rejects_bounds_with_wrong_shape() {
        let (matrix, weights, types, _) = fixture();
        let bounds = array![[-5.0, 12.0], [-6.0, 10.0]];
        assert!(matches!(
            Spotis::new(matrix, weights, types, bounds),
            Err(McdaError::ShapeMismatch(_))
        ));
    }

    #[test]
    fn resolve_is_idempotent() -> Result<()> {
        let (matrix, weights, types, bounds) = fixture();
        let spotis = Spotis::new(matrix, weights, types, bounds)?;
        assert_eq!(spotis.resolve()?, spotis.resolve()?);
        Ok(())
    }
}
