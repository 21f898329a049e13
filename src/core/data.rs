// src/core/data.rs
use ndarray::{Array1, Array2};
use serde::Serialize;
use std::fmt;

/// Decision matrix: alternatives in rows, criteria in columns.
pub type DecisionMatrix = Array2<f64>;

/// Criteria weights, one per column. Conventionally sums to 1.
pub type WeightVector = Array1<f64>;

/// Per-criterion `[lower, upper]` bounds, shape `(m, 2)`. Only SPOTIS uses it.
pub type BoundsMatrix = Array2<f64>;

/// One preference score per alternative.
pub type PreferenceVector = Array1<f64>;

/// Whether a criterion should be maximized (profit) or minimized (cost).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum CriterionType {
    Profit,
    Cost,
}

impl CriterionType {
    /// Anything other than `+1` is a cost criterion.
    pub fn from_sign(sign: f64) -> Self {
        if sign == 1.0 {
            CriterionType::Profit
        } else {
            CriterionType::Cost
        }
    }

    pub fn sign(self) -> i8 {
        match self {
            CriterionType::Profit => 1,
            CriterionType::Cost => -1,
        }
    }

    pub fn is_cost(self) -> bool {
        self == CriterionType::Cost
    }
}

impl From<i8> for CriterionType {
    fn from(sign: i8) -> Self {
        CriterionType::from_sign(sign as f64)
    }
}

/// Criteria types, one per column.
pub type TypeVector = Array1<CriterionType>;

/// Builds a [`TypeVector`] from `+1` (profit) / `-1` (cost) signs.
pub fn criterion_types(signs: &[i8]) -> TypeVector {
    signs.iter().map(|&s| CriterionType::from(s)).collect()
}

/// Direction in which a method's raw preference scores should be read.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum PreferenceOrder {
    /// Lower score = more preferred.
    Ascending,
    /// Higher score = more preferred.
    Descending,
}

/// Preferences together with the 1-based ranking they induce.
#[derive(Debug, Clone, Serialize)]
pub struct Ranking {
    /// Name of the method that produced the scores.
    pub method: String,
    pub preferences: Vec<f64>,
    /// `ranks[i]` is the position of alternative `i`; 1 is best.
    pub ranks: Vec<usize>,
    pub order: PreferenceOrder,
}

impl Ranking {
    /// Index of the best-ranked alternative, if any.
    pub fn best(&self) -> Option<usize> {
        self.ranks.iter().position(|&r| r == 1)
    }

    /// Alternative indices from best to worst.
    pub fn ordered_indices(&self) -> Vec<usize> {
        let mut indices: Vec<usize> = (0..self.ranks.len()).collect();
        indices.sort_by_key(|&i| (self.ranks[i], i));
        indices
    }
}

impl fmt::Display for Ranking {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let direction = match self.order {
            PreferenceOrder::Ascending => "lower is better",
            PreferenceOrder::Descending => "higher is better",
        };
        writeln!(f, "{} ranking ({}):", self.method, direction)?;
        for (i, (pref, rank)) in self.preferences.iter().zip(self.ranks.iter()).enumerate() {
            writeln!(f, "  A{}: {:.4} (rank {})", i + 1, pref, rank)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn any_sign_other_than_plus_one_is_cost() {
        assert_eq!(CriterionType::from(1), CriterionType::Profit);
        assert_eq!(CriterionType::from(-1), CriterionType::Cost);
        assert_eq!(CriterionType::from(0), CriterionType::Cost);
        assert_eq!(CriterionType::from_sign(0.5), CriterionType::Cost);
    }

    #[test]
    fn ordered_indices_follow_ranks() {
        let ranking = Ranking {
            method: "TOPSIS".to_string(),
            preferences: vec![0.2, 0.9, 0.5],
            ranks: vec![3, 1, 2],
            order: PreferenceOrder::Descending,
        };
        assert_eq!(ranking.best(), Some(1));
        assert_eq!(ranking.ordered_indices(), vec![1, 2, 0]);
        assert!(ranking.to_string().contains("A2: 0.9000 (rank 1)"));
    }
}
