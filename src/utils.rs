// src/utils.rs

//! Matrix helpers shared by the ranking methods.

use crate::core::{BoundsMatrix, DecisionMatrix, McdaError, PreferenceOrder, Result, TypeVector};
use crate::traits::Normalize;
use ndarray::{Array1, ArrayView1, ArrayView2, Axis};
use std::cmp::Ordering;

/// Normalizes every column of `matrix` with `strategy`, returning a new matrix.
///
/// Column `j` is treated as a cost criterion when `types[j]` is [`crate::CriterionType::Cost`].
/// When `types` is `None` every column is treated as profit.
pub fn normalize_matrix<N: Normalize + ?Sized>(
    matrix: ArrayView2<f64>,
    strategy: &N,
    types: Option<&TypeVector>,
) -> Result<DecisionMatrix> {
    if let Some(types) = types {
        if matrix.ncols() != types.len() {
            return Err(McdaError::ShapeMismatch(format!(
                "Matrix has {} criteria and criteria types has {}. These values must be equal.",
                matrix.ncols(),
                types.len()
            )));
        }
    }

    let mut normalized = matrix.to_owned();
    for (j, mut column) in normalized.axis_iter_mut(Axis(1)).enumerate() {
        let is_cost = types.map_or(false, |t| t[j].is_cost());
        let values = strategy.normalize(matrix.column(j), is_cost)?;
        if values.len() != column.len() {
            return Err(McdaError::ShapeMismatch(format!(
                "Normalization '{}' returned {} values for criterion {} with {} alternatives.",
                strategy.name(),
                values.len(),
                j,
                column.len()
            )));
        }
        column.assign(&values);
    }
    Ok(normalized)
}

/// Returns `true` as soon as any position holds the same value in `a` and `b`.
///
/// This detects a degenerate criterion; it is not an equality test of the arrays.
pub fn same_elements_at_same_index(a: ArrayView1<f64>, b: ArrayView1<f64>) -> Result<bool> {
    check_same_len(a, b)?;
    Ok(a.iter().zip(b.iter()).any(|(x, y)| x == y))
}

/// Indices at which `a` and `b` hold the same value.
pub fn equal_element_indices(a: ArrayView1<f64>, b: ArrayView1<f64>) -> Result<Vec<usize>> {
    check_same_len(a, b)?;
    Ok(a.iter()
        .zip(b.iter())
        .enumerate()
        .filter(|(_, (x, y))| x == y)
        .map(|(i, _)| i)
        .collect())
}

fn check_same_len(a: ArrayView1<f64>, b: ArrayView1<f64>) -> Result<()> {
    if a.len() != b.len() {
        return Err(McdaError::ShapeMismatch(format!(
            "Arrays must have the same shape to be compared, got {} and {}.",
            a.len(),
            b.len()
        )));
    }
    Ok(())
}

/// Column-wise `[min, max]` of `matrix`, shaped `(criteria, 2)` for SPOTIS.
pub fn bounds_from_matrix(matrix: ArrayView2<f64>) -> BoundsMatrix {
    let mut bounds = BoundsMatrix::zeros((matrix.ncols(), 2));
    for (j, column) in matrix.axis_iter(Axis(1)).enumerate() {
        bounds[[j, 0]] = column.fold(f64::INFINITY, |acc, &x| acc.min(x));
        bounds[[j, 1]] = column.fold(f64::NEG_INFINITY, |acc, &x| acc.max(x));
    }
    bounds
}

/// 1-based ranks for `preferences` read in `order`.
///
/// Tied scores share the best rank of their group (1, 1, 3, ...). NaN scores rank last.
pub fn rank_preferences(preferences: ArrayView1<f64>, order: PreferenceOrder) -> Array1<usize> {
    let key = |x: f64| match order {
        PreferenceOrder::Ascending => x,
        PreferenceOrder::Descending => -x,
    };

    let mut indices: Vec<usize> = (0..preferences.len()).collect();
    indices.sort_by(|&i, &j| compare_nan_last(key(preferences[i]), key(preferences[j])));

    let mut ranks = Array1::zeros(preferences.len());
    for (position, &idx) in indices.iter().enumerate() {
        let rank = match position.checked_sub(1).map(|p| indices[p]) {
            Some(prev)
                if compare_nan_last(key(preferences[prev]), key(preferences[idx]))
                    == Ordering::Equal =>
            {
                ranks[prev]
            }
            _ => position + 1,
        };
        ranks[idx] = rank;
    }
    ranks
}

fn compare_nan_last(a: f64, b: f64) -> Ordering {
    match (a.is_nan(), b.is_nan()) {
        (true, true) => Ordering::Equal,
        (true, false) => Ordering::Greater,
        (false, true) => Ordering::Less,
        (false, false) => a.partial_cmp(&b).unwrap_or(Ordering::Equal),
    }
}

#[cfg(test)]
pub(crate) fn assert_close(actual: ArrayView1<f64>, expected: &[f64], epsilon: f64) {
    assert_eq!(actual.len(), expected.len(), "length mismatch: {:?} vs {:?}", actual, expected);
    for (a, e) in actual.iter().zip(expected.iter()) {
        approx::assert_abs_diff_eq!(*a, *e, epsilon = epsilon);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::criterion_types;
    use crate::normalization::{Identity, Normalization};
    use ndarray::array;
    use proptest::prelude::*;

    #[test]
    fn normalize_matrix_uses_types_per_column() -> Result<()> {
        let matrix = array![[1.0, 3000.0], [2.0, 3750.0], [5.0, 4500.0]];
        let types = criterion_types(&[-1, 1]);
        let normalized = normalize_matrix(matrix.view(), &Normalization::MinMax, Some(&types))?;
        assert_close(normalized.column(0), &[1.0, 0.75, 0.0], 1e-12);
        assert_close(normalized.column(1), &[0.0, 0.5, 1.0], 1e-12);
        // Input untouched.
        assert_eq!(matrix[[0, 1]], 3000.0);
        Ok(())
    }

    #[test]
    fn normalize_matrix_without_types_is_all_profit() -> Result<()> {
        let matrix = array![[1.0, 10.0], [3.0, 20.0]];
        let normalized = normalize_matrix(matrix.view(), &Normalization::MinMax, None)?;
        assert_eq!(normalized, array![[0.0, 0.0], [1.0, 1.0]]);
        Ok(())
    }

    #[test]
    fn normalize_matrix_rejects_type_count_mismatch() {
        let matrix = array![[1.0, 2.0, 3.0]];
        let types = criterion_types(&[1, -1]);
        let err = normalize_matrix(matrix.view(), &Identity, Some(&types)).unwrap_err();
        assert!(matches!(err, McdaError::ShapeMismatch(_)));
        assert!(err.to_string().contains("3 criteria"));
    }

    #[test]
    fn same_elements_detects_any_shared_position() -> Result<()> {
        let a = array![1.0, 2.0, 3.0];
        assert!(same_elements_at_same_index(a.view(), array![0.0, 2.0, 0.0].view())?);
        assert!(!same_elements_at_same_index(a.view(), array![3.0, 1.0, 2.0].view())?);
        assert_eq!(equal_element_indices(a.view(), array![1.0, 0.0, 3.0].view())?, vec![0, 2]);
        Ok(())
    }

    #[test]
    fn same_elements_rejects_length_mismatch() {
        let a = array![1.0, 2.0];
        let b = array![1.0, 2.0, 3.0];
        assert!(matches!(
            same_elements_at_same_index(a.view(), b.view()),
            Err(McdaError::ShapeMismatch(_))
        ));
    }

    #[test]
    fn bounds_are_column_min_and_max() {
        let matrix = array![[1.0, -2.0], [4.0, 7.0], [3.0, 0.5]];
        let bounds = bounds_from_matrix(matrix.view());
        assert_eq!(bounds, array![[1.0, 4.0], [-2.0, 7.0]]);
    }

    #[test]
    fn ranks_follow_order_and_share_ties() {
        let prefs = array![0.5, 0.617, 0.5];
        assert_eq!(rank_preferences(prefs.view(), PreferenceOrder::Descending), array![2, 1, 2]);
        assert_eq!(rank_preferences(prefs.view(), PreferenceOrder::Ascending), array![1, 3, 1]);
    }

    #[test]
    fn nan_scores_rank_last() {
        let prefs = array![f64::NAN, 0.1, 0.9];
        assert_eq!(rank_preferences(prefs.view(), PreferenceOrder::Descending), array![3, 2, 1]);
        assert_eq!(rank_preferences(prefs.view(), PreferenceOrder::Ascending), array![3, 1, 2]);
    }

    proptest! {
        #[test]
        fn ranks_are_within_bounds_and_best_is_one(values in prop::collection::vec(-100.0f64..100.0, 1..30)) {
            let prefs = Array1::from(values);
            for order in [PreferenceOrder::Ascending, PreferenceOrder::Descending] {
                let ranks = rank_preferences(prefs.view(), order);
                prop_assert!(ranks.iter().all(|&r| r >= 1 && r <= prefs.len()));
                prop_assert!(ranks.iter().any(|&r| r == 1));
            }
        }

        #[test]
        fn same_elements_matches_index_scan(
            pairs in prop::collection::vec((0u8..4, 0u8..4), 0..20)
        ) {
            let a: Array1<f64> = pairs.iter().map(|&(x, _)| x as f64).collect();
            let b: Array1<f64> = pairs.iter().map(|&(_, y)| y as f64).collect();
            let expected = pairs.iter().any(|(x, y)| x == y);
            prop_assert_eq!(same_elements_at_same_index(a.view(), b.view()).unwrap(), expected);
        }
    }
}
