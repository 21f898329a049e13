// src/normalization.rs

//! Column normalization strategies shared by TOPSIS, VIKOR and MABAC.

use crate::core::{McdaError, Result};
use crate::traits::Normalize;
use ndarray::{Array1, ArrayView1};
use std::fmt;
use std::str::FromStr;

/// The built-in normalization strategies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Normalization {
    /// `(x - min) / (max - min)`, or `(max - x) / (max - min)` for cost criteria.
    #[default]
    MinMax,
    /// `x / max`, or `1 - x / max` for cost criteria.
    Max,
    /// `x / sum(x)`, or `(1 / x) / sum(1 / x)` for cost criteria.
    Sum,
    /// `x / ||x||`, or `1 - x / ||x||` for cost criteria.
    Vector,
}

impl Normalization {
    pub const ALL: [Normalization; 4] = [
        Normalization::MinMax,
        Normalization::Max,
        Normalization::Sum,
        Normalization::Vector,
    ];
}

impl Normalize for Normalization {
    fn normalize(&self, column: ArrayView1<f64>, is_cost: bool) -> Result<Array1<f64>> {
        match self {
            Normalization::MinMax => Ok(min_max(column, is_cost)),
            Normalization::Max => max(column, is_cost),
            Normalization::Sum => sum(column, is_cost),
            Normalization::Vector => vector(column, is_cost),
        }
    }

    fn name(&self) -> &str {
        match self {
            Normalization::MinMax => "minmax",
            Normalization::Max => "max",
            Normalization::Sum => "sum",
            Normalization::Vector => "vector",
        }
    }
}

impl fmt::Display for Normalization {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Normalization {
    type Err = McdaError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "minmax" | "min-max" | "min_max" => Ok(Normalization::MinMax),
            "max" => Ok(Normalization::Max),
            "sum" => Ok(Normalization::Sum),
            "vector" => Ok(Normalization::Vector),
            other => Err(McdaError::InvalidInput(format!(
                "Unknown normalization '{}'. Expected one of: minmax, max, sum, vector.",
                other
            ))),
        }
    }
}

/// Leaves the column untouched.
#[derive(Debug, Clone, Copy, Default)]
pub struct Identity;

impl Normalize for Identity {
    fn normalize(&self, column: ArrayView1<f64>, _is_cost: bool) -> Result<Array1<f64>> {
        Ok(column.to_owned())
    }

    fn name(&self) -> &str {
        "identity"
    }
}

/// Adapts a plain `fn(column, is_cost) -> column` into a [`Normalize`] strategy.
#[derive(Clone, Copy)]
pub struct FnNormalization<F> {
    func: F,
    name: &'static str,
}

impl<F> FnNormalization<F>
where
    F: Fn(ArrayView1<f64>, bool) -> Array1<f64>,
{
    pub fn new(name: &'static str, func: F) -> Self {
        FnNormalization { func, name }
    }
}

impl<F> fmt::Debug for FnNormalization<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FnNormalization").field("name", &self.name).finish()
    }
}

impl<F> Normalize for FnNormalization<F>
where
    F: Fn(ArrayView1<f64>, bool) -> Array1<f64>,
{
    fn normalize(&self, column: ArrayView1<f64>, is_cost: bool) -> Result<Array1<f64>> {
        let normalized = (self.func)(column, is_cost);
        if normalized.len() != column.len() {
            return Err(McdaError::ShapeMismatch(format!(
                "Normalization '{}' returned {} values for a column of {}.",
                self.name,
                normalized.len(),
                column.len()
            )));
        }
        Ok(normalized)
    }

    fn name(&self) -> &str {
        self.name
    }
}

fn min_max(column: ArrayView1<f64>, is_cost: bool) -> Array1<f64> {
    let n = column.len();
    let min = column.fold(f64::INFINITY, |acc, &x| acc.min(x));
    let max = column.fold(f64::NEG_INFINITY, |acc, &x| acc.max(x));

    // Constant column: fill with the column length rather than dividing by zero.
    // Kept for compatibility with published results even though it looks accidental.
    if min == max {
        return Array1::from_elem(n, n as f64);
    }

    let range = max - min;
    if is_cost {
        column.mapv(|x| (max - x) / range)
    } else {
        column.mapv(|x| (x - min) / range)
    }
}

fn max(column: ArrayView1<f64>, is_cost: bool) -> Result<Array1<f64>> {
    let max = column.fold(f64::NEG_INFINITY, |acc, &x| acc.max(x));
    if max == 0.0 || !max.is_finite() {
        return Err(McdaError::UndefinedArithmetic(format!(
            "max normalization needs a finite nonzero column maximum, got {}",
            max
        )));
    }

    if is_cost {
        Ok(column.mapv(|x| 1.0 - x / max))
    } else {
        Ok(column.mapv(|x| x / max))
    }
}

fn sum(column: ArrayView1<f64>, is_cost: bool) -> Result<Array1<f64>> {
    if is_cost {
        if column.iter().any(|&x| x == 0.0) {
            return Err(McdaError::UndefinedArithmetic(
                "sum normalization of a cost criterion needs nonzero entries".to_string(),
            ));
        }
        let reciprocal = column.mapv(|x| 1.0 / x);
        let total = reciprocal.sum();
        if total == 0.0 {
            return Err(McdaError::UndefinedArithmetic(
                "sum normalization: reciprocals of the cost column sum to zero".to_string(),
            ));
        }
        return Ok(reciprocal / total);
    }

    let total = column.sum();
    if total == 0.0 {
        return Err(McdaError::UndefinedArithmetic(
            "sum normalization: column sums to zero".to_string(),
        ));
    }
    Ok(column.mapv(|x| x / total))
}

fn vector(column: ArrayView1<f64>, is_cost: bool) -> Result<Array1<f64>> {
    let norm = column.dot(&column).sqrt();
    if norm == 0.0 {
        return Err(McdaError::UndefinedArithmetic(
            "vector normalization: column has zero Euclidean norm".to_string(),
        ));
    }

    if is_cost {
        Ok(column.mapv(|x| 1.0 - x / norm))
    } else {
        Ok(column.mapv(|x| x / norm))
    }
}
