// src/core/errors.rs
use thiserror::Error;

/// Errors raised while validating inputs or resolving a ranking.
///
/// Every failure is a deterministic input problem: nothing is retried and no
/// partial result is ever returned alongside an error.
#[derive(Debug, Error)]
pub enum McdaError {
    #[error("Invalid Input: {0}")]
    InvalidInput(String),

    /// Weights/types length differs from the criteria count, or two arrays
    /// expected to align have different lengths.
    #[error("Shape Mismatch: {0}")]
    ShapeMismatch(String),

    /// A criterion whose reference values coincide, so the method's ratio is undefined.
    #[error("Degenerate Criterion {}: {reason}", join_indices(.criteria))]
    DegenerateCriterion { criteria: Vec<usize>, reason: String },

    /// Division by zero (or a non-finite intermediate) the formulas cannot recover from.
    #[error("Undefined Arithmetic: {0}")]
    UndefinedArithmetic(String),

    #[error("Dataset Error: {0}")]
    DatasetError(String),

    #[error("Ndarray Error: {0}")]
    NdarrayError(#[from] ndarray::ShapeError),
}

impl McdaError {
    /// True for the errors that describe bad caller input rather than a failed computation.
    pub fn is_invalid_input(&self) -> bool {
        matches!(
            self,
            McdaError::InvalidInput(_)
                | McdaError::ShapeMismatch(_)
                | McdaError::DegenerateCriterion { .. }
        )
    }
}

fn join_indices(indices: &[usize]) -> String {
    indices
        .iter()
        .map(|i| i.to_string())
        .collect::<Vec<_>>()
        .join(", ")
}

impl From<csv::Error> for McdaError {
    fn from(err: csv::Error) -> Self {
        McdaError::DatasetError(format!("csv: {}", err))
    }
}

// Convenience type alias for Result
pub type Result<T> = std::result::Result<T, McdaError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn degenerate_criterion_message_names_indices() {
        let err = McdaError::DegenerateCriterion {
            criteria: vec![0, 3],
            reason: "bounds are equal".to_string(),
        };
        assert_eq!(err.to_string(), "Degenerate Criterion 0, 3: bounds are equal");
        assert!(err.is_invalid_input());
    }

    #[test]
    fn arithmetic_errors_are_not_input_errors() {
        let err = McdaError::UndefinedArithmetic("column max is zero".to_string());
        assert!(!err.is_invalid_input());
    }
}
