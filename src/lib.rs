// src/lib.rs

//! `mcda_rs` ranks decision alternatives with multi-criteria decision analysis
//! methods (TOPSIS, VIKOR, MABAC, SPOTIS) over pluggable column normalizations.
//!
//! ```
//! use mcda_rs::{criterion_types, McdaMethod, Normalization, Topsis};
//! use ndarray::array;
//!
//! let matrix = array![[1.0, 3000.0], [2.0, 3750.0], [5.0, 4500.0]];
//! let weights = array![0.5, 0.5];
//! let types = criterion_types(&[-1, 1]);
//!
//! let topsis = Topsis::new(matrix, weights, types, Normalization::MinMax)?;
//! let preferences = topsis.resolve()?;
//! assert!((preferences[1] - 0.617).abs() < 1e-3);
//! # Ok::<(), mcda_rs::McdaError>(())
//! ```

// Declare the main modules of the crate
pub mod algorithms;
pub mod core;
pub mod dataset;
pub mod normalization;
pub mod traits;
pub mod utils;

// Re-export key components for easier use by library consumers
pub use crate::algorithms::{Criteria, Mabac, Spotis, Topsis, Vikor, VikorConfig};
pub use crate::core::{
    criterion_types, BoundsMatrix, CriterionType, DecisionMatrix, McdaError, PreferenceOrder,
    PreferenceVector, Ranking, Result, TypeVector, WeightVector,
};
pub use crate::dataset::AlternativeTable;
pub use crate::normalization::{FnNormalization, Identity, Normalization};
pub use crate::traits::{McdaMethod, Normalize};
pub use crate::utils::{
    bounds_from_matrix, equal_element_indices, normalize_matrix, rank_preferences,
    same_elements_at_same_index,
};
