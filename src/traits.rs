// src/traits.rs

use crate::core::{PreferenceOrder, PreferenceVector, Ranking, Result};
use crate::utils::rank_preferences;
use ndarray::{Array1, ArrayView1};

/// A column normalization strategy.
///
/// Implementations must be pure: the output depends only on `column` and
/// `is_cost`, and has the same length as `column`.
pub trait Normalize {
    fn normalize(&self, column: ArrayView1<f64>, is_cost: bool) -> Result<Array1<f64>>;

    /// Short identifier used in logs and CLI output.
    fn name(&self) -> &str;
}

impl<T: Normalize + ?Sized> Normalize for &T {
    fn normalize(&self, column: ArrayView1<f64>, is_cost: bool) -> Result<Array1<f64>> {
        (**self).normalize(column, is_cost)
    }

    fn name(&self) -> &str {
        (**self).name()
    }
}

/// Capability shared by every ranking method.
pub trait McdaMethod {
    /// Checks the stored inputs. Constructors call this before returning.
    fn validate(&self) -> Result<()>;

    /// Computes one preference score per alternative.
    ///
    /// Deterministic and side-effect free; may be called any number of times.
    fn resolve(&self) -> Result<PreferenceVector>;

    fn name(&self) -> &'static str;

    /// How the raw scores from [`McdaMethod::resolve`] should be read.
    fn preference_order(&self) -> PreferenceOrder;

    /// Resolves and converts the scores into 1-based ranks.
    fn rank(&self) -> Result<Ranking> {
        let preferences = self.resolve()?;
        let order = self.preference_order();
        let ranks = rank_preferences(preferences.view(), order);
        Ok(Ranking {
            method: self.name().to_string(),
            preferences: preferences.to_vec(),
            ranks: ranks.to_vec(),
            order,
        })
    }
}
