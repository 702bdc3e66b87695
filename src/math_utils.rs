// src/math_utils.rs
use crate::error::{DiffusionError, DiffusionResult};
use statrs::distribution::Normal;

/// Gaussian law with the given mean and variance.
///
/// statrs rejects a zero standard deviation, so a point mass is reported as
/// `DegenerateDistribution` rather than a `Normal`.
pub fn gaussian(mean: f64, variance: f64) -> DiffusionResult<Normal> {
    if variance.is_nan() || variance <= 0.0 {
        return Err(DiffusionError::DegenerateDistribution { mean, variance });
    }
    Normal::new(mean, variance.sqrt())
        .map_err(|_| DiffusionError::DegenerateDistribution { mean, variance })
}
