// src/error.rs
use std::fmt;

/// Error types for the diffusion-process library
#[derive(Debug, Clone, PartialEq)]
pub enum DiffusionError {
    /// Invalid parameter values supplied at construction
    InvalidParameter {
        parameter: String,
        value: f64,
        constraint: String,
    },

    /// Transition law has no spread (zero horizon or zero volatility)
    DegenerateDistribution { mean: f64, variance: f64 },
}

impl fmt::Display for DiffusionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DiffusionError::InvalidParameter {
                parameter,
                value,
                constraint,
            } => {
                write!(
                    f,
                    "Invalid parameter '{}' = {}: {}",
                    parameter, value, constraint
                )
            }
            DiffusionError::DegenerateDistribution { mean, variance } => {
                write!(
                    f,
                    "Degenerate transition distribution (mean = {}, variance = {}): point mass has no density",
                    mean, variance
                )
            }
        }
    }
}

impl std::error::Error for DiffusionError {}

/// Result type alias for diffusion-process operations
pub type DiffusionResult<T> = Result<T, DiffusionError>;

/// Validation utilities
pub mod validation {
    use super::{DiffusionError, DiffusionResult};

    fn reject(name: &str, value: f64, constraint: &str) -> DiffusionError {
        tracing::warn!(parameter = name, value, constraint, "rejected parameter");
        DiffusionError::InvalidParameter {
            parameter: name.to_string(),
            value,
            constraint: constraint.to_string(),
        }
    }

    /// Validate that a parameter is strictly positive. NaN is rejected.
    pub fn validate_positive(name: &str, value: f64) -> DiffusionResult<()> {
        if value > 0.0 {
            Ok(())
        } else {
            Err(reject(name, value, "must be positive (> 0)"))
        }
    }

    /// Validate that a parameter is non-negative. NaN is rejected.
    pub fn validate_non_negative(name: &str, value: f64) -> DiffusionResult<()> {
        if value >= 0.0 {
            Ok(())
        } else {
            Err(reject(name, value, "must be non-negative (≥ 0)"))
        }
    }

    /// Validate that a value is finite and not NaN
    pub fn validate_finite(name: &str, value: f64) -> DiffusionResult<()> {
        if value.is_finite() {
            Ok(())
        } else {
            Err(reject(name, value, "must be finite (not NaN or infinite)"))
        }
    }
}
