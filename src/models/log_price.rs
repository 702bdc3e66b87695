// src/models/log_price.rs
//! Log-Price Process under Constant Rate and Volatility
//!
//! # Mathematical Framework
//!
//! The asset price follows geometric Brownian motion under the risk-neutral measure:
//! ```text
//! dS_t = r S_t dt + σ S_t dW_t
//! ```
//!
//! By Itô's lemma its logarithm `Y_t = ln S_t` has constant coefficients:
//! ```text
//! dY_t = (r - σ²/2) dt + σ dW_t
//! ```
//!
//! # Exact Transition
//!
//! Since drift and diffusion do not depend on `(t, y)`, the Euler moments carry no
//! discretization error:
//! ```text
//! Y_{t+Δt} | Y_t = y  ~  N(y + (r - σ²/2)Δt, σ²Δt)
//! ```

use super::diffusion::{DiffusionProcess, Time};
use crate::error::{validation::*, DiffusionResult};
use crate::math_utils;
use statrs::distribution::Normal;

/// Construction parameters for [`LogPriceDiffusion`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LogPriceParams {
    pub rate: f64,          // Continuously compounded rate, any sign
    pub volatility: f64,    // Must be non-negative
    pub initial_price: f64, // Must be positive
}

impl Default for LogPriceParams {
    fn default() -> Self {
        LogPriceParams {
            rate: 0.05,
            volatility: 0.2,
            initial_price: 100.0,
        }
    }
}

impl LogPriceParams {
    /// Validate the parameters
    pub fn validate(&self) -> DiffusionResult<()> {
        validate_positive("initial_price", self.initial_price)?;
        validate_finite("initial_price", self.initial_price)?;
        validate_non_negative("volatility", self.volatility)?;
        validate_finite("volatility", self.volatility)?;
        validate_finite("rate", self.rate)?;
        Ok(())
    }
}

/// Logarithm of an asset price with constant rate and volatility.
#[derive(Clone, Debug, PartialEq)]
pub struct LogPriceDiffusion {
    x0: f64,
    initial_price: f64,
    rate: f64,
    volatility: f64,
}

impl LogPriceDiffusion {
    /// Create the process starting at `ln(initial_price)`.
    ///
    /// # Errors
    ///
    /// Returns `InvalidParameter` if `initial_price <= 0`, `volatility < 0`,
    /// or any input is not finite.
    pub fn new(rate: f64, volatility: f64, initial_price: f64) -> DiffusionResult<Self> {
        Self::from_params(LogPriceParams {
            rate,
            volatility,
            initial_price,
        })
    }

    pub fn from_params(params: LogPriceParams) -> DiffusionResult<Self> {
        params.validate()?;

        let process = LogPriceDiffusion {
            x0: params.initial_price.ln(),
            initial_price: params.initial_price,
            rate: params.rate,
            volatility: params.volatility,
        };
        tracing::debug!(
            rate = process.rate,
            volatility = process.volatility,
            x0 = process.x0,
            "constructed log-price diffusion"
        );
        Ok(process)
    }

    pub fn rate(&self) -> f64 {
        self.rate
    }

    pub fn volatility(&self) -> f64 {
        self.volatility
    }

    /// Price level the process starts from, as supplied at construction.
    pub fn initial_price(&self) -> f64 {
        self.initial_price
    }

    pub fn params(&self) -> LogPriceParams {
        LogPriceParams {
            rate: self.rate,
            volatility: self.volatility,
            initial_price: self.initial_price,
        }
    }

    /// Exact law of `Y(t0 + dt)` given `Y(t0) = y0`.
    ///
    /// # Errors
    ///
    /// Returns `DegenerateDistribution` when `dt <= 0` or the volatility is zero,
    /// since the transition is then a point mass.
    pub fn transition_distribution(
        &self,
        t0: Time,
        y0: f64,
        dt: Time,
    ) -> DiffusionResult<Normal> {
        math_utils::gaussian(self.expectation(t0, y0, dt), self.variance(t0, y0, dt))
    }

    /// Expected price `E[S(t0+dt) | ln S(t0) = y0] = exp(y0 + r·dt)`.
    pub fn expected_price(&self, _t0: Time, y0: f64, dt: Time) -> f64 {
        (y0 + self.rate * dt).exp()
    }
}

impl DiffusionProcess for LogPriceDiffusion {
    fn x0(&self) -> f64 {
        self.x0
    }

    fn drift(&self, _t: Time, _y: f64) -> f64 {
        self.rate - 0.5 * self.volatility * self.volatility
    }

    fn diffusion(&self, _t: Time, _y: f64) -> f64 {
        self.volatility
    }

    fn boxed_clone(&self) -> Box<dyn DiffusionProcess> {
        Box::new(self.clone())
    }
}
