// src/models/diffusion.rs
//! General One-Dimensional Diffusion Contract
//!
//! # Mathematical Framework
//!
//! A diffusion process is governed by:
//! ```text
//! dx(t) = μ(t, x(t)) dt + σ(t, x(t)) dz(t)
//! ```
//!
//! Where:
//! - `μ(t,x)` is the drift coefficient
//! - `σ(t,x)` is the diffusion coefficient
//! - `z` is a standard Wiener process
//!
//! # Short-Step Moments
//!
//! Over a step `Δt` starting at `(t₀, x₀)` the default moments are the Euler ones:
//! ```text
//! E[x(t₀+Δt)]   ≈ x₀ + μ(t₀, x₀) Δt
//! Var[x(t₀+Δt)] ≈ σ(t₀, x₀)² Δt
//! ```
//!
//! A model with a closed-form transition law overrides them. For constant
//! coefficients the Euler moments are already exact.

use std::fmt;

/// Time measured in years.
pub type Time = f64;

/// One-dimensional diffusion `dx = μ(t,x) dt + σ(t,x) dz`.
///
/// Implementors hold no mutable state, so a process can be read from many
/// threads at once.
pub trait DiffusionProcess: fmt::Debug + Send + Sync {
    /// Initial state `x(0)`.
    fn x0(&self) -> f64;

    /// Instantaneous drift `μ(t, x)`.
    fn drift(&self, t: Time, x: f64) -> f64;

    /// Instantaneous diffusion `σ(t, x)`. May be signed.
    fn diffusion(&self, t: Time, x: f64) -> f64;

    /// Expected state after `dt`, given `x(t0) = x0`.
    ///
    /// Default: first-order Euler `x0 + μ(t0, x0)·dt`.
    fn expectation(&self, t0: Time, x0: f64, dt: Time) -> f64 {
        x0 + self.drift(t0, x0) * dt
    }

    /// Variance of the state after `dt`, given `x(t0) = x0`.
    ///
    /// Default: Euler `σ(t0, x0)²·dt`.
    fn variance(&self, t0: Time, x0: f64, dt: Time) -> f64 {
        let sigma = self.diffusion(t0, x0);
        sigma * sigma * dt
    }

    /// Standard deviation of the state after `dt`: `|σ(t0, x0)|·√dt`.
    ///
    /// Defined for `dt >= 0` only; a negative step gives NaN.
    fn std_deviation(&self, t0: Time, x0: f64, dt: Time) -> f64 {
        self.diffusion(t0, x0).abs() * dt.sqrt()
    }

    /// Advance `x0` by one step using a caller-supplied standard normal draw `dw`.
    ///
    /// ```text
    /// x(t0+dt) = E[x(t0+dt)] + std_dev · dw
    /// ```
    ///
    /// Like [`std_deviation`](Self::std_deviation), this requires `dt >= 0`;
    /// a negative step gives NaN.
    fn evolve(&self, t0: Time, x0: f64, dt: Time, dw: f64) -> f64 {
        self.expectation(t0, x0, dt) + self.std_deviation(t0, x0, dt) * dw
    }

    /// Independent copy of the concrete process behind the trait object.
    fn boxed_clone(&self) -> Box<dyn DiffusionProcess>;
}

impl Clone for Box<dyn DiffusionProcess> {
    fn clone(&self) -> Self {
        self.boxed_clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Mean-reverting process with state-dependent drift, so the Euler
    /// defaults are approximations rather than exact moments.
    #[derive(Debug, Clone)]
    struct MeanReverting {
        x0: f64,
        speed: f64,
        level: f64,
        sigma: f64,
    }

    impl DiffusionProcess for MeanReverting {
        fn x0(&self) -> f64 {
            self.x0
        }

        fn drift(&self, _t: Time, x: f64) -> f64 {
            self.speed * (self.level - x)
        }

        fn diffusion(&self, _t: Time, _x: f64) -> f64 {
            self.sigma
        }

        fn boxed_clone(&self) -> Box<dyn DiffusionProcess> {
            Box::new(self.clone())
        }
    }

    /// Overrides the moments with the exact Ornstein-Uhlenbeck transition.
    #[derive(Debug, Clone)]
    struct ExactMeanReverting(MeanReverting);

    impl DiffusionProcess for ExactMeanReverting {
        fn x0(&self) -> f64 {
            self.0.x0
        }

        fn drift(&self, t: Time, x: f64) -> f64 {
            self.0.drift(t, x)
        }

        fn diffusion(&self, t: Time, x: f64) -> f64 {
            self.0.diffusion(t, x)
        }

        fn expectation(&self, _t0: Time, x0: f64, dt: Time) -> f64 {
            self.0.level + (x0 - self.0.level) * (-self.0.speed * dt).exp()
        }

        fn variance(&self, _t0: Time, _x0: f64, dt: Time) -> f64 {
            let k = self.0.speed;
            self.0.sigma * self.0.sigma * (1.0 - (-2.0 * k * dt).exp()) / (2.0 * k)
        }

        fn boxed_clone(&self) -> Box<dyn DiffusionProcess> {
            Box::new(self.clone())
        }
    }

    fn ou() -> MeanReverting {
        MeanReverting {
            x0: 1.0,
            speed: 0.5,
            level: 0.1,
            sigma: -0.2,
        }
    }

    #[test]
    fn test_euler_defaults() {
        let p = ou();
        // drift at x = 1.0 is 0.5 * (0.1 - 1.0) = -0.45
        assert!((p.expectation(0.0, 1.0, 0.1) - (1.0 - 0.045)).abs() < 1e-15);
        assert!((p.variance(0.0, 1.0, 0.1) - 0.004).abs() < 1e-15);
    }

    #[test]
    fn test_zero_step_is_identity() {
        let p = ou();
        for &x in &[-3.0, 0.0, 0.1, 42.0] {
            assert_eq!(p.expectation(0.5, x, 0.0), x);
            assert_eq!(p.variance(0.5, x, 0.0), 0.0);
            assert_eq!(p.std_deviation(0.5, x, 0.0), 0.0);
            assert_eq!(p.evolve(0.5, x, 0.0, 1.7), x);
        }
    }

    #[test]
    fn test_signed_diffusion_gives_non_negative_spread() {
        let p = ou();
        assert!(p.diffusion(0.0, 1.0) < 0.0);
        assert!(p.variance(0.0, 1.0, 0.25) > 0.0);
        assert!((p.std_deviation(0.0, 1.0, 0.25) - 0.1).abs() < 1e-15);
        assert!(
            (p.std_deviation(0.0, 1.0, 0.25).powi(2) - p.variance(0.0, 1.0, 0.25)).abs() < 1e-15
        );
    }

    #[test]
    fn test_negative_step_is_outside_spread_domain() {
        let p = ou();
        assert!(p.variance(0.0, 1.0, -1.0) < 0.0);
        assert!(p.std_deviation(0.0, 1.0, -1.0).is_nan());
        assert!(p.evolve(0.0, 1.0, -1.0, 0.5).is_nan());
    }

    #[test]
    fn test_evolve_combines_mean_and_spread() {
        let p = ou();
        let expected = p.expectation(0.0, 1.0, 0.25) + 0.1 * 1.5;
        assert!((p.evolve(0.0, 1.0, 0.25, 1.5) - expected).abs() < 1e-15);
    }

    #[test]
    fn test_overridden_moments_are_dispatched() {
        let exact: Box<dyn DiffusionProcess> = Box::new(ExactMeanReverting(ou()));
        let euler: Box<dyn DiffusionProcess> = Box::new(ou());

        let dt = 1.0;
        let exact_mean = 0.1 + 0.9 * (-0.5f64).exp();
        assert!((exact.expectation(0.0, 1.0, dt) - exact_mean).abs() < 1e-15);
        assert!((euler.expectation(0.0, 1.0, dt) - 0.55).abs() < 1e-15);

        // evolve picks up the overridden expectation
        assert!((exact.evolve(0.0, 1.0, dt, 0.0) - exact_mean).abs() < 1e-15);
        assert!((exact.expectation(0.0, 1.0, 0.0) - 1.0).abs() < 1e-15);
        assert_eq!(exact.variance(0.0, 1.0, 0.0), 0.0);
    }

    #[test]
    fn test_boxed_clone_is_independent() {
        let original: Box<dyn DiffusionProcess> = Box::new(ou());
        let mut copy = original.clone();
        assert_eq!(copy.x0(), original.x0());
        assert_eq!(copy.drift(0.0, 2.0), original.drift(0.0, 2.0));

        copy = Box::new(MeanReverting { x0: 9.0, ..ou() });
        assert_eq!(copy.x0(), 9.0);
        assert_eq!(original.x0(), 1.0);
    }
}
