//! # diffusion-process: One-Dimensional Diffusion Contract
//!
//! A small library describing continuous-time stochastic processes of the form
//! ```text
//! dx(t) = μ(t, x(t)) dt + σ(t, x(t)) dz(t)
//! ```
//! where `z` is a standard Wiener process.
//!
//! ## Key Features
//!
//! - **Process Contract**: [`DiffusionProcess`] with drift, diffusion and Euler
//!   short-step moments that a model may override with exact formulas
//! - **Log-Price Model**: [`LogPriceDiffusion`], the logarithm of a geometric
//!   Brownian motion with constant rate and volatility
//! - **Validated Construction**: invalid parameters are reported as [`DiffusionError`]
//!
//! Path simulation, random sampling and pricing are left to consumers, which call
//! `drift`/`diffusion` or `expectation`/`variance` at each step of their own scheme.
//!
//! ## Quick Start
//!
//! ```rust
//! use diffusion_process::{DiffusionProcess, LogPriceDiffusion};
//!
//! let process: Box<dyn DiffusionProcess> =
//!     Box::new(LogPriceDiffusion::new(0.05, 0.2, 100.0).expect("Valid parameters"));
//!
//! let x0 = process.x0();
//! let mean = process.expectation(0.0, x0, 1.0);
//! let variance = process.variance(0.0, x0, 1.0);
//! assert!((mean - (x0 + 0.03)).abs() < 1e-12);
//! assert!((variance - 0.04).abs() < 1e-12);
//! ```

// Module declarations
pub mod error;
pub mod math_utils;
pub mod models;

// Re-export commonly used types for convenience
pub use error::{DiffusionError, DiffusionResult};
pub use models::diffusion::{DiffusionProcess, Time};
pub use models::log_price::{LogPriceDiffusion, LogPriceParams};
