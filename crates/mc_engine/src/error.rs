//! Error types for the simulation engine.
//!
//! Construction-time rejections live in [`ConfigError`]; run-time
//! failures of the driver (a contract the grid cannot be built for) live
//! in [`EngineError`]. Numerical anomalies during integration are
//! diagnostics, not errors, and statistical degeneracy follows the
//! defined-zero conventions in [`crate::stats`].

use thiserror::Error;

/// Configuration error for the Monte Carlo driver.
///
/// These errors occur at build time when invalid parameters are provided.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ConfigError {
    /// Path count outside the valid range `[1, MAX_PATHS]`.
    #[error("Invalid path count {0}: must be in range [1, 10_000_000]")]
    InvalidPathCount(usize),

    /// Step count outside the valid range `[1, MAX_STEPS]`.
    #[error("Invalid step count {0}: must be in range [1, 10_000]")]
    InvalidStepCount(usize),

    /// A required parameter was not supplied to the builder.
    #[error("Missing parameter '{name}': must be specified")]
    MissingParameter {
        /// Parameter name.
        name: &'static str,
    },
}

/// Run-time error from the simulation driver.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum EngineError {
    /// The contract's maturity cannot span a time grid.
    #[error("Invalid maturity: T = {maturity} (must be positive)")]
    InvalidMaturity {
        /// The rejected maturity.
        maturity: f64,
    },

    /// Grid construction failed.
    #[error(transparent)]
    Core(#[from] mc_core::CoreError),
}
