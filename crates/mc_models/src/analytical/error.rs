//! Error types for analytical pricing operations.

use thiserror::Error;

/// Analytical pricing errors.
///
/// Provides structured error handling for the closed-form pricers with
/// descriptive context for each failure mode.
///
/// # Examples
/// ```
/// use mc_models::analytical::AnalyticalError;
///
/// let err = AnalyticalError::InvalidVolatility { volatility: -0.2 };
/// assert!(format!("{}", err).contains("volatility"));
/// ```
#[derive(Debug, Clone, Error, PartialEq)]
pub enum AnalyticalError {
    /// Invalid volatility (non-positive).
    #[error("Invalid volatility: sigma = {volatility}")]
    InvalidVolatility {
        /// The invalid volatility value.
        volatility: f64,
    },

    /// Invalid spot price (non-positive).
    #[error("Invalid spot price: S = {spot}")]
    InvalidSpot {
        /// The invalid spot price value.
        spot: f64,
    },

    /// Invalid expiry (non-positive, where the formula requires one).
    #[error("Invalid expiry: T = {expiry}")]
    InvalidExpiry {
        /// The invalid expiry value.
        expiry: f64,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_volatility_display() {
        let err = AnalyticalError::InvalidVolatility { volatility: -0.2 };
        assert_eq!(format!("{}", err), "Invalid volatility: sigma = -0.2");
    }

    #[test]
    fn test_invalid_spot_display() {
        let err = AnalyticalError::InvalidSpot { spot: -100.0 };
        assert_eq!(format!("{}", err), "Invalid spot price: S = -100");
    }

    #[test]
    fn test_error_trait_implementation() {
        let err = AnalyticalError::InvalidExpiry { expiry: 0.0 };
        let _: &dyn std::error::Error = &err;
    }
}
