//! CEV stochastic process definition.
//!
//! The equation being solved is kept separate from the machine that
//! solves it: this module defines the SDE coefficients
//!
//! ```text
//! dS = r * S * dt + sigma * scale * S^beta * dW
//! ```
//!
//! while the Euler-Maruyama integrator in `mc_engine` consumes them
//! without knowing anything about the contract.

use crate::instruments::OptionData;

/// Drift and diffusion of a constant-elasticity-of-variance process.
///
/// All three coefficient functions are pure functions of `(t, x)` and the
/// borrowed, immutable [`OptionData`]; there is no ambient state, so one
/// process value can be shared freely across concurrent readers.
///
/// With `beta_cev = 1` and `scale = 1` (the [`OptionData::new`] defaults)
/// the diffusion reduces to the standard lognormal `sigma * S`.
///
/// # Examples
/// ```
/// use mc_models::{CevProcess, OptionData, PayoffKind};
///
/// let data = OptionData::new(100.0, 1.0, 0.05, 0.2, PayoffKind::Call);
/// let process = CevProcess::new(&data);
///
/// assert_eq!(process.drift(0.0, 100.0), 5.0);
/// assert_eq!(process.diffusion(0.0, 100.0), 20.0);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct CevProcess<'a> {
    data: &'a OptionData,
}

impl<'a> CevProcess<'a> {
    /// Binds the process coefficients to a contract's parameters.
    pub fn new(data: &'a OptionData) -> Self {
        Self { data }
    }

    /// Drift term: `r * X`.
    ///
    /// Time-homogeneous; `_t` is accepted for signature symmetry with
    /// time-dependent models.
    #[inline]
    pub fn drift(&self, _t: f64, x: f64) -> f64 {
        self.data.rate * x
    }

    /// Diffusion term: `sigma * scale * X^beta`.
    #[inline]
    pub fn diffusion(&self, _t: f64, x: f64) -> f64 {
        self.data.volatility * self.data.scale * x.powf(self.data.beta_cev)
    }

    /// First derivative of the diffusion term with respect to the level:
    /// `0.5 * sigma * scale * beta * X^(2*beta - 1)`.
    ///
    /// Needed by higher-order schemes such as Milstein; the Euler
    /// integrator does not call it.
    #[inline]
    pub fn diffusion_derivative(&self, _t: f64, x: f64) -> f64 {
        let beta = self.data.beta_cev;
        0.5 * self.data.volatility * self.data.scale * beta * x.powf(2.0 * beta - 1.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::instruments::PayoffKind;
    use approx::assert_relative_eq;

    fn data(rate: f64, vol: f64) -> OptionData {
        OptionData::new(100.0, 1.0, rate, vol, PayoffKind::Call)
    }

    #[test]
    fn test_drift_is_rate_times_level() {
        let d = data(0.08, 0.3);
        let p = CevProcess::new(&d);
        assert_relative_eq!(p.drift(0.0, 60.0), 4.8, epsilon = 1e-12);
        assert_eq!(p.drift(0.5, 0.0), 0.0);
    }

    #[test]
    fn test_zero_rate_kills_drift() {
        let d = data(0.0, 0.2);
        let p = CevProcess::new(&d);
        assert_eq!(p.drift(0.0, 100.0), 0.0);
    }

    #[test]
    fn test_lognormal_diffusion() {
        // beta = 1 reduces to sigma * X.
        let d = data(0.0, 0.2);
        let p = CevProcess::new(&d);
        assert_relative_eq!(p.diffusion(0.0, 100.0), 20.0, epsilon = 1e-12);
    }

    #[test]
    fn test_cev_diffusion_scales_with_elasticity() {
        let d = data(0.0, 0.2).with_elasticity(0.5);
        let p = CevProcess::new(&d);
        assert_relative_eq!(p.diffusion(0.0, 100.0), 0.2 * 10.0, epsilon = 1e-12);
    }

    #[test]
    fn test_diffusion_derivative_lognormal() {
        // For beta = 1: 0.5 * sigma * X.
        let d = data(0.0, 0.2);
        let p = CevProcess::new(&d);
        assert_relative_eq!(p.diffusion_derivative(0.0, 50.0), 5.0, epsilon = 1e-12);
    }

    #[test]
    fn test_time_independence() {
        let d = data(0.05, 0.2);
        let p = CevProcess::new(&d);
        assert_eq!(p.drift(0.0, 80.0), p.drift(0.9, 80.0));
        assert_eq!(p.diffusion(0.0, 80.0), p.diffusion(0.9, 80.0));
    }
}
