//! Generalised Black-Scholes pricing for European options.
//!
//! Uses the cost-of-carry form, which covers the plain Black-Scholes
//! model (b = r), dividend-paying stocks (b = r - q) and futures options
//! (b = 0):
//!
//! ```text
//! C = U * e^((b-r)T) * N(d1) - K * e^(-rT) * N(d2)
//! P = K * e^(-rT) * N(-d2) - U * e^((b-r)T) * N(-d1)
//! d1 = (ln(U/K) + (b + sigma^2/2) * T) / (sigma * sqrt(T))
//! d2 = d1 - sigma * sqrt(T)
//! ```

use super::distributions::{norm_cdf, norm_pdf};
use super::error::AnalyticalError;
use crate::instruments::{OptionData, PayoffKind};

/// Smallest price difference the divided-difference approximations accept
/// before declaring the bump width too small (one double-precision ulp at
/// 1.0).
pub(super) const DD_CANCELLATION_FLOOR: f64 = 1.110_223_024_625_156_5e-16; // 2^-53

/// Central divided difference `(up - down) / 2h` with the cancellation
/// guard shared by every pricer in this module: when the two prices agree
/// to within 2^-53 the difference is rounding noise and the quotient is
/// defined as zero.
pub(super) fn divided_difference_of(up: f64, down: f64, h: f64) -> f64 {
    if (up - down).abs() <= DD_CANCELLATION_FLOOR {
        0.0
    } else {
        (up - down) / (2.0 * h)
    }
}

/// Generalised Black-Scholes model for European option pricing.
///
/// Holds the contract parameters; the spot is passed per call so one
/// model value can be swept across a grid of underlyings.
///
/// # Examples
/// ```
/// use mc_models::analytical::BlackScholes;
/// use mc_models::{OptionData, PayoffKind};
///
/// let data = OptionData::new(100.0, 1.0, 0.05, 0.2, PayoffKind::Call);
/// let bs = BlackScholes::new(data).unwrap();
///
/// let call = bs.call_price(100.0).unwrap();
/// let put = bs.put_price(100.0).unwrap();
///
/// // Put-call parity: C - P = U*e^((b-r)T) - K*e^(-rT)
/// let parity = call - put - (100.0 - 100.0 * (-0.05_f64).exp());
/// assert!(parity.abs() < 1e-10);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct BlackScholes {
    data: OptionData,
}

impl BlackScholes {
    /// Creates a Black-Scholes model from contract data.
    ///
    /// # Errors
    /// - [`AnalyticalError::InvalidVolatility`] if `volatility <= 0`
    /// - [`AnalyticalError::InvalidExpiry`] if `maturity <= 0`
    pub fn new(data: OptionData) -> Result<Self, AnalyticalError> {
        if data.volatility <= 0.0 {
            return Err(AnalyticalError::InvalidVolatility {
                volatility: data.volatility,
            });
        }
        if data.maturity <= 0.0 {
            return Err(AnalyticalError::InvalidExpiry {
                expiry: data.maturity,
            });
        }
        Ok(Self { data })
    }

    /// Returns the contract data.
    #[inline]
    pub fn data(&self) -> &OptionData {
        &self.data
    }

    fn check_spot(spot: f64) -> Result<(), AnalyticalError> {
        if spot <= 0.0 {
            return Err(AnalyticalError::InvalidSpot { spot });
        }
        Ok(())
    }

    /// The d1 term of the formula.
    #[inline]
    fn d1(&self, spot: f64) -> f64 {
        let d = &self.data;
        let vol_sqrt_t = d.volatility * d.maturity.sqrt();
        ((spot / d.strike).ln() + (d.carry + 0.5 * d.volatility * d.volatility) * d.maturity)
            / vol_sqrt_t
    }

    /// The d2 term: `d1 - sigma * sqrt(T)`.
    #[inline]
    fn d2(&self, spot: f64) -> f64 {
        self.d1(spot) - self.data.volatility * self.data.maturity.sqrt()
    }

    /// European call price at the given spot.
    pub fn call_price(&self, spot: f64) -> Result<f64, AnalyticalError> {
        Self::check_spot(spot)?;
        let d = &self.data;
        let df = (-d.rate * d.maturity).exp();
        let carry_adj = ((d.carry - d.rate) * d.maturity).exp();
        Ok(spot * carry_adj * norm_cdf(self.d1(spot)) - d.strike * df * norm_cdf(self.d2(spot)))
    }

    /// European put price at the given spot.
    pub fn put_price(&self, spot: f64) -> Result<f64, AnalyticalError> {
        Self::check_spot(spot)?;
        let d = &self.data;
        let df = (-d.rate * d.maturity).exp();
        let carry_adj = ((d.carry - d.rate) * d.maturity).exp();
        Ok(d.strike * df * norm_cdf(-self.d2(spot)) - spot * carry_adj * norm_cdf(-self.d1(spot)))
    }

    /// Price for the contract's own payoff kind.
    pub fn price(&self, spot: f64) -> Result<f64, AnalyticalError> {
        match self.data.kind {
            PayoffKind::Call => self.call_price(spot),
            PayoffKind::Put => self.put_price(spot),
        }
    }

    /// Closed-form call delta: `e^((b-r)T) * N(d1)`.
    pub fn call_delta(&self, spot: f64) -> Result<f64, AnalyticalError> {
        Self::check_spot(spot)?;
        let d = &self.data;
        Ok(((d.carry - d.rate) * d.maturity).exp() * norm_cdf(self.d1(spot)))
    }

    /// Closed-form put delta: `e^((b-r)T) * (N(d1) - 1)`.
    pub fn put_delta(&self, spot: f64) -> Result<f64, AnalyticalError> {
        Self::check_spot(spot)?;
        let d = &self.data;
        Ok(((d.carry - d.rate) * d.maturity).exp() * (norm_cdf(self.d1(spot)) - 1.0))
    }

    /// Delta for the contract's own payoff kind.
    pub fn delta(&self, spot: f64) -> Result<f64, AnalyticalError> {
        match self.data.kind {
            PayoffKind::Call => self.call_delta(spot),
            PayoffKind::Put => self.put_delta(spot),
        }
    }

    /// Closed-form gamma, identical for calls and puts:
    /// `e^((b-r)T) * phi(d1) / (U * sigma * sqrt(T))`.
    pub fn gamma(&self, spot: f64) -> Result<f64, AnalyticalError> {
        Self::check_spot(spot)?;
        let d = &self.data;
        let carry_adj = ((d.carry - d.rate) * d.maturity).exp();
        Ok(carry_adj * norm_pdf(self.d1(spot)) / (spot * d.volatility * d.maturity.sqrt()))
    }

    /// Put price implied by put-call parity from this model's call price:
    /// `P = C - U*e^((b-r)T) + K*e^(-rT)`.
    pub fn put_from_parity(&self, spot: f64) -> Result<f64, AnalyticalError> {
        let d = &self.data;
        let carry_adj = ((d.carry - d.rate) * d.maturity).exp();
        Ok(self.call_price(spot)? - spot * carry_adj + d.strike * (-d.rate * d.maturity).exp())
    }

    /// Checks whether a quoted call/put pair satisfies put-call parity at
    /// the given spot, within `tol`.
    pub fn parity_holds(
        &self,
        call: f64,
        put: f64,
        spot: f64,
        tol: f64,
    ) -> Result<bool, AnalyticalError> {
        Self::check_spot(spot)?;
        let d = &self.data;
        let carry_adj = ((d.carry - d.rate) * d.maturity).exp();
        let rhs = spot * carry_adj - d.strike * (-d.rate * d.maturity).exp();
        Ok((call - put - rhs).abs() <= tol)
    }

    /// Delta approximated by the central divided difference
    /// `(V(U+h) - V(U-h)) / 2h`.
    ///
    /// Returns zero when the two prices agree to within 2^-53: at that
    /// point the difference is pure rounding noise and the quotient would
    /// be meaningless.
    pub fn divided_difference_delta(&self, spot: f64, h: f64) -> Result<f64, AnalyticalError> {
        let up = self.price(spot + h)?;
        let down = self.price(spot - h)?;
        Ok(divided_difference_of(up, down, h))
    }

    /// Gamma approximated by the second central divided difference
    /// `(V(U+h) - 2V(U) + V(U-h)) / h^2`.
    ///
    /// Same cancellation guard as
    /// [`divided_difference_delta`](Self::divided_difference_delta).
    pub fn divided_difference_gamma(&self, spot: f64, h: f64) -> Result<f64, AnalyticalError> {
        let up = self.price(spot + h)?;
        let mid = self.price(spot)?;
        let down = self.price(spot - h)?;
        let second = up - 2.0 * mid + down;
        if second.abs() <= DD_CANCELLATION_FLOOR {
            return Ok(0.0);
        }
        Ok(second / (h * h))
    }
}
