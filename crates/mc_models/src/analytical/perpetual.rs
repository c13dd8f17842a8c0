//! Perpetual American option closed forms.
//!
//! A perpetual American option has no expiry; its holder may exercise at
//! any time, and the optimal-stopping problem admits a closed-form
//! solution:
//!
//! ```text
//! y1 = 1/2 - b/sigma^2 + sqrt((b/sigma^2 - 1/2)^2 + 2r/sigma^2)
//! C  = (K / (y1 - 1)) * (((y1 - 1)/y1) * (U/K))^y1
//!
//! y2 = 1/2 - b/sigma^2 - sqrt((b/sigma^2 - 1/2)^2 + 2r/sigma^2)
//! P  = (K / (1 - y2)) * (((y2 - 1)/y2) * (U/K))^y2
//! ```
//!
//! The `maturity` field of the contract data is ignored.

use super::error::AnalyticalError;
use crate::instruments::{OptionData, PayoffKind};

use super::black_scholes::divided_difference_of;

/// Closed-form pricer for perpetual American calls and puts.
///
/// # Examples
/// ```
/// use mc_models::analytical::PerpetualAmerican;
/// use mc_models::{OptionData, PayoffKind};
///
/// // K = 100, r = 0.1, sig = 0.1, b = 0.02, S = 110: C = 18.5035, P = 3.03106
/// let data = OptionData::new(100.0, 0.0, 0.1, 0.1, PayoffKind::Call).with_carry(0.02);
/// let perp = PerpetualAmerican::new(data).unwrap();
/// assert!((perp.call_price(110.0).unwrap() - 18.5035).abs() < 1e-3);
/// assert!((perp.put_price(110.0).unwrap() - 3.03106).abs() < 1e-3);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct PerpetualAmerican {
    data: OptionData,
}

impl PerpetualAmerican {
    /// Creates a perpetual American pricer from contract data.
    ///
    /// # Errors
    /// Returns [`AnalyticalError::InvalidVolatility`] if `volatility <= 0`.
    pub fn new(data: OptionData) -> Result<Self, AnalyticalError> {
        if data.volatility <= 0.0 {
            return Err(AnalyticalError::InvalidVolatility {
                volatility: data.volatility,
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

    /// Perpetual American call price.
    pub fn call_price(&self, spot: f64) -> Result<f64, AnalyticalError> {
        Self::check_spot(spot)?;
        let d = &self.data;
        let sig2 = d.volatility * d.volatility;
        let y1 = 0.5 - d.carry / sig2
            + ((d.carry / sig2 - 0.5).powi(2) + 2.0 * d.rate / sig2).sqrt();
        let rhs = ((y1 - 1.0) / y1) * (spot / d.strike);
        Ok((d.strike / (y1 - 1.0)) * rhs.powf(y1))
    }

    /// Perpetual American put price.
    pub fn put_price(&self, spot: f64) -> Result<f64, AnalyticalError> {
        Self::check_spot(spot)?;
        let d = &self.data;
        let sig2 = d.volatility * d.volatility;
        let y2 = 0.5 - d.carry / sig2
            - ((d.carry / sig2 - 0.5).powi(2) + 2.0 * d.rate / sig2).sqrt();
        let rhs = ((y2 - 1.0) / y2) * (spot / d.strike);
        Ok((d.strike / (1.0 - y2)) * rhs.powf(y2))
    }

    /// Price for the contract's own payoff kind.
    pub fn price(&self, spot: f64) -> Result<f64, AnalyticalError> {
        match self.data.kind {
            PayoffKind::Call => self.call_price(spot),
            PayoffKind::Put => self.put_price(spot),
        }
    }

    /// Delta approximated by the central divided difference; no closed
    /// form is provided for the perpetual Greeks.
    pub fn divided_difference_delta(&self, spot: f64, h: f64) -> Result<f64, AnalyticalError> {
        let up = self.price(spot + h)?;
        let down = self.price(spot - h)?;
        Ok(divided_difference_of(up, down, h))
    }

    /// Gamma approximated by the second central divided difference.
    pub fn divided_difference_gamma(&self, spot: f64, h: f64) -> Result<f64, AnalyticalError> {
        let up = self.price(spot + h)?;
        let mid = self.price(spot)?;
        let down = self.price(spot - h)?;
        let second = up - 2.0 * mid + down;
        if second.abs() <= super::black_scholes::DD_CANCELLATION_FLOOR {
            return Ok(0.0);
        }
        Ok(second / (h * h))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn reference_contract(kind: PayoffKind) -> PerpetualAmerican {
        // K = 100, sig = 0.1, r = 0.1, b = 0.02.
        let data = OptionData::new(100.0, 0.0, 0.1, 0.1, kind).with_carry(0.02);
        PerpetualAmerican::new(data).unwrap()
    }

    #[test]
    fn test_reference_call_price() {
        let perp = reference_contract(PayoffKind::Call);
        assert_relative_eq!(perp.call_price(110.0).unwrap(), 18.5035, epsilon = 1e-3);
    }

    #[test]
    fn test_reference_put_price() {
        let perp = reference_contract(PayoffKind::Put);
        assert_relative_eq!(perp.put_price(110.0).unwrap(), 3.03106, epsilon = 1e-3);
    }

    #[test]
    fn test_call_increases_with_spot() {
        let perp = reference_contract(PayoffKind::Call);
        let lo = perp.call_price(90.0).unwrap();
        let hi = perp.call_price(120.0).unwrap();
        assert!(hi > lo);
    }

    #[test]
    fn test_put_decreases_with_spot() {
        let perp = reference_contract(PayoffKind::Put);
        let lo = perp.put_price(90.0).unwrap();
        let hi = perp.put_price(120.0).unwrap();
        assert!(hi < lo);
    }

    #[test]
    fn test_divided_difference_delta_signs() {
        let call = reference_contract(PayoffKind::Call);
        let put = reference_contract(PayoffKind::Put);
        assert!(call.divided_difference_delta(110.0, 0.01).unwrap() > 0.0);
        assert!(put.divided_difference_delta(110.0, 0.01).unwrap() < 0.0);
    }

    #[test]
    fn test_invalid_inputs_rejected() {
        let bad = OptionData::new(100.0, 0.0, 0.1, 0.0, PayoffKind::Call);
        assert!(PerpetualAmerican::new(bad).is_err());

        let perp = reference_contract(PayoffKind::Call);
        assert!(matches!(
            perp.call_price(0.0),
            Err(AnalyticalError::InvalidSpot { spot: 0.0 })
        ));
    }
}
