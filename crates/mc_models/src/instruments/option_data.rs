//! Option contract data and payoff evaluation.

/// Type of option payoff.
///
/// Dispatched via pattern matching so that an invalid kind is a
/// compile-time exhaustiveness concern rather than a runtime branch on a
/// string or integer tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PayoffKind {
    /// Call option: max(S - K, 0)
    Call,
    /// Put option: max(K - S, 0)
    Put,
}

/// Immutable parameter record for one contract.
///
/// Supplied externally and shared read-only for the duration of one
/// simulation run. No economic-sanity validation happens here or in the
/// engine; the layer constructing contracts is responsible for supplying
/// sane inputs (e.g. positive volatility).
///
/// `beta_cev` and `scale` parameterise the CEV diffusion
/// `sigma * scale * S^beta`; the defaults (`1.0` each) reduce it to the
/// standard lognormal diffusion. `dividend` is carried on the record but
/// the drift remains `r * S`; subtracting the yield is a possible
/// extension, not implemented.
///
/// # Examples
/// ```
/// use mc_models::{OptionData, PayoffKind};
///
/// let data = OptionData::new(100.0, 1.0, 0.0, 0.2, PayoffKind::Call);
/// assert_eq!(data.payoff(107.5), 7.5);
/// assert_eq!(data.payoff(92.5), 0.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct OptionData {
    /// Strike price (K).
    pub strike: f64,
    /// Time to maturity in years (T).
    pub maturity: f64,
    /// Risk-free rate (r), annualised.
    pub rate: f64,
    /// Volatility (sigma), annualised.
    pub volatility: f64,
    /// Cost of carry (b). Equal to `rate` for a non-dividend-paying stock.
    pub carry: f64,
    /// Down-and-out barrier level (H). Unused by the vanilla payoff.
    pub barrier: f64,
    /// Continuous dividend yield (D).
    pub dividend: f64,
    /// CEV elasticity exponent (beta). `1.0` is lognormal.
    pub beta_cev: f64,
    /// CEV scale factor.
    pub scale: f64,
    /// Call or put.
    pub kind: PayoffKind,
}

impl OptionData {
    /// Creates contract data with the vanilla defaults: carry equal to the
    /// rate, no barrier, no dividend, lognormal elasticity.
    pub fn new(strike: f64, maturity: f64, rate: f64, volatility: f64, kind: PayoffKind) -> Self {
        Self {
            strike,
            maturity,
            rate,
            volatility,
            carry: rate,
            barrier: 0.0,
            dividend: 0.0,
            beta_cev: 1.0,
            scale: 1.0,
            kind,
        }
    }

    /// Overrides the cost of carry.
    pub fn with_carry(mut self, carry: f64) -> Self {
        self.carry = carry;
        self
    }

    /// Overrides the CEV elasticity exponent.
    pub fn with_elasticity(mut self, beta_cev: f64) -> Self {
        self.beta_cev = beta_cev;
        self
    }

    /// Overrides the continuous dividend yield.
    pub fn with_dividend(mut self, dividend: f64) -> Self {
        self.dividend = dividend;
        self
    }

    /// Evaluates the vanilla payoff at a terminal level.
    ///
    /// Negative or zero terminal levels (which the Euler scheme can
    /// produce under CEV discretisation) clamp to zero through the
    /// `max(., 0)` semantics.
    #[inline]
    pub fn payoff(&self, terminal: f64) -> f64 {
        match self.kind {
            PayoffKind::Call => (terminal - self.strike).max(0.0),
            PayoffKind::Put => (self.strike - terminal).max(0.0),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn batch2_call() -> OptionData {
        OptionData::new(100.0, 1.0, 0.0, 0.2, PayoffKind::Call)
    }

    #[test]
    fn test_call_payoff() {
        let data = batch2_call();
        assert_eq!(data.payoff(110.0), 10.0);
        assert_eq!(data.payoff(100.0), 0.0);
        assert_eq!(data.payoff(90.0), 0.0);
    }

    #[test]
    fn test_put_payoff() {
        let data = OptionData::new(100.0, 1.0, 0.0, 0.2, PayoffKind::Put);
        assert_eq!(data.payoff(90.0), 10.0);
        assert_eq!(data.payoff(100.0), 0.0);
        assert_eq!(data.payoff(110.0), 0.0);
    }

    #[test]
    fn test_negative_terminal_clamps() {
        // CEV discretisation can push the level below zero; the payoff
        // must clamp rather than go negative.
        let call = batch2_call();
        assert_eq!(call.payoff(-5.0), 0.0);

        let put = OptionData::new(100.0, 1.0, 0.0, 0.2, PayoffKind::Put);
        assert_eq!(put.payoff(-5.0), 105.0);
    }

    #[test]
    fn test_defaults() {
        let data = batch2_call();
        assert_eq!(data.carry, data.rate);
        assert_eq!(data.beta_cev, 1.0);
        assert_eq!(data.scale, 1.0);
        assert_eq!(data.dividend, 0.0);
    }

    #[test]
    fn test_with_overrides() {
        let data = batch2_call()
            .with_carry(0.03)
            .with_elasticity(0.8)
            .with_dividend(0.01);
        assert_eq!(data.carry, 0.03);
        assert_eq!(data.beta_cev, 0.8);
        assert_eq!(data.dividend, 0.01);
    }

    proptest! {
        #[test]
        fn prop_payoffs_non_negative(
            terminal in -500.0f64..500.0,
            strike in 0.0f64..500.0,
        ) {
            let call = OptionData::new(strike, 1.0, 0.0, 0.2, PayoffKind::Call);
            let put = OptionData::new(strike, 1.0, 0.0, 0.2, PayoffKind::Put);
            prop_assert!(call.payoff(terminal) >= 0.0);
            prop_assert!(put.payoff(terminal) >= 0.0);

            // max(S-K, 0) - max(K-S, 0) = S - K identically.
            prop_assert_eq!(
                call.payoff(terminal) - put.payoff(terminal),
                terminal - strike
            );
        }
    }
}
