//! Discounted statistics over simulated payoffs.
//!
//! The three aggregates the driver reports are defined here as free
//! functions over a slice of undiscounted payoffs:
//!
//! - [`discounted_mean`]: the Monte Carlo price estimate
//! - [`standard_deviation`]: discounted sample standard deviation
//! - [`standard_error`]: standard deviation shrunk by `sqrt(N)`
//!
//! Degenerate inputs follow defined-zero conventions rather than
//! erroring: fewer than two samples have standard deviation 0, and an
//! empty sample has mean and standard error 0.

/// Mean payoff discounted to present value: `exp(-r * t) * mean`.
///
/// Returns 0.0 for an empty sample.
///
/// # Examples
///
/// ```rust
/// use mc_engine::stats::discounted_mean;
///
/// let payoffs = [4.0, 6.0];
/// assert_eq!(discounted_mean(&payoffs, 0.0, 1.0), 5.0);
/// assert!(discounted_mean(&payoffs, 0.05, 1.0) < 5.0);
/// ```
pub fn discounted_mean(payoffs: &[f64], rate: f64, horizon: f64) -> f64 {
    if payoffs.is_empty() {
        return 0.0;
    }
    let sum: f64 = payoffs.iter().sum();
    (-rate * horizon).exp() * sum / payoffs.len() as f64
}

/// Discounted sample standard deviation.
///
/// Uses the one-pass sum / sum-of-squares identity
/// `var = (sum_sq - sum^2 / N) / (N - 1)`, which walks the slice once and
/// matches the accumulation order of the sequential driver. The result is
/// scaled by `exp(-r * t)`.
///
/// Cancellation in the identity can drive the variance a hair below zero
/// for near-constant samples; it is floored at zero before the square
/// root. Fewer than two samples return 0.0.
pub fn standard_deviation(payoffs: &[f64], rate: f64, horizon: f64) -> f64 {
    let n = payoffs.len();
    if n < 2 {
        return 0.0;
    }

    let mut sum = 0.0;
    let mut sum_sq = 0.0;
    for &x in payoffs {
        sum += x;
        sum_sq += x * x;
    }

    let n = n as f64;
    let variance = ((sum_sq - sum * sum / n) / (n - 1.0)).max(0.0);
    variance.sqrt() * (-rate * horizon).exp()
}

/// Standard error of the discounted mean: `sd / sqrt(N)`.
///
/// Returns 0.0 for an empty sample.
pub fn standard_error(payoffs: &[f64], rate: f64, horizon: f64) -> f64 {
    if payoffs.is_empty() {
        return 0.0;
    }
    standard_deviation(payoffs, rate, horizon) / (payoffs.len() as f64).sqrt()
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use proptest::prelude::*;

    #[test]
    fn test_mean_undiscounted() {
        let payoffs = [1.0, 2.0, 3.0, 4.0];
        assert_relative_eq!(discounted_mean(&payoffs, 0.0, 1.0), 2.5, epsilon = 1e-12);
    }

    #[test]
    fn test_mean_discounting() {
        let payoffs = [10.0, 10.0];
        let expected = 10.0 * (-0.05f64).exp();
        assert_relative_eq!(
            discounted_mean(&payoffs, 0.05, 1.0),
            expected,
            epsilon = 1e-12
        );
    }

    #[test]
    fn test_standard_deviation_known_sample() {
        // Sample {1, 2, 3, 4}: variance (30 - 25) / 3 = 5/3.
        let payoffs = [1.0, 2.0, 3.0, 4.0];
        let expected = (5.0f64 / 3.0).sqrt();
        assert_relative_eq!(
            standard_deviation(&payoffs, 0.0, 1.0),
            expected,
            epsilon = 1e-12
        );
    }

    #[test]
    fn test_standard_deviation_discounted() {
        let payoffs = [1.0, 2.0, 3.0, 4.0];
        let expected = (5.0f64 / 3.0).sqrt() * (-0.1f64 * 2.0).exp();
        assert_relative_eq!(
            standard_deviation(&payoffs, 0.1, 2.0),
            expected,
            epsilon = 1e-12
        );
    }

    #[test]
    fn test_standard_error_known_sample() {
        let payoffs = [1.0, 2.0, 3.0, 4.0];
        let expected = (5.0f64 / 3.0).sqrt() / 2.0;
        assert_relative_eq!(
            standard_error(&payoffs, 0.0, 1.0),
            expected,
            epsilon = 1e-12
        );
    }

    #[test]
    fn test_degenerate_samples_are_zero() {
        assert_eq!(discounted_mean(&[], 0.05, 1.0), 0.0);
        assert_eq!(standard_deviation(&[], 0.05, 1.0), 0.0);
        assert_eq!(standard_error(&[], 0.05, 1.0), 0.0);
        assert_eq!(standard_deviation(&[7.5], 0.05, 1.0), 0.0);
    }

    #[test]
    fn test_constant_sample_has_zero_spread() {
        let payoffs = [3.25; 1000];
        assert_eq!(standard_deviation(&payoffs, 0.0, 1.0), 0.0);
        assert_eq!(standard_error(&payoffs, 0.0, 1.0), 0.0);
    }

    proptest! {
        #[test]
        fn prop_standard_deviation_non_negative(
            payoffs in proptest::collection::vec(-1.0e3..1.0e3f64, 0..200),
            rate in 0.0..0.2f64,
        ) {
            prop_assert!(standard_deviation(&payoffs, rate, 1.0) >= 0.0);
        }

        #[test]
        fn prop_standard_error_below_deviation(
            payoffs in proptest::collection::vec(-1.0e3..1.0e3f64, 2..200),
        ) {
            let sd = standard_deviation(&payoffs, 0.0, 1.0);
            let se = standard_error(&payoffs, 0.0, 1.0);
            prop_assert!(se <= sd + 1e-12);
        }

        #[test]
        fn prop_mean_within_sample_range(
            payoffs in proptest::collection::vec(0.0..1.0e3f64, 1..200),
        ) {
            let mean = discounted_mean(&payoffs, 0.0, 1.0);
            let lo = payoffs.iter().cloned().fold(f64::INFINITY, f64::min);
            let hi = payoffs.iter().cloned().fold(f64::NEG_INFINITY, f64::max);
            prop_assert!(mean >= lo - 1e-9 && mean <= hi + 1e-9);
        }
    }
}
