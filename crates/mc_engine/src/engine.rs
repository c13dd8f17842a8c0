//! Sequential Monte Carlo simulation driver.
//!
//! [`MonteCarloEngine`] wires the pieces together: it builds the time
//! grid once from the contract's maturity, runs every path through the
//! Euler-Maruyama integrator against one shared variate source, applies
//! the payoff transform to each terminal level and aggregates the
//! discounted statistics.

use mc_core::{Interval, TimeGrid};
use mc_models::{CevProcess, OptionData};

use crate::config::SimulationConfig;
use crate::error::EngineError;
use crate::euler::PathIntegrator;
use crate::rng::{NormalSource, PrngNormalSource};
use crate::stats;

/// Seed used when the configuration leaves the seed unset.
pub const DEFAULT_SEED: u64 = 0;

/// Aggregated result of a simulation run.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RunResult {
    /// Discounted Monte Carlo price estimate.
    pub price: f64,
    /// Discounted sample standard deviation of the payoff.
    pub std_dev: f64,
    /// Standard error of the price estimate.
    pub std_error: f64,
    /// Total non-positive level excursions across all paths.
    ///
    /// A non-zero count is a discretisation diagnostic, not a failure;
    /// see [`PathIntegrator`](crate::euler::PathIntegrator).
    pub boundary_hits: u64,
}

/// Sequential Monte Carlo pricing engine.
///
/// Paths are integrated one after another against a single variate
/// source, so a seeded run is exactly reproducible. The engine is
/// generic over [`NormalSource`]; [`MonteCarloEngine::new`] picks the
/// seeded PRNG source, and [`MonteCarloEngine::with_source`] accepts any
/// substitute (a fixed sequence in tests, for instance).
///
/// # Examples
///
/// ```rust
/// use mc_engine::{MonteCarloEngine, SimulationConfig};
/// use mc_models::{OptionData, PayoffKind};
///
/// let config = SimulationConfig::builder()
///     .n_steps(100)
///     .n_paths(10_000)
///     .seed(42)
///     .build()
///     .unwrap();
///
/// let data = OptionData::new(100.0, 1.0, 0.0, 0.2, PayoffKind::Call);
/// let result = MonteCarloEngine::new(config).price(100.0, &data).unwrap();
/// assert!(result.std_error > 0.0);
/// ```
#[derive(Debug)]
pub struct MonteCarloEngine<S: NormalSource> {
    config: SimulationConfig,
    source: S,
}

impl MonteCarloEngine<PrngNormalSource> {
    /// Creates an engine with a PRNG source seeded from the
    /// configuration ([`DEFAULT_SEED`] when unset).
    pub fn new(config: SimulationConfig) -> Self {
        let seed = config.seed().unwrap_or(DEFAULT_SEED);
        Self {
            config,
            source: PrngNormalSource::from_seed(seed),
        }
    }
}

impl<S: NormalSource> MonteCarloEngine<S> {
    /// Creates an engine over an explicit variate source.
    pub fn with_source(config: SimulationConfig, source: S) -> Self {
        Self { config, source }
    }

    /// Returns the engine's configuration.
    #[inline]
    pub fn config(&self) -> &SimulationConfig {
        &self.config
    }

    /// Runs the simulation, transforming each terminal level with
    /// `payoff` before aggregation.
    ///
    /// The grid spans `[0, maturity]` with the configured step count and
    /// is shared by every path. Draws advance the engine's source, so a
    /// second `run` on the same engine continues the variate stream.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::InvalidMaturity`] if the contract's
    /// maturity is not positive.
    pub fn run<F>(
        &mut self,
        spot: f64,
        data: &OptionData,
        payoff: F,
    ) -> Result<RunResult, EngineError>
    where
        F: Fn(f64) -> f64,
    {
        if data.maturity <= 0.0 || !data.maturity.is_finite() {
            return Err(EngineError::InvalidMaturity {
                maturity: data.maturity,
            });
        }

        let interval = Interval::new(0.0, data.maturity);
        let grid = TimeGrid::new(interval, self.config.n_steps())?;
        let integrator = PathIntegrator::new(&grid);
        let process = CevProcess::new(data);

        let n_paths = self.config.n_paths();
        let mut payoffs = Vec::with_capacity(n_paths);
        let mut boundary_hits = 0u64;

        for _ in 0..n_paths {
            let outcome = integrator.integrate(&process, spot, &mut self.source);
            boundary_hits += outcome.boundary_hits;
            payoffs.push(payoff(outcome.terminal));
        }

        Ok(RunResult {
            price: stats::discounted_mean(&payoffs, data.rate, data.maturity),
            std_dev: stats::standard_deviation(&payoffs, data.rate, data.maturity),
            std_error: stats::standard_error(&payoffs, data.rate, data.maturity),
            boundary_hits,
        })
    }

    /// Runs the simulation with the contract's own payoff.
    pub fn price(&mut self, spot: f64, data: &OptionData) -> Result<RunResult, EngineError> {
        self.run(spot, data, |terminal| data.payoff(terminal))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rng::FixedNormalSource;
    use approx::assert_relative_eq;
    use mc_models::PayoffKind;

    fn small_config() -> SimulationConfig {
        SimulationConfig::builder()
            .n_steps(100)
            .n_paths(1000)
            .seed(42)
            .build()
            .unwrap()
    }

    #[test]
    fn test_invalid_maturity_rejected() {
        let data = OptionData::new(100.0, 0.0, 0.05, 0.2, PayoffKind::Call);
        let mut engine = MonteCarloEngine::new(small_config());
        assert!(matches!(
            engine.price(100.0, &data),
            Err(EngineError::InvalidMaturity { .. })
        ));
    }

    #[test]
    fn test_seeded_runs_reproduce() {
        let data = OptionData::new(100.0, 1.0, 0.05, 0.2, PayoffKind::Call);
        let first = MonteCarloEngine::new(small_config())
            .price(100.0, &data)
            .unwrap();
        let second = MonteCarloEngine::new(small_config())
            .price(100.0, &data)
            .unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_zero_noise_prices_discrete_forward() {
        // With all draws at zero each path compounds the drift exactly,
        // so every payoff is identical and the spread statistics vanish.
        let data = OptionData::new(100.0, 0.05, 0.05, 0.2, PayoffKind::Call);
        let config = SimulationConfig::builder()
            .n_steps(10)
            .n_paths(50)
            .build()
            .unwrap();
        let mut engine = MonteCarloEngine::with_source(config, FixedNormalSource::zeros());

        let result = engine.price(100.0, &data).unwrap();

        let step: f64 = 0.05 / 10.0;
        let terminal = 100.0 * (1.0 + 0.05 * step).powi(10);
        let expected = (terminal - 100.0) * (-0.05f64 * 0.05).exp();
        assert_relative_eq!(result.price, expected, epsilon = 1e-9);
        assert_eq!(result.std_dev, 0.0);
        assert_eq!(result.std_error, 0.0);
        assert_eq!(result.boundary_hits, 0);
    }

    #[test]
    fn test_custom_payoff_transform() {
        // A unit payoff prices the discount bond regardless of the path.
        let data = OptionData::new(100.0, 1.0, 0.05, 0.2, PayoffKind::Call);
        let mut engine = MonteCarloEngine::new(small_config());
        let result = engine.run(100.0, &data, |_| 1.0).unwrap();
        assert_relative_eq!(result.price, (-0.05f64).exp(), epsilon = 1e-12);
        assert_eq!(result.std_dev, 0.0);
    }

    #[test]
    fn test_boundary_hits_surface_under_violent_diffusion() {
        // sigma = 3 makes sub-zero excursions likely across 100k steps.
        let data = OptionData::new(100.0, 1.0, 0.0, 3.0, PayoffKind::Call);
        let mut engine = MonteCarloEngine::new(small_config());
        let result = engine.price(100.0, &data).unwrap();
        assert!(result.boundary_hits > 0);
    }
}
