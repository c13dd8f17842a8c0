//! Simulation configuration.
//!
//! This module provides the immutable [`SimulationConfig`] and its
//! builder. Validation happens once at build time; a config that exists
//! is a config the driver will accept.

use crate::error::ConfigError;

/// Maximum number of simulation paths allowed.
pub const MAX_PATHS: usize = 10_000_000;

/// Maximum number of time steps allowed per path.
pub const MAX_STEPS: usize = 10_000;

/// Monte Carlo simulation configuration.
///
/// Immutable once built; use [`SimulationConfigBuilder`] via
/// [`SimulationConfig::builder`] to construct instances.
///
/// # Examples
///
/// ```rust
/// use mc_engine::SimulationConfig;
///
/// let config = SimulationConfig::builder()
///     .n_steps(100)
///     .n_paths(50_000)
///     .seed(42)
///     .build()
///     .expect("valid configuration");
///
/// assert_eq!(config.n_steps(), 100);
/// assert_eq!(config.n_paths(), 50_000);
/// assert_eq!(config.seed(), Some(42));
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SimulationConfig {
    /// Number of time steps per path.
    n_steps: usize,
    /// Number of simulation paths.
    n_paths: usize,
    /// Optional seed for reproducibility.
    seed: Option<u64>,
}

impl SimulationConfig {
    /// Creates a new configuration builder.
    #[inline]
    pub fn builder() -> SimulationConfigBuilder {
        SimulationConfigBuilder::default()
    }

    /// Returns the number of time steps per path.
    #[inline]
    pub fn n_steps(&self) -> usize {
        self.n_steps
    }

    /// Returns the number of simulation paths.
    #[inline]
    pub fn n_paths(&self) -> usize {
        self.n_paths
    }

    /// Returns the optional seed for reproducibility.
    #[inline]
    pub fn seed(&self) -> Option<u64> {
        self.seed
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if `n_paths` is outside `[1, MAX_PATHS]` or
    /// `n_steps` is outside `[1, MAX_STEPS]`.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.n_paths == 0 || self.n_paths > MAX_PATHS {
            return Err(ConfigError::InvalidPathCount(self.n_paths));
        }
        if self.n_steps == 0 || self.n_steps > MAX_STEPS {
            return Err(ConfigError::InvalidStepCount(self.n_steps));
        }
        Ok(())
    }
}

/// Builder for [`SimulationConfig`].
///
/// Step and path counts must be supplied; the seed is optional (an
/// unseeded config leaves seed selection to the caller).
#[derive(Clone, Debug, Default)]
pub struct SimulationConfigBuilder {
    n_steps: Option<usize>,
    n_paths: Option<usize>,
    seed: Option<u64>,
}

impl SimulationConfigBuilder {
    /// Sets the number of time steps per path, in `[1, MAX_STEPS]`.
    #[inline]
    pub fn n_steps(mut self, n_steps: usize) -> Self {
        self.n_steps = Some(n_steps);
        self
    }

    /// Sets the number of simulation paths, in `[1, MAX_PATHS]`.
    #[inline]
    pub fn n_paths(mut self, n_paths: usize) -> Self {
        self.n_paths = Some(n_paths);
        self
    }

    /// Sets the seed for reproducibility.
    #[inline]
    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Builds and validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a required count is missing or out of
    /// range.
    pub fn build(self) -> Result<SimulationConfig, ConfigError> {
        let n_steps = self
            .n_steps
            .ok_or(ConfigError::MissingParameter { name: "n_steps" })?;
        let n_paths = self
            .n_paths
            .ok_or(ConfigError::MissingParameter { name: "n_paths" })?;

        let config = SimulationConfig {
            n_steps,
            n_paths,
            seed: self.seed,
        };
        config.validate()?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_valid() {
        let config = SimulationConfig::builder()
            .n_steps(252)
            .n_paths(10_000)
            .build()
            .unwrap();

        assert_eq!(config.n_steps(), 252);
        assert_eq!(config.n_paths(), 10_000);
        assert_eq!(config.seed(), None);
    }

    #[test]
    fn test_builder_with_seed() {
        let config = SimulationConfig::builder()
            .n_steps(100)
            .n_paths(1000)
            .seed(42)
            .build()
            .unwrap();

        assert_eq!(config.seed(), Some(42));
    }

    #[test]
    fn test_zero_paths_rejected() {
        let result = SimulationConfig::builder().n_steps(100).n_paths(0).build();
        assert!(matches!(result, Err(ConfigError::InvalidPathCount(0))));
    }

    #[test]
    fn test_too_many_paths_rejected() {
        let result = SimulationConfig::builder()
            .n_steps(100)
            .n_paths(MAX_PATHS + 1)
            .build();
        assert!(matches!(result, Err(ConfigError::InvalidPathCount(_))));
    }

    #[test]
    fn test_zero_steps_rejected() {
        let result = SimulationConfig::builder().n_steps(0).n_paths(1000).build();
        assert!(matches!(result, Err(ConfigError::InvalidStepCount(0))));
    }

    #[test]
    fn test_too_many_steps_rejected() {
        let result = SimulationConfig::builder()
            .n_steps(MAX_STEPS + 1)
            .n_paths(1000)
            .build();
        assert!(matches!(result, Err(ConfigError::InvalidStepCount(_))));
    }

    #[test]
    fn test_missing_counts_rejected() {
        let missing_steps = SimulationConfig::builder().n_paths(1000).build();
        assert!(matches!(
            missing_steps,
            Err(ConfigError::MissingParameter { name: "n_steps" })
        ));

        let missing_paths = SimulationConfig::builder().n_steps(100).build();
        assert!(matches!(
            missing_paths,
            Err(ConfigError::MissingParameter { name: "n_paths" })
        ));
    }
}
