//! # MC Engine (Simulation layer)
//!
//! The Monte Carlo core of the eulermc workspace. It drives a stochastic
//! process model over a uniform time grid with the Euler-Maruyama scheme
//! and aggregates discounted path statistics:
//!
//! - [`rng::NormalSource`]: the variate-supply seam, with a seeded PRNG
//!   implementation and a deterministic test substitute
//! - [`euler::PathIntegrator`]: one-draw-per-step explicit integration
//! - [`stats`]: discounted mean, standard deviation and standard error
//! - [`engine::MonteCarloEngine`]: the sequential simulation driver
//!
//! ## Usage Example
//!
//! ```rust
//! use mc_engine::{MonteCarloEngine, SimulationConfig};
//! use mc_models::{OptionData, PayoffKind};
//!
//! let config = SimulationConfig::builder()
//!     .n_steps(100)
//!     .n_paths(10_000)
//!     .seed(42)
//!     .build()
//!     .expect("valid configuration");
//!
//! let data = OptionData::new(100.0, 1.0, 0.0, 0.2, PayoffKind::Call);
//! let result = MonteCarloEngine::new(config).price(100.0, &data).unwrap();
//! assert!(result.price > 0.0);
//! ```

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]

pub mod config;
pub mod engine;
pub mod error;
pub mod euler;
pub mod rng;
pub mod stats;

pub use config::{SimulationConfig, SimulationConfigBuilder, MAX_PATHS, MAX_STEPS};
pub use engine::{MonteCarloEngine, RunResult};
pub use error::{ConfigError, EngineError};
pub use euler::{PathIntegrator, PathOutcome};
pub use rng::{FixedNormalSource, NormalSource, PrngNormalSource};
