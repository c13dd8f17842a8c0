//! CLI error handling

use thiserror::Error;

/// Errors surfaced by the command-line front end.
#[derive(Debug, Error)]
pub enum CliError {
    /// An argument combination the engine cannot act on.
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// Simulation configuration was rejected.
    #[error(transparent)]
    Config(#[from] mc_engine::ConfigError),

    /// The simulation driver failed.
    #[error(transparent)]
    Engine(#[from] mc_engine::EngineError),

    /// A closed-form pricer rejected its inputs.
    #[error(transparent)]
    Analytical(#[from] mc_models::analytical::AnalyticalError),

    /// A matrix sweep failed.
    #[error(transparent)]
    Matrix(#[from] mc_models::matrix::MatrixError),

    /// Result serialisation failed.
    #[error("Serialisation failed: {0}")]
    Serialise(#[from] serde_json::Error),
}

/// Result alias for CLI operations.
pub type Result<T> = std::result::Result<T, CliError>;
