//! eulermc CLI - Command Line Operations for Monte Carlo Option Pricing
//!
//! # Commands
//!
//! - `eulermc simulate` - Price one contract by Euler-Maruyama simulation
//! - `eulermc matrix` - Sweep a closed-form pricer over a parameter row
//!
//! # Architecture
//!
//! This crate is the service layer of the eulermc workspace: it parses
//! arguments, initialises tracing and orchestrates `mc_engine` and
//! `mc_models`.

use clap::{Args, Parser, Subcommand, ValueEnum};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod commands;
mod error;

pub use error::{CliError, Result};

/// eulermc Monte Carlo Option Pricer CLI
#[derive(Parser)]
#[command(name = "eulermc")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

/// Payoff direction of the simulated contract.
#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum KindArg {
    /// Pay max(S - K, 0) at expiry
    Call,
    /// Pay max(K - S, 0) at expiry
    Put,
}

/// Closed-form pricer applied by the matrix sweep.
#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum MatrixKindArg {
    /// European call (generalised Black-Scholes)
    EuropeanCall,
    /// European put (generalised Black-Scholes)
    EuropeanPut,
    /// Perpetual American call
    PerpetualCall,
    /// Perpetual American put
    PerpetualPut,
}

/// Arguments for the `simulate` command.
#[derive(Args)]
pub struct SimulateArgs {
    /// Initial asset level
    #[arg(short = 's', long, default_value = "100.0")]
    spot: f64,

    /// Strike price
    #[arg(short = 'k', long, default_value = "100.0")]
    strike: f64,

    /// Continuously compounded risk-free rate
    #[arg(short, long, default_value = "0.0")]
    rate: f64,

    /// Diffusion volatility (sigma)
    #[arg(long, default_value = "0.2")]
    volatility: f64,

    /// Time to expiry in years
    #[arg(short = 't', long, default_value = "1.0")]
    maturity: f64,

    /// Payoff direction
    #[arg(long, value_enum, default_value = "call")]
    kind: KindArg,

    /// CEV elasticity exponent (1 = lognormal)
    #[arg(long, default_value = "1.0")]
    elasticity: f64,

    /// Number of time steps per path
    #[arg(long, default_value = "100")]
    steps: usize,

    /// Number of Monte Carlo paths
    #[arg(short, long, default_value = "50000")]
    paths: usize,

    /// Seed for reproducibility
    #[arg(long)]
    seed: Option<u64>,

    /// Emit the result as JSON instead of the plain-text report
    #[arg(long)]
    json: bool,
}

/// Arguments for the `matrix` command.
#[derive(Args)]
pub struct MatrixArgs {
    /// Closed-form pricer to sweep
    #[arg(long, value_enum, default_value = "european-call")]
    kind: MatrixKindArg,

    /// Lowest spot in the sweep
    #[arg(long, default_value = "80.0")]
    spot_low: f64,

    /// Highest spot in the sweep
    #[arg(long, default_value = "120.0")]
    spot_high: f64,

    /// Number of sweep cells
    #[arg(short = 'n', long, default_value = "9")]
    cells: usize,

    /// Strike price
    #[arg(short = 'k', long, default_value = "100.0")]
    strike: f64,

    /// Continuously compounded risk-free rate
    #[arg(short, long, default_value = "0.05")]
    rate: f64,

    /// Diffusion volatility (sigma)
    #[arg(long, default_value = "0.2")]
    volatility: f64,

    /// Time to expiry in years (ignored by perpetual kinds)
    #[arg(short = 't', long, default_value = "1.0")]
    maturity: f64,
}

#[derive(Subcommand)]
enum Commands {
    /// Price one contract by Euler-Maruyama Monte Carlo simulation
    Simulate(SimulateArgs),

    /// Sweep a closed-form pricer over a row of spots
    Matrix(MatrixArgs),
}

fn main() -> Result<()> {
    // Initialise tracing
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    if cli.verbose {
        info!("Verbose mode enabled");
    }

    match cli.command {
        Commands::Simulate(args) => commands::simulate::run(&args),
        Commands::Matrix(args) => commands::matrix::run(&args),
    }
}
