//! Simulate command implementation
//!
//! Prices a single contract with the Euler-Maruyama Monte Carlo engine
//! and, when a closed form exists, prints it alongside for comparison.

use tracing::info;

use mc_engine::{MonteCarloEngine, SimulationConfig};
use mc_models::analytical::BlackScholes;
use mc_models::{OptionData, PayoffKind};

use crate::{CliError, KindArg, Result, SimulateArgs};

/// Run the simulate command
pub fn run(args: &SimulateArgs) -> Result<()> {
    if args.spot <= 0.0 {
        return Err(CliError::InvalidArgument(format!(
            "spot must be positive, got {}",
            args.spot
        )));
    }

    let kind = match args.kind {
        KindArg::Call => PayoffKind::Call,
        KindArg::Put => PayoffKind::Put,
    };

    info!("Starting simulation...");
    info!("  Contract: {:?} K={} T={}", kind, args.strike, args.maturity);
    info!("  Dynamics: r={} sigma={} beta={}", args.rate, args.volatility, args.elasticity);
    info!("  Paths: {} x {} steps", args.paths, args.steps);

    let mut builder = SimulationConfig::builder()
        .n_steps(args.steps)
        .n_paths(args.paths);
    if let Some(seed) = args.seed {
        builder = builder.seed(seed);
    }
    let config = builder.build()?;

    let data = OptionData::new(args.strike, args.maturity, args.rate, args.volatility, kind)
        .with_elasticity(args.elasticity);

    let result = MonteCarloEngine::new(config).price(args.spot, &data)?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&result)?);
        return Ok(());
    }

    println!("Monte Carlo price:   {:.5}", result.price);
    println!("Standard deviation:  {:.5}", result.std_dev);
    println!("Standard error:      {:.5}", result.std_error);
    println!("Boundary hits:       {}", result.boundary_hits);

    // The lognormal case has a closed form to compare against.
    if (args.elasticity - 1.0).abs() < f64::EPSILON {
        let reference = BlackScholes::new(data)?.price(args.spot)?;
        println!("Closed-form price:   {:.5}", reference);
        println!("Absolute deviation:  {:.5}", (result.price - reference).abs());
    }

    info!("Simulation complete");
    Ok(())
}
