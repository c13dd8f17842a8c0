//! Matrix command implementation
//!
//! Sweeps one closed-form pricer across a row of spots and prints the
//! price, delta and gamma per cell.

use tracing::info;

use mc_models::matrix::{MatrixParameters, OptionKind, PricingMatrix};

use crate::{CliError, MatrixArgs, MatrixKindArg, Result};

/// Bump width for the divided-difference Greeks of the perpetual kinds.
const GREEK_BUMP: f64 = 0.01;

/// Run the matrix command
pub fn run(args: &MatrixArgs) -> Result<()> {
    if args.cells == 0 {
        return Err(CliError::InvalidArgument(
            "cells must be at least 1".to_string(),
        ));
    }
    if args.spot_high < args.spot_low {
        return Err(CliError::InvalidArgument(format!(
            "spot range is inverted: [{}, {}]",
            args.spot_low, args.spot_high
        )));
    }

    let kind = match args.kind {
        MatrixKindArg::EuropeanCall => OptionKind::EuropeanCall,
        MatrixKindArg::EuropeanPut => OptionKind::EuropeanPut,
        MatrixKindArg::PerpetualCall => OptionKind::PerpetualAmericanCall,
        MatrixKindArg::PerpetualPut => OptionKind::PerpetualAmericanPut,
    };

    info!("Sweeping {:?} over {} spots", kind, args.cells);

    let spots: Vec<f64> = if args.cells == 1 {
        vec![args.spot_low]
    } else {
        let h = (args.spot_high - args.spot_low) / (args.cells - 1) as f64;
        (0..args.cells)
            .map(|i| args.spot_low + i as f64 * h)
            .collect()
    };

    let n = spots.len();
    let params = MatrixParameters::from_rows(
        vec![args.strike; n],
        vec![args.rate; n],
        vec![args.volatility; n],
        vec![args.maturity; n],
        vec![args.rate; n], // carry b = r (no dividend yield)
        spots.clone(),
    )?;

    let matrix = PricingMatrix::new(params, kind);
    let prices = matrix.prices()?;
    let deltas = matrix.deltas(GREEK_BUMP)?;
    let gammas = matrix.gammas(GREEK_BUMP)?;

    println!("\n┌────────────┬────────────┬────────────┬────────────┐");
    println!("│ Spot       │ Price      │ Delta      │ Gamma      │");
    println!("├────────────┼────────────┼────────────┼────────────┤");
    for (i, spot) in spots.iter().enumerate() {
        println!(
            "│ {:>10.4} │ {:>10.5} │ {:>10.5} │ {:>10.5} │",
            spot, prices[0][i], deltas[0][i], gammas[0][i]
        );
    }
    println!("└────────────┴────────────┴────────────┴────────────┘");

    info!("Sweep complete");
    Ok(())
}
