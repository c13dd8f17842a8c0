//! Grid sweeps of the closed-form pricers.
//!
//! A [`PricingMatrix`] applies one closed-form pricer cell-by-cell over
//! parallel grids of contract parameters, producing matching matrices of
//! prices, deltas and gammas. The pricer is selected with the
//! [`OptionKind`] enum and dispatched by pattern matching, so adding a
//! kind is an exhaustiveness-checked change rather than a new string
//! branch.

use thiserror::Error;

use crate::analytical::{AnalyticalError, BlackScholes, PerpetualAmerican};
use crate::instruments::{OptionData, PayoffKind};

/// Which closed-form pricer to apply per cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OptionKind {
    /// European call via generalised Black-Scholes.
    EuropeanCall,
    /// European put via generalised Black-Scholes.
    EuropeanPut,
    /// Perpetual American call closed form.
    PerpetualAmericanCall,
    /// Perpetual American put closed form.
    PerpetualAmericanPut,
}

/// Errors from matrix construction and sweeps.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum MatrixError {
    /// Parameter grids do not share the same shape.
    #[error("Parameter grid '{name}' does not match the strike grid's shape")]
    SizeMismatch {
        /// Name of the offending grid.
        name: &'static str,
    },

    /// A cell's parameters were rejected by the underlying pricer.
    #[error("Cell ({row}, {col}): {source}")]
    InvalidCell {
        /// Row index of the offending cell.
        row: usize,
        /// Column index of the offending cell.
        col: usize,
        /// The underlying validation failure.
        source: AnalyticalError,
    },
}

/// Parallel grids of contract parameters, one value per cell.
///
/// All six grids must have the same outer length and, row by row, the
/// same inner lengths; this is checked at construction.
#[derive(Debug, Clone, PartialEq)]
pub struct MatrixParameters {
    strikes: Vec<Vec<f64>>,
    rates: Vec<Vec<f64>>,
    vols: Vec<Vec<f64>>,
    maturities: Vec<Vec<f64>>,
    carries: Vec<Vec<f64>>,
    spots: Vec<Vec<f64>>,
}

impl MatrixParameters {
    /// Builds parameters from six equally-shaped grids.
    ///
    /// # Errors
    /// Returns [`MatrixError::SizeMismatch`] naming the first grid whose
    /// shape differs from the strike grid's.
    pub fn from_grids(
        strikes: Vec<Vec<f64>>,
        rates: Vec<Vec<f64>>,
        vols: Vec<Vec<f64>>,
        maturities: Vec<Vec<f64>>,
        carries: Vec<Vec<f64>>,
        spots: Vec<Vec<f64>>,
    ) -> Result<Self, MatrixError> {
        let reference = &strikes;
        for (grid, name) in [
            (&rates, "rates"),
            (&vols, "vols"),
            (&maturities, "maturities"),
            (&carries, "carries"),
            (&spots, "spots"),
        ] {
            if grid.len() != reference.len() {
                return Err(MatrixError::SizeMismatch { name });
            }
            for (row, ref_row) in grid.iter().zip(reference.iter()) {
                if row.len() != ref_row.len() {
                    return Err(MatrixError::SizeMismatch { name });
                }
            }
        }

        Ok(Self {
            strikes,
            rates,
            vols,
            maturities,
            carries,
            spots,
        })
    }

    /// Builds single-row parameters from six equally-long vectors.
    pub fn from_rows(
        strikes: Vec<f64>,
        rates: Vec<f64>,
        vols: Vec<f64>,
        maturities: Vec<f64>,
        carries: Vec<f64>,
        spots: Vec<f64>,
    ) -> Result<Self, MatrixError> {
        Self::from_grids(
            vec![strikes],
            vec![rates],
            vec![vols],
            vec![maturities],
            vec![carries],
            vec![spots],
        )
    }

    /// Returns the strike grid.
    pub fn strikes(&self) -> &[Vec<f64>] {
        &self.strikes
    }

    /// Returns the spot grid.
    pub fn spots(&self) -> &[Vec<f64>] {
        &self.spots
    }

    fn cell_data(&self, i: usize, j: usize, kind: OptionKind) -> OptionData {
        let payoff = match kind {
            OptionKind::EuropeanCall | OptionKind::PerpetualAmericanCall => PayoffKind::Call,
            OptionKind::EuropeanPut | OptionKind::PerpetualAmericanPut => PayoffKind::Put,
        };
        OptionData::new(
            self.strikes[i][j],
            self.maturities[i][j],
            self.rates[i][j],
            self.vols[i][j],
            payoff,
        )
        .with_carry(self.carries[i][j])
    }
}

/// Applies one closed-form pricer over a [`MatrixParameters`] grid.
///
/// # Examples
/// ```
/// use mc_models::matrix::{MatrixParameters, OptionKind, PricingMatrix};
///
/// let params = MatrixParameters::from_rows(
///     vec![65.0, 100.0],
///     vec![0.08, 0.0],
///     vec![0.30, 0.2],
///     vec![0.25, 1.0],
///     vec![0.08, 0.0],
///     vec![60.0, 100.0],
/// )
/// .unwrap();
///
/// let matrix = PricingMatrix::new(params, OptionKind::EuropeanCall);
/// let prices = matrix.prices().unwrap();
/// assert!((prices[0][0] - 2.13337).abs() < 1e-4);
/// assert!((prices[0][1] - 7.96557).abs() < 1e-4);
/// ```
#[derive(Debug, Clone)]
pub struct PricingMatrix {
    params: MatrixParameters,
    kind: OptionKind,
}

impl PricingMatrix {
    /// Pairs a parameter grid with a pricer kind.
    pub fn new(params: MatrixParameters, kind: OptionKind) -> Self {
        Self { params, kind }
    }

    /// Returns the selected kind.
    pub fn kind(&self) -> OptionKind {
        self.kind
    }

    fn sweep<F>(&self, mut f: F) -> Result<Vec<Vec<f64>>, MatrixError>
    where
        F: FnMut(OptionData, f64) -> Result<f64, AnalyticalError>,
    {
        let mut out = Vec::with_capacity(self.params.strikes().len());
        for (i, row) in self.params.strikes().iter().enumerate() {
            let mut out_row = Vec::with_capacity(row.len());
            for j in 0..row.len() {
                let data = self.params.cell_data(i, j, self.kind);
                let spot = self.params.spots[i][j];
                let value = f(data, spot).map_err(|source| MatrixError::InvalidCell {
                    row: i,
                    col: j,
                    source,
                })?;
                out_row.push(value);
            }
            out.push(out_row);
        }
        Ok(out)
    }

    /// Computes the price matrix.
    pub fn prices(&self) -> Result<Vec<Vec<f64>>, MatrixError> {
        let kind = self.kind;
        self.sweep(|data, spot| match kind {
            OptionKind::EuropeanCall | OptionKind::EuropeanPut => {
                BlackScholes::new(data)?.price(spot)
            }
            OptionKind::PerpetualAmericanCall | OptionKind::PerpetualAmericanPut => {
                PerpetualAmerican::new(data)?.price(spot)
            }
        })
    }

    /// Computes the delta matrix.
    ///
    /// European kinds use the closed-form delta; perpetual kinds, which
    /// have no closed-form Greek here, use the central divided difference
    /// with bump width `h`.
    pub fn deltas(&self, h: f64) -> Result<Vec<Vec<f64>>, MatrixError> {
        let kind = self.kind;
        self.sweep(|data, spot| match kind {
            OptionKind::EuropeanCall | OptionKind::EuropeanPut => {
                BlackScholes::new(data)?.delta(spot)
            }
            OptionKind::PerpetualAmericanCall | OptionKind::PerpetualAmericanPut => {
                PerpetualAmerican::new(data)?.divided_difference_delta(spot, h)
            }
        })
    }

    /// Computes the gamma matrix; same dispatch rule as
    /// [`deltas`](Self::deltas).
    pub fn gammas(&self, h: f64) -> Result<Vec<Vec<f64>>, MatrixError> {
        let kind = self.kind;
        self.sweep(|data, spot| match kind {
            OptionKind::EuropeanCall | OptionKind::EuropeanPut => {
                BlackScholes::new(data)?.gamma(spot)
            }
            OptionKind::PerpetualAmericanCall | OptionKind::PerpetualAmericanPut => {
                PerpetualAmerican::new(data)?.divided_difference_gamma(spot, h)
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn two_cell_params() -> MatrixParameters {
        MatrixParameters::from_rows(
            vec![65.0, 100.0],
            vec![0.08, 0.0],
            vec![0.30, 0.2],
            vec![0.25, 1.0],
            vec![0.08, 0.0],
            vec![60.0, 100.0],
        )
        .unwrap()
    }

    #[test]
    fn test_size_mismatch_outer() {
        let result = MatrixParameters::from_grids(
            vec![vec![100.0]],
            vec![vec![0.05]],
            vec![vec![0.2]],
            vec![vec![1.0]],
            vec![vec![0.05]],
            vec![vec![100.0], vec![90.0]],
        );
        assert_eq!(result, Err(MatrixError::SizeMismatch { name: "spots" }));
    }

    #[test]
    fn test_size_mismatch_inner() {
        let result = MatrixParameters::from_grids(
            vec![vec![100.0, 95.0]],
            vec![vec![0.05]],
            vec![vec![0.2, 0.2]],
            vec![vec![1.0, 1.0]],
            vec![vec![0.05, 0.05]],
            vec![vec![100.0, 100.0]],
        );
        assert_eq!(result, Err(MatrixError::SizeMismatch { name: "rates" }));
    }

    #[test]
    fn test_european_call_price_sweep() {
        let matrix = PricingMatrix::new(two_cell_params(), OptionKind::EuropeanCall);
        let prices = matrix.prices().unwrap();
        assert_relative_eq!(prices[0][0], 2.13337, epsilon = 1e-4);
        assert_relative_eq!(prices[0][1], 7.96557, epsilon = 1e-4);
    }

    #[test]
    fn test_european_put_price_sweep() {
        let matrix = PricingMatrix::new(two_cell_params(), OptionKind::EuropeanPut);
        let prices = matrix.prices().unwrap();
        assert_relative_eq!(prices[0][0], 5.84628, epsilon = 1e-4);
        assert_relative_eq!(prices[0][1], 7.96557, epsilon = 1e-4);
    }

    #[test]
    fn test_delta_matrix_signs() {
        let calls = PricingMatrix::new(two_cell_params(), OptionKind::EuropeanCall);
        let puts = PricingMatrix::new(two_cell_params(), OptionKind::EuropeanPut);
        for d in calls.deltas(0.01).unwrap()[0].iter() {
            assert!(*d > 0.0 && *d < 1.0);
        }
        for d in puts.deltas(0.01).unwrap()[0].iter() {
            assert!(*d < 0.0 && *d > -1.0);
        }
    }

    #[test]
    fn test_gamma_matrix_positive() {
        let matrix = PricingMatrix::new(two_cell_params(), OptionKind::EuropeanCall);
        for g in matrix.gammas(0.01).unwrap()[0].iter() {
            assert!(*g > 0.0);
        }
    }

    #[test]
    fn test_perpetual_sweep() {
        let params = MatrixParameters::from_rows(
            vec![100.0],
            vec![0.1],
            vec![0.1],
            vec![0.0], // maturity ignored by the perpetual closed form
            vec![0.02],
            vec![110.0],
        )
        .unwrap();

        let calls = PricingMatrix::new(params.clone(), OptionKind::PerpetualAmericanCall);
        assert_relative_eq!(calls.prices().unwrap()[0][0], 18.5035, epsilon = 1e-3);

        let puts = PricingMatrix::new(params, OptionKind::PerpetualAmericanPut);
        assert_relative_eq!(puts.prices().unwrap()[0][0], 3.03106, epsilon = 1e-3);
    }

    #[test]
    fn test_invalid_cell_reported_with_position() {
        let params = MatrixParameters::from_rows(
            vec![100.0, 100.0],
            vec![0.05, 0.05],
            vec![0.2, -0.2], // bad volatility in column 1
            vec![1.0, 1.0],
            vec![0.05, 0.05],
            vec![100.0, 100.0],
        )
        .unwrap();

        let matrix = PricingMatrix::new(params, OptionKind::EuropeanCall);
        match matrix.prices() {
            Err(MatrixError::InvalidCell { row: 0, col: 1, .. }) => {}
            other => panic!("expected InvalidCell at (0, 1), got {:?}", other),
        }
    }
}
