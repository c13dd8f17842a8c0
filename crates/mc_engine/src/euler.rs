//! Euler-Maruyama path integration.
//!
//! This module advances one path of the SDE `dS = a(t, S) dt + b(t, S) dW`
//! over a shared uniform [`TimeGrid`] with the explicit recurrence
//!
//! ```text
//! S_new = S_old + k * a(t_old, S_old) + sqrt(k) * b(t_old, S_old) * dW
//! ```
//!
//! drawing exactly one N(0, 1) variate per step.

use mc_core::TimeGrid;
use mc_models::CevProcess;

use crate::rng::NormalSource;

/// Result of integrating a single path to mesh exhaustion.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PathOutcome {
    /// The level at the final grid point.
    pub terminal: f64,
    /// Number of steps whose updated level was non-positive.
    pub boundary_hits: u64,
}

/// Advances paths of a process over a shared time grid.
///
/// The integrator borrows the grid, so one mesh serves every path of a
/// simulation. `sqrt(k)` is computed once at construction rather than per
/// step.
///
/// A non-positive level is a known artefact of discretising the CEV
/// process near the origin. The integrator counts these excursions and
/// carries on; it never clamps the level or abandons the path, so the
/// caller can surface the count as a diagnostic.
///
/// # Examples
///
/// ```rust
/// use mc_core::{Interval, TimeGrid};
/// use mc_engine::euler::PathIntegrator;
/// use mc_engine::rng::FixedNormalSource;
/// use mc_models::{CevProcess, OptionData, PayoffKind};
///
/// let grid = TimeGrid::new(Interval::new(0.0, 1.0), 100).unwrap();
/// let integrator = PathIntegrator::new(&grid);
///
/// let data = OptionData::new(100.0, 1.0, 0.05, 0.2, PayoffKind::Call);
/// let process = CevProcess::new(&data);
///
/// // With no noise the path follows the discretised drift alone.
/// let mut source = FixedNormalSource::zeros();
/// let outcome = integrator.integrate(&process, 100.0, &mut source);
/// assert!(outcome.terminal > 100.0);
/// assert_eq!(outcome.boundary_hits, 0);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct PathIntegrator<'a> {
    grid: &'a TimeGrid<f64>,
    step: f64,
    sqrt_step: f64,
}

impl<'a> PathIntegrator<'a> {
    /// Binds the integrator to a time grid.
    pub fn new(grid: &'a TimeGrid<f64>) -> Self {
        let step = grid.step();
        Self {
            grid,
            step,
            sqrt_step: step.sqrt(),
        }
    }

    /// Returns the grid this integrator walks.
    #[inline]
    pub fn grid(&self) -> &TimeGrid<f64> {
        self.grid
    }

    /// Integrates one path from `spot` at the first grid point to the
    /// last, drawing one variate per step from `source`.
    pub fn integrate<S: NormalSource>(
        &self,
        process: &CevProcess<'_>,
        spot: f64,
        source: &mut S,
    ) -> PathOutcome {
        let mut level = spot;
        let mut boundary_hits = 0u64;

        // Coefficients are evaluated at the left endpoint of each step.
        let points = self.grid.points();
        for window in points.windows(2) {
            let t_old = window[0];
            let dw = source.next_normal();
            level += self.step * process.drift(t_old, level)
                + self.sqrt_step * process.diffusion(t_old, level) * dw;
            if level <= 0.0 {
                boundary_hits += 1;
            }
        }

        PathOutcome {
            terminal: level,
            boundary_hits,
        }
    }
}
