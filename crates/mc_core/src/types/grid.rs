//! Uniform time-discretisation mesh.
//!
//! A [`TimeGrid`] is the ordered sequence of points the path integrator
//! walks over: `n_steps + 1` points spanning an [`Interval`] inclusive of
//! both endpoints, with uniform spacing `h = spread / n_steps`.

use num_traits::Float;

use super::{CoreError, Interval};

/// A uniform mesh over an interval.
///
/// Built once per simulation run and shared read-only across all paths.
///
/// # Numerical note
///
/// Each point is computed as `low + i * h` (index multiplication) rather
/// than by repeated addition of `h`. Repeated addition accumulates
/// floating-point drift linearly with the index; the multiplicative form
/// keeps `point[0] == low` exactly and `point[n] == high` to within one
/// ulp of the arithmetic.
///
/// # Examples
/// ```
/// use mc_core::{Interval, TimeGrid};
///
/// let grid = TimeGrid::new(Interval::new(0.0_f64, 1.0), 5).unwrap();
/// assert_eq!(grid.len(), 6);
/// assert_eq!(grid.points()[0], 0.0);
/// assert!((grid.points()[5] - 1.0).abs() < 1e-12);
/// assert!((grid.step() - 0.2).abs() < 1e-12);
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct TimeGrid<T: Float> {
    points: Vec<T>,
    step: T,
}

impl<T: Float> TimeGrid<T> {
    /// Builds the mesh from an interval and a step count.
    ///
    /// # Arguments
    /// * `interval` - The span to discretise (typically `[0, T]`)
    /// * `n_steps` - Number of subintervals; the mesh has `n_steps + 1`
    ///   points
    ///
    /// # Errors
    /// Returns [`CoreError::DegenerateGrid`] when `n_steps < 1`.
    pub fn new(interval: Interval<T>, n_steps: usize) -> Result<Self, CoreError> {
        if n_steps < 1 {
            return Err(CoreError::DegenerateGrid {
                steps: n_steps as i64,
            });
        }

        let n = T::from(n_steps).ok_or(CoreError::NonFiniteBound { name: "n_steps" })?;
        let h = interval.spread() / n;

        let mut points = Vec::with_capacity(n_steps + 1);
        for i in 0..=n_steps {
            let idx = T::from(i).unwrap_or_else(T::zero);
            points.push(interval.low() + idx * h);
        }

        Ok(Self { points, step: h })
    }

    /// Returns the mesh points, `low` first and `high` last.
    #[inline]
    pub fn points(&self) -> &[T] {
        &self.points
    }

    /// Returns the uniform spacing `h = spread / n_steps`.
    #[inline]
    pub fn step(&self) -> T {
        self.step
    }

    /// Returns the number of points (`n_steps + 1`).
    #[inline]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// A mesh always carries at least two points.
    #[inline]
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Returns the number of subintervals (`len() - 1`).
    #[inline]
    pub fn n_steps(&self) -> usize {
        self.points.len() - 1
    }
}
