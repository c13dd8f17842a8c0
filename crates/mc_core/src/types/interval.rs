//! Ordered interval type.
//!
//! An [`Interval`] is an ordered pair `(low, high)` with `low <= high`
//! guaranteed by the constructor: the two inputs are sorted, so the larger
//! one always becomes `high`.

use num_traits::Float;

/// An ordered pair of bounds with `low <= high`.
///
/// The parameter constructor normalises its inputs, so
/// `Interval::new(1.0, 0.0)` and `Interval::new(0.0, 1.0)` describe the
/// same interval.
///
/// # Partial setters
///
/// [`set_low`](Interval::set_low) and [`set_high`](Interval::set_high)
/// overwrite a single bound **without** re-sorting. Callers using them are
/// responsible for keeping `low <= high`; this matches the behaviour of
/// explicit single-bound mutation and keeps the setters cheap and
/// predictable.
///
/// # Examples
/// ```
/// use mc_core::Interval;
///
/// let iv = Interval::new(1.0_f64, 0.0);
/// assert_eq!(iv.low(), 0.0);
/// assert_eq!(iv.high(), 1.0);
/// assert_eq!(iv.spread(), 1.0);
/// assert!(iv.contains(0.5));
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Interval<T: Float> {
    low: T,
    high: T,
}

impl<T: Float> Interval<T> {
    /// Creates an interval from two bounds, sorting them so that the
    /// larger becomes `high`.
    pub fn new(a: T, b: T) -> Self {
        if a < b {
            Self { low: a, high: b }
        } else {
            Self { low: b, high: a }
        }
    }

    /// Returns the lower bound.
    #[inline]
    pub fn low(&self) -> T {
        self.low
    }

    /// Returns the upper bound.
    #[inline]
    pub fn high(&self) -> T {
        self.high
    }

    /// Returns `high - low`. Non-negative by the constructor invariant.
    #[inline]
    pub fn spread(&self) -> T {
        self.high - self.low
    }

    /// Overwrites the lower bound. Does not re-sort.
    #[inline]
    pub fn set_low(&mut self, low: T) {
        self.low = low;
    }

    /// Overwrites the upper bound. Does not re-sort.
    #[inline]
    pub fn set_high(&mut self, high: T) {
        self.high = high;
    }

    /// Is `value` strictly to the left of the interval?
    #[inline]
    pub fn left(&self, value: T) -> bool {
        value < self.low
    }

    /// Is `value` strictly to the right of the interval?
    #[inline]
    pub fn right(&self, value: T) -> bool {
        value > self.high
    }

    /// Does the closed interval contain `value`?
    #[inline]
    pub fn contains(&self, value: T) -> bool {
        self.low <= value && value <= self.high
    }
}

impl<T: Float> Default for Interval<T> {
    fn default() -> Self {
        Self {
            low: T::zero(),
            high: T::zero(),
        }
    }
}
