//! Error types for structured error handling.
//!
//! This module provides:
//! - `CoreError`: errors from foundational type construction

use thiserror::Error;

/// Categorised construction errors for core types.
///
/// These errors occur when a type invariant cannot be established from the
/// supplied inputs. They are rejected at construction, never silently
/// coerced into a "nearby" valid value.
///
/// # Examples
/// ```
/// use mc_core::types::CoreError;
///
/// let err = CoreError::DegenerateGrid { steps: 0 };
/// assert!(format!("{}", err).contains("step count"));
/// ```
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum CoreError {
    /// Grid step count must be at least 1.
    #[error("Invalid step count {steps}: a time grid needs at least 1 step")]
    DegenerateGrid {
        /// The rejected step count.
        steps: i64,
    },

    /// A bound was not finite (NaN or infinite).
    #[error("Non-finite bound supplied for '{name}'")]
    NonFiniteBound {
        /// Name of the offending bound.
        name: &'static str,
    },
}
