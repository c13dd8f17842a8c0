//! Core type definitions.
//!
//! This module provides:
//! - [`Interval`]: ordered bounds with normalisation on construction
//! - [`TimeGrid`]: the uniform time-discretisation mesh
//! - [`CoreError`]: construction-time errors

mod error;
mod grid;
mod interval;

pub use error::CoreError;
pub use grid::TimeGrid;
pub use interval::Interval;
