//! Contract definitions.
//!
//! This module provides:
//! - [`OptionData`]: the immutable parameter record for one contract
//! - [`PayoffKind`]: call/put discriminant with pattern-matched payoff
//!   evaluation

mod option_data;

pub use option_data::{OptionData, PayoffKind};
