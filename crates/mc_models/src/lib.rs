//! # MC Models (Contract layer)
//!
//! Financial contract data, the stochastic process driving the Monte Carlo
//! engine, and the closed-form pricers used as external collaborators.
//!
//! This crate provides:
//! - Contract definitions ([`instruments::OptionData`], [`instruments::PayoffKind`])
//! - The CEV drift/diffusion definition ([`process::CevProcess`])
//! - Analytical formulas for validation and reporting ([`analytical`])
//! - Grid sweeps of the closed forms ([`matrix`])
//!
//! ## Design Principles
//!
//! - **Enum-based option kinds** for static dispatch; no string-keyed
//!   branching
//! - **Explicit parameter passing**: process coefficients are pure
//!   functions of `(t, x)` and an immutable parameter record

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]

pub mod analytical;
pub mod instruments;
pub mod matrix;
pub mod process;

pub use instruments::{OptionData, PayoffKind};
pub use process::CevProcess;
