//! # MC Core (Foundation layer)
//!
//! Foundational types shared by every layer of the eulermc workspace:
//!
//! - [`types::Interval`]: an ordered pair of bounds with a normalising
//!   constructor
//! - [`types::TimeGrid`]: the uniform discretisation mesh consumed by the
//!   path integrator
//! - [`types::CoreError`]: structured construction errors
//!
//! ## Design Principles
//!
//! - **Generic Float type**: types are generic over `T: Float` so `f32`
//!   and `f64` both work
//! - **Reject, never coerce**: degenerate configurations (a zero-step
//!   grid) fail at construction with a descriptive error

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]

pub mod types;

pub use types::{CoreError, Interval, TimeGrid};
