//! Closed-form analytic pricers.
//!
//! These are the external collaborators of the Monte Carlo engine: pure
//! formula evaluation over a final price-and-contract-parameter value,
//! with no iterative numerical method inside.
//!
//! - [`BlackScholes`]: generalised Black-Scholes (cost-of-carry form) for
//!   European calls and puts, with closed-form delta/gamma and
//!   divided-difference approximations
//! - [`PerpetualAmerican`]: closed forms for perpetual American options
//! - [`distributions`]: standard normal CDF/PDF

pub mod distributions;

mod black_scholes;
mod error;
mod perpetual;

pub use black_scholes::BlackScholes;
pub use error::AnalyticalError;
pub use perpetual::PerpetualAmerican;
