//! # Quant Engine: The Pricing Boundary
//!
//! The single integration point an external transport layer calls:
//!
//! - [`compute_price`] dispatches a [`PricingRequest`] to the closed-form
//!   Black-Scholes pricer or the CRR binomial lattice, purely on the
//!   requested method
//! - [`ImpliedVolSolver`] inverts an observed market price into the
//!   volatility that reproduces it, by bisection over a bounded bracket
//!
//! Every operation is a pure synchronous function of its inputs: no state
//! survives a call, nothing is cached, nothing is logged. Failures come back
//! as [`EngineError`] values whose [`ErrorKind`] the caller maps onto its own
//! transport statuses.
//!
//! ## Usage Example
//!
//! ```rust
//! use quant_engine::{compute_price, PricingRequest};
//! use quant_models::instruments::{MarketState, OptionContract, OptionType};
//!
//! let contract = OptionContract::new(100.0, 1.0, OptionType::Call).unwrap();
//! let market = MarketState::new(100.0, 0.05, 0.2).unwrap();
//!
//! let result = compute_price(&PricingRequest::black_scholes(contract, market)).unwrap();
//! assert!((result.value - 10.4506).abs() < 1e-3);
//! ```

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]

mod engine;
mod error;
mod implied_vol;
mod request;

pub use engine::compute_price;
pub use error::{EngineError, ErrorKind};
pub use implied_vol::{solve_implied_volatility, ImpliedVolConfig, ImpliedVolSolver};
pub use request::{PriceResult, PricingMethod, PricingRequest, VolatilityRequest};
