//! Bracketed root-finding solvers.
//!
//! Provides the bisection solver used for implied volatility inversion,
//! together with its shared configuration type.

mod bisection;
mod config;

pub use bisection::BisectionSolver;
pub use config::SolverConfig;
