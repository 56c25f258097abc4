//! # quant_core: Numerical Foundation for the Pricing Engine
//!
//! Bottom layer of the workspace, providing:
//! - Standard normal distribution functions (`math::distributions`)
//! - Bracketed root-finding solvers (`math::solvers`)
//! - Descriptive statistics primitives (`math::statistics`)
//! - Solver error types (`types::error`)
//!
//! ## Zero Dependency Principle
//!
//! This crate has no dependencies on other `quant_*` crates, with minimal
//! external dependencies:
//! - num-traits: traits for generic numerical computation
//! - libm: double-precision error function behind the normal CDF
//! - thiserror: structured error types
//!
//! ## Usage Example
//!
//! ```rust
//! use quant_core::math::distributions::norm_cdf;
//! use quant_core::math::solvers::{BisectionSolver, SolverConfig};
//!
//! assert!((norm_cdf(0.0) - 0.5).abs() < 1e-12);
//!
//! let solver = BisectionSolver::new(SolverConfig::default());
//! let root = solver.find_root(|x: f64| x * x - 2.0, 0.0, 2.0).unwrap();
//! assert!((root - std::f64::consts::SQRT_2).abs() < 1e-9);
//! ```

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]

pub mod math;
pub mod types;
