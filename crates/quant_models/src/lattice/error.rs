//! Error types for lattice pricing.

use thiserror::Error;

/// Binomial lattice pricing errors.
///
/// # Variants
/// - `InvalidStepCount`: zero lattice steps requested
/// - `ArbitrageViolation`: risk-neutral up-probability outside [0, 1]
///
/// # Examples
/// ```
/// use quant_models::lattice::LatticeError;
///
/// let err = LatticeError::ArbitrageViolation { probability: 1.2 };
/// assert!(format!("{}", err).contains("1.2"));
/// ```
#[derive(Error, Debug, Clone, Copy, PartialEq)]
pub enum LatticeError {
    /// Step count must be at least 1.
    #[error("Invalid step count: N = {steps}")]
    InvalidStepCount {
        /// The invalid step count
        steps: u32,
    },

    /// Risk-neutral up-probability fell outside [0, 1].
    ///
    /// Signals a (σ, r, Δt) combination inconsistent with a no-arbitrage
    /// lattice. Surfaced as-is, never clamped.
    #[error("Arbitrage violation: risk-neutral probability p = {probability} outside [0, 1]")]
    ArbitrageViolation {
        /// The offending probability value
        probability: f64,
    },
}
