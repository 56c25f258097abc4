//! The engine error taxonomy.
//!
//! Every failure the engine can produce is classified at the point of
//! computation into one of four kinds and returned to the immediate caller.
//! The engine never logs, retries, or falls back between pricing methods;
//! presentation is entirely the calling layer's concern.

use quant_models::instruments::InstrumentError;
use quant_models::lattice::LatticeError;
use thiserror::Error;

/// Errors returned across the engine boundary.
///
/// # Variants
/// - `InvalidParameter`: a structural precondition is violated; always
///   detectable before any numeric work begins
/// - `ArbitrageViolation`: lattice parameters imply a risk-neutral
///   probability outside [0, 1]
/// - `OutOfRange`: observed price for implied-volatility inversion lies
///   outside the achievable band
/// - `ConvergenceFailure`: root-finder exhausted its iteration budget
///
/// # Examples
/// ```
/// use quant_engine::{EngineError, ErrorKind};
///
/// let err = EngineError::ConvergenceFailure { iterations: 100 };
/// assert_eq!(err.kind(), ErrorKind::ConvergenceFailure);
/// ```
#[derive(Error, Debug, Clone, PartialEq)]
pub enum EngineError {
    /// A structural precondition is violated.
    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),

    /// Lattice parameters are inconsistent with a no-arbitrage model.
    #[error("Arbitrage violation: risk-neutral probability p = {probability} outside [0, 1]")]
    ArbitrageViolation {
        /// The offending risk-neutral probability
        probability: f64,
    },

    /// Observed price lies outside the achievable band for the contract.
    #[error("Observed price {observed} outside achievable band ({min}, {max})")]
    OutOfRange {
        /// The observed price that was requested
        observed: f64,
        /// Lower edge of the band (σ → 0 discounted intrinsic value)
        min: f64,
        /// Upper edge of the band (price at the volatility ceiling)
        max: f64,
    },

    /// Root-finder exhausted its iteration budget without meeting tolerance.
    ///
    /// Distinct from `OutOfRange`: the target may be in-range but numerically
    /// ill-conditioned.
    #[error("Implied volatility search failed to converge after {iterations} iterations")]
    ConvergenceFailure {
        /// Number of iterations attempted
        iterations: usize,
    },
}

/// Stable discriminant for transport-layer mapping.
///
/// A caller typically maps `InvalidParameter`/`OutOfRange` to client errors
/// and `ArbitrageViolation`/`ConvergenceFailure` to server errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum ErrorKind {
    /// Structural precondition violated.
    InvalidParameter,
    /// Risk-neutral probability outside [0, 1].
    ArbitrageViolation,
    /// Observed price outside the achievable band.
    OutOfRange,
    /// Iteration budget exhausted.
    ConvergenceFailure,
}

impl EngineError {
    /// The kind of this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            EngineError::InvalidParameter(_) => ErrorKind::InvalidParameter,
            EngineError::ArbitrageViolation { .. } => ErrorKind::ArbitrageViolation,
            EngineError::OutOfRange { .. } => ErrorKind::OutOfRange,
            EngineError::ConvergenceFailure { .. } => ErrorKind::ConvergenceFailure,
        }
    }
}

impl From<InstrumentError> for EngineError {
    fn from(err: InstrumentError) -> Self {
        EngineError::InvalidParameter(err.to_string())
    }
}

impl From<LatticeError> for EngineError {
    fn from(err: LatticeError) -> Self {
        match err {
            LatticeError::InvalidStepCount { .. } => {
                EngineError::InvalidParameter(err.to_string())
            }
            LatticeError::ArbitrageViolation { probability } => {
                EngineError::ArbitrageViolation { probability }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_parameter_display() {
        let err = EngineError::InvalidParameter("expiry must be positive".to_string());
        assert_eq!(format!("{}", err), "Invalid parameter: expiry must be positive");
    }

    #[test]
    fn test_out_of_range_display() {
        let err = EngineError::OutOfRange {
            observed: 0.0,
            min: 0.0,
            max: 99.3,
        };
        assert_eq!(
            format!("{}", err),
            "Observed price 0 outside achievable band (0, 99.3)"
        );
    }

    #[test]
    fn test_kind_mapping() {
        assert_eq!(
            EngineError::InvalidParameter("x".to_string()).kind(),
            ErrorKind::InvalidParameter
        );
        assert_eq!(
            EngineError::ArbitrageViolation { probability: 1.5 }.kind(),
            ErrorKind::ArbitrageViolation
        );
        assert_eq!(
            EngineError::OutOfRange {
                observed: 1.0,
                min: 2.0,
                max: 3.0
            }
            .kind(),
            ErrorKind::OutOfRange
        );
        assert_eq!(
            EngineError::ConvergenceFailure { iterations: 100 }.kind(),
            ErrorKind::ConvergenceFailure
        );
    }

    #[test]
    fn test_from_instrument_error() {
        let err: EngineError = InstrumentError::InvalidExpiry { expiry: 0.0 }.into();
        assert_eq!(err.kind(), ErrorKind::InvalidParameter);
        assert!(format!("{}", err).contains("T = 0"));
    }

    #[test]
    fn test_from_lattice_step_count() {
        let err: EngineError = LatticeError::InvalidStepCount { steps: 0 }.into();
        assert_eq!(err.kind(), ErrorKind::InvalidParameter);
    }

    #[test]
    fn test_from_lattice_arbitrage_violation() {
        let err: EngineError = LatticeError::ArbitrageViolation { probability: 1.2 }.into();
        match err {
            EngineError::ArbitrageViolation { probability } => assert_eq!(probability, 1.2),
            other => panic!("Expected ArbitrageViolation, got {:?}", other),
        }
    }

    #[test]
    fn test_error_trait_implementation() {
        let err = EngineError::ConvergenceFailure { iterations: 100 };
        let _: &dyn std::error::Error = &err;
    }
}
