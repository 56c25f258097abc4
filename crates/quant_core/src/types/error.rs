//! Error types for structured error handling.

use thiserror::Error;

/// Root-finding solver errors.
///
/// # Variants
/// - `NoBracket`: function values at the bracket endpoints have the same sign
/// - `MaxIterationsExceeded`: solver failed to converge within its budget
///
/// # Examples
/// ```
/// use quant_core::types::SolverError;
///
/// let err = SolverError::MaxIterationsExceeded { iterations: 100 };
/// assert!(format!("{}", err).contains("100 iterations"));
/// ```
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SolverError {
    /// No valid bracket (function values at endpoints have the same sign).
    #[error("No bracket: f({a}) and f({b}) have same sign")]
    NoBracket {
        /// Left bracket endpoint
        a: f64,
        /// Right bracket endpoint
        b: f64,
    },

    /// Solver failed to converge within maximum iterations.
    #[error("Failed to converge after {iterations} iterations")]
    MaxIterationsExceeded {
        /// Number of iterations attempted
        iterations: usize,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_bracket_display() {
        let err = SolverError::NoBracket { a: 0.0, b: 1.0 };
        assert_eq!(
            format!("{}", err),
            "No bracket: f(0) and f(1) have same sign"
        );
    }

    #[test]
    fn test_max_iterations_display() {
        let err = SolverError::MaxIterationsExceeded { iterations: 100 };
        assert_eq!(
            format!("{}", err),
            "Failed to converge after 100 iterations"
        );
    }

    #[test]
    fn test_error_trait_implementation() {
        let err = SolverError::NoBracket { a: 0.0, b: 1.0 };
        let _: &dyn std::error::Error = &err;
    }

    #[test]
    fn test_clone_and_equality() {
        let err1 = SolverError::MaxIterationsExceeded { iterations: 50 };
        let err2 = err1.clone();
        assert_eq!(err1, err2);
    }
}
