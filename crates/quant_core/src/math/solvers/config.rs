//! Solver configuration types.

use num_traits::Float;

/// Configuration for root-finding algorithms.
///
/// # Type Parameters
///
/// * `T` - Floating-point type for the tolerance (e.g., `f64`)
///
/// # Example
///
/// ```
/// use quant_core::math::solvers::SolverConfig;
///
/// let config: SolverConfig<f64> = SolverConfig::default();
/// assert!(config.tolerance < 1e-8);
/// assert!(config.max_iterations >= 50);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SolverConfig<T: Float> {
    /// Convergence tolerance.
    ///
    /// The bisection solver stops once the bracket half-width falls below
    /// this value; the returned root is therefore within `tolerance` of the
    /// true root.
    pub tolerance: T,

    /// Maximum number of iterations before giving up.
    ///
    /// Exceeding this limit yields `SolverError::MaxIterationsExceeded`.
    /// This is the mandatory termination guard for pathological inputs.
    pub max_iterations: usize,
}

impl<T: Float> Default for SolverConfig<T> {
    /// Default configuration: tolerance 1e-10, 100 iterations.
    fn default() -> Self {
        Self {
            tolerance: T::from(1e-10).unwrap(),
            max_iterations: 100,
        }
    }
}

impl<T: Float> SolverConfig<T> {
    /// Create a new configuration with specified values.
    ///
    /// # Panics
    ///
    /// Panics if `tolerance <= 0` or `max_iterations == 0`.
    ///
    /// # Example
    ///
    /// ```
    /// use quant_core::math::solvers::SolverConfig;
    ///
    /// let config = SolverConfig::new(1e-12, 200);
    /// assert_eq!(config.max_iterations, 200);
    /// ```
    pub fn new(tolerance: T, max_iterations: usize) -> Self {
        assert!(tolerance > T::zero(), "tolerance must be positive");
        assert!(max_iterations > 0, "max_iterations must be > 0");
        Self {
            tolerance,
            max_iterations,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config: SolverConfig<f64> = SolverConfig::default();
        assert!((config.tolerance - 1e-10).abs() < 1e-15);
        assert_eq!(config.max_iterations, 100);
    }

    #[test]
    fn test_new_config() {
        let config: SolverConfig<f64> = SolverConfig::new(1e-12, 200);
        assert!((config.tolerance - 1e-12).abs() < 1e-17);
        assert_eq!(config.max_iterations, 200);
    }

    #[test]
    #[should_panic(expected = "tolerance must be positive")]
    fn test_zero_tolerance_panics() {
        let _: SolverConfig<f64> = SolverConfig::new(0.0, 100);
    }

    #[test]
    #[should_panic(expected = "max_iterations must be > 0")]
    fn test_zero_iterations_panics() {
        let _: SolverConfig<f64> = SolverConfig::new(1e-10, 0);
    }

    #[test]
    fn test_config_copy() {
        let config1: SolverConfig<f64> = SolverConfig::default();
        let config2 = config1;
        assert_eq!(config1, config2);
    }
}
