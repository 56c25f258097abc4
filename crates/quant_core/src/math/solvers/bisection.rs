//! Bisection root-finding solver.

use super::SolverConfig;
use crate::types::SolverError;
use num_traits::Float;

/// Bisection root finder.
///
/// Halves a sign-changing bracket until its half-width falls below the
/// configured tolerance. Slower than interpolating methods but guaranteed to
/// converge for any continuous function with a valid bracket, which is the
/// correctness argument the implied volatility inversion relies on: the
/// objective there is monotone, so the bracketed root is unique and bisection
/// cannot escape it.
///
/// # Type Parameters
///
/// * `T` - Floating-point type (e.g., `f64`)
///
/// # Example
///
/// ```
/// use quant_core::math::solvers::{BisectionSolver, SolverConfig};
///
/// let solver = BisectionSolver::new(SolverConfig::default());
///
/// // Solve x³ - x - 2 = 0 in bracket [1, 2]
/// let f = |x: f64| x * x * x - x - 2.0;
///
/// let root = solver.find_root(f, 1.0, 2.0).unwrap();
/// assert!(f(root).abs() < 1e-8);
/// ```
#[derive(Debug, Clone)]
pub struct BisectionSolver<T: Float> {
    config: SolverConfig<T>,
}

impl<T: Float> BisectionSolver<T> {
    /// Create a new bisection solver with the given configuration.
    pub fn new(config: SolverConfig<T>) -> Self {
        Self { config }
    }

    /// Create a solver with default configuration.
    pub fn with_defaults() -> Self {
        Self {
            config: SolverConfig::default(),
        }
    }

    /// Find a root of `f` in the bracket [a, b].
    ///
    /// Requires that `f(a)` and `f(b)` have opposite signs (or that one of
    /// them is exactly zero, in which case that endpoint is returned).
    ///
    /// # Arguments
    ///
    /// * `f` - Function to find a root of
    /// * `a` - Left bracket endpoint
    /// * `b` - Right bracket endpoint
    ///
    /// # Returns
    ///
    /// * `Ok(x)` - Root within `tolerance` of the true root
    /// * `Err(SolverError::NoBracket)` - `f(a)` and `f(b)` have the same sign
    /// * `Err(SolverError::MaxIterationsExceeded)` - iteration budget exhausted
    ///
    /// # Example
    ///
    /// ```
    /// use quant_core::math::solvers::{BisectionSolver, SolverConfig};
    ///
    /// let solver = BisectionSolver::new(SolverConfig::default());
    /// let root = solver.find_root(|x: f64| x * x - 2.0, 0.0, 2.0).unwrap();
    /// assert!((root - std::f64::consts::SQRT_2).abs() < 1e-9);
    /// ```
    pub fn find_root<F>(&self, f: F, a: T, b: T) -> Result<T, SolverError>
    where
        F: Fn(T) -> T,
    {
        let mut a = a;
        let mut b = b;
        if a > b {
            std::mem::swap(&mut a, &mut b);
        }

        let mut fa = f(a);
        let fb = f(b);
        let zero = T::zero();

        if fa == zero {
            return Ok(a);
        }
        if fb == zero {
            return Ok(b);
        }
        if fa * fb > zero {
            return Err(SolverError::NoBracket {
                a: a.to_f64().unwrap_or(f64::NAN),
                b: b.to_f64().unwrap_or(f64::NAN),
            });
        }

        let two = T::from(2.0).unwrap();

        for _ in 0..self.config.max_iterations {
            let mid = a + (b - a) / two;
            let fm = f(mid);

            if fm == zero || (b - a) / two < self.config.tolerance {
                return Ok(mid);
            }

            // Keep the sign change inside [a, b]
            if fa * fm < zero {
                b = mid;
            } else {
                a = mid;
                fa = fm;
            }
        }

        Err(SolverError::MaxIterationsExceeded {
            iterations: self.config.max_iterations,
        })
    }

    /// Returns a reference to the solver configuration.
    pub fn config(&self) -> &SolverConfig<T> {
        &self.config
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_find_sqrt_2() {
        let solver = BisectionSolver::new(SolverConfig::default());
        let f = |x: f64| x * x - 2.0;

        let root = solver.find_root(f, 0.0, 2.0).unwrap();
        assert!((root - std::f64::consts::SQRT_2).abs() < 1e-9);
    }

    #[test]
    fn test_find_cubic_root() {
        let solver = BisectionSolver::new(SolverConfig::default());
        let f = |x: f64| x * x * x - x - 2.0;

        let root = solver.find_root(f, 1.0, 2.0).unwrap();
        assert!(f(root).abs() < 1e-8, "f(root) = {}", f(root));
    }

    #[test]
    fn test_find_sin_root() {
        let solver = BisectionSolver::new(SolverConfig::default());

        let root = solver.find_root(|x: f64| x.sin(), 3.0, 4.0).unwrap();
        assert!((root - std::f64::consts::PI).abs() < 1e-9);
    }

    #[test]
    fn test_bracket_reversed() {
        let solver = BisectionSolver::new(SolverConfig::default());
        let f = |x: f64| x * x - 2.0;

        let root = solver.find_root(f, 2.0, 0.0).unwrap();
        assert!((root - std::f64::consts::SQRT_2).abs() < 1e-9);
    }

    #[test]
    fn test_root_at_endpoint() {
        let solver = BisectionSolver::new(SolverConfig::default());

        // f(1) = 0 exactly
        let root = solver.find_root(|x: f64| x - 1.0, 1.0, 2.0).unwrap();
        assert_eq!(root, 1.0);
    }

    #[test]
    fn test_no_bracket_same_sign() {
        let solver = BisectionSolver::new(SolverConfig::default());

        let result = solver.find_root(|x: f64| x * x + 1.0, -1.0, 1.0);
        match result.unwrap_err() {
            SolverError::NoBracket { a, b } => {
                assert!((a - -1.0).abs() < 1e-10);
                assert!((b - 1.0).abs() < 1e-10);
            }
            other => panic!("Expected NoBracket error, got {:?}", other),
        }
    }

    #[test]
    fn test_max_iterations_exceeded() {
        // 3 iterations cannot shrink [0, 2] below 1e-10
        let solver = BisectionSolver::new(SolverConfig::new(1e-10, 3));

        let result = solver.find_root(|x: f64| x * x - 2.0, 0.0, 2.0);
        match result.unwrap_err() {
            SolverError::MaxIterationsExceeded { iterations } => {
                assert_eq!(iterations, 3);
            }
            other => panic!("Expected MaxIterationsExceeded error, got {:?}", other),
        }
    }

    #[test]
    fn test_achieves_tolerance() {
        let tol = 1e-12;
        let solver = BisectionSolver::new(SolverConfig::new(tol, 200));

        let root = solver.find_root(|x: f64| x * x - 2.0, 0.0, 2.0).unwrap();
        assert!((root - std::f64::consts::SQRT_2).abs() < tol * 2.0);
    }

    #[test]
    fn test_monotone_objective() {
        // Shape of the implied volatility objective: monotone increasing
        let solver = BisectionSolver::new(SolverConfig::default());
        let f = |x: f64| x.exp() - 2.0;

        let root = solver.find_root(f, 0.0, 1.0).unwrap();
        assert!((root - 2.0_f64.ln()).abs() < 1e-9);
    }

    #[test]
    fn test_with_defaults() {
        let solver: BisectionSolver<f64> = BisectionSolver::with_defaults();
        assert_eq!(solver.config().max_iterations, 100);
    }

    proptest::proptest! {
        #[test]
        fn prop_linear_root_within_tolerance(
            root in -100.0f64..100.0,
            left_pad in 0.1f64..50.0,
            right_pad in 0.1f64..50.0,
        ) {
            let solver = BisectionSolver::new(SolverConfig::new(1e-10, 100));
            let found = solver
                .find_root(|x: f64| x - root, root - left_pad, root + right_pad)
                .unwrap();
            proptest::prop_assert!((found - root).abs() < 1e-9);
        }

        #[test]
        fn prop_cubic_residual_bounded(offset in -50.0f64..50.0) {
            // x³ + x is strictly increasing: exactly one real root per offset
            let solver = BisectionSolver::new(SolverConfig::new(1e-10, 200));
            let f = move |x: f64| x * x * x + x - offset;
            let found = solver.find_root(f, -10.0, 10.0).unwrap();
            proptest::prop_assert!(f(found).abs() < 1e-6);
        }
    }

    #[test]
    fn test_with_f32() {
        let solver: BisectionSolver<f32> = BisectionSolver::new(SolverConfig::new(1e-5, 100));

        let root = solver.find_root(|x: f32| x * x - 2.0, 0.0, 2.0).unwrap();
        assert!((root - std::f32::consts::SQRT_2).abs() < 1e-4);
    }
}
