//! Implied volatility inversion.
//!
//! Finds the σ ≥ 0 at which the Black-Scholes price reproduces an observed
//! market price. The Black-Scholes price is monotonically non-decreasing in
//! σ, so once the observed price lies strictly inside the achievable band the
//! bracketed root is unique and bisection is guaranteed to find it; any
//! replacement root-finder must preserve that monotonicity argument.

use quant_core::math::solvers::{BisectionSolver, SolverConfig};
use quant_core::types::SolverError;
use quant_models::analytical::BlackScholes;
use quant_models::instruments::MarketState;

use crate::error::EngineError;
use crate::request::VolatilityRequest;

/// Search parameters for the implied volatility solver.
///
/// None of these is a load-bearing constant; the defaults are generous
/// practical bounds (a 500% annualised volatility ceiling) and a budget that
/// bisection meets with room to spare.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ImpliedVolConfig {
    /// Lower edge of the volatility search bracket.
    pub vol_floor: f64,
    /// Upper edge of the volatility search bracket.
    pub vol_ceiling: f64,
    /// Bracket half-width at which the search is considered converged.
    pub tolerance: f64,
    /// Iteration budget; exhausting it is a `ConvergenceFailure`.
    pub max_iterations: usize,
}

impl Default for ImpliedVolConfig {
    /// Defaults: bracket [1e-6, 5.0], tolerance 1e-10, 100 iterations.
    fn default() -> Self {
        Self {
            vol_floor: 1e-6,
            vol_ceiling: 5.0,
            tolerance: 1e-10,
            max_iterations: 100,
        }
    }
}

/// Inverts observed option prices into implied volatilities.
///
/// # Examples
/// ```
/// use quant_engine::{ImpliedVolSolver, VolatilityRequest};
/// use quant_models::analytical::BlackScholes;
/// use quant_models::instruments::{MarketState, OptionContract, OptionType};
///
/// let contract = OptionContract::new(100.0, 1.0, OptionType::Call).unwrap();
/// let market = MarketState::new(100.0, 0.05, 0.2).unwrap();
/// let price = BlackScholes::new(contract, market).price();
///
/// let request = VolatilityRequest {
///     observed_price: price,
///     contract,
///     spot: 100.0,
///     rate: 0.05,
/// };
/// let vol = ImpliedVolSolver::with_defaults().solve(&request).unwrap();
/// assert!((vol - 0.2).abs() < 1e-4);
/// ```
#[derive(Debug, Clone)]
pub struct ImpliedVolSolver {
    config: ImpliedVolConfig,
}

impl ImpliedVolSolver {
    /// Creates a solver with the given search parameters.
    pub fn new(config: ImpliedVolConfig) -> Self {
        Self { config }
    }

    /// Creates a solver with default search parameters.
    pub fn with_defaults() -> Self {
        Self {
            config: ImpliedVolConfig::default(),
        }
    }

    /// Returns the solver configuration.
    pub fn config(&self) -> &ImpliedVolConfig {
        &self.config
    }

    /// Recovers the volatility reproducing `request.observed_price`.
    ///
    /// The achievable band is checked first: prices at or below the σ → 0
    /// discounted intrinsic value, or at or above the price at the volatility
    /// ceiling, are rejected as `OutOfRange` — at the band edge the
    /// volatility is not identifiable, and no extrapolated value is ever
    /// returned. In-range prices are bisected to within `tolerance` in the
    /// σ domain.
    ///
    /// # Errors
    /// - `EngineError::InvalidParameter` for a negative or non-finite
    ///   observed price, a non-positive spot, or a degenerate configuration
    /// - `EngineError::OutOfRange` if the observed price is outside the band
    /// - `EngineError::ConvergenceFailure` if the iteration budget runs out
    pub fn solve(&self, request: &VolatilityRequest) -> Result<f64, EngineError> {
        let cfg = &self.config;
        if !(cfg.vol_floor > 0.0
            && cfg.vol_ceiling.is_finite()
            && cfg.vol_ceiling > cfg.vol_floor
            && cfg.tolerance > 0.0)
        {
            return Err(EngineError::InvalidParameter(format!(
                "degenerate volatility search configuration: {:?}",
                cfg
            )));
        }

        let observed = request.observed_price;
        if !observed.is_finite() || observed < 0.0 {
            return Err(EngineError::InvalidParameter(format!(
                "observed price must be a non-negative real, got {}",
                observed
            )));
        }

        // Validates the spot; σ = 0 gives the band floor (discounted intrinsic)
        let base = MarketState::new(request.spot, request.rate, 0.0)?;
        let price_at = |sigma: f64| -> Result<f64, EngineError> {
            let market = base.with_volatility(sigma)?;
            Ok(BlackScholes::new(request.contract, market).price())
        };

        let floor_price = price_at(0.0)?;
        let ceiling_price = price_at(cfg.vol_ceiling)?;
        if observed <= floor_price || observed >= ceiling_price {
            return Err(EngineError::OutOfRange {
                observed,
                min: floor_price,
                max: ceiling_price,
            });
        }

        let solver = BisectionSolver::new(SolverConfig {
            tolerance: cfg.tolerance,
            max_iterations: cfg.max_iterations,
        });

        // The bracket is confined to (0, vol_ceiling], so every σ the search
        // evaluates builds a valid market state; a failed rebuild poisons the
        // objective rather than panicking
        let objective = |sigma: f64| match price_at(sigma) {
            Ok(price) => price - observed,
            Err(_) => f64::NAN,
        };

        solver
            .find_root(objective, cfg.vol_floor, cfg.vol_ceiling)
            .map_err(|err| match err {
                SolverError::MaxIterationsExceeded { iterations } => {
                    EngineError::ConvergenceFailure { iterations }
                }
                // Observed price sits between the intrinsic floor and the
                // price at vol_floor: below anything the bracket can reach
                SolverError::NoBracket { .. } => EngineError::OutOfRange {
                    observed,
                    min: floor_price,
                    max: ceiling_price,
                },
            })
    }
}

/// Recovers an implied volatility with default search parameters.
///
/// Convenience entry point mirroring [`crate::compute_price`] for callers
/// that do not need to tune the bracket.
pub fn solve_implied_volatility(request: &VolatilityRequest) -> Result<f64, EngineError> {
    ImpliedVolSolver::with_defaults().solve(request)
}
