//! Price computation dispatch.

use quant_models::analytical::BlackScholes;
use quant_models::lattice::CrrLattice;

use crate::error::EngineError;
use crate::request::{PriceResult, PricingMethod, PricingRequest};

/// Computes an option price for one request.
///
/// Dispatches purely on the requested method: `Binomial` routes to the CRR
/// lattice with the supplied step count, `BlackScholes` to the closed form.
/// No side effects, no fallback between methods.
///
/// # Errors
/// - `EngineError::InvalidParameter` if a binomial request carries no step
///   count (structural parameter errors on contract/market are rejected
///   earlier, by the value-type constructors)
/// - `EngineError::ArbitrageViolation` from the lattice
///
/// # Examples
/// ```
/// use quant_engine::{compute_price, PricingRequest};
/// use quant_models::instruments::{MarketState, OptionContract, OptionType};
///
/// let contract = OptionContract::new(100.0, 1.0, OptionType::Call).unwrap();
/// let market = MarketState::new(100.0, 0.05, 0.2).unwrap();
///
/// let bs = compute_price(&PricingRequest::black_scholes(contract, market)).unwrap();
/// let tree = compute_price(&PricingRequest::binomial(contract, market, 500)).unwrap();
/// assert!((bs.value - tree.value).abs() < 0.05);
/// ```
pub fn compute_price(request: &PricingRequest) -> Result<PriceResult, EngineError> {
    let value = match request.method {
        PricingMethod::BlackScholes => BlackScholes::new(request.contract, request.market).price(),
        PricingMethod::Binomial => {
            let steps = request.steps.ok_or_else(|| {
                EngineError::InvalidParameter(
                    "step count is required for binomial pricing".to_string(),
                )
            })?;
            CrrLattice::new(request.contract, request.market).price(steps)?
        }
    };

    Ok(PriceResult { value })
}
