//! Request and result value types at the engine boundary.

use std::fmt;
use std::str::FromStr;

use quant_models::instruments::{MarketState, OptionContract};

use crate::error::EngineError;

/// Pricing model selection.
///
/// Dispatch is entirely the caller's contract: the engine never substitutes
/// one method for the other.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum PricingMethod {
    /// Cox-Ross-Rubinstein binomial lattice.
    Binomial,
    /// Closed-form Black-Scholes.
    #[cfg_attr(feature = "serde", serde(rename = "bs"))]
    BlackScholes,
}

impl fmt::Display for PricingMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PricingMethod::Binomial => write!(f, "binomial"),
            PricingMethod::BlackScholes => write!(f, "bs"),
        }
    }
}

impl FromStr for PricingMethod {
    type Err = EngineError;

    /// Parses `"binomial"`, `"bs"`, or `"black-scholes"`, case-insensitively.
    ///
    /// Any other token is rejected; nothing falls back to Black-Scholes by
    /// default.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "binomial" => Ok(PricingMethod::Binomial),
            "bs" | "black-scholes" => Ok(PricingMethod::BlackScholes),
            _ => Err(EngineError::InvalidParameter(format!(
                "unknown pricing method: {:?}",
                s
            ))),
        }
    }
}

/// One price computation request.
///
/// `steps` is consumed only by the binomial method and is required for it;
/// a Black-Scholes request ignores it.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PricingRequest {
    /// Contract terms.
    pub contract: OptionContract,
    /// Market parameters.
    pub market: MarketState,
    /// Requested pricing model.
    pub method: PricingMethod,
    /// Lattice step count, required iff `method` is `Binomial`.
    pub steps: Option<u32>,
}

impl PricingRequest {
    /// A Black-Scholes pricing request.
    pub fn black_scholes(contract: OptionContract, market: MarketState) -> Self {
        Self {
            contract,
            market,
            method: PricingMethod::BlackScholes,
            steps: None,
        }
    }

    /// A binomial lattice pricing request with `steps` lattice steps.
    pub fn binomial(contract: OptionContract, market: MarketState, steps: u32) -> Self {
        Self {
            contract,
            market,
            method: PricingMethod::Binomial,
            steps: Some(steps),
        }
    }
}

/// One implied volatility request.
///
/// Carries the market state minus its volatility; volatility is the unknown
/// being solved for.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct VolatilityRequest {
    /// The observed market price to invert.
    pub observed_price: f64,
    /// Contract terms.
    pub contract: OptionContract,
    /// Current underlying price.
    pub spot: f64,
    /// Continuously compounded risk-free rate.
    pub rate: f64,
}

/// A computed price.
///
/// Produced fresh per call; never mutated after construction.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PriceResult {
    /// The option price, non-negative for valid inputs.
    pub value: f64,
}
