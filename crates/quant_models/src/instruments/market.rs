//! Market state observed at pricing time.

use super::error::InstrumentError;

/// Market parameters the pricers consume.
///
/// Invariants enforced at construction: spot > 0, volatility >= 0. The rate
/// is continuously compounded and may be negative. Zero volatility is valid
/// and means the payoff is deterministic.
///
/// # Examples
/// ```
/// use quant_models::instruments::MarketState;
///
/// let market = MarketState::new(100.0, 0.05, 0.2).unwrap();
/// assert_eq!(market.spot(), 100.0);
///
/// // Negative volatility is rejected, zero is not
/// assert!(MarketState::new(100.0, 0.05, -0.2).is_err());
/// assert!(MarketState::new(100.0, 0.05, 0.0).is_ok());
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MarketState {
    spot: f64,
    rate: f64,
    volatility: f64,
}

impl MarketState {
    /// Creates a validated market state.
    ///
    /// # Arguments
    /// * `spot` - Current underlying price, must be positive
    /// * `rate` - Continuously compounded risk-free rate
    /// * `volatility` - Annualised volatility, must be non-negative
    ///
    /// # Errors
    /// - `InstrumentError::InvalidSpot` if `spot <= 0` or non-finite
    /// - `InstrumentError::InvalidVolatility` if `volatility < 0` or non-finite
    pub fn new(spot: f64, rate: f64, volatility: f64) -> Result<Self, InstrumentError> {
        if !spot.is_finite() || spot <= 0.0 {
            return Err(InstrumentError::InvalidSpot { spot });
        }
        if !volatility.is_finite() || volatility < 0.0 {
            return Err(InstrumentError::InvalidVolatility { volatility });
        }
        Ok(Self {
            spot,
            rate,
            volatility,
        })
    }

    /// Current underlying price (S).
    #[inline]
    pub fn spot(&self) -> f64 {
        self.spot
    }

    /// Continuously compounded risk-free rate (r).
    #[inline]
    pub fn rate(&self) -> f64 {
        self.rate
    }

    /// Annualised volatility (σ).
    #[inline]
    pub fn volatility(&self) -> f64 {
        self.volatility
    }

    /// Returns a copy of this state with the volatility replaced.
    ///
    /// Used by the implied volatility solver, which sweeps σ while holding
    /// spot and rate fixed.
    ///
    /// # Errors
    /// - `InstrumentError::InvalidVolatility` if `volatility < 0` or non-finite
    pub fn with_volatility(&self, volatility: f64) -> Result<Self, InstrumentError> {
        Self::new(self.spot, self.rate, volatility)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_market() {
        let market = MarketState::new(100.0, 0.05, 0.2).unwrap();
        assert_eq!(market.spot(), 100.0);
        assert_eq!(market.rate(), 0.05);
        assert_eq!(market.volatility(), 0.2);
    }

    #[test]
    fn test_zero_volatility_allowed() {
        assert!(MarketState::new(100.0, 0.05, 0.0).is_ok());
    }

    #[test]
    fn test_negative_rate_allowed() {
        assert!(MarketState::new(100.0, -0.02, 0.2).is_ok());
    }

    #[test]
    fn test_invalid_spot() {
        for spot in [0.0, -100.0, f64::NAN] {
            let result = MarketState::new(spot, 0.05, 0.2);
            assert!(matches!(result, Err(InstrumentError::InvalidSpot { .. })));
        }
    }

    #[test]
    fn test_negative_volatility_rejected() {
        let result = MarketState::new(100.0, 0.05, -0.2);
        match result.unwrap_err() {
            InstrumentError::InvalidVolatility { volatility } => {
                assert_eq!(volatility, -0.2);
            }
            other => panic!("Expected InvalidVolatility, got {:?}", other),
        }
    }

    #[test]
    fn test_with_volatility() {
        let market = MarketState::new(100.0, 0.05, 0.2).unwrap();
        let bumped = market.with_volatility(0.35).unwrap();
        assert_eq!(bumped.volatility(), 0.35);
        assert_eq!(bumped.spot(), market.spot());
        assert_eq!(bumped.rate(), market.rate());
        assert!(market.with_volatility(-0.1).is_err());
    }
}
