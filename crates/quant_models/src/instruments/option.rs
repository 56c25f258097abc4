//! European option contract types.

use std::fmt;
use std::str::FromStr;

use super::error::InstrumentError;

/// Side of a European option.
///
/// # Examples
/// ```
/// use quant_models::instruments::OptionType;
///
/// assert_eq!(OptionType::Call.payoff(110.0, 100.0), 10.0);
/// assert_eq!(OptionType::Put.payoff(110.0, 100.0), 0.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum OptionType {
    /// Call option: the right to buy at the strike.
    Call,
    /// Put option: the right to sell at the strike.
    Put,
}

impl OptionType {
    /// Terminal payoff at expiry.
    ///
    /// Call: max(S_T − K, 0); Put: max(K − S_T, 0).
    ///
    /// # Arguments
    /// * `spot_at_expiry` - Underlying price at expiry (S_T)
    /// * `strike` - Strike price (K)
    #[inline]
    pub fn payoff(&self, spot_at_expiry: f64, strike: f64) -> f64 {
        match self {
            OptionType::Call => (spot_at_expiry - strike).max(0.0),
            OptionType::Put => (strike - spot_at_expiry).max(0.0),
        }
    }

    /// Returns whether this is a call.
    #[inline]
    pub fn is_call(&self) -> bool {
        matches!(self, OptionType::Call)
    }
}

impl fmt::Display for OptionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OptionType::Call => write!(f, "call"),
            OptionType::Put => write!(f, "put"),
        }
    }
}

impl FromStr for OptionType {
    type Err = InstrumentError;

    /// Parses `"call"` or `"put"`, case-insensitively.
    ///
    /// Any other token is rejected; nothing is silently coerced to a put.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "call" => Ok(OptionType::Call),
            "put" => Ok(OptionType::Put),
            _ => Err(InstrumentError::UnknownOptionType {
                token: s.to_string(),
            }),
        }
    }
}

/// Terms of a European option contract.
///
/// Invariants enforced at construction: strike > 0, expiry > 0.
///
/// # Examples
/// ```
/// use quant_models::instruments::{OptionContract, OptionType};
///
/// let contract = OptionContract::new(100.0, 1.0, OptionType::Call).unwrap();
/// assert_eq!(contract.strike(), 100.0);
///
/// // Zero expiry is rejected
/// assert!(OptionContract::new(100.0, 0.0, OptionType::Call).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct OptionContract {
    strike: f64,
    expiry: f64,
    option_type: OptionType,
}

impl OptionContract {
    /// Creates a validated contract.
    ///
    /// # Arguments
    /// * `strike` - Strike price, must be positive
    /// * `expiry` - Time to expiry in years, must be positive
    /// * `option_type` - Call or Put
    ///
    /// # Errors
    /// - `InstrumentError::InvalidStrike` if `strike <= 0` or non-finite
    /// - `InstrumentError::InvalidExpiry` if `expiry <= 0` or non-finite
    pub fn new(
        strike: f64,
        expiry: f64,
        option_type: OptionType,
    ) -> Result<Self, InstrumentError> {
        if !strike.is_finite() || strike <= 0.0 {
            return Err(InstrumentError::InvalidStrike { strike });
        }
        if !expiry.is_finite() || expiry <= 0.0 {
            return Err(InstrumentError::InvalidExpiry { expiry });
        }
        Ok(Self {
            strike,
            expiry,
            option_type,
        })
    }

    /// Strike price (K).
    #[inline]
    pub fn strike(&self) -> f64 {
        self.strike
    }

    /// Time to expiry in years (T).
    #[inline]
    pub fn expiry(&self) -> f64 {
        self.expiry
    }

    /// Call or Put.
    #[inline]
    pub fn option_type(&self) -> OptionType {
        self.option_type
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_call_payoff() {
        assert_eq!(OptionType::Call.payoff(110.0, 100.0), 10.0);
        assert_eq!(OptionType::Call.payoff(90.0, 100.0), 0.0);
        assert_eq!(OptionType::Call.payoff(100.0, 100.0), 0.0);
    }

    #[test]
    fn test_put_payoff() {
        assert_eq!(OptionType::Put.payoff(90.0, 100.0), 10.0);
        assert_eq!(OptionType::Put.payoff(110.0, 100.0), 0.0);
        assert_eq!(OptionType::Put.payoff(100.0, 100.0), 0.0);
    }

    #[test]
    fn test_is_call() {
        assert!(OptionType::Call.is_call());
        assert!(!OptionType::Put.is_call());
    }

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", OptionType::Call), "call");
        assert_eq!(format!("{}", OptionType::Put), "put");
    }

    #[test]
    fn test_from_str_accepts_known_tokens() {
        assert_eq!("call".parse::<OptionType>().unwrap(), OptionType::Call);
        assert_eq!("Call".parse::<OptionType>().unwrap(), OptionType::Call);
        assert_eq!("PUT".parse::<OptionType>().unwrap(), OptionType::Put);
    }

    #[test]
    fn test_from_str_rejects_unknown_tokens() {
        // "straddle" must not silently become a put
        let err = "straddle".parse::<OptionType>().unwrap_err();
        match err {
            InstrumentError::UnknownOptionType { token } => assert_eq!(token, "straddle"),
            other => panic!("Expected UnknownOptionType, got {:?}", other),
        }
    }

    #[test]
    fn test_contract_valid() {
        let contract = OptionContract::new(100.0, 0.5, OptionType::Put).unwrap();
        assert_eq!(contract.strike(), 100.0);
        assert_eq!(contract.expiry(), 0.5);
        assert_eq!(contract.option_type(), OptionType::Put);
    }

    #[test]
    fn test_contract_invalid_strike() {
        for strike in [0.0, -100.0, f64::NAN] {
            let result = OptionContract::new(strike, 1.0, OptionType::Call);
            assert!(matches!(
                result,
                Err(InstrumentError::InvalidStrike { .. })
            ));
        }
    }

    #[test]
    fn test_contract_invalid_expiry() {
        for expiry in [0.0, -1.0, f64::INFINITY] {
            let result = OptionContract::new(100.0, expiry, OptionType::Call);
            assert!(matches!(
                result,
                Err(InstrumentError::InvalidExpiry { .. })
            ));
        }
    }

    #[test]
    fn test_contract_copy() {
        let c1 = OptionContract::new(100.0, 1.0, OptionType::Call).unwrap();
        let c2 = c1;
        assert_eq!(c1, c2);
    }
}
