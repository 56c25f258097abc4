//! Error types for instrument and market construction.

use thiserror::Error;

/// Structural parameter errors, detectable before any numeric work begins.
///
/// # Variants
/// - `InvalidStrike`: non-positive strike price
/// - `InvalidExpiry`: non-positive expiry time
/// - `InvalidSpot`: non-positive spot price
/// - `InvalidVolatility`: negative volatility (zero is permitted)
/// - `UnknownOptionType`: unrecognised option type token
///
/// # Examples
/// ```
/// use quant_models::instruments::InstrumentError;
///
/// let err = InstrumentError::InvalidVolatility { volatility: -0.2 };
/// assert!(format!("{}", err).contains("volatility"));
/// ```
#[derive(Error, Debug, Clone, PartialEq)]
pub enum InstrumentError {
    /// Invalid strike price (must be positive).
    #[error("Invalid strike price: K = {strike}")]
    InvalidStrike {
        /// The invalid strike value
        strike: f64,
    },

    /// Invalid expiry time (must be positive, in years).
    #[error("Invalid expiry time: T = {expiry}")]
    InvalidExpiry {
        /// The invalid expiry value
        expiry: f64,
    },

    /// Invalid spot price (must be positive).
    #[error("Invalid spot price: S = {spot}")]
    InvalidSpot {
        /// The invalid spot value
        spot: f64,
    },

    /// Invalid volatility (must be non-negative).
    #[error("Invalid volatility: σ = {volatility}")]
    InvalidVolatility {
        /// The invalid volatility value
        volatility: f64,
    },

    /// Unrecognised option type token.
    #[error("Unknown option type: {token:?}")]
    UnknownOptionType {
        /// The token that failed to parse
        token: String,
    },
}
