//! Error types for historical volatility estimation.

use thiserror::Error;

/// Historical volatility estimation errors.
///
/// # Variants
/// - `InvalidWindow`: observation window shorter than two entries
/// - `InvalidPeriodsPerYear`: non-positive or non-finite annualisation factor
/// - `InvalidPrice`: non-positive or non-finite price in the input series
/// - `InsufficientData`: too few observations for one full window of changes
#[derive(Error, Debug, Clone, PartialEq)]
pub enum VolatilityError {
    /// Observation window too short to yield a dispersion.
    #[error("Invalid rolling window: {window} observations (minimum 2)")]
    InvalidWindow {
        /// The invalid window length
        window: usize,
    },

    /// Invalid annualisation factor (must be positive and finite).
    #[error("Invalid periods per year: {periods_per_year}")]
    InvalidPeriodsPerYear {
        /// The invalid annualisation factor
        periods_per_year: f64,
    },

    /// Invalid price in the input series (must be positive and finite).
    #[error("Invalid price at index {index}: {price}")]
    InvalidPrice {
        /// Position of the offending observation
        index: usize,
        /// The invalid price value
        price: f64,
    },

    /// Too few observations for even one full window of relative changes.
    #[error("Insufficient data: {observations} observations, need at least {required}")]
    InsufficientData {
        /// Number of observations supplied
        observations: usize,
        /// Minimum number required (window + 1)
        required: usize,
    },
}
