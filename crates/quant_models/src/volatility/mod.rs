//! Historical volatility estimation from observed price series.

mod error;
mod historical;

pub use error::VolatilityError;
pub use historical::HistoricalVolatility;
