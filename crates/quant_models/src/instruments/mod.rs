//! Instrument and market value types.
//!
//! All types here are plain validated values: constructed from one inbound
//! request, consumed by exactly one pricing or solving operation, then
//! discarded.

mod error;
mod market;
mod option;

pub use error::InstrumentError;
pub use market::MarketState;
pub use option::{OptionContract, OptionType};
