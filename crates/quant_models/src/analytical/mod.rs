//! Closed-form pricing for European options.

mod black_scholes;

pub use black_scholes::BlackScholes;
