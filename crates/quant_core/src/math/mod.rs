//! Mathematical primitives: distribution functions, descriptive statistics,
//! and root-finding solvers.

pub mod distributions;
pub mod solvers;
pub mod statistics;
