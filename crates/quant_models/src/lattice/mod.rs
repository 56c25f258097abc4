//! Discrete-time lattice pricing for European options.

mod crr;
mod error;

pub use crr::CrrLattice;
pub use error::LatticeError;
