//! Core types shared across the workspace.

mod error;

pub use error::SolverError;
