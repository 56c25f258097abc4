//! # Quant Models: Instruments and Pricers
//!
//! European option value types and the two pricing models built on them:
//!
//! - Instrument definitions (`instruments`): option type, contract terms,
//!   market state, all validated at construction
//! - Closed-form Black-Scholes pricing (`analytical`)
//! - Cox-Ross-Rubinstein binomial lattice pricing (`lattice`)
//! - Rolling historical volatility estimation (`volatility`)
//!
//! ## Design Principles
//!
//! - **Validate at the boundary**: contract and market constructors reject
//!   invalid scalars, so pricers never re-check structural preconditions
//! - **Pure value types**: every entity is `Copy`, built per request and
//!   discarded; no shared or mutable state survives a call

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]

pub mod analytical;
pub mod instruments;
pub mod lattice;
pub mod volatility;
