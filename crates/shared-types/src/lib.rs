//! # Shared Types Crate
//!
//! Domain objects exchanged across the node's edge: hashes, transactions,
//! blocks, UTXO entries and GHOSTDAG metadata, plus the application-level
//! `RpcError` record.
//!
//! ## Design Principles
//!
//! - **Single Source of Truth**: Both wire dialects convert into these types.
//! - **No Consensus Logic**: Values arrive fully formed; only derived
//!   identifiers (transaction ID, block hash) are computed here.

pub mod entities;
pub mod errors;

pub use entities::*;
pub use errors::*;
