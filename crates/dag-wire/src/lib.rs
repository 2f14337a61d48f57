//! # DAG Wire Codec
//!
//! Translates blockDAG domain objects to and from two independently versioned
//! wire encodings:
//!
//! - **P2P**: binary gossip between full nodes
//! - **RPC**: hex-string request/response protocol for clients
//!
//! ## Layout
//!
//! ```text
//! DomainMessage ──encode──→ Envelope { WirePayload } ──to_bytes──→ frame
//!               ←─decode───                          ←─from_bytes─
//! ```
//!
//! The `catalog` module holds the single list of message kinds. Everything
//! that dispatches on a kind is generated from it, so a kind without both
//! conversions does not compile.
//!
//! ## Validation
//!
//! Decoding never panics. Missing sub-messages, malformed identifiers,
//! numeric overflow and oversized collections all surface as
//! `ConversionError`. The same ceilings apply when encoding.

#![cfg_attr(test, allow(clippy::unwrap_used))]

pub mod catalog;
mod convert;
pub mod envelope;
pub mod errors;
pub mod limits;
pub mod message;
pub mod wire;

#[cfg(test)]
pub(crate) mod test_utils;

pub use catalog::{decode, encode, Command, Dialect, DomainMessage, Message, WirePayload};
pub use envelope::Envelope;
pub use errors::ConversionError;
pub use message::RpcResponse;
