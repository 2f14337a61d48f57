//! Wire schemas, one module per independently versioned dialect.
//!
//! These types mirror what travels on the connection. They carry no
//! invariants of their own; everything is validated when converting into the
//! domain (see `convert`).

pub mod p2p;
pub mod rpc;
