//! Domain message kinds.
//!
//! One struct per Command. Unit structs stand for payload-free kinds.

pub mod p2p;
pub mod rpc;

pub use rpc::RpcResponse;
