//! # DAG Edge Test Suite
//!
//! Cross-crate scenarios that need a real connection: an `RpcClient` on one
//! end of a `tokio::io::duplex` stream and a scripted server on the other.
//!
//! ## Structure
//!
//! ```text
//! tests/src/
//! ├── harness.rs        # MockRpcServer and fixtures
//! └── integration/
//!     ├── calls.rs          # Request/response round trips over the wire
//!     ├── reconciliation.rs # Stale responses after timeouts
//!     ├── subscriptions.rs  # Notification delivery
//!     ├── shutdown.rs       # Close semantics
//!     └── protocol.rs       # Unknown and malformed inbound traffic
//! ```
//!
//! ## Running Tests
//!
//! ```bash
//! cargo test -p dag-tests
//! cargo test -p dag-tests integration::reconciliation
//! ```

#![allow(dead_code)]

pub mod harness;
pub mod integration;
