//! # DAG Router
//!
//! Demultiplexes one physical duplex stream into per-Command logical queues
//! and multiplexes every caller onto a single outgoing queue.
//!
//! ```text
//!                 ┌──────────────────── Router ─────────────────────┐
//!   bytes ──► reader ──► dispatch ──► Route(GetBlockResponse)  ──► caller
//!                 │                ──► Route(BlockAdded...)    ──► subscription task
//!                 │                ──► ...
//!   bytes ◄── writer ◄── outgoing queue ◄── send(message) ◄──────── callers
//!                 └─────────────────────────────────────────────────┘
//! ```
//!
//! The Command→Route table is fixed when the Router is built. Closing the
//! Router closes every Route, wakes every blocked dequeuer with
//! [`RouteError::Closed`] and ends the connection driver.

pub mod connection;
pub mod errors;
pub mod route;
pub mod router;

pub use connection::{read_frame, run_connection, write_frame, ConnectionHandle};
pub use errors::{RouteError, RouterError};
pub use route::Route;
pub use router::Router;
