//! # DAG RPC Client
//!
//! Turns the multiplexed RPC connection into one async fn per call and one
//! background task per subscription.
//!
//! ## Call flow
//!
//! 1. Encode the request and queue it on the router's outgoing queue.
//! 2. Wait on the response Command's route for at most the client timeout.
//! 3. Return `RpcClientError::Rpc` if the server reported an error,
//!    otherwise the typed response.
//!
//! A call that times out leaves its response to arrive later on the same
//! route. Calls that can run long on the server (transaction submission)
//! match responses by transaction id and discard the stale ones.
//!
//! ## Usage
//!
//! ```rust,ignore
//! use dag_rpc_client::{RpcClient, RpcClientConfig};
//!
//! let stream = tokio::net::TcpStream::connect("127.0.0.1:16110").await?;
//! let client = RpcClient::connect(stream, RpcClientConfig::from_env())?;
//! let count = client.get_block_count().await?;
//! client.register_for_block_added_notifications(|n| println!("{}", n.block.block.hash())).await?;
//! ```

mod calls;
pub mod client;
pub mod config;
pub mod errors;
mod subscriptions;

pub use client::RpcClient;
pub use config::RpcClientConfig;
pub use errors::RpcClientError;
