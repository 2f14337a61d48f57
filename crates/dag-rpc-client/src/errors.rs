//! RPC client errors.

use dag_router::{RouteError, RouterError};
use dag_wire::ConversionError;
use shared_types::RpcError;
use std::time::Duration;
use thiserror::Error;

/// Every failure a call or subscription registration can return.
#[derive(Debug, Error)]
pub enum RpcClientError {
    /// The server answered with an application-level error.
    #[error("received error response from RPC: {}", .0.message)]
    Rpc(RpcError),

    /// No matching response arrived in time. The request may still have
    /// been processed.
    #[error("timed out after {0:?} waiting for a response")]
    Timeout(Duration),

    #[error("RPC client is closed")]
    Closed,

    #[error("conversion failed: {0}")]
    Conversion(#[from] ConversionError),

    #[error("router error: {0}")]
    Router(RouterError),
}

impl From<RouteError> for RpcClientError {
    fn from(error: RouteError) -> Self {
        match error {
            RouteError::Closed => RpcClientError::Closed,
            RouteError::Timeout(timeout) => RpcClientError::Timeout(timeout),
        }
    }
}

impl From<RouterError> for RpcClientError {
    fn from(error: RouterError) -> Self {
        match error {
            RouterError::Route(e) => e.into(),
            RouterError::Conversion(e) => e.into(),
            other => RpcClientError::Router(other),
        }
    }
}

impl RpcClientError {
    /// Label for the `outcome` dimension of the call counter.
    pub(crate) fn outcome(&self) -> &'static str {
        match self {
            RpcClientError::Rpc(_) => "rpc_error",
            RpcClientError::Timeout(_) => "timeout",
            RpcClientError::Closed => "closed",
            RpcClientError::Conversion(_) => "conversion",
            RpcClientError::Router(_) => "router",
        }
    }
}
