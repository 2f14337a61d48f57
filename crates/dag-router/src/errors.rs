//! Router and route errors.

use dag_wire::{Command, ConversionError};
use std::time::Duration;
use thiserror::Error;

/// Failure of a single queue operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum RouteError {
    /// The route was closed. Terminal for every pending and future call.
    #[error("route is closed")]
    Closed,

    /// Nothing arrived before the deadline. The route stays open.
    #[error("timed out after {0:?} waiting for a message")]
    Timeout(Duration),
}

/// Errors raised while building a router or moving messages through it.
#[derive(Debug, Error)]
pub enum RouterError {
    #[error("command {0} registered twice")]
    DuplicateCommand(Command),

    #[error("no route registered for command {0}")]
    RouteNotFound(Command),

    /// An inbound message whose Command this router does not handle.
    #[error("received unsupported command {0}")]
    Protocol(Command),

    #[error("conversion failed: {0}")]
    Conversion(#[from] ConversionError),

    #[error(transparent)]
    Route(#[from] RouteError),

    #[error("transport failed: {0}")]
    Io(#[from] std::io::Error),
}

impl RouterError {
    /// True when the error means the router is shut down.
    #[must_use]
    pub fn is_closed(&self) -> bool {
        matches!(self, RouterError::Route(RouteError::Closed))
    }
}
