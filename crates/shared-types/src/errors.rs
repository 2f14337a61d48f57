//! # Error Types
//!
//! Defines error types shared across the edge crates.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors raised while building identifiers from raw input.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// Byte slice has the wrong length for a fixed-size identifier.
    #[error("{what} must be {expected} bytes, got {actual}")]
    InvalidLength {
        what: &'static str,
        expected: usize,
        actual: usize,
    },

    /// Hex string could not be decoded.
    #[error("{what} is not valid hex: {reason}")]
    InvalidHex { what: &'static str, reason: String },
}

/// An application-level error reported by a remote node.
///
/// Every RPC response may carry one of these. The message is always
/// human-readable; there is no error code.
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize, Deserialize)]
#[error("{message}")]
pub struct RpcError {
    /// Human-readable description.
    pub message: String,
}

impl RpcError {
    /// Create a new RPC error.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rpc_error_display() {
        let err = RpcError::new("block not found");
        assert_eq!(err.to_string(), "block not found");
    }

    #[test]
    fn test_parse_error_display() {
        let err = ParseError::InvalidLength {
            what: "DomainHash",
            expected: 32,
            actual: 3,
        };
        assert_eq!(err.to_string(), "DomainHash must be 32 bytes, got 3");
    }
}
