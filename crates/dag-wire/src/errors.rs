//! # Conversion Errors
//!
//! Every failure between the wire schema and the domain is a
//! `ConversionError`. The codec never panics on malformed input.

use crate::catalog::Command;
use shared_types::ParseError;
use std::convert::Infallible;
use thiserror::Error;

/// Errors raised while encoding or decoding messages.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConversionError {
    /// A required sub-message was absent.
    #[error("{0} is nil")]
    NilField(&'static str),

    /// A collection exceeded its protocol ceiling.
    #[error("too many {what}: got {count}, max {max}")]
    TooMany {
        what: &'static str,
        count: usize,
        max: usize,
    },

    /// A numeric field does not fit the domain type.
    #[error("{what} out of range: {value} exceeds {max}")]
    OutOfRange {
        what: &'static str,
        value: u64,
        max: u64,
    },

    /// A hash, id or hex string could not be parsed.
    #[error(transparent)]
    Parse(#[from] ParseError),

    /// A field holds a value the domain cannot represent.
    #[error("invalid {what}: {reason}")]
    Invalid { what: &'static str, reason: String },

    /// A response populated both its error and its payload.
    #[error("{0} contains both an error and a response")]
    BothErrorAndResponse(&'static str),

    /// The message is not of the kind the caller expected.
    #[error("unexpected message: expected {expected}, got {actual}")]
    UnexpectedMessage { expected: Command, actual: Command },

    /// The bytes are not a well-formed envelope.
    #[error("malformed envelope: {0}")]
    Malformed(String),
}

impl From<Infallible> for ConversionError {
    fn from(never: Infallible) -> Self {
        match never {}
    }
}

impl From<bincode::Error> for ConversionError {
    fn from(err: bincode::Error) -> Self {
        ConversionError::Malformed(err.to_string())
    }
}
