//! The unit of transport.

use crate::catalog::{Command, WirePayload};
use crate::errors::ConversionError;
use crate::limits::MAX_MESSAGE_PAYLOAD;
use bincode::Options;
use serde::{Deserialize, Serialize};

/// One wire message. The payload variant identifies the Command.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Envelope {
    /// Absent only when a peer sent an empty envelope.
    pub payload: Option<WirePayload>,
}

impl Envelope {
    pub fn new(payload: WirePayload) -> Self {
        Self {
            payload: Some(payload),
        }
    }

    /// The kind carried, or `None` for an empty envelope.
    #[must_use]
    pub fn command(&self) -> Option<Command> {
        self.payload.as_ref().map(WirePayload::command)
    }

    /// Serialize for a length-prefixed frame.
    pub fn to_bytes(&self) -> Result<Vec<u8>, ConversionError> {
        Ok(codec().serialize(self)?)
    }

    /// Deserialize a frame body. Oversized or truncated input is `Malformed`.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, ConversionError> {
        Ok(codec().deserialize(bytes)?)
    }
}

fn codec() -> impl Options {
    bincode::DefaultOptions::new().with_limit(MAX_MESSAGE_PAYLOAD)
}
