//! Conversions between the wire schemas and the domain.
//!
//! Decoding validates everything the wire cannot express: required
//! sub-messages, identifier lengths, numeric narrowing and collection
//! ceilings. Encoding enforces the same ceilings so a node never emits a
//! message its peers would reject.

use crate::errors::ConversionError;
use crate::limits::MAX_TX_PER_BLOCK;
use primitive_types::U256;

/// Unit domain messages whose wire form is an empty message.
macro_rules! empty_message_conversion {
    ($wire:ty => $($domain:ident),+ $(,)?) => {
        $(
            impl From<$wire> for $domain {
                fn from(_: $wire) -> Self {
                    $domain
                }
            }

            impl From<$domain> for $wire {
                fn from(_: $domain) -> Self {
                    Self::default()
                }
            }
        )+
    };
}

/// RPC responses that only report success or failure.
macro_rules! error_only_conversion {
    ($($domain:ident),+ $(,)?) => {
        $(
            impl From<wire::ErrorOnlyResponseMessage> for $domain {
                fn from(message: wire::ErrorOnlyResponseMessage) -> Self {
                    Self {
                        error: message.error.map(RpcError::from),
                    }
                }
            }

            impl From<$domain> for wire::ErrorOnlyResponseMessage {
                fn from(message: $domain) -> Self {
                    Self {
                        error: message.error.map(wire::RpcError::from),
                    }
                }
            }
        )+
    };
}

mod p2p;
mod rpc;

pub(crate) fn required<T>(value: Option<T>, field: &'static str) -> Result<T, ConversionError> {
    value.ok_or(ConversionError::NilField(field))
}

pub(crate) fn check_max(what: &'static str, count: usize, max: usize) -> Result<(), ConversionError> {
    if count > max {
        return Err(ConversionError::TooMany { what, count, max });
    }
    Ok(())
}

/// Shared by both dialects' block conversions.
pub(crate) fn check_block_transactions(count: usize) -> Result<(), ConversionError> {
    check_max("block transactions", count, MAX_TX_PER_BLOCK)
}

pub(crate) fn narrow_u16(what: &'static str, value: u32) -> Result<u16, ConversionError> {
    u16::try_from(value).map_err(|_| ConversionError::OutOfRange {
        what,
        value: value.into(),
        max: u16::MAX.into(),
    })
}

pub(crate) fn narrow_u8(what: &'static str, value: u32) -> Result<u8, ConversionError> {
    u8::try_from(value).map_err(|_| ConversionError::OutOfRange {
        what,
        value: value.into(),
        max: u8::MAX.into(),
    })
}

/// Convert every element, failing on the first error.
pub(crate) fn convert_all<W, D, E>(items: Vec<W>) -> Result<Vec<D>, ConversionError>
where
    D: TryFrom<W, Error = E>,
    ConversionError: From<E>,
{
    items
        .into_iter()
        .map(|item| D::try_from(item).map_err(ConversionError::from))
        .collect()
}

/// Blue work travels big-endian with leading zeroes trimmed.
pub(crate) fn blue_work_from_bytes(bytes: &[u8]) -> Result<U256, ConversionError> {
    if bytes.len() > 32 {
        return Err(ConversionError::Invalid {
            what: "blue work",
            reason: format!("{} bytes exceeds 256 bits", bytes.len()),
        });
    }
    Ok(U256::from_big_endian(bytes))
}

pub(crate) fn blue_work_to_bytes(value: U256) -> Vec<u8> {
    let mut buf = [0u8; 32];
    value.to_big_endian(&mut buf);
    let first = buf.iter().position(|b| *b != 0).unwrap_or(buf.len());
    buf[first..].to_vec()
}
