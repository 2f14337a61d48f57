//! # Message Catalog
//!
//! The single list of every message kind. Each line names the Command, its
//! dialect, the domain struct and the wire struct. From it the macro
//! generates:
//!
//! - `Command` and its dialect table
//! - `DomainMessage` and `WirePayload`, one variant per Command
//! - `Message` impls tying each domain struct to its Command
//! - the exhaustive `encode` and `decode` dispatch
//!
//! Adding a kind means adding a line here plus both conversions. A missing
//! conversion fails to compile.

use crate::envelope::Envelope;
use crate::errors::ConversionError;
use crate::message::{p2p, rpc};
use crate::wire;
use serde::{Deserialize, Serialize};
use std::fmt;

/// The three independently versioned wire catalogs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Dialect {
    /// Peer-to-peer gossip.
    P2p,
    /// Requests sent by RPC clients.
    RpcRequest,
    /// Responses and notifications sent by RPC servers.
    RpcResponse,
}

impl Dialect {
    /// Stable lowercase label, used in logs and metric labels.
    pub const fn as_str(self) -> &'static str {
        match self {
            Dialect::P2p => "p2p",
            Dialect::RpcRequest => "rpc_request",
            Dialect::RpcResponse => "rpc_response",
        }
    }
}

impl fmt::Display for Dialect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A domain struct bound to exactly one Command.
pub trait Message:
    Into<DomainMessage> + TryFrom<DomainMessage, Error = ConversionError> + Send + 'static
{
    /// The kind this struct encodes.
    const COMMAND: Command;
}

macro_rules! message_catalog {
    ($($dialect:ident $variant:ident: $domain:ty => $wire:ty;)+) => {
        /// Names one message kind.
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
        pub enum Command {
            $($variant,)+
        }

        impl Command {
            /// Every kind, in catalog order.
            pub const ALL: &'static [Command] = &[$(Command::$variant,)+];

            /// The dialect this kind belongs to.
            #[must_use]
            pub const fn dialect(self) -> Dialect {
                match self {
                    $(Command::$variant => Dialect::$dialect,)+
                }
            }

            /// Stable name, used in logs and metrics.
            #[must_use]
            pub const fn name(self) -> &'static str {
                match self {
                    $(Command::$variant => stringify!($variant),)+
                }
            }
        }

        /// A decoded message of any kind.
        #[derive(Debug, Clone, PartialEq)]
        pub enum DomainMessage {
            $($variant($domain),)+
        }

        impl DomainMessage {
            #[must_use]
            pub fn command(&self) -> Command {
                match self {
                    $(DomainMessage::$variant(_) => Command::$variant,)+
                }
            }
        }

        /// The wire form of any message. The variant fixes the payload type.
        #[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
        pub enum WirePayload {
            $($variant($wire),)+
        }

        impl WirePayload {
            #[must_use]
            pub fn command(&self) -> Command {
                match self {
                    $(WirePayload::$variant(_) => Command::$variant,)+
                }
            }
        }

        $(
            impl Message for $domain {
                const COMMAND: Command = Command::$variant;
            }

            impl From<$domain> for DomainMessage {
                fn from(message: $domain) -> Self {
                    DomainMessage::$variant(message)
                }
            }

            impl TryFrom<DomainMessage> for $domain {
                type Error = ConversionError;

                fn try_from(message: DomainMessage) -> Result<Self, Self::Error> {
                    match message {
                        DomainMessage::$variant(inner) => Ok(inner),
                        other => Err(ConversionError::UnexpectedMessage {
                            expected: Command::$variant,
                            actual: other.command(),
                        }),
                    }
                }
            }
        )+

        /// Convert a domain message into its envelope.
        pub fn encode(message: DomainMessage) -> Result<Envelope, ConversionError> {
            let payload = match message {
                $(DomainMessage::$variant(inner) => WirePayload::$variant(<$wire>::try_from(inner)?),)+
            };
            Ok(Envelope::new(payload))
        }

        /// Convert an envelope into its domain message.
        pub fn decode(envelope: Envelope) -> Result<DomainMessage, ConversionError> {
            let payload = envelope
                .payload
                .ok_or(ConversionError::NilField("Envelope.payload"))?;
            Ok(match payload {
                $(WirePayload::$variant(inner) => DomainMessage::$variant(<$domain>::try_from(inner)?),)+
            })
        }
    };
}

message_catalog! {
    // Peer-to-peer gossip
    P2p Version: p2p::VersionMessage => wire::p2p::VersionMessage;
    P2p Verack: p2p::VerackMessage => wire::p2p::EmptyMessage;
    P2p RequestAddresses: p2p::RequestAddressesMessage => wire::p2p::RequestAddressesMessage;
    P2p Addresses: p2p::AddressesMessage => wire::p2p::AddressesMessage;
    P2p RequestHeaders: p2p::RequestHeadersMessage => wire::p2p::RequestHeadersMessage;
    P2p RequestNextHeaders: p2p::RequestNextHeadersMessage => wire::p2p::EmptyMessage;
    P2p BlockHeaders: p2p::BlockHeadersMessage => wire::p2p::BlockHeadersMessage;
    P2p DoneHeaders: p2p::DoneHeadersMessage => wire::p2p::EmptyMessage;
    P2p Block: p2p::BlockMessage => wire::p2p::BlockMessage;
    P2p Transaction: p2p::TransactionMessage => wire::p2p::TransactionMessage;
    P2p InvRelayBlock: p2p::InvRelayBlockMessage => wire::p2p::InvRelayBlockMessage;
    P2p RequestRelayBlocks: p2p::RequestRelayBlocksMessage => wire::p2p::RequestRelayBlocksMessage;
    P2p InvTransactions: p2p::InvTransactionsMessage => wire::p2p::InvTransactionsMessage;
    P2p RequestTransactions: p2p::RequestTransactionsMessage => wire::p2p::RequestTransactionsMessage;
    P2p TransactionNotFound: p2p::TransactionNotFoundMessage => wire::p2p::TransactionNotFoundMessage;
    P2p Ping: p2p::PingMessage => wire::p2p::PingMessage;
    P2p Pong: p2p::PongMessage => wire::p2p::PongMessage;
    P2p Reject: p2p::RejectMessage => wire::p2p::RejectMessage;
    P2p RequestIbdBlocks: p2p::RequestIbdBlocksMessage => wire::p2p::RequestIbdBlocksMessage;
    P2p IbdBlock: p2p::IbdBlockMessage => wire::p2p::BlockMessage;
    P2p RequestBlockLocator: p2p::RequestBlockLocatorMessage => wire::p2p::RequestBlockLocatorMessage;
    P2p BlockLocator: p2p::BlockLocatorMessage => wire::p2p::BlockLocatorMessage;
    P2p RequestPruningPointUtxoSet: p2p::RequestPruningPointUtxoSetMessage => wire::p2p::RequestPruningPointUtxoSetMessage;
    P2p PruningPointUtxoSetChunk: p2p::PruningPointUtxoSetChunkMessage => wire::p2p::PruningPointUtxoSetChunkMessage;
    P2p RequestNextPruningPointUtxoSetChunk: p2p::RequestNextPruningPointUtxoSetChunkMessage => wire::p2p::EmptyMessage;
    P2p DonePruningPointUtxoSetChunks: p2p::DonePruningPointUtxoSetChunksMessage => wire::p2p::EmptyMessage;
    P2p UnexpectedPruningPoint: p2p::UnexpectedPruningPointMessage => wire::p2p::EmptyMessage;
    P2p IbdBlockLocator: p2p::IbdBlockLocatorMessage => wire::p2p::IbdBlockLocatorMessage;
    P2p IbdBlockLocatorHighestHash: p2p::IbdBlockLocatorHighestHashMessage => wire::p2p::IbdBlockLocatorHighestHashMessage;
    P2p IbdBlockLocatorHighestHashNotFound: p2p::IbdBlockLocatorHighestHashNotFoundMessage => wire::p2p::EmptyMessage;
    P2p BlockWithTrustedData: p2p::BlockWithTrustedDataMessage => wire::p2p::BlockWithTrustedDataMessage;
    P2p DoneBlocksWithTrustedData: p2p::DoneBlocksWithTrustedDataMessage => wire::p2p::EmptyMessage;
    P2p RequestPruningPointAndItsAnticone: p2p::RequestPruningPointAndItsAnticoneMessage => wire::p2p::EmptyMessage;
    P2p RequestPruningPointProof: p2p::RequestPruningPointProofMessage => wire::p2p::EmptyMessage;
    P2p PruningPointProof: p2p::PruningPointProofMessage => wire::p2p::PruningPointProofMessage;
    P2p PruningPoints: p2p::PruningPointsMessage => wire::p2p::PruningPointsMessage;
    P2p Ready: p2p::ReadyMessage => wire::p2p::EmptyMessage;
    P2p RequestAnticone: p2p::RequestAnticoneMessage => wire::p2p::RequestAnticoneMessage;
    P2p RequestIbdChainBlockLocator: p2p::RequestIbdChainBlockLocatorMessage => wire::p2p::RequestIbdChainBlockLocatorMessage;
    P2p IbdChainBlockLocator: p2p::IbdChainBlockLocatorMessage => wire::p2p::IbdChainBlockLocatorMessage;
    P2p TrustedData: p2p::TrustedDataMessage => wire::p2p::TrustedDataMessage;

    // RPC requests
    RpcRequest GetCurrentNetworkRequest: rpc::GetCurrentNetworkRequest => wire::rpc::EmptyMessage;
    RpcRequest SubmitBlockRequest: rpc::SubmitBlockRequest => wire::rpc::SubmitBlockRequestMessage;
    RpcRequest GetBlockTemplateRequest: rpc::GetBlockTemplateRequest => wire::rpc::GetBlockTemplateRequestMessage;
    RpcRequest NotifyBlockAddedRequest: rpc::NotifyBlockAddedRequest => wire::rpc::EmptyMessage;
    RpcRequest GetPeerAddressesRequest: rpc::GetPeerAddressesRequest => wire::rpc::EmptyMessage;
    RpcRequest GetSelectedTipHashRequest: rpc::GetSelectedTipHashRequest => wire::rpc::EmptyMessage;
    RpcRequest GetMempoolEntryRequest: rpc::GetMempoolEntryRequest => wire::rpc::GetMempoolEntryRequestMessage;
    RpcRequest GetMempoolEntriesRequest: rpc::GetMempoolEntriesRequest => wire::rpc::GetMempoolEntriesRequestMessage;
    RpcRequest GetConnectedPeerInfoRequest: rpc::GetConnectedPeerInfoRequest => wire::rpc::EmptyMessage;
    RpcRequest AddPeerRequest: rpc::AddPeerRequest => wire::rpc::AddPeerRequestMessage;
    RpcRequest SubmitTransactionRequest: rpc::SubmitTransactionRequest => wire::rpc::SubmitTransactionRequestMessage;
    RpcRequest SubmitTransactionReplacementRequest: rpc::SubmitTransactionReplacementRequest => wire::rpc::SubmitTransactionReplacementRequestMessage;
    RpcRequest NotifyVirtualSelectedParentChainChangedRequest: rpc::NotifyVirtualSelectedParentChainChangedRequest => wire::rpc::NotifyVirtualSelectedParentChainChangedRequestMessage;
    RpcRequest GetBlockRequest: rpc::GetBlockRequest => wire::rpc::GetBlockRequestMessage;
    RpcRequest GetSubnetworkRequest: rpc::GetSubnetworkRequest => wire::rpc::GetSubnetworkRequestMessage;
    RpcRequest GetVirtualSelectedParentChainFromBlockRequest: rpc::GetVirtualSelectedParentChainFromBlockRequest => wire::rpc::GetVirtualSelectedParentChainFromBlockRequestMessage;
    RpcRequest GetBlocksRequest: rpc::GetBlocksRequest => wire::rpc::GetBlocksRequestMessage;
    RpcRequest GetBlockCountRequest: rpc::GetBlockCountRequest => wire::rpc::EmptyMessage;
    RpcRequest GetBlockDagInfoRequest: rpc::GetBlockDagInfoRequest => wire::rpc::EmptyMessage;
    RpcRequest ResolveFinalityConflictRequest: rpc::ResolveFinalityConflictRequest => wire::rpc::ResolveFinalityConflictRequestMessage;
    RpcRequest NotifyFinalityConflictsRequest: rpc::NotifyFinalityConflictsRequest => wire::rpc::EmptyMessage;
    RpcRequest ShutdownRequest: rpc::ShutdownRequest => wire::rpc::EmptyMessage;
    RpcRequest GetHeadersRequest: rpc::GetHeadersRequest => wire::rpc::GetHeadersRequestMessage;
    RpcRequest NotifyUtxosChangedRequest: rpc::NotifyUtxosChangedRequest => wire::rpc::AddressesRequestMessage;
    RpcRequest StopNotifyingUtxosChangedRequest: rpc::StopNotifyingUtxosChangedRequest => wire::rpc::AddressesRequestMessage;
    RpcRequest GetUtxosByAddressesRequest: rpc::GetUtxosByAddressesRequest => wire::rpc::AddressesRequestMessage;
    RpcRequest GetBalanceByAddressRequest: rpc::GetBalanceByAddressRequest => wire::rpc::GetBalanceByAddressRequestMessage;
    RpcRequest GetBalancesByAddressesRequest: rpc::GetBalancesByAddressesRequest => wire::rpc::AddressesRequestMessage;
    RpcRequest GetVirtualSelectedParentBlueScoreRequest: rpc::GetVirtualSelectedParentBlueScoreRequest => wire::rpc::EmptyMessage;
    RpcRequest NotifyVirtualSelectedParentBlueScoreChangedRequest: rpc::NotifyVirtualSelectedParentBlueScoreChangedRequest => wire::rpc::EmptyMessage;
    RpcRequest BanRequest: rpc::BanRequest => wire::rpc::IpRequestMessage;
    RpcRequest UnbanRequest: rpc::UnbanRequest => wire::rpc::IpRequestMessage;
    RpcRequest GetInfoRequest: rpc::GetInfoRequest => wire::rpc::EmptyMessage;
    RpcRequest NotifyPruningPointUtxoSetOverrideRequest: rpc::NotifyPruningPointUtxoSetOverrideRequest => wire::rpc::EmptyMessage;
    RpcRequest StopNotifyingPruningPointUtxoSetOverrideRequest: rpc::StopNotifyingPruningPointUtxoSetOverrideRequest => wire::rpc::EmptyMessage;
    RpcRequest EstimateNetworkHashesPerSecondRequest: rpc::EstimateNetworkHashesPerSecondRequest => wire::rpc::EstimateNetworkHashesPerSecondRequestMessage;
    RpcRequest NotifyVirtualDaaScoreChangedRequest: rpc::NotifyVirtualDaaScoreChangedRequest => wire::rpc::EmptyMessage;
    RpcRequest GetMempoolEntriesByAddressesRequest: rpc::GetMempoolEntriesByAddressesRequest => wire::rpc::GetMempoolEntriesByAddressesRequestMessage;
    RpcRequest GetCoinSupplyRequest: rpc::GetCoinSupplyRequest => wire::rpc::EmptyMessage;
    RpcRequest NotifyNewBlockTemplateRequest: rpc::NotifyNewBlockTemplateRequest => wire::rpc::EmptyMessage;

    // RPC responses
    RpcResponse GetCurrentNetworkResponse: rpc::GetCurrentNetworkResponse => wire::rpc::GetCurrentNetworkResponseMessage;
    RpcResponse SubmitBlockResponse: rpc::SubmitBlockResponse => wire::rpc::SubmitBlockResponseMessage;
    RpcResponse GetBlockTemplateResponse: rpc::GetBlockTemplateResponse => wire::rpc::GetBlockTemplateResponseMessage;
    RpcResponse NotifyBlockAddedResponse: rpc::NotifyBlockAddedResponse => wire::rpc::ErrorOnlyResponseMessage;
    RpcResponse GetPeerAddressesResponse: rpc::GetPeerAddressesResponse => wire::rpc::GetPeerAddressesResponseMessage;
    RpcResponse GetSelectedTipHashResponse: rpc::GetSelectedTipHashResponse => wire::rpc::GetSelectedTipHashResponseMessage;
    RpcResponse GetMempoolEntryResponse: rpc::GetMempoolEntryResponse => wire::rpc::GetMempoolEntryResponseMessage;
    RpcResponse GetMempoolEntriesResponse: rpc::GetMempoolEntriesResponse => wire::rpc::GetMempoolEntriesResponseMessage;
    RpcResponse GetConnectedPeerInfoResponse: rpc::GetConnectedPeerInfoResponse => wire::rpc::GetConnectedPeerInfoResponseMessage;
    RpcResponse AddPeerResponse: rpc::AddPeerResponse => wire::rpc::ErrorOnlyResponseMessage;
    RpcResponse SubmitTransactionResponse: rpc::SubmitTransactionResponse => wire::rpc::SubmitTransactionResponseMessage;
    RpcResponse SubmitTransactionReplacementResponse: rpc::SubmitTransactionReplacementResponse => wire::rpc::SubmitTransactionReplacementResponseMessage;
    RpcResponse NotifyVirtualSelectedParentChainChangedResponse: rpc::NotifyVirtualSelectedParentChainChangedResponse => wire::rpc::ErrorOnlyResponseMessage;
    RpcResponse GetBlockResponse: rpc::GetBlockResponse => wire::rpc::GetBlockResponseMessage;
    RpcResponse GetSubnetworkResponse: rpc::GetSubnetworkResponse => wire::rpc::GetSubnetworkResponseMessage;
    RpcResponse GetVirtualSelectedParentChainFromBlockResponse: rpc::GetVirtualSelectedParentChainFromBlockResponse => wire::rpc::GetVirtualSelectedParentChainFromBlockResponseMessage;
    RpcResponse GetBlocksResponse: rpc::GetBlocksResponse => wire::rpc::GetBlocksResponseMessage;
    RpcResponse GetBlockCountResponse: rpc::GetBlockCountResponse => wire::rpc::GetBlockCountResponseMessage;
    RpcResponse GetBlockDagInfoResponse: rpc::GetBlockDagInfoResponse => wire::rpc::GetBlockDagInfoResponseMessage;
    RpcResponse ResolveFinalityConflictResponse: rpc::ResolveFinalityConflictResponse => wire::rpc::ErrorOnlyResponseMessage;
    RpcResponse NotifyFinalityConflictsResponse: rpc::NotifyFinalityConflictsResponse => wire::rpc::ErrorOnlyResponseMessage;
    RpcResponse ShutdownResponse: rpc::ShutdownResponse => wire::rpc::ErrorOnlyResponseMessage;
    RpcResponse GetHeadersResponse: rpc::GetHeadersResponse => wire::rpc::GetHeadersResponseMessage;
    RpcResponse NotifyUtxosChangedResponse: rpc::NotifyUtxosChangedResponse => wire::rpc::ErrorOnlyResponseMessage;
    RpcResponse StopNotifyingUtxosChangedResponse: rpc::StopNotifyingUtxosChangedResponse => wire::rpc::ErrorOnlyResponseMessage;
    RpcResponse GetUtxosByAddressesResponse: rpc::GetUtxosByAddressesResponse => wire::rpc::GetUtxosByAddressesResponseMessage;
    RpcResponse GetBalanceByAddressResponse: rpc::GetBalanceByAddressResponse => wire::rpc::GetBalanceByAddressResponseMessage;
    RpcResponse GetBalancesByAddressesResponse: rpc::GetBalancesByAddressesResponse => wire::rpc::GetBalancesByAddressesResponseMessage;
    RpcResponse GetVirtualSelectedParentBlueScoreResponse: rpc::GetVirtualSelectedParentBlueScoreResponse => wire::rpc::GetVirtualSelectedParentBlueScoreResponseMessage;
    RpcResponse NotifyVirtualSelectedParentBlueScoreChangedResponse: rpc::NotifyVirtualSelectedParentBlueScoreChangedResponse => wire::rpc::ErrorOnlyResponseMessage;
    RpcResponse BanResponse: rpc::BanResponse => wire::rpc::ErrorOnlyResponseMessage;
    RpcResponse UnbanResponse: rpc::UnbanResponse => wire::rpc::ErrorOnlyResponseMessage;
    RpcResponse GetInfoResponse: rpc::GetInfoResponse => wire::rpc::GetInfoResponseMessage;
    RpcResponse NotifyPruningPointUtxoSetOverrideResponse: rpc::NotifyPruningPointUtxoSetOverrideResponse => wire::rpc::ErrorOnlyResponseMessage;
    RpcResponse StopNotifyingPruningPointUtxoSetOverrideResponse: rpc::StopNotifyingPruningPointUtxoSetOverrideResponse => wire::rpc::ErrorOnlyResponseMessage;
    RpcResponse EstimateNetworkHashesPerSecondResponse: rpc::EstimateNetworkHashesPerSecondResponse => wire::rpc::EstimateNetworkHashesPerSecondResponseMessage;
    RpcResponse NotifyVirtualDaaScoreChangedResponse: rpc::NotifyVirtualDaaScoreChangedResponse => wire::rpc::ErrorOnlyResponseMessage;
    RpcResponse GetMempoolEntriesByAddressesResponse: rpc::GetMempoolEntriesByAddressesResponse => wire::rpc::GetMempoolEntriesByAddressesResponseMessage;
    RpcResponse GetCoinSupplyResponse: rpc::GetCoinSupplyResponse => wire::rpc::GetCoinSupplyResponseMessage;
    RpcResponse NotifyNewBlockTemplateResponse: rpc::NotifyNewBlockTemplateResponse => wire::rpc::ErrorOnlyResponseMessage;

    // RPC notifications
    RpcResponse BlockAddedNotification: rpc::BlockAddedNotification => wire::rpc::BlockAddedNotificationMessage;
    RpcResponse VirtualSelectedParentChainChangedNotification: rpc::VirtualSelectedParentChainChangedNotification => wire::rpc::VirtualSelectedParentChainChangedNotificationMessage;
    RpcResponse FinalityConflictNotification: rpc::FinalityConflictNotification => wire::rpc::FinalityConflictNotificationMessage;
    RpcResponse FinalityConflictResolvedNotification: rpc::FinalityConflictResolvedNotification => wire::rpc::FinalityConflictResolvedNotificationMessage;
    RpcResponse UtxosChangedNotification: rpc::UtxosChangedNotification => wire::rpc::UtxosChangedNotificationMessage;
    RpcResponse VirtualSelectedParentBlueScoreChangedNotification: rpc::VirtualSelectedParentBlueScoreChangedNotification => wire::rpc::VirtualSelectedParentBlueScoreChangedNotificationMessage;
    RpcResponse PruningPointUtxoSetOverrideNotification: rpc::PruningPointUtxoSetOverrideNotification => wire::rpc::EmptyMessage;
    RpcResponse VirtualDaaScoreChangedNotification: rpc::VirtualDaaScoreChangedNotification => wire::rpc::VirtualDaaScoreChangedNotificationMessage;
    RpcResponse NewBlockTemplateNotification: rpc::NewBlockTemplateNotification => wire::rpc::EmptyMessage;
}

impl Command {
    /// Every kind of one dialect, in catalog order.
    pub fn all_in(dialect: Dialect) -> impl Iterator<Item = Command> {
        Self::ALL
            .iter()
            .copied()
            .filter(move |command| command.dialect() == dialect)
    }
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::message::p2p::{PingMessage, VerackMessage};
    use crate::message::rpc::{GetBlockCountResponse, NotifyBlockAddedResponse};
    use crate::test_utils::sample;
    use std::collections::HashSet;

    #[test]
    fn test_catalog_sizes() {
        assert_eq!(Command::all_in(Dialect::P2p).count(), 41);
        assert_eq!(Command::all_in(Dialect::RpcRequest).count(), 40);
        assert_eq!(Command::all_in(Dialect::RpcResponse).count(), 49);
        assert_eq!(Command::ALL.len(), 130);
    }

    #[test]
    fn test_names_are_unique() {
        let names: HashSet<_> = Command::ALL.iter().map(|c| c.name()).collect();
        assert_eq!(names.len(), Command::ALL.len());
    }

    #[test]
    fn test_message_command_binding() {
        assert_eq!(PingMessage::COMMAND, Command::Ping);
        let message: DomainMessage = PingMessage { nonce: 9 }.into();
        assert_eq!(message.command(), Command::Ping);
        assert_eq!(PingMessage::try_from(message), Ok(PingMessage { nonce: 9 }));
    }

    #[test]
    fn test_wrong_kind_is_unexpected_message() {
        let message: DomainMessage = VerackMessage.into();
        assert_eq!(
            PingMessage::try_from(message),
            Err(ConversionError::UnexpectedMessage {
                expected: Command::Ping,
                actual: Command::Verack
            })
        );
    }

    #[test]
    fn test_encode_decode_round_trip() {
        let original: DomainMessage = GetBlockCountResponse {
            block_count: 10,
            header_count: 12,
            error: None,
        }
        .into();
        let envelope = encode(original.clone()).unwrap();
        assert_eq!(envelope.command(), Some(Command::GetBlockCountResponse));
        assert_eq!(decode(envelope).unwrap(), original);
    }

    #[test]
    fn test_every_kind_round_trips_through_bytes() {
        for &command in Command::ALL {
            let original = sample(command);
            assert_eq!(original.command(), command);

            let envelope = encode(original.clone())
                .unwrap_or_else(|e| panic!("encode {command}: {e}"));
            assert_eq!(envelope.command(), Some(command));

            let bytes = envelope.to_bytes().unwrap();
            let decoded = decode(Envelope::from_bytes(&bytes).unwrap())
                .unwrap_or_else(|e| panic!("decode {command}: {e}"));
            assert_eq!(decoded, original, "{command} changed on the round trip");
        }
    }

    #[test]
    fn test_shared_wire_shape_keeps_command() {
        let envelope = encode(NotifyBlockAddedResponse { error: None }.into()).unwrap();
        assert_eq!(envelope.command(), Some(Command::NotifyBlockAddedResponse));
    }

    #[test]
    fn test_empty_envelope_is_nil() {
        let err = decode(Envelope::default()).unwrap_err();
        assert_eq!(err.to_string(), "Envelope.payload is nil");
    }
}
