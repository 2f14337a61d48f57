//! Gossip message kinds exchanged between peers.

use shared_types::{
    BlockGhostdagData, DomainBlock, DomainBlockHeader, DomainHash, DomainTransaction, NetAddress,
    OutpointAndUtxoEntryPair, SubnetworkId, TransactionId,
};
use uuid::Uuid;

// =============================================================================
// HANDSHAKE
// =============================================================================

/// First message on every connection, advertising the peer's capabilities.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VersionMessage {
    pub protocol_version: u32,
    pub network: String,
    pub services: u64,
    /// Unix milliseconds.
    pub timestamp: i64,
    /// Advertised listening address, if the peer accepts inbound connections.
    pub address: Option<NetAddress>,
    pub id: Uuid,
    pub user_agent: String,
    pub disable_relay_tx: bool,
    /// `None` means a full node.
    pub subnetwork_id: Option<SubnetworkId>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct VerackMessage;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ReadyMessage;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PingMessage {
    pub nonce: u64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PongMessage {
    pub nonce: u64,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct RejectMessage {
    pub reason: String,
}

// =============================================================================
// ADDRESSES
// =============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct RequestAddressesMessage {
    pub include_all_subnetworks: bool,
    pub subnetwork_id: Option<SubnetworkId>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AddressesMessage {
    pub address_list: Vec<NetAddress>,
}

// =============================================================================
// RELAY
// =============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct BlockMessage {
    pub block: DomainBlock,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct TransactionMessage {
    pub transaction: DomainTransaction,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct InvRelayBlockMessage {
    pub hash: DomainHash,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct RequestRelayBlocksMessage {
    pub hashes: Vec<DomainHash>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct InvTransactionsMessage {
    pub ids: Vec<TransactionId>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct RequestTransactionsMessage {
    pub ids: Vec<TransactionId>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TransactionNotFoundMessage {
    pub id: TransactionId,
}

// =============================================================================
// INITIAL BLOCK DOWNLOAD
// =============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RequestHeadersMessage {
    pub low_hash: DomainHash,
    pub high_hash: DomainHash,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RequestNextHeadersMessage;

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct BlockHeadersMessage {
    pub block_headers: Vec<DomainBlockHeader>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DoneHeadersMessage;

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct RequestIbdBlocksMessage {
    pub hashes: Vec<DomainHash>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct IbdBlockMessage {
    pub block: DomainBlock,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RequestBlockLocatorMessage {
    pub high_hash: DomainHash,
    pub limit: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct BlockLocatorMessage {
    pub hashes: Vec<DomainHash>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct IbdBlockLocatorMessage {
    pub target_hash: DomainHash,
    pub block_locator_hashes: Vec<DomainHash>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct IbdBlockLocatorHighestHashMessage {
    pub highest_hash: DomainHash,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct IbdBlockLocatorHighestHashNotFoundMessage;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RequestIbdChainBlockLocatorMessage {
    pub low_hash: Option<DomainHash>,
    pub high_hash: Option<DomainHash>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct IbdChainBlockLocatorMessage {
    pub block_locator_hashes: Vec<DomainHash>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RequestAnticoneMessage {
    pub block_hash: DomainHash,
    pub context_hash: DomainHash,
}

// =============================================================================
// PRUNING POINT SYNC
// =============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RequestPruningPointUtxoSetMessage {
    pub pruning_point_hash: DomainHash,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct PruningPointUtxoSetChunkMessage {
    pub outpoint_and_utxo_entry_pairs: Vec<OutpointAndUtxoEntryPair>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RequestNextPruningPointUtxoSetChunkMessage;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DonePruningPointUtxoSetChunksMessage;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct UnexpectedPruningPointMessage;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RequestPruningPointAndItsAnticoneMessage;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RequestPruningPointProofMessage;

/// Headers proving the pruning point, grouped per block level.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct PruningPointProofMessage {
    pub headers: Vec<Vec<DomainBlockHeader>>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct PruningPointsMessage {
    pub headers: Vec<DomainBlockHeader>,
}

// =============================================================================
// TRUSTED DATA
// =============================================================================

/// A block of the DAA window together with its GHOSTDAG data.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct TrustedDataDaaBlock {
    pub block: DomainBlock,
    pub ghostdag_data: BlockGhostdagData,
}

/// A header of the DAA window together with its GHOSTDAG data.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct TrustedDataDaaHeader {
    pub header: DomainBlockHeader,
    pub ghostdag_data: BlockGhostdagData,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct BlockGhostdagDataHashPair {
    pub hash: DomainHash,
    pub ghostdag_data: BlockGhostdagData,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct BlockWithTrustedDataMessage {
    pub block: DomainBlock,
    pub daa_score: u64,
    pub daa_window: Vec<TrustedDataDaaBlock>,
    pub ghostdag_data: Vec<BlockGhostdagDataHashPair>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DoneBlocksWithTrustedDataMessage;

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct TrustedDataMessage {
    pub daa_window: Vec<TrustedDataDaaHeader>,
    pub ghostdag_data: Vec<BlockGhostdagDataHashPair>,
}
