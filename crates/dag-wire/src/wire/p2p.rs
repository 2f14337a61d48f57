//! Peer-to-peer gossip schema.
//!
//! Hashes and identifiers travel as length-unchecked byte sub-messages, so
//! every conversion into the domain validates lengths. Sub-message fields are
//! `Option` because the schema allows them to be absent.

use serde::{Deserialize, Serialize};

// =============================================================================
// COMMON SUB-MESSAGES
// =============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Hash {
    pub bytes: Vec<u8>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct TransactionId {
    pub bytes: Vec<u8>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SubnetworkId {
    pub bytes: Vec<u8>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct NetworkAddress {
    pub timestamp: i64,
    pub ip: Vec<u8>,
    pub port: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ScriptPublicKey {
    pub script: Vec<u8>,
    pub version: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Outpoint {
    pub transaction_id: Option<TransactionId>,
    pub index: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct TransactionInput {
    pub previous_outpoint: Option<Outpoint>,
    pub signature_script: Vec<u8>,
    pub sequence: u64,
    pub sig_op_count: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct TransactionOutput {
    pub value: u64,
    pub script_public_key: Option<ScriptPublicKey>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct TransactionMessage {
    pub version: u32,
    pub inputs: Vec<TransactionInput>,
    pub outputs: Vec<TransactionOutput>,
    pub lock_time: u64,
    pub subnetwork_id: Option<SubnetworkId>,
    pub gas: u64,
    pub payload: Vec<u8>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct BlockLevelParents {
    pub parent_hashes: Vec<Hash>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct BlockHeader {
    pub version: u32,
    pub parents: Vec<BlockLevelParents>,
    pub hash_merkle_root: Option<Hash>,
    pub accepted_id_merkle_root: Option<Hash>,
    pub utxo_commitment: Option<Hash>,
    pub timestamp: i64,
    pub bits: u32,
    pub nonce: u64,
    pub daa_score: u64,
    /// Big-endian, leading zeroes trimmed.
    pub blue_work: Vec<u8>,
    pub pruning_point: Option<Hash>,
    pub blue_score: u64,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct BlockMessage {
    pub header: Option<BlockHeader>,
    pub transactions: Vec<TransactionMessage>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct UtxoEntry {
    pub amount: u64,
    pub script_public_key: Option<ScriptPublicKey>,
    pub block_daa_score: u64,
    pub is_coinbase: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct OutpointAndUtxoEntryPair {
    pub outpoint: Option<Outpoint>,
    pub utxo_entry: Option<UtxoEntry>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct BluesAnticoneSizes {
    pub blue_hash: Option<Hash>,
    pub anticone_size: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct GhostdagData {
    pub blue_score: u64,
    pub blue_work: Vec<u8>,
    pub selected_parent: Option<Hash>,
    pub merge_set_blues: Vec<Hash>,
    pub merge_set_reds: Vec<Hash>,
    pub blues_anticone_sizes: Vec<BluesAnticoneSizes>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct BlockGhostdagDataHashPair {
    pub hash: Option<Hash>,
    pub ghostdag_data: Option<GhostdagData>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct DaaBlock {
    pub block: Option<BlockMessage>,
    pub ghostdag_data: Option<GhostdagData>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct DaaBlockV4 {
    pub header: Option<BlockHeader>,
    pub ghostdag_data: Option<GhostdagData>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct PruningPointProofHeaderArray {
    pub headers: Vec<BlockHeader>,
}

// =============================================================================
// MESSAGES
// =============================================================================

/// Shared shape of every payload-free gossip message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct EmptyMessage {}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct VersionMessage {
    pub protocol_version: u32,
    pub services: u64,
    pub timestamp: i64,
    pub address: Option<NetworkAddress>,
    pub id: Vec<u8>,
    pub user_agent: String,
    pub disable_relay_tx: bool,
    pub subnetwork_id: Option<SubnetworkId>,
    pub network: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct RequestAddressesMessage {
    pub include_all_subnetworks: bool,
    pub subnetwork_id: Option<SubnetworkId>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct AddressesMessage {
    pub address_list: Vec<NetworkAddress>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct RequestHeadersMessage {
    pub low_hash: Option<Hash>,
    pub high_hash: Option<Hash>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct BlockHeadersMessage {
    pub block_headers: Vec<BlockHeader>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct InvRelayBlockMessage {
    pub hash: Option<Hash>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct RequestRelayBlocksMessage {
    pub hashes: Vec<Hash>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct InvTransactionsMessage {
    pub ids: Vec<TransactionId>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct RequestTransactionsMessage {
    pub ids: Vec<TransactionId>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct TransactionNotFoundMessage {
    pub id: Option<TransactionId>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct PingMessage {
    pub nonce: u64,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct PongMessage {
    pub nonce: u64,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct RejectMessage {
    pub reason: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct RequestIbdBlocksMessage {
    pub hashes: Vec<Hash>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct RequestBlockLocatorMessage {
    pub high_hash: Option<Hash>,
    pub limit: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct BlockLocatorMessage {
    pub hashes: Vec<Hash>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct RequestPruningPointUtxoSetMessage {
    pub pruning_point_hash: Option<Hash>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct PruningPointUtxoSetChunkMessage {
    pub outpoint_and_utxo_entry_pairs: Vec<OutpointAndUtxoEntryPair>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct IbdBlockLocatorMessage {
    pub target_hash: Option<Hash>,
    pub block_locator_hashes: Vec<Hash>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct IbdBlockLocatorHighestHashMessage {
    pub highest_hash: Option<Hash>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct BlockWithTrustedDataMessage {
    pub block: Option<BlockMessage>,
    pub daa_score: u64,
    pub daa_window: Vec<DaaBlock>,
    pub ghostdag_data: Vec<BlockGhostdagDataHashPair>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct PruningPointProofMessage {
    pub headers: Vec<PruningPointProofHeaderArray>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct PruningPointsMessage {
    pub headers: Vec<BlockHeader>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct RequestAnticoneMessage {
    pub block_hash: Option<Hash>,
    pub context_hash: Option<Hash>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct RequestIbdChainBlockLocatorMessage {
    pub low_hash: Option<Hash>,
    pub high_hash: Option<Hash>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct IbdChainBlockLocatorMessage {
    pub block_locator_hashes: Vec<Hash>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct TrustedDataMessage {
    pub daa_window: Vec<DaaBlockV4>,
    pub ghostdag_data: Vec<BlockGhostdagDataHashPair>,
}
