//! Client-facing RPC schema.
//!
//! Versioned independently from the gossip schema: hashes, identifiers and
//! scripts are lowercase hex strings, and every response may carry an
//! `RpcError`.

use serde::{Deserialize, Serialize};

// =============================================================================
// COMMON SUB-MESSAGES
// =============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct RpcError {
    pub message: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct RpcScriptPublicKey {
    pub version: u32,
    pub script_public_key: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct RpcOutpoint {
    pub transaction_id: String,
    pub index: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct RpcTransactionInput {
    pub previous_outpoint: Option<RpcOutpoint>,
    pub signature_script: String,
    pub sequence: u64,
    pub sig_op_count: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct RpcTransactionOutput {
    pub amount: u64,
    pub script_public_key: Option<RpcScriptPublicKey>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct RpcTransaction {
    pub version: u32,
    pub inputs: Vec<RpcTransactionInput>,
    pub outputs: Vec<RpcTransactionOutput>,
    pub lock_time: u64,
    pub subnetwork_id: String,
    pub gas: u64,
    pub payload: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct RpcBlockLevelParents {
    pub parent_hashes: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct RpcBlockHeader {
    pub version: u32,
    pub parents: Vec<RpcBlockLevelParents>,
    pub hash_merkle_root: String,
    pub accepted_id_merkle_root: String,
    pub utxo_commitment: String,
    pub timestamp: i64,
    pub bits: u32,
    pub nonce: u64,
    pub daa_score: u64,
    pub blue_work: String,
    pub pruning_point: String,
    pub blue_score: u64,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct RpcBlockVerboseData {
    pub hash: String,
    pub difficulty: f64,
    pub selected_parent_hash: String,
    pub transaction_ids: Vec<String>,
    pub is_header_only: bool,
    pub blue_score: u64,
    pub children_hashes: Vec<String>,
    pub merge_set_blues_hashes: Vec<String>,
    pub merge_set_reds_hashes: Vec<String>,
    pub is_chain_block: bool,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct RpcBlock {
    pub header: Option<RpcBlockHeader>,
    pub transactions: Vec<RpcTransaction>,
    pub verbose_data: Option<RpcBlockVerboseData>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct RpcUtxoEntry {
    pub amount: u64,
    pub script_public_key: Option<RpcScriptPublicKey>,
    pub block_daa_score: u64,
    pub is_coinbase: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct UtxosByAddressesEntry {
    pub address: String,
    pub outpoint: Option<RpcOutpoint>,
    pub utxo_entry: Option<RpcUtxoEntry>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct MempoolEntry {
    pub fee: u64,
    pub transaction: Option<RpcTransaction>,
    pub is_orphan: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct MempoolEntryByAddress {
    pub address: String,
    pub sending: Vec<MempoolEntry>,
    pub receiving: Vec<MempoolEntry>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct GetConnectedPeerInfoMessage {
    pub id: String,
    pub address: String,
    pub last_ping_duration: i64,
    pub is_outbound: bool,
    pub time_offset: i64,
    pub user_agent: String,
    pub advertised_protocol_version: u32,
    pub time_connected: i64,
    pub is_ibd_peer: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct AcceptedTransactionIds {
    pub accepting_block_hash: String,
    pub accepted_transaction_ids: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct BalancesByAddressEntry {
    pub address: String,
    pub balance: u64,
    pub error: Option<RpcError>,
}

// =============================================================================
// SHARED SHAPES
// =============================================================================

/// Shape of every argument-free request and payload-free notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct EmptyMessage {}

/// Shape of every response that only reports success or failure.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ErrorOnlyResponseMessage {
    pub error: Option<RpcError>,
}

// =============================================================================
// REQUESTS
// =============================================================================

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct SubmitBlockRequestMessage {
    pub block: Option<RpcBlock>,
    pub allow_non_daa_blocks: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct GetBlockTemplateRequestMessage {
    pub pay_address: String,
    pub extra_data: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct GetMempoolEntryRequestMessage {
    pub tx_id: String,
    pub include_orphan_pool: bool,
    pub filter_transaction_pool: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct GetMempoolEntriesRequestMessage {
    pub include_orphan_pool: bool,
    pub filter_transaction_pool: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct AddPeerRequestMessage {
    pub address: String,
    pub is_permanent: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SubmitTransactionRequestMessage {
    pub transaction: Option<RpcTransaction>,
    pub allow_orphan: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SubmitTransactionReplacementRequestMessage {
    pub transaction: Option<RpcTransaction>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct NotifyVirtualSelectedParentChainChangedRequestMessage {
    pub include_accepted_transaction_ids: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct GetBlockRequestMessage {
    pub hash: String,
    pub include_transactions: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct GetSubnetworkRequestMessage {
    pub subnetwork_id: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct GetVirtualSelectedParentChainFromBlockRequestMessage {
    pub start_hash: String,
    pub include_accepted_transaction_ids: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct GetBlocksRequestMessage {
    pub low_hash: String,
    pub include_blocks: bool,
    pub include_transactions: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ResolveFinalityConflictRequestMessage {
    pub finality_block_hash: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct GetHeadersRequestMessage {
    pub start_hash: String,
    pub limit: u64,
    pub is_ascending: bool,
}

/// Request shape shared by every address-list request.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct AddressesRequestMessage {
    pub addresses: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct GetBalanceByAddressRequestMessage {
    pub address: String,
}

/// Request shape shared by ban and unban.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct IpRequestMessage {
    pub ip: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct EstimateNetworkHashesPerSecondRequestMessage {
    pub window_size: u32,
    pub start_hash: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct GetMempoolEntriesByAddressesRequestMessage {
    pub addresses: Vec<String>,
    pub include_orphan_pool: bool,
    pub filter_transaction_pool: bool,
}

// =============================================================================
// RESPONSES
// =============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct GetCurrentNetworkResponseMessage {
    pub current_network: String,
    pub error: Option<RpcError>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SubmitBlockResponseMessage {
    pub reject_reason: i32,
    pub error: Option<RpcError>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct GetBlockTemplateResponseMessage {
    pub block: Option<RpcBlock>,
    pub is_synced: bool,
    pub error: Option<RpcError>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct GetPeerAddressesResponseMessage {
    pub addresses: Vec<String>,
    pub banned_addresses: Vec<String>,
    pub error: Option<RpcError>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct GetSelectedTipHashResponseMessage {
    pub selected_tip_hash: String,
    pub error: Option<RpcError>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct GetMempoolEntryResponseMessage {
    pub entry: Option<MempoolEntry>,
    pub error: Option<RpcError>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct GetMempoolEntriesResponseMessage {
    pub entries: Vec<MempoolEntry>,
    pub error: Option<RpcError>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct GetConnectedPeerInfoResponseMessage {
    pub infos: Vec<GetConnectedPeerInfoMessage>,
    pub error: Option<RpcError>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SubmitTransactionResponseMessage {
    pub transaction_id: String,
    pub error: Option<RpcError>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SubmitTransactionReplacementResponseMessage {
    pub transaction_id: String,
    pub replaced_transaction: Option<RpcTransaction>,
    pub error: Option<RpcError>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct GetBlockResponseMessage {
    pub block: Option<RpcBlock>,
    pub error: Option<RpcError>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct GetSubnetworkResponseMessage {
    pub gas_limit: u64,
    pub error: Option<RpcError>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct GetVirtualSelectedParentChainFromBlockResponseMessage {
    pub removed_chain_block_hashes: Vec<String>,
    pub added_chain_block_hashes: Vec<String>,
    pub accepted_transaction_ids: Vec<AcceptedTransactionIds>,
    pub error: Option<RpcError>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct GetBlocksResponseMessage {
    pub block_hashes: Vec<String>,
    pub blocks: Vec<RpcBlock>,
    pub error: Option<RpcError>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct GetBlockCountResponseMessage {
    pub block_count: u64,
    pub header_count: u64,
    pub error: Option<RpcError>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct GetBlockDagInfoResponseMessage {
    pub network_name: String,
    pub block_count: u64,
    pub header_count: u64,
    pub tip_hashes: Vec<String>,
    pub difficulty: f64,
    pub past_median_time: i64,
    pub virtual_parent_hashes: Vec<String>,
    pub pruning_point_hash: String,
    pub virtual_daa_score: u64,
    pub error: Option<RpcError>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct GetHeadersResponseMessage {
    pub headers: Vec<RpcBlockHeader>,
    pub error: Option<RpcError>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct GetUtxosByAddressesResponseMessage {
    pub entries: Vec<UtxosByAddressesEntry>,
    pub error: Option<RpcError>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct GetBalanceByAddressResponseMessage {
    pub balance: u64,
    pub error: Option<RpcError>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct GetBalancesByAddressesResponseMessage {
    pub entries: Vec<BalancesByAddressEntry>,
    pub error: Option<RpcError>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct GetVirtualSelectedParentBlueScoreResponseMessage {
    pub blue_score: u64,
    pub error: Option<RpcError>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct GetInfoResponseMessage {
    pub p2p_id: String,
    pub mempool_size: u64,
    pub server_version: String,
    pub is_utxo_indexed: bool,
    pub is_synced: bool,
    pub error: Option<RpcError>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct EstimateNetworkHashesPerSecondResponseMessage {
    pub network_hashes_per_second: u64,
    pub error: Option<RpcError>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct GetMempoolEntriesByAddressesResponseMessage {
    pub entries: Vec<MempoolEntryByAddress>,
    pub error: Option<RpcError>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct GetCoinSupplyResponseMessage {
    pub max_sompi: u64,
    pub circulating_sompi: u64,
    pub error: Option<RpcError>,
}

// =============================================================================
// NOTIFICATIONS
// =============================================================================

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct BlockAddedNotificationMessage {
    pub block: Option<RpcBlock>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct VirtualSelectedParentChainChangedNotificationMessage {
    pub removed_chain_block_hashes: Vec<String>,
    pub added_chain_block_hashes: Vec<String>,
    pub accepted_transaction_ids: Vec<AcceptedTransactionIds>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct FinalityConflictNotificationMessage {
    pub violating_block_hash: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct FinalityConflictResolvedNotificationMessage {
    pub finality_block_hash: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct UtxosChangedNotificationMessage {
    pub added: Vec<UtxosByAddressesEntry>,
    pub removed: Vec<UtxosByAddressesEntry>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct VirtualSelectedParentBlueScoreChangedNotificationMessage {
    pub virtual_selected_parent_blue_score: u64,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct VirtualDaaScoreChangedNotificationMessage {
    pub virtual_daa_score: u64,
}
