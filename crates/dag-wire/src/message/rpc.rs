//! RPC requests, responses and notifications.
//!
//! Every response carries an optional `RpcError`. Callers go through the
//! `RpcResponse` trait to split a response into success or failure.

use crate::catalog::Message;
use shared_types::{
    DomainBlock, DomainBlockHeader, DomainHash, DomainOutpoint, DomainTransaction, RpcError,
    SubnetworkId, TransactionId, UtxoEntry,
};

/// Implemented by every RPC response kind.
pub trait RpcResponse: Message {
    /// The application-level error, if the server reported one.
    fn error(&self) -> Option<&RpcError>;

    /// Detach the application-level error.
    fn take_error(&mut self) -> Option<RpcError>;
}

macro_rules! impl_rpc_response {
    ($($response:ty),* $(,)?) => {
        $(
            impl RpcResponse for $response {
                fn error(&self) -> Option<&RpcError> {
                    self.error.as_ref()
                }

                fn take_error(&mut self) -> Option<RpcError> {
                    self.error.take()
                }
            }
        )*
    };
}

// =============================================================================
// SHARED RPC OBJECTS
// =============================================================================

/// Node-computed metadata attached to blocks returned by queries.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct RpcBlockVerboseData {
    pub hash: DomainHash,
    pub difficulty: f64,
    pub selected_parent_hash: DomainHash,
    pub transaction_ids: Vec<TransactionId>,
    pub is_header_only: bool,
    pub blue_score: u64,
    pub children_hashes: Vec<DomainHash>,
    pub merge_set_blues_hashes: Vec<DomainHash>,
    pub merge_set_reds_hashes: Vec<DomainHash>,
    pub is_chain_block: bool,
}

/// A block as returned by queries, optionally with verbose data.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct RpcBlock {
    pub block: DomainBlock,
    pub verbose_data: Option<RpcBlockVerboseData>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct MempoolEntry {
    pub fee: u64,
    pub transaction: DomainTransaction,
    pub is_orphan: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct MempoolEntryByAddress {
    pub address: String,
    pub sending: Vec<MempoolEntry>,
    pub receiving: Vec<MempoolEntry>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct PeerInfo {
    pub id: String,
    pub address: String,
    pub last_ping_duration_ms: i64,
    pub is_outbound: bool,
    pub time_offset: i64,
    pub user_agent: String,
    pub advertised_protocol_version: u32,
    pub time_connected: i64,
    pub is_ibd_peer: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AcceptedTransactionIds {
    pub accepting_block_hash: DomainHash,
    pub accepted_transaction_ids: Vec<TransactionId>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct UtxosByAddressesEntry {
    pub address: String,
    pub outpoint: DomainOutpoint,
    /// Absent for removed entries.
    pub utxo_entry: Option<UtxoEntry>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct BalancesByAddressEntry {
    pub address: String,
    pub balance: u64,
    pub error: Option<RpcError>,
}

/// Why a submitted block was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SubmitBlockRejectReason {
    #[default]
    None,
    BlockInvalid,
    IsInIbd,
}

// =============================================================================
// REQUESTS
// =============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct GetCurrentNetworkRequest;

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SubmitBlockRequest {
    pub block: DomainBlock,
    pub allow_non_daa_blocks: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct GetBlockTemplateRequest {
    pub pay_address: String,
    pub extra_data: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct NotifyBlockAddedRequest;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct GetPeerAddressesRequest;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct GetSelectedTipHashRequest;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct GetMempoolEntryRequest {
    pub tx_id: TransactionId,
    pub include_orphan_pool: bool,
    pub filter_transaction_pool: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct GetMempoolEntriesRequest {
    pub include_orphan_pool: bool,
    pub filter_transaction_pool: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct GetConnectedPeerInfoRequest;

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AddPeerRequest {
    pub address: String,
    pub is_permanent: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SubmitTransactionRequest {
    pub transaction: DomainTransaction,
    pub allow_orphan: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SubmitTransactionReplacementRequest {
    pub transaction: DomainTransaction,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct NotifyVirtualSelectedParentChainChangedRequest {
    pub include_accepted_transaction_ids: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct GetBlockRequest {
    pub hash: DomainHash,
    pub include_transactions: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct GetSubnetworkRequest {
    pub subnetwork_id: SubnetworkId,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct GetVirtualSelectedParentChainFromBlockRequest {
    pub start_hash: DomainHash,
    pub include_accepted_transaction_ids: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct GetBlocksRequest {
    /// Start from genesis when absent.
    pub low_hash: Option<DomainHash>,
    pub include_blocks: bool,
    pub include_transactions: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct GetBlockCountRequest;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct GetBlockDagInfoRequest;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ResolveFinalityConflictRequest {
    pub finality_block_hash: DomainHash,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct NotifyFinalityConflictsRequest;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ShutdownRequest;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct GetHeadersRequest {
    pub start_hash: DomainHash,
    pub limit: u64,
    pub is_ascending: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct NotifyUtxosChangedRequest {
    pub addresses: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct StopNotifyingUtxosChangedRequest {
    pub addresses: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct GetUtxosByAddressesRequest {
    pub addresses: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct GetBalanceByAddressRequest {
    pub address: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct GetBalancesByAddressesRequest {
    pub addresses: Vec<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct GetVirtualSelectedParentBlueScoreRequest;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct NotifyVirtualSelectedParentBlueScoreChangedRequest;

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct BanRequest {
    pub ip: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct UnbanRequest {
    pub ip: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct GetInfoRequest;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct NotifyPruningPointUtxoSetOverrideRequest;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct StopNotifyingPruningPointUtxoSetOverrideRequest;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct EstimateNetworkHashesPerSecondRequest {
    pub window_size: u32,
    /// Estimate from the virtual when absent.
    pub start_hash: Option<DomainHash>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct NotifyVirtualDaaScoreChangedRequest;

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct GetMempoolEntriesByAddressesRequest {
    pub addresses: Vec<String>,
    pub include_orphan_pool: bool,
    pub filter_transaction_pool: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct GetCoinSupplyRequest;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct NotifyNewBlockTemplateRequest;

// =============================================================================
// RESPONSES
// =============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct GetCurrentNetworkResponse {
    pub current_network: String,
    pub error: Option<RpcError>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SubmitBlockResponse {
    pub reject_reason: SubmitBlockRejectReason,
    pub error: Option<RpcError>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct GetBlockTemplateResponse {
    /// Present exactly when `error` is absent.
    pub block: Option<DomainBlock>,
    pub is_synced: bool,
    pub error: Option<RpcError>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct NotifyBlockAddedResponse {
    pub error: Option<RpcError>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct GetPeerAddressesResponse {
    pub addresses: Vec<String>,
    pub banned_addresses: Vec<String>,
    pub error: Option<RpcError>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct GetSelectedTipHashResponse {
    pub selected_tip_hash: Option<DomainHash>,
    pub error: Option<RpcError>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct GetMempoolEntryResponse {
    /// Present exactly when `error` is absent.
    pub entry: Option<MempoolEntry>,
    pub error: Option<RpcError>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct GetMempoolEntriesResponse {
    pub entries: Vec<MempoolEntry>,
    pub error: Option<RpcError>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct GetConnectedPeerInfoResponse {
    pub infos: Vec<PeerInfo>,
    pub error: Option<RpcError>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AddPeerResponse {
    pub error: Option<RpcError>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SubmitTransactionResponse {
    /// Older servers leave this empty on error.
    pub transaction_id: Option<TransactionId>,
    pub error: Option<RpcError>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SubmitTransactionReplacementResponse {
    pub transaction_id: Option<TransactionId>,
    pub replaced_transaction: Option<DomainTransaction>,
    pub error: Option<RpcError>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct NotifyVirtualSelectedParentChainChangedResponse {
    pub error: Option<RpcError>,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct GetBlockResponse {
    /// Present exactly when `error` is absent.
    pub block: Option<RpcBlock>,
    pub error: Option<RpcError>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct GetSubnetworkResponse {
    pub gas_limit: u64,
    pub error: Option<RpcError>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct GetVirtualSelectedParentChainFromBlockResponse {
    pub removed_chain_block_hashes: Vec<DomainHash>,
    pub added_chain_block_hashes: Vec<DomainHash>,
    pub accepted_transaction_ids: Vec<AcceptedTransactionIds>,
    pub error: Option<RpcError>,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct GetBlocksResponse {
    pub block_hashes: Vec<DomainHash>,
    pub blocks: Vec<RpcBlock>,
    pub error: Option<RpcError>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct GetBlockCountResponse {
    pub block_count: u64,
    pub header_count: u64,
    pub error: Option<RpcError>,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct GetBlockDagInfoResponse {
    pub network_name: String,
    pub block_count: u64,
    pub header_count: u64,
    pub tip_hashes: Vec<DomainHash>,
    pub difficulty: f64,
    pub past_median_time: i64,
    pub virtual_parent_hashes: Vec<DomainHash>,
    pub pruning_point_hash: Option<DomainHash>,
    pub virtual_daa_score: u64,
    pub error: Option<RpcError>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ResolveFinalityConflictResponse {
    pub error: Option<RpcError>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct NotifyFinalityConflictsResponse {
    pub error: Option<RpcError>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ShutdownResponse {
    pub error: Option<RpcError>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct GetHeadersResponse {
    pub headers: Vec<DomainBlockHeader>,
    pub error: Option<RpcError>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct NotifyUtxosChangedResponse {
    pub error: Option<RpcError>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct StopNotifyingUtxosChangedResponse {
    pub error: Option<RpcError>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct GetUtxosByAddressesResponse {
    pub entries: Vec<UtxosByAddressesEntry>,
    pub error: Option<RpcError>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct GetBalanceByAddressResponse {
    pub balance: u64,
    pub error: Option<RpcError>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct GetBalancesByAddressesResponse {
    pub entries: Vec<BalancesByAddressEntry>,
    pub error: Option<RpcError>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct GetVirtualSelectedParentBlueScoreResponse {
    pub blue_score: u64,
    pub error: Option<RpcError>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct NotifyVirtualSelectedParentBlueScoreChangedResponse {
    pub error: Option<RpcError>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct BanResponse {
    pub error: Option<RpcError>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct UnbanResponse {
    pub error: Option<RpcError>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct GetInfoResponse {
    pub p2p_id: String,
    pub mempool_size: u64,
    pub server_version: String,
    pub is_utxo_indexed: bool,
    pub is_synced: bool,
    pub error: Option<RpcError>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct NotifyPruningPointUtxoSetOverrideResponse {
    pub error: Option<RpcError>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct StopNotifyingPruningPointUtxoSetOverrideResponse {
    pub error: Option<RpcError>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct EstimateNetworkHashesPerSecondResponse {
    pub network_hashes_per_second: u64,
    pub error: Option<RpcError>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct NotifyVirtualDaaScoreChangedResponse {
    pub error: Option<RpcError>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct GetMempoolEntriesByAddressesResponse {
    pub entries: Vec<MempoolEntryByAddress>,
    pub error: Option<RpcError>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct GetCoinSupplyResponse {
    pub max_sompi: u64,
    pub circulating_sompi: u64,
    pub error: Option<RpcError>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct NotifyNewBlockTemplateResponse {
    pub error: Option<RpcError>,
}

impl_rpc_response!(
    GetCurrentNetworkResponse,
    SubmitBlockResponse,
    GetBlockTemplateResponse,
    NotifyBlockAddedResponse,
    GetPeerAddressesResponse,
    GetSelectedTipHashResponse,
    GetMempoolEntryResponse,
    GetMempoolEntriesResponse,
    GetConnectedPeerInfoResponse,
    AddPeerResponse,
    SubmitTransactionResponse,
    SubmitTransactionReplacementResponse,
    NotifyVirtualSelectedParentChainChangedResponse,
    GetBlockResponse,
    GetSubnetworkResponse,
    GetVirtualSelectedParentChainFromBlockResponse,
    GetBlocksResponse,
    GetBlockCountResponse,
    GetBlockDagInfoResponse,
    ResolveFinalityConflictResponse,
    NotifyFinalityConflictsResponse,
    ShutdownResponse,
    GetHeadersResponse,
    NotifyUtxosChangedResponse,
    StopNotifyingUtxosChangedResponse,
    GetUtxosByAddressesResponse,
    GetBalanceByAddressResponse,
    GetBalancesByAddressesResponse,
    GetVirtualSelectedParentBlueScoreResponse,
    NotifyVirtualSelectedParentBlueScoreChangedResponse,
    BanResponse,
    UnbanResponse,
    GetInfoResponse,
    NotifyPruningPointUtxoSetOverrideResponse,
    StopNotifyingPruningPointUtxoSetOverrideResponse,
    EstimateNetworkHashesPerSecondResponse,
    NotifyVirtualDaaScoreChangedResponse,
    GetMempoolEntriesByAddressesResponse,
    GetCoinSupplyResponse,
    NotifyNewBlockTemplateResponse,
);

// =============================================================================
// NOTIFICATIONS
// =============================================================================

#[derive(Debug, Clone, PartialEq, Default)]
pub struct BlockAddedNotification {
    pub block: RpcBlock,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct VirtualSelectedParentChainChangedNotification {
    pub removed_chain_block_hashes: Vec<DomainHash>,
    pub added_chain_block_hashes: Vec<DomainHash>,
    pub accepted_transaction_ids: Vec<AcceptedTransactionIds>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FinalityConflictNotification {
    pub violating_block_hash: DomainHash,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FinalityConflictResolvedNotification {
    pub finality_block_hash: DomainHash,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct UtxosChangedNotification {
    pub added: Vec<UtxosByAddressesEntry>,
    pub removed: Vec<UtxosByAddressesEntry>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct VirtualSelectedParentBlueScoreChangedNotification {
    pub virtual_selected_parent_blue_score: u64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PruningPointUtxoSetOverrideNotification;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct VirtualDaaScoreChangedNotification {
    pub virtual_daa_score: u64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct NewBlockTemplateNotification;
