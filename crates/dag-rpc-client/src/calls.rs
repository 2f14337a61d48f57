//! One method per synchronous RPC call.

use crate::client::RpcClient;
use crate::errors::RpcClientError;
use dag_wire::message::rpc::*;
use shared_types::{
    DomainBlock, DomainHash, DomainTransaction, RpcError, SubnetworkId, TransactionId,
};
use tracing::instrument;

impl RpcClient {
    // ═══════════════════════════════════════════════════════════════════════
    // NODE
    // ═══════════════════════════════════════════════════════════════════════

    #[instrument(skip(self))]
    pub async fn get_current_network(&self) -> Result<GetCurrentNetworkResponse, RpcClientError> {
        self.call(GetCurrentNetworkRequest).await
    }

    #[instrument(skip(self))]
    pub async fn get_info(&self) -> Result<GetInfoResponse, RpcClientError> {
        self.call(GetInfoRequest).await
    }

    /// Ask the node to shut down.
    #[instrument(skip(self))]
    pub async fn shutdown(&self) -> Result<ShutdownResponse, RpcClientError> {
        self.call(ShutdownRequest).await
    }

    #[instrument(skip(self))]
    pub async fn get_coin_supply(&self) -> Result<GetCoinSupplyResponse, RpcClientError> {
        self.call(GetCoinSupplyRequest).await
    }

    /// `start_hash` of `None` estimates from the virtual.
    #[instrument(skip(self))]
    pub async fn estimate_network_hashes_per_second(
        &self,
        window_size: u32,
        start_hash: Option<DomainHash>,
    ) -> Result<EstimateNetworkHashesPerSecondResponse, RpcClientError> {
        self.call(EstimateNetworkHashesPerSecondRequest {
            window_size,
            start_hash,
        })
        .await
    }

    // ═══════════════════════════════════════════════════════════════════════
    // PEERS
    // ═══════════════════════════════════════════════════════════════════════

    #[instrument(skip(self))]
    pub async fn get_peer_addresses(&self) -> Result<GetPeerAddressesResponse, RpcClientError> {
        self.call(GetPeerAddressesRequest).await
    }

    #[instrument(skip(self))]
    pub async fn get_connected_peer_info(
        &self,
    ) -> Result<GetConnectedPeerInfoResponse, RpcClientError> {
        self.call(GetConnectedPeerInfoRequest).await
    }

    #[instrument(skip(self))]
    pub async fn add_peer(
        &self,
        address: String,
        is_permanent: bool,
    ) -> Result<AddPeerResponse, RpcClientError> {
        self.call(AddPeerRequest {
            address,
            is_permanent,
        })
        .await
    }

    #[instrument(skip(self))]
    pub async fn ban(&self, ip: String) -> Result<BanResponse, RpcClientError> {
        self.call(BanRequest { ip }).await
    }

    #[instrument(skip(self))]
    pub async fn unban(&self, ip: String) -> Result<UnbanResponse, RpcClientError> {
        self.call(UnbanRequest { ip }).await
    }

    // ═══════════════════════════════════════════════════════════════════════
    // BLOCKS & DAG
    // ═══════════════════════════════════════════════════════════════════════

    #[instrument(skip(self, block), fields(hash = %block.hash()))]
    pub async fn submit_block(
        &self,
        block: DomainBlock,
        allow_non_daa_blocks: bool,
    ) -> Result<SubmitBlockResponse, RpcClientError> {
        self.call(SubmitBlockRequest {
            block,
            allow_non_daa_blocks,
        })
        .await
    }

    #[instrument(skip(self))]
    pub async fn get_block_template(
        &self,
        pay_address: String,
        extra_data: String,
    ) -> Result<GetBlockTemplateResponse, RpcClientError> {
        self.call(GetBlockTemplateRequest {
            pay_address,
            extra_data,
        })
        .await
    }

    /// Fetch one block. Responses carrying a different block are late
    /// answers to earlier calls and are discarded.
    #[instrument(skip(self))]
    pub async fn get_block(
        &self,
        hash: DomainHash,
        include_transactions: bool,
    ) -> Result<GetBlockResponse, RpcClientError> {
        self.call_matching(
            GetBlockRequest {
                hash,
                include_transactions,
            },
            |response: &GetBlockResponse| answers_block_request(&hash, response),
        )
        .await
    }

    /// Blocks above `low_hash`, or from genesis when `None`.
    #[instrument(skip(self))]
    pub async fn get_blocks(
        &self,
        low_hash: Option<DomainHash>,
        include_blocks: bool,
        include_transactions: bool,
    ) -> Result<GetBlocksResponse, RpcClientError> {
        self.call(GetBlocksRequest {
            low_hash,
            include_blocks,
            include_transactions,
        })
        .await
    }

    #[instrument(skip(self))]
    pub async fn get_headers(
        &self,
        start_hash: DomainHash,
        limit: u64,
        is_ascending: bool,
    ) -> Result<GetHeadersResponse, RpcClientError> {
        self.call(GetHeadersRequest {
            start_hash,
            limit,
            is_ascending,
        })
        .await
    }

    #[instrument(skip(self))]
    pub async fn get_block_count(&self) -> Result<GetBlockCountResponse, RpcClientError> {
        self.call(GetBlockCountRequest).await
    }

    #[instrument(skip(self))]
    pub async fn get_block_dag_info(&self) -> Result<GetBlockDagInfoResponse, RpcClientError> {
        self.call(GetBlockDagInfoRequest).await
    }

    #[instrument(skip(self))]
    pub async fn get_selected_tip_hash(
        &self,
    ) -> Result<GetSelectedTipHashResponse, RpcClientError> {
        self.call(GetSelectedTipHashRequest).await
    }

    #[instrument(skip(self))]
    pub async fn get_virtual_selected_parent_blue_score(
        &self,
    ) -> Result<GetVirtualSelectedParentBlueScoreResponse, RpcClientError> {
        self.call(GetVirtualSelectedParentBlueScoreRequest).await
    }

    #[instrument(skip(self))]
    pub async fn get_virtual_selected_parent_chain_from_block(
        &self,
        start_hash: DomainHash,
        include_accepted_transaction_ids: bool,
    ) -> Result<GetVirtualSelectedParentChainFromBlockResponse, RpcClientError> {
        self.call(GetVirtualSelectedParentChainFromBlockRequest {
            start_hash,
            include_accepted_transaction_ids,
        })
        .await
    }

    #[instrument(skip(self))]
    pub async fn resolve_finality_conflict(
        &self,
        finality_block_hash: DomainHash,
    ) -> Result<ResolveFinalityConflictResponse, RpcClientError> {
        self.call(ResolveFinalityConflictRequest {
            finality_block_hash,
        })
        .await
    }

    #[instrument(skip(self))]
    pub async fn get_subnetwork(
        &self,
        subnetwork_id: SubnetworkId,
    ) -> Result<GetSubnetworkResponse, RpcClientError> {
        self.call(GetSubnetworkRequest { subnetwork_id }).await
    }

    // ═══════════════════════════════════════════════════════════════════════
    // MEMPOOL
    // ═══════════════════════════════════════════════════════════════════════

    /// Submit a transaction to the mempool.
    ///
    /// Waits for the response naming this transaction. Responses for other
    /// transactions are late answers to earlier calls that timed out and
    /// are discarded.
    #[instrument(skip(self, transaction), fields(tx_id = %transaction.id()))]
    pub async fn submit_transaction(
        &self,
        transaction: DomainTransaction,
        allow_orphan: bool,
    ) -> Result<SubmitTransactionResponse, RpcClientError> {
        let expected = transaction.id();
        self.call_matching(
            SubmitTransactionRequest {
                transaction,
                allow_orphan,
            },
            |response: &SubmitTransactionResponse| {
                answers_submission(
                    &expected,
                    response.transaction_id.as_ref(),
                    response.error.as_ref(),
                )
            },
        )
        .await
    }

    /// Replace a mempool transaction spending the same outpoints.
    ///
    /// Reconciles late responses the same way as
    /// [`submit_transaction`](Self::submit_transaction).
    #[instrument(skip(self, transaction), fields(tx_id = %transaction.id()))]
    pub async fn submit_transaction_replacement(
        &self,
        transaction: DomainTransaction,
    ) -> Result<SubmitTransactionReplacementResponse, RpcClientError> {
        let expected = transaction.id();
        self.call_matching(
            SubmitTransactionReplacementRequest { transaction },
            |response: &SubmitTransactionReplacementResponse| {
                answers_submission(
                    &expected,
                    response.transaction_id.as_ref(),
                    response.error.as_ref(),
                )
            },
        )
        .await
    }

    /// Entries for other transactions are discarded as stale.
    #[instrument(skip(self))]
    pub async fn get_mempool_entry(
        &self,
        tx_id: TransactionId,
        include_orphan_pool: bool,
        filter_transaction_pool: bool,
    ) -> Result<GetMempoolEntryResponse, RpcClientError> {
        self.call_matching(
            GetMempoolEntryRequest {
                tx_id,
                include_orphan_pool,
                filter_transaction_pool,
            },
            |response: &GetMempoolEntryResponse| answers_mempool_entry_request(&tx_id, response),
        )
        .await
    }

    #[instrument(skip(self))]
    pub async fn get_mempool_entries(
        &self,
        include_orphan_pool: bool,
        filter_transaction_pool: bool,
    ) -> Result<GetMempoolEntriesResponse, RpcClientError> {
        self.call(GetMempoolEntriesRequest {
            include_orphan_pool,
            filter_transaction_pool,
        })
        .await
    }

    #[instrument(skip(self))]
    pub async fn get_mempool_entries_by_addresses(
        &self,
        addresses: Vec<String>,
        include_orphan_pool: bool,
        filter_transaction_pool: bool,
    ) -> Result<GetMempoolEntriesByAddressesResponse, RpcClientError> {
        self.call(GetMempoolEntriesByAddressesRequest {
            addresses,
            include_orphan_pool,
            filter_transaction_pool,
        })
        .await
    }

    // ═══════════════════════════════════════════════════════════════════════
    // UTXO INDEX
    // ═══════════════════════════════════════════════════════════════════════

    #[instrument(skip(self))]
    pub async fn get_utxos_by_addresses(
        &self,
        addresses: Vec<String>,
    ) -> Result<GetUtxosByAddressesResponse, RpcClientError> {
        self.call(GetUtxosByAddressesRequest { addresses }).await
    }

    #[instrument(skip(self))]
    pub async fn get_balance_by_address(
        &self,
        address: String,
    ) -> Result<GetBalanceByAddressResponse, RpcClientError> {
        self.call(GetBalanceByAddressRequest { address }).await
    }

    #[instrument(skip(self))]
    pub async fn get_balances_by_addresses(
        &self,
        addresses: Vec<String>,
    ) -> Result<GetBalancesByAddressesResponse, RpcClientError> {
        self.call(GetBalancesByAddressesRequest { addresses }).await
    }
}

/// Whether a submission response answers the call for `expected`.
///
/// Older servers omit the id on failure. For those, an error message that
/// names the expected id is accepted. The match is textual and can in
/// principle accept the wrong response; it is kept only for compatibility.
pub(crate) fn answers_submission(
    expected: &TransactionId,
    transaction_id: Option<&TransactionId>,
    error: Option<&RpcError>,
) -> bool {
    match (transaction_id, error) {
        (Some(id), _) => id == expected,
        (None, Some(error)) => error.message.contains(&expected.to_hex()),
        (None, None) => false,
    }
}

/// Whether a block response answers the call for `expected`.
///
/// The node's own hash in the verbose data wins over a locally computed
/// header hash. An error-only response names no block and is accepted.
pub(crate) fn answers_block_request(expected: &DomainHash, response: &GetBlockResponse) -> bool {
    match &response.block {
        Some(block) => {
            let hash = block
                .verbose_data
                .as_ref()
                .map_or_else(|| block.block.hash(), |verbose| verbose.hash);
            hash == *expected
        }
        None => true,
    }
}

/// Whether a mempool entry response answers the call for `expected`.
/// An error-only response names no transaction and is accepted.
pub(crate) fn answers_mempool_entry_request(
    expected: &TransactionId,
    response: &GetMempoolEntryResponse,
) -> bool {
    response
        .entry
        .as_ref()
        .map_or(true, |entry| entry.transaction.id() == *expected)
}
