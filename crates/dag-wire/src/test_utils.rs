//! Populated sample messages for codec tests.
//!
//! `sample` matches on every `Command`, so a new kind does not compile
//! until it has a sample here too.

use crate::catalog::{Command, DomainMessage};
use crate::message::{p2p, rpc};
use shared_types::{
    BlockGhostdagData, BlockLevelParents, BluesAnticoneSize, DomainBlock, DomainBlockHeader,
    DomainHash, DomainOutpoint, DomainTransaction, DomainTransactionInput,
    DomainTransactionOutput, NetAddress, OutpointAndUtxoEntryPair, RpcError, ScriptPublicKey,
    SubnetworkId, UtxoEntry, U256,
};
use std::net::{IpAddr, Ipv4Addr, Ipv6Addr};
use uuid::Uuid;

pub(crate) fn hash(byte: u8) -> DomainHash {
    DomainHash::from_bytes([byte; 32])
}

/// `count` hashes, cycling through byte values.
pub(crate) fn hashes(count: usize) -> Vec<DomainHash> {
    (0..count).map(|i| hash(i as u8)).collect()
}

fn script(byte: u8) -> ScriptPublicKey {
    ScriptPublicKey {
        version: 0,
        script: vec![0x20, byte, byte, 0xac],
    }
}

pub(crate) fn transaction(lock_time: u64) -> DomainTransaction {
    DomainTransaction {
        version: 0,
        inputs: vec![DomainTransactionInput {
            previous_outpoint: DomainOutpoint {
                transaction_id: hash(0x10),
                index: 2,
            },
            signature_script: vec![0x41, 0x01, 0x02],
            sequence: u64::MAX,
            sig_op_count: 1,
        }],
        outputs: vec![DomainTransactionOutput {
            value: 50_000,
            script_public_key: script(0x11),
        }],
        lock_time,
        subnetwork_id: SubnetworkId::NATIVE,
        gas: 0,
        payload: vec![],
    }
}

/// A header with `levels` parent levels of `parents_per_level` hashes each.
pub(crate) fn header_with(levels: usize, parents_per_level: usize) -> DomainBlockHeader {
    DomainBlockHeader {
        version: 1,
        parents: (0..levels)
            .map(|_| BlockLevelParents {
                parent_hashes: hashes(parents_per_level),
            })
            .collect(),
        hash_merkle_root: hash(0xA1),
        accepted_id_merkle_root: hash(0xA2),
        utxo_commitment: hash(0xA3),
        timestamp: 1_700_000_000_000,
        bits: 0x1e7f_ffff,
        nonce: 7,
        daa_score: 1234,
        blue_work: U256::from(0xdead_beefu64),
        blue_score: 99,
        pruning_point: hash(0xA4),
    }
}

pub(crate) fn header() -> DomainBlockHeader {
    header_with(2, 3)
}

pub(crate) fn block() -> DomainBlock {
    DomainBlock {
        header: header(),
        transactions: vec![
            DomainTransaction {
                subnetwork_id: SubnetworkId::COINBASE,
                payload: vec![0xCA, 0xFE],
                ..Default::default()
            },
            transaction(0),
        ],
    }
}

fn utxo_entry() -> UtxoEntry {
    UtxoEntry {
        amount: 1_000,
        script_public_key: script(0x22),
        block_daa_score: 77,
        is_coinbase: false,
    }
}

fn ghostdag_data() -> BlockGhostdagData {
    BlockGhostdagData {
        blue_score: 40,
        blue_work: U256::MAX,
        selected_parent: hash(0x30),
        merge_set_blues: vec![hash(0x31), hash(0x32)],
        merge_set_reds: vec![hash(0x33)],
        blues_anticone_sizes: vec![BluesAnticoneSize {
            blue_hash: hash(0x31),
            anticone_size: 3,
        }],
    }
}

fn rpc_block() -> rpc::RpcBlock {
    rpc::RpcBlock {
        block: block(),
        verbose_data: Some(rpc::RpcBlockVerboseData {
            hash: hash(0x40),
            difficulty: 1.5,
            selected_parent_hash: hash(0x41),
            transaction_ids: vec![hash(0x42)],
            is_header_only: false,
            blue_score: 12,
            children_hashes: vec![hash(0x43)],
            merge_set_blues_hashes: vec![hash(0x44)],
            merge_set_reds_hashes: vec![],
            is_chain_block: true,
        }),
    }
}

fn mempool_entry() -> rpc::MempoolEntry {
    rpc::MempoolEntry {
        fee: 120,
        transaction: transaction(3),
        is_orphan: true,
    }
}

fn accepted_ids() -> Vec<rpc::AcceptedTransactionIds> {
    vec![rpc::AcceptedTransactionIds {
        accepting_block_hash: hash(0x50),
        accepted_transaction_ids: vec![hash(0x51), hash(0x52)],
    }]
}

fn utxos_entry(address: &str, removed: bool) -> rpc::UtxosByAddressesEntry {
    rpc::UtxosByAddressesEntry {
        address: address.into(),
        outpoint: DomainOutpoint {
            transaction_id: hash(0x60),
            index: 1,
        },
        utxo_entry: (!removed).then(utxo_entry),
    }
}

fn addresses() -> Vec<String> {
    vec!["kaspa:qz0abc".into(), "kaspa:qr9xyz".into()]
}

fn error(message: &str) -> Option<RpcError> {
    Some(RpcError::new(message))
}

/// One fully populated message of kind `command`.
pub(crate) fn sample(command: Command) -> DomainMessage {
    match command {
        // Peer-to-peer gossip
        Command::Version => p2p::VersionMessage {
            protocol_version: 5,
            network: "kaspa-mainnet".into(),
            services: 1,
            timestamp: 1_700_000_000_000,
            address: Some(NetAddress {
                timestamp: 1_699_999_000,
                ip: IpAddr::V6(Ipv6Addr::LOCALHOST),
                port: 16111,
            }),
            id: Uuid::from_bytes([9; 16]),
            user_agent: "/kaspad:0.12.0/".into(),
            disable_relay_tx: true,
            subnetwork_id: Some(SubnetworkId::REGISTRY),
        }
        .into(),
        Command::Verack => p2p::VerackMessage.into(),
        Command::RequestAddresses => p2p::RequestAddressesMessage {
            include_all_subnetworks: false,
            subnetwork_id: Some(SubnetworkId::COINBASE),
        }
        .into(),
        Command::Addresses => p2p::AddressesMessage {
            address_list: vec![
                NetAddress {
                    timestamp: 1,
                    ip: IpAddr::V4(Ipv4Addr::new(10, 0, 0, 1)),
                    port: 16111,
                },
                NetAddress {
                    timestamp: 2,
                    ip: IpAddr::V6(Ipv6Addr::new(0x2001, 0xdb8, 0, 0, 0, 0, 0, 1)),
                    port: 16112,
                },
            ],
        }
        .into(),
        Command::RequestHeaders => p2p::RequestHeadersMessage {
            low_hash: hash(1),
            high_hash: hash(2),
        }
        .into(),
        Command::RequestNextHeaders => p2p::RequestNextHeadersMessage.into(),
        Command::BlockHeaders => p2p::BlockHeadersMessage {
            block_headers: vec![header(), header_with(1, 1)],
        }
        .into(),
        Command::DoneHeaders => p2p::DoneHeadersMessage.into(),
        Command::Block => p2p::BlockMessage { block: block() }.into(),
        Command::Transaction => p2p::TransactionMessage {
            transaction: transaction(9),
        }
        .into(),
        Command::InvRelayBlock => p2p::InvRelayBlockMessage { hash: hash(3) }.into(),
        Command::RequestRelayBlocks => p2p::RequestRelayBlocksMessage { hashes: hashes(4) }.into(),
        Command::InvTransactions => p2p::InvTransactionsMessage { ids: hashes(5) }.into(),
        Command::RequestTransactions => p2p::RequestTransactionsMessage { ids: hashes(2) }.into(),
        Command::TransactionNotFound => p2p::TransactionNotFoundMessage { id: hash(6) }.into(),
        Command::Ping => p2p::PingMessage { nonce: 42 }.into(),
        Command::Pong => p2p::PongMessage { nonce: 43 }.into(),
        Command::Reject => p2p::RejectMessage {
            reason: "protocol version too old".into(),
        }
        .into(),
        Command::RequestIbdBlocks => p2p::RequestIbdBlocksMessage { hashes: hashes(3) }.into(),
        Command::IbdBlock => p2p::IbdBlockMessage { block: block() }.into(),
        Command::RequestBlockLocator => p2p::RequestBlockLocatorMessage {
            high_hash: hash(7),
            limit: 20,
        }
        .into(),
        Command::BlockLocator => p2p::BlockLocatorMessage { hashes: hashes(6) }.into(),
        Command::RequestPruningPointUtxoSet => p2p::RequestPruningPointUtxoSetMessage {
            pruning_point_hash: hash(8),
        }
        .into(),
        Command::PruningPointUtxoSetChunk => p2p::PruningPointUtxoSetChunkMessage {
            outpoint_and_utxo_entry_pairs: vec![OutpointAndUtxoEntryPair {
                outpoint: DomainOutpoint {
                    transaction_id: hash(9),
                    index: 0,
                },
                utxo_entry: utxo_entry(),
            }],
        }
        .into(),
        Command::RequestNextPruningPointUtxoSetChunk => {
            p2p::RequestNextPruningPointUtxoSetChunkMessage.into()
        }
        Command::DonePruningPointUtxoSetChunks => p2p::DonePruningPointUtxoSetChunksMessage.into(),
        Command::UnexpectedPruningPoint => p2p::UnexpectedPruningPointMessage.into(),
        Command::IbdBlockLocator => p2p::IbdBlockLocatorMessage {
            target_hash: hash(10),
            block_locator_hashes: hashes(4),
        }
        .into(),
        Command::IbdBlockLocatorHighestHash => p2p::IbdBlockLocatorHighestHashMessage {
            highest_hash: hash(11),
        }
        .into(),
        Command::IbdBlockLocatorHighestHashNotFound => {
            p2p::IbdBlockLocatorHighestHashNotFoundMessage.into()
        }
        Command::BlockWithTrustedData => p2p::BlockWithTrustedDataMessage {
            block: block(),
            daa_score: 500,
            daa_window: vec![p2p::TrustedDataDaaBlock {
                block: block(),
                ghostdag_data: ghostdag_data(),
            }],
            ghostdag_data: vec![p2p::BlockGhostdagDataHashPair {
                hash: hash(12),
                ghostdag_data: ghostdag_data(),
            }],
        }
        .into(),
        Command::DoneBlocksWithTrustedData => p2p::DoneBlocksWithTrustedDataMessage.into(),
        Command::RequestPruningPointAndItsAnticone => {
            p2p::RequestPruningPointAndItsAnticoneMessage.into()
        }
        Command::RequestPruningPointProof => p2p::RequestPruningPointProofMessage.into(),
        Command::PruningPointProof => p2p::PruningPointProofMessage {
            headers: vec![vec![header()], vec![], vec![header_with(1, 2)]],
        }
        .into(),
        Command::PruningPoints => p2p::PruningPointsMessage {
            headers: vec![header(), header_with(3, 1)],
        }
        .into(),
        Command::Ready => p2p::ReadyMessage.into(),
        Command::RequestAnticone => p2p::RequestAnticoneMessage {
            block_hash: hash(13),
            context_hash: hash(14),
        }
        .into(),
        Command::RequestIbdChainBlockLocator => p2p::RequestIbdChainBlockLocatorMessage {
            low_hash: Some(hash(15)),
            high_hash: None,
        }
        .into(),
        Command::IbdChainBlockLocator => p2p::IbdChainBlockLocatorMessage {
            block_locator_hashes: hashes(8),
        }
        .into(),
        Command::TrustedData => p2p::TrustedDataMessage {
            daa_window: vec![p2p::TrustedDataDaaHeader {
                header: header(),
                ghostdag_data: ghostdag_data(),
            }],
            ghostdag_data: vec![p2p::BlockGhostdagDataHashPair {
                hash: hash(16),
                ghostdag_data: BlockGhostdagData::default(),
            }],
        }
        .into(),

        // RPC requests
        Command::GetCurrentNetworkRequest => rpc::GetCurrentNetworkRequest.into(),
        Command::SubmitBlockRequest => rpc::SubmitBlockRequest {
            block: block(),
            allow_non_daa_blocks: true,
        }
        .into(),
        Command::GetBlockTemplateRequest => rpc::GetBlockTemplateRequest {
            pay_address: "kaspa:qz0abc".into(),
            extra_data: "miner/1.0".into(),
        }
        .into(),
        Command::NotifyBlockAddedRequest => rpc::NotifyBlockAddedRequest.into(),
        Command::GetPeerAddressesRequest => rpc::GetPeerAddressesRequest.into(),
        Command::GetSelectedTipHashRequest => rpc::GetSelectedTipHashRequest.into(),
        Command::GetMempoolEntryRequest => rpc::GetMempoolEntryRequest {
            tx_id: hash(20),
            include_orphan_pool: true,
            filter_transaction_pool: false,
        }
        .into(),
        Command::GetMempoolEntriesRequest => rpc::GetMempoolEntriesRequest {
            include_orphan_pool: false,
            filter_transaction_pool: true,
        }
        .into(),
        Command::GetConnectedPeerInfoRequest => rpc::GetConnectedPeerInfoRequest.into(),
        Command::AddPeerRequest => rpc::AddPeerRequest {
            address: "10.0.0.2:16111".into(),
            is_permanent: true,
        }
        .into(),
        Command::SubmitTransactionRequest => rpc::SubmitTransactionRequest {
            transaction: transaction(21),
            allow_orphan: true,
        }
        .into(),
        Command::SubmitTransactionReplacementRequest => rpc::SubmitTransactionReplacementRequest {
            transaction: transaction(22),
        }
        .into(),
        Command::NotifyVirtualSelectedParentChainChangedRequest => {
            rpc::NotifyVirtualSelectedParentChainChangedRequest {
                include_accepted_transaction_ids: true,
            }
            .into()
        }
        Command::GetBlockRequest => rpc::GetBlockRequest {
            hash: hash(23),
            include_transactions: true,
        }
        .into(),
        Command::GetSubnetworkRequest => rpc::GetSubnetworkRequest {
            subnetwork_id: SubnetworkId::REGISTRY,
        }
        .into(),
        Command::GetVirtualSelectedParentChainFromBlockRequest => {
            rpc::GetVirtualSelectedParentChainFromBlockRequest {
                start_hash: hash(24),
                include_accepted_transaction_ids: false,
            }
            .into()
        }
        Command::GetBlocksRequest => rpc::GetBlocksRequest {
            low_hash: Some(hash(25)),
            include_blocks: true,
            include_transactions: false,
        }
        .into(),
        Command::GetBlockCountRequest => rpc::GetBlockCountRequest.into(),
        Command::GetBlockDagInfoRequest => rpc::GetBlockDagInfoRequest.into(),
        Command::ResolveFinalityConflictRequest => rpc::ResolveFinalityConflictRequest {
            finality_block_hash: hash(26),
        }
        .into(),
        Command::NotifyFinalityConflictsRequest => rpc::NotifyFinalityConflictsRequest.into(),
        Command::ShutdownRequest => rpc::ShutdownRequest.into(),
        Command::GetHeadersRequest => rpc::GetHeadersRequest {
            start_hash: hash(27),
            limit: 100,
            is_ascending: true,
        }
        .into(),
        Command::NotifyUtxosChangedRequest => rpc::NotifyUtxosChangedRequest {
            addresses: addresses(),
        }
        .into(),
        Command::StopNotifyingUtxosChangedRequest => rpc::StopNotifyingUtxosChangedRequest {
            addresses: addresses(),
        }
        .into(),
        Command::GetUtxosByAddressesRequest => rpc::GetUtxosByAddressesRequest {
            addresses: addresses(),
        }
        .into(),
        Command::GetBalanceByAddressRequest => rpc::GetBalanceByAddressRequest {
            address: "kaspa:qz0abc".into(),
        }
        .into(),
        Command::GetBalancesByAddressesRequest => rpc::GetBalancesByAddressesRequest {
            addresses: addresses(),
        }
        .into(),
        Command::GetVirtualSelectedParentBlueScoreRequest => {
            rpc::GetVirtualSelectedParentBlueScoreRequest.into()
        }
        Command::NotifyVirtualSelectedParentBlueScoreChangedRequest => {
            rpc::NotifyVirtualSelectedParentBlueScoreChangedRequest.into()
        }
        Command::BanRequest => rpc::BanRequest {
            ip: "10.0.0.3".into(),
        }
        .into(),
        Command::UnbanRequest => rpc::UnbanRequest {
            ip: "10.0.0.3".into(),
        }
        .into(),
        Command::GetInfoRequest => rpc::GetInfoRequest.into(),
        Command::NotifyPruningPointUtxoSetOverrideRequest => {
            rpc::NotifyPruningPointUtxoSetOverrideRequest.into()
        }
        Command::StopNotifyingPruningPointUtxoSetOverrideRequest => {
            rpc::StopNotifyingPruningPointUtxoSetOverrideRequest.into()
        }
        Command::EstimateNetworkHashesPerSecondRequest => {
            rpc::EstimateNetworkHashesPerSecondRequest {
                window_size: 1000,
                start_hash: Some(hash(28)),
            }
            .into()
        }
        Command::NotifyVirtualDaaScoreChangedRequest => {
            rpc::NotifyVirtualDaaScoreChangedRequest.into()
        }
        Command::GetMempoolEntriesByAddressesRequest => rpc::GetMempoolEntriesByAddressesRequest {
            addresses: addresses(),
            include_orphan_pool: true,
            filter_transaction_pool: true,
        }
        .into(),
        Command::GetCoinSupplyRequest => rpc::GetCoinSupplyRequest.into(),
        Command::NotifyNewBlockTemplateRequest => rpc::NotifyNewBlockTemplateRequest.into(),

        // RPC responses
        Command::GetCurrentNetworkResponse => rpc::GetCurrentNetworkResponse {
            current_network: "kaspa-testnet-11".into(),
            error: None,
        }
        .into(),
        Command::SubmitBlockResponse => rpc::SubmitBlockResponse {
            reject_reason: rpc::SubmitBlockRejectReason::BlockInvalid,
            error: error("block is invalid"),
        }
        .into(),
        Command::GetBlockTemplateResponse => rpc::GetBlockTemplateResponse {
            block: Some(block()),
            is_synced: true,
            error: None,
        }
        .into(),
        Command::NotifyBlockAddedResponse => rpc::NotifyBlockAddedResponse { error: None }.into(),
        Command::GetPeerAddressesResponse => rpc::GetPeerAddressesResponse {
            addresses: vec!["10.0.0.4:16111".into()],
            banned_addresses: vec!["10.0.0.5:16111".into()],
            error: None,
        }
        .into(),
        Command::GetSelectedTipHashResponse => rpc::GetSelectedTipHashResponse {
            selected_tip_hash: Some(hash(30)),
            error: None,
        }
        .into(),
        Command::GetMempoolEntryResponse => rpc::GetMempoolEntryResponse {
            entry: Some(mempool_entry()),
            error: None,
        }
        .into(),
        Command::GetMempoolEntriesResponse => rpc::GetMempoolEntriesResponse {
            entries: vec![mempool_entry()],
            error: None,
        }
        .into(),
        Command::GetConnectedPeerInfoResponse => rpc::GetConnectedPeerInfoResponse {
            infos: vec![rpc::PeerInfo {
                id: "a1b2".into(),
                address: "10.0.0.6:16111".into(),
                last_ping_duration_ms: 35,
                is_outbound: true,
                time_offset: -4,
                user_agent: "/kaspad:0.12.0/".into(),
                advertised_protocol_version: 5,
                time_connected: 3_600,
                is_ibd_peer: false,
            }],
            error: None,
        }
        .into(),
        Command::AddPeerResponse => rpc::AddPeerResponse {
            error: error("peer already connected"),
        }
        .into(),
        Command::SubmitTransactionResponse => rpc::SubmitTransactionResponse {
            transaction_id: Some(transaction(21).id()),
            error: None,
        }
        .into(),
        Command::SubmitTransactionReplacementResponse => {
            rpc::SubmitTransactionReplacementResponse {
                transaction_id: Some(transaction(22).id()),
                replaced_transaction: Some(transaction(2)),
                error: None,
            }
            .into()
        }
        Command::NotifyVirtualSelectedParentChainChangedResponse => {
            rpc::NotifyVirtualSelectedParentChainChangedResponse { error: None }.into()
        }
        Command::GetBlockResponse => rpc::GetBlockResponse {
            block: Some(rpc_block()),
            error: None,
        }
        .into(),
        Command::GetSubnetworkResponse => rpc::GetSubnetworkResponse {
            gas_limit: 250_000,
            error: None,
        }
        .into(),
        Command::GetVirtualSelectedParentChainFromBlockResponse => {
            rpc::GetVirtualSelectedParentChainFromBlockResponse {
                removed_chain_block_hashes: vec![hash(31)],
                added_chain_block_hashes: hashes(2),
                accepted_transaction_ids: accepted_ids(),
                error: None,
            }
            .into()
        }
        Command::GetBlocksResponse => rpc::GetBlocksResponse {
            block_hashes: hashes(2),
            blocks: vec![rpc_block(), rpc::RpcBlock {
                block: block(),
                verbose_data: None,
            }],
            error: None,
        }
        .into(),
        Command::GetBlockCountResponse => rpc::GetBlockCountResponse {
            block_count: 10,
            header_count: 12,
            error: None,
        }
        .into(),
        Command::GetBlockDagInfoResponse => rpc::GetBlockDagInfoResponse {
            network_name: "kaspa-mainnet".into(),
            block_count: 10,
            header_count: 12,
            tip_hashes: hashes(2),
            difficulty: 3.25,
            past_median_time: 1_700_000_000_000,
            virtual_parent_hashes: vec![hash(32)],
            pruning_point_hash: Some(hash(33)),
            virtual_daa_score: 900,
            error: None,
        }
        .into(),
        Command::ResolveFinalityConflictResponse => {
            rpc::ResolveFinalityConflictResponse { error: None }.into()
        }
        Command::NotifyFinalityConflictsResponse => {
            rpc::NotifyFinalityConflictsResponse { error: None }.into()
        }
        Command::ShutdownResponse => rpc::ShutdownResponse { error: None }.into(),
        Command::GetHeadersResponse => rpc::GetHeadersResponse {
            headers: vec![header()],
            error: None,
        }
        .into(),
        Command::NotifyUtxosChangedResponse => {
            rpc::NotifyUtxosChangedResponse { error: None }.into()
        }
        Command::StopNotifyingUtxosChangedResponse => {
            rpc::StopNotifyingUtxosChangedResponse { error: None }.into()
        }
        Command::GetUtxosByAddressesResponse => rpc::GetUtxosByAddressesResponse {
            entries: vec![utxos_entry("kaspa:qz0abc", false)],
            error: None,
        }
        .into(),
        Command::GetBalanceByAddressResponse => rpc::GetBalanceByAddressResponse {
            balance: 7_000,
            error: None,
        }
        .into(),
        Command::GetBalancesByAddressesResponse => rpc::GetBalancesByAddressesResponse {
            entries: vec![
                rpc::BalancesByAddressEntry {
                    address: "kaspa:qz0abc".into(),
                    balance: 7_000,
                    error: None,
                },
                rpc::BalancesByAddressEntry {
                    address: "kaspa:bad".into(),
                    balance: 0,
                    error: error("invalid address"),
                },
            ],
            error: None,
        }
        .into(),
        Command::GetVirtualSelectedParentBlueScoreResponse => {
            rpc::GetVirtualSelectedParentBlueScoreResponse {
                blue_score: 4_321,
                error: None,
            }
            .into()
        }
        Command::NotifyVirtualSelectedParentBlueScoreChangedResponse => {
            rpc::NotifyVirtualSelectedParentBlueScoreChangedResponse { error: None }.into()
        }
        Command::BanResponse => rpc::BanResponse { error: None }.into(),
        Command::UnbanResponse => rpc::UnbanResponse {
            error: error("not banned"),
        }
        .into(),
        Command::GetInfoResponse => rpc::GetInfoResponse {
            p2p_id: "a1b2".into(),
            mempool_size: 17,
            server_version: "0.12.0".into(),
            is_utxo_indexed: true,
            is_synced: true,
            error: None,
        }
        .into(),
        Command::NotifyPruningPointUtxoSetOverrideResponse => {
            rpc::NotifyPruningPointUtxoSetOverrideResponse { error: None }.into()
        }
        Command::StopNotifyingPruningPointUtxoSetOverrideResponse => {
            rpc::StopNotifyingPruningPointUtxoSetOverrideResponse { error: None }.into()
        }
        Command::EstimateNetworkHashesPerSecondResponse => {
            rpc::EstimateNetworkHashesPerSecondResponse {
                network_hashes_per_second: 1 << 40,
                error: None,
            }
            .into()
        }
        Command::NotifyVirtualDaaScoreChangedResponse => {
            rpc::NotifyVirtualDaaScoreChangedResponse { error: None }.into()
        }
        Command::GetMempoolEntriesByAddressesResponse => {
            rpc::GetMempoolEntriesByAddressesResponse {
                entries: vec![rpc::MempoolEntryByAddress {
                    address: "kaspa:qz0abc".into(),
                    sending: vec![mempool_entry()],
                    receiving: vec![],
                }],
                error: None,
            }
            .into()
        }
        Command::GetCoinSupplyResponse => rpc::GetCoinSupplyResponse {
            max_sompi: 2_900_000_000_000_000_000,
            circulating_sompi: 2_400_000_000_000_000_000,
            error: None,
        }
        .into(),
        Command::NotifyNewBlockTemplateResponse => {
            rpc::NotifyNewBlockTemplateResponse { error: None }.into()
        }

        // RPC notifications
        Command::BlockAddedNotification => rpc::BlockAddedNotification { block: rpc_block() }.into(),
        Command::VirtualSelectedParentChainChangedNotification => {
            rpc::VirtualSelectedParentChainChangedNotification {
                removed_chain_block_hashes: vec![],
                added_chain_block_hashes: hashes(3),
                accepted_transaction_ids: accepted_ids(),
            }
            .into()
        }
        Command::FinalityConflictNotification => rpc::FinalityConflictNotification {
            violating_block_hash: hash(34),
        }
        .into(),
        Command::FinalityConflictResolvedNotification => {
            rpc::FinalityConflictResolvedNotification {
                finality_block_hash: hash(35),
            }
            .into()
        }
        Command::UtxosChangedNotification => rpc::UtxosChangedNotification {
            added: vec![utxos_entry("kaspa:qz0abc", false)],
            removed: vec![utxos_entry("kaspa:qr9xyz", true)],
        }
        .into(),
        Command::VirtualSelectedParentBlueScoreChangedNotification => {
            rpc::VirtualSelectedParentBlueScoreChangedNotification {
                virtual_selected_parent_blue_score: 4_322,
            }
            .into()
        }
        Command::PruningPointUtxoSetOverrideNotification => {
            rpc::PruningPointUtxoSetOverrideNotification.into()
        }
        Command::VirtualDaaScoreChangedNotification => rpc::VirtualDaaScoreChangedNotification {
            virtual_daa_score: 901,
        }
        .into(),
        Command::NewBlockTemplateNotification => rpc::NewBlockTemplateNotification.into(),
    }
}
