//! RPC dialect conversions.
//!
//! Identifiers travel as lowercase hex. An empty string stands for an
//! absent optional hash.

use super::{check_block_transactions, check_max, convert_all, narrow_u16, narrow_u8, required};
use crate::errors::ConversionError;
use crate::limits::{MAX_BLOCK_LEVELS, MAX_BLOCK_PARENTS};
use crate::message::rpc::*;
use crate::wire::rpc as wire;
use primitive_types::U256;
use shared_types::{
    BlockLevelParents, DomainBlock, DomainBlockHeader, DomainHash, DomainOutpoint,
    DomainTransaction, DomainTransactionInput, DomainTransactionOutput, ParseError, RpcError,
    ScriptPublicKey, SubnetworkId, UtxoEntry,
};

/// Messages whose fields carry over unchanged.
macro_rules! field_conversion {
    ($($wire:ident => $domain:ident { $($field:ident),* $(,)? };)+) => {
        $(
            impl From<wire::$wire> for $domain {
                fn from(message: wire::$wire) -> Self {
                    Self {
                        $($field: message.$field,)*
                    }
                }
            }

            impl From<$domain> for wire::$wire {
                fn from(message: $domain) -> Self {
                    Self {
                        $($field: message.$field,)*
                    }
                }
            }
        )+
    };
}

/// Responses whose fields carry over unchanged apart from the error.
macro_rules! response_conversion {
    ($($wire:ident => $domain:ident { $($field:ident),* $(,)? };)+) => {
        $(
            impl From<wire::$wire> for $domain {
                fn from(message: wire::$wire) -> Self {
                    Self {
                        $($field: message.$field,)*
                        error: message.error.map(RpcError::from),
                    }
                }
            }

            impl From<$domain> for wire::$wire {
                fn from(message: $domain) -> Self {
                    Self {
                        $($field: message.$field,)*
                        error: message.error.map(wire::RpcError::from),
                    }
                }
            }
        )+
    };
}

// =============================================================================
// HELPERS
// =============================================================================

impl From<wire::RpcError> for RpcError {
    fn from(error: wire::RpcError) -> Self {
        RpcError::new(error.message)
    }
}

impl From<RpcError> for wire::RpcError {
    fn from(error: RpcError) -> Self {
        Self {
            message: error.message,
        }
    }
}

fn parse_hash(text: &str) -> Result<DomainHash, ConversionError> {
    Ok(DomainHash::from_hex(text)?)
}

fn parse_optional_hash(text: &str) -> Result<Option<DomainHash>, ConversionError> {
    if text.is_empty() {
        return Ok(None);
    }
    parse_hash(text).map(Some)
}

fn optional_hash_to_hex(hash: Option<DomainHash>) -> String {
    hash.map(|hash| hash.to_hex()).unwrap_or_default()
}

fn parse_hashes(hashes: &[String]) -> Result<Vec<DomainHash>, ConversionError> {
    hashes.iter().map(|hash| parse_hash(hash)).collect()
}

fn hashes_to_hex(hashes: Vec<DomainHash>) -> Vec<String> {
    hashes.iter().map(DomainHash::to_hex).collect()
}

fn decode_hex(what: &'static str, text: &str) -> Result<Vec<u8>, ConversionError> {
    hex::decode(text).map_err(|e| {
        ParseError::InvalidHex {
            what,
            reason: e.to_string(),
        }
        .into()
    })
}

fn parse_blue_work(text: &str) -> Result<U256, ConversionError> {
    U256::from_str_radix(text, 16).map_err(|e| ConversionError::Invalid {
        what: "RpcBlockHeader.blue_work",
        reason: e.to_string(),
    })
}

fn map_error(error: Option<wire::RpcError>) -> Option<RpcError> {
    error.map(RpcError::from)
}

fn wire_error(error: Option<RpcError>) -> Option<wire::RpcError> {
    error.map(wire::RpcError::from)
}

/// Enforce that exactly one of payload and error is populated.
fn exclusive<T>(
    message: &'static str,
    field: &'static str,
    payload: Option<T>,
    has_error: bool,
) -> Result<Option<T>, ConversionError> {
    match (payload, has_error) {
        (Some(_), true) => Err(ConversionError::BothErrorAndResponse(message)),
        (None, false) => Err(ConversionError::NilField(field)),
        (payload, _) => Ok(payload),
    }
}

// =============================================================================
// TRANSACTIONS
// =============================================================================

impl TryFrom<wire::RpcScriptPublicKey> for ScriptPublicKey {
    type Error = ConversionError;

    fn try_from(script: wire::RpcScriptPublicKey) -> Result<Self, Self::Error> {
        Ok(Self {
            version: narrow_u16("RpcScriptPublicKey.version", script.version)?,
            script: decode_hex("RpcScriptPublicKey.script_public_key", &script.script_public_key)?,
        })
    }
}

impl From<ScriptPublicKey> for wire::RpcScriptPublicKey {
    fn from(script: ScriptPublicKey) -> Self {
        Self {
            version: script.version.into(),
            script_public_key: hex::encode(script.script),
        }
    }
}

impl TryFrom<wire::RpcOutpoint> for DomainOutpoint {
    type Error = ConversionError;

    fn try_from(outpoint: wire::RpcOutpoint) -> Result<Self, Self::Error> {
        Ok(Self {
            transaction_id: parse_hash(&outpoint.transaction_id)?,
            index: outpoint.index,
        })
    }
}

impl From<DomainOutpoint> for wire::RpcOutpoint {
    fn from(outpoint: DomainOutpoint) -> Self {
        Self {
            transaction_id: outpoint.transaction_id.to_hex(),
            index: outpoint.index,
        }
    }
}

impl TryFrom<wire::RpcTransactionInput> for DomainTransactionInput {
    type Error = ConversionError;

    fn try_from(input: wire::RpcTransactionInput) -> Result<Self, Self::Error> {
        Ok(Self {
            previous_outpoint: required(
                input.previous_outpoint,
                "RpcTransactionInput.previous_outpoint",
            )?
            .try_into()?,
            signature_script: decode_hex(
                "RpcTransactionInput.signature_script",
                &input.signature_script,
            )?,
            sequence: input.sequence,
            sig_op_count: narrow_u8("RpcTransactionInput.sig_op_count", input.sig_op_count)?,
        })
    }
}

impl From<DomainTransactionInput> for wire::RpcTransactionInput {
    fn from(input: DomainTransactionInput) -> Self {
        Self {
            previous_outpoint: Some(input.previous_outpoint.into()),
            signature_script: hex::encode(input.signature_script),
            sequence: input.sequence,
            sig_op_count: input.sig_op_count.into(),
        }
    }
}

impl TryFrom<wire::RpcTransactionOutput> for DomainTransactionOutput {
    type Error = ConversionError;

    fn try_from(output: wire::RpcTransactionOutput) -> Result<Self, Self::Error> {
        Ok(Self {
            value: output.amount,
            script_public_key: required(
                output.script_public_key,
                "RpcTransactionOutput.script_public_key",
            )?
            .try_into()?,
        })
    }
}

impl From<DomainTransactionOutput> for wire::RpcTransactionOutput {
    fn from(output: DomainTransactionOutput) -> Self {
        Self {
            amount: output.value,
            script_public_key: Some(output.script_public_key.into()),
        }
    }
}

impl TryFrom<wire::RpcTransaction> for DomainTransaction {
    type Error = ConversionError;

    fn try_from(tx: wire::RpcTransaction) -> Result<Self, Self::Error> {
        Ok(Self {
            version: narrow_u16("RpcTransaction.version", tx.version)?,
            inputs: convert_all(tx.inputs)?,
            outputs: convert_all(tx.outputs)?,
            lock_time: tx.lock_time,
            subnetwork_id: SubnetworkId::from_hex(&tx.subnetwork_id)?,
            gas: tx.gas,
            payload: decode_hex("RpcTransaction.payload", &tx.payload)?,
        })
    }
}

impl From<DomainTransaction> for wire::RpcTransaction {
    fn from(tx: DomainTransaction) -> Self {
        Self {
            version: tx.version.into(),
            inputs: tx.inputs.into_iter().map(Into::into).collect(),
            outputs: tx.outputs.into_iter().map(Into::into).collect(),
            lock_time: tx.lock_time,
            subnetwork_id: tx.subnetwork_id.to_hex(),
            gas: tx.gas,
            payload: hex::encode(tx.payload),
        }
    }
}

// =============================================================================
// BLOCKS
// =============================================================================

impl TryFrom<wire::RpcBlockLevelParents> for BlockLevelParents {
    type Error = ConversionError;

    fn try_from(level: wire::RpcBlockLevelParents) -> Result<Self, Self::Error> {
        check_max("block parents", level.parent_hashes.len(), MAX_BLOCK_PARENTS)?;
        Ok(Self {
            parent_hashes: parse_hashes(&level.parent_hashes)?,
        })
    }
}

impl TryFrom<BlockLevelParents> for wire::RpcBlockLevelParents {
    type Error = ConversionError;

    fn try_from(level: BlockLevelParents) -> Result<Self, Self::Error> {
        check_max("block parents", level.parent_hashes.len(), MAX_BLOCK_PARENTS)?;
        Ok(Self {
            parent_hashes: hashes_to_hex(level.parent_hashes),
        })
    }
}

impl TryFrom<wire::RpcBlockHeader> for DomainBlockHeader {
    type Error = ConversionError;

    fn try_from(header: wire::RpcBlockHeader) -> Result<Self, Self::Error> {
        check_max("block levels", header.parents.len(), MAX_BLOCK_LEVELS)?;
        Ok(Self {
            version: narrow_u16("RpcBlockHeader.version", header.version)?,
            parents: convert_all(header.parents)?,
            hash_merkle_root: parse_hash(&header.hash_merkle_root)?,
            accepted_id_merkle_root: parse_hash(&header.accepted_id_merkle_root)?,
            utxo_commitment: parse_hash(&header.utxo_commitment)?,
            timestamp: header.timestamp,
            bits: header.bits,
            nonce: header.nonce,
            daa_score: header.daa_score,
            blue_work: parse_blue_work(&header.blue_work)?,
            blue_score: header.blue_score,
            pruning_point: parse_hash(&header.pruning_point)?,
        })
    }
}

impl TryFrom<DomainBlockHeader> for wire::RpcBlockHeader {
    type Error = ConversionError;

    fn try_from(header: DomainBlockHeader) -> Result<Self, Self::Error> {
        check_max("block levels", header.parents.len(), MAX_BLOCK_LEVELS)?;
        Ok(Self {
            version: header.version.into(),
            parents: convert_all(header.parents)?,
            hash_merkle_root: header.hash_merkle_root.to_hex(),
            accepted_id_merkle_root: header.accepted_id_merkle_root.to_hex(),
            utxo_commitment: header.utxo_commitment.to_hex(),
            timestamp: header.timestamp,
            bits: header.bits,
            nonce: header.nonce,
            daa_score: header.daa_score,
            blue_work: format!("{:x}", header.blue_work),
            pruning_point: header.pruning_point.to_hex(),
            blue_score: header.blue_score,
        })
    }
}

impl TryFrom<wire::RpcBlockVerboseData> for RpcBlockVerboseData {
    type Error = ConversionError;

    fn try_from(data: wire::RpcBlockVerboseData) -> Result<Self, Self::Error> {
        Ok(Self {
            hash: parse_hash(&data.hash)?,
            difficulty: data.difficulty,
            selected_parent_hash: parse_hash(&data.selected_parent_hash)?,
            transaction_ids: parse_hashes(&data.transaction_ids)?,
            is_header_only: data.is_header_only,
            blue_score: data.blue_score,
            children_hashes: parse_hashes(&data.children_hashes)?,
            merge_set_blues_hashes: parse_hashes(&data.merge_set_blues_hashes)?,
            merge_set_reds_hashes: parse_hashes(&data.merge_set_reds_hashes)?,
            is_chain_block: data.is_chain_block,
        })
    }
}

impl From<RpcBlockVerboseData> for wire::RpcBlockVerboseData {
    fn from(data: RpcBlockVerboseData) -> Self {
        Self {
            hash: data.hash.to_hex(),
            difficulty: data.difficulty,
            selected_parent_hash: data.selected_parent_hash.to_hex(),
            transaction_ids: hashes_to_hex(data.transaction_ids),
            is_header_only: data.is_header_only,
            blue_score: data.blue_score,
            children_hashes: hashes_to_hex(data.children_hashes),
            merge_set_blues_hashes: hashes_to_hex(data.merge_set_blues_hashes),
            merge_set_reds_hashes: hashes_to_hex(data.merge_set_reds_hashes),
            is_chain_block: data.is_chain_block,
        }
    }
}

impl TryFrom<wire::RpcBlock> for RpcBlock {
    type Error = ConversionError;

    fn try_from(block: wire::RpcBlock) -> Result<Self, Self::Error> {
        check_block_transactions(block.transactions.len())?;
        Ok(Self {
            block: DomainBlock {
                header: required(block.header, "RpcBlock.header")?.try_into()?,
                transactions: convert_all(block.transactions)?,
            },
            verbose_data: block
                .verbose_data
                .map(RpcBlockVerboseData::try_from)
                .transpose()?,
        })
    }
}

impl TryFrom<RpcBlock> for wire::RpcBlock {
    type Error = ConversionError;

    fn try_from(block: RpcBlock) -> Result<Self, Self::Error> {
        let RpcBlock {
            block,
            verbose_data,
        } = block;
        check_block_transactions(block.transactions.len())?;
        Ok(Self {
            header: Some(block.header.try_into()?),
            transactions: block.transactions.into_iter().map(Into::into).collect(),
            verbose_data: verbose_data.map(Into::into),
        })
    }
}

fn block_from_wire(block: wire::RpcBlock) -> Result<DomainBlock, ConversionError> {
    RpcBlock::try_from(block).map(|block| block.block)
}

fn block_to_wire(block: DomainBlock) -> Result<wire::RpcBlock, ConversionError> {
    wire::RpcBlock::try_from(RpcBlock {
        block,
        verbose_data: None,
    })
}

// =============================================================================
// UTXO, MEMPOOL AND PEERS
// =============================================================================

impl TryFrom<wire::RpcUtxoEntry> for UtxoEntry {
    type Error = ConversionError;

    fn try_from(entry: wire::RpcUtxoEntry) -> Result<Self, Self::Error> {
        Ok(Self {
            amount: entry.amount,
            script_public_key: required(entry.script_public_key, "RpcUtxoEntry.script_public_key")?
                .try_into()?,
            block_daa_score: entry.block_daa_score,
            is_coinbase: entry.is_coinbase,
        })
    }
}

impl From<UtxoEntry> for wire::RpcUtxoEntry {
    fn from(entry: UtxoEntry) -> Self {
        Self {
            amount: entry.amount,
            script_public_key: Some(entry.script_public_key.into()),
            block_daa_score: entry.block_daa_score,
            is_coinbase: entry.is_coinbase,
        }
    }
}

impl TryFrom<wire::UtxosByAddressesEntry> for UtxosByAddressesEntry {
    type Error = ConversionError;

    fn try_from(entry: wire::UtxosByAddressesEntry) -> Result<Self, Self::Error> {
        Ok(Self {
            address: entry.address,
            outpoint: required(entry.outpoint, "UtxosByAddressesEntry.outpoint")?.try_into()?,
            utxo_entry: entry.utxo_entry.map(UtxoEntry::try_from).transpose()?,
        })
    }
}

impl From<UtxosByAddressesEntry> for wire::UtxosByAddressesEntry {
    fn from(entry: UtxosByAddressesEntry) -> Self {
        Self {
            address: entry.address,
            outpoint: Some(entry.outpoint.into()),
            utxo_entry: entry.utxo_entry.map(Into::into),
        }
    }
}

impl TryFrom<wire::MempoolEntry> for MempoolEntry {
    type Error = ConversionError;

    fn try_from(entry: wire::MempoolEntry) -> Result<Self, Self::Error> {
        Ok(Self {
            fee: entry.fee,
            transaction: required(entry.transaction, "MempoolEntry.transaction")?.try_into()?,
            is_orphan: entry.is_orphan,
        })
    }
}

impl From<MempoolEntry> for wire::MempoolEntry {
    fn from(entry: MempoolEntry) -> Self {
        Self {
            fee: entry.fee,
            transaction: Some(entry.transaction.into()),
            is_orphan: entry.is_orphan,
        }
    }
}

impl TryFrom<wire::MempoolEntryByAddress> for MempoolEntryByAddress {
    type Error = ConversionError;

    fn try_from(entry: wire::MempoolEntryByAddress) -> Result<Self, Self::Error> {
        Ok(Self {
            address: entry.address,
            sending: convert_all(entry.sending)?,
            receiving: convert_all(entry.receiving)?,
        })
    }
}

impl From<MempoolEntryByAddress> for wire::MempoolEntryByAddress {
    fn from(entry: MempoolEntryByAddress) -> Self {
        Self {
            address: entry.address,
            sending: entry.sending.into_iter().map(Into::into).collect(),
            receiving: entry.receiving.into_iter().map(Into::into).collect(),
        }
    }
}

impl From<wire::GetConnectedPeerInfoMessage> for PeerInfo {
    fn from(info: wire::GetConnectedPeerInfoMessage) -> Self {
        Self {
            id: info.id,
            address: info.address,
            last_ping_duration_ms: info.last_ping_duration,
            is_outbound: info.is_outbound,
            time_offset: info.time_offset,
            user_agent: info.user_agent,
            advertised_protocol_version: info.advertised_protocol_version,
            time_connected: info.time_connected,
            is_ibd_peer: info.is_ibd_peer,
        }
    }
}

impl From<PeerInfo> for wire::GetConnectedPeerInfoMessage {
    fn from(info: PeerInfo) -> Self {
        Self {
            id: info.id,
            address: info.address,
            last_ping_duration: info.last_ping_duration_ms,
            is_outbound: info.is_outbound,
            time_offset: info.time_offset,
            user_agent: info.user_agent,
            advertised_protocol_version: info.advertised_protocol_version,
            time_connected: info.time_connected,
            is_ibd_peer: info.is_ibd_peer,
        }
    }
}

impl TryFrom<wire::AcceptedTransactionIds> for AcceptedTransactionIds {
    type Error = ConversionError;

    fn try_from(ids: wire::AcceptedTransactionIds) -> Result<Self, Self::Error> {
        Ok(Self {
            accepting_block_hash: parse_hash(&ids.accepting_block_hash)?,
            accepted_transaction_ids: parse_hashes(&ids.accepted_transaction_ids)?,
        })
    }
}

impl From<AcceptedTransactionIds> for wire::AcceptedTransactionIds {
    fn from(ids: AcceptedTransactionIds) -> Self {
        Self {
            accepting_block_hash: ids.accepting_block_hash.to_hex(),
            accepted_transaction_ids: hashes_to_hex(ids.accepted_transaction_ids),
        }
    }
}

impl From<wire::BalancesByAddressEntry> for BalancesByAddressEntry {
    fn from(entry: wire::BalancesByAddressEntry) -> Self {
        Self {
            address: entry.address,
            balance: entry.balance,
            error: map_error(entry.error),
        }
    }
}

impl From<BalancesByAddressEntry> for wire::BalancesByAddressEntry {
    fn from(entry: BalancesByAddressEntry) -> Self {
        Self {
            address: entry.address,
            balance: entry.balance,
            error: wire_error(entry.error),
        }
    }
}

impl TryFrom<i32> for SubmitBlockRejectReason {
    type Error = ConversionError;

    fn try_from(value: i32) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(Self::None),
            1 => Ok(Self::BlockInvalid),
            2 => Ok(Self::IsInIbd),
            other => Err(ConversionError::Invalid {
                what: "SubmitBlockResponseMessage.reject_reason",
                reason: format!("unknown reject reason {other}"),
            }),
        }
    }
}

impl From<SubmitBlockRejectReason> for i32 {
    fn from(reason: SubmitBlockRejectReason) -> Self {
        match reason {
            SubmitBlockRejectReason::None => 0,
            SubmitBlockRejectReason::BlockInvalid => 1,
            SubmitBlockRejectReason::IsInIbd => 2,
        }
    }
}

// =============================================================================
// REQUESTS
// =============================================================================

empty_message_conversion!(
    wire::EmptyMessage =>
    GetCurrentNetworkRequest,
    NotifyBlockAddedRequest,
    GetPeerAddressesRequest,
    GetSelectedTipHashRequest,
    GetConnectedPeerInfoRequest,
    GetBlockCountRequest,
    GetBlockDagInfoRequest,
    NotifyFinalityConflictsRequest,
    ShutdownRequest,
    GetVirtualSelectedParentBlueScoreRequest,
    NotifyVirtualSelectedParentBlueScoreChangedRequest,
    GetInfoRequest,
    NotifyPruningPointUtxoSetOverrideRequest,
    StopNotifyingPruningPointUtxoSetOverrideRequest,
    NotifyVirtualDaaScoreChangedRequest,
    GetCoinSupplyRequest,
    NotifyNewBlockTemplateRequest,
    PruningPointUtxoSetOverrideNotification,
    NewBlockTemplateNotification,
);

field_conversion! {
    GetBlockTemplateRequestMessage => GetBlockTemplateRequest { pay_address, extra_data };
    GetMempoolEntriesRequestMessage => GetMempoolEntriesRequest {
        include_orphan_pool,
        filter_transaction_pool,
    };
    AddPeerRequestMessage => AddPeerRequest { address, is_permanent };
    NotifyVirtualSelectedParentChainChangedRequestMessage =>
        NotifyVirtualSelectedParentChainChangedRequest { include_accepted_transaction_ids };
    AddressesRequestMessage => NotifyUtxosChangedRequest { addresses };
    AddressesRequestMessage => StopNotifyingUtxosChangedRequest { addresses };
    AddressesRequestMessage => GetUtxosByAddressesRequest { addresses };
    AddressesRequestMessage => GetBalancesByAddressesRequest { addresses };
    GetBalanceByAddressRequestMessage => GetBalanceByAddressRequest { address };
    IpRequestMessage => BanRequest { ip };
    IpRequestMessage => UnbanRequest { ip };
    GetMempoolEntriesByAddressesRequestMessage => GetMempoolEntriesByAddressesRequest {
        addresses,
        include_orphan_pool,
        filter_transaction_pool,
    };
    VirtualSelectedParentBlueScoreChangedNotificationMessage =>
        VirtualSelectedParentBlueScoreChangedNotification { virtual_selected_parent_blue_score };
    VirtualDaaScoreChangedNotificationMessage =>
        VirtualDaaScoreChangedNotification { virtual_daa_score };
}

impl TryFrom<wire::SubmitBlockRequestMessage> for SubmitBlockRequest {
    type Error = ConversionError;

    fn try_from(message: wire::SubmitBlockRequestMessage) -> Result<Self, Self::Error> {
        Ok(Self {
            block: block_from_wire(required(message.block, "SubmitBlockRequestMessage.block")?)?,
            allow_non_daa_blocks: message.allow_non_daa_blocks,
        })
    }
}

impl TryFrom<SubmitBlockRequest> for wire::SubmitBlockRequestMessage {
    type Error = ConversionError;

    fn try_from(message: SubmitBlockRequest) -> Result<Self, Self::Error> {
        Ok(Self {
            block: Some(block_to_wire(message.block)?),
            allow_non_daa_blocks: message.allow_non_daa_blocks,
        })
    }
}

impl TryFrom<wire::GetMempoolEntryRequestMessage> for GetMempoolEntryRequest {
    type Error = ConversionError;

    fn try_from(message: wire::GetMempoolEntryRequestMessage) -> Result<Self, Self::Error> {
        Ok(Self {
            tx_id: parse_hash(&message.tx_id)?,
            include_orphan_pool: message.include_orphan_pool,
            filter_transaction_pool: message.filter_transaction_pool,
        })
    }
}

impl From<GetMempoolEntryRequest> for wire::GetMempoolEntryRequestMessage {
    fn from(message: GetMempoolEntryRequest) -> Self {
        Self {
            tx_id: message.tx_id.to_hex(),
            include_orphan_pool: message.include_orphan_pool,
            filter_transaction_pool: message.filter_transaction_pool,
        }
    }
}

impl TryFrom<wire::SubmitTransactionRequestMessage> for SubmitTransactionRequest {
    type Error = ConversionError;

    fn try_from(message: wire::SubmitTransactionRequestMessage) -> Result<Self, Self::Error> {
        Ok(Self {
            transaction: required(message.transaction, "SubmitTransactionRequestMessage.transaction")?
                .try_into()?,
            allow_orphan: message.allow_orphan,
        })
    }
}

impl From<SubmitTransactionRequest> for wire::SubmitTransactionRequestMessage {
    fn from(message: SubmitTransactionRequest) -> Self {
        Self {
            transaction: Some(message.transaction.into()),
            allow_orphan: message.allow_orphan,
        }
    }
}

impl TryFrom<wire::SubmitTransactionReplacementRequestMessage>
    for SubmitTransactionReplacementRequest
{
    type Error = ConversionError;

    fn try_from(
        message: wire::SubmitTransactionReplacementRequestMessage,
    ) -> Result<Self, Self::Error> {
        Ok(Self {
            transaction: required(
                message.transaction,
                "SubmitTransactionReplacementRequestMessage.transaction",
            )?
            .try_into()?,
        })
    }
}

impl From<SubmitTransactionReplacementRequest>
    for wire::SubmitTransactionReplacementRequestMessage
{
    fn from(message: SubmitTransactionReplacementRequest) -> Self {
        Self {
            transaction: Some(message.transaction.into()),
        }
    }
}

impl TryFrom<wire::GetBlockRequestMessage> for GetBlockRequest {
    type Error = ConversionError;

    fn try_from(message: wire::GetBlockRequestMessage) -> Result<Self, Self::Error> {
        Ok(Self {
            hash: parse_hash(&message.hash)?,
            include_transactions: message.include_transactions,
        })
    }
}

impl From<GetBlockRequest> for wire::GetBlockRequestMessage {
    fn from(message: GetBlockRequest) -> Self {
        Self {
            hash: message.hash.to_hex(),
            include_transactions: message.include_transactions,
        }
    }
}

impl TryFrom<wire::GetSubnetworkRequestMessage> for GetSubnetworkRequest {
    type Error = ConversionError;

    fn try_from(message: wire::GetSubnetworkRequestMessage) -> Result<Self, Self::Error> {
        Ok(Self {
            subnetwork_id: SubnetworkId::from_hex(&message.subnetwork_id)?,
        })
    }
}

impl From<GetSubnetworkRequest> for wire::GetSubnetworkRequestMessage {
    fn from(message: GetSubnetworkRequest) -> Self {
        Self {
            subnetwork_id: message.subnetwork_id.to_hex(),
        }
    }
}

impl TryFrom<wire::GetVirtualSelectedParentChainFromBlockRequestMessage>
    for GetVirtualSelectedParentChainFromBlockRequest
{
    type Error = ConversionError;

    fn try_from(
        message: wire::GetVirtualSelectedParentChainFromBlockRequestMessage,
    ) -> Result<Self, Self::Error> {
        Ok(Self {
            start_hash: parse_hash(&message.start_hash)?,
            include_accepted_transaction_ids: message.include_accepted_transaction_ids,
        })
    }
}

impl From<GetVirtualSelectedParentChainFromBlockRequest>
    for wire::GetVirtualSelectedParentChainFromBlockRequestMessage
{
    fn from(message: GetVirtualSelectedParentChainFromBlockRequest) -> Self {
        Self {
            start_hash: message.start_hash.to_hex(),
            include_accepted_transaction_ids: message.include_accepted_transaction_ids,
        }
    }
}

impl TryFrom<wire::GetBlocksRequestMessage> for GetBlocksRequest {
    type Error = ConversionError;

    fn try_from(message: wire::GetBlocksRequestMessage) -> Result<Self, Self::Error> {
        Ok(Self {
            low_hash: parse_optional_hash(&message.low_hash)?,
            include_blocks: message.include_blocks,
            include_transactions: message.include_transactions,
        })
    }
}

impl From<GetBlocksRequest> for wire::GetBlocksRequestMessage {
    fn from(message: GetBlocksRequest) -> Self {
        Self {
            low_hash: optional_hash_to_hex(message.low_hash),
            include_blocks: message.include_blocks,
            include_transactions: message.include_transactions,
        }
    }
}

impl TryFrom<wire::ResolveFinalityConflictRequestMessage> for ResolveFinalityConflictRequest {
    type Error = ConversionError;

    fn try_from(message: wire::ResolveFinalityConflictRequestMessage) -> Result<Self, Self::Error> {
        Ok(Self {
            finality_block_hash: parse_hash(&message.finality_block_hash)?,
        })
    }
}

impl From<ResolveFinalityConflictRequest> for wire::ResolveFinalityConflictRequestMessage {
    fn from(message: ResolveFinalityConflictRequest) -> Self {
        Self {
            finality_block_hash: message.finality_block_hash.to_hex(),
        }
    }
}

impl TryFrom<wire::GetHeadersRequestMessage> for GetHeadersRequest {
    type Error = ConversionError;

    fn try_from(message: wire::GetHeadersRequestMessage) -> Result<Self, Self::Error> {
        Ok(Self {
            start_hash: parse_hash(&message.start_hash)?,
            limit: message.limit,
            is_ascending: message.is_ascending,
        })
    }
}

impl From<GetHeadersRequest> for wire::GetHeadersRequestMessage {
    fn from(message: GetHeadersRequest) -> Self {
        Self {
            start_hash: message.start_hash.to_hex(),
            limit: message.limit,
            is_ascending: message.is_ascending,
        }
    }
}

impl TryFrom<wire::EstimateNetworkHashesPerSecondRequestMessage>
    for EstimateNetworkHashesPerSecondRequest
{
    type Error = ConversionError;

    fn try_from(
        message: wire::EstimateNetworkHashesPerSecondRequestMessage,
    ) -> Result<Self, Self::Error> {
        Ok(Self {
            window_size: message.window_size,
            start_hash: parse_optional_hash(&message.start_hash)?,
        })
    }
}

impl From<EstimateNetworkHashesPerSecondRequest>
    for wire::EstimateNetworkHashesPerSecondRequestMessage
{
    fn from(message: EstimateNetworkHashesPerSecondRequest) -> Self {
        Self {
            window_size: message.window_size,
            start_hash: optional_hash_to_hex(message.start_hash),
        }
    }
}

// =============================================================================
// RESPONSES
// =============================================================================

error_only_conversion!(
    NotifyBlockAddedResponse,
    AddPeerResponse,
    NotifyVirtualSelectedParentChainChangedResponse,
    ResolveFinalityConflictResponse,
    NotifyFinalityConflictsResponse,
    ShutdownResponse,
    NotifyUtxosChangedResponse,
    StopNotifyingUtxosChangedResponse,
    NotifyVirtualSelectedParentBlueScoreChangedResponse,
    BanResponse,
    UnbanResponse,
    NotifyPruningPointUtxoSetOverrideResponse,
    StopNotifyingPruningPointUtxoSetOverrideResponse,
    NotifyVirtualDaaScoreChangedResponse,
    NotifyNewBlockTemplateResponse,
);

response_conversion! {
    GetCurrentNetworkResponseMessage => GetCurrentNetworkResponse { current_network };
    GetPeerAddressesResponseMessage => GetPeerAddressesResponse { addresses, banned_addresses };
    GetSubnetworkResponseMessage => GetSubnetworkResponse { gas_limit };
    GetBlockCountResponseMessage => GetBlockCountResponse { block_count, header_count };
    GetBalanceByAddressResponseMessage => GetBalanceByAddressResponse { balance };
    GetVirtualSelectedParentBlueScoreResponseMessage =>
        GetVirtualSelectedParentBlueScoreResponse { blue_score };
    GetInfoResponseMessage => GetInfoResponse {
        p2p_id,
        mempool_size,
        server_version,
        is_utxo_indexed,
        is_synced,
    };
    EstimateNetworkHashesPerSecondResponseMessage =>
        EstimateNetworkHashesPerSecondResponse { network_hashes_per_second };
    GetCoinSupplyResponseMessage => GetCoinSupplyResponse { max_sompi, circulating_sompi };
}

impl TryFrom<wire::SubmitBlockResponseMessage> for SubmitBlockResponse {
    type Error = ConversionError;

    fn try_from(message: wire::SubmitBlockResponseMessage) -> Result<Self, Self::Error> {
        Ok(Self {
            reject_reason: message.reject_reason.try_into()?,
            error: map_error(message.error),
        })
    }
}

impl From<SubmitBlockResponse> for wire::SubmitBlockResponseMessage {
    fn from(message: SubmitBlockResponse) -> Self {
        Self {
            reject_reason: message.reject_reason.into(),
            error: wire_error(message.error),
        }
    }
}

impl TryFrom<wire::GetBlockTemplateResponseMessage> for GetBlockTemplateResponse {
    type Error = ConversionError;

    fn try_from(message: wire::GetBlockTemplateResponseMessage) -> Result<Self, Self::Error> {
        let block = exclusive(
            "GetBlockTemplateResponseMessage",
            "GetBlockTemplateResponseMessage.block",
            message.block,
            message.error.is_some(),
        )?;
        Ok(Self {
            block: block.map(block_from_wire).transpose()?,
            is_synced: message.is_synced,
            error: map_error(message.error),
        })
    }
}

impl TryFrom<GetBlockTemplateResponse> for wire::GetBlockTemplateResponseMessage {
    type Error = ConversionError;

    fn try_from(message: GetBlockTemplateResponse) -> Result<Self, Self::Error> {
        let block = exclusive(
            "GetBlockTemplateResponseMessage",
            "GetBlockTemplateResponseMessage.block",
            message.block,
            message.error.is_some(),
        )?;
        Ok(Self {
            block: block.map(block_to_wire).transpose()?,
            is_synced: message.is_synced,
            error: wire_error(message.error),
        })
    }
}

impl TryFrom<wire::GetSelectedTipHashResponseMessage> for GetSelectedTipHashResponse {
    type Error = ConversionError;

    fn try_from(message: wire::GetSelectedTipHashResponseMessage) -> Result<Self, Self::Error> {
        Ok(Self {
            selected_tip_hash: parse_optional_hash(&message.selected_tip_hash)?,
            error: map_error(message.error),
        })
    }
}

impl From<GetSelectedTipHashResponse> for wire::GetSelectedTipHashResponseMessage {
    fn from(message: GetSelectedTipHashResponse) -> Self {
        Self {
            selected_tip_hash: optional_hash_to_hex(message.selected_tip_hash),
            error: wire_error(message.error),
        }
    }
}

impl TryFrom<wire::GetMempoolEntryResponseMessage> for GetMempoolEntryResponse {
    type Error = ConversionError;

    fn try_from(message: wire::GetMempoolEntryResponseMessage) -> Result<Self, Self::Error> {
        let entry = exclusive(
            "GetMempoolEntryResponseMessage",
            "GetMempoolEntryResponseMessage.entry",
            message.entry,
            message.error.is_some(),
        )?;
        Ok(Self {
            entry: entry.map(MempoolEntry::try_from).transpose()?,
            error: map_error(message.error),
        })
    }
}

impl TryFrom<GetMempoolEntryResponse> for wire::GetMempoolEntryResponseMessage {
    type Error = ConversionError;

    fn try_from(message: GetMempoolEntryResponse) -> Result<Self, Self::Error> {
        let entry = exclusive(
            "GetMempoolEntryResponseMessage",
            "GetMempoolEntryResponseMessage.entry",
            message.entry,
            message.error.is_some(),
        )?;
        Ok(Self {
            entry: entry.map(Into::into),
            error: wire_error(message.error),
        })
    }
}

impl TryFrom<wire::GetMempoolEntriesResponseMessage> for GetMempoolEntriesResponse {
    type Error = ConversionError;

    fn try_from(message: wire::GetMempoolEntriesResponseMessage) -> Result<Self, Self::Error> {
        Ok(Self {
            entries: convert_all(message.entries)?,
            error: map_error(message.error),
        })
    }
}

impl From<GetMempoolEntriesResponse> for wire::GetMempoolEntriesResponseMessage {
    fn from(message: GetMempoolEntriesResponse) -> Self {
        Self {
            entries: message.entries.into_iter().map(Into::into).collect(),
            error: wire_error(message.error),
        }
    }
}

impl From<wire::GetConnectedPeerInfoResponseMessage> for GetConnectedPeerInfoResponse {
    fn from(message: wire::GetConnectedPeerInfoResponseMessage) -> Self {
        Self {
            infos: message.infos.into_iter().map(Into::into).collect(),
            error: map_error(message.error),
        }
    }
}

impl From<GetConnectedPeerInfoResponse> for wire::GetConnectedPeerInfoResponseMessage {
    fn from(message: GetConnectedPeerInfoResponse) -> Self {
        Self {
            infos: message.infos.into_iter().map(Into::into).collect(),
            error: wire_error(message.error),
        }
    }
}

impl TryFrom<wire::SubmitTransactionResponseMessage> for SubmitTransactionResponse {
    type Error = ConversionError;

    fn try_from(message: wire::SubmitTransactionResponseMessage) -> Result<Self, Self::Error> {
        Ok(Self {
            transaction_id: parse_optional_hash(&message.transaction_id)?,
            error: map_error(message.error),
        })
    }
}

impl From<SubmitTransactionResponse> for wire::SubmitTransactionResponseMessage {
    fn from(message: SubmitTransactionResponse) -> Self {
        Self {
            transaction_id: optional_hash_to_hex(message.transaction_id),
            error: wire_error(message.error),
        }
    }
}

impl TryFrom<wire::SubmitTransactionReplacementResponseMessage>
    for SubmitTransactionReplacementResponse
{
    type Error = ConversionError;

    fn try_from(
        message: wire::SubmitTransactionReplacementResponseMessage,
    ) -> Result<Self, Self::Error> {
        Ok(Self {
            transaction_id: parse_optional_hash(&message.transaction_id)?,
            replaced_transaction: message
                .replaced_transaction
                .map(DomainTransaction::try_from)
                .transpose()?,
            error: map_error(message.error),
        })
    }
}

impl From<SubmitTransactionReplacementResponse>
    for wire::SubmitTransactionReplacementResponseMessage
{
    fn from(message: SubmitTransactionReplacementResponse) -> Self {
        Self {
            transaction_id: optional_hash_to_hex(message.transaction_id),
            replaced_transaction: message.replaced_transaction.map(Into::into),
            error: wire_error(message.error),
        }
    }
}

impl TryFrom<wire::GetBlockResponseMessage> for GetBlockResponse {
    type Error = ConversionError;

    fn try_from(message: wire::GetBlockResponseMessage) -> Result<Self, Self::Error> {
        let block = exclusive(
            "GetBlockResponseMessage",
            "GetBlockResponseMessage.block",
            message.block,
            message.error.is_some(),
        )?;
        Ok(Self {
            block: block.map(RpcBlock::try_from).transpose()?,
            error: map_error(message.error),
        })
    }
}

impl TryFrom<GetBlockResponse> for wire::GetBlockResponseMessage {
    type Error = ConversionError;

    fn try_from(message: GetBlockResponse) -> Result<Self, Self::Error> {
        let block = exclusive(
            "GetBlockResponseMessage",
            "GetBlockResponseMessage.block",
            message.block,
            message.error.is_some(),
        )?;
        Ok(Self {
            block: block.map(wire::RpcBlock::try_from).transpose()?,
            error: wire_error(message.error),
        })
    }
}

impl TryFrom<wire::GetVirtualSelectedParentChainFromBlockResponseMessage>
    for GetVirtualSelectedParentChainFromBlockResponse
{
    type Error = ConversionError;

    fn try_from(
        message: wire::GetVirtualSelectedParentChainFromBlockResponseMessage,
    ) -> Result<Self, Self::Error> {
        Ok(Self {
            removed_chain_block_hashes: parse_hashes(&message.removed_chain_block_hashes)?,
            added_chain_block_hashes: parse_hashes(&message.added_chain_block_hashes)?,
            accepted_transaction_ids: convert_all(message.accepted_transaction_ids)?,
            error: map_error(message.error),
        })
    }
}

impl From<GetVirtualSelectedParentChainFromBlockResponse>
    for wire::GetVirtualSelectedParentChainFromBlockResponseMessage
{
    fn from(message: GetVirtualSelectedParentChainFromBlockResponse) -> Self {
        Self {
            removed_chain_block_hashes: hashes_to_hex(message.removed_chain_block_hashes),
            added_chain_block_hashes: hashes_to_hex(message.added_chain_block_hashes),
            accepted_transaction_ids: message
                .accepted_transaction_ids
                .into_iter()
                .map(Into::into)
                .collect(),
            error: wire_error(message.error),
        }
    }
}

impl TryFrom<wire::GetBlocksResponseMessage> for GetBlocksResponse {
    type Error = ConversionError;

    fn try_from(message: wire::GetBlocksResponseMessage) -> Result<Self, Self::Error> {
        Ok(Self {
            block_hashes: parse_hashes(&message.block_hashes)?,
            blocks: convert_all(message.blocks)?,
            error: map_error(message.error),
        })
    }
}

impl TryFrom<GetBlocksResponse> for wire::GetBlocksResponseMessage {
    type Error = ConversionError;

    fn try_from(message: GetBlocksResponse) -> Result<Self, Self::Error> {
        Ok(Self {
            block_hashes: hashes_to_hex(message.block_hashes),
            blocks: convert_all(message.blocks)?,
            error: wire_error(message.error),
        })
    }
}

impl TryFrom<wire::GetBlockDagInfoResponseMessage> for GetBlockDagInfoResponse {
    type Error = ConversionError;

    fn try_from(message: wire::GetBlockDagInfoResponseMessage) -> Result<Self, Self::Error> {
        Ok(Self {
            network_name: message.network_name,
            block_count: message.block_count,
            header_count: message.header_count,
            tip_hashes: parse_hashes(&message.tip_hashes)?,
            difficulty: message.difficulty,
            past_median_time: message.past_median_time,
            virtual_parent_hashes: parse_hashes(&message.virtual_parent_hashes)?,
            pruning_point_hash: parse_optional_hash(&message.pruning_point_hash)?,
            virtual_daa_score: message.virtual_daa_score,
            error: map_error(message.error),
        })
    }
}

impl From<GetBlockDagInfoResponse> for wire::GetBlockDagInfoResponseMessage {
    fn from(message: GetBlockDagInfoResponse) -> Self {
        Self {
            network_name: message.network_name,
            block_count: message.block_count,
            header_count: message.header_count,
            tip_hashes: hashes_to_hex(message.tip_hashes),
            difficulty: message.difficulty,
            past_median_time: message.past_median_time,
            virtual_parent_hashes: hashes_to_hex(message.virtual_parent_hashes),
            pruning_point_hash: optional_hash_to_hex(message.pruning_point_hash),
            virtual_daa_score: message.virtual_daa_score,
            error: wire_error(message.error),
        }
    }
}

impl TryFrom<wire::GetHeadersResponseMessage> for GetHeadersResponse {
    type Error = ConversionError;

    fn try_from(message: wire::GetHeadersResponseMessage) -> Result<Self, Self::Error> {
        Ok(Self {
            headers: convert_all(message.headers)?,
            error: map_error(message.error),
        })
    }
}

impl TryFrom<GetHeadersResponse> for wire::GetHeadersResponseMessage {
    type Error = ConversionError;

    fn try_from(message: GetHeadersResponse) -> Result<Self, Self::Error> {
        Ok(Self {
            headers: convert_all(message.headers)?,
            error: wire_error(message.error),
        })
    }
}

impl TryFrom<wire::GetUtxosByAddressesResponseMessage> for GetUtxosByAddressesResponse {
    type Error = ConversionError;

    fn try_from(message: wire::GetUtxosByAddressesResponseMessage) -> Result<Self, Self::Error> {
        Ok(Self {
            entries: convert_all(message.entries)?,
            error: map_error(message.error),
        })
    }
}

impl From<GetUtxosByAddressesResponse> for wire::GetUtxosByAddressesResponseMessage {
    fn from(message: GetUtxosByAddressesResponse) -> Self {
        Self {
            entries: message.entries.into_iter().map(Into::into).collect(),
            error: wire_error(message.error),
        }
    }
}

impl From<wire::GetBalancesByAddressesResponseMessage> for GetBalancesByAddressesResponse {
    fn from(message: wire::GetBalancesByAddressesResponseMessage) -> Self {
        Self {
            entries: message.entries.into_iter().map(Into::into).collect(),
            error: map_error(message.error),
        }
    }
}

impl From<GetBalancesByAddressesResponse> for wire::GetBalancesByAddressesResponseMessage {
    fn from(message: GetBalancesByAddressesResponse) -> Self {
        Self {
            entries: message.entries.into_iter().map(Into::into).collect(),
            error: wire_error(message.error),
        }
    }
}

impl TryFrom<wire::GetMempoolEntriesByAddressesResponseMessage>
    for GetMempoolEntriesByAddressesResponse
{
    type Error = ConversionError;

    fn try_from(
        message: wire::GetMempoolEntriesByAddressesResponseMessage,
    ) -> Result<Self, Self::Error> {
        Ok(Self {
            entries: convert_all(message.entries)?,
            error: map_error(message.error),
        })
    }
}

impl From<GetMempoolEntriesByAddressesResponse>
    for wire::GetMempoolEntriesByAddressesResponseMessage
{
    fn from(message: GetMempoolEntriesByAddressesResponse) -> Self {
        Self {
            entries: message.entries.into_iter().map(Into::into).collect(),
            error: wire_error(message.error),
        }
    }
}

// =============================================================================
// NOTIFICATIONS
// =============================================================================

impl TryFrom<wire::BlockAddedNotificationMessage> for BlockAddedNotification {
    type Error = ConversionError;

    fn try_from(message: wire::BlockAddedNotificationMessage) -> Result<Self, Self::Error> {
        Ok(Self {
            block: required(message.block, "BlockAddedNotificationMessage.block")?.try_into()?,
        })
    }
}

impl TryFrom<BlockAddedNotification> for wire::BlockAddedNotificationMessage {
    type Error = ConversionError;

    fn try_from(message: BlockAddedNotification) -> Result<Self, Self::Error> {
        Ok(Self {
            block: Some(message.block.try_into()?),
        })
    }
}

impl TryFrom<wire::VirtualSelectedParentChainChangedNotificationMessage>
    for VirtualSelectedParentChainChangedNotification
{
    type Error = ConversionError;

    fn try_from(
        message: wire::VirtualSelectedParentChainChangedNotificationMessage,
    ) -> Result<Self, Self::Error> {
        Ok(Self {
            removed_chain_block_hashes: parse_hashes(&message.removed_chain_block_hashes)?,
            added_chain_block_hashes: parse_hashes(&message.added_chain_block_hashes)?,
            accepted_transaction_ids: convert_all(message.accepted_transaction_ids)?,
        })
    }
}

impl From<VirtualSelectedParentChainChangedNotification>
    for wire::VirtualSelectedParentChainChangedNotificationMessage
{
    fn from(message: VirtualSelectedParentChainChangedNotification) -> Self {
        Self {
            removed_chain_block_hashes: hashes_to_hex(message.removed_chain_block_hashes),
            added_chain_block_hashes: hashes_to_hex(message.added_chain_block_hashes),
            accepted_transaction_ids: message
                .accepted_transaction_ids
                .into_iter()
                .map(Into::into)
                .collect(),
        }
    }
}

impl TryFrom<wire::FinalityConflictNotificationMessage> for FinalityConflictNotification {
    type Error = ConversionError;

    fn try_from(message: wire::FinalityConflictNotificationMessage) -> Result<Self, Self::Error> {
        Ok(Self {
            violating_block_hash: parse_hash(&message.violating_block_hash)?,
        })
    }
}

impl From<FinalityConflictNotification> for wire::FinalityConflictNotificationMessage {
    fn from(message: FinalityConflictNotification) -> Self {
        Self {
            violating_block_hash: message.violating_block_hash.to_hex(),
        }
    }
}

impl TryFrom<wire::FinalityConflictResolvedNotificationMessage>
    for FinalityConflictResolvedNotification
{
    type Error = ConversionError;

    fn try_from(
        message: wire::FinalityConflictResolvedNotificationMessage,
    ) -> Result<Self, Self::Error> {
        Ok(Self {
            finality_block_hash: parse_hash(&message.finality_block_hash)?,
        })
    }
}

impl From<FinalityConflictResolvedNotification>
    for wire::FinalityConflictResolvedNotificationMessage
{
    fn from(message: FinalityConflictResolvedNotification) -> Self {
        Self {
            finality_block_hash: message.finality_block_hash.to_hex(),
        }
    }
}

impl TryFrom<wire::UtxosChangedNotificationMessage> for UtxosChangedNotification {
    type Error = ConversionError;

    fn try_from(message: wire::UtxosChangedNotificationMessage) -> Result<Self, Self::Error> {
        Ok(Self {
            added: convert_all(message.added)?,
            removed: convert_all(message.removed)?,
        })
    }
}

impl From<UtxosChangedNotification> for wire::UtxosChangedNotificationMessage {
    fn from(message: UtxosChangedNotification) -> Self {
        Self {
            added: message.added.into_iter().map(Into::into).collect(),
            removed: message.removed.into_iter().map(Into::into).collect(),
        }
    }
}
