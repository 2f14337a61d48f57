//! Gossip dialect conversions.

use super::{
    blue_work_from_bytes, blue_work_to_bytes, check_block_transactions, check_max, convert_all,
    narrow_u16, narrow_u8, required,
};
use crate::errors::ConversionError;
use crate::limits::{
    MAX_ADDRESSES_PER_MSG, MAX_BLOCK_LEVELS, MAX_BLOCK_LOCATORS_PER_MSG, MAX_BLOCK_PARENTS,
    MAX_INV_PER_REQUEST_TRANSACTIONS_MSG, MAX_INV_PER_TX_INV_MSG,
    MAX_REQUEST_RELAY_BLOCKS_HASHES, MAX_USER_AGENT_LEN,
};
use crate::message::p2p::*;
use crate::wire::p2p as wire;
use shared_types::{
    BlockGhostdagData, BlockLevelParents, BluesAnticoneSize, DomainBlock, DomainBlockHeader,
    DomainHash, DomainOutpoint, DomainTransaction, DomainTransactionInput,
    DomainTransactionOutput, NetAddress, OutpointAndUtxoEntryPair, ScriptPublicKey, SubnetworkId,
    UtxoEntry,
};
use std::net::{IpAddr, Ipv4Addr, Ipv6Addr};
use uuid::Uuid;

// =============================================================================
// IDENTIFIERS
// =============================================================================

impl TryFrom<wire::Hash> for DomainHash {
    type Error = ConversionError;

    fn try_from(hash: wire::Hash) -> Result<Self, Self::Error> {
        Ok(DomainHash::from_slice(&hash.bytes)?)
    }
}

impl From<DomainHash> for wire::Hash {
    fn from(hash: DomainHash) -> Self {
        Self {
            bytes: hash.as_bytes().to_vec(),
        }
    }
}

impl TryFrom<wire::TransactionId> for DomainHash {
    type Error = ConversionError;

    fn try_from(id: wire::TransactionId) -> Result<Self, Self::Error> {
        Ok(DomainHash::from_slice(&id.bytes)?)
    }
}

impl From<DomainHash> for wire::TransactionId {
    fn from(id: DomainHash) -> Self {
        Self {
            bytes: id.as_bytes().to_vec(),
        }
    }
}

impl TryFrom<wire::SubnetworkId> for SubnetworkId {
    type Error = ConversionError;

    fn try_from(id: wire::SubnetworkId) -> Result<Self, Self::Error> {
        Ok(SubnetworkId::from_slice(&id.bytes)?)
    }
}

impl From<SubnetworkId> for wire::SubnetworkId {
    fn from(id: SubnetworkId) -> Self {
        Self {
            bytes: id.as_bytes().to_vec(),
        }
    }
}

fn hash_field(hash: Option<wire::Hash>, field: &'static str) -> Result<DomainHash, ConversionError> {
    required(hash, field)?.try_into()
}

fn optional_hash(hash: Option<wire::Hash>) -> Result<Option<DomainHash>, ConversionError> {
    hash.map(DomainHash::try_from).transpose()
}

fn bounded_hashes(
    hashes: Vec<wire::Hash>,
    what: &'static str,
    max: usize,
) -> Result<Vec<DomainHash>, ConversionError> {
    check_max(what, hashes.len(), max)?;
    convert_all(hashes)
}

fn to_wire_hashes(
    hashes: Vec<DomainHash>,
    what: &'static str,
    max: usize,
) -> Result<Vec<wire::Hash>, ConversionError> {
    check_max(what, hashes.len(), max)?;
    Ok(hashes.into_iter().map(wire::Hash::from).collect())
}

// =============================================================================
// NETWORK ADDRESSES
// =============================================================================

impl TryFrom<wire::NetworkAddress> for NetAddress {
    type Error = ConversionError;

    fn try_from(address: wire::NetworkAddress) -> Result<Self, Self::Error> {
        let ip = match address.ip.len() {
            4 => {
                let mut octets = [0u8; 4];
                octets.copy_from_slice(&address.ip);
                IpAddr::V4(Ipv4Addr::from(octets))
            }
            16 => {
                let mut octets = [0u8; 16];
                octets.copy_from_slice(&address.ip);
                IpAddr::V6(Ipv6Addr::from(octets))
            }
            len => {
                return Err(ConversionError::Invalid {
                    what: "NetworkAddress.ip",
                    reason: format!("{len} bytes is neither IPv4 nor IPv6"),
                })
            }
        };
        Ok(Self {
            timestamp: address.timestamp,
            ip,
            port: narrow_u16("NetworkAddress.port", address.port)?,
        })
    }
}

impl From<NetAddress> for wire::NetworkAddress {
    fn from(address: NetAddress) -> Self {
        let ip = match address.ip {
            IpAddr::V4(ip) => ip.octets().to_vec(),
            IpAddr::V6(ip) => ip.octets().to_vec(),
        };
        Self {
            timestamp: address.timestamp,
            ip,
            port: address.port.into(),
        }
    }
}

// =============================================================================
// TRANSACTIONS
// =============================================================================

impl TryFrom<wire::ScriptPublicKey> for ScriptPublicKey {
    type Error = ConversionError;

    fn try_from(script: wire::ScriptPublicKey) -> Result<Self, Self::Error> {
        Ok(Self {
            version: narrow_u16("ScriptPublicKey.version", script.version)?,
            script: script.script,
        })
    }
}

impl From<ScriptPublicKey> for wire::ScriptPublicKey {
    fn from(script: ScriptPublicKey) -> Self {
        Self {
            script: script.script,
            version: script.version.into(),
        }
    }
}

impl TryFrom<wire::Outpoint> for DomainOutpoint {
    type Error = ConversionError;

    fn try_from(outpoint: wire::Outpoint) -> Result<Self, Self::Error> {
        Ok(Self {
            transaction_id: required(outpoint.transaction_id, "Outpoint.transaction_id")?
                .try_into()?,
            index: outpoint.index,
        })
    }
}

impl From<DomainOutpoint> for wire::Outpoint {
    fn from(outpoint: DomainOutpoint) -> Self {
        Self {
            transaction_id: Some(outpoint.transaction_id.into()),
            index: outpoint.index,
        }
    }
}

impl TryFrom<wire::TransactionInput> for DomainTransactionInput {
    type Error = ConversionError;

    fn try_from(input: wire::TransactionInput) -> Result<Self, Self::Error> {
        Ok(Self {
            previous_outpoint: required(input.previous_outpoint, "TransactionInput.previous_outpoint")?
                .try_into()?,
            signature_script: input.signature_script,
            sequence: input.sequence,
            sig_op_count: narrow_u8("TransactionInput.sig_op_count", input.sig_op_count)?,
        })
    }
}

impl From<DomainTransactionInput> for wire::TransactionInput {
    fn from(input: DomainTransactionInput) -> Self {
        Self {
            previous_outpoint: Some(input.previous_outpoint.into()),
            signature_script: input.signature_script,
            sequence: input.sequence,
            sig_op_count: input.sig_op_count.into(),
        }
    }
}

impl TryFrom<wire::TransactionOutput> for DomainTransactionOutput {
    type Error = ConversionError;

    fn try_from(output: wire::TransactionOutput) -> Result<Self, Self::Error> {
        Ok(Self {
            value: output.value,
            script_public_key: required(
                output.script_public_key,
                "TransactionOutput.script_public_key",
            )?
            .try_into()?,
        })
    }
}

impl From<DomainTransactionOutput> for wire::TransactionOutput {
    fn from(output: DomainTransactionOutput) -> Self {
        Self {
            value: output.value,
            script_public_key: Some(output.script_public_key.into()),
        }
    }
}

impl TryFrom<wire::TransactionMessage> for DomainTransaction {
    type Error = ConversionError;

    fn try_from(tx: wire::TransactionMessage) -> Result<Self, Self::Error> {
        Ok(Self {
            version: narrow_u16("TransactionMessage.version", tx.version)?,
            inputs: convert_all(tx.inputs)?,
            outputs: convert_all(tx.outputs)?,
            lock_time: tx.lock_time,
            subnetwork_id: required(tx.subnetwork_id, "TransactionMessage.subnetwork_id")?
                .try_into()?,
            gas: tx.gas,
            payload: tx.payload,
        })
    }
}

impl From<DomainTransaction> for wire::TransactionMessage {
    fn from(tx: DomainTransaction) -> Self {
        Self {
            version: tx.version.into(),
            inputs: tx.inputs.into_iter().map(Into::into).collect(),
            outputs: tx.outputs.into_iter().map(Into::into).collect(),
            lock_time: tx.lock_time,
            subnetwork_id: Some(tx.subnetwork_id.into()),
            gas: tx.gas,
            payload: tx.payload,
        }
    }
}

// =============================================================================
// BLOCKS
// =============================================================================

impl TryFrom<wire::BlockLevelParents> for BlockLevelParents {
    type Error = ConversionError;

    fn try_from(level: wire::BlockLevelParents) -> Result<Self, Self::Error> {
        Ok(Self {
            parent_hashes: bounded_hashes(level.parent_hashes, "block parents", MAX_BLOCK_PARENTS)?,
        })
    }
}

impl TryFrom<BlockLevelParents> for wire::BlockLevelParents {
    type Error = ConversionError;

    fn try_from(level: BlockLevelParents) -> Result<Self, Self::Error> {
        Ok(Self {
            parent_hashes: to_wire_hashes(level.parent_hashes, "block parents", MAX_BLOCK_PARENTS)?,
        })
    }
}

impl TryFrom<wire::BlockHeader> for DomainBlockHeader {
    type Error = ConversionError;

    fn try_from(header: wire::BlockHeader) -> Result<Self, Self::Error> {
        check_max("block levels", header.parents.len(), MAX_BLOCK_LEVELS)?;
        Ok(Self {
            version: narrow_u16("BlockHeader.version", header.version)?,
            parents: convert_all(header.parents)?,
            hash_merkle_root: hash_field(header.hash_merkle_root, "BlockHeader.hash_merkle_root")?,
            accepted_id_merkle_root: hash_field(
                header.accepted_id_merkle_root,
                "BlockHeader.accepted_id_merkle_root",
            )?,
            utxo_commitment: hash_field(header.utxo_commitment, "BlockHeader.utxo_commitment")?,
            timestamp: header.timestamp,
            bits: header.bits,
            nonce: header.nonce,
            daa_score: header.daa_score,
            blue_work: blue_work_from_bytes(&header.blue_work)?,
            blue_score: header.blue_score,
            pruning_point: hash_field(header.pruning_point, "BlockHeader.pruning_point")?,
        })
    }
}

impl TryFrom<DomainBlockHeader> for wire::BlockHeader {
    type Error = ConversionError;

    fn try_from(header: DomainBlockHeader) -> Result<Self, Self::Error> {
        check_max("block levels", header.parents.len(), MAX_BLOCK_LEVELS)?;
        Ok(Self {
            version: header.version.into(),
            parents: convert_all(header.parents)?,
            hash_merkle_root: Some(header.hash_merkle_root.into()),
            accepted_id_merkle_root: Some(header.accepted_id_merkle_root.into()),
            utxo_commitment: Some(header.utxo_commitment.into()),
            timestamp: header.timestamp,
            bits: header.bits,
            nonce: header.nonce,
            daa_score: header.daa_score,
            blue_work: blue_work_to_bytes(header.blue_work),
            pruning_point: Some(header.pruning_point.into()),
            blue_score: header.blue_score,
        })
    }
}

impl TryFrom<wire::BlockMessage> for DomainBlock {
    type Error = ConversionError;

    fn try_from(block: wire::BlockMessage) -> Result<Self, Self::Error> {
        check_block_transactions(block.transactions.len())?;
        Ok(Self {
            header: required(block.header, "BlockMessage.header")?.try_into()?,
            transactions: convert_all(block.transactions)?,
        })
    }
}

impl TryFrom<DomainBlock> for wire::BlockMessage {
    type Error = ConversionError;

    fn try_from(block: DomainBlock) -> Result<Self, Self::Error> {
        check_block_transactions(block.transactions.len())?;
        Ok(Self {
            header: Some(block.header.try_into()?),
            transactions: block.transactions.into_iter().map(Into::into).collect(),
        })
    }
}

// =============================================================================
// UTXO AND GHOSTDAG
// =============================================================================

impl TryFrom<wire::UtxoEntry> for UtxoEntry {
    type Error = ConversionError;

    fn try_from(entry: wire::UtxoEntry) -> Result<Self, Self::Error> {
        Ok(Self {
            amount: entry.amount,
            script_public_key: required(entry.script_public_key, "UtxoEntry.script_public_key")?
                .try_into()?,
            block_daa_score: entry.block_daa_score,
            is_coinbase: entry.is_coinbase,
        })
    }
}

impl From<UtxoEntry> for wire::UtxoEntry {
    fn from(entry: UtxoEntry) -> Self {
        Self {
            amount: entry.amount,
            script_public_key: Some(entry.script_public_key.into()),
            block_daa_score: entry.block_daa_score,
            is_coinbase: entry.is_coinbase,
        }
    }
}

impl TryFrom<wire::OutpointAndUtxoEntryPair> for OutpointAndUtxoEntryPair {
    type Error = ConversionError;

    fn try_from(pair: wire::OutpointAndUtxoEntryPair) -> Result<Self, Self::Error> {
        Ok(Self {
            outpoint: required(pair.outpoint, "OutpointAndUtxoEntryPair.outpoint")?.try_into()?,
            utxo_entry: required(pair.utxo_entry, "OutpointAndUtxoEntryPair.utxo_entry")?
                .try_into()?,
        })
    }
}

impl From<OutpointAndUtxoEntryPair> for wire::OutpointAndUtxoEntryPair {
    fn from(pair: OutpointAndUtxoEntryPair) -> Self {
        Self {
            outpoint: Some(pair.outpoint.into()),
            utxo_entry: Some(pair.utxo_entry.into()),
        }
    }
}

impl TryFrom<wire::BluesAnticoneSizes> for BluesAnticoneSize {
    type Error = ConversionError;

    fn try_from(entry: wire::BluesAnticoneSizes) -> Result<Self, Self::Error> {
        Ok(Self {
            blue_hash: hash_field(entry.blue_hash, "BluesAnticoneSizes.blue_hash")?,
            anticone_size: narrow_u8("BluesAnticoneSizes.anticone_size", entry.anticone_size)?,
        })
    }
}

impl From<BluesAnticoneSize> for wire::BluesAnticoneSizes {
    fn from(entry: BluesAnticoneSize) -> Self {
        Self {
            blue_hash: Some(entry.blue_hash.into()),
            anticone_size: entry.anticone_size.into(),
        }
    }
}

impl TryFrom<wire::GhostdagData> for BlockGhostdagData {
    type Error = ConversionError;

    fn try_from(data: wire::GhostdagData) -> Result<Self, Self::Error> {
        Ok(Self {
            blue_score: data.blue_score,
            blue_work: blue_work_from_bytes(&data.blue_work)?,
            selected_parent: hash_field(data.selected_parent, "GhostdagData.selected_parent")?,
            merge_set_blues: convert_all(data.merge_set_blues)?,
            merge_set_reds: convert_all(data.merge_set_reds)?,
            blues_anticone_sizes: convert_all(data.blues_anticone_sizes)?,
        })
    }
}

impl From<BlockGhostdagData> for wire::GhostdagData {
    fn from(data: BlockGhostdagData) -> Self {
        Self {
            blue_score: data.blue_score,
            blue_work: blue_work_to_bytes(data.blue_work),
            selected_parent: Some(data.selected_parent.into()),
            merge_set_blues: data.merge_set_blues.into_iter().map(Into::into).collect(),
            merge_set_reds: data.merge_set_reds.into_iter().map(Into::into).collect(),
            blues_anticone_sizes: data.blues_anticone_sizes.into_iter().map(Into::into).collect(),
        }
    }
}

impl TryFrom<wire::BlockGhostdagDataHashPair> for BlockGhostdagDataHashPair {
    type Error = ConversionError;

    fn try_from(pair: wire::BlockGhostdagDataHashPair) -> Result<Self, Self::Error> {
        Ok(Self {
            hash: hash_field(pair.hash, "BlockGhostdagDataHashPair.hash")?,
            ghostdag_data: required(pair.ghostdag_data, "BlockGhostdagDataHashPair.ghostdag_data")?
                .try_into()?,
        })
    }
}

impl From<BlockGhostdagDataHashPair> for wire::BlockGhostdagDataHashPair {
    fn from(pair: BlockGhostdagDataHashPair) -> Self {
        Self {
            hash: Some(pair.hash.into()),
            ghostdag_data: Some(pair.ghostdag_data.into()),
        }
    }
}

impl TryFrom<wire::DaaBlock> for TrustedDataDaaBlock {
    type Error = ConversionError;

    fn try_from(entry: wire::DaaBlock) -> Result<Self, Self::Error> {
        Ok(Self {
            block: required(entry.block, "DaaBlock.block")?.try_into()?,
            ghostdag_data: required(entry.ghostdag_data, "DaaBlock.ghostdag_data")?.try_into()?,
        })
    }
}

impl TryFrom<TrustedDataDaaBlock> for wire::DaaBlock {
    type Error = ConversionError;

    fn try_from(entry: TrustedDataDaaBlock) -> Result<Self, Self::Error> {
        Ok(Self {
            block: Some(entry.block.try_into()?),
            ghostdag_data: Some(entry.ghostdag_data.into()),
        })
    }
}

impl TryFrom<wire::DaaBlockV4> for TrustedDataDaaHeader {
    type Error = ConversionError;

    fn try_from(entry: wire::DaaBlockV4) -> Result<Self, Self::Error> {
        Ok(Self {
            header: required(entry.header, "DaaBlockV4.header")?.try_into()?,
            ghostdag_data: required(entry.ghostdag_data, "DaaBlockV4.ghostdag_data")?.try_into()?,
        })
    }
}

impl TryFrom<TrustedDataDaaHeader> for wire::DaaBlockV4 {
    type Error = ConversionError;

    fn try_from(entry: TrustedDataDaaHeader) -> Result<Self, Self::Error> {
        Ok(Self {
            header: Some(entry.header.try_into()?),
            ghostdag_data: Some(entry.ghostdag_data.into()),
        })
    }
}

// =============================================================================
// HANDSHAKE AND ADDRESSES
// =============================================================================

empty_message_conversion!(
    wire::EmptyMessage =>
    VerackMessage,
    ReadyMessage,
    RequestNextHeadersMessage,
    DoneHeadersMessage,
    IbdBlockLocatorHighestHashNotFoundMessage,
    RequestNextPruningPointUtxoSetChunkMessage,
    DonePruningPointUtxoSetChunksMessage,
    UnexpectedPruningPointMessage,
    RequestPruningPointAndItsAnticoneMessage,
    RequestPruningPointProofMessage,
    DoneBlocksWithTrustedDataMessage,
);

impl TryFrom<wire::VersionMessage> for VersionMessage {
    type Error = ConversionError;

    fn try_from(message: wire::VersionMessage) -> Result<Self, Self::Error> {
        check_max("user agent bytes", message.user_agent.len(), MAX_USER_AGENT_LEN)?;
        let id = Uuid::from_slice(&message.id).map_err(|e| ConversionError::Invalid {
            what: "VersionMessage.id",
            reason: e.to_string(),
        })?;
        Ok(Self {
            protocol_version: message.protocol_version,
            network: message.network,
            services: message.services,
            timestamp: message.timestamp,
            address: message.address.map(NetAddress::try_from).transpose()?,
            id,
            user_agent: message.user_agent,
            disable_relay_tx: message.disable_relay_tx,
            subnetwork_id: message.subnetwork_id.map(SubnetworkId::try_from).transpose()?,
        })
    }
}

impl TryFrom<VersionMessage> for wire::VersionMessage {
    type Error = ConversionError;

    fn try_from(message: VersionMessage) -> Result<Self, Self::Error> {
        check_max("user agent bytes", message.user_agent.len(), MAX_USER_AGENT_LEN)?;
        Ok(Self {
            protocol_version: message.protocol_version,
            services: message.services,
            timestamp: message.timestamp,
            address: message.address.map(Into::into),
            id: message.id.as_bytes().to_vec(),
            user_agent: message.user_agent,
            disable_relay_tx: message.disable_relay_tx,
            subnetwork_id: message.subnetwork_id.map(Into::into),
            network: message.network,
        })
    }
}

impl From<wire::PingMessage> for PingMessage {
    fn from(message: wire::PingMessage) -> Self {
        Self {
            nonce: message.nonce,
        }
    }
}

impl From<PingMessage> for wire::PingMessage {
    fn from(message: PingMessage) -> Self {
        Self {
            nonce: message.nonce,
        }
    }
}

impl From<wire::PongMessage> for PongMessage {
    fn from(message: wire::PongMessage) -> Self {
        Self {
            nonce: message.nonce,
        }
    }
}

impl From<PongMessage> for wire::PongMessage {
    fn from(message: PongMessage) -> Self {
        Self {
            nonce: message.nonce,
        }
    }
}

impl From<wire::RejectMessage> for RejectMessage {
    fn from(message: wire::RejectMessage) -> Self {
        Self {
            reason: message.reason,
        }
    }
}

impl From<RejectMessage> for wire::RejectMessage {
    fn from(message: RejectMessage) -> Self {
        Self {
            reason: message.reason,
        }
    }
}

impl TryFrom<wire::RequestAddressesMessage> for RequestAddressesMessage {
    type Error = ConversionError;

    fn try_from(message: wire::RequestAddressesMessage) -> Result<Self, Self::Error> {
        Ok(Self {
            include_all_subnetworks: message.include_all_subnetworks,
            subnetwork_id: message.subnetwork_id.map(SubnetworkId::try_from).transpose()?,
        })
    }
}

impl From<RequestAddressesMessage> for wire::RequestAddressesMessage {
    fn from(message: RequestAddressesMessage) -> Self {
        Self {
            include_all_subnetworks: message.include_all_subnetworks,
            subnetwork_id: message.subnetwork_id.map(Into::into),
        }
    }
}

impl TryFrom<wire::AddressesMessage> for AddressesMessage {
    type Error = ConversionError;

    fn try_from(message: wire::AddressesMessage) -> Result<Self, Self::Error> {
        check_max("addresses", message.address_list.len(), MAX_ADDRESSES_PER_MSG)?;
        Ok(Self {
            address_list: convert_all(message.address_list)?,
        })
    }
}

impl TryFrom<AddressesMessage> for wire::AddressesMessage {
    type Error = ConversionError;

    fn try_from(message: AddressesMessage) -> Result<Self, Self::Error> {
        check_max("addresses", message.address_list.len(), MAX_ADDRESSES_PER_MSG)?;
        Ok(Self {
            address_list: message.address_list.into_iter().map(Into::into).collect(),
        })
    }
}

// =============================================================================
// RELAY
// =============================================================================

impl TryFrom<wire::BlockMessage> for BlockMessage {
    type Error = ConversionError;

    fn try_from(message: wire::BlockMessage) -> Result<Self, Self::Error> {
        Ok(Self {
            block: message.try_into()?,
        })
    }
}

impl TryFrom<BlockMessage> for wire::BlockMessage {
    type Error = ConversionError;

    fn try_from(message: BlockMessage) -> Result<Self, Self::Error> {
        message.block.try_into()
    }
}

impl TryFrom<wire::TransactionMessage> for TransactionMessage {
    type Error = ConversionError;

    fn try_from(message: wire::TransactionMessage) -> Result<Self, Self::Error> {
        Ok(Self {
            transaction: message.try_into()?,
        })
    }
}

impl From<TransactionMessage> for wire::TransactionMessage {
    fn from(message: TransactionMessage) -> Self {
        message.transaction.into()
    }
}

impl TryFrom<wire::InvRelayBlockMessage> for InvRelayBlockMessage {
    type Error = ConversionError;

    fn try_from(message: wire::InvRelayBlockMessage) -> Result<Self, Self::Error> {
        Ok(Self {
            hash: hash_field(message.hash, "InvRelayBlockMessage.hash")?,
        })
    }
}

impl From<InvRelayBlockMessage> for wire::InvRelayBlockMessage {
    fn from(message: InvRelayBlockMessage) -> Self {
        Self {
            hash: Some(message.hash.into()),
        }
    }
}

impl TryFrom<wire::RequestRelayBlocksMessage> for RequestRelayBlocksMessage {
    type Error = ConversionError;

    fn try_from(message: wire::RequestRelayBlocksMessage) -> Result<Self, Self::Error> {
        Ok(Self {
            hashes: bounded_hashes(
                message.hashes,
                "relay block hashes",
                MAX_REQUEST_RELAY_BLOCKS_HASHES,
            )?,
        })
    }
}

impl TryFrom<RequestRelayBlocksMessage> for wire::RequestRelayBlocksMessage {
    type Error = ConversionError;

    fn try_from(message: RequestRelayBlocksMessage) -> Result<Self, Self::Error> {
        Ok(Self {
            hashes: to_wire_hashes(
                message.hashes,
                "relay block hashes",
                MAX_REQUEST_RELAY_BLOCKS_HASHES,
            )?,
        })
    }
}

fn bounded_ids(
    ids: Vec<wire::TransactionId>,
    what: &'static str,
    max: usize,
) -> Result<Vec<DomainHash>, ConversionError> {
    check_max(what, ids.len(), max)?;
    convert_all(ids)
}

fn to_wire_ids(
    ids: Vec<DomainHash>,
    what: &'static str,
    max: usize,
) -> Result<Vec<wire::TransactionId>, ConversionError> {
    check_max(what, ids.len(), max)?;
    Ok(ids.into_iter().map(Into::into).collect())
}

impl TryFrom<wire::InvTransactionsMessage> for InvTransactionsMessage {
    type Error = ConversionError;

    fn try_from(message: wire::InvTransactionsMessage) -> Result<Self, Self::Error> {
        Ok(Self {
            ids: bounded_ids(message.ids, "transaction inventory", MAX_INV_PER_TX_INV_MSG)?,
        })
    }
}

impl TryFrom<InvTransactionsMessage> for wire::InvTransactionsMessage {
    type Error = ConversionError;

    fn try_from(message: InvTransactionsMessage) -> Result<Self, Self::Error> {
        Ok(Self {
            ids: to_wire_ids(message.ids, "transaction inventory", MAX_INV_PER_TX_INV_MSG)?,
        })
    }
}

impl TryFrom<wire::RequestTransactionsMessage> for RequestTransactionsMessage {
    type Error = ConversionError;

    fn try_from(message: wire::RequestTransactionsMessage) -> Result<Self, Self::Error> {
        Ok(Self {
            ids: bounded_ids(
                message.ids,
                "requested transactions",
                MAX_INV_PER_REQUEST_TRANSACTIONS_MSG,
            )?,
        })
    }
}

impl TryFrom<RequestTransactionsMessage> for wire::RequestTransactionsMessage {
    type Error = ConversionError;

    fn try_from(message: RequestTransactionsMessage) -> Result<Self, Self::Error> {
        Ok(Self {
            ids: to_wire_ids(
                message.ids,
                "requested transactions",
                MAX_INV_PER_REQUEST_TRANSACTIONS_MSG,
            )?,
        })
    }
}

impl TryFrom<wire::TransactionNotFoundMessage> for TransactionNotFoundMessage {
    type Error = ConversionError;

    fn try_from(message: wire::TransactionNotFoundMessage) -> Result<Self, Self::Error> {
        Ok(Self {
            id: required(message.id, "TransactionNotFoundMessage.id")?.try_into()?,
        })
    }
}

impl From<TransactionNotFoundMessage> for wire::TransactionNotFoundMessage {
    fn from(message: TransactionNotFoundMessage) -> Self {
        Self {
            id: Some(message.id.into()),
        }
    }
}

// =============================================================================
// INITIAL BLOCK DOWNLOAD
// =============================================================================

impl TryFrom<wire::RequestHeadersMessage> for RequestHeadersMessage {
    type Error = ConversionError;

    fn try_from(message: wire::RequestHeadersMessage) -> Result<Self, Self::Error> {
        Ok(Self {
            low_hash: hash_field(message.low_hash, "RequestHeadersMessage.low_hash")?,
            high_hash: hash_field(message.high_hash, "RequestHeadersMessage.high_hash")?,
        })
    }
}

impl From<RequestHeadersMessage> for wire::RequestHeadersMessage {
    fn from(message: RequestHeadersMessage) -> Self {
        Self {
            low_hash: Some(message.low_hash.into()),
            high_hash: Some(message.high_hash.into()),
        }
    }
}

impl TryFrom<wire::BlockHeadersMessage> for BlockHeadersMessage {
    type Error = ConversionError;

    fn try_from(message: wire::BlockHeadersMessage) -> Result<Self, Self::Error> {
        Ok(Self {
            block_headers: convert_all(message.block_headers)?,
        })
    }
}

impl TryFrom<BlockHeadersMessage> for wire::BlockHeadersMessage {
    type Error = ConversionError;

    fn try_from(message: BlockHeadersMessage) -> Result<Self, Self::Error> {
        Ok(Self {
            block_headers: convert_all(message.block_headers)?,
        })
    }
}

impl TryFrom<wire::RequestIbdBlocksMessage> for RequestIbdBlocksMessage {
    type Error = ConversionError;

    fn try_from(message: wire::RequestIbdBlocksMessage) -> Result<Self, Self::Error> {
        Ok(Self {
            hashes: convert_all(message.hashes)?,
        })
    }
}

impl From<RequestIbdBlocksMessage> for wire::RequestIbdBlocksMessage {
    fn from(message: RequestIbdBlocksMessage) -> Self {
        Self {
            hashes: message.hashes.into_iter().map(Into::into).collect(),
        }
    }
}

impl TryFrom<wire::BlockMessage> for IbdBlockMessage {
    type Error = ConversionError;

    fn try_from(message: wire::BlockMessage) -> Result<Self, Self::Error> {
        Ok(Self {
            block: message.try_into()?,
        })
    }
}

impl TryFrom<IbdBlockMessage> for wire::BlockMessage {
    type Error = ConversionError;

    fn try_from(message: IbdBlockMessage) -> Result<Self, Self::Error> {
        message.block.try_into()
    }
}

impl TryFrom<wire::RequestBlockLocatorMessage> for RequestBlockLocatorMessage {
    type Error = ConversionError;

    fn try_from(message: wire::RequestBlockLocatorMessage) -> Result<Self, Self::Error> {
        Ok(Self {
            high_hash: hash_field(message.high_hash, "RequestBlockLocatorMessage.high_hash")?,
            limit: message.limit,
        })
    }
}

impl From<RequestBlockLocatorMessage> for wire::RequestBlockLocatorMessage {
    fn from(message: RequestBlockLocatorMessage) -> Self {
        Self {
            high_hash: Some(message.high_hash.into()),
            limit: message.limit,
        }
    }
}

impl TryFrom<wire::BlockLocatorMessage> for BlockLocatorMessage {
    type Error = ConversionError;

    fn try_from(message: wire::BlockLocatorMessage) -> Result<Self, Self::Error> {
        Ok(Self {
            hashes: bounded_hashes(
                message.hashes,
                "block locator hashes",
                MAX_BLOCK_LOCATORS_PER_MSG,
            )?,
        })
    }
}

impl TryFrom<BlockLocatorMessage> for wire::BlockLocatorMessage {
    type Error = ConversionError;

    fn try_from(message: BlockLocatorMessage) -> Result<Self, Self::Error> {
        Ok(Self {
            hashes: to_wire_hashes(
                message.hashes,
                "block locator hashes",
                MAX_BLOCK_LOCATORS_PER_MSG,
            )?,
        })
    }
}

impl TryFrom<wire::IbdBlockLocatorMessage> for IbdBlockLocatorMessage {
    type Error = ConversionError;

    fn try_from(message: wire::IbdBlockLocatorMessage) -> Result<Self, Self::Error> {
        Ok(Self {
            target_hash: hash_field(message.target_hash, "IbdBlockLocatorMessage.target_hash")?,
            block_locator_hashes: bounded_hashes(
                message.block_locator_hashes,
                "block locator hashes",
                MAX_BLOCK_LOCATORS_PER_MSG,
            )?,
        })
    }
}

impl TryFrom<IbdBlockLocatorMessage> for wire::IbdBlockLocatorMessage {
    type Error = ConversionError;

    fn try_from(message: IbdBlockLocatorMessage) -> Result<Self, Self::Error> {
        Ok(Self {
            target_hash: Some(message.target_hash.into()),
            block_locator_hashes: to_wire_hashes(
                message.block_locator_hashes,
                "block locator hashes",
                MAX_BLOCK_LOCATORS_PER_MSG,
            )?,
        })
    }
}

impl TryFrom<wire::IbdBlockLocatorHighestHashMessage> for IbdBlockLocatorHighestHashMessage {
    type Error = ConversionError;

    fn try_from(message: wire::IbdBlockLocatorHighestHashMessage) -> Result<Self, Self::Error> {
        Ok(Self {
            highest_hash: hash_field(
                message.highest_hash,
                "IbdBlockLocatorHighestHashMessage.highest_hash",
            )?,
        })
    }
}

impl From<IbdBlockLocatorHighestHashMessage> for wire::IbdBlockLocatorHighestHashMessage {
    fn from(message: IbdBlockLocatorHighestHashMessage) -> Self {
        Self {
            highest_hash: Some(message.highest_hash.into()),
        }
    }
}

impl TryFrom<wire::RequestIbdChainBlockLocatorMessage> for RequestIbdChainBlockLocatorMessage {
    type Error = ConversionError;

    fn try_from(message: wire::RequestIbdChainBlockLocatorMessage) -> Result<Self, Self::Error> {
        Ok(Self {
            low_hash: optional_hash(message.low_hash)?,
            high_hash: optional_hash(message.high_hash)?,
        })
    }
}

impl From<RequestIbdChainBlockLocatorMessage> for wire::RequestIbdChainBlockLocatorMessage {
    fn from(message: RequestIbdChainBlockLocatorMessage) -> Self {
        Self {
            low_hash: message.low_hash.map(Into::into),
            high_hash: message.high_hash.map(Into::into),
        }
    }
}

impl TryFrom<wire::IbdChainBlockLocatorMessage> for IbdChainBlockLocatorMessage {
    type Error = ConversionError;

    fn try_from(message: wire::IbdChainBlockLocatorMessage) -> Result<Self, Self::Error> {
        Ok(Self {
            block_locator_hashes: bounded_hashes(
                message.block_locator_hashes,
                "block locator hashes",
                MAX_BLOCK_LOCATORS_PER_MSG,
            )?,
        })
    }
}

impl TryFrom<IbdChainBlockLocatorMessage> for wire::IbdChainBlockLocatorMessage {
    type Error = ConversionError;

    fn try_from(message: IbdChainBlockLocatorMessage) -> Result<Self, Self::Error> {
        Ok(Self {
            block_locator_hashes: to_wire_hashes(
                message.block_locator_hashes,
                "block locator hashes",
                MAX_BLOCK_LOCATORS_PER_MSG,
            )?,
        })
    }
}

impl TryFrom<wire::RequestAnticoneMessage> for RequestAnticoneMessage {
    type Error = ConversionError;

    fn try_from(message: wire::RequestAnticoneMessage) -> Result<Self, Self::Error> {
        Ok(Self {
            block_hash: hash_field(message.block_hash, "RequestAnticoneMessage.block_hash")?,
            context_hash: hash_field(message.context_hash, "RequestAnticoneMessage.context_hash")?,
        })
    }
}

impl From<RequestAnticoneMessage> for wire::RequestAnticoneMessage {
    fn from(message: RequestAnticoneMessage) -> Self {
        Self {
            block_hash: Some(message.block_hash.into()),
            context_hash: Some(message.context_hash.into()),
        }
    }
}

// =============================================================================
// PRUNING POINT SYNC
// =============================================================================

impl TryFrom<wire::RequestPruningPointUtxoSetMessage> for RequestPruningPointUtxoSetMessage {
    type Error = ConversionError;

    fn try_from(message: wire::RequestPruningPointUtxoSetMessage) -> Result<Self, Self::Error> {
        Ok(Self {
            pruning_point_hash: hash_field(
                message.pruning_point_hash,
                "RequestPruningPointUtxoSetMessage.pruning_point_hash",
            )?,
        })
    }
}

impl From<RequestPruningPointUtxoSetMessage> for wire::RequestPruningPointUtxoSetMessage {
    fn from(message: RequestPruningPointUtxoSetMessage) -> Self {
        Self {
            pruning_point_hash: Some(message.pruning_point_hash.into()),
        }
    }
}

impl TryFrom<wire::PruningPointUtxoSetChunkMessage> for PruningPointUtxoSetChunkMessage {
    type Error = ConversionError;

    fn try_from(message: wire::PruningPointUtxoSetChunkMessage) -> Result<Self, Self::Error> {
        Ok(Self {
            outpoint_and_utxo_entry_pairs: convert_all(message.outpoint_and_utxo_entry_pairs)?,
        })
    }
}

impl From<PruningPointUtxoSetChunkMessage> for wire::PruningPointUtxoSetChunkMessage {
    fn from(message: PruningPointUtxoSetChunkMessage) -> Self {
        Self {
            outpoint_and_utxo_entry_pairs: message
                .outpoint_and_utxo_entry_pairs
                .into_iter()
                .map(Into::into)
                .collect(),
        }
    }
}

impl TryFrom<wire::PruningPointProofMessage> for PruningPointProofMessage {
    type Error = ConversionError;

    fn try_from(message: wire::PruningPointProofMessage) -> Result<Self, Self::Error> {
        let headers = message
            .headers
            .into_iter()
            .map(|level| convert_all(level.headers))
            .collect::<Result<_, _>>()?;
        Ok(Self { headers })
    }
}

impl TryFrom<PruningPointProofMessage> for wire::PruningPointProofMessage {
    type Error = ConversionError;

    fn try_from(message: PruningPointProofMessage) -> Result<Self, Self::Error> {
        let headers = message
            .headers
            .into_iter()
            .map(|level| -> Result<_, ConversionError> {
                Ok(wire::PruningPointProofHeaderArray {
                    headers: convert_all(level)?,
                })
            })
            .collect::<Result<_, _>>()?;
        Ok(Self { headers })
    }
}

impl TryFrom<wire::PruningPointsMessage> for PruningPointsMessage {
    type Error = ConversionError;

    fn try_from(message: wire::PruningPointsMessage) -> Result<Self, Self::Error> {
        Ok(Self {
            headers: convert_all(message.headers)?,
        })
    }
}

impl TryFrom<PruningPointsMessage> for wire::PruningPointsMessage {
    type Error = ConversionError;

    fn try_from(message: PruningPointsMessage) -> Result<Self, Self::Error> {
        Ok(Self {
            headers: convert_all(message.headers)?,
        })
    }
}

// =============================================================================
// TRUSTED DATA
// =============================================================================

impl TryFrom<wire::BlockWithTrustedDataMessage> for BlockWithTrustedDataMessage {
    type Error = ConversionError;

    fn try_from(message: wire::BlockWithTrustedDataMessage) -> Result<Self, Self::Error> {
        Ok(Self {
            block: required(message.block, "BlockWithTrustedDataMessage.block")?.try_into()?,
            daa_score: message.daa_score,
            daa_window: convert_all(message.daa_window)?,
            ghostdag_data: convert_all(message.ghostdag_data)?,
        })
    }
}

impl TryFrom<BlockWithTrustedDataMessage> for wire::BlockWithTrustedDataMessage {
    type Error = ConversionError;

    fn try_from(message: BlockWithTrustedDataMessage) -> Result<Self, Self::Error> {
        Ok(Self {
            block: Some(message.block.try_into()?),
            daa_score: message.daa_score,
            daa_window: convert_all(message.daa_window)?,
            ghostdag_data: message.ghostdag_data.into_iter().map(Into::into).collect(),
        })
    }
}

impl TryFrom<wire::TrustedDataMessage> for TrustedDataMessage {
    type Error = ConversionError;

    fn try_from(message: wire::TrustedDataMessage) -> Result<Self, Self::Error> {
        Ok(Self {
            daa_window: convert_all(message.daa_window)?,
            ghostdag_data: convert_all(message.ghostdag_data)?,
        })
    }
}

impl TryFrom<TrustedDataMessage> for wire::TrustedDataMessage {
    type Error = ConversionError;

    fn try_from(message: TrustedDataMessage) -> Result<Self, Self::Error> {
        Ok(Self {
            daa_window: convert_all(message.daa_window)?,
            ghostdag_data: message.ghostdag_data.into_iter().map(Into::into).collect(),
        })
    }
}
