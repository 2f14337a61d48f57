//! # Core Domain Entities
//!
//! The blockDAG objects that cross the node's edge. These are produced and
//! consumed by consensus, the UTXO index and storage; this workspace only
//! carries them to and from the wire.
//!
//! ## Clusters
//!
//! - **Identifiers**: `DomainHash`, `TransactionId`, `SubnetworkId`
//! - **Transactions**: `DomainTransaction`, inputs, outputs, `ScriptPublicKey`
//! - **Blocks**: `DomainBlockHeader`, `BlockLevelParents`, `DomainBlock`
//! - **UTXO**: `UtxoEntry`, `DomainOutpoint`, `OutpointAndUtxoEntryPair`
//! - **GHOSTDAG**: `BlockGhostdagData`, `BluesAnticoneSize`
//! - **Networking**: `NetAddress`

use crate::errors::ParseError;
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use std::fmt;
use std::net::IpAddr;

// Re-export U256 from primitive-types for blue work values
pub use primitive_types::U256;

// =============================================================================
// CLUSTER A: IDENTIFIERS
// =============================================================================

/// Size in bytes of a `DomainHash`.
pub const HASH_SIZE: usize = 32;

/// Size in bytes of a `SubnetworkId`.
pub const SUBNETWORK_ID_SIZE: usize = 20;

/// A 32-byte hash identifying a block or transaction.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize)]
pub struct DomainHash([u8; HASH_SIZE]);

impl DomainHash {
    /// Wrap raw bytes.
    #[must_use]
    pub const fn from_bytes(bytes: [u8; HASH_SIZE]) -> Self {
        Self(bytes)
    }

    /// Build from a slice that must be exactly `HASH_SIZE` long.
    pub fn from_slice(bytes: &[u8]) -> Result<Self, ParseError> {
        let array: [u8; HASH_SIZE] =
            bytes
                .try_into()
                .map_err(|_| ParseError::InvalidLength {
                    what: "DomainHash",
                    expected: HASH_SIZE,
                    actual: bytes.len(),
                })?;
        Ok(Self(array))
    }

    /// Parse from a hex string.
    pub fn from_hex(s: &str) -> Result<Self, ParseError> {
        let bytes = hex::decode(s).map_err(|e| ParseError::InvalidHex {
            what: "DomainHash",
            reason: e.to_string(),
        })?;
        Self::from_slice(&bytes)
    }

    /// The raw bytes.
    #[must_use]
    pub fn as_bytes(&self) -> &[u8; HASH_SIZE] {
        &self.0
    }

    /// Lowercase hex rendering.
    #[must_use]
    pub fn to_hex(&self) -> String {
        hex::encode(self.0)
    }
}

impl fmt::Display for DomainHash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl fmt::Debug for DomainHash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "DomainHash({})", self.to_hex())
    }
}

impl From<[u8; HASH_SIZE]> for DomainHash {
    fn from(bytes: [u8; HASH_SIZE]) -> Self {
        Self(bytes)
    }
}

/// Transaction identifiers share the hash representation.
pub type TransactionId = DomainHash;

/// Identifies the subnetwork a transaction belongs to.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct SubnetworkId([u8; SUBNETWORK_ID_SIZE]);

impl SubnetworkId {
    /// The native subnetwork (all zeroes).
    pub const NATIVE: Self = Self([0; SUBNETWORK_ID_SIZE]);

    /// The coinbase subnetwork.
    pub const COINBASE: Self = {
        let mut bytes = [0; SUBNETWORK_ID_SIZE];
        bytes[0] = 1;
        Self(bytes)
    };

    /// The registry subnetwork.
    pub const REGISTRY: Self = {
        let mut bytes = [0; SUBNETWORK_ID_SIZE];
        bytes[0] = 2;
        Self(bytes)
    };

    /// Wrap raw bytes.
    #[must_use]
    pub const fn from_bytes(bytes: [u8; SUBNETWORK_ID_SIZE]) -> Self {
        Self(bytes)
    }

    /// Build from a slice that must be exactly `SUBNETWORK_ID_SIZE` long.
    pub fn from_slice(bytes: &[u8]) -> Result<Self, ParseError> {
        let array: [u8; SUBNETWORK_ID_SIZE] =
            bytes
                .try_into()
                .map_err(|_| ParseError::InvalidLength {
                    what: "SubnetworkId",
                    expected: SUBNETWORK_ID_SIZE,
                    actual: bytes.len(),
                })?;
        Ok(Self(array))
    }

    /// Parse from a hex string.
    pub fn from_hex(s: &str) -> Result<Self, ParseError> {
        let bytes = hex::decode(s).map_err(|e| ParseError::InvalidHex {
            what: "SubnetworkId",
            reason: e.to_string(),
        })?;
        Self::from_slice(&bytes)
    }

    /// The raw bytes.
    #[must_use]
    pub fn as_bytes(&self) -> &[u8; SUBNETWORK_ID_SIZE] {
        &self.0
    }

    /// Lowercase hex rendering.
    #[must_use]
    pub fn to_hex(&self) -> String {
        hex::encode(self.0)
    }
}

impl fmt::Display for SubnetworkId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl fmt::Debug for SubnetworkId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "SubnetworkId({})", self.to_hex())
    }
}

// =============================================================================
// CLUSTER B: TRANSACTIONS
// =============================================================================

/// A versioned locking script.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ScriptPublicKey {
    /// Script version.
    pub version: u16,
    /// Raw script bytes.
    pub script: Vec<u8>,
}

/// Reference to a transaction output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct DomainOutpoint {
    /// The transaction that created the output.
    pub transaction_id: TransactionId,
    /// Output index within that transaction.
    pub index: u32,
}

/// A transaction input.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct DomainTransactionInput {
    /// The output being spent.
    pub previous_outpoint: DomainOutpoint,
    /// Unlocking script.
    pub signature_script: Vec<u8>,
    /// Relative lock sequence.
    pub sequence: u64,
    /// Declared signature operation count.
    pub sig_op_count: u8,
}

/// A transaction output.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct DomainTransactionOutput {
    /// Amount in sompi.
    pub value: u64,
    /// Locking script.
    pub script_public_key: ScriptPublicKey,
}

/// A transaction as carried on the wire.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct DomainTransaction {
    /// Transaction format version.
    pub version: u16,
    /// Inputs spent by this transaction.
    pub inputs: Vec<DomainTransactionInput>,
    /// Outputs created by this transaction.
    pub outputs: Vec<DomainTransactionOutput>,
    /// Absolute lock time.
    pub lock_time: u64,
    /// Subnetwork this transaction belongs to.
    pub subnetwork_id: SubnetworkId,
    /// Gas limit for subnetwork transactions.
    pub gas: u64,
    /// Subnetwork payload.
    pub payload: Vec<u8>,
}

impl DomainTransaction {
    /// Compute the transaction ID.
    ///
    /// The ID excludes signature scripts so that it is stable under
    /// signature malleation.
    #[must_use]
    pub fn id(&self) -> TransactionId {
        let mut hasher = Sha256::new();
        self.hash_into(&mut hasher, false);
        DomainHash::from_bytes(hasher.finalize().into())
    }

    /// Compute the full transaction hash, including signature scripts.
    #[must_use]
    pub fn hash(&self) -> DomainHash {
        let mut hasher = Sha256::new();
        self.hash_into(&mut hasher, true);
        DomainHash::from_bytes(hasher.finalize().into())
    }

    /// Whether this is a coinbase transaction.
    #[must_use]
    pub fn is_coinbase(&self) -> bool {
        self.subnetwork_id == SubnetworkId::COINBASE
    }

    fn hash_into(&self, hasher: &mut Sha256, include_signatures: bool) {
        hasher.update(self.version.to_le_bytes());
        hasher.update((self.inputs.len() as u64).to_le_bytes());
        for input in &self.inputs {
            hasher.update(input.previous_outpoint.transaction_id.as_bytes());
            hasher.update(input.previous_outpoint.index.to_le_bytes());
            if include_signatures {
                write_var_bytes(hasher, &input.signature_script);
            }
            hasher.update(input.sequence.to_le_bytes());
            hasher.update([input.sig_op_count]);
        }
        hasher.update((self.outputs.len() as u64).to_le_bytes());
        for output in &self.outputs {
            hasher.update(output.value.to_le_bytes());
            hasher.update(output.script_public_key.version.to_le_bytes());
            write_var_bytes(hasher, &output.script_public_key.script);
        }
        hasher.update(self.lock_time.to_le_bytes());
        hasher.update(self.subnetwork_id.as_bytes());
        hasher.update(self.gas.to_le_bytes());
        write_var_bytes(hasher, &self.payload);
    }
}

fn write_var_bytes(hasher: &mut Sha256, bytes: &[u8]) {
    hasher.update((bytes.len() as u64).to_le_bytes());
    hasher.update(bytes);
}

// =============================================================================
// CLUSTER C: BLOCKS
// =============================================================================

/// The parents of a block at one level of the block-level hierarchy.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct BlockLevelParents {
    /// Parent hashes at this level.
    pub parent_hashes: Vec<DomainHash>,
}

/// A block header.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct DomainBlockHeader {
    /// Header format version.
    pub version: u16,
    /// Parents per block level; level 0 holds the direct parents.
    pub parents: Vec<BlockLevelParents>,
    /// Merkle root of the block's transactions.
    pub hash_merkle_root: DomainHash,
    /// Merkle root of the transaction IDs accepted by this block.
    pub accepted_id_merkle_root: DomainHash,
    /// Commitment to the UTXO set after this block.
    pub utxo_commitment: DomainHash,
    /// Unix time in milliseconds.
    pub timestamp: i64,
    /// Compact difficulty target.
    pub bits: u32,
    /// Proof-of-work nonce.
    pub nonce: u64,
    /// DAA score of the block.
    pub daa_score: u64,
    /// Accumulated blue work.
    pub blue_work: U256,
    /// Blue score of the block.
    pub blue_score: u64,
    /// The pruning point as seen by this block.
    pub pruning_point: DomainHash,
}

impl DomainBlockHeader {
    /// Direct parents (level 0), or an empty slice for genesis.
    #[must_use]
    pub fn direct_parents(&self) -> &[DomainHash] {
        self.parents
            .first()
            .map(|level| level.parent_hashes.as_slice())
            .unwrap_or(&[])
    }

    /// Compute the block hash from the header contents.
    #[must_use]
    pub fn block_hash(&self) -> DomainHash {
        let mut hasher = Sha256::new();
        hasher.update(self.version.to_le_bytes());
        hasher.update((self.parents.len() as u64).to_le_bytes());
        for level in &self.parents {
            hasher.update((level.parent_hashes.len() as u64).to_le_bytes());
            for parent in &level.parent_hashes {
                hasher.update(parent.as_bytes());
            }
        }
        hasher.update(self.hash_merkle_root.as_bytes());
        hasher.update(self.accepted_id_merkle_root.as_bytes());
        hasher.update(self.utxo_commitment.as_bytes());
        hasher.update(self.timestamp.to_le_bytes());
        hasher.update(self.bits.to_le_bytes());
        hasher.update(self.nonce.to_le_bytes());
        hasher.update(self.daa_score.to_le_bytes());
        let mut blue_work = [0u8; 32];
        self.blue_work.to_big_endian(&mut blue_work);
        hasher.update(blue_work);
        hasher.update(self.blue_score.to_le_bytes());
        hasher.update(self.pruning_point.as_bytes());
        DomainHash::from_bytes(hasher.finalize().into())
    }
}

/// A full block.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct DomainBlock {
    /// The block header.
    pub header: DomainBlockHeader,
    /// Transactions, coinbase first.
    pub transactions: Vec<DomainTransaction>,
}

impl DomainBlock {
    /// Hash of the block (header hash).
    #[must_use]
    pub fn hash(&self) -> DomainHash {
        self.header.block_hash()
    }
}

// =============================================================================
// CLUSTER D: UTXO
// =============================================================================

/// An unspent transaction output.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct UtxoEntry {
    /// Amount in sompi.
    pub amount: u64,
    /// Locking script.
    pub script_public_key: ScriptPublicKey,
    /// DAA score of the block that created the output.
    pub block_daa_score: u64,
    /// Whether the output was created by a coinbase transaction.
    pub is_coinbase: bool,
}

/// An outpoint together with the UTXO it references.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct OutpointAndUtxoEntryPair {
    /// The outpoint.
    pub outpoint: DomainOutpoint,
    /// The referenced entry.
    pub utxo_entry: UtxoEntry,
}

// =============================================================================
// CLUSTER E: GHOSTDAG
// =============================================================================

/// The GHOSTDAG K parameter type. Anticone sizes never exceed it.
pub type KType = u8;

/// Size of a blue block's anticone within a merge set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BluesAnticoneSize {
    /// The blue block.
    pub blue_hash: DomainHash,
    /// Its anticone size.
    pub anticone_size: KType,
}

/// Already-computed GHOSTDAG metadata for a block.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct BlockGhostdagData {
    /// Blue score.
    pub blue_score: u64,
    /// Accumulated blue work.
    pub blue_work: U256,
    /// The selected parent.
    pub selected_parent: DomainHash,
    /// Blue blocks in the merge set.
    pub merge_set_blues: Vec<DomainHash>,
    /// Red blocks in the merge set.
    pub merge_set_reds: Vec<DomainHash>,
    /// Anticone sizes of the blues.
    pub blues_anticone_sizes: Vec<BluesAnticoneSize>,
}

// =============================================================================
// CLUSTER F: NETWORKING
// =============================================================================

/// A network address advertised between peers.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct NetAddress {
    /// Last time the address was seen (unix milliseconds).
    pub timestamp: i64,
    /// IP address.
    pub ip: IpAddr,
    /// TCP port.
    pub port: u16,
}

impl fmt::Display for NetAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.ip {
            IpAddr::V4(ip) => write!(f, "{}:{}", ip, self.port),
            IpAddr::V6(ip) => write!(f, "[{}]:{}", ip, self.port),
        }
    }
}
