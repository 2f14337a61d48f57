//! Protocol ceilings enforced in both directions of the codec.

/// Parents per block level.
pub const MAX_BLOCK_PARENTS: usize = 255;

/// Block levels in a header.
pub const MAX_BLOCK_LEVELS: usize = 255;

/// Addresses in one `Addresses` message.
pub const MAX_ADDRESSES_PER_MSG: usize = 1000;

/// Transaction ids in one `InvTransactions` message.
pub const MAX_INV_PER_TX_INV_MSG: usize = 1 << 17;

/// Hashes in one `RequestRelayBlocks` message.
pub const MAX_REQUEST_RELAY_BLOCKS_HASHES: usize = 1 << 17;

/// Hashes in one block locator.
pub const MAX_BLOCK_LOCATORS_PER_MSG: usize = 500;

/// Transaction ids in one `RequestTransactions` message.
pub const MAX_INV_PER_REQUEST_TRANSACTIONS_MSG: usize = 1 << 17;

/// Transactions in one block.
pub const MAX_TX_PER_BLOCK: usize = 3_355_444;

/// Bytes of a peer's user agent.
pub const MAX_USER_AGENT_LEN: usize = 256;

/// Largest serialized envelope accepted from or written to a connection.
pub const MAX_MESSAGE_PAYLOAD: u64 = 32 * 1024 * 1024;
