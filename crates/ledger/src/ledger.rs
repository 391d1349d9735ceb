use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use ledgerwallet_core::{Amount, Identity, ValueObject};

/// One directed movement of `amount` from `sender` to `recipient` (immutable).
///
/// `sender == recipient` is allowed and represents a self-transfer.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Transfer {
    pub sender: Identity,
    pub recipient: Identity,
    /// Non-negative, possibly fractional.
    pub amount: Amount,
}

impl ValueObject for Transfer {}

impl Transfer {
    pub fn new(sender: Identity, recipient: Identity, amount: Amount) -> Self {
        Self {
            sender,
            recipient,
            amount,
        }
    }

    /// true if `identity` is the sender or the recipient.
    pub fn involves(&self, identity: &Identity) -> bool {
        self.sender == *identity || self.recipient == *identity
    }

    pub fn is_self_transfer(&self) -> bool {
        self.sender == self.recipient
    }
}

/// Link to the preceding block as written by the chain that produced the
/// snapshot. The genesis block carries a bare number, later blocks a hex hash.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PreviousHash {
    Hash(String),
    Genesis(u64),
}

/// An ordered group of transfers.
///
/// Header fields are optional and carried verbatim; nothing here checks them.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Block {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub index: Option<u64>,
    /// Seconds since the Unix epoch (fractional).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<f64>,
    #[serde(alias = "transactions", default)]
    pub transfers: Vec<Transfer>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub proof: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub previous_hash: Option<PreviousHash>,
}

impl Block {
    pub fn new(transfers: Vec<Transfer>) -> Self {
        Self {
            transfers,
            ..Self::default()
        }
    }

    pub fn with_index(mut self, index: u64) -> Self {
        self.index = Some(index);
        self
    }

    pub fn with_timestamp(mut self, timestamp: f64) -> Self {
        self.timestamp = Some(timestamp);
        self
    }

    pub fn transfers(&self) -> &[Transfer] {
        &self.transfers
    }

    /// Block timestamp as a UTC instant, if present and representable.
    pub fn recorded_at(&self) -> Option<DateTime<Utc>> {
        let ts = self.timestamp?;
        if !ts.is_finite() {
            return None;
        }
        let secs = ts.floor();
        let nanos = ((ts - secs) * 1e9).round().min(999_999_999.0) as u32;
        DateTime::from_timestamp(secs as i64, nanos)
    }
}

/// Immutable snapshot of the chain, oldest block first.
///
/// Owned by whoever loaded it; readers only borrow. There is no write path,
/// so a `&Ledger` can be shared across threads freely. Snapshots are read
/// through the `loader` module.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Ledger {
    blocks: Vec<Block>,
}

impl Ledger {
    pub fn new(blocks: Vec<Block>) -> Self {
        Self { blocks }
    }

    pub fn empty() -> Self {
        Self::default()
    }

    pub fn blocks(&self) -> &[Block] {
        &self.blocks
    }

    /// Number of blocks.
    pub fn len(&self) -> usize {
        self.blocks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }

    pub fn last_block(&self) -> Option<&Block> {
        self.blocks.last()
    }

    /// Every transfer of every block, in block order then in-block order.
    ///
    /// Each call starts a fresh pass over the snapshot.
    pub fn all_transfers(&self) -> impl Iterator<Item = &Transfer> + Clone + '_ {
        self.blocks.iter().flat_map(|b| b.transfers.iter())
    }

    pub fn transfer_count(&self) -> usize {
        self.blocks.iter().map(|b| b.transfers.len()).sum()
    }
}

impl FromIterator<Block> for Ledger {
    fn from_iter<T: IntoIterator<Item = Block>>(iter: T) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl From<Vec<Block>> for Ledger {
    fn from(blocks: Vec<Block>) -> Self {
        Self::new(blocks)
    }
}
