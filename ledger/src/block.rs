use chrono::{SecondsFormat, Utc};
use churnaudit_crypto::{hash_json, Hash};
use serde::{Deserialize, Serialize};

use crate::transaction::Transaction;

/// Sentinel predecessor hash of the genesis block. Reserved: a real digest
/// is always 64 hex characters, so no block hash can collide with it.
pub const GENESIS_PREVIOUS_HASH: &str = "0";

/// One sealed batch of transactions, immutable after creation.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct Block {
    /// 1-based position in the chain, dense and monotonically increasing.
    pub index: u64,
    /// RFC 3339 UTC sealing time, informational only.
    pub timestamp: String,
    /// Sealed transactions in insertion order; may be empty.
    pub transactions: Vec<Transaction>,
    /// Hex digest of the previous block, or `"0"` for genesis.
    pub previous_hash: String,
}

impl Block {
    pub(crate) fn seal(index: u64, transactions: Vec<Transaction>, previous_hash: String) -> Self {
        Block {
            index,
            timestamp: Utc::now().to_rfc3339_opts(SecondsFormat::Micros, true),
            transactions,
            previous_hash,
        }
    }

    /// Canonical hash of the whole block, including its own previous_hash
    /// and transactions.
    pub fn hash(&self) -> Hash {
        let value = serde_json::to_value(self).unwrap();
        hash_json(&value)
    }

    pub fn is_genesis(&self) -> bool {
        self.previous_hash == GENESIS_PREVIOUS_HASH
    }
}
