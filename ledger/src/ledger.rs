use serde::Serialize;

use crate::block::{Block, GENESIS_PREVIOUS_HASH};
use crate::errors::{LedgerError, Result};
use crate::transaction::Transaction;

/// Hash-chained append-only audit log.
///
/// Single-writer: all operations take `&mut self`, so callers with multiple
/// producer threads share the ledger behind one mutex, which is enough to
/// make `add_transaction` and `create_block` serialize against each other.
/// Which transactions land in which block is determined by seal order;
/// callers that need a batch sealed together must finish adding it before
/// sealing.
#[derive(Debug, PartialEq)]
pub struct Ledger {
    chain: Vec<Block>,
    pending: Vec<Transaction>,
}

/// Aggregate view of the chain tip for dashboard readers.
#[derive(Serialize, Clone, Debug, PartialEq)]
pub struct LedgerSummary {
    pub blocks: u64,
    pub last_index: u64,
    pub last_timestamp: String,
    pub last_transactions: usize,
}

impl Ledger {
    /// Creates a ledger with a freshly sealed genesis block: index 1, no
    /// transactions, predecessor sentinel `"0"`.
    pub fn new() -> Self {
        let mut ledger = Ledger {
            chain: Vec::new(),
            pending: Vec::new(),
        };
        ledger.create_block();
        ledger
    }

    /// Rebuilds a ledger from a persisted block sequence. The pending buffer
    /// starts empty. An empty sequence is rejected: a valid chain always
    /// contains at least the genesis block.
    pub fn from_blocks(blocks: Vec<Block>) -> Result<Self> {
        if blocks.is_empty() {
            return Err(LedgerError::EmptyChain);
        }
        Ok(Ledger {
            chain: blocks,
            pending: Vec::new(),
        })
    }

    /// Appends a transaction to the pending buffer.
    ///
    /// Returns the index the containing block will have if the next seal is
    /// the one that picks this transaction up. Advisory only: the value goes
    /// stale if another `create_block` happens first.
    pub fn add_transaction(&mut self, transaction: Transaction) -> u64 {
        self.pending.push(transaction);
        self.chain.len() as u64 + 1
    }

    /// Seals the pending buffer into a new block chained to the current tip
    /// and drains the buffer. Sealing with an empty buffer is legal and
    /// produces an empty block.
    pub fn create_block(&mut self) -> &Block {
        let previous_hash = match self.chain.last() {
            Some(block) => block.hash().to_hex(),
            None => GENESIS_PREVIOUS_HASH.to_string(),
        };
        let transactions = std::mem::replace(&mut self.pending, Vec::new());
        let block = Block::seal(self.chain.len() as u64 + 1, transactions, previous_hash);
        self.chain.push(block);
        &self.chain[self.chain.len() - 1]
    }

    pub fn last_block(&self) -> Result<&Block> {
        self.chain.last().ok_or(LedgerError::EmptyChain)
    }

    /// Checks the hash chain without mutating it: the genesis sentinel
    /// first, then every block's `previous_hash` against the recomputed
    /// digest of its predecessor, and the dense 1-based index invariant.
    /// Errors carry the index of the offending block.
    pub fn verify(&self) -> Result<()> {
        if self.chain.is_empty() {
            return Err(LedgerError::EmptyChain);
        }
        for (i, block) in self.chain.iter().enumerate() {
            let expected_index = i as u64 + 1;
            if block.index != expected_index {
                return Err(LedgerError::IndexGap(expected_index));
            }
            if i == 0 {
                if block.previous_hash != GENESIS_PREVIOUS_HASH {
                    return Err(LedgerError::IntegrityViolation(1));
                }
            } else if block.previous_hash != self.chain[i - 1].hash().to_hex() {
                return Err(LedgerError::IntegrityViolation(block.index));
            }
        }
        Ok(())
    }

    /// Ordered block sequence, oldest first.
    pub fn full_history(&self) -> &[Block] {
        &self.chain
    }

    pub fn pending_transactions(&self) -> &[Transaction] {
        &self.pending
    }

    pub fn latest_summary(&self) -> Result<LedgerSummary> {
        let last = self.last_block()?;
        Ok(LedgerSummary {
            blocks: self.chain.len() as u64,
            last_index: last.index,
            last_timestamp: last.timestamp.clone(),
            last_transactions: last.transactions.len(),
        })
    }
}

impl Default for Ledger {
    fn default() -> Self {
        Ledger::new()
    }
}
