//! Persistence for the chained-block ledger: one JSON array of blocks,
//! rewritten in full on every save.

use std::fs;
use std::path::Path;

use anyhow::Result;
use churnaudit_ledger::block::Block;
use churnaudit_ledger::ledger::Ledger;
use log::debug;

use crate::atomic::write_atomic;
use crate::error::StorageError;

/// Loads the ledger file if present. An absent file yields a fresh ledger
/// with just the genesis block; an unreadable or malformed file is an error,
/// never silently discarded.
pub fn load(path: &Path) -> Result<Ledger> {
    if !path.exists() {
        debug!("no ledger file at {}, starting a fresh chain", path.display());
        return Ok(Ledger::new());
    }
    let bytes = fs::read(path).or(Err(StorageError::ReadFailed))?;
    let blocks: Vec<Block> =
        serde_json::from_slice(&bytes).or(Err(StorageError::MalformedLedger))?;
    debug!("loaded {} blocks from {}", blocks.len(), path.display());
    let ledger = Ledger::from_blocks(blocks)?;
    Ok(ledger)
}

/// Serializes the full block sequence and atomically replaces the ledger
/// file. Pending transactions are not persisted; they belong to the current
/// run until sealed.
pub fn save(ledger: &Ledger, path: &Path) -> Result<()> {
    let json = serde_json::to_string_pretty(ledger.full_history())
        .or(Err(StorageError::SerializationError))?;
    write_atomic(path, json.as_bytes())?;
    debug!(
        "saved {} blocks to {}",
        ledger.full_history().len(),
        path.display()
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use churnaudit_ledger::transaction::Transaction;
    use serde_json::json;
    use tempdir::TempDir;

    fn tx(value: serde_json::Value) -> Transaction {
        match value {
            serde_json::Value::Object(map) => Transaction::new(map).unwrap(),
            _ => panic!("expected object"),
        }
    }

    #[test]
    fn test_load_missing_file_starts_fresh() {
        let tmpdir = TempDir::new("test_load_missing").unwrap();
        let ledger = load(&tmpdir.path().join("ledger.json")).unwrap();
        assert_eq!(ledger.full_history().len(), 1);
        assert!(ledger.full_history()[0].is_genesis());
    }

    #[test]
    fn test_round_trip() {
        let tmpdir = TempDir::new("test_round_trip").unwrap();
        let path = tmpdir.path().join("ledger.json");

        let mut ledger = Ledger::new();
        ledger.add_transaction(tx(json!({
            "CustomerID": "42",
            "Risk_Level": "High",
            "Retention_Action": "Call",
        })));
        ledger.create_block();
        ledger.add_transaction(tx(json!({"CustomerID": "7", "Risk_Level": "Low"})));
        ledger.create_block();

        save(&ledger, &path).unwrap();
        let restored = load(&path).unwrap();
        assert_eq!(restored, ledger);
        assert!(restored.verify().is_ok());
    }

    #[test]
    fn test_load_rejects_malformed_json() {
        let tmpdir = TempDir::new("test_load_malformed").unwrap();
        let path = tmpdir.path().join("ledger.json");
        fs::write(&path, "{not json").unwrap();
        let err = load(&path).unwrap_err();
        assert!(err.downcast_ref::<StorageError>().is_some());
    }

    #[test]
    fn test_load_rejects_empty_chain() {
        let tmpdir = TempDir::new("test_load_empty_chain").unwrap();
        let path = tmpdir.path().join("ledger.json");
        fs::write(&path, "[]").unwrap();
        assert!(load(&path).is_err());
    }

    #[test]
    fn test_save_appends_across_runs() {
        let tmpdir = TempDir::new("test_save_across_runs").unwrap();
        let path = tmpdir.path().join("ledger.json");

        let mut first = Ledger::new();
        first.add_transaction(tx(json!({"CustomerID": "1"})));
        first.create_block();
        save(&first, &path).unwrap();

        let mut second = load(&path).unwrap();
        second.add_transaction(tx(json!({"CustomerID": "2"})));
        second.create_block();
        save(&second, &path).unwrap();

        let restored = load(&path).unwrap();
        assert_eq!(restored.full_history().len(), 3);
        assert!(restored.verify().is_ok());
    }
}
