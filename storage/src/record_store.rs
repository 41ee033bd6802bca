//! Flat-record persistence: one JSON array of `{timestamp, data, hash}`
//! entries, one appended per call. The hash covers the record's own data
//! only; entries are not chained to a predecessor. Used for one-shot status
//! records such as per-upload prediction summaries.

use std::fs;
use std::path::Path;

use anyhow::Result;
use chrono::{SecondsFormat, Utc};
use churnaudit_crypto::hash_json;
use log::debug;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::atomic::write_atomic;
use crate::error::StorageError;

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct Record {
    pub timestamp: String,
    pub data: Value,
    pub hash: String,
}

impl Record {
    fn new(data: Value) -> Self {
        let hash = hash_json(&data).to_hex();
        Record {
            timestamp: Utc::now().to_rfc3339_opts(SecondsFormat::Micros, true),
            data,
            hash,
        }
    }

    /// Recomputes the data digest and compares it to the stored one.
    pub fn verify(&self) -> bool {
        hash_json(&self.data).to_hex() == self.hash
    }
}

/// Loads the record file if present; absent means no records yet, malformed
/// is an error.
pub fn load(path: &Path) -> Result<Vec<Record>> {
    if !path.exists() {
        return Ok(Vec::new());
    }
    let bytes = fs::read(path).or(Err(StorageError::ReadFailed))?;
    let records: Vec<Record> =
        serde_json::from_slice(&bytes).or(Err(StorageError::MalformedLedger))?;
    Ok(records)
}

/// Appends one record and rewrites the whole list atomically. The record's
/// `data` is arbitrary JSON; no scalar restriction applies here.
pub fn append(path: &Path, data: Value) -> Result<Record> {
    let mut records = load(path)?;
    let record = Record::new(data);
    records.push(record.clone());
    let json =
        serde_json::to_string_pretty(&records).or(Err(StorageError::SerializationError))?;
    write_atomic(path, json.as_bytes())?;
    debug!("appended record {} to {}", records.len(), path.display());
    Ok(record)
}

/// The most recent record, if any. Dashboard readers surface its aggregate
/// fields.
pub fn latest(records: &[Record]) -> Option<&Record> {
    records.last()
}
