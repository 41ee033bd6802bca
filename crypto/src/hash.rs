use hex::encode;
use serde_json::Value;
use sha2::{Digest, Sha256};
use std::fmt::{Display, Formatter};

use crate::canonical::canonical_json;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Hash {
    hash: [u8; Hash::LENGTH],
}

impl Hash {
    pub const LENGTH: usize = 32;

    pub fn new(hash: [u8; Hash::LENGTH]) -> Self {
        Hash { hash }
    }

    /// SHA-256 over raw bytes.
    pub fn digest<T: AsRef<[u8]>>(value: T) -> Self {
        let mut hasher = Sha256::new();
        hasher.update(value.as_ref());
        Hash {
            hash: hasher.finalize().into(),
        }
    }

    pub fn to_vec(&self) -> Vec<u8> {
        self.hash.to_vec()
    }

    pub fn to_hex(&self) -> String {
        encode(self.as_ref())
    }
}

impl AsRef<[u8; Hash::LENGTH]> for Hash {
    fn as_ref(&self) -> &[u8; Hash::LENGTH] {
        &self.hash
    }
}

impl Display for Hash {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.to_hex())
    }
}

/// Digest of the canonical encoding of a JSON value. Structurally identical
/// values hash identically regardless of the field order they were built in.
pub fn hash_json(value: &Value) -> Hash {
    Hash::digest(canonical_json(value))
}
