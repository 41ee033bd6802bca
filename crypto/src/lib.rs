pub mod canonical;
pub mod hash;

pub use crate::canonical::canonical_json;
pub use crate::hash::{hash_json, Hash};
