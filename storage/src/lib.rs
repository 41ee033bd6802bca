pub mod chain_store;
pub mod error;
pub mod record_store;

mod atomic;
