pub mod block;
pub mod errors;
pub mod ledger;
pub mod transaction;
