use thiserror::Error;

pub type Result<T> = std::result::Result<T, LedgerError>;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum LedgerError {
    #[error("chain has no blocks")]
    EmptyChain,

    #[error("previous hash mismatch at block {0}")]
    IntegrityViolation(u64),

    #[error("block indices are not dense at block {0}")]
    IndexGap(u64),
}

#[derive(Error, Debug, PartialEq, Eq)]
pub enum TransactionError {
    #[error("field {0:?} is not a scalar value")]
    NonScalarField(String),
}
