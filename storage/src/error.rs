use thiserror::Error;

#[derive(Error, Debug)]
pub enum StorageError {
    #[error("Could not read ledger file")]
    ReadFailed,

    #[error("Ledger file is not valid JSON")]
    MalformedLedger,

    #[error("Object could not be serialized")]
    SerializationError,

    #[error("File creation failed")]
    FileCreationFailed,

    #[error("Could not write data")]
    DataWriteFailed,

    #[error("Could not atomically replace ledger file")]
    ReplaceFailed,
}
