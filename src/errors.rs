use thiserror::Error;

/// Error type that captures ledger, engine, and storage failures.
#[derive(Debug, Error)]
pub enum FinanceError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),
    #[error("unknown risk profile `{0}`")]
    UnknownProfile(String),
    #[error("invalid transaction: {0}")]
    InvalidTransaction(String),
    #[error("storage error: {0}")]
    Storage(String),
}
