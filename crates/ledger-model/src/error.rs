use thiserror::Error;

#[derive(Debug, Error)]
pub enum LedgerError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid routing table: {0}")]
    Routing(String),
    #[error("{0}")]
    Message(String),
}

pub type Result<T> = std::result::Result<T, LedgerError>;
