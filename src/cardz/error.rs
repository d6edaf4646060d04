use thiserror::Error;

#[derive(Error, Debug)]
pub enum CardzError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("Catalog API request failed with status {status}")]
    Api { status: u16 },

    #[error("Import error: {0}")]
    Import(String),

    #[error("Store error: {0}")]
    Store(String),
}

pub type Result<T> = std::result::Result<T, CardzError>;
