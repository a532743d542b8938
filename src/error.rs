// Milk Mob Error Types

use thiserror::Error;

#[derive(Error, Debug)]
pub enum MilkMobError {
    #[error("Invalid input: {0}")]
    Input(String),

    #[error("Metadata extraction failed: {0}")]
    Extraction(String),

    #[error("Content search failed: {0}")]
    Search(String),

    #[error("Store error: {0}")]
    Store(String),

    #[error("Mob not found: {0}")]
    MobNotFound(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("{0}")]
    Other(String),
}

impl From<anyhow::Error> for MilkMobError {
    fn from(err: anyhow::Error) -> Self {
        MilkMobError::Other(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, MilkMobError>;
