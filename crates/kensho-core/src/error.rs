//! Error types for kensho-core

use thiserror::Error;

#[derive(Error, Debug)]
pub enum CoreError {
    #[error("Processing error: {0}")]
    Processing(String),

    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    #[error("Rejected output: {0}")]
    Rejected(String),
}

pub type Result<T> = std::result::Result<T, CoreError>;
