use thiserror::Error;

use super::CustomerId;

/// Customer store errors
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CustomerError {
    #[error("Customer with ID {0} not found.")]
    NotFound(CustomerId),

    #[error("Customer already exists: {0}")]
    AlreadyExists(CustomerId),

    #[error("Invalid customer record: {0}")]
    InvalidRecord(String),
}

/// Result type for customer store operations
pub type Result<T> = std::result::Result<T, CustomerError>;
