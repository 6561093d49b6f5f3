//! Error types for kensho crate

use thiserror::Error;

#[derive(Error, Debug)]
pub enum KenshoError {
    #[error("Core error: {0}")]
    Core(#[from] kensho_core::CoreError),

    #[error(transparent)]
    Customer(#[from] crate::customer::CustomerError),

    #[error(transparent)]
    Validation(#[from] crate::validation::ValidationError),

    #[error("Agent error: {0}")]
    Agent(#[from] crate::agent::AgentError),

    #[error("Build error: {0}")]
    Build(String),
}

pub type Result<T> = std::result::Result<T, KenshoError>;
