use kensho_core::CoreError;
use thiserror::Error;

use crate::customer::CustomerError;
use crate::validation::ValidationError;

/// Agent run errors
#[derive(Error, Debug)]
pub enum AgentError {
    #[error(transparent)]
    Customer(#[from] CustomerError),

    #[error("Output rejected: {0}")]
    Validation(#[from] ValidationError),

    #[error("Model provider error: {0}")]
    Provider(String),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Invalid arguments for tool {tool}: {message}")]
    InvalidToolArguments { tool: String, message: String },

    #[error("Model returned neither text nor tool calls")]
    EmptyResponse,

    #[error("Exceeded maximum of {0} model turns")]
    MaxTurnsExceeded(usize),

    #[error("Configuration error: {0}")]
    Config(String),
}

/// Result type for agent operations
pub type Result<T> = std::result::Result<T, AgentError>;

impl From<AgentError> for CoreError {
    fn from(err: AgentError) -> Self {
        match err {
            AgentError::Customer(e) => CoreError::InvalidRequest(e.to_string()),
            AgentError::Validation(e) => CoreError::Rejected(e.to_string()),
            other => CoreError::Processing(other.to_string()),
        }
    }
}
