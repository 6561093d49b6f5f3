//! Error types for kensho-cli

use thiserror::Error;

#[derive(Error, Debug)]
pub enum CliError {
    #[error("Readline error: {0}")]
    Readline(#[from] rustyline::error::ReadlineError),

    #[error("Core error: {0}")]
    Core(#[from] kensho::CoreError),

    #[error(transparent)]
    Kensho(#[from] kensho::KenshoError),

    #[error(transparent)]
    Agent(#[from] kensho::agent::AgentError),

    #[error(transparent)]
    Customer(#[from] kensho::CustomerError),

    #[error("Invalid input: {0}")]
    InvalidInput(String),
}
