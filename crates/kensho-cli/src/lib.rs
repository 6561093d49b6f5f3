//! Kensho CLI library

pub mod commands;
pub mod error;

use kensho::KenshoConfig;
use kensho::agent::{ChatModel, OpenAiChatModel};
use kensho::customer::CustomerService;
use std::sync::Arc;

use error::CliError;

/// Settings and shared services for one CLI invocation
pub struct CommandContext {
    pub config: KenshoConfig,
}

impl CommandContext {
    pub fn new(config: KenshoConfig) -> Self {
        Self { config }
    }

    pub fn customers(&self) -> CustomerService {
        CustomerService::sample(self.config.sample_data)
    }

    pub fn chat_model(&self) -> Result<Arc<dyn ChatModel>, CliError> {
        let model = OpenAiChatModel::from_config(&self.config)?;
        Ok(Arc::new(model))
    }
}
