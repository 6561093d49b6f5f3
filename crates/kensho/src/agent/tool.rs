//! Extension points an agent calls back into: tools and dynamic prompts

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde_json::Value;

use super::model::ToolDefinition;
use super::{AgentError, Result};

/// Callback the model may invoke during a run
#[async_trait]
pub trait Tool<D: Send + Sync>: Send + Sync {
    fn name(&self) -> &str;

    fn description(&self) -> &str;

    /// JSON schema of the arguments object
    fn parameters_schema(&self) -> Value;

    async fn call(&self, deps: &D, arguments: Value) -> Result<Value>;

    fn definition(&self) -> ToolDefinition {
        ToolDefinition {
            name: self.name().to_string(),
            description: self.description().to_string(),
            parameters: self.parameters_schema(),
        }
    }
}

/// System prompt computed from the run's dependencies
#[async_trait]
pub trait SystemPrompt<D: Send + Sync>: Send + Sync {
    async fn render(&self, deps: &D) -> Result<String>;
}

/// Decode tool arguments into their typed form
pub fn parse_arguments<A: DeserializeOwned>(tool: &str, arguments: Value) -> Result<A> {
    serde_json::from_value(arguments).map_err(|e| AgentError::InvalidToolArguments {
        tool: tool.to_string(),
        message: e.to_string(),
    })
}
