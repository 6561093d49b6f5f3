//! Agent run loop
//!
//! One run sends the system prompts and the user prompt, executes any tool
//! calls the model asks for, and stops at the first reply without tool
//! calls. Structured replies are validated through [`Model`]; a rejected
//! reply is sent back to the model with the validation error until the
//! retry allowance is used up.

use schemars::JsonSchema;
use serde_json::{Value, json};
use std::sync::Arc;
use tracing::{debug, info, warn};

use super::model::{ChatModel, ChatRequest, Message, OutputSchema, ToolCall, ToolDefinition};
use super::tool::{SystemPrompt, Tool};
use super::{AgentError, Result};
use crate::validation::{Model, ValidationError};

pub const DEFAULT_MAX_TURNS: usize = 8;
pub const DEFAULT_OUTPUT_RETRIES: usize = 1;

pub struct Agent<D: Send + Sync> {
    model: Arc<dyn ChatModel>,
    model_name: String,
    system_prompt: Option<String>,
    dynamic_prompts: Vec<Box<dyn SystemPrompt<D>>>,
    tools: Vec<Box<dyn Tool<D>>>,
    max_turns: usize,
    output_retries: usize,
}

impl<D: Send + Sync> Agent<D> {
    pub fn builder(model: Arc<dyn ChatModel>) -> AgentBuilder<D> {
        AgentBuilder::new(model)
    }

    pub fn tool_names(&self) -> Vec<String> {
        self.tools.iter().map(|t| t.name().to_string()).collect()
    }

    /// Run with a free-form text answer
    pub async fn run_text(&self, prompt: &str, deps: &D) -> Result<String> {
        self.run_loop(prompt, deps, None, |content| Ok(content.to_string()))
            .await
    }

    /// Run with a structured answer of type `O`
    pub async fn run<O: Model + JsonSchema>(&self, prompt: &str, deps: &D) -> Result<O> {
        let schema = OutputSchema::of::<O>()?;
        self.run_loop(prompt, deps, Some(schema), O::from_json).await
    }

    async fn system_messages(&self, deps: &D) -> Result<Vec<Message>> {
        let mut messages = Vec::new();
        if let Some(prompt) = &self.system_prompt {
            messages.push(Message::system(prompt.clone()));
        }
        for prompt in &self.dynamic_prompts {
            messages.push(Message::system(prompt.render(deps).await?));
        }
        Ok(messages)
    }

    async fn run_loop<T, F>(
        &self,
        prompt: &str,
        deps: &D,
        output: Option<OutputSchema>,
        parse: F,
    ) -> Result<T>
    where
        F: Fn(&str) -> std::result::Result<T, ValidationError>,
    {
        let mut messages = self.system_messages(deps).await?;
        messages.push(Message::user(prompt));
        let tools: Vec<ToolDefinition> = self.tools.iter().map(|t| t.definition()).collect();
        let mut retries_left = self.output_retries;

        info!(
            model = %self.model_name,
            provider = self.model.provider_name(),
            structured = output.is_some(),
            "starting agent run"
        );

        for turn in 1..=self.max_turns {
            let request = ChatRequest {
                model: self.model_name.clone(),
                messages: messages.clone(),
                tools: tools.clone(),
                output: output.clone(),
            };
            let response = self.model.complete(request).await?;
            messages.push(response.to_message());

            if !response.tool_calls.is_empty() {
                for call in &response.tool_calls {
                    let result = self.call_tool(call, deps).await;
                    messages.push(Message::tool(call.id.clone(), result));
                }
                continue;
            }

            let content = response.content.ok_or(AgentError::EmptyResponse)?;
            match parse(&content) {
                Ok(value) => {
                    debug!(turn, "agent run finished");
                    return Ok(value);
                }
                Err(err) if retries_left > 0 => {
                    retries_left -= 1;
                    warn!(turn, error = %err, "model output rejected, asking for a fix");
                    messages.push(Message::user(format!(
                        "Validation failed: {}. Fix the errors and try again.",
                        err
                    )));
                }
                Err(err) => {
                    warn!(turn, error = %err, "model output rejected");
                    return Err(err.into());
                }
            }
        }

        Err(AgentError::MaxTurnsExceeded(self.max_turns))
    }

    /// Execute one tool call. Failures are reported back to the model as
    /// the tool result instead of aborting the run.
    async fn call_tool(&self, call: &ToolCall, deps: &D) -> String {
        let name = call.function.name.as_str();
        let Some(tool) = self.tools.iter().find(|t| t.name() == name) else {
            warn!(tool = name, "model called an unknown tool");
            return format!(
                "Unknown tool name: {}. Available tools: {}",
                name,
                self.tool_names().join(", ")
            );
        };

        let arguments: Value = if call.function.arguments.trim().is_empty() {
            json!({})
        } else {
            match serde_json::from_str(&call.function.arguments) {
                Ok(arguments) => arguments,
                Err(e) => return format!("Invalid JSON arguments for {}: {}", name, e),
            }
        };

        debug!(tool = name, %arguments, "calling tool");
        match tool.call(deps, arguments).await {
            Ok(value) => value.to_string(),
            Err(e) => {
                warn!(tool = name, error = %e, "tool call failed");
                e.to_string()
            }
        }
    }
}

/// Builder for [`Agent`]
pub struct AgentBuilder<D: Send + Sync> {
    model: Arc<dyn ChatModel>,
    model_name: String,
    system_prompt: Option<String>,
    dynamic_prompts: Vec<Box<dyn SystemPrompt<D>>>,
    tools: Vec<Box<dyn Tool<D>>>,
    max_turns: usize,
    output_retries: usize,
}

impl<D: Send + Sync> AgentBuilder<D> {
    pub fn new(model: Arc<dyn ChatModel>) -> Self {
        Self {
            model,
            model_name: crate::config::DEFAULT_MODEL.to_string(),
            system_prompt: None,
            dynamic_prompts: Vec::new(),
            tools: Vec::new(),
            max_turns: DEFAULT_MAX_TURNS,
            output_retries: DEFAULT_OUTPUT_RETRIES,
        }
    }

    pub fn model_name(mut self, name: impl Into<String>) -> Self {
        self.model_name = name.into();
        self
    }

    pub fn system_prompt(mut self, prompt: impl Into<String>) -> Self {
        self.system_prompt = Some(prompt.into());
        self
    }

    /// Add a prompt rendered from the dependencies on every run
    pub fn dynamic_prompt(mut self, prompt: impl SystemPrompt<D> + 'static) -> Self {
        self.dynamic_prompts.push(Box::new(prompt));
        self
    }

    pub fn tool(mut self, tool: impl Tool<D> + 'static) -> Self {
        self.tools.push(Box::new(tool));
        self
    }

    pub fn max_turns(mut self, max_turns: usize) -> Self {
        self.max_turns = max_turns;
        self
    }

    pub fn output_retries(mut self, retries: usize) -> Self {
        self.output_retries = retries;
        self
    }

    pub fn build(self) -> Result<Agent<D>> {
        if self.max_turns == 0 {
            return Err(AgentError::Config("max_turns must be at least 1".to_string()));
        }
        let mut names: Vec<&str> = self.tools.iter().map(|t| t.name()).collect();
        names.sort_unstable();
        if let Some(pair) = names.windows(2).find(|pair| pair[0] == pair[1]) {
            return Err(AgentError::Config(format!("duplicate tool name: {}", pair[0])));
        }

        Ok(Agent {
            model: self.model,
            model_name: self.model_name,
            system_prompt: self.system_prompt,
            dynamic_prompts: self.dynamic_prompts,
            tools: self.tools,
            max_turns: self.max_turns,
            output_retries: self.output_retries,
        })
    }
}
