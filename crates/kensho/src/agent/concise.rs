//! One-sentence question answering without tools

use async_trait::async_trait;
use kensho_core::{Processor, ProcessorMetadata, Request, Response, Result as CoreResult};
use std::sync::Arc;

use super::Result;
use super::model::ChatModel;
use super::runner::Agent;
use crate::config::KenshoConfig;

pub const CONCISE_PROMPT: &str = "簡潔に答えてください。一文で返答してください";

pub fn concise_agent(model: Arc<dyn ChatModel>, config: &KenshoConfig) -> Result<Agent<()>> {
    Agent::builder(model)
        .model_name(config.model.clone())
        .max_turns(config.max_turns)
        .system_prompt(CONCISE_PROMPT)
        .build()
}

pub struct ConciseProcessor {
    agent: Agent<()>,
}

impl ConciseProcessor {
    pub fn new(agent: Agent<()>) -> Self {
        Self { agent }
    }
}

#[async_trait]
impl Processor for ConciseProcessor {
    async fn process(&self, request: Request) -> CoreResult<Response> {
        let answer = self.agent.run_text(&request.message, &()).await?;
        Ok(Response::simple(request.id, answer))
    }

    fn metadata(&self) -> ProcessorMetadata {
        ProcessorMetadata {
            name: Some("concise".to_string()),
            description: Some("Answers in a single sentence".to_string()),
            ..Default::default()
        }
    }
}
