//! OpenAI-compatible Chat Completions client

use async_trait::async_trait;
use serde::Deserialize;
use serde_json::{Value, json};
use tracing::debug;

use super::model::{ChatModel, ChatRequest, ChatResponse, ToolCall};
use super::{AgentError, Result};
use crate::config::KenshoConfig;

pub const DEFAULT_BASE_URL: &str = "https://api.openai.com/v1";

pub struct OpenAiChatModel {
    client: reqwest::Client,
    base_url: String,
    api_key: String,
}

/// `choices[0].message` of a completion
#[derive(Debug, Deserialize)]
struct WireMessage {
    content: Option<String>,
    #[serde(default)]
    tool_calls: Vec<ToolCall>,
    refusal: Option<String>,
}

impl OpenAiChatModel {
    pub fn new(api_key: impl Into<String>, base_url: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
            api_key: api_key.into(),
        }
    }

    pub fn from_config(config: &KenshoConfig) -> Result<Self> {
        let api_key = config
            .api_key
            .clone()
            .filter(|key| !key.is_empty())
            .ok_or_else(|| AgentError::Config("OPENAI_API_KEY is not set".to_string()))?;
        Ok(Self::new(api_key, config.base_url.clone()))
    }

    fn endpoint(&self) -> String {
        format!("{}/chat/completions", self.base_url)
    }

    pub(crate) fn request_body(request: &ChatRequest) -> Result<Value> {
        let mut body = json!({
            "model": request.model,
            "messages": serde_json::to_value(&request.messages)?,
        });

        if !request.tools.is_empty() {
            let tools: Vec<Value> = request
                .tools
                .iter()
                .map(|tool| {
                    json!({
                        "type": "function",
                        "function": {
                            "name": tool.name,
                            "description": tool.description,
                            "parameters": tool.parameters,
                        }
                    })
                })
                .collect();
            body["tools"] = Value::Array(tools);
        }

        if let Some(output) = &request.output {
            body["response_format"] = json!({
                "type": "json_schema",
                "json_schema": {
                    "name": output.name,
                    "schema": output.schema,
                    "strict": false,
                }
            });
        }

        Ok(body)
    }

    pub(crate) fn parse_response(json: Value) -> Result<ChatResponse> {
        let message = json
            .pointer("/choices/0/message")
            .cloned()
            .ok_or_else(|| AgentError::Provider("response missing choices[0].message".to_string()))?;
        let message: WireMessage = serde_json::from_value(message)?;

        if let Some(refusal) = message.refusal {
            return Err(AgentError::Provider(format!("model refused: {}", refusal)));
        }

        Ok(ChatResponse {
            content: message.content,
            tool_calls: message.tool_calls,
        })
    }
}

#[async_trait]
impl ChatModel for OpenAiChatModel {
    async fn complete(&self, request: ChatRequest) -> Result<ChatResponse> {
        let body = Self::request_body(&request)?;
        debug!(
            model = %request.model,
            messages = request.messages.len(),
            tools = request.tools.len(),
            "sending chat completion"
        );

        let resp = self
            .client
            .post(self.endpoint())
            .bearer_auth(&self.api_key)
            .json(&body)
            .send()
            .await?;

        let status = resp.status();
        if !status.is_success() {
            let error_text = resp.text().await.unwrap_or_default();
            return Err(AgentError::Provider(format!(
                "OpenAI chat API error (status {}): {}",
                status, error_text
            )));
        }

        Self::parse_response(resp.json().await?)
    }

    fn provider_name(&self) -> &'static str {
        "openai"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::agent::model::{Message, OutputSchema, ToolDefinition};

    fn request() -> ChatRequest {
        ChatRequest {
            model: "gpt-4o".to_string(),
            messages: vec![Message::system("be brief"), Message::user("hi")],
            tools: vec![],
            output: None,
        }
    }

    #[test]
    fn test_plain_request_body() {
        let body = OpenAiChatModel::request_body(&request()).unwrap();
        assert_eq!(body["model"], "gpt-4o");
        assert_eq!(body["messages"][1], json!({"role": "user", "content": "hi"}));
        assert!(body.get("tools").is_none());
        assert!(body.get("response_format").is_none());
    }

    #[test]
    fn test_request_body_with_tools_and_schema() {
        let mut request = request();
        request.tools.push(ToolDefinition {
            name: "customer_balance".to_string(),
            description: "balance".to_string(),
            parameters: json!({"type": "object"}),
        });
        request.output = Some(OutputSchema {
            name: "SupportResult".to_string(),
            schema: json!({"type": "object"}),
        });

        let body = OpenAiChatModel::request_body(&request).unwrap();
        assert_eq!(body["tools"][0]["function"]["name"], "customer_balance");
        assert_eq!(body["response_format"]["type"], "json_schema");
        assert_eq!(body["response_format"]["json_schema"]["name"], "SupportResult");
    }

    #[test]
    fn test_parse_response() {
        let response = OpenAiChatModel::parse_response(json!({
            "choices": [{"message": {"role": "assistant", "content": "こんにちは"}}]
        }))
        .unwrap();
        assert_eq!(response, ChatResponse::text("こんにちは"));

        let refused = OpenAiChatModel::parse_response(json!({
            "choices": [{"message": {"role": "assistant", "content": null, "refusal": "no"}}]
        }));
        assert!(matches!(refused, Err(AgentError::Provider(_))));

        let missing = OpenAiChatModel::parse_response(json!({"choices": []}));
        assert!(matches!(missing, Err(AgentError::Provider(_))));
    }

    #[test]
    fn test_from_config_requires_api_key() {
        let config = KenshoConfig::default();
        assert!(matches!(
            OpenAiChatModel::from_config(&config),
            Err(AgentError::Config(_))
        ));

        let config = KenshoConfig {
            api_key: Some("sk-test".to_string()),
            base_url: "http://localhost:8080/v1/".to_string(),
            ..Default::default()
        };
        let model = OpenAiChatModel::from_config(&config).unwrap();
        assert_eq!(model.endpoint(), "http://localhost:8080/v1/chat/completions");
    }
}
