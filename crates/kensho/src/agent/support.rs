//! Bank support agent
//!
//! The customer store is injected as the run's dependency. The customer's
//! name is added to the system prompt on every run and the balance is
//! exposed as a tool.

use async_trait::async_trait;
use kensho_core::{
    CoreError, Processor, ProcessorMetadata, Request, Response, Result as CoreResult,
};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use serde_json::{Value, json};
use std::fmt;
use std::sync::Arc;

use super::model::ChatModel;
use super::runner::Agent;
use super::tool::{SystemPrompt, Tool, parse_arguments};
use super::Result;
use crate::config::KenshoConfig;
use crate::customer::{CustomerId, CustomerService};
use crate::validation::{self, Fields, Model};

pub const SUPPORT_PROMPT: &str = "あなたは私たちの銀行のサポートエージェントです。\
お客様にサポートを提供し、問い合わせのリスクレベルを判断してください。";

/// Dependencies of a support run
#[derive(Clone)]
pub struct SupportDependencies {
    pub customer_id: CustomerId,
    pub customers: CustomerService,
}

/// Structured answer of the support agent
#[derive(Debug, Clone, PartialEq, Serialize, JsonSchema)]
pub struct SupportResult {
    /// お客様に提供されるアドバイス
    pub support_advice: String,
    /// お客様のカードをブロックするかどうか
    pub block_card: bool,
    /// 問い合わせのリスクレベル
    #[schemars(range(min = 0, max = 10))]
    pub risk: u8,
}

impl SupportResult {
    pub const MAX_RISK: i64 = 10;
}

impl Model for SupportResult {
    fn from_value_at(value: &Value, loc: &str) -> validation::Result<Self> {
        let fields = Fields::of(value, loc)?;
        let support_advice = fields.required("support_advice")?;
        let block_card = fields.required("block_card")?;
        let risk: i64 = fields.required("risk")?;
        let risk_loc = fields.loc("risk");
        validation::field::check_range(risk, 0, Self::MAX_RISK, &risk_loc)?;
        let risk = u8::try_from(risk).map_err(|e| {
            validation::ValidationError::new(risk_loc, validation::ValidationRule::Range, e.to_string())
        })?;

        Ok(Self {
            support_advice,
            block_card,
            risk,
        })
    }
}

/// Renders as `support_advice='…' block_card=False risk=1`
impl fmt::Display for SupportResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "support_advice='{}' block_card={} risk={}",
            self.support_advice,
            if self.block_card { "True" } else { "False" },
            self.risk
        )
    }
}

/// Adds the customer's name to the system prompt
pub struct CustomerNamePrompt;

#[async_trait]
impl SystemPrompt<SupportDependencies> for CustomerNamePrompt {
    async fn render(&self, deps: &SupportDependencies) -> Result<String> {
        let name = deps.customers.customer_name(deps.customer_id).await?;
        Ok(format!("お客様の名前は「{}」です。", name))
    }
}

#[derive(Debug, Deserialize, JsonSchema)]
struct BalanceArgs {
    include_pending: bool,
}

/// Returns the current account balance of the run's customer
pub struct CustomerBalanceTool;

#[async_trait]
impl Tool<SupportDependencies> for CustomerBalanceTool {
    fn name(&self) -> &str {
        "customer_balance"
    }

    fn description(&self) -> &str {
        "お客様の現在の口座残高を返します。"
    }

    fn parameters_schema(&self) -> Value {
        serde_json::to_value(schemars::schema_for!(BalanceArgs))
            .unwrap_or_else(|_| json!({"type": "object"}))
    }

    async fn call(&self, deps: &SupportDependencies, arguments: Value) -> Result<Value> {
        let args: BalanceArgs = parse_arguments(self.name(), arguments)?;
        let balance = deps
            .customers
            .customer_balance(deps.customer_id, args.include_pending)
            .await?;
        Ok(json!(balance))
    }
}

/// Support agent with the bank prompt, the name prompt and the balance tool
pub fn support_agent(
    model: Arc<dyn ChatModel>,
    config: &KenshoConfig,
) -> Result<Agent<SupportDependencies>> {
    Agent::builder(model)
        .model_name(config.model.clone())
        .max_turns(config.max_turns)
        .system_prompt(SUPPORT_PROMPT)
        .dynamic_prompt(CustomerNamePrompt)
        .tool(CustomerBalanceTool)
        .build()
}

/// Drives a support agent for one fixed customer
pub struct SupportProcessor {
    agent: Agent<SupportDependencies>,
    deps: SupportDependencies,
}

impl SupportProcessor {
    pub fn new(agent: Agent<SupportDependencies>, deps: SupportDependencies) -> Self {
        Self { agent, deps }
    }

    pub async fn ask(&self, question: &str) -> Result<SupportResult> {
        self.agent.run(question, &self.deps).await
    }
}

#[async_trait]
impl Processor for SupportProcessor {
    async fn process(&self, request: Request) -> CoreResult<Response> {
        let result = self.ask(&request.message).await?;
        let ext = serde_json::to_value(&result)
            .map_err(|e| CoreError::Processing(format!("Failed to serialize result: {}", e)))?;
        Ok(Response::structured(request.id, result.to_string(), ext))
    }

    fn metadata(&self) -> ProcessorMetadata {
        ProcessorMetadata {
            name: Some("support".to_string()),
            description: Some(format!("Bank support for customer {}", self.deps.customer_id)),
            capabilities: self.agent.tool_names(),
        }
    }
}
