use async_trait::async_trait;
use kensho::agent::{
    AgentError, ChatModel, ChatRequest, ChatResponse, Message, SUPPORT_PROMPT,
    SupportDependencies, SupportProcessor, SupportResult, ToolCall, concise_agent, support_agent,
};
use kensho::customer::{CustomerId, CustomerService, SampleData};
use kensho::prelude::*;
use kensho::{CoreError, KenshoConfig, ValidationRule};
use serde_json::json;
use std::sync::{Arc, Mutex};

/// Chat model double that replays a fixed script
struct ScriptedModel {
    responses: Mutex<Vec<ChatResponse>>,
    requests: Mutex<Vec<ChatRequest>>,
}

impl ScriptedModel {
    fn new(mut responses: Vec<ChatResponse>) -> Arc<Self> {
        responses.reverse();
        Arc::new(Self {
            responses: Mutex::new(responses),
            requests: Mutex::new(Vec::new()),
        })
    }

    fn requests(&self) -> Vec<ChatRequest> {
        self.requests.lock().unwrap().clone()
    }
}

#[async_trait]
impl ChatModel for ScriptedModel {
    async fn complete(&self, request: ChatRequest) -> kensho::agent::Result<ChatResponse> {
        self.requests.lock().unwrap().push(request);
        self.responses
            .lock()
            .unwrap()
            .pop()
            .ok_or_else(|| AgentError::Provider("script exhausted".to_string()))
    }

    fn provider_name(&self) -> &'static str {
        "scripted"
    }
}

fn deps(id: u64) -> SupportDependencies {
    SupportDependencies {
        customer_id: CustomerId::new(id),
        customers: CustomerService::sample(SampleData::Extended),
    }
}

fn answer(advice: &str, block_card: bool, risk: i64) -> ChatResponse {
    ChatResponse::text(
        json!({"support_advice": advice, "block_card": block_card, "risk": risk}).to_string(),
    )
}

#[tokio::test]
async fn test_balance_question_uses_tool() {
    let model = ScriptedModel::new(vec![
        ChatResponse::tool_calls(vec![ToolCall::new(
            "call_1",
            "customer_balance",
            &json!({"include_pending": true}),
        )]),
        answer("こんにちは、ジョン様。現在の口座残高は$123.45です。", false, 1),
    ]);
    let agent = support_agent(model.clone(), &KenshoConfig::default()).unwrap();

    let result: SupportResult = agent.run("私の口座残高は？", &deps(123)).await.unwrap();
    assert!(!result.block_card);
    assert_eq!(result.risk, 1);

    let requests = model.requests();
    assert_eq!(requests.len(), 2);

    let first = &requests[0];
    assert_eq!(first.model, "gpt-4o");
    assert_eq!(first.messages[0], Message::system(SUPPORT_PROMPT));
    assert_eq!(first.messages[1], Message::system("お客様の名前は「ジョン」です。"));
    assert_eq!(first.messages[2], Message::user("私の口座残高は？"));
    assert_eq!(first.tools[0].name, "customer_balance");
    assert_eq!(first.output.as_ref().unwrap().name, "SupportResult");

    assert_eq!(requests[1].messages[4], Message::tool("call_1", "123.45"));
}

#[tokio::test]
async fn test_lost_card_blocks() {
    let model = ScriptedModel::new(vec![answer(
        "申し訳ございません、ジョン様。カードを一時的にブロックしました。",
        true,
        8,
    )]);
    let agent = support_agent(model, &KenshoConfig::default()).unwrap();
    let processor = SupportProcessor::new(agent, deps(123));
    let app = KenshoApp::builder("support")
        .version("1.0.0")
        .agent_mode()
        .processor(processor)
        .build()
        .unwrap();
    assert_eq!(
        app.banner(),
        "support 1.0.0 [agent] support: Bank support for customer 123 (tools: customer_balance)"
    );

    let response = app.process(Request::simple("カードを失くしました！")).await.unwrap();
    assert!(response.message.ends_with("block_card=True risk=8"));
    assert_eq!(response.ext().unwrap()["block_card"], json!(true));
    assert_eq!(response.ext().unwrap()["risk"], json!(8));
}

#[tokio::test]
async fn test_out_of_range_risk_is_retried_once() {
    let model = ScriptedModel::new(vec![answer("危険", true, 15), answer("危険", true, 10)]);
    let agent = support_agent(model.clone(), &KenshoConfig::default()).unwrap();

    let result: SupportResult = agent.run("詐欺です", &deps(456)).await.unwrap();
    assert_eq!(result.risk, 10);

    let retry = &model.requests()[1];
    match retry.messages.last().unwrap() {
        Message::User { content } => assert!(content.starts_with("Validation failed")),
        other => panic!("unexpected message: {:?}", other),
    }
}

#[tokio::test]
async fn test_invalid_output_rejected_after_retries() {
    let model = ScriptedModel::new(vec![answer("x", false, 11), answer("x", false, -1)]);
    let agent = support_agent(model, &KenshoConfig::default()).unwrap();

    let err = agent.run::<SupportResult>("?", &deps(456)).await.unwrap_err();
    match err {
        AgentError::Validation(e) => {
            assert_eq!(e.loc, "risk");
            assert_eq!(e.rule, ValidationRule::Range);
        }
        other => panic!("unexpected error: {:?}", other),
    }
}

#[tokio::test]
async fn test_unknown_customer_fails_before_calling_model() {
    let model = ScriptedModel::new(vec![]);
    let agent = support_agent(model.clone(), &KenshoConfig::default()).unwrap();
    let processor = SupportProcessor::new(agent, deps(1));

    let err = processor.process(Request::simple("残高は？")).await.unwrap_err();
    assert!(matches!(err, CoreError::InvalidRequest(ref m) if m == "Customer with ID 1 not found."));
    assert!(model.requests().is_empty());
}

#[tokio::test]
async fn test_concise_agent_returns_text() {
    let model = ScriptedModel::new(vec![ChatResponse::text(
        "「Hello, World」の最初の使用例は、1974年のC言語に関する教科書です。",
    )]);
    let agent = concise_agent(model.clone(), &KenshoConfig::default()).unwrap();

    let answer = agent
        .run_text("「Hello, World」はどこから来た言葉ですか？", &())
        .await
        .unwrap();
    assert!(answer.contains("1974年"));
    assert!(model.requests()[0].tools.is_empty());
}
