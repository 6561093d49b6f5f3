//! LLM agents with typed dependencies, tools and validated output

pub mod concise;
pub mod error;
pub mod model;
pub mod openai;
pub mod runner;
pub mod support;
pub mod tool;

pub use concise::{CONCISE_PROMPT, ConciseProcessor, concise_agent};
pub use error::{AgentError, Result};
pub use model::{
    ChatModel, ChatRequest, ChatResponse, FunctionCall, Message, OutputSchema, ToolCall,
    ToolDefinition,
};
pub use openai::OpenAiChatModel;
pub use runner::{Agent, AgentBuilder};
pub use support::{
    CustomerBalanceTool, CustomerNamePrompt, SUPPORT_PROMPT, SupportDependencies,
    SupportProcessor, SupportResult, support_agent,
};
pub use tool::{SystemPrompt, Tool};
