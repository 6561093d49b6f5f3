//! Ask command handler

use kensho::agent::{ConciseProcessor, concise_agent};
use kensho::prelude::*;
use tracing::debug;

use crate::CommandContext;
use crate::error::CliError;

pub const DEFAULT_QUESTION: &str = "「Hello, World」はどこから来た言葉ですか？";

pub async fn run_ask(ctx: &CommandContext, message: Option<String>) -> Result<(), CliError> {
    let agent = concise_agent(ctx.chat_model()?, &ctx.config)?;
    let app = KenshoApp::builder("kensho-ask")
        .llm_mode()
        .processor(ConciseProcessor::new(agent))
        .build()?;

    debug!("{}", app.banner());

    let question = message.unwrap_or_else(|| DEFAULT_QUESTION.to_string());
    let response = app.process(Request::simple(question)).await?;
    println!("{}", response.message);

    Ok(())
}
