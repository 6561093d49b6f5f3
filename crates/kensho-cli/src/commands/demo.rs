//! Demo command handler: the two canned support questions

use kensho::agent::{SupportDependencies, SupportProcessor, support_agent};
use kensho::customer::CustomerId;

use crate::CommandContext;
use crate::error::CliError;

pub const DEMO_CUSTOMER: CustomerId = CustomerId::new(123);

pub const DEMO_QUESTIONS: [&str; 2] = ["私の口座残高は？", "カードを失くしました！"];

pub async fn run_demo(ctx: &CommandContext) -> Result<(), CliError> {
    let deps = SupportDependencies {
        customer_id: DEMO_CUSTOMER,
        customers: ctx.customers(),
    };
    let processor = SupportProcessor::new(support_agent(ctx.chat_model()?, &ctx.config)?, deps);

    for question in DEMO_QUESTIONS {
        println!("質問: {}", question);
        let result = processor.ask(question).await?;
        println!("{}\n", result);
    }

    Ok(())
}
