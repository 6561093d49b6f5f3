//! Support command handler: interactive bank support session

use kensho::agent::{SupportDependencies, SupportProcessor, support_agent};
use kensho::customer::{CustomerId, CustomerService};
use kensho::prelude::*;
use rustyline::DefaultEditor;
use rustyline::error::ReadlineError;
use tracing::debug;

use crate::CommandContext;
use crate::error::CliError;

const CUSTOMER_PROMPT: &str =
    "お客様番号を入力してください（例: 123）。終了するには '0' を入力してください: ";

/// One line typed at the customer-number prompt
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CustomerInput {
    Quit,
    Id(CustomerId),
    Invalid,
}

pub fn parse_customer_input(line: &str) -> CustomerInput {
    match line.trim().parse::<u64>() {
        Ok(0) => CustomerInput::Quit,
        Ok(id) => CustomerInput::Id(CustomerId::new(id)),
        Err(_) => CustomerInput::Invalid,
    }
}

/// Ask until a known customer number is entered. `None` means quit.
async fn prompt_customer_id(
    rl: &mut DefaultEditor,
    customers: &CustomerService,
) -> Result<Option<CustomerId>, CliError> {
    loop {
        let line = match rl.readline(CUSTOMER_PROMPT) {
            Ok(line) => line,
            Err(ReadlineError::Interrupted | ReadlineError::Eof) => return Ok(None),
            Err(err) => return Err(err.into()),
        };

        match parse_customer_input(&line) {
            CustomerInput::Quit => return Ok(None),
            CustomerInput::Invalid => println!("無効な入力です。数字を入力してください。"),
            CustomerInput::Id(id) => {
                if customers.contains(id).await? {
                    return Ok(Some(id));
                }
                println!("無効なお客様番号です。もう一度入力してください。");
            }
        }
    }
}

pub async fn run_support(ctx: &CommandContext, customer_id: Option<u64>) -> Result<(), CliError> {
    let customers = ctx.customers();
    let mut rl = DefaultEditor::new()?;

    let customer_id = match customer_id {
        Some(raw) => {
            let id = CustomerId::new(raw);
            if !customers.contains(id).await? {
                return Err(CliError::InvalidInput(format!("Unknown customer number: {}", id)));
            }
            id
        }
        None => match prompt_customer_id(&mut rl, &customers).await? {
            Some(id) => id,
            None => {
                println!("プログラムを終了します。");
                return Ok(());
            }
        },
    };
    debug!(customer_id = %customer_id, "starting support session");

    let deps = SupportDependencies {
        customer_id,
        customers,
    };
    let agent = support_agent(ctx.chat_model()?, &ctx.config)?;
    let app = KenshoApp::builder("kensho-support")
        .agent_mode()
        .processor(SupportProcessor::new(agent, deps))
        .build()?;

    println!("{}", app.banner());
    println!("サポートエージェントに質問してください。終了するには 'exit' を入力してください。");

    loop {
        let readline = rl.readline("質問: ");
        match readline {
            Ok(line) => {
                let input = line.trim();

                if input.eq_ignore_ascii_case("exit") {
                    println!("サポートを終了します。");
                    break;
                }

                if input.is_empty() {
                    continue;
                }

                rl.add_history_entry(&line).ok();

                match app.process(Request::simple(input)).await {
                    Ok(response) => {
                        println!("エージェントの応答:");
                        println!("{}", response.message);
                    }
                    Err(e) => println!("エラーが発生しました: {}", e),
                }
            }
            Err(ReadlineError::Interrupted) => {
                println!("\nCtrl-C received. Use 'exit' to quit.");
                continue;
            }
            Err(ReadlineError::Eof) => {
                println!("\nサポートを終了します。");
                break;
            }
            Err(err) => {
                return Err(err.into());
            }
        }
    }

    Ok(())
}
