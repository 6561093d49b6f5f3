//! Customers command handler

use crate::CommandContext;
use crate::error::CliError;

pub async fn run_customers(ctx: &CommandContext) -> Result<(), CliError> {
    let customers = ctx.customers().list_customers().await?;

    println!("📇 {} customer(s) ({} data set)", customers.len(), ctx.config.sample_data);
    for customer in customers {
        println!("  {:>5}  {}  {}", customer.id.get(), customer.name, customer.balance);
    }

    Ok(())
}
