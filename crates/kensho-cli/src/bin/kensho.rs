//! CLI for Kensho

use clap::Parser;
use kensho::KenshoConfig;
use kensho_cli::{CommandContext, commands, commands::validate::schema_names, error::CliError};
use std::path::PathBuf;
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "kensho")]
#[command(about = "Bank support agents and validation rules", long_about = None)]
struct Cli {
    /// Config file path (JSON)
    #[arg(short, long, env = "KENSHO_CONFIG", global = true)]
    config_file: Option<PathBuf>,

    /// Log level (error, warn, info, debug, trace)
    #[arg(short, long, env = "KENSHO_LOG_LEVEL", default_value = "warn", global = true)]
    log_level: String,

    /// Chat model name
    #[arg(short, long, global = true)]
    model: Option<String>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(clap::Subcommand)]
enum Commands {
    /// Interactive bank support session
    Support {
        /// Customer number (prompted for when omitted)
        #[arg(long, short = 'i')]
        customer_id: Option<u64>,
    },
    /// Ask the support agent the two sample questions as customer 123
    Demo,
    /// Ask a question and get a one-sentence answer
    Ask {
        /// Question (defaults to the Hello, World question)
        message: Option<String>,
    },
    /// Validate JSON input against a user schema
    Validate {
        /// Schema name
        schema: String,
        /// JSON input
        input: String,
    },
    /// List the customer records
    Customers,
}

fn init_tracing(level: &str) {
    let filter = format!("kensho={},kensho_cli={}", level, level);
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| filter.into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn load_config(cli: &Cli) -> KenshoConfig {
    let config = match &cli.config_file {
        Some(path) => match KenshoConfig::load_from_file(path) {
            Ok(cfg) => {
                info!("Configuration loaded from: {}", path.display());
                cfg
            }
            Err(e) => {
                warn!("{}. Using default configuration.", e);
                KenshoConfig::default()
            }
        },
        None => KenshoConfig::default(),
    };

    let mut config = config.apply_env();
    config.log_level = cli.log_level.clone();
    if let Some(model) = &cli.model {
        config.model = model.clone();
    }
    config
}

#[tokio::main]
async fn main() -> Result<(), CliError> {
    dotenv::dotenv().ok();
    let cli = Cli::parse();
    init_tracing(&cli.log_level);

    let ctx = CommandContext::new(load_config(&cli));

    match cli.command {
        Some(Commands::Support { customer_id }) => {
            commands::run_support(&ctx, customer_id).await?;
        }
        Some(Commands::Demo) => {
            commands::run_demo(&ctx).await?;
        }
        Some(Commands::Ask { message }) => {
            commands::run_ask(&ctx, message).await?;
        }
        Some(Commands::Validate { schema, input }) => {
            if !commands::run_validate(&schema, &input)? {
                std::process::exit(1);
            }
        }
        Some(Commands::Customers) => {
            commands::run_customers(&ctx).await?;
        }
        None => {
            println!("Kensho: bank support agents and validation rules");
            println!("Schemas: {}", schema_names());
            println!("Use --help for more information");
        }
    }

    Ok(())
}
