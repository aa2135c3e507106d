//! Command-line harness for the stock ticker tools
//!
//! Reads provider keys from the environment, then either lists the tool
//! definitions or runs one tool and prints its JSON envelope on stdout.

use agent_tools::ToolRegistry;
use agent_utils::LogFormat;
use anyhow::Context;
use clap::{Parser, Subcommand};
use serde_json::Value;
use std::sync::Arc;
use stock_ticker_agent::{StockConfig, StockTicker};
use tracing::info;

#[derive(Parser, Debug)]
#[command(name = "ticker-cli")]
#[command(about = "Run the stock ticker tools from the command line", long_about = None)]
struct Args {
    /// Emit logs as JSON lines
    #[arg(long, global = true)]
    json_logs: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print every tool definition as JSON
    List,
    /// Run one tool and print its result envelope
    Call {
        /// Tool name, e.g. `ticker_price_change`
        tool: String,

        /// Tool arguments as a JSON object
        #[arg(short, long, default_value = "{}")]
        args: String,
    },
}

fn build_registry() -> anyhow::Result<ToolRegistry> {
    let config = StockConfig::from_env().context("invalid configuration")?;
    let service = StockTicker::new(Arc::new(config)).context("failed to build provider clients")?;
    Ok(stock_ticker_agent::registry(Arc::new(service)))
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let format = if args.json_logs {
        LogFormat::Json
    } else {
        LogFormat::Text
    };
    agent_utils::init_tracing_with(format, "info");

    let registry = build_registry()?;

    match args.command {
        Command::List => {
            let definitions = registry.definitions();
            println!("{}", serde_json::to_string_pretty(&definitions)?);
        }
        Command::Call { tool, args } => {
            let params: Value =
                serde_json::from_str(&args).context("--args must be a JSON object")?;
            info!(tool = %tool, "Running tool");

            let result = registry.execute(&tool, params).await?;
            println!("{}", serde_json::to_string_pretty(&result)?);
        }
    }

    Ok(())
}
