//! tiktok-bot: run the Telegram bot, or look up a single profile from the terminal.

use std::process::ExitCode;

use anyhow::Result;
use clap::Parser;
use tiktok_bot::{run_bot, run_lookup, BotConfig, Cli, Commands};
use tiktok_lookup::LookupConfig;

#[tokio::main]
async fn main() -> Result<ExitCode> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    match cli.command {
        Commands::Run { token } => {
            let config = BotConfig::load(token)?;
            run_bot(config).await?;
            Ok(ExitCode::SUCCESS)
        }
        Commands::Lookup { username } => {
            let lookup = LookupConfig::from_env()?;
            if run_lookup(&username, &lookup).await? {
                Ok(ExitCode::SUCCESS)
            } else {
                Ok(ExitCode::FAILURE)
            }
        }
    }
}
