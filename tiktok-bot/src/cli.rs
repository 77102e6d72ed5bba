//! CLI parser.

use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "tiktok-bot")]
#[command(about = "Telegram bot that looks up TikTok profiles", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum Commands {
    /// Run the Telegram bot (config from env; --token overrides BOT_TOKEN).
    Run {
        #[arg(short, long)]
        token: Option<String>,
    },
    /// Look up one username and print the report to stdout (no Telegram token needed).
    Lookup {
        /// TikTok handle, with or without '@'.
        username: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_run_with_token() {
        let cli = Cli::try_parse_from(["tiktok-bot", "run", "--token", "abc"]).unwrap();
        assert_eq!(
            cli.command,
            Commands::Run {
                token: Some("abc".to_string())
            }
        );
    }

    #[test]
    fn test_parse_run_without_token() {
        let cli = Cli::try_parse_from(["tiktok-bot", "run"]).unwrap();
        assert_eq!(cli.command, Commands::Run { token: None });
    }

    #[test]
    fn test_parse_lookup() {
        let cli = Cli::try_parse_from(["tiktok-bot", "lookup", "@tiktok"]).unwrap();
        assert_eq!(
            cli.command,
            Commands::Lookup {
                username: "@tiktok".to_string()
            }
        );
    }

    #[test]
    fn test_lookup_requires_username() {
        assert!(Cli::try_parse_from(["tiktok-bot", "lookup"]).is_err());
    }
}
