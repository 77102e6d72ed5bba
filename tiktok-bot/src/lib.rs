//! # tiktok-bot
//!
//! Binary support: CLI parsing, config loading, and startup wiring for the lookup bot.

pub mod app;
pub mod cli;
pub mod config;

pub use app::{build_handler_chain, run_bot, run_lookup};
pub use cli::{Cli, Commands};
pub use config::BotConfig;
