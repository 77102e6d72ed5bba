//! Startup wiring: config → tracing → teloxide bot → handler chain → REPL.

use std::sync::Arc;

use anyhow::Result;
use dbot_core::{init_tracing, Bot};
use dbot_telegram::{run_repl, TelegramBotAdapter};
use handler_chain::HandlerChain;
use tiktok_lookup::{
    LoggingMiddleware, LookupConfig, LookupHandler, Markup, Presenter, ProfileSource,
    StartHandler, TikwmClient,
};
use tracing::{info, instrument};

use crate::config::BotConfig;

/// Builds the chain (logging → /start → lookup) around the given bot.
pub fn build_handler_chain(lookup: &LookupConfig, bot: Arc<dyn Bot>) -> Result<HandlerChain> {
    let source: Arc<dyn ProfileSource> =
        Arc::new(TikwmClient::new(&lookup.api_base_url, lookup.timeout)?);
    let presenter = Presenter::new(Markup::MarkdownV2, lookup.time_zone);
    let lookup_handler = LookupHandler::new(bot.clone(), source, presenter)
        .with_image_failure_logging(lookup.log_image_failures);

    Ok(HandlerChain::new()
        .add_middleware(Arc::new(LoggingMiddleware))
        .add_handler(Arc::new(StartHandler::new(bot)))
        .add_handler(Arc::new(lookup_handler)))
}

/// Main entry for `run`: init logging, validate config, wire handlers, then poll until stopped.
#[instrument(skip(config))]
pub async fn run_bot(config: BotConfig) -> Result<()> {
    config.validate()?;
    init_tracing(&config.telegram.log_file)?;

    info!(
        api_base_url = %config.lookup.api_base_url,
        timeout_secs = config.lookup.timeout.as_secs(),
        time_zone = ?config.lookup.time_zone,
        log_file = %config.telegram.log_file,
        "Initializing bot"
    );

    let teloxide_bot = config.telegram.build_bot()?;
    let bot: Arc<dyn Bot> = Arc::new(TelegramBotAdapter::new(teloxide_bot.clone()));
    let handler_chain = build_handler_chain(&config.lookup, bot)?;

    info!("Bot started successfully");
    run_repl(teloxide_bot, handler_chain).await
}

/// Main entry for `lookup`: one fetch, plain-text report on stdout. Returns whether the lookup succeeded.
pub async fn run_lookup(username: &str, lookup: &LookupConfig) -> Result<bool> {
    tracing_subscriber::fmt()
        .with_env_filter(std::env::var("RUST_LOG").unwrap_or_else(|_| "warn".to_string()))
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();

    lookup.validate()?;
    let source = TikwmClient::new(&lookup.api_base_url, lookup.timeout)?;
    let presenter = Presenter::new(Markup::Plain, lookup.time_zone);

    let result = match tiktok_lookup::LookupRequest::parse(username) {
        Ok(request) => source.fetch(&request.username).await,
        Err(e) => Err(e),
    };
    let report = presenter.render(&result);

    println!("{}", report.text);
    if let Some(url) = &report.image_url {
        println!("\nAvatar: {}", url);
    }
    Ok(result.is_ok())
}
