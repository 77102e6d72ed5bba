//! Minimal framework config: token, Bot API URL, log path.
//! Loaded from BOT_TOKEN, TELEGRAM_API_URL (or TELOXIDE_API_URL) and LOG_FILE.

use anyhow::{bail, Result};
use std::env;
use tracing::info;

/// Default log file when LOG_FILE is unset.
pub const DEFAULT_LOG_FILE: &str = "logs/tiktok-bot.log";

/// Telegram connectivity and logging config.
#[derive(Debug, Clone)]
pub struct TelegramConfig {
    pub bot_token: String,
    pub telegram_api_url: Option<String>,
    pub log_file: String,
}

impl TelegramConfig {
    /// Loads from env. `token` overrides BOT_TOKEN; a missing or blank token is an error.
    pub fn from_env(token: Option<String>) -> Result<Self> {
        let bot_token = match token {
            Some(t) => t,
            None => env::var("BOT_TOKEN").unwrap_or_default(),
        };
        if bot_token.trim().is_empty() {
            bail!("BOT_TOKEN not set; export it or pass --token");
        }
        let telegram_api_url = env::var("TELEGRAM_API_URL")
            .or_else(|_| env::var("TELOXIDE_API_URL"))
            .ok()
            .filter(|s| !s.is_empty());
        let log_file = env::var("LOG_FILE").unwrap_or_else(|_| DEFAULT_LOG_FILE.to_string());
        Ok(Self {
            bot_token,
            telegram_api_url,
            log_file,
        })
    }

    /// Builds with the given token; everything else default.
    pub fn with_token(bot_token: String) -> Self {
        Self {
            bot_token,
            telegram_api_url: None,
            log_file: DEFAULT_LOG_FILE.to_string(),
        }
    }

    /// Rejects a Bot API URL that does not parse.
    pub fn validate(&self) -> Result<()> {
        if let Some(ref url_str) = self.telegram_api_url {
            if reqwest::Url::parse(url_str).is_err() {
                bail!(
                    "TELEGRAM_API_URL (or TELOXIDE_API_URL) is set but not a valid URL: {}",
                    url_str
                );
            }
        }
        Ok(())
    }

    /// Creates the teloxide Bot, pointed at `telegram_api_url` when set.
    pub fn build_bot(&self) -> Result<teloxide::Bot> {
        let bot = teloxide::Bot::new(self.bot_token.clone());
        match self.telegram_api_url {
            Some(ref url_str) => {
                let url = reqwest::Url::parse(url_str)?;
                info!(url = %url, "Using custom Telegram API URL");
                Ok(bot.set_api_url(url))
            }
            None => Ok(bot),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    fn clear_env() {
        env::remove_var("BOT_TOKEN");
        env::remove_var("TELEGRAM_API_URL");
        env::remove_var("TELOXIDE_API_URL");
        env::remove_var("LOG_FILE");
    }

    #[test]
    fn test_with_token() {
        let config = TelegramConfig::with_token("test_token".to_string());
        assert_eq!(config.bot_token, "test_token");
        assert!(config.telegram_api_url.is_none());
        assert_eq!(config.log_file, DEFAULT_LOG_FILE);
    }

    #[test]
    #[serial]
    fn test_from_env_missing_token_is_error() {
        clear_env();
        let err = TelegramConfig::from_env(None).unwrap_err();
        assert!(err.to_string().contains("BOT_TOKEN"));
    }

    #[test]
    #[serial]
    fn test_from_env_blank_token_is_error() {
        clear_env();
        env::set_var("BOT_TOKEN", "   ");
        assert!(TelegramConfig::from_env(None).is_err());
        clear_env();
    }

    #[test]
    #[serial]
    fn test_from_env_override_token_wins() {
        clear_env();
        env::set_var("BOT_TOKEN", "env_token");
        let config = TelegramConfig::from_env(Some("cli_token".to_string())).unwrap();
        assert_eq!(config.bot_token, "cli_token");
        clear_env();
    }

    #[test]
    #[serial]
    fn test_from_env_reads_optional_values() {
        clear_env();
        env::set_var("BOT_TOKEN", "env_token");
        env::set_var("TELOXIDE_API_URL", "http://127.0.0.1:8081");
        env::set_var("LOG_FILE", "/tmp/bot.log");
        let config = TelegramConfig::from_env(None).unwrap();
        assert_eq!(config.bot_token, "env_token");
        assert_eq!(
            config.telegram_api_url.as_deref(),
            Some("http://127.0.0.1:8081")
        );
        assert_eq!(config.log_file, "/tmp/bot.log");
        assert!(config.validate().is_ok());
        clear_env();
    }

    #[test]
    fn test_validate_invalid_api_url() {
        let mut config = TelegramConfig::with_token("t".to_string());
        config.telegram_api_url = Some("not a url".to_string());
        assert!(config.validate().is_err());
        assert!(config.build_bot().is_err());
    }
}
