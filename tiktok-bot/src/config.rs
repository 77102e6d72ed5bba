//! Application config: Telegram connectivity plus lookup settings. Built once in main and passed down.

use anyhow::Result;
use dbot_telegram::TelegramConfig;
use tiktok_lookup::LookupConfig;

#[derive(Debug, Clone)]
pub struct BotConfig {
    pub telegram: TelegramConfig,
    pub lookup: LookupConfig,
}

impl BotConfig {
    /// Loads both sections from env. `token` overrides BOT_TOKEN; a missing token is an error.
    pub fn load(token: Option<String>) -> Result<Self> {
        let telegram = TelegramConfig::from_env(token)?;
        let lookup = LookupConfig::from_env()?;
        Ok(Self { telegram, lookup })
    }

    pub fn validate(&self) -> Result<()> {
        self.telegram.validate()?;
        self.lookup.validate()
    }
}
