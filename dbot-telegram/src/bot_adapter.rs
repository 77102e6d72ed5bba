//! Wraps teloxide::Bot and implements [`dbot_core::Bot`]. Production code talks to Telegram; tests substitute another Bot impl.

use async_trait::async_trait;
use dbot_core::{parse_message_id, Bot as CoreBot, Chat, DbotError, Message, Result};
use teloxide::{
    prelude::*,
    types::{ChatId, InputFile, MessageId, ParseMode},
};
use tracing::debug;

/// Thin wrapper around teloxide::Bot that implements dbot-core's Bot trait.
pub struct TelegramBotAdapter {
    bot: teloxide::Bot,
}

fn bot_error(e: impl std::fmt::Display) -> DbotError {
    DbotError::Bot(e.to_string())
}

impl TelegramBotAdapter {
    /// Creates an adapter from an existing teloxide Bot.
    pub fn new(bot: teloxide::Bot) -> Self {
        Self { bot }
    }
}

#[async_trait]
impl CoreBot for TelegramBotAdapter {
    async fn send_message(&self, chat: &Chat, text: &str) -> Result<()> {
        self.bot
            .send_message(ChatId(chat.id), text.to_string())
            .await
            .map_err(bot_error)?;
        Ok(())
    }

    async fn send_markdown(&self, chat: &Chat, text: &str) -> Result<()> {
        self.bot
            .send_message(ChatId(chat.id), text.to_string())
            .parse_mode(ParseMode::MarkdownV2)
            .await
            .map_err(bot_error)?;
        Ok(())
    }

    async fn reply_to(&self, message: &Message, text: &str) -> Result<()> {
        self.send_message(&message.chat, text).await
    }

    async fn send_message_and_return_id(&self, chat: &Chat, text: &str) -> Result<String> {
        let sent = self
            .bot
            .send_message(ChatId(chat.id), text.to_string())
            .await
            .map_err(bot_error)?;
        Ok(sent.id.to_string())
    }

    async fn edit_message_markdown(
        &self,
        chat: &Chat,
        message_id: &str,
        text: &str,
    ) -> Result<()> {
        let id = parse_message_id(message_id)?;
        self.bot
            .edit_message_text(ChatId(chat.id), MessageId(id), text)
            .parse_mode(ParseMode::MarkdownV2)
            .await
            .map_err(bot_error)?;
        Ok(())
    }

    async fn send_photo(&self, chat: &Chat, url: &str) -> Result<()> {
        let url = reqwest::Url::parse(url)
            .map_err(|e| DbotError::Bot(format!("Invalid photo url {}: {}", url, e)))?;
        debug!(chat_id = chat.id, url = %url, "Sending photo");
        self.bot
            .send_photo(ChatId(chat.id), InputFile::url(url))
            .await
            .map_err(bot_error)?;
        Ok(())
    }
}
