//! Bot abstraction for sending, editing, and photo delivery.
//!
//! [`Bot`] is transport-agnostic; dbot-telegram implements it via teloxide and tests substitute a mock.

use crate::error::{DbotError, Result};
use crate::types::{Chat, Message};
use async_trait::async_trait;

/// Abstraction for outbound messages. Implementations map to a transport (e.g. Telegram).
#[async_trait]
pub trait Bot: Send + Sync {
    /// Sends a plain text message to the given chat.
    async fn send_message(&self, chat: &Chat, text: &str) -> Result<()>;
    /// Sends a MarkdownV2 message; `text` must already be escaped.
    async fn send_markdown(&self, chat: &Chat, text: &str) -> Result<()>;
    /// Sends a reply to the given message (same chat).
    async fn reply_to(&self, message: &Message, text: &str) -> Result<()>;
    /// Sends a message and returns its id (for a later `edit_message_markdown`). `message_id` is transport-specific (e.g. Telegram numeric string).
    async fn send_message_and_return_id(&self, chat: &Chat, text: &str) -> Result<String>;
    /// Replaces the text of an already-sent message; `text` is MarkdownV2 and must already be escaped.
    async fn edit_message_markdown(&self, chat: &Chat, message_id: &str, text: &str)
        -> Result<()>;
    /// Sends a photo fetched by the transport from `url`.
    async fn send_photo(&self, chat: &Chat, url: &str) -> Result<()>;
}

/// Parses a message id string into an i32. Used by the edit operation.
pub fn parse_message_id(s: &str) -> Result<i32> {
    s.parse()
        .map_err(|_| DbotError::Bot(format!("Invalid message_id for edit: {}", s)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_message_id_valid() {
        assert_eq!(parse_message_id("123").unwrap(), 123);
        assert_eq!(parse_message_id("0").unwrap(), 0);
    }

    #[test]
    fn test_parse_message_id_invalid() {
        assert!(parse_message_id("").is_err());
        assert!(parse_message_id("abc").is_err());
        assert!(parse_message_id("12.3").is_err());
    }
}
