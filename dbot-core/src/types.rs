//! Core types: user, chat, message, handler response, Handler and Middleware traits.

use async_trait::async_trait;
use chrono::{DateTime, Utc};

/// User identity (id, username, names).
#[derive(Debug, Clone)]
pub struct User {
    pub id: i64,
    pub username: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
}

/// Chat (channel or private) identity.
#[derive(Debug, Clone)]
pub struct Chat {
    pub id: i64,
    pub chat_type: String,
}

/// A single inbound message with user, chat and text content (empty for non-text messages).
#[derive(Debug, Clone)]
pub struct Message {
    pub id: String,
    pub user: User,
    pub chat: Chat,
    pub content: String,
    pub message_type: String,
    /// When Telegram received the message.
    pub created_at: DateTime<Utc>,
}

/// Handler result for the chain. `Reply(text)` carries the delivered text so middleware can see it in `after()`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HandlerResponse {
    /// Pass to next handler.
    Continue,
    /// Stop the chain; no response body.
    Stop,
    /// Skip this handler, try next.
    Ignore,
    /// Stop the chain and attach the text that was sent.
    Reply(String),
}

/// Converts a transport-specific user type to core [`User`].
pub trait ToCoreUser: Send + Sync {
    fn to_core(&self) -> User;
}

/// Converts a transport-specific message type to core [`Message`].
pub trait ToCoreMessage: Send + Sync {
    fn to_core(&self) -> Message;
}

/// Message handler. The chain calls `handle` in order until one returns Stop or Reply.
#[async_trait]
pub trait Handler: Send + Sync {
    /// Processes the message. Return Stop or Reply to end the handle phase. Default: Continue.
    async fn handle(&self, _message: &Message) -> crate::error::Result<HandlerResponse> {
        Ok(HandlerResponse::Continue)
    }
}

/// Wraps the handler phase: `before` runs in order (false stops the chain), `after` in reverse with the final response.
#[async_trait]
pub trait Middleware: Send + Sync {
    async fn before(&self, message: &Message) -> crate::error::Result<bool>;
    async fn after(
        &self,
        message: &Message,
        response: &HandlerResponse,
    ) -> crate::error::Result<()>;
}
