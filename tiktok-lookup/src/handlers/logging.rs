use async_trait::async_trait;
use dbot_core::{HandlerResponse, Message, Middleware, Result};
use tracing::{debug, info, instrument};

/// Logs each message in before() and the response in after(); always continues.
pub struct LoggingMiddleware;

#[async_trait]
impl Middleware for LoggingMiddleware {
    #[instrument(skip(self, message))]
    async fn before(&self, message: &Message) -> Result<bool> {
        info!(
            user_id = message.user.id,
            username = %message.user.username.as_deref().unwrap_or("unknown"),
            chat_id = message.chat.id,
            message_content = %message.content,
            sent_at = %message.created_at,
            "Received message"
        );
        Ok(true)
    }

    #[instrument(skip(self, message, response))]
    async fn after(&self, message: &Message, response: &HandlerResponse) -> Result<()> {
        match response {
            HandlerResponse::Reply(text) => debug!(
                message_id = %message.id,
                reply_len = text.len(),
                "Replied"
            ),
            other => debug!(message_id = %message.id, response = ?other, "Processed message"),
        }
        Ok(())
    }
}
