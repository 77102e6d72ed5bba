use async_trait::async_trait;
use dbot_core::{Bot, Handler, HandlerResponse, Message, Result};
use std::sync::Arc;
use tracing::{info, instrument};

use super::command_name;
use crate::presenter::GREETING;

/// Replies to /start and /help with the greeting; ignores everything else.
pub struct StartHandler {
    bot: Arc<dyn Bot>,
}

impl StartHandler {
    pub fn new(bot: Arc<dyn Bot>) -> Self {
        Self { bot }
    }
}

#[async_trait]
impl Handler for StartHandler {
    #[instrument(skip(self, message))]
    async fn handle(&self, message: &Message) -> Result<HandlerResponse> {
        match command_name(&message.content) {
            Some("start") | Some("help") => {
                info!(user_id = message.user.id, "Sending greeting");
                self.bot.reply_to(message, GREETING).await?;
                Ok(HandlerResponse::Reply(GREETING.to_string()))
            }
            _ => Ok(HandlerResponse::Ignore),
        }
    }
}
