//! Message → lookup → report.
//!
//! Flow per message: validate the handle, send the placeholder, fetch, render, deliver the avatar
//! (best effort), then edit the placeholder into the report.

use async_trait::async_trait;
use dbot_core::{Bot, Chat, Handler, HandlerResponse, Message, Result};
use std::sync::Arc;
use tracing::{debug, info, instrument, warn};

use super::command_name;
use crate::error::outcome_kind;
use crate::fetcher::ProfileSource;
use crate::presenter::{Presenter, SEARCHING_PLACEHOLDER};
use crate::request::LookupRequest;

/// Treats every non-command text message as a TikTok handle.
pub struct LookupHandler {
    bot: Arc<dyn Bot>,
    source: Arc<dyn ProfileSource>,
    presenter: Presenter,
    log_image_failures: bool,
}

impl LookupHandler {
    /// `presenter` should use MarkdownV2; the report is delivered with Markdown parse mode.
    pub fn new(bot: Arc<dyn Bot>, source: Arc<dyn ProfileSource>, presenter: Presenter) -> Self {
        Self {
            bot,
            source,
            presenter,
            log_image_failures: true,
        }
    }

    /// When false, failed avatar deliveries are logged at debug instead of warn.
    pub fn with_image_failure_logging(mut self, enabled: bool) -> Self {
        self.log_image_failures = enabled;
        self
    }

    /// Sends the avatar; failure is logged and never stops the text report.
    async fn deliver_avatar(&self, chat: &Chat, url: &str) {
        if let Err(e) = self.bot.send_photo(chat, url).await {
            if self.log_image_failures {
                warn!(chat_id = chat.id, url = %url, error = %e, "Avatar delivery failed");
            } else {
                debug!(chat_id = chat.id, url = %url, error = %e, "Avatar delivery failed");
            }
        }
    }
}

#[async_trait]
impl Handler for LookupHandler {
    #[instrument(skip(self, message), fields(user_id = message.user.id, chat_id = message.chat.id))]
    async fn handle(&self, message: &Message) -> Result<HandlerResponse> {
        if message.message_type != "text" || command_name(&message.content).is_some() {
            return Ok(HandlerResponse::Ignore);
        }

        let request = match LookupRequest::parse(&message.content) {
            Ok(request) => request,
            Err(e) => {
                let text = self.presenter.render_error(&e);
                info!(outcome = e.kind(), "Rejected lookup input");
                self.bot.send_markdown(&message.chat, &text).await?;
                return Ok(HandlerResponse::Reply(text));
            }
        };

        let placeholder_id = self
            .bot
            .send_message_and_return_id(&message.chat, SEARCHING_PLACEHOLDER)
            .await?;

        let result = self.source.fetch(&request.username).await;
        let report = self.presenter.render(&result);
        info!(
            username = %request.username,
            outcome = outcome_kind(&result),
            has_avatar = report.image_url.is_some(),
            "Lookup rendered"
        );

        if let Some(url) = &report.image_url {
            self.deliver_avatar(&message.chat, url).await;
        }

        self.bot
            .edit_message_markdown(&message.chat, &placeholder_id, &report.text)
            .await?;

        Ok(HandlerResponse::Reply(report.text))
    }
}
