//! # Handler chain
//!
//! Runs middleware `before` in order, then handlers until one returns Stop or Reply, then middleware
//! `after` in reverse order. A handler error still runs the `after` phase (with `Stop`) before it is returned.

use dbot_core::{Handler, HandlerResponse, Message, Middleware, Result};
use std::sync::Arc;
use tracing::{debug, info, instrument, warn};

/// Chain of middleware and handlers for one bot.
#[derive(Clone, Default)]
pub struct HandlerChain {
    middleware: Vec<Arc<dyn Middleware>>,
    handlers: Vec<Arc<dyn Handler>>,
}

/// Short label for logs.
fn response_kind(response: &HandlerResponse) -> &'static str {
    match response {
        HandlerResponse::Continue => "Continue",
        HandlerResponse::Stop => "Stop",
        HandlerResponse::Ignore => "Ignore",
        HandlerResponse::Reply(_) => "Reply",
    }
}

impl HandlerChain {
    /// Creates an empty chain (no middleware, no handlers).
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a middleware (before runs in insertion order, after in reverse).
    pub fn add_middleware(mut self, middleware: Arc<dyn Middleware>) -> Self {
        self.middleware.push(middleware);
        self
    }

    /// Appends a handler (runs in order; first Stop/Reply ends the handler phase).
    pub fn add_handler(mut self, handler: Arc<dyn Handler>) -> Self {
        self.handlers.push(handler);
        self
    }

    /// Number of registered handlers.
    pub fn handler_count(&self) -> usize {
        self.handlers.len()
    }

    /// Runs the full chain for one message. Returns the first Stop or Reply, or Continue.
    #[instrument(skip(self, message), fields(user_id = message.user.id, chat_id = message.chat.id))]
    pub async fn handle(&self, message: &Message) -> Result<HandlerResponse> {
        debug!(message_id = %message.id, "handler_chain started");

        for mw in &self.middleware {
            if !mw.before(message).await? {
                info!(
                    middleware = %std::any::type_name_of_val(mw.as_ref()),
                    "middleware before returned false, chain stopped"
                );
                return Ok(HandlerResponse::Stop);
            }
        }

        let outcome = self.run_handlers(message).await;
        let final_response = match &outcome {
            Ok(response) => response.clone(),
            Err(_) => HandlerResponse::Stop,
        };

        for mw in self.middleware.iter().rev() {
            mw.after(message, &final_response).await?;
        }

        debug!(
            message_id = %message.id,
            response_type = %response_kind(&final_response),
            "handler_chain finished"
        );
        outcome
    }

    async fn run_handlers(&self, message: &Message) -> Result<HandlerResponse> {
        for handler in &self.handlers {
            let handler_name = std::any::type_name_of_val(handler.as_ref());
            let response = match handler.handle(message).await {
                Ok(response) => response,
                Err(e) => {
                    warn!(handler = %handler_name, error = %e, "handler failed");
                    return Err(e);
                }
            };
            debug!(
                handler = %handler_name,
                response_type = %response_kind(&response),
                "handler done"
            );
            match response {
                HandlerResponse::Stop | HandlerResponse::Reply(_) => return Ok(response),
                HandlerResponse::Continue | HandlerResponse::Ignore => continue,
            }
        }
        Ok(HandlerResponse::Continue)
    }
}
