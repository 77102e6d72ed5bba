//! REPL runner: converts each teloxide message to core::Message and hands it to the HandlerChain
//! on its own tokio task.

use anyhow::Result;
use dbot_core::ToCoreMessage;
use handler_chain::HandlerChain;
use teloxide::prelude::*;
use tracing::{error, info, instrument};

use super::adapters::TelegramMessageWrapper;

/// Starts long polling with the given bot and chain. Returns when the REPL stops (e.g. Ctrl-C).
#[instrument(skip(bot, handler_chain))]
pub async fn run_repl(bot: teloxide::Bot, handler_chain: HandlerChain) -> Result<()> {
    match bot.get_me().await {
        Ok(me) => info!(
            username = %me.user.username.as_deref().unwrap_or("unknown"),
            "Connected to Telegram"
        ),
        Err(e) => error!(error = %e, "getMe failed; polling anyway"),
    }

    teloxide::repl(bot, move |_bot: Bot, msg: teloxide::types::Message| {
        let chain = handler_chain.clone();

        async move {
            let core_msg = TelegramMessageWrapper(&msg).to_core();
            info!(
                user_id = core_msg.user.id,
                chat_id = core_msg.chat.id,
                message_type = %core_msg.message_type,
                "Received message"
            );

            tokio::spawn(async move {
                if let Err(e) = chain.handle(&core_msg).await {
                    error!(
                        error = %e,
                        user_id = core_msg.user.id,
                        chat_id = core_msg.chat.id,
                        "Handler chain failed"
                    );
                }
            });

            Ok(())
        }
    })
    .await;

    Ok(())
}
