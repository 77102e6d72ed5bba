//! Test doubles shared by the integration tests: a recording [`Bot`] and a canned [`ProfileSource`].

#![allow(dead_code)]

use async_trait::async_trait;
use chrono::Utc;
use dbot_core::{Bot, Chat, DbotError, Message, Result, User};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use tiktok_lookup::{LookupResult, ProfileSource};
use tokio::sync::mpsc;

/// One recorded outbound call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BotCall {
    Send { chat_id: i64, text: String },
    SendMarkdown { chat_id: i64, text: String },
    Placeholder { chat_id: i64, text: String },
    EditMarkdown { message_id: String, text: String },
    Photo { chat_id: i64, url: String },
}

/// Mock Bot that records every call in order; photo delivery can be made to fail.
pub struct MockBot {
    placeholder_id: String,
    fail_photos: bool,
    calls_tx: mpsc::UnboundedSender<BotCall>,
}

impl MockBot {
    /// Returns the bot and the receiver for its calls. Placeholder id is `"42"`.
    pub fn with_receiver(fail_photos: bool) -> (Arc<Self>, mpsc::UnboundedReceiver<BotCall>) {
        let (calls_tx, calls_rx) = mpsc::unbounded_channel();
        let bot = Arc::new(Self {
            placeholder_id: "42".to_string(),
            fail_photos,
            calls_tx,
        });
        (bot, calls_rx)
    }

    fn record(&self, call: BotCall) {
        let _ = self.calls_tx.send(call);
    }
}

/// Drains everything recorded so far.
pub fn drain(rx: &mut mpsc::UnboundedReceiver<BotCall>) -> Vec<BotCall> {
    let mut calls = Vec::new();
    while let Ok(call) = rx.try_recv() {
        calls.push(call);
    }
    calls
}

#[async_trait]
impl Bot for MockBot {
    async fn send_message(&self, chat: &Chat, text: &str) -> Result<()> {
        self.record(BotCall::Send {
            chat_id: chat.id,
            text: text.to_string(),
        });
        Ok(())
    }

    async fn send_markdown(&self, chat: &Chat, text: &str) -> Result<()> {
        self.record(BotCall::SendMarkdown {
            chat_id: chat.id,
            text: text.to_string(),
        });
        Ok(())
    }

    async fn reply_to(&self, message: &Message, text: &str) -> Result<()> {
        self.send_message(&message.chat, text).await
    }

    async fn send_message_and_return_id(&self, chat: &Chat, text: &str) -> Result<String> {
        self.record(BotCall::Placeholder {
            chat_id: chat.id,
            text: text.to_string(),
        });
        Ok(self.placeholder_id.clone())
    }

    async fn edit_message_markdown(
        &self,
        _chat: &Chat,
        message_id: &str,
        text: &str,
    ) -> Result<()> {
        self.record(BotCall::EditMarkdown {
            message_id: message_id.to_string(),
            text: text.to_string(),
        });
        Ok(())
    }

    async fn send_photo(&self, chat: &Chat, url: &str) -> Result<()> {
        self.record(BotCall::Photo {
            chat_id: chat.id,
            url: url.to_string(),
        });
        if self.fail_photos {
            return Err(DbotError::Bot("Bad Request: wrong file identifier".to_string()));
        }
        Ok(())
    }
}

/// ProfileSource returning a fixed result and counting calls.
pub struct StubSource {
    result: LookupResult,
    calls: AtomicUsize,
    usernames: Mutex<Vec<String>>,
}

impl StubSource {
    pub fn new(result: LookupResult) -> Arc<Self> {
        Arc::new(Self {
            result,
            calls: AtomicUsize::new(0),
            usernames: Mutex::new(Vec::new()),
        })
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn usernames(&self) -> Vec<String> {
        self.usernames.lock().unwrap().clone()
    }
}

#[async_trait]
impl ProfileSource for StubSource {
    async fn fetch(&self, username: &str) -> LookupResult {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.usernames.lock().unwrap().push(username.to_string());
        self.result.clone()
    }
}

pub const CHAT_ID: i64 = 456;

pub fn text_message(content: &str) -> Message {
    Message {
        id: "100".to_string(),
        user: User {
            id: 123,
            username: Some("asker".to_string()),
            first_name: Some("Ask".to_string()),
            last_name: None,
        },
        chat: Chat {
            id: CHAT_ID,
            chat_type: "private".to_string(),
        },
        content: content.to_string(),
        message_type: "text".to_string(),
        created_at: Utc::now(),
    }
}

pub fn non_text_message() -> Message {
    let mut message = text_message("");
    message.message_type = "other".to_string();
    message
}
