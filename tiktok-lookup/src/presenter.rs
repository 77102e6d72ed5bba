//! Presenter: turns a [`LookupResult`] into the text sent back to the chat.
//!
//! All remote free text (handle, nickname, signature, country) and error details go through
//! [`escape_markdown`] under [`Markup::MarkdownV2`]. Template text is written pre-escaped.

use crate::error::{LookupError, LookupResult};
use crate::markdown::{escape_code, escape_markdown, group_thousands};
use crate::record::ProfileRecord;
use crate::time::ReportTimeZone;

/// Shown for timestamps that are zero, negative, or missing.
pub const NOT_AVAILABLE_TIME: &str = "not available";
/// Shown when the bio is empty.
pub const EMPTY_BIO: &str = "none";
/// Sent while the lookup runs; later edited into the report.
pub const SEARCHING_PLACEHOLDER: &str = "⏳ Searching for profile info…";
/// Reply to /start and /help.
pub const GREETING: &str = "Welcome to the TikTok profile lookup bot. Send me any TikTok username (with or without @) and I will look it up.";

/// Output dialect.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Markup {
    /// Telegram MarkdownV2 with escaping.
    MarkdownV2,
    /// No markup, no escaping (terminal output).
    Plain,
}

/// Rendered message plus the avatar to deliver before it, if any.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedReport {
    pub text: String,
    pub image_url: Option<String>,
}

/// Stateless renderer; the same input always yields the same text.
#[derive(Debug, Clone, Copy)]
pub struct Presenter {
    markup: Markup,
    time_zone: ReportTimeZone,
}

impl Presenter {
    pub fn new(markup: Markup, time_zone: ReportTimeZone) -> Self {
        Self { markup, time_zone }
    }

    pub fn markup(&self) -> Markup {
        self.markup
    }

    /// Renders any lookup outcome.
    pub fn render(&self, result: &LookupResult) -> RenderedReport {
        match result {
            Ok(record) => self.render_profile(record),
            Err(e) => RenderedReport {
                text: self.render_error(e),
                image_url: None,
            },
        }
    }

    /// One-line message naming the error category, with the detail after it.
    pub fn render_error(&self, error: &LookupError) -> String {
        let (label, detail) = match error {
            LookupError::InvalidInput => (
                "Invalid username",
                "send a TikTok username, for example @tiktok",
            ),
            LookupError::NotFound(msg) => ("User not found", msg.as_str()),
            LookupError::Transport(msg) => ("Connection error", msg.as_str()),
            LookupError::Unexpected(msg) => ("Unexpected error", msg.as_str()),
        };
        format!("❌ {} {}", self.bold(&format!("{}:", label)), self.text(detail))
    }

    /// Fixed-structure multi-line report for one profile.
    pub fn render_profile(&self, record: &ProfileRecord) -> RenderedReport {
        let bio = if record.signature.trim().is_empty() {
            EMPTY_BIO.to_string()
        } else {
            self.text(&record.signature)
        };

        let lines = [
            format!("✅ {}", self.bold(&format!("Found @{}", self.text(&record.unique_id)))),
            String::new(),
            format!("👤 {} {}", self.bold("Name:"), self.text(&record.nickname)),
            format!("🆔 {} {}", self.bold("ID:"), self.code(&record.id)),
            String::new(),
            format!(
                "❤️ {} {}",
                self.bold("Followers:"),
                self.count(record.follower_count)
            ),
            format!(
                "↗️ {} {}",
                self.bold("Following:"),
                self.count(record.following_count)
            ),
            format!(
                "👍 {} {}",
                self.bold("Likes:"),
                self.count(record.heart_count)
            ),
            format!(
                "🎥 {} {}",
                self.bold("Videos:"),
                self.count(record.video_count)
            ),
            String::new(),
            format!(
                "📅 {} {}",
                self.bold("Created:"),
                self.code(&self.timestamp(Some(record.create_time)))
            ),
            format!(
                "✏️ {} {}",
                self.bold("Username changed:"),
                self.code(&self.timestamp(record.modify_unique_id_time))
            ),
            format!(
                "✏️ {} {}",
                self.bold("Nickname changed:"),
                self.code(&self.timestamp(record.modify_nickname_time))
            ),
            format!("🌍 {} {}", self.bold("Country:"), self.text(&record.country)),
            String::new(),
            format!("📝 {}", self.bold("Bio:")),
            bio,
        ];

        RenderedReport {
            text: lines.join("\n"),
            image_url: record.avatar_larger.clone(),
        }
    }

    fn count(&self, n: i64) -> String {
        self.text(&group_thousands(n))
    }

    fn timestamp(&self, secs: Option<i64>) -> String {
        secs.and_then(|s| self.time_zone.format_timestamp(s))
            .unwrap_or_else(|| NOT_AVAILABLE_TIME.to_string())
    }

    /// Free text from the remote record.
    fn text(&self, raw: &str) -> String {
        match self.markup {
            Markup::MarkdownV2 => escape_markdown(raw),
            Markup::Plain => raw.to_string(),
        }
    }

    /// `label` is template text and must not contain reserved characters.
    fn bold(&self, label: &str) -> String {
        match self.markup {
            Markup::MarkdownV2 => format!("*{}*", label),
            Markup::Plain => label.to_string(),
        }
    }

    fn code(&self, raw: &str) -> String {
        match self.markup {
            Markup::MarkdownV2 => format!("`{}`", escape_code(raw)),
            Markup::Plain => raw.to_string(),
        }
    }
}
