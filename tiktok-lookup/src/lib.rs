//! # tiktok-lookup
//!
//! Username → tikwm profile lookup → formatted Telegram report.
//!
//! - [`TikwmClient`] (a [`ProfileSource`]) does the single outbound GET and classifies failures into [`LookupError`].
//! - [`Presenter`] renders a [`LookupResult`] as MarkdownV2 (or plain text for the CLI).
//! - [`LookupHandler`] / [`StartHandler`] / [`LoggingMiddleware`] plug into a `handler_chain::HandlerChain`.

pub mod config;
pub mod error;
pub mod fetcher;
pub mod handlers;
pub mod markdown;
pub mod presenter;
pub mod record;
pub mod request;
pub mod time;

pub use config::LookupConfig;
pub use error::{outcome_kind, LookupError, LookupResult};
pub use fetcher::{parse_response, ProfileSource, TikwmClient};
pub use handlers::{LoggingMiddleware, LookupHandler, StartHandler};
pub use markdown::{escape_markdown, group_thousands};
pub use presenter::{Markup, Presenter, RenderedReport, GREETING, SEARCHING_PLACEHOLDER};
pub use record::ProfileRecord;
pub use request::LookupRequest;
pub use time::ReportTimeZone;
