use thiserror::Error;

#[derive(Error, Debug)]
pub enum DbotError {
    /// Transport call failed or was rejected (bad message id, bad photo URL, API error).
    #[error("Bot error: {0}")]
    Bot(String),
}

pub type Result<T> = std::result::Result<T, DbotError>;
