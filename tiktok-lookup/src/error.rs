use thiserror::Error;

use crate::record::ProfileRecord;

/// Why a lookup produced no profile. Every variant ends as one user-visible line.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LookupError {
    /// Handle was empty after trimming and stripping '@'.
    #[error("invalid username")]
    InvalidInput,

    /// API answered with a non-success code or no `data`; carries the server `msg`.
    #[error("not found: {0}")]
    NotFound(String),

    /// Connection, timeout, or non-2xx status.
    #[error("transport error: {0}")]
    Transport(String),

    /// Anything else (malformed body, unexpected payload shape).
    #[error("unexpected error: {0}")]
    Unexpected(String),
}

impl LookupError {
    /// Short label for logs.
    pub fn kind(&self) -> &'static str {
        match self {
            LookupError::InvalidInput => "invalid_input",
            LookupError::NotFound(_) => "not_found",
            LookupError::Transport(_) => "transport_error",
            LookupError::Unexpected(_) => "unexpected_error",
        }
    }
}

/// One lookup outcome: the profile, or exactly one classified error.
pub type LookupResult = std::result::Result<ProfileRecord, LookupError>;

/// Label for logs: "success" or the error kind.
pub fn outcome_kind(result: &LookupResult) -> &'static str {
    match result {
        Ok(_) => "success",
        Err(e) => e.kind(),
    }
}
