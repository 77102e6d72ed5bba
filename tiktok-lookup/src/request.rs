//! Inbound text → normalized handle.

use crate::error::LookupError;

/// A validated lookup: the handle with '@' removed and surrounding whitespace trimmed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LookupRequest {
    pub username: String,
}

impl LookupRequest {
    /// Trims, drops every '@', trims again. Empty → [`LookupError::InvalidInput`].
    pub fn parse(raw: &str) -> Result<Self, LookupError> {
        let username: String = raw.trim().chars().filter(|c| *c != '@').collect();
        let username = username.trim();
        if username.is_empty() {
            return Err(LookupError::InvalidInput);
        }
        Ok(Self {
            username: username.to_string(),
        })
    }
}
