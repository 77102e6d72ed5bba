//! Fetcher: one GET per lookup against the tikwm `user/info` endpoint.
//!
//! [`ProfileSource`] is the seam handlers depend on; [`TikwmClient`] is the HTTP implementation.
//! `fetch` never panics; every failure is classified into a [`LookupError`].

use std::error::Error as _;
use std::time::{Duration, Instant};

use anyhow::Context;
use async_trait::async_trait;
use reqwest::Url;
use serde::Deserialize;
use serde_json::Value;
use tracing::{info, instrument, warn};

use crate::error::{outcome_kind, LookupError, LookupResult};
use crate::record::ProfileRecord;
use crate::request::LookupRequest;

/// Path appended to the configured API base.
pub const USER_INFO_PATH: &str = "/api/user/info";

/// `code` value the API uses for success.
const SUCCESS_CODE: i64 = 0;

/// Anything that can resolve a handle to a profile.
#[async_trait]
pub trait ProfileSource: Send + Sync {
    async fn fetch(&self, username: &str) -> LookupResult;
}

/// Top-level response body.
#[derive(Debug, Deserialize)]
struct ApiEnvelope {
    code: Option<i64>,
    msg: Option<String>,
    data: Option<Value>,
}

/// Classifies a 2xx response body.
pub fn parse_response(body: &[u8]) -> LookupResult {
    let envelope: ApiEnvelope = serde_json::from_slice(body)
        .map_err(|e| LookupError::Unexpected(format!("invalid JSON response: {}", e)))?;

    let data = match (envelope.code, envelope.data) {
        (Some(SUCCESS_CODE), Some(data)) => data,
        _ => {
            let msg = envelope
                .msg
                .filter(|m| !m.trim().is_empty())
                .unwrap_or_else(|| "unknown".to_string());
            return Err(LookupError::NotFound(msg));
        }
    };

    ProfileRecord::from_payload(&data)
        .map_err(|e| LookupError::Unexpected(format!("unexpected profile payload: {}", e)))
}

/// Error text with its source chain, e.g. "error sending request: connection refused".
fn describe_transport_error(e: &reqwest::Error, timeout: Duration) -> String {
    if e.is_timeout() {
        return format!("request timed out after {}s", timeout.as_secs_f32());
    }
    let mut text = e.to_string();
    let mut source = e.source();
    while let Some(cause) = source {
        text.push_str(": ");
        text.push_str(&cause.to_string());
        source = cause.source();
    }
    text
}

/// HTTP client for the tikwm API. Cheap to share behind an `Arc`; the connection pool lives in `client`.
pub struct TikwmClient {
    client: reqwest::Client,
    endpoint: Url,
    timeout: Duration,
}

impl TikwmClient {
    /// Builds a client for `base_url` (e.g. `https://www.tikwm.com`) with a per-request timeout.
    pub fn new(base_url: &str, timeout: Duration) -> anyhow::Result<Self> {
        let endpoint = format!("{}{}", base_url.trim_end_matches('/'), USER_INFO_PATH);
        let endpoint =
            Url::parse(&endpoint).with_context(|| format!("invalid API base URL: {}", base_url))?;
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .user_agent(concat!("tiktok-bot/", env!("CARGO_PKG_VERSION")))
            .build()
            .context("failed to build HTTP client")?;
        Ok(Self {
            client,
            endpoint,
            timeout,
        })
    }

    /// Full request URL for a handle; the handle is query-encoded.
    pub fn lookup_url(&self, username: &str) -> Url {
        let mut url = self.endpoint.clone();
        url.query_pairs_mut().append_pair("unique_id", username);
        url
    }

    async fn request(&self, request: &LookupRequest) -> LookupResult {
        let url = self.lookup_url(&request.username);
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| LookupError::Transport(describe_transport_error(&e, self.timeout)))?;

        let status = response.status();
        if !status.is_success() {
            return Err(LookupError::Transport(format!("HTTP {}", status)));
        }

        let body = response
            .bytes()
            .await
            .map_err(|e| LookupError::Transport(describe_transport_error(&e, self.timeout)))?;
        parse_response(&body)
    }
}

#[async_trait]
impl ProfileSource for TikwmClient {
    #[instrument(skip(self))]
    async fn fetch(&self, username: &str) -> LookupResult {
        let request = match LookupRequest::parse(username) {
            Ok(request) => request,
            Err(_) => return Err(LookupError::Unexpected("empty username".to_string())),
        };

        let started = Instant::now();
        let result = self.request(&request).await;
        let elapsed_ms = started.elapsed().as_millis() as u64;

        match &result {
            Ok(record) => info!(
                username = %request.username,
                outcome = outcome_kind(&result),
                followers = record.follower_count,
                elapsed_ms,
                "profile lookup finished"
            ),
            Err(e) => warn!(
                username = %request.username,
                outcome = outcome_kind(&result),
                error = %e,
                elapsed_ms,
                "profile lookup failed"
            ),
        }
        result
    }
}
