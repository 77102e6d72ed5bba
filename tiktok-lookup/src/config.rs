//! Lookup config: API base, timeout, report time zone, image-failure logging.
//! Loaded from TIKTOK_API_BASE_URL, LOOKUP_TIMEOUT_SECS, REPORT_UTC_OFFSET, LOG_IMAGE_FAILURES.

use anyhow::{bail, Context, Result};
use std::env;
use std::time::Duration;

use crate::time::ReportTimeZone;

pub const DEFAULT_API_BASE_URL: &str = "https://www.tikwm.com";
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

#[derive(Debug, Clone)]
pub struct LookupConfig {
    pub api_base_url: String,
    pub timeout: Duration,
    pub time_zone: ReportTimeZone,
    /// true: failed avatar delivery logs at warn; false: at debug.
    pub log_image_failures: bool,
}

impl Default for LookupConfig {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            time_zone: ReportTimeZone::Local,
            log_image_failures: true,
        }
    }
}

fn parse_bool(name: &str, value: &str) -> Result<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        other => bail!("{} must be true or false, got {:?}", name, other),
    }
}

impl LookupConfig {
    /// Loads from env; unset variables keep their defaults, malformed ones are errors.
    pub fn from_env() -> Result<Self> {
        let mut config = Self::default();
        if let Ok(url) = env::var("TIKTOK_API_BASE_URL") {
            if !url.trim().is_empty() {
                config.api_base_url = url.trim().to_string();
            }
        }
        if let Ok(secs) = env::var("LOOKUP_TIMEOUT_SECS") {
            let secs: u64 = secs
                .trim()
                .parse()
                .with_context(|| format!("LOOKUP_TIMEOUT_SECS is not a number: {}", secs))?;
            config.timeout = Duration::from_secs(secs);
        }
        if let Ok(zone) = env::var("REPORT_UTC_OFFSET") {
            config.time_zone = zone.parse().context("REPORT_UTC_OFFSET")?;
        }
        if let Ok(flag) = env::var("LOG_IMAGE_FAILURES") {
            config.log_image_failures = parse_bool("LOG_IMAGE_FAILURES", &flag)?;
        }
        config.validate()?;
        Ok(config)
    }

    /// Rejects an unparsable API base or a zero timeout.
    pub fn validate(&self) -> Result<()> {
        if reqwest::Url::parse(&self.api_base_url).is_err() {
            bail!(
                "TIKTOK_API_BASE_URL is not a valid URL: {}",
                self.api_base_url
            );
        }
        if self.timeout.is_zero() {
            bail!("LOOKUP_TIMEOUT_SECS must be greater than zero");
        }
        Ok(())
    }
}
