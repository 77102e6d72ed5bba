//! Unix-seconds → "YYYY-MM-DD HH:MM:SS" in the configured zone.

use std::str::FromStr;

use anyhow::{anyhow, bail};
use chrono::{DateTime, FixedOffset, Local, Offset, Utc};

/// Format used for every timestamp in the report.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Zone used when rendering timestamps.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ReportTimeZone {
    /// Host local time.
    #[default]
    Local,
    /// Fixed UTC offset; stable across hosts.
    Fixed(FixedOffset),
}

impl ReportTimeZone {
    pub fn utc() -> Self {
        ReportTimeZone::Fixed(Utc.fix())
    }

    /// Formats `secs`; `None` for zero, negative, or out-of-range values.
    pub fn format_timestamp(&self, secs: i64) -> Option<String> {
        if secs <= 0 {
            return None;
        }
        let utc = DateTime::from_timestamp(secs, 0)?;
        let text = match self {
            ReportTimeZone::Local => utc.with_timezone(&Local).format(TIMESTAMP_FORMAT).to_string(),
            ReportTimeZone::Fixed(offset) => {
                utc.with_timezone(offset).format(TIMESTAMP_FORMAT).to_string()
            }
        };
        Some(text)
    }
}

impl FromStr for ReportTimeZone {
    type Err = anyhow::Error;

    /// Accepts `local`, `utc`/`z`, or `±HH:MM` / `±HHMM` / `±HH`.
    fn from_str(s: &str) -> anyhow::Result<Self> {
        let s = s.trim();
        match s.to_ascii_lowercase().as_str() {
            "local" | "" => return Ok(ReportTimeZone::Local),
            "utc" | "z" => return Ok(ReportTimeZone::utc()),
            _ => {}
        }

        let (sign, rest) = if let Some(rest) = s.strip_prefix('+') {
            (1, rest)
        } else if let Some(rest) = s.strip_prefix('-') {
            (-1, rest)
        } else {
            bail!("UTC offset must start with '+' or '-': {}", s);
        };
        let digits: String = rest.chars().filter(|c| *c != ':').collect();
        if !digits.chars().all(|c| c.is_ascii_digit()) || !matches!(digits.len(), 2 | 4) {
            bail!("UTC offset must look like +HH:MM: {}", s);
        }
        let hours: i32 = digits[..2].parse()?;
        let minutes: i32 = if digits.len() == 4 { digits[2..].parse()? } else { 0 };
        if hours > 14 || minutes > 59 {
            bail!("UTC offset out of range: {}", s);
        }
        let offset = FixedOffset::east_opt(sign * (hours * 3600 + minutes * 60))
            .ok_or_else(|| anyhow!("UTC offset out of range: {}", s))?;
        Ok(ReportTimeZone::Fixed(offset))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_and_negative_are_not_available() {
        let tz = ReportTimeZone::utc();
        assert_eq!(tz.format_timestamp(0), None);
        assert_eq!(tz.format_timestamp(-5), None);
        assert_eq!(ReportTimeZone::Local.format_timestamp(0), None);
    }

    #[test]
    fn test_fixed_utc_formatting() {
        let tz = ReportTimeZone::utc();
        assert_eq!(
            tz.format_timestamp(1_700_000_000).as_deref(),
            Some("2023-11-14 22:13:20")
        );
    }

    #[test]
    fn test_fixed_offset_formatting() {
        let tz: ReportTimeZone = "+03:00".parse().unwrap();
        assert_eq!(
            tz.format_timestamp(1_700_000_000).as_deref(),
            Some("2023-11-15 01:13:20")
        );
        let tz: ReportTimeZone = "-0530".parse().unwrap();
        assert_eq!(
            tz.format_timestamp(1_700_000_000).as_deref(),
            Some("2023-11-14 16:43:20")
        );
    }

    #[test]
    fn test_local_has_fixed_shape() {
        let text = ReportTimeZone::Local.format_timestamp(1_700_000_000).unwrap();
        assert_eq!(text.len(), 19);
        assert_eq!(&text[4..5], "-");
        assert_eq!(&text[13..14], ":");
    }

    #[test]
    fn test_out_of_range_is_not_available() {
        assert_eq!(ReportTimeZone::utc().format_timestamp(i64::MAX), None);
    }

    #[test]
    fn test_parse_zone_names() {
        assert_eq!("local".parse::<ReportTimeZone>().unwrap(), ReportTimeZone::Local);
        assert_eq!("UTC".parse::<ReportTimeZone>().unwrap(), ReportTimeZone::utc());
        assert_eq!("+00".parse::<ReportTimeZone>().unwrap(), ReportTimeZone::utc());
    }

    #[test]
    fn test_parse_zone_rejects_garbage() {
        for bad in ["03:00", "+3", "+25:00", "+03:75", "+ab:cd", "Europe/Paris"] {
            assert!(bad.parse::<ReportTimeZone>().is_err(), "{bad}");
        }
    }
}
