//! Profile payload from the tikwm `user/info` endpoint.
//!
//! The live API nests the profile as `data.user` and the counters as `data.stats`; older and mocked
//! responses put everything directly under `data`. [`ProfileRecord::from_payload`] accepts both.

use serde::{Deserialize, Deserializer};
use serde_json::{Map, Value};

/// Placeholder for missing text fields.
pub const NOT_AVAILABLE: &str = "N/A";

/// Read-only view of one profile. Missing fields carry the defaults below, never an error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProfileRecord {
    pub unique_id: String,
    pub nickname: String,
    pub id: String,
    pub follower_count: i64,
    pub following_count: i64,
    pub heart_count: i64,
    pub video_count: i64,
    /// Empty when absent.
    pub signature: String,
    /// Unix seconds; 0 when absent.
    pub create_time: i64,
    pub modify_unique_id_time: Option<i64>,
    pub modify_nickname_time: Option<i64>,
    pub country: String,
    /// None when absent or empty.
    pub avatar_larger: Option<String>,
}

/// Wire shape; every field optional so null and missing both fall back to defaults.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawProfile {
    unique_id: Option<String>,
    nickname: Option<String>,
    id: Option<Value>,
    #[serde(default, deserialize_with = "lenient_count")]
    follower_count: Option<i64>,
    #[serde(default, deserialize_with = "lenient_count")]
    following_count: Option<i64>,
    #[serde(default, deserialize_with = "lenient_count")]
    heart_count: Option<i64>,
    #[serde(default, deserialize_with = "lenient_count")]
    video_count: Option<i64>,
    signature: Option<String>,
    create_time: Option<i64>,
    modify_unique_id_time: Option<i64>,
    modify_nickname_time: Option<i64>,
    country: Option<String>,
    avatar_larger: Option<String>,
}

/// Accepts any JSON number (fractions truncated) or numeric string; other values count as missing.
fn lenient_count<'de, D>(deserializer: D) -> Result<Option<i64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(match value {
        Some(Value::Number(n)) => n
            .as_i64()
            .or_else(|| n.as_u64().map(|u| i64::try_from(u).unwrap_or(i64::MAX)))
            .or_else(|| n.as_f64().map(|f| f as i64)),
        Some(Value::String(s)) => s.trim().parse().ok(),
        _ => None,
    })
}

/// Ids arrive as strings from tikwm and as numbers from some mirrors.
fn id_to_string(id: Option<Value>) -> String {
    match id {
        Some(Value::String(s)) if !s.is_empty() => s,
        Some(Value::Number(n)) => n.to_string(),
        _ => NOT_AVAILABLE.to_string(),
    }
}

fn text_or_na(value: Option<String>) -> String {
    value.unwrap_or_else(|| NOT_AVAILABLE.to_string())
}

impl From<RawProfile> for ProfileRecord {
    fn from(raw: RawProfile) -> Self {
        Self {
            unique_id: text_or_na(raw.unique_id),
            nickname: text_or_na(raw.nickname),
            id: id_to_string(raw.id),
            follower_count: raw.follower_count.unwrap_or(0),
            following_count: raw.following_count.unwrap_or(0),
            heart_count: raw.heart_count.unwrap_or(0),
            video_count: raw.video_count.unwrap_or(0),
            signature: raw.signature.unwrap_or_default(),
            create_time: raw.create_time.unwrap_or(0),
            modify_unique_id_time: raw.modify_unique_id_time,
            modify_nickname_time: raw.modify_nickname_time,
            country: text_or_na(raw.country),
            avatar_larger: raw.avatar_larger.filter(|url| !url.trim().is_empty()),
        }
    }
}

const NESTED_SECTIONS: [&str; 2] = ["user", "stats"];

impl ProfileRecord {
    /// Builds a record from the API `data` value. Nested `user`/`stats` fields override flat ones.
    pub fn from_payload(data: &Value) -> Result<Self, serde_json::Error> {
        let merged = match data {
            Value::Object(flat) => {
                let mut merged = Map::new();
                for (key, value) in flat {
                    if !NESTED_SECTIONS.contains(&key.as_str()) {
                        merged.insert(key.clone(), value.clone());
                    }
                }
                for section in NESTED_SECTIONS {
                    if let Some(Value::Object(nested)) = flat.get(section) {
                        for (key, value) in nested {
                            merged.insert(key.clone(), value.clone());
                        }
                    }
                }
                Value::Object(merged)
            }
            other => other.clone(),
        };
        let raw: RawProfile = serde_json::from_value(merged)?;
        Ok(raw.into())
    }
}
