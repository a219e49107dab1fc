//! Forgiving field deserializers for applicant and job payloads.
//!
//! Profiles arrive from the dashboard and from document-store exports, where
//! types drift (dates as full timestamps, years as strings, nulls in lists).
//! A malformed field falls back to its neutral value instead of rejecting the
//! whole request.

use std::str::FromStr;

use chrono::{DateTime, NaiveDate};
use serde::{de::DeserializeOwned, Deserialize, Deserializer};
use serde_json::Value;

/// Text form of a scalar JSON value. Null, arrays and objects yield `None`.
fn scalar_text(value: Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}

/// Optional enum label. Unrecognised or non-string values become `None`.
pub(crate) fn label<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: FromStr,
{
    let raw = Option::<Value>::deserialize(deserializer)?;
    Ok(match raw {
        Some(Value::String(s)) => s.parse().ok(),
        _ => None,
    })
}

/// Free-text field. Null or non-scalar values become the empty string.
pub(crate) fn text<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<Value>::deserialize(deserializer)?;
    Ok(raw.and_then(scalar_text).unwrap_or_default())
}

/// Calendar date given as `YYYY-MM-DD` or as an RFC 3339 timestamp
/// (`2015-03-01T00:00:00.000Z`). Timestamps keep the date in their own offset.
pub(crate) fn date<'de, D>(deserializer: D) -> Result<Option<NaiveDate>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<Value>::deserialize(deserializer)?;
    Ok(match raw {
        Some(Value::String(s)) => parse_date(&s),
        _ => None,
    })
}

fn parse_date(raw: &str) -> Option<NaiveDate> {
    let raw = raw.trim();
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .or_else(|| DateTime::parse_from_rfc3339(raw).ok().map(|dt| dt.date_naive()))
}

/// Numeric amount given as a JSON number or a numeric string.
pub(crate) fn number<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<Value>::deserialize(deserializer)?;
    Ok(match raw {
        Some(Value::Number(n)) => n.as_f64(),
        Some(Value::String(s)) => s.trim().parse().ok(),
        _ => None,
    })
}

/// List of labels. Null becomes an empty list; null and non-scalar items are skipped.
pub(crate) fn text_list<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<Value>::deserialize(deserializer)?;
    Ok(match raw {
        Some(Value::Array(items)) => items.into_iter().filter_map(scalar_text).collect(),
        _ => Vec::new(),
    })
}

/// Single nested record. Values that do not decode become `None`.
pub(crate) fn record<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    let raw = Option::<Value>::deserialize(deserializer)?;
    Ok(raw.and_then(|value| serde_json::from_value(value).ok()))
}

/// List of records. Null becomes an empty list; items that do not decode are skipped.
pub(crate) fn list<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    let raw = Option::<Value>::deserialize(deserializer)?;
    Ok(match raw {
        Some(Value::Array(items)) => items
            .into_iter()
            .filter_map(|item| serde_json::from_value(item).ok())
            .collect(),
        _ => Vec::new(),
    })
}
