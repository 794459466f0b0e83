//! Response bodies of the QR Code Generator API
//!
//! Only `id` is required. Everything else tolerates absence, `null`, or an
//! unexpected scalar type so one odd record never aborts an export.

use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// One QR code from the list endpoint
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct Item {
    #[serde(deserialize_with = "de_id")]
    pub(crate) id: String,
    #[serde(default, deserialize_with = "de_opt_text")]
    pub(crate) title: Option<String>,
    #[serde(default, rename = "type", deserialize_with = "de_opt_text")]
    pub(crate) kind: Option<String>,
    #[serde(default, deserialize_with = "de_opt_text")]
    pub(crate) status: Option<String>,
    #[serde(default, deserialize_with = "de_opt_text")]
    pub(crate) created_at: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
pub(crate) struct ItemPage {
    #[serde(default)]
    pub(crate) data: Vec<Item>,
    #[serde(default)]
    pub(crate) pagination: Pagination,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct Pagination {
    #[serde(default, deserialize_with = "de_flag")]
    pub(crate) has_more: bool,
    #[serde(default, deserialize_with = "de_opt_text")]
    pub(crate) next_cursor: Option<String>,
}

impl Pagination {
    /// Cursor for the following page, if the server says there is one
    pub(crate) fn continuation(&self) -> Option<&str> {
        if !self.has_more {
            return None;
        }
        self.next_cursor.as_deref().filter(|c| !c.is_empty())
    }
}

/// Scan count exactly as the API sent it
///
/// Absent and `null` both map to `Value::Null`. Integers, floats and numeric
/// strings are all accepted; the cell text keeps the original form.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(transparent)]
pub(crate) struct Count(pub(crate) Value);

impl Count {
    pub(crate) fn is_zero(&self) -> bool {
        match &self.0 {
            Value::Null => true,
            Value::String(s) => s.trim().parse::<f64>().is_ok_and(|n| n == 0.0),
            other => other.as_f64() == Some(0.0),
        }
    }

    /// Cell text, with `missing` standing in for an absent value
    pub(crate) fn text_or(&self, missing: &str) -> String {
        match &self.0 {
            Value::Null => missing.to_string(),
            Value::String(s) => s.clone(),
            other => other.to_string(),
        }
    }
}

/// Lifetime scan counts for one QR code
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub(crate) struct AggregateStats {
    #[serde(default)]
    pub(crate) total: Count,
    #[serde(default)]
    pub(crate) unique: Count,
}

/// Daily scan buckets for one QR code
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub(crate) struct SeriesStats {
    #[serde(default)]
    pub(crate) scans: Vec<ScanEntry>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub(crate) struct ScanEntry {
    #[serde(default, deserialize_with = "de_opt_text")]
    pub(crate) time: Option<String>,
    #[serde(default)]
    pub(crate) total: Count,
    #[serde(default)]
    pub(crate) unique: Count,
}

impl ScanEntry {
    /// Days with neither total nor unique scans are not exported
    pub(crate) fn has_activity(&self) -> bool {
        !self.total.is_zero() || !self.unique.is_zero()
    }
}

fn de_id<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    match Value::deserialize(deserializer)? {
        Value::String(s) => Ok(s),
        Value::Number(n) => Ok(n.to_string()),
        other => Err(serde::de::Error::custom(format!(
            "invalid QR code id: {other}"
        ))),
    }
}

fn de_opt_text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::Null => None,
        Value::String(s) => Some(s),
        other => Some(other.to_string()),
    })
}

fn de_flag<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<bool>::deserialize(deserializer)?.unwrap_or(false))
}
