// Lenient field readers for provider payloads.
//
// Providers disagree on leaf types (numbers as strings, "45%", 0/1 flags).
// A wrong leaf type degrades to `None` instead of failing the whole payload.

use chrono::{DateTime, NaiveDate, Utc};
use log::warn;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer};
use serde_json::Value;
use std::collections::BTreeMap;

pub fn number<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(value.as_ref().and_then(number_of))
}

pub fn flag<'de, D>(deserializer: D) -> Result<Option<bool>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(value.as_ref().and_then(flag_of))
}

pub fn text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(value.as_ref().and_then(text_of))
}

pub fn strings<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(match value {
        Some(Value::Array(items)) => items.iter().filter_map(text_of).collect(),
        Some(other) => text_of(&other).into_iter().collect(),
        None => Vec::new(),
    })
}

pub fn number_map<'de, D>(deserializer: D) -> Result<BTreeMap<String, f64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(match value {
        Some(Value::Object(entries)) => entries
            .iter()
            .filter_map(|(key, value)| number_of(value).map(|n| (key.clone(), n)))
            .collect(),
        _ => BTreeMap::new(),
    })
}

pub fn date<'de, D>(deserializer: D) -> Result<Option<DateTime<Utc>>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(match value {
        Some(Value::String(raw)) => {
            let parsed = parse_date(&raw);
            if parsed.is_none() && !raw.trim().is_empty() {
                warn!("Dropping unparseable date value {:?}", raw);
            }
            parsed
        }
        _ => None,
    })
}

/// Nested block of any shape. A block that does not match degrades to
/// `None` and the rest of the payload is kept.
pub fn lenient<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(value.filter(|v| !v.is_null()).and_then(block_of))
}

/// Like [`lenient`] for fields that fall back to their default.
pub fn lenient_or_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned + Default,
{
    Ok(lenient(deserializer)?.unwrap_or_default())
}

/// Opaque list; anything but an array reads as empty.
pub fn values<'de, D>(deserializer: D) -> Result<Vec<Value>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(match value {
        Some(Value::Array(items)) => items,
        _ => Vec::new(),
    })
}

/// Keyed blocks; entries that do not match are dropped one by one.
pub fn entries<'de, D, T>(deserializer: D) -> Result<BTreeMap<String, T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(match value {
        Some(Value::Object(map)) => map
            .into_iter()
            .filter_map(|(key, value)| block_of(value).map(|block| (key, block)))
            .collect(),
        _ => BTreeMap::new(),
    })
}

fn block_of<T: DeserializeOwned>(value: Value) -> Option<T> {
    match serde_json::from_value(value) {
        Ok(block) => Some(block),
        Err(e) => {
            warn!("Dropping malformed block: {}", e);
            None
        }
    }
}

/// Numbers and numeric strings ("42", "3.1%") become finite floats.
pub fn number_of(value: &Value) -> Option<f64> {
    let parsed = match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().trim_end_matches('%').trim().parse::<f64>().ok(),
        _ => None,
    };
    parsed.filter(|n| n.is_finite())
}

pub fn flag_of(value: &Value) -> Option<bool> {
    match value {
        Value::Bool(b) => Some(*b),
        Value::Number(n) => n.as_f64().map(|n| n != 0.0),
        Value::String(s) => match s.trim().to_ascii_lowercase().as_str() {
            "true" | "yes" | "1" => Some(true),
            "false" | "no" | "0" => Some(false),
            _ => None,
        },
        _ => None,
    }
}

/// Strings, numbers and `{content|text|name}` objects become trimmed text.
pub fn text_of(value: &Value) -> Option<String> {
    let text = match value {
        Value::String(s) => s.trim().to_string(),
        Value::Number(n) => n.to_string(),
        Value::Object(map) => return ["content", "text", "name"]
            .iter()
            .find_map(|key| map.get(*key).and_then(text_of)),
        _ => return None,
    };
    if text.is_empty() {
        None
    } else {
        Some(text)
    }
}

/// Truthiness of a loosely typed "is this thing present" leaf.
pub fn is_present(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().map(|n| n > 0.0).unwrap_or(false),
        Value::String(s) => !s.trim().is_empty(),
        Value::Array(items) => !items.is_empty(),
        Value::Object(map) => match map.get("exists").or_else(|| map.get("present")) {
            Some(flag) => flag_of(flag).unwrap_or(false),
            None => !map.is_empty(),
        },
    }
}

pub fn parse_date(raw: &str) -> Option<DateTime<Utc>> {
    let raw = raw.trim();
    if let Ok(parsed) = DateTime::parse_from_rfc3339(raw) {
        return Some(parsed.with_timezone(&Utc));
    }
    if let Ok(parsed) = DateTime::parse_from_rfc2822(raw) {
        return Some(parsed.with_timezone(&Utc));
    }
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .and_then(|day| day.and_hms_opt(0, 0, 0))
        .map(|naive| naive.and_utc())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn numbers_accept_strings_and_drop_garbage() {
        assert_eq!(number_of(&json!(42)), Some(42.0));
        assert_eq!(number_of(&json!("3.5%")), Some(3.5));
        assert_eq!(number_of(&json!("NaN")), None);
        assert_eq!(number_of(&json!("n/a")), None);
        assert_eq!(number_of(&json!({"value": 1})), None);
    }

    #[test]
    fn presence_follows_exists_flag_when_given() {
        assert!(is_present(&json!({"og:title": "Home"})));
        assert!(!is_present(&json!({"exists": false, "content": "x"})));
        assert!(!is_present(&json!({})));
        assert!(!is_present(&json!("")));
        assert!(is_present(&json!(true)));
    }

    #[test]
    fn dates_in_common_feed_formats_parse() {
        assert!(parse_date("2024-05-01T10:00:00Z").is_some());
        assert!(parse_date("Wed, 01 May 2024 10:00:00 +0000").is_some());
        assert!(parse_date("2024-05-01").is_some());
        assert!(parse_date("last tuesday").is_none());
    }

    #[derive(Debug, Deserialize, PartialEq)]
    struct Window {
        #[serde(default, deserialize_with = "lenient")]
        inner: Option<BTreeMap<String, f64>>,
        #[serde(default, deserialize_with = "values")]
        hours: Vec<Value>,
    }

    #[test]
    fn mismatched_blocks_degrade_without_failing_the_parent() {
        let parsed: Window =
            serde_json::from_value(json!({"inner": "nope", "hours": null})).unwrap();
        assert_eq!(parsed, Window { inner: None, hours: Vec::new() });

        let parsed: Window =
            serde_json::from_value(json!({"inner": {"a": 1.5}, "hours": [9, "18"]})).unwrap();
        assert_eq!(parsed.inner.unwrap()["a"], 1.5);
        assert_eq!(parsed.hours, vec![json!(9), json!("18")]);
    }
}
