use log::warn;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// Outcome of one provider fetch in an all-settled fan-out.
///
/// On the wire this is `{"status":"fulfilled","value":..}` or
/// `{"status":"rejected","reason":..}`. A fulfilled value that does not
/// match the expected shape, or is `null`, settles as rejected so one bad
/// provider never fails the whole request.
#[derive(Debug, Clone, PartialEq)]
pub enum Settled<T> {
    Fulfilled(T),
    Rejected(String),
}

impl<T> Settled<T> {
    pub fn fulfilled(value: T) -> Self {
        Settled::Fulfilled(value)
    }

    pub fn rejected(reason: impl Into<String>) -> Self {
        Settled::Rejected(reason.into())
    }

    pub fn value(&self) -> Option<&T> {
        match self {
            Settled::Fulfilled(value) => Some(value),
            Settled::Rejected(_) => None,
        }
    }

    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Settled<U> {
        match self {
            Settled::Fulfilled(value) => Settled::Fulfilled(f(value)),
            Settled::Rejected(reason) => Settled::Rejected(reason),
        }
    }

    pub fn reason(&self) -> Option<&str> {
        match self {
            Settled::Fulfilled(_) => None,
            Settled::Rejected(reason) => Some(reason),
        }
    }
}

impl<T, E: std::fmt::Display> From<Result<T, E>> for Settled<T> {
    fn from(result: Result<T, E>) -> Self {
        match result {
            Ok(value) => Settled::Fulfilled(value),
            Err(e) => Settled::Rejected(e.to_string()),
        }
    }
}

#[derive(Deserialize, Serialize)]
#[serde(tag = "status", rename_all = "lowercase")]
enum SettledRepr {
    Fulfilled {
        #[serde(default)]
        value: Value,
    },
    Rejected {
        #[serde(default)]
        reason: Value,
    },
}

impl<'de, T: DeserializeOwned> Deserialize<'de> for Settled<T> {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let settled = match SettledRepr::deserialize(deserializer)? {
            SettledRepr::Fulfilled { value: Value::Null } => {
                Settled::Rejected("provider returned no data".to_string())
            }
            SettledRepr::Fulfilled { value } => match serde_json::from_value::<T>(value) {
                Ok(parsed) => Settled::Fulfilled(parsed),
                Err(e) => {
                    warn!("Unrecognized provider payload shape: {}", e);
                    Settled::Rejected(format!("malformed payload: {}", e))
                }
            },
            SettledRepr::Rejected { reason } => Settled::Rejected(match reason {
                Value::String(message) => message,
                Value::Null => "provider request failed".to_string(),
                other => other.to_string(),
            }),
        };
        Ok(settled)
    }
}

impl<T: Serialize> Serialize for Settled<T> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        let repr = match self {
            Settled::Fulfilled(value) => SettledRepr::Fulfilled {
                value: serde_json::to_value(value).map_err(serde::ser::Error::custom)?,
            },
            Settled::Rejected(reason) => SettledRepr::Rejected {
                reason: Value::String(reason.clone()),
            },
        };
        repr.serialize(serializer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[derive(Debug, Deserialize, Serialize, PartialEq)]
    struct Counter {
        count: u32,
    }

    #[test]
    fn fulfilled_and_rejected_parse() {
        let ok: Settled<Counter> =
            serde_json::from_value(json!({"status": "fulfilled", "value": {"count": 3}})).unwrap();
        assert_eq!(ok, Settled::Fulfilled(Counter { count: 3 }));

        let failed: Settled<Counter> =
            serde_json::from_value(json!({"status": "rejected", "reason": "timeout"})).unwrap();
        assert_eq!(failed.reason(), Some("timeout"));
    }

    #[test]
    fn wrong_shape_settles_as_rejected() {
        let settled: Settled<Counter> =
            serde_json::from_value(json!({"status": "fulfilled", "value": "oops"})).unwrap();
        assert!(settled.reason().unwrap().starts_with("malformed payload"));

        let empty: Settled<Counter> =
            serde_json::from_value(json!({"status": "fulfilled", "value": null})).unwrap();
        assert!(empty.value().is_none());
    }
}
