//! Codec for JSON documents persisted in text columns.
//!
//! Writes always go through [`encode`]; reads always go through [`decode`],
//! which tolerates double-encoded text and never fails the read. Inbound
//! request values are normalised with [`normalize`] (or the [`Lenient`]
//! wrapper) so a client may send either the native value or a string holding
//! its JSON.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::Value;
use tracing::warn;
use utoipa::ToSchema;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum JsonTextError {
    #[error("value cannot be encoded as JSON: {0}")]
    Encode(String),

    #[error("value does not have the expected shape: {0}")]
    Shape(String),
}

/// Result of reading a JSON text column.
///
/// `malformed` carries the raw column text when it could not be decoded; the
/// value is then the type's default.
#[derive(Debug, Clone, PartialEq)]
pub struct Decoded<T> {
    pub value: T,
    pub malformed: Option<String>,
}

impl<T> Decoded<T> {
    pub fn is_malformed(&self) -> bool {
        self.malformed.is_some()
    }
}

pub fn encode<T: Serialize + ?Sized>(value: &T) -> Result<String, JsonTextError> {
    serde_json::to_string(value).map_err(|e| JsonTextError::Encode(e.to_string()))
}

/// Decodes a stored column. Absent or blank text is the default value.
pub fn decode<T>(raw: Option<&str>) -> Decoded<T>
where
    T: DeserializeOwned + Default,
{
    let Some(text) = raw.map(str::trim).filter(|t| !t.is_empty()) else {
        return Decoded {
            value: T::default(),
            malformed: None,
        };
    };

    let parsed = serde_json::from_str::<Value>(text)
        .ok()
        .map(unwrap_encoded_string)
        .and_then(|v| serde_json::from_value::<T>(v).ok());

    match parsed {
        Some(value) => Decoded {
            value,
            malformed: None,
        },
        None => Decoded {
            value: T::default(),
            malformed: Some(text.to_string()),
        },
    }
}

/// Like [`decode`] for nullable columns: absent text stays `None`.
pub fn decode_optional<T>(raw: Option<&str>) -> Decoded<Option<T>>
where
    T: DeserializeOwned,
{
    let Some(text) = raw.map(str::trim).filter(|t| !t.is_empty()) else {
        return Decoded {
            value: None,
            malformed: None,
        };
    };

    let parsed = serde_json::from_str::<Value>(text)
        .ok()
        .map(unwrap_encoded_string)
        .and_then(|v| serde_json::from_value::<T>(v).ok());

    match parsed {
        Some(value) => Decoded {
            value: Some(value),
            malformed: None,
        },
        None => Decoded {
            value: None,
            malformed: Some(text.to_string()),
        },
    }
}

/// Accepts a request value in either native or JSON-string form.
///
/// A string holding a JSON object or array is read as that document; any
/// other string is only accepted when `T` itself admits a string.
pub fn normalize<T: DeserializeOwned>(value: Value) -> Result<T, JsonTextError> {
    if let Value::String(text) = &value {
        if let Ok(inner) = serde_json::from_str::<Value>(text) {
            if inner.is_object() || inner.is_array() {
                if let Ok(parsed) = serde_json::from_value::<T>(inner) {
                    return Ok(parsed);
                }
            }
        }
    }

    serde_json::from_value::<T>(value).map_err(|e| JsonTextError::Shape(e.to_string()))
}

/// A string whose content is itself a JSON object or array was encoded
/// twice; peel one layer.
fn unwrap_encoded_string(value: Value) -> Value {
    if let Value::String(text) = &value {
        if let Ok(inner) = serde_json::from_str::<Value>(text) {
            if inner.is_object() || inner.is_array() {
                return inner;
            }
        }
    }
    value
}

/// A stored JSON text column that failed to decode.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct FieldDiagnostic {
    pub field: String,
    pub raw: String,
}

/// Collects decode failures for one record so the read still succeeds.
#[derive(Debug, Default)]
pub struct Diagnostics {
    entries: Vec<FieldDiagnostic>,
}

impl Diagnostics {
    /// Unwraps `decoded`, recording and logging the raw text when malformed.
    pub fn take<T>(&mut self, owner: &str, field: &str, decoded: Decoded<T>) -> T {
        if let Some(raw) = decoded.malformed {
            warn!(
                record = %owner,
                field = %field,
                raw = %raw,
                "Stored JSON text failed to decode, using default"
            );
            self.entries.push(FieldDiagnostic {
                field: field.to_string(),
                raw,
            });
        }
        decoded.value
    }

    pub fn into_vec(self) -> Vec<FieldDiagnostic> {
        self.entries
    }
}

/// Request field wrapper that runs [`normalize`] during deserialization.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Lenient<T>(pub T);

impl<T> Lenient<T> {
    pub fn into_inner(self) -> T {
        self.0
    }
}

impl<'de, T: DeserializeOwned> Deserialize<'de> for Lenient<T> {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = Value::deserialize(deserializer)?;
        normalize(value)
            .map(Lenient)
            .map_err(serde::de::Error::custom)
    }
}

impl<T: Serialize> Serialize for Lenient<T> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.0.serialize(serializer)
    }
}
