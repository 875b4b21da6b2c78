//! Data models for the Wobble API.
//!
//! These types mirror the JSON objects the server returns. Integer 0/1 flags
//! on the wire are exposed as `bool`.

mod notification;
mod topic;
mod user;

pub use notification::*;
pub use topic::*;
pub use user::*;

/// Serde adapter for the server's integer flags (`0`/`1`).
///
/// Accepts a JSON bool as well, always writes an integer.
pub(crate) mod flag {
    use serde::{Deserialize, Deserializer, Serializer};

    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Int(i64),
        Bool(bool),
    }

    pub fn serialize<S: Serializer>(value: &bool, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_u8(u8::from(*value))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<bool, D::Error> {
        Ok(match Raw::deserialize(deserializer)? {
            Raw::Int(n) => n != 0,
            Raw::Bool(b) => b,
        })
    }

    /// Wire value for a flag parameter.
    pub fn to_param(value: bool) -> serde_json::Value {
        serde_json::Value::from(u8::from(value))
    }
}

/// Serde adapter for counters the server may send as floats (`4.0`).
///
/// Fractional values are rejected; writes an integer.
pub(crate) mod whole_number {
    use serde::de::Error;
    use serde::{Deserialize, Deserializer, Serializer};

    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Int(i64),
        Float(f64),
    }

    pub fn serialize<S: Serializer>(value: &i64, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_i64(*value)
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<i64, D::Error> {
        match Raw::deserialize(deserializer)? {
            Raw::Int(n) => Ok(n),
            Raw::Float(f) if f.fract() == 0.0 && f.abs() < i64::MAX as f64 => Ok(f as i64),
            Raw::Float(f) => Err(D::Error::custom(format!("expected a whole number, got {}", f))),
        }
    }
}
