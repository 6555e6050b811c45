//! Entity identifiers.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use smol_str::SmolStr;
use std::fmt;

/// Identifier of a record in any collection.
///
/// Backends hand out ids as JSON numbers or strings, sometimes both for the
/// same record (`"id": 10` next to `"building_id": "10"`). Integral values
/// and canonical decimal strings both become [`EntityId::Int`], so those two
/// compare equal. Everything else that is a string stays [`EntityId::Str`].
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(untagged)]
pub enum EntityId {
    Int(i64),
    Str(SmolStr),
}

impl EntityId {
    /// Read an id from a JSON value.
    ///
    /// Returns `None` for `null`, booleans, arrays, objects and non-integral
    /// numbers. Integral values beyond `i64` become [`EntityId::Str`] with
    /// their decimal digits. `0` and `""` are returned as ids; see
    /// [`EntityId::is_truthy`].
    pub fn from_value(value: &Value) -> Option<Self> {
        match value {
            Value::Number(n) => {
                if let Some(i) = n.as_i64() {
                    Some(Self::Int(i))
                } else if let Some(u) = n.as_u64() {
                    Some(Self::Str(SmolStr::new(u.to_string())))
                } else {
                    n.as_f64()
                        .filter(|f| f.is_finite() && f.fract() == 0.0)
                        .map(|f| {
                            if f.abs() < i64::MAX as f64 {
                                Self::Int(f as i64)
                            } else {
                                Self::Str(SmolStr::new(f.to_string()))
                            }
                        })
                }
            }
            Value::String(s) => Some(Self::from(s.as_str())),
            _ => None,
        }
    }

    /// Convert back to the JSON shape used by the backend.
    pub fn to_value(&self) -> Value {
        match self {
            Self::Int(i) => Value::from(*i),
            Self::Str(s) => Value::from(s.as_str()),
        }
    }

    /// `false` for `0` and the empty string.
    ///
    /// Listings use truthiness to decide whether a record has an id at all.
    pub fn is_truthy(&self) -> bool {
        match self {
            Self::Int(i) => *i != 0,
            Self::Str(s) => !s.is_empty(),
        }
    }

    pub fn as_int(&self) -> Option<i64> {
        match self {
            Self::Int(i) => Some(*i),
            Self::Str(_) => None,
        }
    }
}

impl<'de> Deserialize<'de> for EntityId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = Value::deserialize(deserializer)?;
        Self::from_value(&value).ok_or_else(|| {
            serde::de::Error::custom(format!("expected an integer or string id, found {}", value))
        })
    }
}

impl fmt::Display for EntityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Int(i) => write!(f, "{}", i),
            Self::Str(s) => f.write_str(s),
        }
    }
}

impl From<i64> for EntityId {
    fn from(i: i64) -> Self {
        Self::Int(i)
    }
}

impl From<i32> for EntityId {
    fn from(i: i32) -> Self {
        Self::Int(i64::from(i))
    }
}

impl From<u32> for EntityId {
    fn from(i: u32) -> Self {
        Self::Int(i64::from(i))
    }
}

impl From<&str> for EntityId {
    fn from(s: &str) -> Self {
        match s.parse::<i64>() {
            Ok(i) if i.to_string() == s => Self::Int(i),
            _ => Self::Str(SmolStr::new(s)),
        }
    }
}

impl From<String> for EntityId {
    fn from(s: String) -> Self {
        Self::from(s.as_str())
    }
}
