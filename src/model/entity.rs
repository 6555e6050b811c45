//! Dynamic-shape entity records.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::base::EntityId;

/// A record as returned by a listing endpoint.
///
/// Records are JSON objects whose shape varies between endpoints and
/// backend versions, so the fields are kept as-is and read through
/// accessors. Nothing here requires a field to exist.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Entity(Map<String, Value>);

impl Entity {
    /// Create an empty record.
    pub fn new() -> Self {
        Self::default()
    }

    /// Wrap a JSON value. Returns `None` unless it is an object.
    pub fn from_value(value: Value) -> Option<Self> {
        match value {
            Value::Object(map) => Some(Self(map)),
            _ => None,
        }
    }

    /// The record's own id, if it has one that parses.
    pub fn id(&self) -> Option<EntityId> {
        self.0.get("id").and_then(EntityId::from_value)
    }

    /// The record's display name.
    pub fn name(&self) -> Option<&str> {
        self.get_str("name")
    }

    pub fn status(&self) -> Option<&str> {
        self.get_str("status")
    }

    /// Get a top-level field.
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    /// Get a top-level field, treating JSON `null` as absent.
    pub fn get_present(&self, key: &str) -> Option<&Value> {
        self.0.get(key).filter(|v| !v.is_null())
    }

    /// Get a top-level string field.
    pub fn get_str(&self, key: &str) -> Option<&str> {
        self.0.get(key).and_then(Value::as_str)
    }

    /// Follow a dotted path (`"sub_data.complex.id"`) through nested objects.
    ///
    /// Returns `None` as soon as a segment is missing or not an object.
    /// A `null` leaf is returned as `None` too.
    pub fn get_path(&self, path: &str) -> Option<&Value> {
        let mut segments = path.split('.');
        let mut current = self.0.get(segments.next()?)?;
        for segment in segments {
            current = current.as_object()?.get(segment)?;
        }
        (!current.is_null()).then_some(current)
    }

    /// Get an embedded object field.
    pub fn get_object(&self, key: &str) -> Option<&Map<String, Value>> {
        self.0.get(key).and_then(Value::as_object)
    }

    /// Set a top-level field.
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<Value>) {
        self.0.insert(key.into(), value.into());
    }

    /// Builder-style [`Entity::set`].
    pub fn with(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.set(key, value);
        self
    }

    /// Set the record id.
    pub fn with_id(self, id: impl Into<EntityId>) -> Self {
        let id = id.into();
        self.with("id", id.to_value())
    }

    /// Set the record name.
    pub fn with_name(self, name: impl Into<String>) -> Self {
        self.with("name", name.into())
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    pub fn as_map(&self) -> &Map<String, Value> {
        &self.0
    }

    pub fn into_value(self) -> Value {
        Value::Object(self.0)
    }
}

impl From<Map<String, Value>> for Entity {
    fn from(map: Map<String, Value>) -> Self {
        Self(map)
    }
}
