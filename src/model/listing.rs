//! Parsing listing-endpoint responses into records.

use serde_json::Value;

use super::Entity;
use crate::error::ResolverError;

/// Envelope keys that may hold the record array of a paginated response.
const ENVELOPE_KEYS: &[&str] = &["data", "results", "items"];

/// Parse a listing response body.
///
/// Accepts a bare JSON array or an object wrapping the array under `data`,
/// `results` or `items` (first found wins). Array items that are not
/// objects are skipped.
pub fn parse_listing(bytes: &[u8]) -> Result<Vec<Entity>, ResolverError> {
    let value: Value = serde_json::from_slice(bytes)?;
    listing_from_value(value)
}

/// Same as [`parse_listing`], for an already-decoded value.
pub fn listing_from_value(value: Value) -> Result<Vec<Entity>, ResolverError> {
    let items = match value {
        Value::Array(items) => items,
        Value::Object(mut obj) => {
            let key = ENVELOPE_KEYS
                .iter()
                .find(|key| obj.get(**key).is_some_and(Value::is_array))
                .ok_or_else(|| {
                    ResolverError::invalid_listing(format!(
                        "expected an array or an object with one of {:?}",
                        ENVELOPE_KEYS
                    ))
                })?;
            match obj.remove(*key) {
                Some(Value::Array(items)) => items,
                _ => Vec::new(),
            }
        }
        other => {
            return Err(ResolverError::invalid_listing(format!(
                "expected an array, found {}",
                json_type_name(&other)
            )));
        }
    };

    let total = items.len();
    let entities: Vec<Entity> = items.into_iter().filter_map(Entity::from_value).collect();
    if entities.len() != total {
        tracing::trace!(
            "[LISTING] skipped {} non-object item(s) of {}",
            total - entities.len(),
            total
        );
    }
    Ok(entities)
}

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
