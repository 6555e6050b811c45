//! Human-readable labels for an entity's parents.

use super::strategy::{extract_relationship_id, name_hints};
use crate::base::RelationKind;
use crate::model::Entity;
use crate::store::EntityStore;

/// Placeholder shown when nothing at all is known about a parent.
pub const DEFAULT_PLACEHOLDER: &str = "—";

/// Label for the `kind` parent of `entity`.
///
/// Uses the first name the record carries (snapshot, flat, embedded), then
/// `"#<id>"` if only the id is known, then `fallback` (default `"—"`).
pub fn get_relationship_name(entity: &Entity, kind: RelationKind, fallback: Option<&str>) -> String {
    if let Some(name) = name_hints(entity, kind).next() {
        return name.to_string();
    }
    if let Some(id) = extract_relationship_id(entity, kind) {
        return format!("#{}", id);
    }
    fallback.unwrap_or(DEFAULT_PLACEHOLDER).to_string()
}

/// Like [`get_relationship_name`], but consults the store before giving up
/// on a name: the parent record's own `name` is used ahead of `"#<id>"`.
pub fn relationship_label(
    entity: &Entity,
    kind: RelationKind,
    store: &EntityStore,
    fallback: Option<&str>,
) -> String {
    if let Some(name) = name_hints(entity, kind).next() {
        return name.to_string();
    }
    let Some(id) = extract_relationship_id(entity, kind) else {
        return fallback.unwrap_or(DEFAULT_PLACEHOLDER).to_string();
    };
    store
        .get(kind.target(), &id)
        .and_then(Entity::name)
        .filter(|name| !name.trim().is_empty())
        .map(str::to_string)
        .unwrap_or_else(|| format!("#{}", id))
}
