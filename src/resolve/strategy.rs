//! Ordered resolution strategies for a single relationship.

use serde_json::Value;

use crate::base::{EntityId, RelationKind};
use crate::model::Entity;
use crate::store::EntityStore;

/// Where a resolved parent id came from, in decreasing authority.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum RelationSource {
    /// `sub_data.<kind>.id`, the snapshot the backend attaches at read time.
    SubData,
    /// The flat `<kind>_id` foreign key.
    ForeignKey,
    /// An embedded object, identified by the dotted path that matched.
    Embedded(&'static str),
    /// Last resort: a parent in the store whose name matches the hint.
    NameMatch,
}

/// A resolved parent id and the strategy that produced it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Resolution {
    pub id: EntityId,
    pub source: RelationSource,
}

impl Resolution {
    pub fn new(id: EntityId, source: RelationSource) -> Self {
        Self { id, source }
    }
}

/// Resolve a relationship from the record alone.
///
/// Tries `sub_data`, then the flat foreign key, then the kind's embedded
/// paths. The first hit wins; sources are never merged. `null` counts as
/// absent, `0` does not.
pub fn resolve_relationship(entity: &Entity, kind: RelationKind) -> Option<Resolution> {
    from_sub_data(entity, kind)
        .map(|id| Resolution::new(id, RelationSource::SubData))
        .or_else(|| {
            from_foreign_key(entity, kind).map(|id| Resolution::new(id, RelationSource::ForeignKey))
        })
        .or_else(|| from_embedded(entity, kind))
}

/// [`resolve_relationship`], falling back to a name match against `store`.
pub fn resolve_relationship_in(
    entity: &Entity,
    kind: RelationKind,
    store: &EntityStore,
) -> Option<Resolution> {
    resolve_relationship(entity, kind).or_else(|| {
        let (hint, id) = name_hints(entity, kind)
            .find_map(|hint| match_by_name(store, kind, hint).map(|id| (hint, id)))?;
        tracing::trace!(
            "[RESOLVE] {} of {:?} resolved by name '{}' -> {}",
            kind,
            entity.id(),
            hint,
            id
        );
        Some(Resolution::new(id, RelationSource::NameMatch))
    })
}

/// Best-known parent id for `kind`, or `None`.
pub fn extract_relationship_id(entity: &Entity, kind: RelationKind) -> Option<EntityId> {
    resolve_relationship(entity, kind).map(|resolution| resolution.id)
}

fn sub_data_field<'a>(entity: &'a Entity, kind: RelationKind, key: &str) -> Option<&'a Value> {
    entity
        .get_object("sub_data")?
        .get(kind.as_str())?
        .as_object()?
        .get(key)
        .filter(|v| !v.is_null())
}

fn from_sub_data(entity: &Entity, kind: RelationKind) -> Option<EntityId> {
    sub_data_field(entity, kind, "id").and_then(EntityId::from_value)
}

fn from_foreign_key(entity: &Entity, kind: RelationKind) -> Option<EntityId> {
    entity
        .get_present(kind.foreign_key())
        .and_then(EntityId::from_value)
}

fn from_embedded(entity: &Entity, kind: RelationKind) -> Option<Resolution> {
    kind.embedded_paths().iter().find_map(|path| {
        entity
            .get_path(path)
            .and_then(EntityId::from_value)
            .map(|id| Resolution::new(id, RelationSource::Embedded(*path)))
    })
}

fn non_empty_str(value: Option<&Value>) -> Option<&str> {
    value.and_then(Value::as_str).filter(|s| !s.trim().is_empty())
}

fn embedded_name<'a>(entity: &'a Entity, field: &str) -> Option<&'a str> {
    non_empty_str(entity.get_object(field).and_then(|obj| obj.get("name")))
}

/// Parent names the record carries for `kind`, in the extractor's order:
/// `sub_data.<kind>.name`, `<kind>_name`, then `name` inside each embedded
/// object.
pub fn name_hints(entity: &Entity, kind: RelationKind) -> impl Iterator<Item = &str> {
    let sub_data = non_empty_str(sub_data_field(entity, kind, "name"));
    let flat = non_empty_str(entity.get(kind.name_field()));
    let embedded = kind
        .embedded_fields()
        .iter()
        .filter_map(move |field| embedded_name(entity, field));
    sub_data.into_iter().chain(flat).chain(embedded)
}

/// First record of the parent collection whose name matches, in store order.
///
/// Names are compared trimmed and case-insensitively. When several records
/// share the name, the first listed one wins.
pub fn match_by_name(store: &EntityStore, kind: RelationKind, name: &str) -> Option<EntityId> {
    let wanted = name.trim().to_lowercase();
    if wanted.is_empty() {
        return None;
    }
    store
        .collection(kind.target())
        .iter()
        .find(|(_, record)| {
            record
                .name()
                .is_some_and(|candidate| candidate.trim().to_lowercase() == wanted)
        })
        .map(|(id, _)| id.clone())
}
