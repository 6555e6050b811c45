//! Normalizer: listings into keyed maps plus ordered ids.
//!
//! ```text
//! [{id: 1, ..}, {id: 2, ..}]  →  NormalizedList { entities: {1: .., 2: ..}, ids: [1, 2] }
//! ```

use indexmap::IndexMap;
use rustc_hash::FxHashMap;
use std::hash::Hash;

use crate::base::EntityId;
use crate::model::Entity;

/// A normalized collection.
///
/// `entities` has no order of its own; `ids` keeps the order records were
/// listed in.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct NormalizedList {
    entities: FxHashMap<EntityId, Entity>,
    ids: Vec<EntityId>,
}

impl NormalizedList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, id: &EntityId) -> Option<&Entity> {
        self.entities.get(id)
    }

    pub fn contains(&self, id: &EntityId) -> bool {
        self.entities.contains_key(id)
    }

    /// Ids in listing order.
    pub fn ids(&self) -> &[EntityId] {
        &self.ids
    }

    pub fn entities(&self) -> &FxHashMap<EntityId, Entity> {
        &self.entities
    }

    /// Records in listing order.
    pub fn iter(&self) -> impl Iterator<Item = (&EntityId, &Entity)> {
        self.ids
            .iter()
            .filter_map(|id| self.entities.get(id).map(|entity| (id, entity)))
    }

    /// Number of listed ids (duplicates included).
    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    /// Insert or replace a record.
    ///
    /// A new id is appended; an existing one keeps its position. Records
    /// without a truthy id are ignored and `false` is returned.
    pub fn upsert(&mut self, entity: Entity) -> bool {
        let Some(id) = entity.id().filter(EntityId::is_truthy) else {
            tracing::trace!("[NORMALIZE] upsert ignored: record has no id");
            return false;
        };
        if self.entities.insert(id.clone(), entity).is_none() {
            self.ids.push(id);
        }
        true
    }

    /// Remove a record and every listing of its id.
    pub fn remove(&mut self, id: &EntityId) -> Option<Entity> {
        let removed = self.entities.remove(id)?;
        self.ids.retain(|listed| listed != id);
        Some(removed)
    }
}

/// Normalize one listing.
///
/// Records without a truthy id (missing, `null`, `0`, `""`) are dropped
/// without error. A repeated id is listed again and its later record
/// replaces the earlier one.
pub fn normalize_list<I>(list: I) -> NormalizedList
where
    I: IntoIterator<Item = Entity>,
{
    let mut normalized = NormalizedList::new();
    let mut dropped = 0usize;

    for entity in list {
        let Some(id) = entity.id().filter(EntityId::is_truthy) else {
            dropped += 1;
            continue;
        };
        if normalized.entities.insert(id.clone(), entity).is_some() {
            tracing::trace!("[NORMALIZE] duplicate id {} in listing", id);
        }
        normalized.ids.push(id);
    }

    if dropped > 0 {
        tracing::trace!("[NORMALIZE] dropped {} record(s) without an id", dropped);
    }
    normalized
}

/// Normalize every named listing, keeping the collection order.
pub fn normalize_all_lists<K, I, L>(lists: I) -> IndexMap<K, NormalizedList>
where
    K: Hash + Eq,
    I: IntoIterator<Item = (K, L)>,
    L: IntoIterator<Item = Entity>,
{
    lists
        .into_iter()
        .map(|(name, list)| (name, normalize_list(list)))
        .collect()
}
