//! Filter state, empty-state messages and index-backed list filtering.

mod empty;

pub use empty::{EmptyState, get_empty_state_message};

use serde::{Deserialize, Serialize};

use crate::base::{EntityId, EntityKind, RelationKind};
use crate::index::IndexedMaps;
use crate::model::Entity;
use crate::store::EntityStore;

/// The filter bar of a listing page.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct EntityFilters {
    pub mtk_id: Option<EntityId>,
    pub complex_id: Option<EntityId>,
    pub building_id: Option<EntityId>,
    pub block_id: Option<EntityId>,
    pub search: Option<String>,
    pub status: Option<String>,
}

impl EntityFilters {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style: filter by an ancestor.
    pub fn with_parent(mut self, kind: RelationKind, id: impl Into<EntityId>) -> Self {
        let id = Some(id.into());
        match kind {
            RelationKind::Mtk => self.mtk_id = id,
            RelationKind::Complex => self.complex_id = id,
            RelationKind::Building => self.building_id = id,
            RelationKind::Block => self.block_id = id,
            RelationKind::Property => {}
        }
        self
    }

    pub fn with_search(mut self, search: impl Into<String>) -> Self {
        self.search = Some(search.into());
        self
    }

    pub fn with_status(mut self, status: impl Into<String>) -> Self {
        self.status = Some(status.into());
        self
    }

    /// The ancestor filter for `kind`, if set.
    pub fn parent(&self, kind: RelationKind) -> Option<&EntityId> {
        match kind {
            RelationKind::Mtk => self.mtk_id.as_ref(),
            RelationKind::Complex => self.complex_id.as_ref(),
            RelationKind::Building => self.building_id.as_ref(),
            RelationKind::Block => self.block_id.as_ref(),
            RelationKind::Property => None,
        }
    }

    /// Trimmed search text, if non-empty.
    pub fn search_term(&self) -> Option<&str> {
        self.search.as_deref().map(str::trim).filter(|s| !s.is_empty())
    }

    pub fn status_value(&self) -> Option<&str> {
        self.status.as_deref().filter(|s| !s.is_empty())
    }

    /// Whether any filter narrows the listing.
    pub fn is_active(&self) -> bool {
        RelationKind::CHAIN.iter().any(|kind| self.parent(*kind).is_some())
            || self.search_term().is_some()
            || self.status_value().is_some()
    }

    /// The most specific ancestor filter that applies to `kind`.
    pub fn narrowest_parent(&self, kind: EntityKind) -> Option<(RelationKind, &EntityId)> {
        kind.ancestors()
            .iter()
            .find_map(|parent| self.parent(*parent).map(|id| (*parent, id)))
    }
}

/// Choices for each level of a cascading select.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CascadeOptions {
    pub complexes: Vec<EntityId>,
    pub buildings: Vec<EntityId>,
    pub blocks: Vec<EntityId>,
}

/// Ids of `kind` under the narrowest applicable ancestor filter, or all ids.
fn candidates(
    store: &EntityStore,
    maps: &IndexedMaps,
    kind: EntityKind,
    filters: &EntityFilters,
) -> Vec<EntityId> {
    match filters.narrowest_parent(kind) {
        Some((parent, id)) => maps.children(kind, parent, id).to_vec(),
        None => store.collection(kind).ids().to_vec(),
    }
}

/// Options for the complex, building and block selects given the current
/// selection. Each level is narrowed by the most specific ancestor chosen.
pub fn cascade_options(
    store: &EntityStore,
    maps: &IndexedMaps,
    filters: &EntityFilters,
) -> CascadeOptions {
    CascadeOptions {
        complexes: candidates(store, maps, EntityKind::Complex, filters),
        buildings: candidates(store, maps, EntityKind::Building, filters),
        blocks: candidates(store, maps, EntityKind::Block, filters),
    }
}

fn matches_search(entity: &Entity, kind: EntityKind, needle: &str) -> bool {
    let contains = |text: &str| text.to_lowercase().contains(needle);
    if entity.name().is_some_and(contains) {
        return true;
    }
    if kind == EntityKind::Property {
        return match entity.get_path("meta.apartment_number") {
            Some(serde_json::Value::String(s)) => contains(s),
            Some(serde_json::Value::Number(n)) => contains(&n.to_string()),
            _ => false,
        };
    }
    false
}

/// Ids of `kind` that pass every active filter, in store order.
///
/// The narrowest ancestor filter picks the candidates through the indices;
/// coarser ancestor filters are implied by it and not re-checked. `search`
/// matches the name (and apartment number for properties) case-insensitively,
/// `status` must match exactly.
pub fn filter_entities(
    store: &EntityStore,
    maps: &IndexedMaps,
    kind: EntityKind,
    filters: &EntityFilters,
) -> Vec<EntityId> {
    let collection = store.collection(kind);
    let needle = filters.search_term().map(str::to_lowercase);
    let status = filters.status_value();

    candidates(store, maps, kind, filters)
        .into_iter()
        .filter(|id| {
            let Some(entity) = collection.get(id) else {
                return false;
            };
            if let Some(needle) = needle.as_deref() {
                if !matches_search(entity, kind, needle) {
                    return false;
                }
            }
            status.is_none_or(|wanted| entity.status() == Some(wanted))
        })
        .collect()
}
