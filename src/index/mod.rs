//! Index builder: ancestor id → child ids, for every pair a cascading
//! filter needs.
//!
//! Indices are derived from an [`EntityStore`] and never edited in place.
//! Rebuild them whenever the store changes.

use indexmap::IndexMap;
use serde::Serialize;

use crate::base::{EntityId, EntityKind, RelationKind};
use crate::normalize::NormalizedList;
use crate::resolve::extract_relationship_id;
use crate::store::EntityStore;

/// Map from a parent id to the ids of its children, in store order.
pub type IdIndex = IndexMap<EntityId, Vec<EntityId>>;

/// All lookup indices over one store.
///
/// Serializes with camelCase field names and ids as object keys, in the
/// shape the listing pages consume.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct IndexedMaps {
    pub complex_ids_by_mtk_id: IdIndex,

    pub building_ids_by_complex_id: IdIndex,
    pub building_ids_by_mtk_id: IdIndex,

    pub block_ids_by_building_id: IdIndex,
    pub block_ids_by_complex_id: IdIndex,
    pub block_ids_by_mtk_id: IdIndex,

    pub property_ids_by_block_id: IdIndex,
    pub property_ids_by_building_id: IdIndex,
    pub property_ids_by_complex_id: IdIndex,
    pub property_ids_by_mtk_id: IdIndex,

    pub resident_ids_by_property_id: IdIndex,
}

impl IndexedMaps {
    /// The index of `child` records by their `parent`, if that pair is indexed.
    pub fn index(&self, child: EntityKind, parent: RelationKind) -> Option<&IdIndex> {
        use EntityKind as E;
        use RelationKind as R;
        match (child, parent) {
            (E::Complex, R::Mtk) => Some(&self.complex_ids_by_mtk_id),
            (E::Building, R::Complex) => Some(&self.building_ids_by_complex_id),
            (E::Building, R::Mtk) => Some(&self.building_ids_by_mtk_id),
            (E::Block, R::Building) => Some(&self.block_ids_by_building_id),
            (E::Block, R::Complex) => Some(&self.block_ids_by_complex_id),
            (E::Block, R::Mtk) => Some(&self.block_ids_by_mtk_id),
            (E::Property, R::Block) => Some(&self.property_ids_by_block_id),
            (E::Property, R::Building) => Some(&self.property_ids_by_building_id),
            (E::Property, R::Complex) => Some(&self.property_ids_by_complex_id),
            (E::Property, R::Mtk) => Some(&self.property_ids_by_mtk_id),
            (E::Resident, R::Property) => Some(&self.resident_ids_by_property_id),
            _ => None,
        }
    }

    fn index_mut(&mut self, child: EntityKind, parent: RelationKind) -> Option<&mut IdIndex> {
        use EntityKind as E;
        use RelationKind as R;
        match (child, parent) {
            (E::Complex, R::Mtk) => Some(&mut self.complex_ids_by_mtk_id),
            (E::Building, R::Complex) => Some(&mut self.building_ids_by_complex_id),
            (E::Building, R::Mtk) => Some(&mut self.building_ids_by_mtk_id),
            (E::Block, R::Building) => Some(&mut self.block_ids_by_building_id),
            (E::Block, R::Complex) => Some(&mut self.block_ids_by_complex_id),
            (E::Block, R::Mtk) => Some(&mut self.block_ids_by_mtk_id),
            (E::Property, R::Block) => Some(&mut self.property_ids_by_block_id),
            (E::Property, R::Building) => Some(&mut self.property_ids_by_building_id),
            (E::Property, R::Complex) => Some(&mut self.property_ids_by_complex_id),
            (E::Property, R::Mtk) => Some(&mut self.property_ids_by_mtk_id),
            (E::Resident, R::Property) => Some(&mut self.resident_ids_by_property_id),
            _ => None,
        }
    }

    /// Ids of `child` records under `parent_id`. Empty if the pair is not
    /// indexed or the parent has no children.
    pub fn children(
        &self,
        child: EntityKind,
        parent: RelationKind,
        parent_id: &EntityId,
    ) -> &[EntityId] {
        self.index(child, parent)
            .and_then(|index| index.get(parent_id))
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }
}

/// Build every index from the store.
///
/// Each collection is walked once in listing order. For each record, the
/// extractor runs once per indexed ancestor and the record's id is appended
/// to that ancestor's bucket. Buckets are created on first use and nothing
/// is de-duplicated, so the same store always yields the same maps.
pub fn build_indexed_maps(store: &EntityStore) -> IndexedMaps {
    let mut maps = IndexedMaps::default();
    for kind in EntityKind::ALL {
        index_collection(&mut maps, kind, store.collection(kind));
    }
    tracing::debug!(
        "[INDEX] built indices over {} record(s): {} mtk bucket(s), {} block bucket(s)",
        store.len(),
        maps.complex_ids_by_mtk_id.len(),
        maps.property_ids_by_block_id.len()
    );
    maps
}

fn index_collection(maps: &mut IndexedMaps, kind: EntityKind, list: &NormalizedList) {
    for (id, entity) in list.iter() {
        for &parent in kind.ancestors() {
            let Some(parent_id) = extract_relationship_id(entity, parent) else {
                continue;
            };
            if let Some(index) = maps.index_mut(kind, parent) {
                index.entry(parent_id).or_default().push(id.clone());
            }
        }
    }
}
