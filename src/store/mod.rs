//! Normalized entity store and its reducer.
//!
//! The store is a plain value. Changes go through [`reduce`], which returns
//! a new store and leaves the old one untouched, so a caller can swap the
//! whole thing at once (see [`crate::shared::SharedStore`]).

mod reducer;

pub use reducer::{StoreAction, reduce};

use indexmap::IndexMap;

use crate::base::{EntityId, EntityKind};
use crate::model::Entity;
use crate::normalize::{NormalizedList, normalize_list};

/// One normalized collection per entity level.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct EntityStore {
    pub mtks: NormalizedList,
    pub complexes: NormalizedList,
    pub buildings: NormalizedList,
    pub blocks: NormalizedList,
    pub properties: NormalizedList,
    pub residents: NormalizedList,
}

impl EntityStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a store from named raw listings.
    ///
    /// Names are matched with [`EntityKind::parse_collection`]; unknown
    /// collections are skipped.
    pub fn from_lists<K, I, L>(lists: I) -> Self
    where
        K: AsRef<str>,
        I: IntoIterator<Item = (K, L)>,
        L: IntoIterator<Item = Entity>,
    {
        let mut store = Self::new();
        for (name, list) in lists {
            match EntityKind::parse_collection(name.as_ref()) {
                Some(kind) => *store.collection_mut(kind) = normalize_list(list),
                None => tracing::debug!("[STORE] ignoring unknown collection '{}'", name.as_ref()),
            }
        }
        store
    }

    /// Build a store from lists normalized elsewhere.
    pub fn from_normalized<K: AsRef<str>>(lists: IndexMap<K, NormalizedList>) -> Self {
        let mut store = Self::new();
        for (name, list) in lists {
            match EntityKind::parse_collection(name.as_ref()) {
                Some(kind) => *store.collection_mut(kind) = list,
                None => tracing::debug!("[STORE] ignoring unknown collection '{}'", name.as_ref()),
            }
        }
        store
    }

    /// Builder-style collection replacement.
    pub fn with_collection(mut self, kind: EntityKind, list: NormalizedList) -> Self {
        *self.collection_mut(kind) = list;
        self
    }

    pub fn collection(&self, kind: EntityKind) -> &NormalizedList {
        match kind {
            EntityKind::Mtk => &self.mtks,
            EntityKind::Complex => &self.complexes,
            EntityKind::Building => &self.buildings,
            EntityKind::Block => &self.blocks,
            EntityKind::Property => &self.properties,
            EntityKind::Resident => &self.residents,
        }
    }

    pub fn collection_mut(&mut self, kind: EntityKind) -> &mut NormalizedList {
        match kind {
            EntityKind::Mtk => &mut self.mtks,
            EntityKind::Complex => &mut self.complexes,
            EntityKind::Building => &mut self.buildings,
            EntityKind::Block => &mut self.blocks,
            EntityKind::Property => &mut self.properties,
            EntityKind::Resident => &mut self.residents,
        }
    }

    /// Look up a record by level and id.
    pub fn get(&self, kind: EntityKind, id: &EntityId) -> Option<&Entity> {
        self.collection(kind).get(id)
    }

    /// Total number of listed ids across all collections.
    pub fn len(&self) -> usize {
        EntityKind::ALL
            .iter()
            .map(|kind| self.collection(*kind).len())
            .sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
