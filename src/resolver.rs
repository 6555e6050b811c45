//! Query-time entry point binding a store to a [`ResolverConfig`].

use crate::base::{EntityId, RelationKind};
use crate::config::ResolverConfig;
use crate::model::Entity;
use crate::resolve::{
    RelationshipChain, Resolution, build_relationship_chain, relationship_label,
    resolve_relationship, resolve_relationship_in,
};
use crate::store::EntityStore;
use crate::validate::{ChainRepair, fix_chain_from};

/// One level of an entity's displayed ancestry.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LineageEntry {
    pub kind: RelationKind,
    pub id: EntityId,
    pub label: String,
}

/// Resolver provides relationship lookups over one store.
///
/// All resolution logic lives in [`crate::resolve`] and [`crate::validate`];
/// this type only applies the configured policy.
pub struct Resolver<'a> {
    store: &'a EntityStore,
    config: &'a ResolverConfig,
}

impl<'a> Resolver<'a> {
    pub fn new(store: &'a EntityStore, config: &'a ResolverConfig) -> Self {
        Self { store, config }
    }

    pub fn store(&self) -> &EntityStore {
        self.store
    }

    pub fn config(&self) -> &ResolverConfig {
        self.config
    }

    /// Resolve one relationship, using the name fallback if enabled.
    pub fn resolve(&self, entity: &Entity, kind: RelationKind) -> Option<Resolution> {
        if self.config.name_fallback {
            resolve_relationship_in(entity, kind, self.store)
        } else {
            resolve_relationship(entity, kind)
        }
    }

    /// The entity's chain as the record states it, with name-matched gaps
    /// filled when the fallback is enabled.
    pub fn chain(&self, entity: &Entity) -> RelationshipChain {
        let mut chain = build_relationship_chain(entity);
        if self.config.name_fallback {
            for kind in RelationKind::CHAIN {
                if let Some(slot) = chain.slot_mut(kind).filter(|slot| slot.is_none()) {
                    *slot = resolve_relationship_in(entity, kind, self.store).map(|r| r.id);
                }
            }
        }
        chain
    }

    /// Reconcile [`Resolver::chain`] with the store.
    pub fn fix_chain(&self, entity: &Entity) -> ChainRepair {
        fix_chain_from(self.chain(entity), self.store)
    }

    /// Display label for one parent.
    pub fn label(&self, entity: &Entity, kind: RelationKind) -> String {
        relationship_label(entity, kind, self.store, Some(&self.config.placeholder))
    }

    /// Labelled ancestry, top-down, for every populated level.
    ///
    /// Labels come from the stored parent records, falling back to `#<id>`.
    pub fn lineage(&self, entity: &Entity) -> Vec<LineageEntry> {
        let chain = if self.config.repair_chains {
            self.fix_chain(entity).chain
        } else {
            self.chain(entity)
        };
        chain
            .iter()
            .map(|(kind, id)| LineageEntry {
                kind,
                id: id.clone(),
                label: self
                    .store
                    .get(kind.target(), id)
                    .and_then(Entity::name)
                    .filter(|name| !name.trim().is_empty())
                    .map(str::to_string)
                    .unwrap_or_else(|| format!("#{}", id)),
            })
            .collect()
    }
}

/// Labelled ancestry with the default configuration.
pub fn lineage_labels(entity: &Entity, store: &EntityStore) -> Vec<LineageEntry> {
    Resolver::new(store, &ResolverConfig::default()).lineage(entity)
}
