//! Pure reducer over [`EntityStore`].

use super::EntityStore;
use crate::base::{EntityId, EntityKind};
use crate::model::Entity;
use crate::normalize::normalize_list;

/// A change to the store.
#[derive(Clone, Debug, PartialEq)]
pub enum StoreAction {
    /// Replace a whole collection with a freshly loaded listing.
    SetList { kind: EntityKind, items: Vec<Entity> },
    /// Insert or replace one record after a create/update call.
    Upsert { kind: EntityKind, entity: Entity },
    /// Drop one record after a delete call.
    Remove { kind: EntityKind, id: EntityId },
    /// Empty every collection.
    Clear,
}

/// Apply an action, returning the next store.
///
/// The input store is never modified.
pub fn reduce(store: &EntityStore, action: StoreAction) -> EntityStore {
    match action {
        StoreAction::SetList { kind, items } => {
            let mut next = store.clone();
            *next.collection_mut(kind) = normalize_list(items);
            tracing::debug!(
                "[STORE] {} reloaded with {} record(s)",
                kind.collection_name(),
                next.collection(kind).len()
            );
            next
        }
        StoreAction::Upsert { kind, entity } => {
            let mut next = store.clone();
            next.collection_mut(kind).upsert(entity);
            next
        }
        StoreAction::Remove { kind, id } => {
            let mut next = store.clone();
            if next.collection_mut(kind).remove(&id).is_none() {
                tracing::trace!("[STORE] remove: {} {} not found", kind, id);
            }
            next
        }
        StoreAction::Clear => EntityStore::new(),
    }
}
