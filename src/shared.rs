//! Shared store handle with whole-snapshot swaps.
//!
//! Readers take an `Arc` to the current [`StoreSnapshot`] and keep using it
//! for as long as they like. Writers build the next store and its indices
//! under an upgradable read, so readers are only blocked for the swap
//! itself, and publish both at once. Nobody ever sees an index that does
//! not match its store.

use parking_lot::{RwLock, RwLockUpgradableReadGuard};
use std::sync::Arc;

use crate::index::{IndexedMaps, build_indexed_maps};
use crate::store::{EntityStore, StoreAction, reduce};

/// An immutable store plus the indices derived from it.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct StoreSnapshot {
    pub store: EntityStore,
    pub maps: IndexedMaps,
}

impl StoreSnapshot {
    pub fn new(store: EntityStore) -> Self {
        let maps = build_indexed_maps(&store);
        Self { store, maps }
    }
}

/// Thread-safe holder of the current snapshot.
#[derive(Debug, Default)]
pub struct SharedStore {
    current: RwLock<Arc<StoreSnapshot>>,
}

impl SharedStore {
    pub fn new(store: EntityStore) -> Self {
        Self {
            current: RwLock::new(Arc::new(StoreSnapshot::new(store))),
        }
    }

    /// The current snapshot.
    pub fn snapshot(&self) -> Arc<StoreSnapshot> {
        Arc::clone(&self.current.read())
    }

    /// Apply an action and publish the result. Returns the new snapshot.
    ///
    /// Concurrent dispatches are serialized: only one upgradable guard is
    /// held at a time, so no action is computed against a stale store.
    pub fn dispatch(&self, action: StoreAction) -> Arc<StoreSnapshot> {
        let current = self.current.upgradable_read();
        let next = Arc::new(StoreSnapshot::new(reduce(&current.store, action)));
        *RwLockUpgradableReadGuard::upgrade(current) = Arc::clone(&next);
        next
    }

    /// Replace the whole store.
    pub fn replace(&self, store: EntityStore) -> Arc<StoreSnapshot> {
        let next = Arc::new(StoreSnapshot::new(store));
        *self.current.write() = Arc::clone(&next);
        next
    }
}
