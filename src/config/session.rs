//! The user's current selection, persisted between runs.

use serde::{Deserialize, Serialize};

use crate::base::{EntityId, EntityKind};
use crate::filter::EntityFilters;

/// Selected record at each level plus the free-text filters.
///
/// Selecting a level clears every level below it, so the session never
/// points at a block from a building that is no longer selected.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Session {
    pub selected_mtk: Option<EntityId>,
    pub selected_complex: Option<EntityId>,
    pub selected_building: Option<EntityId>,
    pub selected_block: Option<EntityId>,
    pub selected_property: Option<EntityId>,
    pub search: Option<String>,
    pub status: Option<String>,
}

/// Selectable levels, top-down.
const LEVELS: [EntityKind; 5] = [
    EntityKind::Mtk,
    EntityKind::Complex,
    EntityKind::Building,
    EntityKind::Block,
    EntityKind::Property,
];

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    fn slot_mut(&mut self, kind: EntityKind) -> Option<&mut Option<EntityId>> {
        match kind {
            EntityKind::Mtk => Some(&mut self.selected_mtk),
            EntityKind::Complex => Some(&mut self.selected_complex),
            EntityKind::Building => Some(&mut self.selected_building),
            EntityKind::Block => Some(&mut self.selected_block),
            EntityKind::Property => Some(&mut self.selected_property),
            EntityKind::Resident => None,
        }
    }

    pub fn selected(&self, kind: EntityKind) -> Option<&EntityId> {
        match kind {
            EntityKind::Mtk => self.selected_mtk.as_ref(),
            EntityKind::Complex => self.selected_complex.as_ref(),
            EntityKind::Building => self.selected_building.as_ref(),
            EntityKind::Block => self.selected_block.as_ref(),
            EntityKind::Property => self.selected_property.as_ref(),
            EntityKind::Resident => None,
        }
    }

    /// Select a record at `kind` and clear every deeper level.
    pub fn select(&mut self, kind: EntityKind, id: impl Into<EntityId>) {
        self.clear(kind);
        if let Some(slot) = self.slot_mut(kind) {
            *slot = Some(id.into());
        }
    }

    /// Clear `kind` and every deeper level.
    pub fn clear(&mut self, kind: EntityKind) {
        let Some(start) = LEVELS.iter().position(|level| *level == kind) else {
            return;
        };
        for level in &LEVELS[start..] {
            if let Some(slot) = self.slot_mut(*level) {
                *slot = None;
            }
        }
    }

    /// Filter state for listing pages.
    pub fn filters(&self) -> EntityFilters {
        EntityFilters {
            mtk_id: self.selected_mtk.clone(),
            complex_id: self.selected_complex.clone(),
            building_id: self.selected_building.clone(),
            block_id: self.selected_block.clone(),
            search: self.search.clone(),
            status: self.status.clone(),
        }
    }
}
