//! The four-level ancestry of an entity.

use serde::{Deserialize, Serialize};

use super::strategy::extract_relationship_id;
use crate::base::{EntityId, RelationKind};
use crate::model::Entity;

/// An entity's ancestry: (mtkId, complexId, buildingId, blockId).
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RelationshipChain {
    pub mtk_id: Option<EntityId>,
    pub complex_id: Option<EntityId>,
    pub building_id: Option<EntityId>,
    pub block_id: Option<EntityId>,
}

impl RelationshipChain {
    /// The id stored for `kind`. Always `None` for [`RelationKind::Property`].
    pub fn get(&self, kind: RelationKind) -> Option<&EntityId> {
        match kind {
            RelationKind::Mtk => self.mtk_id.as_ref(),
            RelationKind::Complex => self.complex_id.as_ref(),
            RelationKind::Building => self.building_id.as_ref(),
            RelationKind::Block => self.block_id.as_ref(),
            RelationKind::Property => None,
        }
    }

    /// Mutable slot for `kind`; `None` for [`RelationKind::Property`].
    pub fn slot_mut(&mut self, kind: RelationKind) -> Option<&mut Option<EntityId>> {
        match kind {
            RelationKind::Mtk => Some(&mut self.mtk_id),
            RelationKind::Complex => Some(&mut self.complex_id),
            RelationKind::Building => Some(&mut self.building_id),
            RelationKind::Block => Some(&mut self.block_id),
            RelationKind::Property => None,
        }
    }

    /// Populated levels, top-down.
    pub fn iter(&self) -> impl Iterator<Item = (RelationKind, &EntityId)> {
        RelationKind::CHAIN
            .into_iter()
            .filter_map(|kind| self.get(kind).map(|id| (kind, id)))
    }

    /// The deepest populated level.
    pub fn most_specific(&self) -> Option<(RelationKind, &EntityId)> {
        self.iter().last()
    }

    pub fn is_empty(&self) -> bool {
        self.iter().next().is_none()
    }
}

/// Run the extractor for each of the four chain levels.
pub fn build_relationship_chain(entity: &Entity) -> RelationshipChain {
    RelationshipChain {
        mtk_id: extract_relationship_id(entity, RelationKind::Mtk),
        complex_id: extract_relationship_id(entity, RelationKind::Complex),
        building_id: extract_relationship_id(entity, RelationKind::Building),
        block_id: extract_relationship_id(entity, RelationKind::Block),
    }
}
