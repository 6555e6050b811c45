//! Bottom-up chain repair against the store.

use super::warning::ChainWarning;
use crate::base::RelationKind;
use crate::model::Entity;
use crate::resolve::{RelationshipChain, build_relationship_chain, extract_relationship_id};
use crate::store::EntityStore;

/// A repaired chain plus what was changed to get there.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ChainRepair {
    pub chain: RelationshipChain,
    pub warnings: Vec<ChainWarning>,
}

impl ChainRepair {
    pub fn has_warnings(&self) -> bool {
        !self.warnings.is_empty()
    }

    /// Warning texts, one per corrected field.
    pub fn messages(&self) -> Vec<String> {
        self.warnings.iter().map(ToString::to_string).collect()
    }
}

/// Each step: the stored level to look up, and the chain fields it vouches for.
const REPAIR_STEPS: &[(RelationKind, &[RelationKind])] = &[
    (RelationKind::Block, &[RelationKind::Building, RelationKind::Complex]),
    (RelationKind::Building, &[RelationKind::Complex, RelationKind::Mtk]),
    (RelationKind::Complex, &[RelationKind::Mtk]),
];

/// Reconcile an entity's chain with the stored parent records.
///
/// Starts at the block and works upward. At each level the stored record's
/// own parent ids win over the chain: a disagreement is corrected with a
/// warning, a gap is filled silently. A level already corrected below is
/// looked up by its corrected id. Ids missing from the store are skipped.
/// Never fails.
pub fn validate_and_fix_chain(entity: &Entity, store: &EntityStore) -> ChainRepair {
    fix_chain_from(build_relationship_chain(entity), store)
}

/// The repair walk of [`validate_and_fix_chain`] over a chain the caller
/// already built.
pub fn fix_chain_from(mut chain: RelationshipChain, store: &EntityStore) -> ChainRepair {
    let mut warnings = Vec::new();

    for (level, fields) in REPAIR_STEPS {
        let Some(level_id) = chain.get(*level).cloned() else {
            continue;
        };
        let level_kind = level.target();
        let Some(record) = store.get(level_kind, &level_id) else {
            tracing::trace!(
                "[CHAIN] {} {} not in store, skipping its checks",
                level_kind,
                level_id
            );
            continue;
        };

        for field in *fields {
            let Some(stored) = extract_relationship_id(record, *field) else {
                continue;
            };
            let Some(slot) = chain.slot_mut(*field) else {
                continue;
            };
            match slot.take() {
                Some(current) if current != stored => {
                    let warning = ChainWarning {
                        level: level_kind,
                        level_id: level_id.clone(),
                        field: *field,
                        expected: stored.clone(),
                        actual: current,
                    };
                    tracing::warn!("{}", warning);
                    warnings.push(warning);
                    *slot = Some(stored);
                }
                Some(current) => *slot = Some(current),
                None => *slot = Some(stored),
            }
        }
    }

    ChainRepair { chain, warnings }
}
