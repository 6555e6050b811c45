//! Diagnostics and one-way repair between embedded parents and flat keys.

use serde::Serialize;

use super::warning::codes;
use crate::base::{EntityId, RelationKind};
use crate::model::Entity;

/// One embedded-parent / flat-key disagreement.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ConsistencyIssue {
    /// Position of the record in the scanned list.
    pub position: usize,
    pub entity_id: Option<EntityId>,
    pub relation: RelationKind,
    /// The embedded field that carried the parent (`"complex"`, `"bind_mtk"`, ...).
    pub embedded_field: &'static str,
    pub embedded_id: EntityId,
    /// The flat `<kind>_id`, if present.
    pub foreign_key: Option<EntityId>,
}

impl ConsistencyIssue {
    pub fn code(&self) -> &'static str {
        if self.foreign_key.is_some() {
            codes::FOREIGN_KEY_MISMATCH
        } else {
            codes::MISSING_FOREIGN_KEY
        }
    }
}

/// Result of [`check_list_data_consistency`].
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct ConsistencyReport {
    pub scanned: usize,
    pub issues: Vec<ConsistencyIssue>,
}

impl ConsistencyReport {
    pub fn is_consistent(&self) -> bool {
        self.issues.is_empty()
    }
}

/// The first embedded object for `kind` that carries an id.
fn embedded_parent(entity: &Entity, kind: RelationKind) -> Option<(&'static str, EntityId)> {
    kind.embedded_fields().iter().find_map(|field| {
        entity
            .get_object(field)?
            .get("id")
            .and_then(EntityId::from_value)
            .map(|id| (*field, id))
    })
}

/// Scan a listing for records whose embedded parent has no matching flat key.
///
/// Read-only; meant for logs and telemetry.
pub fn check_list_data_consistency(list: &[Entity]) -> ConsistencyReport {
    let mut report = ConsistencyReport {
        scanned: list.len(),
        issues: Vec::new(),
    };

    for (position, entity) in list.iter().enumerate() {
        for relation in RelationKind::ALL {
            let Some((embedded_field, embedded_id)) = embedded_parent(entity, relation) else {
                continue;
            };
            let foreign_key = entity
                .get_present(relation.foreign_key())
                .and_then(EntityId::from_value);
            if foreign_key.as_ref() == Some(&embedded_id) {
                continue;
            }
            let issue = ConsistencyIssue {
                position,
                entity_id: entity.id(),
                relation,
                embedded_field,
                embedded_id,
                foreign_key,
            };
            tracing::trace!(
                "[CONSISTENCY] {} record {:?}: {} #{} has {} = {:?}",
                issue.code(),
                issue.entity_id,
                issue.embedded_field,
                issue.embedded_id,
                relation.foreign_key(),
                issue.foreign_key
            );
            report.issues.push(issue);
        }
    }

    if !report.issues.is_empty() {
        tracing::debug!(
            "[CONSISTENCY] {} issue(s) in {} record(s)",
            report.issues.len(),
            report.scanned
        );
    }
    report
}

/// Copy of `entity` with each missing flat `<kind>_id` filled from its
/// embedded object. Present keys are left as they are, even if they
/// disagree. The input is not modified.
pub fn normalize_entity_relationships(entity: &Entity) -> Entity {
    let mut normalized = entity.clone();
    for relation in RelationKind::ALL {
        if entity.get_present(relation.foreign_key()).is_some() {
            continue;
        }
        let embedded = relation
            .embedded_paths()
            .iter()
            .find_map(|path| entity.get_path(path).and_then(EntityId::from_value));
        if let Some(id) = embedded {
            normalized.set(relation.foreign_key(), id.to_value());
        }
    }
    normalized
}
