//! Strict check for the parent each level must have.

use serde::{Deserialize, Serialize};

use crate::base::{EntityKind, RelationKind};
use crate::model::Entity;
use crate::resolve::extract_relationship_id;

/// Result of [`validate_required_relationships`].
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RequiredCheck {
    pub is_valid: bool,
    pub missing: Vec<RelationKind>,
}

impl RequiredCheck {
    /// Names of the missing relationships (`"block"`, ...).
    pub fn missing_names(&self) -> Vec<&'static str> {
        self.missing.iter().map(RelationKind::as_str).collect()
    }
}

/// Report whether `entity` has the parent its level requires.
///
/// Nothing is repaired; the caller decides whether to block the action.
pub fn validate_required_relationships(entity: &Entity, kind: EntityKind) -> RequiredCheck {
    let missing: Vec<RelationKind> = kind
        .required_parent()
        .into_iter()
        .filter(|parent| extract_relationship_id(entity, *parent).is_none())
        .collect();
    RequiredCheck {
        is_valid: missing.is_empty(),
        missing,
    }
}
