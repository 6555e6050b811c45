//! Structured reconciliation warnings.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::base::{EntityId, EntityKind, RelationKind};

/// Warning codes attached to reconciliation output.
///
/// ## Code Ranges
///
/// - **R0001-R0099**: Chain repair and data consistency
pub mod codes {
    /// A stored parent record disagreed with the chain; the record won.
    pub const CHAIN_MISMATCH: &str = "R0001";
    /// Embedded parent object present, flat foreign key missing.
    pub const MISSING_FOREIGN_KEY: &str = "R0002";
    /// Embedded parent object and flat foreign key disagree.
    pub const FOREIGN_KEY_MISMATCH: &str = "R0003";
}

/// A chain value overwritten during repair.
///
/// `level`/`level_id` identify the stored record that supplied the correct
/// value; `field` is the chain entry that was corrected.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChainWarning {
    pub level: EntityKind,
    pub level_id: EntityId,
    pub field: RelationKind,
    /// Value from the stored record (now in the chain).
    pub expected: EntityId,
    /// Value the chain carried before repair.
    pub actual: EntityId,
}

impl ChainWarning {
    pub fn code(&self) -> &'static str {
        codes::CHAIN_MISMATCH
    }
}

impl fmt::Display for ChainWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} #{} belongs to {} #{}, but the chain referenced {} #{}; using #{}",
            self.level.display(),
            self.level_id,
            self.field.as_str(),
            self.expected,
            self.field.as_str(),
            self.actual,
            self.expected
        )
    }
}
