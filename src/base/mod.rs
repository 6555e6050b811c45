//! Foundation types for the resolver.
//!
//! - [`EntityId`] - Integer or string record ids, with JSON-aware parsing
//! - [`EntityKind`] - Store collections (MTK down to Resident)
//! - [`RelationKind`] - Parent relationships and the fields that carry them
//!
//! This module has NO dependencies on other residex modules.

mod id;
mod kind;

pub use id::EntityId;
pub use kind::{EntityKind, RelationKind};
