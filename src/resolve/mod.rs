//! Relationship extraction: finding an entity's parents.
//!
//! A record can name its parent in several places, which do not always
//! agree. They are consulted in a fixed order of authority:
//!
//! ```text
//! sub_data.<kind>.id        ← backend snapshot (authoritative)
//!     ↓ absent
//! <kind>_id                 ← flat foreign key (may be stale)
//!     ↓ absent
//! <kind>.id / bind_<kind>.id← embedded object (order is per kind)
//!     ↓ absent
//! name match in the store   ← opt-in last resort
//! ```
//!
//! ## Key Types
//!
//! - [`RelationSource`] - The strategy that produced an id
//! - [`Resolution`] - An id plus its source
//! - [`RelationshipChain`] - mtk/complex/building/block ids of one entity

mod chain;
mod label;
mod strategy;

pub use chain::{RelationshipChain, build_relationship_chain};
pub use label::{DEFAULT_PLACEHOLDER, get_relationship_name, relationship_label};
pub use strategy::{
    RelationSource, Resolution, extract_relationship_id, match_by_name, name_hints,
    resolve_relationship, resolve_relationship_in,
};
