//! # residex-base
//!
//! Hierarchical relationship resolver for property management records.
//!
//! Records arrive from listing endpoints as loosely shaped JSON, each
//! pointing at its parent (`mtk → complex → building → block → property`)
//! in up to three redundant ways. This crate normalizes those listings,
//! builds parent → children indices for cascading filters, and reconciles
//! parent pointers that disagree.
//!
//! ## Module Structure (dependency order)
//!
//! ```text
//! resolver  → Resolver facade, lineage labels
//!   ↓
//! config    → ResolverConfig, Session, Settings files
//!   ↓
//! filter    → EntityFilters, empty states, cascading options
//!   ↓
//! validate  → Chain repair, required parents, consistency scan
//!   ↓
//! index     → IndexedMaps (ancestor id → child ids)
//!   ↓
//! resolve   → Relationship extraction, chains, labels
//!   ↓
//! store     → EntityStore, reducer   (shared: snapshot swapping)
//!   ↓
//! normalize → NormalizedList
//!   ↓
//! model     → Entity records, listing parser
//!   ↓
//! base      → EntityId, EntityKind, RelationKind
//! ```
//!
//! ## Example
//!
//! ```
//! use residex::{EntityId, EntityKind, EntityStore, RelationKind, build_indexed_maps, parse_listing};
//!
//! let mtks = parse_listing(br#"[{"id": 1, "name": "M1"}]"#).unwrap();
//! let complexes = parse_listing(br#"[{"id": 10, "name": "C1", "mtk_id": 1}]"#).unwrap();
//! let store = EntityStore::from_lists(vec![("mtks", mtks), ("complexes", complexes)]);
//!
//! let maps = build_indexed_maps(&store);
//! let under_m1 = maps.children(EntityKind::Complex, RelationKind::Mtk, &1.into());
//! assert_eq!(under_m1, &[EntityId::Int(10)]);
//! ```

// ============================================================================
// MODULES (dependency order: base → model → normalize → store → resolve → ...)
// ============================================================================

/// Foundation types: EntityId, EntityKind, RelationKind
pub mod base;

/// Error type for listing parsing and settings files
pub mod error;

/// Entity records and listing parsing
pub mod model;

/// Listing normalization into keyed maps
pub mod normalize;

/// Normalized store and pure reducer
pub mod store;

/// Relationship extraction, chains, labels
pub mod resolve;

/// Parent → children lookup indices
pub mod index;

/// Chain repair and consistency diagnostics
pub mod validate;

/// Filters, empty states, cascading selects
pub mod filter;

/// Settings and selection session
pub mod config;

/// Snapshot-swapping shared store
pub mod shared;

/// Resolver facade
pub mod resolver;

// Re-export commonly needed items
pub use base::{EntityId, EntityKind, RelationKind};
pub use config::{ResolverConfig, Session, Settings};
pub use error::ResolverError;
pub use filter::{
    CascadeOptions, EmptyState, EntityFilters, cascade_options, filter_entities,
    get_empty_state_message,
};
pub use index::{IdIndex, IndexedMaps, build_indexed_maps};
pub use model::{Entity, parse_listing};
pub use normalize::{NormalizedList, normalize_all_lists, normalize_list};
pub use resolve::{
    RelationSource, RelationshipChain, Resolution, build_relationship_chain,
    extract_relationship_id, get_relationship_name,
};
pub use resolver::{LineageEntry, Resolver, lineage_labels};
pub use shared::{SharedStore, StoreSnapshot};
pub use store::{EntityStore, StoreAction, reduce};
pub use validate::{
    ChainRepair, ChainWarning, RequiredCheck, check_list_data_consistency,
    fix_chain_from, normalize_entity_relationships, validate_and_fix_chain,
    validate_required_relationships,
};
