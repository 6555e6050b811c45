//! Entity levels and the parent relationships between them.

use serde::{Deserialize, Serialize};
use std::fmt;

// ============================================================================
// RELATION KIND
// ============================================================================

/// A parent relationship an entity can carry.
///
/// Each variant names the parent level. A record points to its parent via
/// `sub_data.<kind>.id`, `<kind>_id`, or an embedded object; see
/// [`crate::resolve`] for the order those are consulted in.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RelationKind {
    Mtk,
    Complex,
    Building,
    Block,
    Property,
}

impl RelationKind {
    /// The four levels of a [`crate::resolve::RelationshipChain`], top-down.
    pub const CHAIN: [RelationKind; 4] = [Self::Mtk, Self::Complex, Self::Building, Self::Block];

    pub const ALL: [RelationKind; 5] = [
        Self::Mtk,
        Self::Complex,
        Self::Building,
        Self::Block,
        Self::Property,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Mtk => "mtk",
            Self::Complex => "complex",
            Self::Building => "building",
            Self::Block => "block",
            Self::Property => "property",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "mtk" => Some(Self::Mtk),
            "complex" => Some(Self::Complex),
            "building" => Some(Self::Building),
            "block" => Some(Self::Block),
            "property" => Some(Self::Property),
            _ => None,
        }
    }

    /// Flat foreign-key field, e.g. `complex_id`.
    pub fn foreign_key(&self) -> &'static str {
        match self {
            Self::Mtk => "mtk_id",
            Self::Complex => "complex_id",
            Self::Building => "building_id",
            Self::Block => "block_id",
            Self::Property => "property_id",
        }
    }

    /// Embedded-object fields that may hold the parent record, in lookup order.
    ///
    /// The order differs per kind: MTK records are usually bound
    /// (`bind_mtk`) while the lower levels are usually nested directly.
    pub fn embedded_fields(&self) -> &'static [&'static str] {
        match self {
            Self::Mtk => &["bind_mtk", "mtk"],
            Self::Complex => &["complex", "bind_complex"],
            Self::Building => &["building", "bind_building"],
            Self::Block => &["block", "bind_block"],
            Self::Property => &["property", "bind_property"],
        }
    }

    /// Dotted paths to the parent id inside embedded objects, in lookup order.
    pub fn embedded_paths(&self) -> &'static [&'static str] {
        match self {
            Self::Mtk => &["bind_mtk.id", "mtk.id"],
            Self::Complex => &["complex.id", "bind_complex.id"],
            Self::Building => &["building.id", "bind_building.id"],
            Self::Block => &["block.id", "bind_block.id"],
            Self::Property => &["property.id", "bind_property.id"],
        }
    }

    /// Flat name field some listings carry next to the foreign key.
    pub fn name_field(&self) -> &'static str {
        match self {
            Self::Mtk => "mtk_name",
            Self::Complex => "complex_name",
            Self::Building => "building_name",
            Self::Block => "block_name",
            Self::Property => "property_name",
        }
    }

    /// The entity level this relationship points at.
    pub fn target(&self) -> EntityKind {
        match self {
            Self::Mtk => EntityKind::Mtk,
            Self::Complex => EntityKind::Complex,
            Self::Building => EntityKind::Building,
            Self::Block => EntityKind::Block,
            Self::Property => EntityKind::Property,
        }
    }

    pub fn display(&self) -> &'static str {
        match self {
            Self::Mtk => "MTK",
            Self::Complex => "Complex",
            Self::Building => "Building",
            Self::Block => "Block",
            Self::Property => "Property",
        }
    }
}

impl fmt::Display for RelationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ============================================================================
// ENTITY KIND
// ============================================================================

/// A collection in the entity store.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EntityKind {
    Mtk,
    Complex,
    Building,
    Block,
    Property,
    Resident,
}

impl EntityKind {
    pub const ALL: [EntityKind; 6] = [
        Self::Mtk,
        Self::Complex,
        Self::Building,
        Self::Block,
        Self::Property,
        Self::Resident,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Mtk => "mtk",
            Self::Complex => "complex",
            Self::Building => "building",
            Self::Block => "block",
            Self::Property => "property",
            Self::Resident => "resident",
        }
    }

    /// Name of the listing collection (`mtks`, `complexes`, ...).
    pub fn collection_name(&self) -> &'static str {
        match self {
            Self::Mtk => "mtks",
            Self::Complex => "complexes",
            Self::Building => "buildings",
            Self::Block => "blocks",
            Self::Property => "properties",
            Self::Resident => "residents",
        }
    }

    /// Parse a collection name. Accepts singular entity names too.
    pub fn parse_collection(name: &str) -> Option<Self> {
        match name {
            "mtks" | "mtk" => Some(Self::Mtk),
            "complexes" | "complex" => Some(Self::Complex),
            "buildings" | "building" => Some(Self::Building),
            "blocks" | "block" => Some(Self::Block),
            "properties" | "property" => Some(Self::Property),
            "residents" | "resident" => Some(Self::Resident),
            _ => None,
        }
    }

    /// Ancestor relationships indexed for this level, nearest first.
    pub fn ancestors(&self) -> &'static [RelationKind] {
        use RelationKind::*;
        match self {
            Self::Mtk => &[],
            Self::Complex => &[Mtk],
            Self::Building => &[Complex, Mtk],
            Self::Block => &[Building, Complex, Mtk],
            Self::Property => &[Block, Building, Complex, Mtk],
            Self::Resident => &[Property],
        }
    }

    /// The single parent a record of this level must have to be saved.
    ///
    /// Complexes may exist without an MTK.
    pub fn required_parent(&self) -> Option<RelationKind> {
        match self {
            Self::Property => Some(RelationKind::Block),
            Self::Block => Some(RelationKind::Building),
            Self::Building => Some(RelationKind::Complex),
            Self::Resident => Some(RelationKind::Property),
            Self::Complex | Self::Mtk => None,
        }
    }

    /// The relationship other records use to point at this level.
    pub fn as_relation(&self) -> Option<RelationKind> {
        match self {
            Self::Mtk => Some(RelationKind::Mtk),
            Self::Complex => Some(RelationKind::Complex),
            Self::Building => Some(RelationKind::Building),
            Self::Block => Some(RelationKind::Block),
            Self::Property => Some(RelationKind::Property),
            Self::Resident => None,
        }
    }

    pub fn display(&self) -> &'static str {
        match self {
            Self::Mtk => "MTK",
            Self::Complex => "Complex",
            Self::Building => "Building",
            Self::Block => "Block",
            Self::Property => "Property",
            Self::Resident => "Resident",
        }
    }
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
