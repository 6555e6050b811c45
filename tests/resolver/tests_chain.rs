//! Chain building and repair tests.

use crate::helpers::fixtures::{record, records, sample_store};
use residex::validate::codes;
use residex::{
    EntityId, EntityKind, EntityStore, RelationKind, build_relationship_chain,
    validate_and_fix_chain, validate_required_relationships,
};
use serde_json::json;

// =============================================================================
// BUILD
// =============================================================================

#[test]
fn test_chain_reads_each_level() {
    let property = record(json!({
        "id": 1000,
        "block_id": 5,
        "building": {"id": 100},
        "sub_data": {"complex": {"id": 10}},
        "bind_mtk": {"id": 1}
    }));
    let chain = build_relationship_chain(&property);
    assert_eq!(chain.block_id, Some(EntityId::Int(5)));
    assert_eq!(chain.building_id, Some(EntityId::Int(100)));
    assert_eq!(chain.complex_id, Some(EntityId::Int(10)));
    assert_eq!(chain.mtk_id, Some(EntityId::Int(1)));
    assert_eq!(
        chain.most_specific(),
        Some((RelationKind::Block, &EntityId::Int(5)))
    );
}

// =============================================================================
// REPAIR
// =============================================================================

#[test]
fn test_stored_block_overrides_chain_building() {
    let store = EntityStore::from_lists(vec![(
        "blocks",
        records(json!([{"id": 5, "building_id": 10}])),
    )]);
    let property = record(json!({"id": 1000, "block_id": 5, "building_id": 99}));

    let repair = validate_and_fix_chain(&property, &store);

    assert_eq!(repair.chain.building_id, Some(EntityId::Int(10)));
    assert!(repair.has_warnings());
    let warning = &repair.warnings[0];
    assert_eq!(warning.code(), codes::CHAIN_MISMATCH);
    assert_eq!(warning.field, RelationKind::Building);
    assert_eq!(warning.expected, EntityId::Int(10));
    assert_eq!(warning.actual, EntityId::Int(99));
    let message = &repair.messages()[0];
    assert!(message.contains("#10") && message.contains("#99"), "{}", message);
}

#[test]
fn test_repair_walks_upward() {
    let store = sample_store();
    let property = record(json!({"id": 1000, "block_id": 5, "complex_id": 11, "mtk_id": 2}));

    let repair = validate_and_fix_chain(&property, &store);

    assert_eq!(repair.chain.block_id, Some(EntityId::Int(5)));
    assert_eq!(repair.chain.building_id, Some(EntityId::Int(100)));
    assert_eq!(repair.chain.complex_id, Some(EntityId::Int(10)));
    assert_eq!(repair.chain.mtk_id, Some(EntityId::Int(1)));
    let fields: Vec<_> = repair.warnings.iter().map(|w| w.field).collect();
    assert_eq!(fields, vec![RelationKind::Complex, RelationKind::Mtk]);
}

#[test]
fn test_consistent_chain_has_no_warnings() {
    let store = sample_store();
    let property = record(json!({"id": 1000, "block_id": 5, "building_id": 100, "complex_id": 10}));
    let repair = validate_and_fix_chain(&property, &store);
    assert!(!repair.has_warnings());
    assert_eq!(repair.chain.mtk_id, Some(EntityId::Int(1)));
}

#[test]
fn test_missing_store_records_leave_chain_alone() {
    let property = record(json!({"block_id": 5, "building_id": 99}));
    let repair = validate_and_fix_chain(&property, &EntityStore::default());
    assert_eq!(repair.chain, build_relationship_chain(&property));
    assert!(repair.warnings.is_empty());
}

// =============================================================================
// REQUIRED
// =============================================================================

#[test]
fn test_required_parent_per_level() {
    let orphan = record(json!({"id": 1000, "building_id": 100}));
    let check = validate_required_relationships(&orphan, EntityKind::Property);
    assert!(!check.is_valid);
    assert_eq!(check.missing, vec![RelationKind::Block]);

    let complex = record(json!({"id": 10}));
    assert!(validate_required_relationships(&complex, EntityKind::Complex).is_valid);
}
