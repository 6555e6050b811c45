//! Relationship extraction tests.

use crate::helpers::fixtures::{record, sample_store};
use residex::resolve::{resolve_relationship, resolve_relationship_in};
use residex::{EntityId, RelationKind, RelationSource, extract_relationship_id, get_relationship_name};
use rstest::rstest;
use serde_json::json;

// =============================================================================
// SOURCE PRIORITY
// =============================================================================

#[test]
fn test_sub_data_beats_foreign_key() {
    let entity = record(json!({"sub_data": {"complex": {"id": 5}}, "complex_id": 7}));
    assert_eq!(
        extract_relationship_id(&entity, RelationKind::Complex),
        Some(EntityId::Int(5))
    );
    assert_eq!(
        resolve_relationship(&entity, RelationKind::Complex).map(|r| r.source),
        Some(RelationSource::SubData)
    );
}

#[test]
fn test_foreign_key_zero_is_kept() {
    let entity = record(json!({"complex_id": 0, "complex": {"id": 9}}));
    assert_eq!(
        extract_relationship_id(&entity, RelationKind::Complex),
        Some(EntityId::Int(0))
    );
}

#[test]
fn test_null_foreign_key_falls_through() {
    let entity = record(json!({"building_id": null, "building": {"id": 100}}));
    let resolution = resolve_relationship(&entity, RelationKind::Building).unwrap();
    assert_eq!(resolution.id, EntityId::Int(100));
    assert_eq!(resolution.source, RelationSource::Embedded("building.id"));
}

#[rstest]
#[case::mtk_prefers_bind(json!({"bind_mtk": {"id": 1}, "mtk": {"id": 2}}), RelationKind::Mtk, 1)]
#[case::complex_prefers_plain(json!({"bind_complex": {"id": 1}, "complex": {"id": 2}}), RelationKind::Complex, 2)]
#[case::building_bind_only(json!({"bind_building": {"id": 3}}), RelationKind::Building, 3)]
#[case::block_plain_only(json!({"block": {"id": 4}}), RelationKind::Block, 4)]
fn test_embedded_order_per_kind(
    #[case] value: serde_json::Value,
    #[case] kind: RelationKind,
    #[case] expected: i64,
) {
    let entity = record(value);
    assert_eq!(extract_relationship_id(&entity, kind), Some(EntityId::Int(expected)));
}

#[test]
fn test_no_source_yields_none() {
    let entity = record(json!({"id": 1, "complex_name": "C1"}));
    assert_eq!(extract_relationship_id(&entity, RelationKind::Complex), None);
}

#[test]
fn test_extraction_is_deterministic() {
    let entity = record(json!({
        "sub_data": {"building": {"id": "100"}},
        "building_id": 5,
        "bind_building": {"id": 6}
    }));
    let first = extract_relationship_id(&entity, RelationKind::Building);
    for _ in 0..10 {
        assert_eq!(extract_relationship_id(&entity, RelationKind::Building), first);
    }
    assert_eq!(first, Some(EntityId::Int(100)));
}

// =============================================================================
// NAME FALLBACK
// =============================================================================

#[test]
fn test_name_match_is_last_resort() {
    let store = sample_store();
    let entity = record(json!({"complex_name": "  c2 "}));
    let resolution = resolve_relationship_in(&entity, RelationKind::Complex, &store).unwrap();
    assert_eq!(resolution.id, EntityId::Int(11));
    assert_eq!(resolution.source, RelationSource::NameMatch);

    let with_key = record(json!({"complex_name": "C2", "complex_id": 10}));
    let resolution = resolve_relationship_in(&with_key, RelationKind::Complex, &store).unwrap();
    assert_eq!(resolution.id, EntityId::Int(10));
    assert_eq!(resolution.source, RelationSource::ForeignKey);
}

// =============================================================================
// NAMES
// =============================================================================

#[test]
fn test_relationship_name_sources() {
    let from_sub_data = record(json!({"sub_data": {"building": {"name": "Tower"}}, "building_name": "Old"}));
    assert_eq!(
        get_relationship_name(&from_sub_data, RelationKind::Building, None),
        "Tower"
    );

    let empty = record(json!({"building_name": "   "}));
    assert_eq!(get_relationship_name(&empty, RelationKind::Building, None), "—");
    assert_eq!(
        get_relationship_name(&empty, RelationKind::Building, Some("unknown")),
        "unknown"
    );
}
