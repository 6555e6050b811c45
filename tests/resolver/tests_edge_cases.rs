//! Edge cases: odd ids, partial records, mixed shapes.

use crate::helpers::fixtures::{record, records, sample_store};
use residex::{
    EntityId, EntityKind, EntityStore, RelationKind, Resolver, ResolverConfig,
    build_indexed_maps, check_list_data_consistency, extract_relationship_id, lineage_labels,
    normalize_entity_relationships,
};
use serde_json::json;

#[test]
fn test_string_ids_index_like_numbers() {
    let store = EntityStore::from_lists(vec![
        ("complexes", records(json!([{"id": "10", "mtk_id": "1"}]))),
        ("buildings", records(json!([{"id": 100, "complex_id": 10}]))),
    ]);
    let maps = build_indexed_maps(&store);
    assert_eq!(
        maps.children(EntityKind::Complex, RelationKind::Mtk, &1.into()),
        &[EntityId::Int(10)]
    );
    assert_eq!(
        maps.children(EntityKind::Building, RelationKind::Complex, &"10".into()),
        &[EntityId::Int(100)]
    );
}

#[test]
fn test_leading_zero_ids_stay_strings() {
    let entity = record(json!({"block_id": "007"}));
    assert_eq!(
        extract_relationship_id(&entity, RelationKind::Block),
        Some(EntityId::from("007"))
    );
    assert_ne!(EntityId::from("007"), EntityId::Int(7));
}

#[test]
fn test_non_id_values_are_ignored() {
    let entity = record(json!({
        "complex_id": true,
        "complex": {"id": [1]},
        "bind_complex": {"id": 2.5}
    }));
    assert_eq!(extract_relationship_id(&entity, RelationKind::Complex), None);
}

#[test]
fn test_sub_data_null_id_falls_through() {
    let entity = record(json!({"sub_data": {"block": {"id": null}}, "block_id": 6}));
    assert_eq!(
        extract_relationship_id(&entity, RelationKind::Block),
        Some(EntityId::Int(6))
    );
}

#[test]
fn test_consistency_scan_then_normalize() {
    let list = records(json!([
        {"id": 1, "complex": {"id": 10}},
        {"id": 2, "complex": {"id": 10}, "complex_id": 10}
    ]));
    let report = check_list_data_consistency(&list);
    assert_eq!(report.issues.len(), 1);

    let fixed: Vec<_> = list.iter().map(normalize_entity_relationships).collect();
    assert!(check_list_data_consistency(&fixed).is_consistent());
}

#[test]
fn test_lineage_falls_back_to_ids() {
    let store = sample_store();
    let property = record(json!({"id": 1, "block_id": 5, "building_id": 100}));
    let labels: Vec<_> = lineage_labels(&property, &store)
        .into_iter()
        .map(|entry| entry.label)
        .collect();
    assert_eq!(labels, vec!["M1", "C1", "B1", "Block A"]);

    let unknown = record(json!({"block_id": 77}));
    let lineage = lineage_labels(&unknown, &store);
    assert_eq!(lineage.len(), 1);
    assert_eq!(lineage[0].label, "#77");
}

#[test]
fn test_lineage_without_repair_keeps_stated_chain() {
    let store = sample_store();
    let config = ResolverConfig::default().with_repair_chains(false);
    let resolver = Resolver::new(&store, &config);
    let property = record(json!({"block_id": 5, "building_id": 101}));
    let lineage = resolver.lineage(&property);
    let ids: Vec<_> = lineage.iter().map(|entry| entry.id.clone()).collect();
    assert_eq!(ids, vec![EntityId::Int(101), EntityId::Int(5)]);
}

#[test]
fn test_lineage_with_name_fallback_and_repair() {
    let store = sample_store();
    let config = ResolverConfig::default().with_name_fallback(true);
    let resolver = Resolver::new(&store, &config);
    let building = record(json!({"id": 555, "complex_name": "c3"}));

    let chain = resolver.chain(&building);
    assert_eq!(chain.complex_id, Some(EntityId::Int(12)));
    assert_eq!(chain.mtk_id, None);

    let labels: Vec<_> = resolver
        .lineage(&building)
        .into_iter()
        .map(|entry| entry.label)
        .collect();
    assert_eq!(labels, vec!["M2", "C3"]);
}
