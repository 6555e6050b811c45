//! Filtering and cascading select tests.

use crate::helpers::fixtures::sample_store;
use residex::{
    EntityFilters, EntityId, EntityKind, RelationKind, Session, build_indexed_maps,
    cascade_options, filter_entities,
};

fn ids(values: &[i64]) -> Vec<EntityId> {
    values.iter().copied().map(EntityId::Int).collect()
}

#[test]
fn test_no_filters_lists_everything() {
    let store = sample_store();
    let maps = build_indexed_maps(&store);
    let all = filter_entities(&store, &maps, EntityKind::Property, &EntityFilters::default());
    assert_eq!(all, ids(&[1000, 1001, 1002]));
}

#[test]
fn test_parent_filter_uses_index() {
    let store = sample_store();
    let maps = build_indexed_maps(&store);
    let filters = EntityFilters::new().with_parent(RelationKind::Block, 5);
    assert_eq!(
        filter_entities(&store, &maps, EntityKind::Property, &filters),
        ids(&[1000, 1001])
    );
}

#[test]
fn test_search_covers_apartment_number() {
    let store = sample_store();
    let maps = build_indexed_maps(&store);

    let by_name = EntityFilters::new().with_search("FLAT 3");
    assert_eq!(
        filter_entities(&store, &maps, EntityKind::Property, &by_name),
        ids(&[1002])
    );

    let by_apartment = EntityFilters::new().with_search("12a");
    assert_eq!(
        filter_entities(&store, &maps, EntityKind::Property, &by_apartment),
        ids(&[1000])
    );

    let numeric = EntityFilters::new().with_search("14");
    assert_eq!(
        filter_entities(&store, &maps, EntityKind::Property, &numeric),
        ids(&[1001])
    );
}

#[test]
fn test_status_and_parent_combine() {
    let store = sample_store();
    let maps = build_indexed_maps(&store);
    let filters = EntityFilters::new()
        .with_parent(RelationKind::Block, 5)
        .with_status("vacant");
    assert_eq!(
        filter_entities(&store, &maps, EntityKind::Property, &filters),
        ids(&[1001])
    );
}

#[test]
fn test_cascade_follows_session() {
    let store = sample_store();
    let maps = build_indexed_maps(&store);

    let mut session = Session::new();
    session.select(EntityKind::Mtk, 1);
    let options = cascade_options(&store, &maps, &session.filters());
    assert_eq!(options.complexes, ids(&[10, 11]));
    assert_eq!(options.buildings, ids(&[100]));

    session.select(EntityKind::Complex, 12);
    let options = cascade_options(&store, &maps, &session.filters());
    assert_eq!(options.buildings, ids(&[101]));
    assert!(options.blocks.is_empty());
}
