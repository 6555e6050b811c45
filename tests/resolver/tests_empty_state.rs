//! Empty-state message tests.

use residex::{EmptyState, EntityFilters, RelationKind, get_empty_state_message};
use rstest::rstest;

#[rstest]
#[case::nothing_loaded(EntityFilters::default(), 0, Some(EmptyState::NO_DATA))]
#[case::search_active(EntityFilters::new().with_search("x"), 0, Some(EmptyState::FILTERED))]
#[case::status_active(EntityFilters::new().with_status("vacant"), 0, Some(EmptyState::FILTERED))]
#[case::parent_active(EntityFilters::new().with_parent(RelationKind::Block, 5), 0, Some(EmptyState::FILTERED))]
#[case::has_rows(EntityFilters::default(), 5, None)]
#[case::has_rows_filtered(EntityFilters::new().with_search("x"), 1, None)]
fn test_empty_state_message(
    #[case] filters: EntityFilters,
    #[case] count: usize,
    #[case] expected: Option<EmptyState>,
) {
    assert_eq!(get_empty_state_message(&filters, count), expected);
}

#[test]
fn test_blank_search_is_not_a_filter() {
    let filters = EntityFilters::new().with_search("   ");
    assert_eq!(
        get_empty_state_message(&filters, 0),
        Some(EmptyState::NO_DATA)
    );
}
