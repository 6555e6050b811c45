//! Entity records and listing parsing.

mod entity;
mod listing;

pub use entity::Entity;
pub use listing::{listing_from_value, parse_listing};
