//! Resolver tests
//!
//! End-to-end behaviour of the public API:
//! - Listing normalization
//! - Relationship extraction and its source priority
//! - Index construction and cascading filters
//! - Chain repair against the store
//! - Empty states and settings files

pub mod tests_chain;
pub mod tests_config;
pub mod tests_edge_cases;
pub mod tests_empty_state;
pub mod tests_extract;
pub mod tests_filter;
