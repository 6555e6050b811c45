//! Reconciliation of inconsistent parent pointers.
//!
//! Nothing here fails the caller. Chain repair corrects and reports,
//! [`validate_required_relationships`] only reports, and the consistency
//! scan only logs.

mod chain;
mod consistency;
mod required;
mod warning;

pub use chain::{ChainRepair, fix_chain_from, validate_and_fix_chain};
pub use consistency::{
    ConsistencyIssue, ConsistencyReport, check_list_data_consistency,
    normalize_entity_relationships,
};
pub use required::{RequiredCheck, validate_required_relationships};
pub use warning::{ChainWarning, codes};
