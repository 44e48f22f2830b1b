//! Merge Feature
//!
//! Reconciles an existing mapping tree with an incoming one under a merge
//! reason. Each reason selects a row of a policy table; the walk consults
//! that row at its few decision points and collects every conflict instead
//! of stopping at the first.

pub mod application;
pub mod domain;
pub mod infrastructure;
pub mod ports;

pub use application::MergeMappingUseCase;
pub use domain::{ConflictReport, ConflictRule, MergeConflict, MergePolicy, MergePolicyTable};
pub use infrastructure::TreeMerger;
pub use ports::{MappingMerger, MergeResult};
