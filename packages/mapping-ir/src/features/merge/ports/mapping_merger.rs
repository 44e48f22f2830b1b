use crate::features::field_mapping::MappingTree;
use crate::features::merge::domain::ConflictReport;
use crate::shared::models::MergeReason;

/// Either the reconciled tree or the complete list of conflicts
pub type MergeResult = std::result::Result<MappingTree, ConflictReport>;

pub trait MappingMerger: Send + Sync {
    /// Reconcile `existing` with `incoming`. Neither input is modified.
    fn merge(&self, existing: &MappingTree, incoming: &MappingTree, reason: MergeReason)
        -> MergeResult;
}
