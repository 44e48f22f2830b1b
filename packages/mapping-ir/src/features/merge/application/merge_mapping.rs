use crate::features::field_mapping::MappingTree;
use crate::features::merge::ports::{MappingMerger, MergeResult};
use crate::shared::models::MergeReason;

pub struct MergeMappingUseCase<M: MappingMerger> {
    merger: M,
}

impl<M: MappingMerger> MergeMappingUseCase<M> {
    pub fn new(merger: M) -> Self {
        Self { merger }
    }

    pub fn execute(
        &self,
        existing: &MappingTree,
        incoming: &MappingTree,
        reason: MergeReason,
    ) -> MergeResult {
        self.merger.merge(existing, incoming, reason)
    }
}
