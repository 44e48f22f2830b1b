use crate::errors::Result;
use crate::features::builder_context::MapperBuilderContext;
use crate::features::field_mapping::MappingTree;
use crate::features::tree_assembly::ports::MappingAssembler;
use crate::shared::models::{MappingDefinition, MergeReason};

pub struct AssembleMappingUseCase<A: MappingAssembler> {
    assembler: A,
}

impl<A: MappingAssembler> AssembleMappingUseCase<A> {
    pub fn new(assembler: A) -> Self {
        Self { assembler }
    }

    /// Build `definition` from a fresh root context
    pub fn execute(
        &self,
        is_source_synthetic: bool,
        is_data_stream: bool,
        reason: MergeReason,
        definition: &MappingDefinition,
    ) -> Result<MappingTree> {
        let root = MapperBuilderContext::root_with_reason(is_source_synthetic, is_data_stream, reason);
        self.assembler.assemble(&root, definition)
    }
}
