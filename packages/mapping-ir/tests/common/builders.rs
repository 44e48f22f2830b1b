//! Test tree builders

use mapping_ir::{MapperBuilderContext, MappingDefinition, MappingTree, TreeAssembler};

/// Assemble under a plain root context with default kinds and limits
pub fn assemble(definition: &MappingDefinition) -> MappingTree {
    assemble_with(&MapperBuilderContext::root(false, false), definition)
}

/// Assemble under `root` with default kinds and limits
pub fn assemble_with(root: &MapperBuilderContext, definition: &MappingDefinition) -> MappingTree {
    TreeAssembler::with_defaults()
        .assemble(root, definition)
        .expect("fixture assembles")
}
