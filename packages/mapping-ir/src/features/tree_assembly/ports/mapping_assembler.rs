use crate::errors::Result;
use crate::features::builder_context::MapperBuilderContext;
use crate::features::field_mapping::MappingTree;
use crate::shared::models::MappingDefinition;

pub trait MappingAssembler: Send + Sync {
    /// Build `definition` under the root context `root`.
    ///
    /// Fails fast: the first invalid name, unknown kind, limit violation or
    /// duplicate full name aborts the whole build.
    fn assemble(&self, root: &MapperBuilderContext, definition: &MappingDefinition)
        -> Result<MappingTree>;
}
