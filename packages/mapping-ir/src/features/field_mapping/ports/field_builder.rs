use indexmap::IndexMap;

use crate::errors::Result;
use crate::features::builder_context::MapperBuilderContext;
use crate::features::field_mapping::domain::Node;
use crate::shared::models::FieldDefinition;

/// Builds the children of a composite field.
///
/// Implemented by the tree assembler, which resolves kinds, registers names
/// and recurses. Builders see only this callback.
pub trait ChildAssembler: Sync {
    /// Build `definitions`, which live in `context`, preserving their order
    fn assemble_children(
        &self,
        context: &MapperBuilderContext,
        definitions: &[FieldDefinition],
    ) -> Result<IndexMap<String, Node>>;
}

/// Builder capability, implemented once per field kind.
///
/// `context` is the context the field lives in; the field's full name must
/// come from `context.build_full_name(&definition.name)`. Nested definitions
/// are built through `children` with a child context derived once per nested
/// field. The context must not be retained past the call.
pub trait FieldBuilder: Send + Sync {
    /// Kind string this builder is registered under
    fn kind(&self) -> &str;

    /// Whether this kind owns nested fields
    fn is_composite(&self) -> bool {
        false
    }

    fn build(
        &self,
        context: &MapperBuilderContext,
        definition: &FieldDefinition,
        children: &dyn ChildAssembler,
    ) -> Result<Node>;
}
