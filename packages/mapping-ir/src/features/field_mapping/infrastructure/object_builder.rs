//! Composite field builder
//!
//! Builds `object`, `nested` and `passthrough` fields. A composite is the only
//! place where `parent_contains_dimensions` can become true: it derives the
//! context for its children with its own dimension declaration OR-ed in.

use tracing::debug;

use super::declared_dimension;
use crate::errors::Result;
use crate::features::builder_context::MapperBuilderContext;
use crate::features::field_mapping::domain::{CompositeNode, Node};
use crate::features::field_mapping::ports::{ChildAssembler, FieldBuilder};
use crate::shared::models::FieldDefinition;

/// Builder for composite fields of a single kind
#[derive(Debug, Clone)]
pub struct ObjectFieldBuilder {
    kind: String,
    /// Subtree is dimension-bearing regardless of parameters
    always_dimensions: bool,
}

impl ObjectFieldBuilder {
    pub fn new(kind: impl Into<String>) -> Self {
        Self {
            kind: kind.into(),
            always_dimensions: false,
        }
    }

    pub fn object() -> Self {
        Self::new("object")
    }

    pub fn nested() -> Self {
        Self::new("nested")
    }

    /// Container whose children are always dimensions
    pub fn passthrough() -> Self {
        Self {
            kind: "passthrough".to_string(),
            always_dimensions: true,
        }
    }
}

impl FieldBuilder for ObjectFieldBuilder {
    fn kind(&self) -> &str {
        &self.kind
    }

    fn is_composite(&self) -> bool {
        true
    }

    fn build(
        &self,
        context: &MapperBuilderContext,
        definition: &FieldDefinition,
        children: &dyn ChildAssembler,
    ) -> Result<Node> {
        let full_name = context.build_full_name(&definition.name);
        let declares_dimensions =
            self.always_dimensions || declared_dimension(definition, &full_name)?;

        let child_context =
            context.create_child_context_with_dimensions(&definition.name, declares_dimensions)?;

        debug!(
            "building {} '{}' with {} children",
            self.kind,
            full_name,
            definition.fields.len()
        );

        let built = children.assemble_children(&child_context, &definition.fields)?;

        Ok(CompositeNode::new(
            definition.name.clone(),
            full_name,
            self.kind.clone(),
            definition.params.clone(),
            child_context.parent_contains_dimensions(),
            context.flags(),
            built,
        )
        .into())
    }
}
