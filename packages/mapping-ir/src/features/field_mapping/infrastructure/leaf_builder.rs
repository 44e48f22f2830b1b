//! Leaf field builder
//!
//! One instance per scalar kind (`keyword`, `long`, `date`, ...). The kind's
//! storage semantics are not interpreted here; parameters are kept opaque.

use super::declared_dimension;
use crate::errors::{MapperError, Result};
use crate::features::builder_context::{validate_name, MapperBuilderContext};
use crate::features::field_mapping::domain::{LeafNode, Node};
use crate::features::field_mapping::ports::{ChildAssembler, FieldBuilder};
use crate::shared::models::FieldDefinition;

/// Builder for terminal fields of a single kind
#[derive(Debug, Clone)]
pub struct LeafFieldBuilder {
    kind: String,
}

impl LeafFieldBuilder {
    pub fn new(kind: impl Into<String>) -> Self {
        Self { kind: kind.into() }
    }
}

impl FieldBuilder for LeafFieldBuilder {
    fn kind(&self) -> &str {
        &self.kind
    }

    fn build(
        &self,
        context: &MapperBuilderContext,
        definition: &FieldDefinition,
        _children: &dyn ChildAssembler,
    ) -> Result<Node> {
        validate_name(&definition.name)?;
        let full_name = context.build_full_name(&definition.name);

        if !definition.fields.is_empty() {
            return Err(MapperError::definition(
                full_name,
                format!(
                    "field of kind '{}' cannot declare nested fields",
                    self.kind
                ),
            ));
        }

        let is_dimension =
            context.parent_contains_dimensions() || declared_dimension(definition, &full_name)?;

        Ok(LeafNode::new(
            definition.name.clone(),
            full_name,
            self.kind.clone(),
            definition.params.clone(),
            is_dimension,
            context.flags(),
        )
        .into())
    }
}
