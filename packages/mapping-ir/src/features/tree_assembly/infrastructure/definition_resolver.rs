//! Definition preflight
//!
//! Walks a whole definition before any node is built, so that malformed
//! names, unknown kinds and limit violations are reported before work is
//! spent on the tree. Contexts are derived exactly as the builders will
//! derive them, so a name rejected here is rejected with the same error.

use crate::config::AssemblyConfig;
use crate::errors::{MapperError, Result};
use crate::features::builder_context::MapperBuilderContext;
use crate::features::field_mapping::FieldKindRegistry;
use crate::shared::models::{FieldDefinition, MappingDefinition};

/// Shape of a resolved definition
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DefinitionSummary {
    pub fields: usize,
    pub max_depth: usize,
}

pub struct DefinitionResolver<'a> {
    kinds: &'a FieldKindRegistry,
    config: &'a AssemblyConfig,
}

impl<'a> DefinitionResolver<'a> {
    pub fn new(kinds: &'a FieldKindRegistry, config: &'a AssemblyConfig) -> Self {
        Self { kinds, config }
    }

    /// Check `definition` under `root`; returns its field count and depth
    pub fn resolve(
        &self,
        root: &MapperBuilderContext,
        definition: &MappingDefinition,
    ) -> Result<DefinitionSummary> {
        let mut summary = DefinitionSummary::default();
        self.walk(root, &definition.fields, &mut summary)?;

        if summary.fields > self.config.max_fields {
            return Err(MapperError::FieldLimitExceeded {
                count: summary.fields,
                limit: self.config.max_fields,
            });
        }

        Ok(summary)
    }

    fn walk(
        &self,
        context: &MapperBuilderContext,
        fields: &[FieldDefinition],
        summary: &mut DefinitionSummary,
    ) -> Result<()> {
        for field in fields {
            let child = context.create_child_context(&field.name)?;
            let full_name = context.build_full_name(&field.name);

            let depth = child.depth();
            if depth > self.config.max_depth {
                return Err(MapperError::DepthLimitExceeded {
                    full_name,
                    depth,
                    limit: self.config.max_depth,
                });
            }

            let builder = self.kinds.resolve(&field.kind).ok_or_else(|| {
                MapperError::definition(
                    &full_name,
                    format!("no handler for field kind '{}'", field.kind),
                )
            })?;

            summary.fields += 1;
            summary.max_depth = summary.max_depth.max(depth);

            // Leaves with nested fields are rejected by their builder
            if builder.is_composite() {
                self.walk(&child, &field.fields, summary)?;
            }
        }
        Ok(())
    }
}
