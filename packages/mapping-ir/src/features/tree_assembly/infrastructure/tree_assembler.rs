/*
 * Tree Assembler - recursive, fail-fast construction of a mapping tree
 *
 * Flow:
 * 1. Preflight the definition (names, kinds, depth and field limits)
 * 2. Descend depth-first in declaration order; per field:
 *    resolve kind -> register full name -> build (composites recurse back
 *    through the ChildAssembler callback)
 * 3. Wrap the top-level fields into the root composite
 *
 * Names are registered before a field's subtree is built, so a duplicated
 * composite is reported at its own full name. The first error aborts the
 * build; no partial tree is returned.
 *
 * Sibling subtrees may be built on the rayon pool. Contexts are immutable and
 * the name registry is concurrent, so siblings need no other coordination,
 * and the ordered collect keeps declaration order.
 */

use indexmap::IndexMap;
use rayon::prelude::*;
use std::sync::Arc;
use tracing::{debug, info, warn};

use super::definition_resolver::DefinitionResolver;
use crate::config::AssemblyConfig;
use crate::errors::{MapperError, Result};
use crate::features::builder_context::MapperBuilderContext;
use crate::features::field_mapping::{
    ChildAssembler, CompositeNode, FieldKindRegistry, FieldParams, MappingTree, Node, ROOT_KIND,
};
use crate::features::tree_assembly::domain::{AssemblyState, AssemblyStats, NameRegistry};
use crate::features::tree_assembly::ports::MappingAssembler;
use crate::shared::models::{FieldDefinition, MappingDefinition};

/// Assembler over a frozen field-kind registry
#[derive(Debug, Clone)]
pub struct TreeAssembler {
    kinds: Arc<FieldKindRegistry>,
    config: AssemblyConfig,
}

impl TreeAssembler {
    pub fn new(kinds: Arc<FieldKindRegistry>, config: AssemblyConfig) -> Self {
        Self { kinds, config }
    }

    /// Default kinds, default limits, sequential
    pub fn with_defaults() -> Self {
        Self::new(
            Arc::new(FieldKindRegistry::with_defaults()),
            AssemblyConfig::default(),
        )
    }

    pub fn kinds(&self) -> &FieldKindRegistry {
        &self.kinds
    }

    pub fn config(&self) -> &AssemblyConfig {
        &self.config
    }

    /// Run one build to a terminal state
    pub fn run(&self, root: &MapperBuilderContext, definition: &MappingDefinition) -> AssemblyState {
        let state = AssemblyState::Building;

        match self.build(root, definition) {
            Ok((tree, stats)) => {
                info!(
                    "assembled mapping: {} fields, max depth {}",
                    stats.fields, stats.max_depth
                );
                state.succeed(tree, stats)
            }
            Err(error) => {
                warn!("mapping assembly failed: {}", error);
                state.fail(error)
            }
        }
    }

    /// Build `definition` under `root`
    pub fn assemble(
        &self,
        root: &MapperBuilderContext,
        definition: &MappingDefinition,
    ) -> Result<MappingTree> {
        self.run(root, definition).into_result()
    }

    fn build(
        &self,
        root: &MapperBuilderContext,
        definition: &MappingDefinition,
    ) -> Result<(MappingTree, AssemblyStats)> {
        if !root.is_root() {
            return Err(MapperError::invalid_argument(
                "assembly must start from a root context",
            ));
        }
        self.config.validate()?;

        let summary = DefinitionResolver::new(&self.kinds, &self.config).resolve(root, definition)?;

        let scope = BuildScope {
            kinds: &self.kinds,
            config: &self.config,
            names: NameRegistry::with_capacity(summary.fields),
        };
        let fields = scope.assemble_children(root, &definition.fields)?;

        let tree = MappingTree::new(CompositeNode::new(
            "",
            "",
            ROOT_KIND,
            FieldParams::new(),
            root.parent_contains_dimensions(),
            root.flags(),
            fields,
        ));
        let stats = AssemblyStats {
            fields: scope.names.len(),
            max_depth: summary.max_depth,
        };

        Ok((tree, stats))
    }
}

impl Default for TreeAssembler {
    fn default() -> Self {
        Self::with_defaults()
    }
}

impl MappingAssembler for TreeAssembler {
    fn assemble(
        &self,
        root: &MapperBuilderContext,
        definition: &MappingDefinition,
    ) -> Result<MappingTree> {
        TreeAssembler::assemble(self, root, definition)
    }
}

/// Everything one build shares across the recursion
struct BuildScope<'a> {
    kinds: &'a FieldKindRegistry,
    config: &'a AssemblyConfig,
    names: NameRegistry,
}

impl BuildScope<'_> {
    fn build_field(
        &self,
        context: &MapperBuilderContext,
        definition: &FieldDefinition,
    ) -> Result<Node> {
        let full_name = context.build_full_name(&definition.name);

        let builder = self.kinds.resolve(&definition.kind).ok_or_else(|| {
            MapperError::definition(
                &full_name,
                format!("no handler for field kind '{}'", definition.kind),
            )
        })?;

        self.names.register(&full_name)?;

        let node = builder.build(context, definition, self)?;
        if node.full_name() != full_name {
            return Err(MapperError::definition(
                full_name,
                format!(
                    "builder for kind '{}' produced a node named '{}'",
                    definition.kind,
                    node.full_name()
                ),
            ));
        }

        Ok(node)
    }

    fn parallel(&self, siblings: usize) -> bool {
        self.config.parallel_siblings && siblings >= self.config.parallel_threshold
    }
}

impl ChildAssembler for BuildScope<'_> {
    fn assemble_children(
        &self,
        context: &MapperBuilderContext,
        definitions: &[FieldDefinition],
    ) -> Result<IndexMap<String, Node>> {
        let nodes: Vec<Node> = if self.parallel(definitions.len()) {
            debug!(
                "building {} siblings at depth {} in parallel",
                definitions.len(),
                context.depth() + 1
            );
            definitions
                .par_iter()
                .map(|definition| self.build_field(context, definition))
                .collect::<Result<_>>()?
        } else {
            definitions
                .iter()
                .map(|definition| self.build_field(context, definition))
                .collect::<Result<_>>()?
        };

        Ok(nodes
            .into_iter()
            .map(|node| (node.name().to_string(), node))
            .collect())
    }
}
