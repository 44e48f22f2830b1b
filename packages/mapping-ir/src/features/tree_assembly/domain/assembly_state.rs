//! Assembly state machine
//!
//! `Building` is the only non-terminal state. A build ends in exactly one of
//! `Succeeded` (complete tree) or `Failed` (first error, no partial tree).

use crate::errors::{MapperError, Result};
use crate::features::field_mapping::MappingTree;

/// Counters collected by a successful build
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AssemblyStats {
    /// Nodes built, root excluded
    pub fields: usize,
    /// Deepest field depth (top-level fields have depth 1)
    pub max_depth: usize,
}

/// State of one assembler invocation
#[derive(Debug)]
pub enum AssemblyState {
    Building,
    Succeeded {
        tree: MappingTree,
        stats: AssemblyStats,
    },
    Failed(MapperError),
}

impl AssemblyState {
    pub fn state_name(&self) -> &'static str {
        match self {
            AssemblyState::Building => "building",
            AssemblyState::Succeeded { .. } => "succeeded",
            AssemblyState::Failed(_) => "failed",
        }
    }

    pub fn is_terminal(&self) -> bool {
        !matches!(self, AssemblyState::Building)
    }

    /// Building → Succeeded; a terminal state is returned unchanged
    pub fn succeed(self, tree: MappingTree, stats: AssemblyStats) -> Self {
        match self {
            AssemblyState::Building => AssemblyState::Succeeded { tree, stats },
            terminal => terminal,
        }
    }

    /// Building → Failed; a terminal state is returned unchanged
    pub fn fail(self, error: MapperError) -> Self {
        match self {
            AssemblyState::Building => AssemblyState::Failed(error),
            terminal => terminal,
        }
    }

    pub fn tree(&self) -> Option<&MappingTree> {
        match self {
            AssemblyState::Succeeded { tree, .. } => Some(tree),
            _ => None,
        }
    }

    pub fn stats(&self) -> Option<AssemblyStats> {
        match self {
            AssemblyState::Succeeded { stats, .. } => Some(*stats),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&MapperError> {
        match self {
            AssemblyState::Failed(error) => Some(error),
            _ => None,
        }
    }

    /// Tree of a succeeded build, error of a failed one
    pub fn into_result(self) -> Result<MappingTree> {
        match self {
            AssemblyState::Succeeded { tree, .. } => Ok(tree),
            AssemblyState::Failed(error) => Err(error),
            AssemblyState::Building => Err(MapperError::invalid_argument(
                "assembly has not reached a terminal state",
            )),
        }
    }
}
