/*
 * Mapper Builder Context
 *
 * Immutable, copy-on-derive replacement for a mutable "current path" stack:
 * - `root()` creates the only context without a path
 * - `create_child_context()` returns a new value one segment deeper
 * - `build_full_name()` is the sole naming authority for nodes
 *
 * The merge reason is carried verbatim and never branched on here.
 */

use super::build_flags::BuildFlags;
use crate::errors::{MapperError, Result};
use crate::shared::models::MergeReason;

/// Separator between path segments of a full name
pub const PATH_SEPARATOR: char = '.';

/// Holds context for building mapping nodes from their definitions
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MapperBuilderContext {
    /// Path segments from the root; empty only at the root
    path: Vec<String>,
    is_source_synthetic: bool,
    is_data_stream: bool,
    parent_contains_dimensions: bool,
    merge_reason: MergeReason,
}

impl MapperBuilderContext {
    /// Root context with the default merge reason (`mapping_update`)
    pub fn root(is_source_synthetic: bool, is_data_stream: bool) -> Self {
        Self::root_with_reason(is_source_synthetic, is_data_stream, MergeReason::default())
    }

    /// Root context for a build governed by `merge_reason`
    pub fn root_with_reason(
        is_source_synthetic: bool,
        is_data_stream: bool,
        merge_reason: MergeReason,
    ) -> Self {
        Self {
            path: Vec::new(),
            is_source_synthetic,
            is_data_stream,
            parent_contains_dimensions: false,
            merge_reason,
        }
    }

    /// Context for the children of the field `name` living in this context.
    ///
    /// Every flag is inherited unchanged.
    pub fn create_child_context(&self, name: &str) -> Result<Self> {
        self.create_child_context_with_dimensions(name, false)
    }

    /// Like [`create_child_context`](Self::create_child_context), but lets a
    /// composite declare its subtree dimension-bearing. The flag is OR-ed into
    /// the inherited value: it can be raised, never lowered.
    pub fn create_child_context_with_dimensions(
        &self,
        name: &str,
        contains_dimensions: bool,
    ) -> Result<Self> {
        validate_name(name)?;

        let mut path = Vec::with_capacity(self.path.len() + 1);
        path.extend(self.path.iter().cloned());
        path.push(name.to_string());

        Ok(Self {
            path,
            is_source_synthetic: self.is_source_synthetic,
            is_data_stream: self.is_data_stream,
            parent_contains_dimensions: self.parent_contains_dimensions || contains_dimensions,
            merge_reason: self.merge_reason,
        })
    }

    /// Full name of the field `name` living in this context.
    ///
    /// Returns `name` unchanged at the root, `path.name` otherwise.
    pub fn build_full_name(&self, name: &str) -> String {
        if self.path.is_empty() {
            return name.to_string();
        }

        let mut full_name = String::with_capacity(
            self.path.iter().map(|s| s.len() + 1).sum::<usize>() + name.len(),
        );
        for segment in &self.path {
            full_name.push_str(segment);
            full_name.push(PATH_SEPARATOR);
        }
        full_name.push_str(name);
        full_name
    }

    /// Path segments, `None` at the root
    pub fn path(&self) -> Option<&[String]> {
        if self.path.is_empty() {
            None
        } else {
            Some(&self.path)
        }
    }

    /// Number of path segments (0 at the root)
    pub fn depth(&self) -> usize {
        self.path.len()
    }

    pub fn is_root(&self) -> bool {
        self.path.is_empty()
    }

    /// Is the `_source` field being reconstructed on the fly?
    pub fn is_source_synthetic(&self) -> bool {
        self.is_source_synthetic
    }

    /// Are these mappings being built for a data stream?
    pub fn is_data_stream(&self) -> bool {
        self.is_data_stream
    }

    /// Are these fields being built under a dimension-bearing composite?
    pub fn parent_contains_dimensions(&self) -> bool {
        self.parent_contains_dimensions
    }

    /// Merge reason governing this build
    pub fn merge_reason(&self) -> MergeReason {
        self.merge_reason
    }

    /// Snapshot of the inherited flags, recorded on every built node
    pub fn flags(&self) -> BuildFlags {
        BuildFlags {
            is_source_synthetic: self.is_source_synthetic,
            is_data_stream: self.is_data_stream,
            parent_contains_dimensions: self.parent_contains_dimensions,
        }
    }
}

/// Reject names that would collapse distinct tree positions onto one full name
pub fn validate_name(name: &str) -> Result<()> {
    if name.is_empty() {
        return Err(MapperError::invalid_argument("field name must not be empty"));
    }

    if name.starts_with(PATH_SEPARATOR)
        || name.ends_with(PATH_SEPARATOR)
        || name.contains("..")
    {
        return Err(MapperError::invalid_argument(format!(
            "field name '{}' contains an empty path segment",
            name
        )));
    }

    Ok(())
}
