/*
 * Mapping IR - schema tree assembly and merge
 *
 * Feature-First Hexagonal Architecture:
 * - shared/      : Cross-feature models (MergeReason, FieldDefinition)
 * - features/    : Vertical slices (builder_context → field_mapping → tree_assembly → merge)
 * - config/      : Assembly limits and merge policy overrides (YAML v1)
 * - errors.rs    : MapperError
 *
 * A definition enters the assembler together with a root context; the
 * assembler descends depth-first, deriving one immutable child context per
 * composite and invoking the builder registered for each field's kind. Two
 * assembled trees can then be merged under a merge reason, yielding either a
 * reconciled tree or the complete list of conflicts.
 */

// Crate-level lint configuration
#![allow(clippy::should_implement_trait)] // from_str naming intentional
#![allow(clippy::new_without_default)] // Default impl not always needed
#![allow(clippy::derivable_impls)] // Manual impl for documentation
#![allow(clippy::too_many_arguments)] // Node constructors carry every attribute

// ═══════════════════════════════════════════════════════════════════════════
// Module Exports - Feature-First Architecture
// ═══════════════════════════════════════════════════════════════════════════

/// Shared models
pub mod shared;

/// Feature modules
pub mod features;

/// Configuration system
pub mod config;

/// Error types
pub mod errors;

// ═══════════════════════════════════════════════════════════════════════════
// Re-exports for Public API
// ═══════════════════════════════════════════════════════════════════════════

pub use config::{AssemblyConfig, ConfigError, MapperConfig};
pub use errors::{MapperError, Result};
pub use features::builder_context::{BuildFlags, MapperBuilderContext};
pub use features::field_mapping::{
    CompositeNode, FieldBuilder, FieldKindRegistry, LeafNode, MappingTree, Node,
};
pub use features::merge::{ConflictReport, ConflictRule, MergePolicy, MergePolicyTable, TreeMerger};
pub use features::tree_assembly::{AssemblyState, TreeAssembler};
pub use shared::models::{FieldDefinition, MappingDefinition, MergeReason};
