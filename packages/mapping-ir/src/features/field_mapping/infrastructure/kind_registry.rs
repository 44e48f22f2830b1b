//! Field-kind registry
//!
//! Capability table resolving a declared kind string to its builder. The
//! table is filled at setup time and shared read-only (behind `Arc`) during
//! traversal, so every kind is resolved against the same frozen table.

use ahash::AHashMap;
use std::sync::Arc;

use super::{LeafFieldBuilder, ObjectFieldBuilder};
use crate::errors::{MapperError, Result};
use crate::features::field_mapping::ports::FieldBuilder;

/// Scalar kinds registered by [`FieldKindRegistry::with_defaults`]
pub const DEFAULT_LEAF_KINDS: &[&str] = &[
    "keyword", "text", "long", "integer", "short", "byte", "double", "float", "boolean", "date",
    "ip", "binary",
];

/// Kind string → builder
#[derive(Clone, Default)]
pub struct FieldKindRegistry {
    builders: AHashMap<String, Arc<dyn FieldBuilder>>,
}

impl FieldKindRegistry {
    /// Empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry with the default leaf kinds plus `object`, `nested` and
    /// `passthrough` composites
    pub fn with_defaults() -> Self {
        let mut builders: AHashMap<String, Arc<dyn FieldBuilder>> = AHashMap::new();

        for kind in DEFAULT_LEAF_KINDS {
            builders.insert((*kind).to_string(), Arc::new(LeafFieldBuilder::new(*kind)));
        }
        for composite in [
            ObjectFieldBuilder::object(),
            ObjectFieldBuilder::nested(),
            ObjectFieldBuilder::passthrough(),
        ] {
            builders.insert(composite.kind().to_string(), Arc::new(composite));
        }

        Self { builders }
    }

    /// Register a builder under its own kind; a kind can be registered once
    pub fn register(&mut self, builder: Arc<dyn FieldBuilder>) -> Result<()> {
        let kind = builder.kind().to_string();
        if self.builders.contains_key(&kind) {
            return Err(MapperError::DuplicateKind(kind));
        }
        self.builders.insert(kind, builder);
        Ok(())
    }

    /// Builder for `kind`, if registered
    pub fn resolve(&self, kind: &str) -> Option<&dyn FieldBuilder> {
        self.builders.get(kind).map(|b| b.as_ref())
    }

    pub fn contains(&self, kind: &str) -> bool {
        self.builders.contains_key(kind)
    }

    /// Registered kinds, sorted
    pub fn kinds(&self) -> Vec<&str> {
        let mut kinds: Vec<&str> = self.builders.keys().map(|k| k.as_str()).collect();
        kinds.sort_unstable();
        kinds
    }

    pub fn len(&self) -> usize {
        self.builders.len()
    }

    pub fn is_empty(&self) -> bool {
        self.builders.is_empty()
    }
}

impl std::fmt::Debug for FieldKindRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FieldKindRegistry")
            .field("kinds", &self.kinds())
            .finish()
    }
}
