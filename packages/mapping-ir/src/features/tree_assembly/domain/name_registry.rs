//! Name Registry
//!
//! Collects every full name produced during one build and rejects repeats.
//! Backed by a lock-free `DashSet` so parallel sibling subtrees can register
//! without coordination; the check-and-insert is a single atomic step.
//!
//! A registry lives exactly as long as one assembler invocation.

use dashmap::DashSet;

use crate::errors::{MapperError, Result};

/// Per-build set of full names
#[derive(Debug, Default)]
pub struct NameRegistry {
    names: DashSet<String>,
}

impl NameRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-sized for a build of `capacity` fields
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            names: DashSet::with_capacity(capacity),
        }
    }

    /// Record `full_name`; a second registration of the same name fails
    pub fn register(&self, full_name: &str) -> Result<()> {
        if self.names.insert(full_name.to_string()) {
            Ok(())
        } else {
            Err(MapperError::DuplicateName {
                full_name: full_name.to_string(),
            })
        }
    }

    pub fn contains(&self, full_name: &str) -> bool {
        self.names.contains(full_name)
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}
