//! Tree assembly limits and parallelism settings

use serde::{Deserialize, Serialize};

use super::error::{ConfigError, ConfigResult};
use super::validation::Validatable;

/// Default nesting limit (`index.mapping.depth.limit`)
pub const DEFAULT_MAX_DEPTH: usize = 20;

/// Default total field limit (`index.mapping.total_fields.limit`)
pub const DEFAULT_MAX_FIELDS: usize = 1000;

/// Sibling count from which parallel assembly kicks in
pub const DEFAULT_PARALLEL_THRESHOLD: usize = 32;

/// Tree assembly configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AssemblyConfig {
    /// Maximum field depth (1..=1000); top-level fields have depth 1
    pub max_depth: usize,

    /// Maximum number of fields in one mapping (1..=1000000)
    pub max_fields: usize,

    /// Build sibling subtrees on the rayon pool
    pub parallel_siblings: bool,

    /// Minimum sibling count for a parallel fan-out (2..=100000)
    pub parallel_threshold: usize,
}

impl Default for AssemblyConfig {
    fn default() -> Self {
        Self {
            max_depth: DEFAULT_MAX_DEPTH,
            max_fields: DEFAULT_MAX_FIELDS,
            parallel_siblings: false,
            parallel_threshold: DEFAULT_PARALLEL_THRESHOLD,
        }
    }
}

impl AssemblyConfig {
    /// Validate configuration
    pub fn validate(&self) -> ConfigResult<()> {
        if self.max_depth == 0 || self.max_depth > 1000 {
            return Err(ConfigError::range_with_hint(
                "max_depth",
                self.max_depth,
                1,
                1000,
                "Mappings need at least one level of fields",
            ));
        }

        if self.max_fields == 0 || self.max_fields > 1_000_000 {
            return Err(ConfigError::range_with_hint(
                "max_fields",
                self.max_fields,
                1,
                1_000_000,
                "Total field count must be reasonable",
            ));
        }

        if self.parallel_threshold < 2 || self.parallel_threshold > 100_000 {
            return Err(ConfigError::range_with_hint(
                "parallel_threshold",
                self.parallel_threshold,
                2,
                100_000,
                "A parallel fan-out needs at least two siblings",
            ));
        }

        Ok(())
    }

    /// Builder: Set max_depth
    pub fn max_depth(mut self, v: usize) -> Self {
        self.max_depth = v;
        self
    }

    /// Builder: Set max_fields
    pub fn max_fields(mut self, v: usize) -> Self {
        self.max_fields = v;
        self
    }

    /// Builder: Set parallel_siblings
    pub fn parallel_siblings(mut self, v: bool) -> Self {
        self.parallel_siblings = v;
        self
    }

    /// Builder: Set parallel_threshold
    pub fn parallel_threshold(mut self, v: usize) -> Self {
        self.parallel_threshold = v;
        self
    }
}

impl Validatable for AssemblyConfig {
    fn validate(&self) -> ConfigResult<()> {
        AssemblyConfig::validate(self)
    }

    fn config_name(&self) -> &'static str {
        "AssemblyConfig"
    }
}
