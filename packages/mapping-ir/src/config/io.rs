//! Configuration I/O (YAML)
//!
//! Defines the YAML schema types. Conversion to and from `MapperConfig` lives
//! in mapper_config.rs.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use super::assembly_config::AssemblyConfig;
use crate::features::merge::MergePolicy;

/// Current YAML schema version
pub const CONFIG_VERSION: u32 = 1;

/// YAML Schema v1
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ConfigExportV1 {
    /// Schema version (always 1 for v1); optional only so a missing key gets
    /// a dedicated error
    pub version: Option<u32>,

    /// Assembly limits
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub assembly: Option<AssemblyConfig>,

    /// Per-reason merge policy rows, keyed by merge reason name
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub merge_policies: Option<BTreeMap<String, MergePolicy>>,
}
