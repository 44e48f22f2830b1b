//! Top-level mapper configuration
//!
//! Two levels of control:
//! - builder closures for programmatic overrides
//! - YAML v1 files for complete control
//!
//! ```rust,ignore
//! use mapping_ir::config::MapperConfig;
//!
//! let config = MapperConfig::default()
//!     .assembly(|c| c.max_depth(10).parallel_siblings(true));
//!
//! let config = MapperConfig::from_yaml("mapper.yaml")?;
//! ```

use std::path::Path;

use tracing::debug;

use super::assembly_config::AssemblyConfig;
use super::error::{ConfigError, ConfigResult};
use super::io::{ConfigExportV1, CONFIG_VERSION};
use super::validation::Validatable;
use crate::features::merge::{MergePolicy, MergePolicyTable};
use crate::shared::models::MergeReason;

/// Assembly limits plus the merge policy table
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MapperConfig {
    assembly: AssemblyConfig,
    merge_policies: MergePolicyTable,
}

impl MapperConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Override assembly settings
    pub fn assembly<F>(mut self, f: F) -> Self
    where
        F: FnOnce(AssemblyConfig) -> AssemblyConfig,
    {
        self.assembly = f(self.assembly);
        self
    }

    /// Override the policy table
    pub fn merge_policies<F>(mut self, f: F) -> Self
    where
        F: FnOnce(MergePolicyTable) -> MergePolicyTable,
    {
        self.merge_policies = f(self.merge_policies);
        self
    }

    /// Override a single policy row
    pub fn merge_policy(mut self, reason: MergeReason, policy: MergePolicy) -> Self {
        self.merge_policies.set(reason, policy);
        self
    }

    pub fn assembly_config(&self) -> &AssemblyConfig {
        &self.assembly
    }

    pub fn policy_table(&self) -> &MergePolicyTable {
        &self.merge_policies
    }

    /// Load and validate a YAML v1 file
    pub fn from_yaml(path: impl AsRef<Path>) -> ConfigResult<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)?;
        debug!("loading mapper config from {}", path.display());
        Self::from_yaml_str(&content)
    }

    /// Parse and validate YAML v1 content
    pub fn from_yaml_str(content: &str) -> ConfigResult<Self> {
        let export: ConfigExportV1 = serde_yaml::from_str(content)?;

        match export.version {
            None => return Err(ConfigError::MissingVersion),
            Some(CONFIG_VERSION) => {}
            Some(found) => {
                return Err(ConfigError::UnsupportedVersion {
                    found,
                    supported: vec![CONFIG_VERSION],
                })
            }
        }

        let mut config = Self::default();

        if let Some(assembly) = export.assembly {
            config.assembly = assembly;
        }

        if let Some(policies) = export.merge_policies {
            for (key, policy) in policies {
                let reason = MergeReason::from_str(&key).map_err(|_| {
                    ConfigError::unknown_field_with_suggestion(
                        key.clone(),
                        "merge_policies",
                        MergeReason::ALL
                            .iter()
                            .map(|r| r.as_str().to_string())
                            .collect(),
                    )
                })?;
                config.merge_policies.set(reason, policy);
            }
        }

        config.validate()?;
        Ok(config)
    }

    /// Export as YAML v1 (every policy row written out)
    pub fn to_yaml(&self) -> ConfigResult<String> {
        let export = ConfigExportV1 {
            version: Some(CONFIG_VERSION),
            assembly: Some(self.assembly.clone()),
            merge_policies: Some(
                self.merge_policies
                    .iter()
                    .map(|(reason, policy)| (reason.as_str().to_string(), policy))
                    .collect(),
            ),
        };

        Ok(serde_yaml::to_string(&export)?)
    }
}

impl Validatable for MapperConfig {
    fn validate(&self) -> ConfigResult<()> {
        self.assembly.validate()
    }

    fn config_name(&self) -> &'static str {
        "MapperConfig"
    }
}
