//! Merge reasons
//!
//! A merge reason justifies reconciling two mapping trees. It travels through
//! every build context untouched; only the merge policy inspects it.

use serde::{Deserialize, Serialize};

/// Why two mapping trees are being reconciled
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MergeReason {
    /// Ordinary schema-update request
    MappingUpdate,

    /// Dry run of a schema update, validated but not applied
    MappingUpdatePreflight,

    /// Application of an index template
    IndexTemplate,

    /// Replay of a persisted schema during recovery
    MappingRecovery,
}

impl MergeReason {
    /// Every reason, in declaration order
    pub const ALL: [MergeReason; 4] = [
        MergeReason::MappingUpdate,
        MergeReason::MappingUpdatePreflight,
        MergeReason::IndexTemplate,
        MergeReason::MappingRecovery,
    ];

    /// Parse reason from its snake_case name (exact match, as serde does)
    pub fn from_str(s: &str) -> Result<Self, String> {
        match s {
            "mapping_update" => Ok(Self::MappingUpdate),
            "mapping_update_preflight" => Ok(Self::MappingUpdatePreflight),
            "index_template" => Ok(Self::IndexTemplate),
            "mapping_recovery" => Ok(Self::MappingRecovery),
            _ => Err(format!(
                "Unknown merge reason '{}'. Valid reasons: {}",
                s,
                Self::ALL
                    .iter()
                    .map(|r| r.as_str())
                    .collect::<Vec<_>>()
                    .join(", ")
            )),
        }
    }

    /// Convert to string
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::MappingUpdate => "mapping_update",
            Self::MappingUpdatePreflight => "mapping_update_preflight",
            Self::IndexTemplate => "index_template",
            Self::MappingRecovery => "mapping_recovery",
        }
    }
}

impl Default for MergeReason {
    fn default() -> Self {
        Self::MappingUpdate
    }
}

impl std::fmt::Display for MergeReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
