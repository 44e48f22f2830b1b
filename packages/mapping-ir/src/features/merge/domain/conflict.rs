//! Merge conflicts
//!
//! A conflict report lists every offending full name with the rule it broke,
//! so whoever authored the incoming definition sees the full remediation path.

use serde::Serialize;

use crate::features::builder_context::BuildFlags;
use crate::shared::models::MergeReason;

/// Rule violated at one full name
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "rule", rename_all = "snake_case")]
pub enum ConflictRule {
    /// Same full name, different kind (leaf vs composite included)
    KindMismatch { existing: String, incoming: String },

    /// A leaf's dimension role flipped
    DimensionChange { existing: bool, incoming: bool },

    /// Parameters changed under a reason that forbids redefinition
    Redefinition,

    /// Field missing from incoming under a reason that requires a superset
    FieldOmitted,

    /// Same full name reached through a different object path
    PathMismatch,

    /// Trees built for a different source mode or data-stream membership
    RootFlagsChange {
        existing: BuildFlags,
        incoming: BuildFlags,
    },
}

impl std::fmt::Display for ConflictRule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConflictRule::KindMismatch { existing, incoming } => write!(
                f,
                "cannot change kind from [{}] to [{}]",
                existing, incoming
            ),
            ConflictRule::DimensionChange { existing, incoming } => write!(
                f,
                "cannot change dimension role from [{}] to [{}]",
                existing, incoming
            ),
            ConflictRule::Redefinition => write!(f, "cannot redefine an existing field"),
            ConflictRule::FieldOmitted => write!(f, "existing field is missing from the update"),
            ConflictRule::PathMismatch => {
                write!(f, "field is already mapped under a different object path")
            }
            ConflictRule::RootFlagsChange { existing, incoming } => write!(
                f,
                "cannot change root flags from [synthetic_source={}, data_stream={}] to [synthetic_source={}, data_stream={}]",
                existing.is_source_synthetic,
                existing.is_data_stream,
                incoming.is_source_synthetic,
                incoming.is_data_stream
            ),
        }
    }
}

/// One offending full name
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MergeConflict {
    pub full_name: String,
    #[serde(flatten)]
    pub rule: ConflictRule,
}

impl MergeConflict {
    pub fn new(full_name: impl Into<String>, rule: ConflictRule) -> Self {
        Self {
            full_name: full_name.into(),
            rule,
        }
    }
}

impl std::fmt::Display for MergeConflict {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}]: {}", self.full_name, self.rule)
    }
}

/// Complete list of conflicts found by one merge
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ConflictReport {
    reason: MergeReason,
    conflicts: Vec<MergeConflict>,
}

impl ConflictReport {
    pub fn new(reason: MergeReason, conflicts: Vec<MergeConflict>) -> Self {
        Self { reason, conflicts }
    }

    pub fn reason(&self) -> MergeReason {
        self.reason
    }

    /// Conflicts in walk order (depth-first, existing fields first)
    pub fn conflicts(&self) -> &[MergeConflict] {
        &self.conflicts
    }

    pub fn len(&self) -> usize {
        self.conflicts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.conflicts.is_empty()
    }

    /// Offending full names
    pub fn full_names(&self) -> Vec<&str> {
        self.conflicts.iter().map(|c| c.full_name.as_str()).collect()
    }

    /// Conflict at `full_name`, if any
    pub fn find(&self, full_name: &str) -> Option<&MergeConflict> {
        self.conflicts.iter().find(|c| c.full_name == full_name)
    }

    /// One line per conflict, joined with "; "
    pub fn describe(&self) -> String {
        self.conflicts
            .iter()
            .map(|c| c.to_string())
            .collect::<Vec<_>>()
            .join("; ")
    }
}

impl std::fmt::Display for ConflictReport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "merge for reason '{}' rejected with {} conflict(s): {}",
            self.reason,
            self.conflicts.len(),
            self.describe()
        )
    }
}

impl std::error::Error for ConflictReport {}
