//! Merge policies
//!
//! One row of decisions per merge reason. Adding a reason or changing its
//! behavior is a table edit, not a change to the merge walk.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::shared::models::MergeReason;

/// Decisions consulted by the merge walk
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct MergePolicy {
    /// Fields present only in the existing tree survive (partial updates).
    /// When false the incoming tree must be a superset.
    pub allow_omission: bool,

    /// Incoming parameters may replace those of an existing field
    pub allow_redefinition: bool,
}

impl MergePolicy {
    /// Partial updates, incoming definition wins
    pub const PERMISSIVE: MergePolicy = MergePolicy {
        allow_omission: true,
        allow_redefinition: true,
    };

    /// Incoming must restate every existing field unchanged
    pub const STRICT: MergePolicy = MergePolicy {
        allow_omission: false,
        allow_redefinition: false,
    };
}

impl Default for MergePolicy {
    fn default() -> Self {
        Self::PERMISSIVE
    }
}

/// Merge reason → policy
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MergePolicyTable {
    policies: BTreeMap<MergeReason, MergePolicy>,
}

impl MergePolicyTable {
    /// Policy for `reason`; reasons without a row fall back to permissive
    pub fn policy(&self, reason: MergeReason) -> MergePolicy {
        self.policies.get(&reason).copied().unwrap_or_default()
    }

    /// Replace the row for `reason`
    pub fn set(&mut self, reason: MergeReason, policy: MergePolicy) {
        self.policies.insert(reason, policy);
    }

    /// Builder: replace the row for `reason`
    pub fn with(mut self, reason: MergeReason, policy: MergePolicy) -> Self {
        self.set(reason, policy);
        self
    }

    pub fn iter(&self) -> impl Iterator<Item = (MergeReason, MergePolicy)> + '_ {
        self.policies.iter().map(|(r, p)| (*r, *p))
    }
}

impl Default for MergePolicyTable {
    fn default() -> Self {
        let policies = BTreeMap::from([
            (MergeReason::MappingUpdate, MergePolicy::PERMISSIVE),
            (MergeReason::MappingUpdatePreflight, MergePolicy::PERMISSIVE),
            (MergeReason::IndexTemplate, MergePolicy::PERMISSIVE),
            (MergeReason::MappingRecovery, MergePolicy::STRICT),
        ]);
        Self { policies }
    }
}
