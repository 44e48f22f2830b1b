/*
 * Tree Merger - lock-step reconciliation of two mapping trees
 *
 * Walks both trees parent by parent, matching children on local name:
 * - present in both, same kind: incoming wins, unless the policy forbids
 *   redefinition and the parameters differ
 * - present in both, different kind or flipped dimension role: always a
 *   conflict, reported once at the topmost offending full name
 * - only in incoming: added, unless one of its full names is already mapped
 *   elsewhere in the existing tree (dotted local names reach the same full
 *   name through a different object path)
 * - only in existing: kept, or a conflict when the policy requires a
 *   superset (reported once, at the topmost omitted full name)
 *
 * Trees built with different root flags are never merged.
 * The merged tree is built fresh; neither input is touched.
 */

use ahash::AHashMap;
use indexmap::IndexMap;
use tracing::{debug, info, warn};

use crate::features::field_mapping::{CompositeNode, LeafNode, MappingTree, Node, ROOT_KIND};
use crate::features::merge::domain::{
    ConflictReport, ConflictRule, MergeConflict, MergePolicy, MergePolicyTable,
};
use crate::features::merge::ports::{MappingMerger, MergeResult};
use crate::shared::models::MergeReason;

/// Policy-table driven merger
#[derive(Debug, Clone, Default)]
pub struct TreeMerger {
    policies: MergePolicyTable,
}

impl TreeMerger {
    pub fn new(policies: MergePolicyTable) -> Self {
        Self { policies }
    }

    pub fn policies(&self) -> &MergePolicyTable {
        &self.policies
    }
}

impl MappingMerger for TreeMerger {
    fn merge(
        &self,
        existing: &MappingTree,
        incoming: &MappingTree,
        reason: MergeReason,
    ) -> MergeResult {
        let (before, after) = (existing.flags(), incoming.flags());
        if before.is_source_synthetic != after.is_source_synthetic
            || before.is_data_stream != after.is_data_stream
        {
            warn!(
                "merge under '{}' rejected: root flags changed from {:?} to {:?}",
                reason, before, after
            );
            return Err(ConflictReport::new(
                reason,
                vec![MergeConflict::new(
                    ROOT_KIND,
                    ConflictRule::RootFlagsChange {
                        existing: before,
                        incoming: after,
                    },
                )],
            ));
        }

        let mut walk = MergeWalk {
            policy: self.policies.policy(reason),
            existing_names: existing.iter().map(|n| (n.full_name(), n)).collect(),
            conflicts: Vec::new(),
        };

        let children = walk.merge_children(existing.root().children(), incoming.root().children());

        if walk.conflicts.is_empty() {
            let merged = MappingTree::new(incoming.root().with_children(children));
            info!(
                "merged mapping under '{}': {} -> {} fields",
                reason,
                existing.len(),
                merged.len()
            );
            Ok(merged)
        } else {
            warn!(
                "merge under '{}' rejected with {} conflicts",
                reason,
                walk.conflicts.len()
            );
            Err(ConflictReport::new(reason, walk.conflicts))
        }
    }
}

/// State of one merge: the policy row, every existing node by full name and
/// the conflicts found so far
struct MergeWalk<'a> {
    policy: MergePolicy,
    existing_names: AHashMap<&'a str, &'a Node>,
    conflicts: Vec<MergeConflict>,
}

impl<'a> MergeWalk<'a> {
    fn conflict(&mut self, full_name: &str, rule: ConflictRule) {
        debug!("merge conflict at '{}': {}", full_name, rule);
        self.conflicts.push(MergeConflict::new(full_name, rule));
    }

    /// Existing order first, incoming-only fields appended in incoming order
    fn merge_children(
        &mut self,
        existing: &IndexMap<String, Node>,
        incoming: &IndexMap<String, Node>,
    ) -> IndexMap<String, Node> {
        let mut merged = IndexMap::with_capacity(existing.len().max(incoming.len()));

        for (name, existing_node) in existing {
            match incoming.get(name) {
                Some(incoming_node) => {
                    if let Some(node) = self.merge_node(existing_node, incoming_node) {
                        merged.insert(name.clone(), node);
                    }
                }
                None if self.policy.allow_omission => {
                    merged.insert(name.clone(), existing_node.clone());
                }
                None => self.conflict(existing_node.full_name(), ConflictRule::FieldOmitted),
            }
        }

        for (name, incoming_node) in incoming {
            if !existing.contains_key(name) {
                self.check_added(incoming_node);
                merged.insert(name.clone(), incoming_node.clone());
            }
        }

        merged
    }

    /// An added subtree must not map a full name the existing tree already
    /// holds under a different object path
    fn check_added(&mut self, added: &Node) {
        let mut stack = vec![added];
        while let Some(node) = stack.pop() {
            if let Some(existing) = self.existing_names.get(node.full_name()).copied() {
                let rule = if existing.is_composite() != node.is_composite()
                    || existing.kind() != node.kind()
                {
                    ConflictRule::KindMismatch {
                        existing: existing.kind().to_string(),
                        incoming: node.kind().to_string(),
                    }
                } else {
                    ConflictRule::PathMismatch
                };
                self.conflict(node.full_name(), rule);
            }
            if let Node::Composite(composite) = node {
                stack.extend(composite.children().values().rev());
            }
        }
    }

    fn merge_node(&mut self, existing: &Node, incoming: &Node) -> Option<Node> {
        match (existing, incoming) {
            (Node::Leaf(e), Node::Leaf(i)) if e.kind() == i.kind() => self.merge_leaf(e, i),
            (Node::Composite(e), Node::Composite(i)) if e.kind() == i.kind() => {
                self.merge_composite(e, i)
            }
            _ => {
                self.conflict(
                    existing.full_name(),
                    ConflictRule::KindMismatch {
                        existing: existing.kind().to_string(),
                        incoming: incoming.kind().to_string(),
                    },
                );
                None
            }
        }
    }

    fn merge_leaf(&mut self, existing: &LeafNode, incoming: &LeafNode) -> Option<Node> {
        if existing.is_dimension() != incoming.is_dimension() {
            self.conflict(
                existing.full_name(),
                ConflictRule::DimensionChange {
                    existing: existing.is_dimension(),
                    incoming: incoming.is_dimension(),
                },
            );
            return None;
        }

        if existing.params() != incoming.params() && !self.policy.allow_redefinition {
            self.conflict(existing.full_name(), ConflictRule::Redefinition);
            return None;
        }

        Some(Node::Leaf(incoming.clone()))
    }

    fn merge_composite(
        &mut self,
        existing: &CompositeNode,
        incoming: &CompositeNode,
    ) -> Option<Node> {
        // every descendant inherits the flip; report it here only
        if existing.contains_dimensions() != incoming.contains_dimensions() {
            self.conflict(
                existing.full_name(),
                ConflictRule::DimensionChange {
                    existing: existing.contains_dimensions(),
                    incoming: incoming.contains_dimensions(),
                },
            );
            return None;
        }

        if existing.params() != incoming.params() && !self.policy.allow_redefinition {
            self.conflict(existing.full_name(), ConflictRule::Redefinition);
        }

        let children = self.merge_children(existing.children(), incoming.children());
        Some(Node::Composite(incoming.with_children(children)))
    }
}
