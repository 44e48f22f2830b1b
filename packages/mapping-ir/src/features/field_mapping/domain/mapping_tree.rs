//! Mapping Tree - the assembled schema snapshot
//!
//! Owned as a whole: lookups hand out shared references only, since name
//! uniqueness and flag provenance hold for the complete tree, not for
//! detached sub-nodes.

use indexmap::IndexMap;
use serde::Serialize;

use super::node::{CompositeNode, Node};
use crate::features::builder_context::{BuildFlags, PATH_SEPARATOR};

/// Kind recorded on the root composite
pub const ROOT_KIND: &str = "_doc";

/// Complete, read-only mapping tree
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MappingTree {
    root: CompositeNode,
}

impl MappingTree {
    pub(crate) fn new(root: CompositeNode) -> Self {
        Self { root }
    }

    /// Root composite (empty name and full name)
    pub fn root(&self) -> &CompositeNode {
        &self.root
    }

    /// Flags of the root context the tree was built with
    pub fn flags(&self) -> BuildFlags {
        self.root.flags()
    }

    /// Top-level fields in declaration order
    pub fn fields(&self) -> &IndexMap<String, Node> {
        self.root.children()
    }

    /// Node by full name
    pub fn get(&self, full_name: &str) -> Option<&Node> {
        find_in(self.root.children(), full_name)
    }

    pub fn contains(&self, full_name: &str) -> bool {
        self.get(full_name).is_some()
    }

    /// Depth-first, declaration-ordered walk over every node (root excluded)
    pub fn iter(&self) -> NodeIter<'_> {
        NodeIter::new(self.root.children())
    }

    /// Full names in depth-first declaration order
    pub fn full_names(&self) -> Vec<&str> {
        self.iter().map(|node| node.full_name()).collect()
    }

    /// Number of nodes (root excluded)
    pub fn len(&self) -> usize {
        self.iter().count()
    }

    pub fn is_empty(&self) -> bool {
        self.root.children().is_empty()
    }
}

fn find_in<'a>(children: &'a IndexMap<String, Node>, full_name: &str) -> Option<&'a Node> {
    for child in children.values() {
        let child_name = child.full_name();
        if child_name == full_name {
            return Some(child);
        }

        // Local names may themselves contain the separator, so descend into
        // every composite whose full name is a proper path prefix.
        if let Node::Composite(composite) = child {
            let is_prefix = full_name.len() > child_name.len()
                && full_name.starts_with(child_name)
                && full_name[child_name.len()..].starts_with(PATH_SEPARATOR);
            if is_prefix {
                if let Some(found) = find_in(composite.children(), full_name) {
                    return Some(found);
                }
            }
        }
    }
    None
}

/// Pre-order iterator over a node forest
pub struct NodeIter<'a> {
    stack: Vec<&'a Node>,
}

impl<'a> NodeIter<'a> {
    fn new(children: &'a IndexMap<String, Node>) -> Self {
        Self {
            stack: children.values().rev().collect(),
        }
    }
}

impl<'a> Iterator for NodeIter<'a> {
    type Item = &'a Node;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        if let Node::Composite(composite) = node {
            self.stack.extend(composite.children().values().rev());
        }
        Some(node)
    }
}
