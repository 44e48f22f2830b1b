//! Mapping nodes
//!
//! A node is the result of one builder invocation. Leaf nodes are terminal
//! field descriptors; composite nodes own their children in declaration
//! order. Both record the flags of the context that produced them so merge
//! decisions can see how a subtree was built.

use indexmap::IndexMap;
use serde::Serialize;
use serde_json::Value;
use std::collections::BTreeMap;

use crate::features::builder_context::BuildFlags;

/// Kind-specific parameters, opaque to assembly and compared as a whole on merge
pub type FieldParams = BTreeMap<String, Value>;

/// Terminal field descriptor
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LeafNode {
    name: String,
    full_name: String,
    kind: String,
    params: FieldParams,
    is_dimension: bool,
    flags: BuildFlags,
}

impl LeafNode {
    pub fn new(
        name: impl Into<String>,
        full_name: impl Into<String>,
        kind: impl Into<String>,
        params: FieldParams,
        is_dimension: bool,
        flags: BuildFlags,
    ) -> Self {
        Self {
            name: name.into(),
            full_name: full_name.into(),
            kind: kind.into(),
            params,
            is_dimension,
            flags,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn full_name(&self) -> &str {
        &self.full_name
    }

    pub fn kind(&self) -> &str {
        &self.kind
    }

    pub fn params(&self) -> &FieldParams {
        &self.params
    }

    /// Field participates in the identity (dimension) role
    pub fn is_dimension(&self) -> bool {
        self.is_dimension
    }

    pub fn flags(&self) -> BuildFlags {
        self.flags
    }
}

/// Field owning an insertion-ordered collection of named children
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CompositeNode {
    name: String,
    full_name: String,
    kind: String,
    params: FieldParams,
    /// Whether children were built under dimension semantics
    contains_dimensions: bool,
    flags: BuildFlags,
    children: IndexMap<String, Node>,
}

impl CompositeNode {
    pub fn new(
        name: impl Into<String>,
        full_name: impl Into<String>,
        kind: impl Into<String>,
        params: FieldParams,
        contains_dimensions: bool,
        flags: BuildFlags,
        children: IndexMap<String, Node>,
    ) -> Self {
        Self {
            name: name.into(),
            full_name: full_name.into(),
            kind: kind.into(),
            params,
            contains_dimensions,
            flags,
            children,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn full_name(&self) -> &str {
        &self.full_name
    }

    pub fn kind(&self) -> &str {
        &self.kind
    }

    pub fn params(&self) -> &FieldParams {
        &self.params
    }

    pub fn contains_dimensions(&self) -> bool {
        self.contains_dimensions
    }

    pub fn flags(&self) -> BuildFlags {
        self.flags
    }

    /// Children keyed by local name, in declaration order
    pub fn children(&self) -> &IndexMap<String, Node> {
        &self.children
    }

    /// Child by local name
    pub fn child(&self, name: &str) -> Option<&Node> {
        self.children.get(name)
    }

    /// Same composite with its children replaced (merge output)
    pub(crate) fn with_children(&self, children: IndexMap<String, Node>) -> Self {
        Self {
            name: self.name.clone(),
            full_name: self.full_name.clone(),
            kind: self.kind.clone(),
            params: self.params.clone(),
            contains_dimensions: self.contains_dimensions,
            flags: self.flags,
            children,
        }
    }
}

/// Result of a build: polymorphic over leaf and composite fields
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "node", rename_all = "snake_case")]
pub enum Node {
    Leaf(LeafNode),
    Composite(CompositeNode),
}

impl Node {
    pub fn name(&self) -> &str {
        match self {
            Node::Leaf(leaf) => leaf.name(),
            Node::Composite(composite) => composite.name(),
        }
    }

    pub fn full_name(&self) -> &str {
        match self {
            Node::Leaf(leaf) => leaf.full_name(),
            Node::Composite(composite) => composite.full_name(),
        }
    }

    pub fn kind(&self) -> &str {
        match self {
            Node::Leaf(leaf) => leaf.kind(),
            Node::Composite(composite) => composite.kind(),
        }
    }

    pub fn params(&self) -> &FieldParams {
        match self {
            Node::Leaf(leaf) => leaf.params(),
            Node::Composite(composite) => composite.params(),
        }
    }

    pub fn flags(&self) -> BuildFlags {
        match self {
            Node::Leaf(leaf) => leaf.flags(),
            Node::Composite(composite) => composite.flags(),
        }
    }

    pub fn is_composite(&self) -> bool {
        matches!(self, Node::Composite(_))
    }

    pub fn as_leaf(&self) -> Option<&LeafNode> {
        match self {
            Node::Leaf(leaf) => Some(leaf),
            Node::Composite(_) => None,
        }
    }

    pub fn as_composite(&self) -> Option<&CompositeNode> {
        match self {
            Node::Composite(composite) => Some(composite),
            Node::Leaf(_) => None,
        }
    }
}

impl From<LeafNode> for Node {
    fn from(leaf: LeafNode) -> Self {
        Node::Leaf(leaf)
    }
}

impl From<CompositeNode> for Node {
    fn from(composite: CompositeNode) -> Self {
        Node::Composite(composite)
    }
}
