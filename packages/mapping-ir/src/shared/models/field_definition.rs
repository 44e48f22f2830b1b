//! Definition fragments
//!
//! An already-parsed, ordered tree of `(name, kind, nested fields)` fragments.
//! Parsing the raw definition language belongs to the definition source; this
//! crate only consumes the materialized tree.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;

/// One field of a mapping definition
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FieldDefinition {
    /// Local name (one path segment)
    pub name: String,

    /// Declared field kind, resolved through the kind registry
    #[serde(rename = "type")]
    pub kind: String,

    /// Kind-specific parameters, opaque to tree assembly
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub params: BTreeMap<String, Value>,

    /// Nested field definitions in declaration order
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub fields: Vec<FieldDefinition>,
}

impl FieldDefinition {
    /// Terminal field of the given kind
    pub fn leaf(name: impl Into<String>, kind: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            kind: kind.into(),
            params: BTreeMap::new(),
            fields: Vec::new(),
        }
    }

    /// `object` field holding `fields`
    pub fn object(name: impl Into<String>, fields: Vec<FieldDefinition>) -> Self {
        Self::composite(name, "object", fields)
    }

    /// Composite field of an explicit kind (`object`, `nested`, `passthrough`)
    pub fn composite(
        name: impl Into<String>,
        kind: impl Into<String>,
        fields: Vec<FieldDefinition>,
    ) -> Self {
        Self {
            name: name.into(),
            kind: kind.into(),
            params: BTreeMap::new(),
            fields,
        }
    }

    /// Builder: add a parameter
    pub fn with_param(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.params.insert(key.into(), value.into());
        self
    }

    /// Number of fields in this subtree, this one included
    pub fn subtree_len(&self) -> usize {
        1 + self.fields.iter().map(|f| f.subtree_len()).sum::<usize>()
    }
}

/// Top-level mapping definition: the fields directly under the root
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MappingDefinition {
    #[serde(default)]
    pub fields: Vec<FieldDefinition>,
}

impl MappingDefinition {
    pub fn new(fields: Vec<FieldDefinition>) -> Self {
        Self { fields }
    }

    /// Total number of fields at every depth
    pub fn field_count(&self) -> usize {
        self.fields.iter().map(|f| f.subtree_len()).sum()
    }
}
