//! Build flags captured by every node
use serde::{Deserialize, Serialize};

/// Snapshot of the inherited flags of the context a node was built in
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct BuildFlags {
    /// `_source` is reconstructed on the fly
    pub is_source_synthetic: bool,

    /// Mapping belongs to a data stream
    pub is_data_stream: bool,

    /// Nearest enclosing composite carries dimension semantics
    pub parent_contains_dimensions: bool,
}
