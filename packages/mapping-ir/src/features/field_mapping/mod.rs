//! Field Mapping Feature
//!
//! Node model of an assembled mapping tree and the builders that produce it:
//! - domain/         - `Node`, `LeafNode`, `CompositeNode`, `MappingTree`
//! - ports/          - `FieldBuilder` capability and `ChildAssembler` callback
//! - infrastructure/ - leaf and object builders, the field-kind registry

pub mod domain;
pub mod infrastructure;
pub mod ports;

pub use domain::{CompositeNode, FieldParams, LeafNode, MappingTree, Node, NodeIter, ROOT_KIND};
pub use infrastructure::{
    FieldKindRegistry, LeafFieldBuilder, ObjectFieldBuilder, DEFAULT_LEAF_KINDS,
    TIME_SERIES_DIMENSION_PARAM,
};
pub use ports::{ChildAssembler, FieldBuilder};
