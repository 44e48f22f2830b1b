pub mod mapping_tree;
pub mod node;

pub use mapping_tree::{MappingTree, NodeIter, ROOT_KIND};
pub use node::{CompositeNode, FieldParams, LeafNode, Node};
