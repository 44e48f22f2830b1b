pub mod definition_resolver;
pub mod tree_assembler;

pub use definition_resolver::{DefinitionResolver, DefinitionSummary};
pub use tree_assembler::TreeAssembler;
