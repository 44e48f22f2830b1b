pub mod assembly_state;
pub mod name_registry;

pub use assembly_state::{AssemblyState, AssemblyStats};
pub use name_registry::NameRegistry;
