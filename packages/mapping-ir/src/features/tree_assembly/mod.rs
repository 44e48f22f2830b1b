//! Tree Assembly Feature
//!
//! Orchestrates one build: preflights the definition, then descends
//! depth-first, resolving each field's kind, registering its full name and
//! invoking its builder.
//!
//! - domain/         - `NameRegistry`, `AssemblyState`, `AssemblyStats`
//! - ports/          - `MappingAssembler`
//! - application/    - `AssembleMappingUseCase`
//! - infrastructure/ - `DefinitionResolver`, `TreeAssembler`

pub mod application;
pub mod domain;
pub mod infrastructure;
pub mod ports;

pub use application::AssembleMappingUseCase;
pub use domain::{AssemblyState, AssemblyStats, NameRegistry};
pub use infrastructure::{DefinitionResolver, DefinitionSummary, TreeAssembler};
pub use ports::MappingAssembler;
