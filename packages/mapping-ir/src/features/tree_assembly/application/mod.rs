pub mod assemble_mapping;

pub use assemble_mapping::AssembleMappingUseCase;
