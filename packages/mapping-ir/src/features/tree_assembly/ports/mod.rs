pub mod mapping_assembler;

pub use mapping_assembler::MappingAssembler;
