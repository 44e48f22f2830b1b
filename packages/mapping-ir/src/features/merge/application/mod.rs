pub mod merge_mapping;

pub use merge_mapping::MergeMappingUseCase;
