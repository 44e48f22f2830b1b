pub mod mapping_merger;

pub use mapping_merger::{MappingMerger, MergeResult};
