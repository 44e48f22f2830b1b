//! Shared models

mod field_definition;
mod merge_reason;

pub use field_definition::{FieldDefinition, MappingDefinition};
pub use merge_reason::MergeReason;
