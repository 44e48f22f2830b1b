// Field Mapping Infrastructure
//
// Concrete builders per field kind and the capability table resolving a
// declared kind to its builder.

pub mod kind_registry;
pub mod leaf_builder;
pub mod object_builder;

pub use kind_registry::{FieldKindRegistry, DEFAULT_LEAF_KINDS};
pub use leaf_builder::LeafFieldBuilder;
pub use object_builder::ObjectFieldBuilder;

/// Parameter declaring a field (or a composite's subtree) dimension-bearing
pub const TIME_SERIES_DIMENSION_PARAM: &str = "time_series_dimension";

use crate::errors::{MapperError, Result};
use crate::shared::models::FieldDefinition;

/// Read the optional boolean `time_series_dimension` parameter
fn declared_dimension(definition: &FieldDefinition, full_name: &str) -> Result<bool> {
    match definition.params.get(TIME_SERIES_DIMENSION_PARAM) {
        None => Ok(false),
        Some(value) => value.as_bool().ok_or_else(|| {
            MapperError::definition(
                full_name,
                format!(
                    "parameter '{}' must be a boolean, got {}",
                    TIME_SERIES_DIMENSION_PARAM, value
                ),
            )
        }),
    }
}
