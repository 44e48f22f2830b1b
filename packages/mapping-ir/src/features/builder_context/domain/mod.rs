pub mod build_flags;
pub mod builder_context;

pub use build_flags::BuildFlags;
pub use builder_context::{validate_name, MapperBuilderContext, PATH_SEPARATOR};
