//! Builder Context Feature
//!
//! The immutable value threaded through a recursive mapping build. A context
//! knows where a field lives (its path) and under which rules it was built
//! (inherited flags and merge reason). Deriving a child never touches the
//! parent, so sibling branches cannot observe each other.

pub mod domain;

pub use domain::{validate_name, BuildFlags, MapperBuilderContext, PATH_SEPARATOR};
