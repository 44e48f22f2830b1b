//! Mapper configuration
//!
//! - `AssemblyConfig`: depth and field limits, sibling parallelism
//! - `MapperConfig`: assembly settings plus merge policy overrides, with
//!   closure-style builders and versioned YAML (v1) I/O
//!
//! # Examples
//!
//! ```rust,ignore
//! use mapping_ir::config::MapperConfig;
//!
//! let config = MapperConfig::default().assembly(|c| c.max_fields(5000));
//! let config = MapperConfig::from_yaml("mapper.yaml")?;
//! ```

pub mod assembly_config;
pub mod error;
pub mod io;
pub mod mapper_config;
pub mod validation;

pub use assembly_config::{
    AssemblyConfig, DEFAULT_MAX_DEPTH, DEFAULT_MAX_FIELDS, DEFAULT_PARALLEL_THRESHOLD,
};
pub use error::{ConfigError, ConfigResult};
pub use io::{ConfigExportV1, CONFIG_VERSION};
pub use mapper_config::MapperConfig;
pub use validation::Validatable;
