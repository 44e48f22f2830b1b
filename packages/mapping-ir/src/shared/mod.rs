//! Shared module - Common types used by every feature
//!
//! Holds the value types that cross feature boundaries: the merge reason
//! carried by every build context and the already-parsed definition tree
//! handed over by a definition source.

pub mod models;

// Re-exports for convenience
pub use models::*;
