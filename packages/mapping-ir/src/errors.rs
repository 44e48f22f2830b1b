//! Error types for mapping-ir
//!
//! Provides unified error handling for context derivation, tree assembly and
//! kind registration. Merge conflicts are not errors: they are returned as a
//! [`ConflictReport`](crate::features::merge::ConflictReport).

use thiserror::Error;

use crate::config::ConfigError;

/// Main error type for mapping-ir operations
#[derive(Debug, Error)]
pub enum MapperError {
    /// Empty or malformed name passed into context derivation.
    ///
    /// Signals a wiring bug in the calling builder, not bad input data.
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// A builder could not interpret its definition fragment
    #[error("Definition error at '{full_name}': {reason}")]
    Definition { full_name: String, reason: String },

    /// Two nodes of one tree resolved to the same full name
    #[error("Duplicate field name '{full_name}'")]
    DuplicateName { full_name: String },

    /// Field nested deeper than the configured limit
    #[error("Field '{full_name}' has depth {depth}, which exceeds the depth limit of {limit}")]
    DepthLimitExceeded {
        full_name: String,
        depth: usize,
        limit: usize,
    },

    /// Definition declares more fields than the configured limit
    #[error("Mapping declares {count} fields, which exceeds the total field limit of {limit}")]
    FieldLimitExceeded { count: usize, limit: usize },

    /// A field kind was registered twice in one kind registry
    #[error("Field kind '{0}' is already registered")]
    DuplicateKind(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),
}

impl MapperError {
    /// Create an invalid-argument error
    pub fn invalid_argument(msg: impl Into<String>) -> Self {
        MapperError::InvalidArgument(msg.into())
    }

    /// Create a definition error tagged with the offending full name
    pub fn definition(full_name: impl Into<String>, reason: impl Into<String>) -> Self {
        MapperError::Definition {
            full_name: full_name.into(),
            reason: reason.into(),
        }
    }

    /// Full name of the offending field, when the error is tied to one
    pub fn full_name(&self) -> Option<&str> {
        match self {
            MapperError::Definition { full_name, .. }
            | MapperError::DuplicateName { full_name }
            | MapperError::DepthLimitExceeded { full_name, .. } => Some(full_name),
            _ => None,
        }
    }

    /// Data errors abort only the current build and are fixed by changing the
    /// input. Invalid arguments indicate a bug in the caller.
    pub fn is_data_error(&self) -> bool {
        matches!(
            self,
            MapperError::Definition { .. }
                | MapperError::DuplicateName { .. }
                | MapperError::DepthLimitExceeded { .. }
                | MapperError::FieldLimitExceeded { .. }
        )
    }
}

/// Result type alias for mapping-ir operations
pub type Result<T> = std::result::Result<T, MapperError>;
