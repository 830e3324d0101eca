use std::fmt::{self, Display};

use crate::model::Value;

/// Errors produced by rendering, path resolution and accessor construction.
///
/// Nothing is logged or swallowed inside the library; every failure reaches
/// the caller through this type.
#[derive(Debug, Clone)]
pub enum DenseJsonError {
    /// A value of the wrong kind where a list or dict was required.
    /// Carries the offending kind's name.
    Type { type_name: String },
    /// Rendering descended past the nesting limit.
    Depth { limit: usize },
    /// Path resolution stopped early. Carries the unresolved remainder of
    /// the path and the value the walk was standing on when it failed.
    Path { remainder: String, failed_at: Value },
    /// A serde_json failure while turning a Rust value into a tree.
    Json(String),
}

impl DenseJsonError {
    pub(crate) fn type_mismatch(value: &Value) -> Self {
        DenseJsonError::Type { type_name: value.type_name().to_string() }
    }

    pub(crate) fn path(unresolved: &[&str], failed_at: Value) -> Self {
        DenseJsonError::Path {
            remainder: unresolved.join("/"),
            failed_at,
        }
    }
}

impl Display for DenseJsonError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DenseJsonError::Type { type_name } => {
                write!(f, "expected list or dict, got '{}'", type_name)
            }
            DenseJsonError::Depth { limit } => {
                write!(f, "nesting deeper than {} levels - possible circular reference", limit)
            }
            DenseJsonError::Path { remainder, failed_at } => {
                write!(f, "invalid path '{}' for remaining value {}", remainder, failed_at)
            }
            DenseJsonError::Json(message) => f.write_str(message),
        }
    }
}

impl std::error::Error for DenseJsonError {}

impl From<serde_json::Error> for DenseJsonError {
    fn from(err: serde_json::Error) -> Self {
        DenseJsonError::Json(err.to_string())
    }
}
