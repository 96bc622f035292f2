//! Error types for path parsing, lookup and assignment.

use thiserror::Error;

/// Errors that can occur while parsing a path or applying it to a value tree.
///
/// Every path-related variant carries the original path string so the caller
/// can report which expression failed.
#[derive(Error, Debug)]
pub enum PathError {
    /// A key segment was applied to something that is not an object.
    #[error("path '{path}': expected an object, found {found}")]
    NotAnObject { path: String, found: &'static str },

    /// An index or wildcard segment was applied to something that is not an array.
    #[error("path '{path}': expected an array, found {found}")]
    NotAnArray { path: String, found: &'static str },

    /// An index segment fell outside `[0, len)`.
    #[error("path '{path}': index {index} out of range for array of length {len}")]
    IndexOutOfRange {
        path: String,
        index: i64,
        len: usize,
    },

    /// `set` was called with a path that contains no segments.
    #[error("path '{path}': cannot assign through an empty path")]
    EmptyPath { path: String },

    /// `set` was called with a path containing `[*]`.
    #[error("path '{path}': wildcard segments cannot be assigned through")]
    UnsupportedWildcard { path: String },

    /// Strict parsing rejected the path. `position` is a byte offset.
    #[error("path '{path}': parse error at byte {position}: {message}")]
    Parse {
        path: String,
        position: usize,
        message: String,
    },

    /// The codec could not decode or encode JSON text.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl PathError {
    /// The path expression that produced this error, if any.
    pub fn path(&self) -> Option<&str> {
        match self {
            PathError::NotAnObject { path, .. }
            | PathError::NotAnArray { path, .. }
            | PathError::IndexOutOfRange { path, .. }
            | PathError::EmptyPath { path }
            | PathError::UnsupportedWildcard { path }
            | PathError::Parse { path, .. } => Some(path),
            PathError::Json(_) => None,
        }
    }
}

/// Convenience alias used throughout treepath-core.
pub type Result<T> = std::result::Result<T, PathError>;
