//! Error types and context management for layout operations

use std::fmt;
use std::path::{Path, PathBuf};

/// Main error type for all layout operations
#[derive(Debug)]
pub enum LayoutError {
    /// Motif list or viewport rejected before any placement work
    InvalidInput {
        /// Description of what's wrong with the input
        reason: String,
    },

    /// Layout parameter validation failed
    InvalidParameter {
        /// Configuration field that was rejected
        parameter: &'static str,
        /// Offending value, rendered as text
        value: String,
        /// Accepted range or constraint
        reason: String,
    },

    /// Canvas or grid sizing produced an unusable result
    ///
    /// Occurs when the aggregate circle area is zero or non-finite, or when
    /// the clearance grid would exceed the allowed dimension.
    DegenerateLayout {
        /// Stage that produced the unusable value
        operation: &'static str,
        /// What made the value unusable
        reason: String,
    },

    /// Reading or writing a file or directory failed
    FileSystem {
        /// File or directory being accessed
        path: PathBuf,
        /// Short verb phrase such as "read motifs"
        operation: &'static str,
        /// Error reported by the operating system
        source: std::io::Error,
    },

    /// Motif or layout JSON could not be parsed or written
    Json {
        /// Path of the JSON document
        path: PathBuf,
        /// Underlying serialization error
        source: serde_json::Error,
    },

    /// Failed to save a layout preview to disk
    ImageExport {
        /// Preview destination
        path: PathBuf,
        /// Encoder or write failure
        source: image::ImageError,
    },
}

impl fmt::Display for LayoutError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidInput { reason } => {
                write!(f, "Invalid input: {reason}")
            }
            Self::InvalidParameter {
                parameter,
                value,
                reason,
            } => {
                write!(f, "{parameter} = {value} is out of range: {reason}")
            }
            Self::DegenerateLayout { operation, reason } => {
                write!(f, "Degenerate layout in {operation}: {reason}")
            }
            Self::FileSystem {
                path,
                operation,
                source,
            } => {
                write!(
                    f,
                    "failed to {operation} '{}': {source}",
                    path.display()
                )
            }
            Self::Json { path, source } => {
                write!(f, "Invalid JSON in '{}': {source}", path.display())
            }
            Self::ImageExport { path, source } => {
                write!(
                    f,
                    "Failed to export preview to '{}': {source}",
                    path.display()
                )
            }
        }
    }
}

impl std::error::Error for LayoutError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::FileSystem { source, .. } => Some(source),
            Self::Json { source, .. } => Some(source),
            Self::ImageExport { source, .. } => Some(source),
            _ => None,
        }
    }
}

/// Convenience type alias for layout results
pub type Result<T> = std::result::Result<T, LayoutError>;

/// Attaches the offending path to I/O and JSON failures
pub trait WithPath<T> {
    /// Wrap the error together with the path and operation that produced it
    ///
    /// # Errors
    ///
    /// Propagates the original error converted into a [`LayoutError`]
    fn with_path(self, path: &Path, operation: &'static str) -> Result<T>;
}

impl<T> WithPath<T> for std::result::Result<T, std::io::Error> {
    fn with_path(self, path: &Path, operation: &'static str) -> Result<T> {
        self.map_err(|source| LayoutError::FileSystem {
            path: path.to_path_buf(),
            operation,
            source,
        })
    }
}

impl<T> WithPath<T> for std::result::Result<T, serde_json::Error> {
    fn with_path(self, path: &Path, _operation: &'static str) -> Result<T> {
        self.map_err(|source| LayoutError::Json {
            path: path.to_path_buf(),
            source,
        })
    }
}

impl From<std::io::Error> for LayoutError {
    fn from(err: std::io::Error) -> Self {
        Self::FileSystem {
            path: PathBuf::new(),
            operation: "access file",
            source: err,
        }
    }
}

/// Create an invalid input error
pub fn invalid_input(reason: &impl ToString) -> LayoutError {
    LayoutError::InvalidInput {
        reason: reason.to_string(),
    }
}

/// Create an invalid parameter error
pub fn invalid_parameter(
    parameter: &'static str,
    value: &impl ToString,
    reason: &impl ToString,
) -> LayoutError {
    LayoutError::InvalidParameter {
        parameter,
        value: value.to_string(),
        reason: reason.to_string(),
    }
}

/// Create a degenerate layout error
pub fn degenerate_layout(operation: &'static str, reason: &impl ToString) -> LayoutError {
    LayoutError::DegenerateLayout {
        operation,
        reason: reason.to_string(),
    }
}
