//! Error types for assignment generation, compositing and sheet layout

use std::fmt;
use std::path::PathBuf;

/// Main error type for all fingerprint operations
#[derive(Debug)]
pub enum FingerprintError {
    /// Fixed parameters are inconsistent
    ///
    /// Raised when the population exceeds the available combinations, the
    /// sample plan does not match the grid, or a derived value overflows.
    Configuration {
        /// Name of the offending parameter
        parameter: &'static str,
        /// Provided value that failed validation
        value: String,
        /// Explanation of why the value is invalid
        reason: String,
    },

    /// A layer image could not be loaded from disk
    AssetLoad {
        /// Path to the layer image
        path: PathBuf,
        /// Underlying image loading error
        source: image::ImageError,
    },

    /// A composition referenced a layer that was never loaded
    LayerNotFound {
        /// Symbol of the missing layer
        symbol: char,
    },

    /// More cells were requested than the page grid holds
    LayoutOverflow {
        /// Number of cells requested
        requested: usize,
        /// Number of cells the grid can hold
        capacity: usize,
    },

    /// A sequence file line or mask could not be parsed
    MalformedRecord {
        /// One-based line number, zero when the record did not come from a file
        line: usize,
        /// Offending text
        content: String,
        /// Description of what is wrong with it
        reason: String,
    },

    /// Failed to save a rendered sheet to disk
    ImageExport {
        /// Path where export was attempted
        path: PathBuf,
        /// Underlying image export error
        source: image::ImageError,
    },

    /// General file system operation failure
    FileSystem {
        /// Path involved in the operation
        path: PathBuf,
        /// Description of the operation that failed
        operation: &'static str,
        /// Underlying I/O error
        source: std::io::Error,
    },

    /// Label text could not be rasterized
    Label {
        /// Description of the failure
        reason: String,
    },
}

impl fmt::Display for FingerprintError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Configuration {
                parameter,
                value,
                reason,
            } => {
                write!(f, "Invalid configuration '{parameter}' = '{value}': {reason}")
            }
            Self::AssetLoad { path, source } => {
                write!(f, "Failed to load layer '{}': {source}", path.display())
            }
            Self::LayerNotFound { symbol } => {
                write!(f, "Layer '{symbol}' was not loaded")
            }
            Self::LayoutOverflow {
                requested,
                capacity,
            } => {
                write!(
                    f,
                    "Sheet layout overflow: {requested} cells requested, grid holds {capacity}"
                )
            }
            Self::MalformedRecord {
                line,
                content,
                reason,
            } => {
                write!(f, "Malformed record at line {line} '{content}': {reason}")
            }
            Self::ImageExport { path, source } => {
                write!(f, "Failed to export sheet to '{}': {source}", path.display())
            }
            Self::FileSystem {
                path,
                operation,
                source,
            } => {
                write!(
                    f,
                    "File system error during {operation} on '{}': {source}",
                    path.display()
                )
            }
            Self::Label { reason } => {
                write!(f, "Label rendering failed: {reason}")
            }
        }
    }
}

impl std::error::Error for FingerprintError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::AssetLoad { source, .. } | Self::ImageExport { source, .. } => Some(source),
            Self::FileSystem { source, .. } => Some(source),
            _ => None,
        }
    }
}

/// Convenience type alias for fingerprint results
pub type Result<T> = std::result::Result<T, FingerprintError>;

impl From<std::io::Error> for FingerprintError {
    fn from(err: std::io::Error) -> Self {
        Self::FileSystem {
            path: PathBuf::from("<unknown>"),
            operation: "unknown",
            source: err,
        }
    }
}

/// Create a configuration error
pub fn invalid_configuration(
    parameter: &'static str,
    value: &impl ToString,
    reason: &impl ToString,
) -> FingerprintError {
    FingerprintError::Configuration {
        parameter,
        value: value.to_string(),
        reason: reason.to_string(),
    }
}

/// Create a malformed record error
pub fn malformed_record(line: usize, content: &str, reason: &impl ToString) -> FingerprintError {
    FingerprintError::MalformedRecord {
        line,
        content: content.to_string(),
        reason: reason.to_string(),
    }
}

impl FingerprintError {
    /// Attach a line number to a malformed record error
    ///
    /// Other variants are returned unchanged.
    #[must_use]
    pub fn at_line(self, line_number: usize) -> Self {
        match self {
            Self::MalformedRecord {
                content, reason, ..
            } => Self::MalformedRecord {
                line: line_number,
                content,
                reason,
            },
            other => other,
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/io/error.rs"]
mod tests;
