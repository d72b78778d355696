//! Error types for logo generation, export and event handling

use std::fmt;
use std::path::PathBuf;

/// Everything that can go wrong between a capture payload and a PNG on disk
#[derive(Debug)]
pub enum LogoError {
    /// Configuration or command-line value failed validation
    InvalidParameter {
        /// Name of the invalid parameter
        parameter: &'static str,
        /// Provided value that failed validation
        value: String,
        /// Explanation of why the value is invalid
        reason: String,
    },

    /// A drawing surface could not be allocated
    ///
    /// Fatal for the regeneration in progress. The previously composed
    /// mosaic stays current.
    ResourceExhaustion {
        /// Surface being allocated
        surface: &'static str,
        /// Requested dimensions (width, height)
        dimensions: (usize, usize),
    },

    /// Failed to save a rendered image to disk
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

    /// An inbound seed event could not be decoded
    EventDecode {
        /// One-based line number in the event stream
        line: usize,
        /// Underlying JSON error
        source: serde_json::Error,
    },
}

impl fmt::Display for LogoError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidParameter {
                parameter,
                value,
                reason,
            } => write!(f, "{parameter} cannot be '{value}': {reason}"),
            Self::ResourceExhaustion {
                surface,
                dimensions: (width, height),
            } => write!(f, "no room for a {width}x{height} {surface}"),
            Self::ImageExport { path, source } => {
                write!(f, "could not write {}: {source}", path.display())
            }
            Self::FileSystem {
                path,
                operation,
                source,
            } => write!(f, "{operation} failed for {}: {source}", path.display()),
            Self::EventDecode { line, source } => {
                write!(f, "skipping seed event at line {line}: {source}")
            }
        }
    }
}

impl std::error::Error for LogoError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::ImageExport { source, .. } => Some(source),
            Self::FileSystem { source, .. } => Some(source),
            Self::EventDecode { source, .. } => Some(source),
            Self::InvalidParameter { .. } | Self::ResourceExhaustion { .. } => None,
        }
    }
}

/// Result with [`LogoError`] as the error
pub type Result<T> = std::result::Result<T, LogoError>;

// Bare IO errors only come from reading the event stream
impl From<std::io::Error> for LogoError {
    fn from(source: std::io::Error) -> Self {
        Self::FileSystem {
            path: PathBuf::from("<event stream>"),
            operation: "read event",
            source,
        }
    }
}

/// Reject a configuration or command-line value
pub fn invalid_parameter(
    parameter: &'static str,
    value: &impl ToString,
    reason: &impl ToString,
) -> LogoError {
    LogoError::InvalidParameter {
        parameter,
        value: value.to_string(),
        reason: reason.to_string(),
    }
}

/// Report that a surface of `width` by `height` could not be allocated
pub const fn resource_exhaustion(surface: &'static str, width: usize, height: usize) -> LogoError {
    LogoError::ResourceExhaustion {
        surface,
        dimensions: (width, height),
    }
}
