use std::fmt;

use crate::core::kdtree::KdTreeError;

/// Crate-level error returned by the loader, the service and the server.
///
/// Errors raised by the kd-tree itself are wrapped in [`KdSearchError::KdTree`]
/// so callers can still match on the precise tree failure.
#[derive(Debug)]
pub enum KdSearchError {
    Io(std::io::Error),
    Json(serde_json::Error),
    /// A component of an input vector did not parse as a number.
    MalformedInput { line: usize, message: String },
    KdTree(KdTreeError),
    Configuration(String),
    InvalidInput { message: String },
}

impl fmt::Display for KdSearchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(e) => write!(f, "IO Error: {}", e),
            Self::Json(e) => write!(f, "JSON Serialization/Deserialization Error: {}", e),
            Self::MalformedInput { line, message } => {
                write!(f, "Malformed input on line {}: {}", line, message)
            }
            Self::KdTree(e) => write!(f, "{}", e),
            Self::Configuration(s) => write!(f, "Configuration error: {}", s),
            Self::InvalidInput { message } => write!(f, "Invalid input: {}", message),
        }
    }
}

impl std::error::Error for KdSearchError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            Self::Json(e) => Some(e),
            Self::KdTree(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for KdSearchError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err)
    }
}

impl From<serde_json::Error> for KdSearchError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err)
    }
}

impl From<KdTreeError> for KdSearchError {
    fn from(err: KdTreeError) -> Self {
        Self::KdTree(err)
    }
}

impl KdSearchError {
    /// Whether the error was caused by the caller's input rather than the environment.
    #[must_use]
    pub const fn is_client_error(&self) -> bool {
        matches!(
            self,
            Self::Json(_) | Self::MalformedInput { .. } | Self::KdTree(_) | Self::InvalidInput { .. }
        )
    }
}
