//! Error handling for rodlayout
//!
//! Provides the error types shared by every crate in the workspace:
//! - Surface errors (failures reported by the external drawing tool)
//! - Layout errors (malformed layers, cell views and layout descriptions)
//!
//! All error types use `thiserror` for ergonomic error handling.

use thiserror::Error;

/// Drawing surface error type
///
/// Represents failures reported by the external tool while materializing
/// geometry. rodlayout never retries or translates these.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SurfaceError {
    /// The tool rejected a creation call
    #[error("{operation} rejected by tool: {reason}")]
    Rejected {
        /// The surface operation that failed, e.g. `create_rect`.
        operation: String,
        /// The reason reported by the tool.
        reason: String,
    },

    /// A handle passed to the tool does not refer to a live object
    #[error("Unknown handle: {handle}")]
    UnknownHandle {
        /// The handle as rendered by the surface.
        handle: String,
    },

    /// Writing to the surface's backing sink failed
    #[error("I/O error: {reason}")]
    Io {
        /// The underlying I/O error message.
        reason: String,
    },
}

impl SurfaceError {
    /// Shorthand for a rejected call.
    pub fn rejected(operation: impl Into<String>, reason: impl Into<String>) -> Self {
        SurfaceError::Rejected {
            operation: operation.into(),
            reason: reason.into(),
        }
    }
}

impl From<std::io::Error> for SurfaceError {
    fn from(err: std::io::Error) -> Self {
        SurfaceError::Io {
            reason: err.to_string(),
        }
    }
}

/// Layout description error type
///
/// Represents errors in user-supplied layer names, cell view names and
/// layout descriptions.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum LayoutError {
    /// Layer specification could not be parsed
    #[error("Invalid layer '{spec}': {reason}")]
    InvalidLayer {
        /// The offending layer text.
        spec: String,
        /// Why it was rejected.
        reason: String,
    },

    /// Cell view specification could not be parsed
    #[error("Invalid cell view '{spec}': {reason}")]
    InvalidCellView {
        /// The offending cell view text.
        spec: String,
        /// Why it was rejected.
        reason: String,
    },

    /// A shape kind with no drawing handler
    #[error("Unsupported shape kind: {kind}")]
    UnsupportedShape {
        /// The unknown kind tag.
        kind: String,
    },

    /// A layout file could not be parsed
    #[error("Failed to parse layout: {reason}")]
    Parse {
        /// The reason parsing failed.
        reason: String,
    },

    /// Layout file version is not understood
    #[error("Layout version {version} not supported")]
    UnsupportedVersion {
        /// The version found in the file.
        version: String,
    },
}
