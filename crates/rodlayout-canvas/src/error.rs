//! Error types for drawing a canvas.

use rodlayout_core::SurfaceError;
use thiserror::Error;

use crate::canvas::ShapePath;
use crate::shapes::ShapeKind;

/// Errors that abort [`Canvas::draw`](crate::Canvas::draw).
#[derive(Error, Debug, Clone, PartialEq)]
pub enum DrawError {
    /// A rectangle or segment reached the surface without a layer.
    #[error("{kind} at {path} needs a layer")]
    MissingLayer { kind: ShapeKind, path: ShapePath },

    /// The surface rejected a call while drawing the shape at `path`.
    #[error("Drawing {kind} at {path} failed: {source}")]
    Surface {
        kind: ShapeKind,
        path: ShapePath,
        #[source]
        source: SurfaceError,
    },
}

impl DrawError {
    /// Tree path of the shape being drawn when the error occurred.
    pub fn path(&self) -> &ShapePath {
        match self {
            Self::MissingLayer { path, .. } | Self::Surface { path, .. } => path,
        }
    }

    pub fn kind(&self) -> ShapeKind {
        match self {
            Self::MissingLayer { kind, .. } | Self::Surface { kind, .. } => *kind,
        }
    }

    /// Number of top-level shapes that were completely drawn before the
    /// failure. Their geometry stays in the tool.
    pub fn drawn_top_level(&self) -> usize {
        self.path().top_level()
    }

    pub fn is_missing_layer(&self) -> bool {
        matches!(self, Self::MissingLayer { .. })
    }
}
