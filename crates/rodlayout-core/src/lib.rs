//! # rodlayout Core
//!
//! Core types shared by the rodlayout crates: points and boxes, layers,
//! cell view identifiers and the workspace-wide error types.

pub mod error;
pub mod geometry;
pub mod layer;

pub use error::{LayoutError, SurfaceError};
pub use geometry::{BoundingBox, Orient, Point};
pub use layer::{CellView, Layer, DEFAULT_PURPOSE};
