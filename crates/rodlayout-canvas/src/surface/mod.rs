//! Drawing surface abstraction.
//!
//! A surface is the external tool's side of the conversation: it turns
//! creation calls into tool objects and hands back opaque handles. Leaves are
//! created as ROD objects ([`DrawingSurface::Rod`]); figure groups and group
//! members are database figures ([`DrawingSurface::Figure`]).

pub mod recording;
pub mod skill;

pub use recording::{RecordedHandle, RecordingSurface, SurfaceCall};
pub use skill::{CellViewBinding, SkillScriptSurface, SkillValue};

use rodlayout_core::{BoundingBox, CellView, Layer, Orient, Point, SurfaceError};
use std::fmt;

/// Placement of a new figure group.
#[derive(Debug, Clone, PartialEq)]
pub struct FigGroupSpec {
    /// Group name, `None` lets the tool pick one
    pub name: Option<String>,
    /// Whether member order is significant to the tool
    pub ordered: bool,
    pub origin: Point,
    pub orient: Orient,
}

impl Default for FigGroupSpec {
    fn default() -> Self {
        Self {
            name: None,
            ordered: false,
            origin: Point::ORIGIN,
            orient: Orient::R0,
        }
    }
}

/// Capability interface to the external drawing tool.
///
/// Calls must take effect in the order they are issued: a group created by
/// [`create_fig_group`](DrawingSurface::create_fig_group) has to be usable
/// by the very next [`add_fig_to_fig_group`](DrawingSurface::add_fig_to_fig_group).
pub trait DrawingSurface {
    /// Handle of a created rectangle or path
    type Rod: Clone + fmt::Debug;
    /// Handle of a database figure, including figure groups
    type Figure: Clone + fmt::Debug;

    /// Create a rectangle covering `b_box` on `layer`.
    fn create_rect(
        &mut self,
        cell_view: &CellView,
        layer: &Layer,
        b_box: BoundingBox,
    ) -> Result<Self::Rod, SurfaceError>;

    /// Create a path through `points` with the given `width`.
    fn create_path(
        &mut self,
        cell_view: &CellView,
        layer: &Layer,
        points: [Point; 2],
        width: f64,
    ) -> Result<Self::Rod, SurfaceError>;

    /// Create an empty figure group.
    fn create_fig_group(
        &mut self,
        cell_view: &CellView,
        spec: &FigGroupSpec,
    ) -> Result<Self::Figure, SurfaceError>;

    /// Make `member` a member of `group`.
    fn add_fig_to_fig_group(
        &mut self,
        group: &Self::Figure,
        member: &Self::Figure,
    ) -> Result<(), SurfaceError>;

    /// The database figure behind a ROD object.
    fn figure_of(&self, rod: &Self::Rod) -> Self::Figure;
}

impl<S: DrawingSurface + ?Sized> DrawingSurface for &mut S {
    type Rod = S::Rod;
    type Figure = S::Figure;

    fn create_rect(
        &mut self,
        cell_view: &CellView,
        layer: &Layer,
        b_box: BoundingBox,
    ) -> Result<Self::Rod, SurfaceError> {
        (**self).create_rect(cell_view, layer, b_box)
    }

    fn create_path(
        &mut self,
        cell_view: &CellView,
        layer: &Layer,
        points: [Point; 2],
        width: f64,
    ) -> Result<Self::Rod, SurfaceError> {
        (**self).create_path(cell_view, layer, points, width)
    }

    fn create_fig_group(
        &mut self,
        cell_view: &CellView,
        spec: &FigGroupSpec,
    ) -> Result<Self::Figure, SurfaceError> {
        (**self).create_fig_group(cell_view, spec)
    }

    fn add_fig_to_fig_group(
        &mut self,
        group: &Self::Figure,
        member: &Self::Figure,
    ) -> Result<(), SurfaceError> {
        (**self).add_fig_to_fig_group(group, member)
    }

    fn figure_of(&self, rod: &Self::Rod) -> Self::Figure {
        (**self).figure_of(rod)
    }
}
