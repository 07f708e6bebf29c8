//! Shape dispatch: one handler per shape variant.

use rodlayout_core::{CellView, Layer, SurfaceError};

use super::types::{DrawResult, ShapePath};
use crate::error::DrawError;
use crate::shapes::{Group, Rect, Segment, Shape, ShapeKind};
use crate::surface::{DrawingSurface, FigGroupSpec};

/// [`DrawResult`] carrying the handle types of surface `S`.
pub type SurfaceDrawResult<S> =
    DrawResult<<S as DrawingSurface>::Rod, <S as DrawingSurface>::Figure>;

/// Walks a shape tree and issues surface calls in traversal order.
pub(crate) struct Dispatcher<'a, S: DrawingSurface> {
    cell_view: &'a CellView,
    surface: &'a mut S,
}

impl<'a, S: DrawingSurface> Dispatcher<'a, S> {
    pub(crate) fn new(cell_view: &'a CellView, surface: &'a mut S) -> Self {
        Self { cell_view, surface }
    }

    pub(crate) fn draw_shape(
        &mut self,
        shape: &Shape,
        path: &ShapePath,
    ) -> Result<SurfaceDrawResult<S>, DrawError> {
        match shape {
            Shape::Rect(rect) => self.draw_rect(rect, path),
            Shape::Segment(segment) => self.draw_segment(segment, path),
            Shape::Group(group) => self.draw_group(group, path),
        }
    }

    fn draw_rect(
        &mut self,
        rect: &Rect,
        path: &ShapePath,
    ) -> Result<SurfaceDrawResult<S>, DrawError> {
        let layer = require_layer(rect.layer.as_ref(), ShapeKind::Rect, path)?;
        let b_box = rect.bounding_box();
        tracing::debug!(
            "create_rect {} on {} {} {}",
            path,
            layer,
            b_box.bottom_left,
            b_box.top_right
        );
        let rod = self
            .surface
            .create_rect(self.cell_view, layer, b_box)
            .map_err(surface_error(ShapeKind::Rect, path))?;
        Ok(DrawResult::Leaf(rod))
    }

    fn draw_segment(
        &mut self,
        segment: &Segment,
        path: &ShapePath,
    ) -> Result<SurfaceDrawResult<S>, DrawError> {
        let layer = require_layer(segment.layer.as_ref(), ShapeKind::Segment, path)?;
        let points = segment.points();
        tracing::debug!(
            "create_path {} on {} {} {} width {}",
            path,
            layer,
            points[0],
            points[1],
            segment.thickness
        );
        let rod = self
            .surface
            .create_path(self.cell_view, layer, points, segment.thickness)
            .map_err(surface_error(ShapeKind::Segment, path))?;
        Ok(DrawResult::Leaf(rod))
    }

    fn draw_group(
        &mut self,
        group: &Group,
        path: &ShapePath,
    ) -> Result<SurfaceDrawResult<S>, DrawError> {
        tracing::debug!("create_fig_group {} with {} members", path, group.len());
        let container = self
            .surface
            .create_fig_group(self.cell_view, &FigGroupSpec::default())
            .map_err(surface_error(ShapeKind::Group, path))?;

        for (index, child) in group.iter().enumerate() {
            let child_path = path.child(index);
            let drawn = self.draw_shape(child, &child_path)?;
            let member = self.member_figure(&drawn);
            self.surface
                .add_fig_to_fig_group(&container, &member)
                .map_err(surface_error(ShapeKind::Group, path))?;
        }

        Ok(DrawResult::Group(container))
    }

    /// The figure a parent group adds for a drawn child: the child's own
    /// container if it has one, otherwise the figure behind its ROD object.
    fn member_figure(&self, drawn: &SurfaceDrawResult<S>) -> S::Figure {
        match drawn {
            DrawResult::Group(container) => container.clone(),
            DrawResult::Leaf(rod) => self.surface.figure_of(rod),
        }
    }
}

fn require_layer<'s>(
    layer: Option<&'s Layer>,
    kind: ShapeKind,
    path: &ShapePath,
) -> Result<&'s Layer, DrawError> {
    layer.ok_or_else(|| DrawError::MissingLayer {
        kind,
        path: path.clone(),
    })
}

fn surface_error(
    kind: ShapeKind,
    path: &ShapePath,
) -> impl FnOnce(SurfaceError) -> DrawError + '_ {
    move |source| DrawError::Surface {
        kind,
        path: path.clone(),
        source,
    }
}
