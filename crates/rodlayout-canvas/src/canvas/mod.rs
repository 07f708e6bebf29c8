//! Canvas holding the shapes to draw into one cell view.

mod draw;
mod types;

pub use draw::SurfaceDrawResult;
pub use types::{DrawResult, ShapePath};

use draw::Dispatcher;
use rodlayout_core::CellView;

use crate::error::DrawError;
use crate::shapes::Shape;
use crate::surface::DrawingSurface;

/// Ordered shapes bound to a cell view and the surface that draws into it.
///
/// Shapes are kept in insertion order and may repeat. Nothing is validated
/// until [`draw`](Canvas::draw).
#[derive(Debug)]
pub struct Canvas<S: DrawingSurface> {
    cell_view: CellView,
    surface: S,
    shapes: Vec<Shape>,
}

impl<S: DrawingSurface> Canvas<S> {
    /// Creates an empty canvas drawing into `cell_view` through `surface`.
    pub fn new(cell_view: CellView, surface: S) -> Self {
        Self {
            cell_view,
            surface,
            shapes: Vec::new(),
        }
    }

    /// Adds one shape after the existing ones.
    pub fn append(&mut self, shape: impl Into<Shape>) {
        self.shapes.push(shape.into());
    }

    pub fn shapes(&self) -> &[Shape] {
        &self.shapes
    }

    /// Returns the number of top-level shapes on the canvas.
    pub fn len(&self) -> usize {
        self.shapes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.shapes.is_empty()
    }

    pub fn cell_view(&self) -> &CellView {
        &self.cell_view
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }

    pub fn into_surface(self) -> S {
        self.surface
    }

    /// Draws every shape into the cell view.
    ///
    /// Returns one result per top-level shape, in insertion order; a group
    /// yields a single result for its whole subtree. Each call creates new
    /// tool-side geometry, so drawing twice duplicates it.
    ///
    /// The first failure aborts the walk. Calls already issued are not
    /// undone: earlier shapes and any partially filled group stay in the
    /// tool. [`DrawError::drawn_top_level`] tells how many top-level shapes
    /// were complete.
    pub fn draw(&mut self) -> Result<Vec<SurfaceDrawResult<S>>, DrawError> {
        let mut dispatcher = Dispatcher::new(&self.cell_view, &mut self.surface);
        let mut results = Vec::with_capacity(self.shapes.len());

        for (index, shape) in self.shapes.iter().enumerate() {
            match dispatcher.draw_shape(shape, &ShapePath::root(index)) {
                Ok(result) => results.push(result),
                Err(err) => {
                    tracing::warn!(
                        "Drawing into {} aborted after {} of {} shapes: {}",
                        self.cell_view,
                        err.drawn_top_level(),
                        self.shapes.len(),
                        err
                    );
                    return Err(err);
                }
            }
        }

        tracing::info!(
            "Drew {} shapes ({} leaves, {} groups) into {}",
            self.shapes.len(),
            self.shapes.iter().map(Shape::leaf_count).sum::<usize>(),
            self.shapes.iter().map(Shape::group_count).sum::<usize>(),
            self.cell_view
        );
        Ok(results)
    }
}

impl<S: DrawingSurface, T: Into<Shape>> Extend<T> for Canvas<S> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        self.shapes.extend(iter.into_iter().map(Into::into));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shapes::{Group, Rect};
    use crate::surface::{RecordedHandle, RecordingSurface};
    use rodlayout_core::Layer;

    fn canvas() -> Canvas<RecordingSurface> {
        Canvas::new(CellView::new("cv").unwrap(), RecordingSurface::new())
    }

    #[test]
    fn test_append_keeps_order_and_duplicates() {
        let mut c = canvas();
        let r = Rect::with_size(1.0, 1.0).with_layer(Layer::drawing("M1"));
        c.append(r.clone());
        c.append(r.clone());
        c.extend([Rect::with_size(2.0, 2.0)]);
        assert_eq!(c.len(), 3);
        assert_eq!(c.shapes()[0], c.shapes()[1]);
        assert!(c.surface().calls().is_empty());
    }

    #[test]
    fn test_empty_canvas_draws_nothing() {
        let mut c = canvas();
        assert!(c.draw().unwrap().is_empty());
        assert!(c.surface().calls().is_empty());
    }

    #[test]
    fn test_empty_group_still_creates_container() {
        let mut c = canvas();
        c.append(Group::new());
        let results = c.draw().unwrap();
        assert_eq!(results, vec![DrawResult::Group(RecordedHandle::Group(1))]);
        assert_eq!(c.surface().count("create_fig_group"), 1);
        assert_eq!(c.surface().count("add_fig_to_fig_group"), 0);
    }

    #[test]
    fn test_drawing_twice_duplicates() {
        let mut c = canvas();
        c.append(Rect::with_size(1.0, 1.0).with_layer(Layer::drawing("M1")));
        c.draw().unwrap();
        let second = c.draw().unwrap();
        assert_eq!(second[0].leaf(), Some(&RecordedHandle::Rod(2)));
        assert_eq!(c.surface().count("create_rect"), 2);
    }
}
