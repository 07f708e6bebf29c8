//! In-memory surface that journals every call.
//!
//! Used for dry runs and tests: nothing is drawn, every successful call is
//! appended to a journal and answered with a sequential handle.

use super::{DrawingSurface, FigGroupSpec};
use rodlayout_core::{BoundingBox, CellView, Layer, Point, SurfaceError};
use std::fmt;

/// Handle minted by a [`RecordingSurface`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RecordedHandle {
    /// A rectangle or path, numbered from 1 in creation order
    Rod(u32),
    /// A figure group, numbered from 1 in creation order
    Group(u32),
}

impl fmt::Display for RecordedHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Rod(n) => write!(f, "rod{}", n),
            Self::Group(n) => write!(f, "fg{}", n),
        }
    }
}

/// One journaled surface call.
#[derive(Debug, Clone, PartialEq)]
pub enum SurfaceCall {
    CreateRect {
        cell_view: CellView,
        layer: Layer,
        b_box: BoundingBox,
        rod: RecordedHandle,
    },
    CreatePath {
        cell_view: CellView,
        layer: Layer,
        points: [Point; 2],
        width: f64,
        rod: RecordedHandle,
    },
    CreateFigGroup {
        cell_view: CellView,
        spec: FigGroupSpec,
        group: RecordedHandle,
    },
    AddFigToFigGroup {
        group: RecordedHandle,
        member: RecordedHandle,
    },
}

impl SurfaceCall {
    /// Name of the surface operation that produced this entry.
    pub fn operation(&self) -> &'static str {
        match self {
            Self::CreateRect { .. } => "create_rect",
            Self::CreatePath { .. } => "create_path",
            Self::CreateFigGroup { .. } => "create_fig_group",
            Self::AddFigToFigGroup { .. } => "add_fig_to_fig_group",
        }
    }
}

impl fmt::Display for SurfaceCall {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::CreateRect {
                cell_view,
                layer,
                b_box,
                rod,
            } => write!(
                f,
                "{} = create_rect({}, {}, {} {})",
                rod, cell_view, layer, b_box.bottom_left, b_box.top_right
            ),
            Self::CreatePath {
                cell_view,
                layer,
                points,
                width,
                rod,
            } => write!(
                f,
                "{} = create_path({}, {}, {} {}, width={})",
                rod, cell_view, layer, points[0], points[1], width
            ),
            Self::CreateFigGroup {
                cell_view,
                spec,
                group,
            } => write!(
                f,
                "{} = create_fig_group({}, {}, {})",
                group, cell_view, spec.origin, spec.orient
            ),
            Self::AddFigToFigGroup { group, member } => {
                write!(f, "add_fig_to_fig_group({}, {})", group, member)
            }
        }
    }
}

/// Surface that records calls instead of drawing.
#[derive(Debug, Clone, Default)]
pub struct RecordingSurface {
    calls: Vec<SurfaceCall>,
    next_rod: u32,
    next_group: u32,
    issued: usize,
    fail_at: Option<usize>,
}

impl RecordingSurface {
    pub fn new() -> Self {
        Self::default()
    }

    /// Surface whose `call_index`-th call (0-based, counting every
    /// operation) is rejected.
    pub fn failing_at(call_index: usize) -> Self {
        Self {
            fail_at: Some(call_index),
            ..Self::default()
        }
    }

    /// Successful calls in issue order.
    pub fn calls(&self) -> &[SurfaceCall] {
        &self.calls
    }

    pub fn into_calls(self) -> Vec<SurfaceCall> {
        self.calls
    }

    /// Number of journaled calls of the named operation.
    pub fn count(&self, operation: &str) -> usize {
        self.calls
            .iter()
            .filter(|c| c.operation() == operation)
            .count()
    }

    fn admit(&mut self, operation: &str) -> Result<(), SurfaceError> {
        let index = self.issued;
        self.issued += 1;
        if self.fail_at == Some(index) {
            return Err(SurfaceError::rejected(
                operation,
                format!("injected failure at call {}", index),
            ));
        }
        Ok(())
    }

    fn mint_rod(&mut self) -> RecordedHandle {
        self.next_rod += 1;
        RecordedHandle::Rod(self.next_rod)
    }
}

impl DrawingSurface for RecordingSurface {
    type Rod = RecordedHandle;
    type Figure = RecordedHandle;

    fn create_rect(
        &mut self,
        cell_view: &CellView,
        layer: &Layer,
        b_box: BoundingBox,
    ) -> Result<Self::Rod, SurfaceError> {
        self.admit("create_rect")?;
        let rod = self.mint_rod();
        self.calls.push(SurfaceCall::CreateRect {
            cell_view: cell_view.clone(),
            layer: layer.clone(),
            b_box,
            rod,
        });
        Ok(rod)
    }

    fn create_path(
        &mut self,
        cell_view: &CellView,
        layer: &Layer,
        points: [Point; 2],
        width: f64,
    ) -> Result<Self::Rod, SurfaceError> {
        self.admit("create_path")?;
        let rod = self.mint_rod();
        self.calls.push(SurfaceCall::CreatePath {
            cell_view: cell_view.clone(),
            layer: layer.clone(),
            points,
            width,
            rod,
        });
        Ok(rod)
    }

    fn create_fig_group(
        &mut self,
        cell_view: &CellView,
        spec: &FigGroupSpec,
    ) -> Result<Self::Figure, SurfaceError> {
        self.admit("create_fig_group")?;
        self.next_group += 1;
        let group = RecordedHandle::Group(self.next_group);
        self.calls.push(SurfaceCall::CreateFigGroup {
            cell_view: cell_view.clone(),
            spec: spec.clone(),
            group,
        });
        Ok(group)
    }

    fn add_fig_to_fig_group(
        &mut self,
        group: &Self::Figure,
        member: &Self::Figure,
    ) -> Result<(), SurfaceError> {
        self.admit("add_fig_to_fig_group")?;
        if !matches!(group, RecordedHandle::Group(_)) {
            return Err(SurfaceError::UnknownHandle {
                handle: group.to_string(),
            });
        }
        self.calls.push(SurfaceCall::AddFigToFigGroup {
            group: *group,
            member: *member,
        });
        Ok(())
    }

    fn figure_of(&self, rod: &Self::Rod) -> Self::Figure {
        *rod
    }
}
