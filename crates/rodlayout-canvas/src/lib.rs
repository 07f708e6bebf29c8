//! # rodlayout Canvas
//!
//! Draws trees of rectangles, segments and groups into a layout cell view.
//!
//! ## Architecture
//!
//! ```text
//! Canvas (cell view + surface + ordered shapes)
//!   └── Dispatcher (one handler per shape variant)
//!         └── DrawingSurface (external tool)
//!               ├── RecordingSurface (journal, dry runs)
//!               └── SkillScriptSurface (SKILL script output)
//! ```
//!
//! Leaves become ROD objects, groups become figure groups. A parent group
//! adds each child by its container figure when the child is a group and by
//! the figure behind its ROD object otherwise, at every nesting level.
//!
//! ## Usage
//!
//! ```rust
//! use rodlayout_canvas::{Canvas, Group, Rect, RecordingSurface};
//! use rodlayout_core::{CellView, Layer};
//!
//! let mut canvas = Canvas::new(CellView::new("cv").unwrap(), RecordingSurface::new());
//! canvas.append(
//!     Group::new()
//!         .with(Rect::with_size(2.0, 4.0).with_layer(Layer::drawing("M1")))
//!         .with(Rect::with_size(4.0, 2.0).with_layer(Layer::drawing("M2"))),
//! );
//!
//! let results = canvas.draw().unwrap();
//! assert_eq!(results.len(), 1);
//! assert_eq!(canvas.surface().calls().len(), 5);
//! ```

pub mod canvas;
pub mod error;
pub mod serialization;
pub mod shapes;
pub mod surface;

pub use canvas::{Canvas, DrawResult, ShapePath, SurfaceDrawResult};
pub use error::DrawError;
pub use serialization::{LayoutFile, LayoutFormat, ShapeData, LAYOUT_FORMAT_VERSION};
pub use shapes::{Group, Rect, Segment, Shape, ShapeKind};
pub use surface::{
    CellViewBinding, DrawingSurface, FigGroupSpec, RecordedHandle, RecordingSurface,
    SkillScriptSurface, SkillValue, SurfaceCall,
};
