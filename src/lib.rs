//! # rodlayout
//!
//! Draws trees of rectangles, segments and groups into Virtuoso cell views.
//!
//! ## Architecture
//!
//! rodlayout is organized as a workspace with multiple crates:
//!
//! 1. **rodlayout-core** - Points, boxes, layers, cell views, error types
//! 2. **rodlayout-canvas** - Shapes, drawing surfaces, canvas and layout files
//! 3. **rodlayout-settings** - Configuration files and validation
//! 4. **rodlayout** - The `rodlayout` binary tying them together
//!
//! The binary reads a layout file and either renders it as a SKILL script
//! or prints the calls a drawing would issue.

pub mod commands;

pub use rodlayout_canvas as canvas;
pub use rodlayout_settings as settings;

pub use rodlayout_core::{
    BoundingBox, CellView, Layer, LayoutError, Orient, Point, SurfaceError,
};

pub use rodlayout_canvas::{
    Canvas, CellViewBinding, DrawError, DrawResult, DrawingSurface, FigGroupSpec, Group,
    LayoutFile, RecordedHandle, RecordingSurface, Rect, Segment, Shape, SkillScriptSurface,
    SurfaceCall,
};

pub use rodlayout_settings::{CellViewSource, Config, LoggingSettings, ScriptSettings};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Build date (set at compile time)
pub const BUILD_DATE: &str = env!("RODLAYOUT_BUILD_DATE");

/// Initialize logging from the logging settings
///
/// Sets up structured logging with:
/// - Output on stderr, so scripts written to stdout stay clean
/// - RUST_LOG environment variable support, falling back to `settings.level`
/// - Pretty or JSON formatting
pub fn init_logging(settings: &LoggingSettings) -> anyhow::Result<()> {
    use tracing_subscriber::fmt;
    use tracing_subscriber::prelude::*;
    use tracing_subscriber::EnvFilter;

    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&settings.level))?;

    if settings.json {
        let fmt_layer = fmt::layer()
            .json()
            .with_writer(std::io::stderr)
            .with_target(true)
            .with_level(true)
            .with_line_number(true);

        tracing_subscriber::registry()
            .with(env_filter)
            .with(fmt_layer)
            .try_init()?;
    } else {
        let fmt_layer = fmt::layer()
            .with_writer(std::io::stderr)
            .with_target(true)
            .with_level(true)
            .with_line_number(true)
            .pretty();

        tracing_subscriber::registry()
            .with(env_filter)
            .with(fmt_layer)
            .try_init()?;
    }

    Ok(())
}
