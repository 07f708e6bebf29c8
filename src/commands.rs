//! Commands behind the `rodlayout` binary.

use anyhow::{Context, Result};
use rodlayout_canvas::{
    Canvas, CellViewBinding, LayoutFile, RecordingSurface, SkillScriptSurface, SurfaceCall,
};
use rodlayout_core::CellView;
use rodlayout_settings::{CellViewSource, Config};

/// Picks the cell view: explicit override, then the layout file's own,
/// then the configured script variable.
pub fn resolve_cell_view(
    layout: &LayoutFile,
    config: &Config,
    cell_view: Option<&CellView>,
) -> Result<CellView> {
    if let Some(cv) = cell_view.or(layout.cell_view.as_ref()) {
        return Ok(cv.clone());
    }
    Ok(config.script.cell_view()?)
}

/// Maps the configured cell view source onto a script binding.
pub fn binding(config: &Config) -> CellViewBinding {
    match (config.script.source, &config.script.open) {
        (CellViewSource::Caller, _) => CellViewBinding::Unbound,
        (CellViewSource::Edit, _) => CellViewBinding::EditCellView,
        (CellViewSource::Open, Some(open)) => CellViewBinding::Open {
            lib: open.lib.clone(),
            cell: open.cell.clone(),
            view: open.view.clone(),
            mode: open.mode.clone(),
        },
        // validate() rejects this combination
        (CellViewSource::Open, None) => CellViewBinding::Unbound,
    }
}

/// Renders `layout` as a SKILL script.
pub fn render_script(
    layout: &LayoutFile,
    config: &Config,
    cell_view: Option<&CellView>,
) -> Result<String> {
    let cell_view = resolve_cell_view(layout, config, cell_view)?;
    let shapes = layout.to_shapes().context("Invalid layout")?;

    let mut surface = SkillScriptSurface::new(config.script.precision)
        .save_on_finish(config.script.save_on_finish);
    surface.bind_cell_view(&cell_view, &binding(config));

    let mut canvas = Canvas::new(cell_view, surface);
    canvas.extend(shapes);
    canvas.draw().context("Failed to draw layout")?;

    Ok(canvas.into_surface().finish())
}

/// Draws `layout` against a recording surface and returns the journal.
pub fn dry_run(
    layout: &LayoutFile,
    config: &Config,
    cell_view: Option<&CellView>,
) -> Result<Vec<SurfaceCall>> {
    let cell_view = resolve_cell_view(layout, config, cell_view)?;
    let shapes = layout.to_shapes().context("Invalid layout")?;

    let mut canvas = Canvas::new(cell_view, RecordingSurface::new());
    canvas.extend(shapes);
    canvas.draw().context("Failed to draw layout")?;

    Ok(canvas.into_surface().into_calls())
}
