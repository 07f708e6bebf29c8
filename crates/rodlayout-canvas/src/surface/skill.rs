//! SKILL script generation.
//!
//! Renders surface calls as a SKILL script that can be `load`ed into
//! Virtuoso. Every handle is a SKILL variable: ROD objects are `rodN`, figure
//! groups are `fgN` and the database figure behind a ROD object is
//! `rodN~>dbId`.

use super::{DrawingSurface, FigGroupSpec};
use rodlayout_core::{BoundingBox, CellView, Layer, Point, SurfaceError};
use std::fmt;
use std::path::Path;

/// A SKILL expression standing for a tool object.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SkillValue(String);

impl SkillValue {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for SkillValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// How the script binds the cell view variable before drawing.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum CellViewBinding {
    /// The variable is expected to be bound by the caller of the script
    #[default]
    Unbound,
    /// `cv = geGetEditCellView()`
    EditCellView,
    /// `cv = dbOpenCellViewByType(lib cell view "maskLayout" mode)`
    Open {
        lib: String,
        cell: String,
        view: String,
        mode: String,
    },
}

/// Surface that writes SKILL calls into a script buffer.
#[derive(Debug, Clone)]
pub struct SkillScriptSurface {
    script: String,
    precision: usize,
    next_rod: u32,
    next_group: u32,
    save_cell_views: Vec<String>,
    save_on_finish: bool,
}

impl SkillScriptSurface {
    /// Creates a generator printing coordinates with `precision` decimals.
    pub fn new(precision: usize) -> Self {
        let mut script = String::new();
        script.push_str("; Generated by rodlayout\n");
        Self {
            script,
            precision,
            next_rod: 0,
            next_group: 0,
            save_cell_views: Vec::new(),
            save_on_finish: false,
        }
    }

    /// Emits the cell view binding for `cell_view`.
    pub fn bind_cell_view(&mut self, cell_view: &CellView, binding: &CellViewBinding) {
        match binding {
            CellViewBinding::Unbound => {}
            CellViewBinding::EditCellView => {
                self.line(format!("{} = geGetEditCellView()", cell_view));
            }
            CellViewBinding::Open {
                lib,
                cell,
                view,
                mode,
            } => {
                self.line(format!(
                    "{} = dbOpenCellViewByType({} {} {} \"maskLayout\" {})",
                    cell_view,
                    quote(lib),
                    quote(cell),
                    quote(view),
                    quote(mode)
                ));
            }
        }
        if !self.save_cell_views.iter().any(|cv| cv == cell_view.as_str()) {
            self.save_cell_views.push(cell_view.to_string());
        }
    }

    /// Appends `dbSave` for every bound cell view when finishing.
    pub fn save_on_finish(mut self, enabled: bool) -> Self {
        self.save_on_finish = enabled;
        self
    }

    /// The script generated so far.
    pub fn script(&self) -> &str {
        &self.script
    }

    /// Completes and returns the script.
    pub fn finish(mut self) -> String {
        if self.save_on_finish {
            for cv in std::mem::take(&mut self.save_cell_views) {
                self.line(format!("dbSave({})", cv));
            }
        }
        self.script
    }

    /// Completes the script and writes it to `path`.
    pub fn write_to_file(self, path: impl AsRef<Path>) -> Result<(), SurfaceError> {
        std::fs::write(path.as_ref(), self.finish())?;
        Ok(())
    }

    fn line(&mut self, line: String) {
        tracing::trace!("skill: {}", line);
        self.script.push_str(&line);
        self.script.push('\n');
    }

    fn num(&self, value: f64) -> String {
        format_number(value, self.precision)
    }

    fn point(&self, p: &Point) -> String {
        format!("{}:{}", self.num(p.x), self.num(p.y))
    }

    fn mint_rod(&mut self) -> SkillValue {
        self.next_rod += 1;
        SkillValue(format!("rod{}", self.next_rod))
    }
}

impl Default for SkillScriptSurface {
    fn default() -> Self {
        Self::new(4)
    }
}

impl DrawingSurface for SkillScriptSurface {
    type Rod = SkillValue;
    type Figure = SkillValue;

    fn create_rect(
        &mut self,
        cell_view: &CellView,
        layer: &Layer,
        b_box: BoundingBox,
    ) -> Result<Self::Rod, SurfaceError> {
        if !b_box.is_finite() {
            return Err(SurfaceError::rejected("create_rect", "bBox is not finite"));
        }
        let rod = self.mint_rod();
        let line = format!(
            "{} = rodCreateRect(?cvId {} ?layer {} ?bBox list({} {}))",
            rod,
            cell_view,
            layer_list(layer),
            self.point(&b_box.bottom_left),
            self.point(&b_box.top_right)
        );
        self.line(line);
        Ok(rod)
    }

    fn create_path(
        &mut self,
        cell_view: &CellView,
        layer: &Layer,
        points: [Point; 2],
        width: f64,
    ) -> Result<Self::Rod, SurfaceError> {
        if !points.iter().all(Point::is_finite) || !width.is_finite() {
            return Err(SurfaceError::rejected(
                "create_path",
                "points and width must be finite",
            ));
        }
        let rod = self.mint_rod();
        let line = format!(
            "{} = rodCreatePath(?cvId {} ?layer {} ?pts list({} {}) ?width {})",
            rod,
            cell_view,
            layer_list(layer),
            self.point(&points[0]),
            self.point(&points[1]),
            self.num(width)
        );
        self.line(line);
        Ok(rod)
    }

    fn create_fig_group(
        &mut self,
        cell_view: &CellView,
        spec: &FigGroupSpec,
    ) -> Result<Self::Figure, SurfaceError> {
        if !spec.origin.is_finite() {
            return Err(SurfaceError::rejected(
                "create_fig_group",
                "origin is not finite",
            ));
        }
        self.next_group += 1;
        let group = SkillValue(format!("fg{}", self.next_group));
        let name = spec.name.as_deref().map(quote).unwrap_or_else(|| "nil".into());
        let ordered = if spec.ordered { "t" } else { "nil" };
        let line = format!(
            "{} = dbCreateFigGroup({} {} {} {} \"{}\")",
            group,
            cell_view,
            name,
            ordered,
            self.point(&spec.origin),
            spec.orient
        );
        self.line(line);
        Ok(group)
    }

    fn add_fig_to_fig_group(
        &mut self,
        group: &Self::Figure,
        member: &Self::Figure,
    ) -> Result<(), SurfaceError> {
        self.line(format!("dbAddFigToFigGroup({} {})", group, member));
        Ok(())
    }

    fn figure_of(&self, rod: &Self::Rod) -> Self::Figure {
        SkillValue(format!("{}~>dbId", rod))
    }
}

fn layer_list(layer: &Layer) -> String {
    format!("list({} {})", quote(layer.name()), quote(layer.purpose()))
}

fn quote(s: &str) -> String {
    let mut out = String::with_capacity(s.len() + 2);
    out.push('"');
    for c in s.chars() {
        if c == '"' || c == '\\' {
            out.push('\\');
        }
        out.push(c);
    }
    out.push('"');
    out
}

/// Fixed-precision number with trailing zeros removed.
fn format_number(value: f64, precision: usize) -> String {
    let mut s = format!("{:.*}", precision, value);
    if s.contains('.') {
        let trimmed = s.trim_end_matches('0').trim_end_matches('.').len();
        s.truncate(trimmed);
    }
    if s == "-0" {
        s = "0".to_string();
    }
    s
}
