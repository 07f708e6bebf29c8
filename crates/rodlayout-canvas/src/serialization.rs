//! Layout description files.
//!
//! A layout file lists the shapes to draw, as JSON or TOML chosen by file
//! extension. Shapes are stored as flat [`ShapeData`] records tagged with a
//! `kind` and converted to [`Shape`]s before drawing.

use anyhow::{Context, Result};
use rodlayout_core::{CellView, Layer, LayoutError, Point};
use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::shapes::{Group, Rect, Segment, Shape};

/// Layout file format version
pub const LAYOUT_FORMAT_VERSION: &str = "1.0";

/// On-disk encoding of a layout file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LayoutFormat {
    Json,
    Toml,
}

impl LayoutFormat {
    /// Picks the format from a `.json` or `.toml` extension.
    pub fn from_path(path: &Path) -> Option<Self> {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some("json") => Some(Self::Json),
            Some("toml") => Some(Self::Toml),
            _ => None,
        }
    }
}

/// Complete layout file structure
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LayoutFile {
    pub version: String,
    /// Cell view the shapes are meant for; the caller may override it
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cell_view: Option<CellView>,
    #[serde(default)]
    pub shapes: Vec<ShapeData>,
}

/// Serialized shape record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShapeData {
    /// `rect`, `segment` or `group`
    pub kind: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub layer: Option<Layer>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bottom_left: Option<Point>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub top_right: Option<Point>,
    /// Rectangle size with the bottom-left corner at the origin, instead of
    /// the corners
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub size: Option<(f64, f64)>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start: Option<Point>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end: Option<Point>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub thickness: Option<f64>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub shapes: Vec<ShapeData>,
}

impl ShapeData {
    fn empty(kind: &str) -> Self {
        Self {
            kind: kind.to_string(),
            layer: None,
            bottom_left: None,
            top_right: None,
            size: None,
            start: None,
            end: None,
            thickness: None,
            shapes: Vec::new(),
        }
    }

    /// Convert Shape to ShapeData
    pub fn from_shape(shape: &Shape) -> Self {
        match shape {
            Shape::Rect(r) => Self {
                layer: r.layer.clone(),
                bottom_left: Some(r.bottom_left),
                top_right: Some(r.top_right),
                ..Self::empty("rect")
            },
            Shape::Segment(s) => Self {
                layer: s.layer.clone(),
                start: Some(s.start),
                end: Some(s.end),
                thickness: Some(s.thickness),
                ..Self::empty("segment")
            },
            Shape::Group(g) => Self {
                shapes: g.iter().map(Self::from_shape).collect(),
                ..Self::empty("group")
            },
        }
    }

    /// Convert ShapeData to Shape
    ///
    /// Leaves without a layer are accepted here; the canvas rejects them
    /// when drawing. Coordinates and thickness must be finite.
    pub fn to_shape(&self) -> std::result::Result<Shape, LayoutError> {
        let shape = match self.kind.as_str() {
            "rect" | "rectangle" => {
                let (bottom_left, top_right) = match (self.bottom_left, self.top_right, self.size)
                {
                    (Some(bl), Some(tr), None) => (bl, tr),
                    (None, None, Some((w, h))) => (Point::ORIGIN, Point::new(w, h)),
                    (None, None, None) => {
                        return Err(self.missing("bottom_left and top_right, or size"));
                    }
                    (_, _, Some(_)) => {
                        return Err(self.invalid("size cannot be combined with corners"));
                    }
                    (Some(_), None, None) => return Err(self.missing("top_right")),
                    (None, Some(_), None) => return Err(self.missing("bottom_left")),
                };
                if !bottom_left.is_finite() || !top_right.is_finite() {
                    return Err(self.invalid("corners must be finite"));
                }
                Shape::Rect(Rect {
                    bottom_left,
                    top_right,
                    layer: self.layer.clone(),
                })
            }
            "segment" => {
                let start = self.start.ok_or_else(|| self.missing("start"))?;
                let end = self.end.ok_or_else(|| self.missing("end"))?;
                let thickness = self.thickness.ok_or_else(|| self.missing("thickness"))?;
                if !start.is_finite() || !end.is_finite() || !thickness.is_finite() {
                    return Err(self.invalid("points and thickness must be finite"));
                }
                Shape::Segment(Segment {
                    start,
                    end,
                    thickness,
                    layer: self.layer.clone(),
                })
            }
            "group" => {
                if let Some(layer) = &self.layer {
                    return Err(LayoutError::Parse {
                        reason: format!("group cannot carry a layer (found {})", layer),
                    });
                }
                let shapes = self
                    .shapes
                    .iter()
                    .map(Self::to_shape)
                    .collect::<std::result::Result<Vec<_>, _>>()?;
                Shape::Group(Group { shapes })
            }
            other => {
                return Err(LayoutError::UnsupportedShape {
                    kind: other.to_string(),
                })
            }
        };
        Ok(shape)
    }

    fn missing(&self, field: &str) -> LayoutError {
        self.invalid(&format!("needs {}", field))
    }

    fn invalid(&self, problem: &str) -> LayoutError {
        LayoutError::Parse {
            reason: format!("{} {}", self.kind, problem),
        }
    }
}

impl LayoutFile {
    /// Create an empty layout file
    pub fn new() -> Self {
        Self {
            version: LAYOUT_FORMAT_VERSION.to_string(),
            cell_view: None,
            shapes: Vec::new(),
        }
    }

    pub fn from_shapes<'a>(shapes: impl IntoIterator<Item = &'a Shape>) -> Self {
        Self {
            shapes: shapes.into_iter().map(ShapeData::from_shape).collect(),
            ..Self::new()
        }
    }

    /// Converts every record, failing on the first malformed one.
    pub fn to_shapes(&self) -> std::result::Result<Vec<Shape>, LayoutError> {
        self.shapes.iter().map(ShapeData::to_shape).collect()
    }

    /// Parses layout text in the given format and checks its version.
    pub fn parse(content: &str, format: LayoutFormat) -> std::result::Result<Self, LayoutError> {
        let layout: Self = match format {
            LayoutFormat::Json => serde_json::from_str(content).map_err(|e| LayoutError::Parse {
                reason: e.to_string(),
            })?,
            LayoutFormat::Toml => toml::from_str(content).map_err(|e| LayoutError::Parse {
                reason: e.to_string(),
            })?,
        };
        layout.check_version()?;
        Ok(layout)
    }

    /// Renders the layout in the given format.
    pub fn render(&self, format: LayoutFormat) -> Result<String> {
        let content = match format {
            LayoutFormat::Json => {
                serde_json::to_string_pretty(self).context("Failed to serialize layout")?
            }
            LayoutFormat::Toml => {
                toml::to_string_pretty(self).context("Failed to serialize layout")?
            }
        };
        Ok(content)
    }

    /// Load layout from a `.json` or `.toml` file
    pub fn load_from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let format = LayoutFormat::from_path(path)
            .with_context(|| format!("{} is not a .json or .toml file", path.display()))?;
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read layout file {}", path.display()))?;
        let layout = Self::parse(&content, format)
            .with_context(|| format!("Failed to parse layout file {}", path.display()))?;
        tracing::debug!(
            "Loaded {} top-level shapes from {}",
            layout.shapes.len(),
            path.display()
        );
        Ok(layout)
    }

    /// Save layout to a `.json` or `.toml` file
    pub fn save_to_file(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        let format = LayoutFormat::from_path(path)
            .with_context(|| format!("{} is not a .json or .toml file", path.display()))?;
        std::fs::write(path, self.render(format)?)
            .with_context(|| format!("Failed to write layout file {}", path.display()))?;
        Ok(())
    }

    fn check_version(&self) -> std::result::Result<(), LayoutError> {
        let major = self.version.split('.').next().unwrap_or_default();
        let supported = LAYOUT_FORMAT_VERSION.split('.').next().unwrap_or_default();
        if major != supported {
            return Err(LayoutError::UnsupportedVersion {
                version: self.version.clone(),
            });
        }
        Ok(())
    }
}

impl Default for LayoutFile {
    fn default() -> Self {
        Self::new()
    }
}
