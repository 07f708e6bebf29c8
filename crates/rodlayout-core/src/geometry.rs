//! Plain geometry values passed to the drawing surface.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::LayoutError;

/// A point in user units.
///
/// Serialized as an `[x, y]` pair so layout files stay compact.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(from = "(f64, f64)", into = "(f64, f64)")]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const ORIGIN: Point = Point { x: 0.0, y: 0.0 };

    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Neither coordinate is NaN or infinite.
    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

impl From<(f64, f64)> for Point {
    fn from((x, y): (f64, f64)) -> Self {
        Self::new(x, y)
    }
}

impl From<Point> for (f64, f64) {
    fn from(p: Point) -> Self {
        (p.x, p.y)
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// Axis-aligned box given by its bottom-left and top-right corners.
///
/// The corners are stored exactly as supplied; no normalization happens
/// here, the tool decides what a degenerate box means.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BoundingBox {
    pub bottom_left: Point,
    pub top_right: Point,
}

impl BoundingBox {
    pub fn new(bottom_left: Point, top_right: Point) -> Self {
        Self {
            bottom_left,
            top_right,
        }
    }

    pub fn is_finite(&self) -> bool {
        self.bottom_left.is_finite() && self.top_right.is_finite()
    }
}

/// Placement orientation of a figure group, using the tool's eight codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Orient {
    #[default]
    R0,
    R90,
    R180,
    R270,
    MX,
    MY,
    MXR90,
    MYR90,
}

impl Orient {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::R0 => "R0",
            Self::R90 => "R90",
            Self::R180 => "R180",
            Self::R270 => "R270",
            Self::MX => "MX",
            Self::MY => "MY",
            Self::MXR90 => "MXR90",
            Self::MYR90 => "MYR90",
        }
    }
}

impl fmt::Display for Orient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Orient {
    type Err = LayoutError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "R0" => Ok(Self::R0),
            "R90" => Ok(Self::R90),
            "R180" => Ok(Self::R180),
            "R270" => Ok(Self::R270),
            "MX" => Ok(Self::MX),
            "MY" => Ok(Self::MY),
            "MXR90" => Ok(Self::MXR90),
            "MYR90" => Ok(Self::MYR90),
            other => Err(LayoutError::Parse {
                reason: format!("unknown orientation '{}'", other),
            }),
        }
    }
}
