//! Shape tree drawn by the canvas.
//!
//! Leaves ([`Rect`], [`Segment`]) carry an optional [`Layer`]; a [`Group`]
//! only holds an ordered list of children and has no layer of its own.

use rodlayout_core::{BoundingBox, Layer, Point};
use std::fmt;

/// Axis-aligned rectangle given by its corners.
#[derive(Debug, Clone, PartialEq)]
pub struct Rect {
    pub bottom_left: Point,
    pub top_right: Point,
    pub layer: Option<Layer>,
}

impl Rect {
    pub fn new(bottom_left: Point, top_right: Point) -> Self {
        Self {
            bottom_left,
            top_right,
            layer: None,
        }
    }

    /// Rectangle of the given size with its bottom-left corner at the origin.
    pub fn with_size(width: f64, height: f64) -> Self {
        Self::new(Point::ORIGIN, Point::new(width, height))
    }

    pub fn with_layer(mut self, layer: Layer) -> Self {
        self.layer = Some(layer);
        self
    }

    pub fn bounding_box(&self) -> BoundingBox {
        BoundingBox::new(self.bottom_left, self.top_right)
    }
}

/// Straight path between two points with a thickness.
#[derive(Debug, Clone, PartialEq)]
pub struct Segment {
    pub start: Point,
    pub end: Point,
    pub thickness: f64,
    pub layer: Option<Layer>,
}

impl Segment {
    pub fn new(start: Point, end: Point, thickness: f64) -> Self {
        Self {
            start,
            end,
            thickness,
            layer: None,
        }
    }

    pub fn with_layer(mut self, layer: Layer) -> Self {
        self.layer = Some(layer);
        self
    }

    pub fn points(&self) -> [Point; 2] {
        [self.start, self.end]
    }
}

/// Ordered collection of child shapes drawn as one figure group.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Group {
    pub shapes: Vec<Shape>,
}

impl Group {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn append(&mut self, shape: impl Into<Shape>) {
        self.shapes.push(shape.into());
    }

    /// Builder form of [`Group::append`].
    pub fn with(mut self, shape: impl Into<Shape>) -> Self {
        self.append(shape);
        self
    }

    pub fn len(&self) -> usize {
        self.shapes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.shapes.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Shape> {
        self.shapes.iter()
    }
}

impl<S: Into<Shape>> FromIterator<S> for Group {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self {
            shapes: iter.into_iter().map(Into::into).collect(),
        }
    }
}

impl<S: Into<Shape>> Extend<S> for Group {
    fn extend<I: IntoIterator<Item = S>>(&mut self, iter: I) {
        self.shapes.extend(iter.into_iter().map(Into::into));
    }
}

/// Variant tag of a [`Shape`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ShapeKind {
    Rect,
    Segment,
    Group,
}

impl ShapeKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Rect => "rect",
            Self::Segment => "segment",
            Self::Group => "group",
        }
    }
}

impl fmt::Display for ShapeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Shape {
    Rect(Rect),
    Segment(Segment),
    Group(Group),
}

impl Shape {
    pub fn kind(&self) -> ShapeKind {
        match self {
            Shape::Rect(_) => ShapeKind::Rect,
            Shape::Segment(_) => ShapeKind::Segment,
            Shape::Group(_) => ShapeKind::Group,
        }
    }

    /// Layer of a leaf shape. Always `None` for groups.
    pub fn layer(&self) -> Option<&Layer> {
        match self {
            Shape::Rect(r) => r.layer.as_ref(),
            Shape::Segment(s) => s.layer.as_ref(),
            Shape::Group(_) => None,
        }
    }

    /// Number of rectangles and segments in this subtree.
    pub fn leaf_count(&self) -> usize {
        match self {
            Shape::Rect(_) | Shape::Segment(_) => 1,
            Shape::Group(g) => g.iter().map(Shape::leaf_count).sum(),
        }
    }

    /// Number of group nodes in this subtree, including `self`.
    pub fn group_count(&self) -> usize {
        match self {
            Shape::Rect(_) | Shape::Segment(_) => 0,
            Shape::Group(g) => 1 + g.iter().map(Shape::group_count).sum::<usize>(),
        }
    }
}

impl From<Rect> for Shape {
    fn from(r: Rect) -> Self {
        Shape::Rect(r)
    }
}

impl From<Segment> for Shape {
    fn from(s: Segment) -> Self {
        Shape::Segment(s)
    }
}

impl From<Group> for Shape {
    fn from(g: Group) -> Self {
        Shape::Group(g)
    }
}
