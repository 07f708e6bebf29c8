//! Canvas type definitions: DrawResult, ShapePath.

use std::fmt;

/// Outcome of materializing one shape.
///
/// The tool-side identity of a leaf is the ROD object it created, that of a
/// group is its container figure. Exactly one of the two exists per shape;
/// [`container`](Self::container) and [`leaf`](Self::leaf) expose the pair
/// view of it.
#[derive(Debug, Clone, PartialEq)]
pub enum DrawResult<R, F> {
    Leaf(R),
    Group(F),
}

impl<R, F> DrawResult<R, F> {
    /// Container handle, present for groups only.
    pub fn container(&self) -> Option<&F> {
        match self {
            Self::Group(f) => Some(f),
            Self::Leaf(_) => None,
        }
    }

    /// Leaf handle, present for rectangles and segments only.
    pub fn leaf(&self) -> Option<&R> {
        match self {
            Self::Leaf(r) => Some(r),
            Self::Group(_) => None,
        }
    }

    /// `(container, leaf)` pair.
    pub fn into_pair(self) -> (Option<F>, Option<R>) {
        match self {
            Self::Leaf(r) => (None, Some(r)),
            Self::Group(f) => (Some(f), None),
        }
    }

    pub fn is_group(&self) -> bool {
        matches!(self, Self::Group(_))
    }
}

/// Position of a shape in the canvas tree.
///
/// The first index is the top-level position, each further index selects a
/// child of the group before it. Displayed as `2/0/1`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct ShapePath(Vec<usize>);

impl ShapePath {
    pub fn root(index: usize) -> Self {
        Self(vec![index])
    }

    pub fn child(&self, index: usize) -> Self {
        let mut indices = self.0.clone();
        indices.push(index);
        Self(indices)
    }

    pub fn indices(&self) -> &[usize] {
        &self.0
    }

    /// Index of the top-level shape this path lies under.
    pub fn top_level(&self) -> usize {
        self.0.first().copied().unwrap_or(0)
    }
}

impl fmt::Display for ShapePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, index) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str("/")?;
            }
            write!(f, "{}", index)?;
        }
        Ok(())
    }
}
