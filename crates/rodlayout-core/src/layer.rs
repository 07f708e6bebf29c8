//! Layer and cell view identifiers.
//!
//! Both are opaque to the drawing core: a [`Layer`] is passed verbatim to
//! every creation call, a [`CellView`] names the surface the calls target.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::LayoutError;

/// Purpose used when a layer is given by name only.
pub const DEFAULT_PURPOSE: &str = "drawing";

/// A `(name, purpose)` pair such as `M1/drawing`.
///
/// Serialized as the `name/purpose` string.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Layer {
    name: String,
    purpose: String,
}

impl Layer {
    pub fn new(name: impl Into<String>, purpose: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            purpose: purpose.into(),
        }
    }

    /// Layer with the [`DEFAULT_PURPOSE`].
    pub fn drawing(name: impl Into<String>) -> Self {
        Self::new(name, DEFAULT_PURPOSE)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn purpose(&self) -> &str {
        &self.purpose
    }
}

impl fmt::Display for Layer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.name, self.purpose)
    }
}

impl FromStr for Layer {
    type Err = LayoutError;

    fn from_str(spec: &str) -> Result<Self, Self::Err> {
        let invalid = |reason: &str| LayoutError::InvalidLayer {
            spec: spec.to_string(),
            reason: reason.to_string(),
        };

        let (name, purpose) = match spec.split_once('/') {
            Some((name, purpose)) => (name.trim(), purpose.trim()),
            None => (spec.trim(), DEFAULT_PURPOSE),
        };

        if name.is_empty() {
            return Err(invalid("layer name is empty"));
        }
        if purpose.is_empty() {
            return Err(invalid("purpose is empty"));
        }
        if purpose.contains('/') {
            return Err(invalid("expected at most one '/'"));
        }
        if name.contains(char::is_whitespace) || purpose.contains(char::is_whitespace) {
            return Err(invalid("whitespace inside layer or purpose"));
        }

        Ok(Self::new(name, purpose))
    }
}

impl TryFrom<String> for Layer {
    type Error = LayoutError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Layer> for String {
    fn from(layer: Layer) -> Self {
        layer.to_string()
    }
}

/// Identifier of the cell view that all creation calls target.
///
/// The canvas never looks one up on its own; callers always hand it in.
/// The id is written verbatim into generated scripts, so it must be a plain
/// SKILL identifier: an ASCII letter or `_`, then letters, digits or `_`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct CellView(String);

impl CellView {
    pub fn new(id: impl Into<String>) -> Result<Self, LayoutError> {
        let id = id.into();
        let reason = if id.is_empty() {
            "cell view id is empty"
        } else if !is_identifier(&id) {
            "cell view id must be a SKILL identifier"
        } else {
            return Ok(Self(id));
        };
        Err(LayoutError::InvalidCellView {
            spec: id,
            reason: reason.to_string(),
        })
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

fn is_identifier(id: &str) -> bool {
    let mut chars = id.chars();
    chars
        .next()
        .is_some_and(|c| c.is_ascii_alphabetic() || c == '_')
        && chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
}

impl fmt::Display for CellView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for CellView {
    type Err = LayoutError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl TryFrom<String> for CellView {
    type Error = LayoutError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<CellView> for String {
    fn from(cv: CellView) -> Self {
        cv.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_layer_with_purpose() {
        let layer: Layer = "M1/drawing".parse().unwrap();
        assert_eq!(layer.name(), "M1");
        assert_eq!(layer.purpose(), "drawing");
        assert_eq!(layer.to_string(), "M1/drawing");
    }

    #[test]
    fn test_parse_layer_name_only() {
        let layer: Layer = "Poly".parse().unwrap();
        assert_eq!(layer, Layer::drawing("Poly"));
    }

    #[test]
    fn test_parse_layer_rejects_garbage() {
        assert!("".parse::<Layer>().is_err());
        assert!("M1/".parse::<Layer>().is_err());
        assert!("/pin".parse::<Layer>().is_err());
        assert!("M1/pin/x".parse::<Layer>().is_err());
        assert!("metal 1/drawing".parse::<Layer>().is_err());
    }

    #[test]
    fn test_layer_serde_as_string() {
        let layer = Layer::new("M2", "pin");
        let json = serde_json::to_string(&layer).unwrap();
        assert_eq!(json, "\"M2/pin\"");
        let back: Layer = serde_json::from_str(&json).unwrap();
        assert_eq!(back, layer);
    }

    #[test]
    fn test_empty_cell_view_rejected() {
        assert!(CellView::new("").is_err());
        assert!(CellView::new("  ").is_err());
        assert_eq!(CellView::new("cv").unwrap().as_str(), "cv");
        assert_eq!(CellView::new("_top2").unwrap().as_str(), "_top2");
    }

    #[test]
    fn test_cell_view_must_be_identifier() {
        for id in [
            "cv = nil system(\"touch /tmp/x\") cv",
            "1cv",
            "cv-top",
            "cv~>lib",
            "cv\n",
        ] {
            let err = CellView::new(id).unwrap_err();
            assert!(matches!(err, LayoutError::InvalidCellView { .. }), "{}", id);
        }
        assert!("cv)".parse::<CellView>().is_err());
        assert!(serde_json::from_str::<CellView>("\"a b\"").is_err());
    }
}
