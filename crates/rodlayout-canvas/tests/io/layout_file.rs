use rodlayout_canvas::{
    Canvas, Group, LayoutFile, LayoutFormat, RecordingSurface, Rect, Segment, Shape,
};
use rodlayout_core::{CellView, Layer, LayoutError, Point};

const INVERTER_TOML: &str = r#"
version = "1.0"
cell_view = "cv"

[[shapes]]
kind = "rect"
layer = "M1/drawing"
bottom_left = [0.0, 0.0]
top_right = [2.0, 4.0]

[[shapes]]
kind = "group"

[[shapes.shapes]]
kind = "segment"
layer = "M2"
start = [0.0, 1.0]
end = [10.0, 1.0]
thickness = 0.5

[[shapes.shapes]]
kind = "rect"
layer = "Poly/pin"
size = [1.0, 1.0]
"#;

fn sample_shapes() -> Vec<Shape> {
    vec![
        Rect::new(Point::new(0.0, 0.0), Point::new(2.0, 4.0))
            .with_layer(Layer::drawing("M1"))
            .into(),
        Group::new()
            .with(
                Segment::new(Point::new(0.0, 1.0), Point::new(10.0, 1.0), 0.5)
                    .with_layer(Layer::drawing("M2")),
            )
            .with(Rect::with_size(1.0, 1.0).with_layer(Layer::new("Poly", "pin")))
            .into(),
    ]
}

#[test]
fn test_parse_toml_layout() {
    let layout = LayoutFile::parse(INVERTER_TOML, LayoutFormat::Toml).unwrap();
    assert_eq!(layout.cell_view, Some(CellView::new("cv").unwrap()));
    assert_eq!(layout.to_shapes().unwrap(), sample_shapes());
}

#[test]
fn test_save_and_load_json() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("layout.json");

    let layout = LayoutFile::from_shapes(&sample_shapes());
    layout.save_to_file(&path).unwrap();

    let loaded = LayoutFile::load_from_file(&path).unwrap();
    assert_eq!(loaded.to_shapes().unwrap(), sample_shapes());
}

#[test]
fn test_save_and_load_toml() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("layout.toml");

    let mut layout = LayoutFile::from_shapes(&sample_shapes());
    layout.cell_view = Some(CellView::new("cvTop").unwrap());
    layout.save_to_file(&path).unwrap();

    let loaded = LayoutFile::load_from_file(&path).unwrap();
    assert_eq!(loaded, layout);
}

#[test]
fn test_unknown_extension_rejected() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("layout.yaml");
    std::fs::write(&path, "version: 1.0").unwrap();
    assert!(LayoutFile::load_from_file(&path).is_err());
}

#[test]
fn test_unsupported_kind_in_file() {
    let json = r#"{"version": "1.0", "shapes": [{"kind": "circle", "layer": "M1"}]}"#;
    let layout = LayoutFile::parse(json, LayoutFormat::Json).unwrap();
    assert_eq!(
        layout.to_shapes().unwrap_err(),
        LayoutError::UnsupportedShape {
            kind: "circle".to_string()
        }
    );
}

#[test]
fn test_bad_layer_is_parse_error() {
    let json = r#"{"version": "1.0", "shapes": [{"kind": "rect", "layer": "M1/", "size": [1, 1]}]}"#;
    let err = LayoutFile::parse(json, LayoutFormat::Json).unwrap_err();
    assert!(matches!(err, LayoutError::Parse { .. }));
}

#[test]
fn test_loaded_layout_draws() {
    let layout = LayoutFile::parse(INVERTER_TOML, LayoutFormat::Toml).unwrap();
    let mut canvas = Canvas::new(CellView::new("cv").unwrap(), RecordingSurface::new());
    canvas.extend(layout.to_shapes().unwrap());

    let results = canvas.draw().unwrap();
    assert_eq!(results.len(), 2);
    assert_eq!(canvas.surface().calls().len(), 6);
}
