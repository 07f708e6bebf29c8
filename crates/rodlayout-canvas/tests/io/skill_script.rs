use rodlayout_canvas::{Canvas, CellViewBinding, Group, Rect, Segment, SkillScriptSurface};
use rodlayout_core::{CellView, Layer, Point};

fn body(script: &str) -> Vec<&str> {
    script.lines().filter(|l| !l.starts_with(';')).collect()
}

#[test]
fn test_group_script() {
    let cv = CellView::new("cv").unwrap();
    let mut canvas = Canvas::new(cv, SkillScriptSurface::new(3));
    canvas.append(
        Group::new()
            .with(Rect::with_size(2.0, 4.0).with_layer(Layer::drawing("M1")))
            .with(Group::new().with(
                Segment::new(Point::new(0.0, 0.5), Point::new(3.0, 0.5), 0.25)
                    .with_layer(Layer::new("M2", "drawing")),
            )),
    );

    let results = canvas.draw().unwrap();
    assert_eq!(results[0].container().map(|f| f.as_str()), Some("fg1"));

    let script = canvas.into_surface().finish();
    assert_eq!(
        body(&script),
        vec![
            "fg1 = dbCreateFigGroup(cv nil nil 0:0 \"R0\")",
            "rod1 = rodCreateRect(?cvId cv ?layer list(\"M1\" \"drawing\") ?bBox list(0:0 2:4))",
            "dbAddFigToFigGroup(fg1 rod1~>dbId)",
            "fg2 = dbCreateFigGroup(cv nil nil 0:0 \"R0\")",
            "rod2 = rodCreatePath(?cvId cv ?layer list(\"M2\" \"drawing\") ?pts list(0:0.5 3:0.5) ?width 0.25)",
            "dbAddFigToFigGroup(fg2 rod2~>dbId)",
            "dbAddFigToFigGroup(fg1 fg2)",
        ]
    );
}

#[test]
fn test_edit_cell_view_binding() {
    let cv = CellView::new("cv").unwrap();
    let mut surface = SkillScriptSurface::default();
    surface.bind_cell_view(&cv, &CellViewBinding::EditCellView);

    let mut canvas = Canvas::new(cv, surface);
    canvas.append(Rect::with_size(1.0, 1.0).with_layer(Layer::drawing("M1")));
    canvas.draw().unwrap();

    let script = canvas.into_surface().finish();
    let lines = body(&script);
    assert_eq!(lines[0], "cv = geGetEditCellView()");
    assert!(lines[1].starts_with("rod1 = rodCreateRect(?cvId cv"));
    assert!(!script.contains("dbSave"));
}

#[test]
fn test_write_script_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("layout.il");

    let mut canvas = Canvas::new(CellView::new("cv").unwrap(), SkillScriptSurface::default());
    canvas.append(Rect::with_size(1.0, 1.0).with_layer(Layer::drawing("M1")));
    canvas.draw().unwrap();
    canvas.into_surface().write_to_file(&path).unwrap();

    let written = std::fs::read_to_string(&path).unwrap();
    assert!(written.starts_with("; Generated by rodlayout"));
    assert!(written.contains("rodCreateRect"));
}
