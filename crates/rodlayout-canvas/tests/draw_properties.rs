//! Property tests for the canvas traversal

use proptest::prelude::*;
use rodlayout_canvas::{
    Canvas, Group, RecordedHandle, RecordingSurface, Rect, Segment, Shape, SurfaceCall,
    SurfaceDrawResult,
};
use rodlayout_core::{BoundingBox, CellView, Layer, Point};

fn layer() -> impl Strategy<Value = Layer> {
    prop_oneof![
        Just(Layer::drawing("M1")),
        Just(Layer::drawing("M2")),
        Just(Layer::new("Poly", "pin")),
    ]
}

fn point() -> impl Strategy<Value = Point> {
    (-1000.0..1000.0f64, -1000.0..1000.0f64).prop_map(|(x, y)| Point::new(x, y))
}

fn leaf() -> impl Strategy<Value = Shape> {
    prop_oneof![
        (point(), point(), layer())
            .prop_map(|(bl, tr, l)| Shape::from(Rect::new(bl, tr).with_layer(l))),
        (point(), point(), 0.01..10.0f64, layer())
            .prop_map(|(a, b, w, l)| Shape::from(Segment::new(a, b, w).with_layer(l))),
    ]
}

fn tree() -> impl Strategy<Value = Shape> {
    leaf().prop_recursive(4, 48, 5, |inner| {
        prop::collection::vec(inner, 0..5)
            .prop_map(|children| Shape::Group(Group { shapes: children }))
    })
}

fn draw(shapes: &[Shape]) -> (Vec<SurfaceDrawResult<RecordingSurface>>, RecordingSurface) {
    let mut canvas = Canvas::new(CellView::new("cv").unwrap(), RecordingSurface::new());
    canvas.extend(shapes.iter().cloned());
    let results = canvas.draw().unwrap();
    (results, canvas.into_surface())
}

/// Whether each add call's member is a group, in the order adds are issued.
fn expected_member_is_group(shape: &Shape, out: &mut Vec<bool>) {
    if let Shape::Group(g) = shape {
        for child in g.iter() {
            expected_member_is_group(child, out);
            out.push(matches!(child, Shape::Group(_)));
        }
    }
}

proptest! {
    #[test]
    fn test_leaves_drawn_once_each_in_order(shapes in prop::collection::vec(leaf(), 0..20)) {
        let (results, surface) = draw(&shapes);

        prop_assert_eq!(results.len(), shapes.len());
        prop_assert_eq!(surface.calls().len(), shapes.len());
        for (i, (shape, call)) in shapes.iter().zip(surface.calls()).enumerate() {
            let rod = RecordedHandle::Rod(i as u32 + 1);
            prop_assert_eq!(results[i].leaf(), Some(&rod));
            match (shape, call) {
                (Shape::Rect(r), SurfaceCall::CreateRect { b_box, layer, .. }) => {
                    prop_assert_eq!(*b_box, BoundingBox::new(r.bottom_left, r.top_right));
                    prop_assert_eq!(Some(layer), r.layer.as_ref());
                }
                (Shape::Segment(s), SurfaceCall::CreatePath { points, width, layer, .. }) => {
                    prop_assert_eq!(*points, [s.start, s.end]);
                    prop_assert_eq!(*width, s.thickness);
                    prop_assert_eq!(Some(layer), s.layer.as_ref());
                }
                _ => prop_assert!(false, "call {} does not match shape {:?}", call, shape),
            }
        }
    }

    #[test]
    fn test_call_counts_match_tree(shapes in prop::collection::vec(tree(), 0..4)) {
        let (results, surface) = draw(&shapes);

        let leaves: usize = shapes.iter().map(Shape::leaf_count).sum();
        let groups: usize = shapes.iter().map(Shape::group_count).sum();
        let mut member_kinds = Vec::new();
        for shape in &shapes {
            expected_member_is_group(shape, &mut member_kinds);
        }

        prop_assert_eq!(results.len(), shapes.len());
        prop_assert_eq!(surface.count("create_rect") + surface.count("create_path"), leaves);
        prop_assert_eq!(surface.count("create_fig_group"), groups);
        prop_assert_eq!(surface.count("add_fig_to_fig_group"), member_kinds.len());
        for (shape, result) in shapes.iter().zip(&results) {
            prop_assert_eq!(result.is_group(), matches!(shape, Shape::Group(_)));
        }

        let actual: Vec<bool> = surface
            .calls()
            .iter()
            .filter_map(|c| match c {
                SurfaceCall::AddFigToFigGroup { member, .. } => {
                    Some(matches!(member, RecordedHandle::Group(_)))
                }
                _ => None,
            })
            .collect();
        prop_assert_eq!(actual, member_kinds);
    }
}
