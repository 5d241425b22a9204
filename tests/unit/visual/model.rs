use super::*;

fn rect(x: f64, r: f64) -> Geometry {
    Geometry::Rect {
        origin: Point::new(x, 250.0),
        size: Size::new(30.0, 30.0),
        corner_radius: r,
    }
}

#[test]
fn rect_lerp_blends_position_and_radius() {
    let g = Geometry::lerp(&rect(110.0, 30.0), &rect(135.0, 0.0), 0.5);
    assert_eq!(g, rect(122.5, 15.0));
}

#[test]
fn mismatched_shapes_snap_to_target() {
    let line = Geometry::Line {
        from: Point::ZERO,
        to: Point::new(1.0, 0.0),
    };
    assert_eq!(Geometry::lerp(&line, &rect(0.0, 0.0), 0.1), rect(0.0, 0.0));
}

#[test]
fn text_keeps_target_content() {
    let a = Geometry::Text {
        origin: Point::new(0.0, 0.0),
        content: "1".to_string(),
    };
    let b = Geometry::Text {
        origin: Point::new(0.0, 100.0),
        content: "2".to_string(),
    };
    let Geometry::Text { origin, content } = Geometry::lerp(&a, &b, 0.25) else {
        panic!("expected text");
    };
    assert_eq!(origin, Point::new(0.0, 25.0));
    assert_eq!(content, "2");
}

#[test]
fn state_lerp_clamps_opacity() {
    let a = ElementState::hidden(rect(0.0, 0.0));
    let b = ElementState::shown(rect(0.0, 0.0));
    let mid = ElementState::lerp(&a, &b, 0.5);
    assert!((mid.opacity - 0.5).abs() < 1e-12);
    assert_eq!(ElementState::lerp(&a, &b, 2.0).opacity, 1.0);
}

#[test]
fn visible_ids_follow_target_state() {
    let el = |id: &str, visible| Element {
        id: id.to_string(),
        paint: Paint::stroke(Color::rgb(0, 0, 0), 1.0),
        initial: ElementState::hidden(rect(0.0, 0.0)),
        animate: ElementState::visible_if(rect(0.0, 0.0), visible),
        transition: Transition::default(),
    };
    let state = VisualState {
        scene: "s".to_string(),
        shot: ShotIndex(0),
        view_box: Size::new(10.0, 10.0),
        elements: vec![el("a", true), el("b", false)],
    };
    assert_eq!(state.visible_ids(), vec!["a"]);
    assert!(state.element("b").is_some());
    assert!(state.element("c").is_none());
}

#[test]
fn json_dump_tags_geometry_kind() {
    let state = VisualState {
        scene: "s".to_string(),
        shot: ShotIndex(2),
        view_box: Size::new(10.0, 10.0),
        elements: Vec::new(),
    };
    let json = state.to_json().unwrap();
    assert!(json.contains("\"shot\": 2"));

    let geometry = serde_json::to_value(rect(1.0, 2.0)).unwrap();
    assert_eq!(geometry["kind"], "rect");
}
