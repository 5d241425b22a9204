use super::*;
use crate::{
    foundation::core::Size,
    visual::model::{ElementState, Paint},
};

fn frame(nodes: Vec<FrameNode>) -> Frame {
    Frame {
        view_box: Size::new(600.0, 600.0),
        nodes,
    }
}

fn node(id: &str, paint: Paint, state: ElementState) -> FrameNode {
    FrameNode {
        id: id.to_string(),
        paint,
        state,
    }
}

fn axis(path_length: f64) -> FrameNode {
    node(
        "axis-body",
        Paint::stroke(Color::rgb(0xff, 0x00, 0x55), 2.0),
        ElementState::shown(Geometry::Line {
            from: Point::new(0.0, 300.0),
            to: Point::new(600.0, 300.0),
        })
        .with_path_length(path_length),
    )
}

#[test]
fn document_has_viewbox_and_scaled_size() {
    let settings = RenderSettings {
        scale: 2.0,
        background: None,
        ..RenderSettings::default()
    };
    let svg = to_svg(&frame(vec![]), &settings);
    assert!(svg.starts_with(
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="1200" height="1200" viewBox="0 0 600 600">"#
    ));
    assert!(svg.trim_end().ends_with("</svg>"));
}

#[test]
fn hidden_nodes_are_omitted() {
    let hidden = node(
        "ghost",
        Paint::stroke(Color::rgb(0, 0, 0), 1.0),
        ElementState::hidden(Geometry::Line {
            from: Point::ZERO,
            to: Point::new(1.0, 1.0),
        }),
    );
    let svg = to_svg(&frame(vec![hidden, axis(0.0)]), &RenderSettings::default());
    assert!(!svg.contains("ghost"));
    assert!(!svg.contains("axis-body"));
}

#[test]
fn partial_stroke_uses_dash_array() {
    let svg = to_svg(&frame(vec![axis(0.5)]), &RenderSettings::default());
    assert!(svg.contains(r#"stroke-dasharray="300 600""#), "{svg}");

    let svg = to_svg(&frame(vec![axis(1.0)]), &RenderSettings::default());
    assert!(!svg.contains("stroke-dasharray"));
}

#[test]
fn rect_radius_is_clamped_to_half_side() {
    let circle = node(
        "record-0",
        Paint::stroke(Color::rgb(0, 0xcc, 0x88), 1.0),
        ElementState::shown(Geometry::Rect {
            origin: Point::new(110.0, 250.0),
            size: Size::new(30.0, 30.0),
            corner_radius: 30.0,
        }),
    );
    let svg = to_svg(&frame(vec![circle]), &RenderSettings::default());
    assert!(svg.contains(r#"rx="15" ry="15""#), "{svg}");
    assert!(svg.contains(r#"fill="none""#));
}

#[test]
fn text_is_escaped() {
    let text = node(
        "header",
        Paint::text(Color::rgb(0xef, 0xf6, 0xff), 32.0),
        ElementState::shown(Geometry::Text {
            origin: Point::new(40.0, 80.0),
            content: "joins <& watermarks>".to_string(),
        }),
    );
    let svg = to_svg(&frame(vec![text]), &RenderSettings::default());
    assert!(svg.contains("joins &lt;&amp; watermarks&gt;"));
    assert!(svg.contains(r#"font-size="32""#));
}

#[test]
fn translucent_node_sets_opacity() {
    let mut n = axis(1.0);
    n.state.opacity = 0.25;
    let svg = to_svg(&frame(vec![n]), &RenderSettings::default());
    assert!(svg.contains(r#"opacity="0.25""#));
}
