use super::*;
use crate::foundation::error::DeckError;

#[test]
fn ticks_reject_inverted_range() {
    let err = Ticks::new(300.0, 100.0, 300.0, 100.0).unwrap_err();
    assert!(matches!(err, DeckError::Geometry(_)), "{err}");
    assert!(Ticks::new(100.0, 100.0, 300.0, 100.0).is_err());
}

#[test]
fn ticks_reject_bad_spacing() {
    assert!(Ticks::new(0.0, 600.0, 300.0, 0.0).is_err());
    assert!(Ticks::new(0.0, 600.0, 300.0, -5.0).is_err());
    assert!(Ticks::new(0.0, 600.0, 300.0, f64::NAN).is_err());
}

#[test]
fn ticks_reject_spacing_too_fine_for_range() {
    let err = Ticks::new(0.0, 600.0, 300.0, 1e-12).unwrap_err();
    assert!(matches!(err, DeckError::Geometry(_)));
    assert!(Ticks::new(-1e308, 1e308, 0.0, 1.0).is_err());

    let ticks = Ticks::new(0.0, 10_000.0, 300.0, 1.0).unwrap();
    assert_eq!(ticks.positions().len(), 9_999);
}

#[test]
fn ticks_exclude_both_ends() {
    let ticks = Ticks::new(0.0, 600.0, 300.0, 100.0).unwrap();
    assert_eq!(ticks.positions(), &[100.0, 200.0, 300.0, 400.0, 500.0]);

    let ticks = Ticks::new(0.0, 650.0, 300.0, 100.0).unwrap();
    assert_eq!(ticks.positions().len(), 6);

    let ticks = Ticks::new(50.0, 120.0, 300.0, 100.0).unwrap();
    assert!(ticks.positions().is_empty());
}

#[test]
fn ticks_offset_from_range_start() {
    let ticks = Ticks::new(100.0, 400.0, 0.0, 100.0).unwrap();
    assert_eq!(ticks.positions(), &[200.0, 300.0]);
}

#[test]
fn tick_elements_stagger_and_follow_show() {
    let ticks = Ticks::new(0.0, 600.0, 300.0, 100.0)
        .unwrap()
        .with_height(20.0);
    let hidden = ticks.elements("tick", false);
    assert!(hidden.iter().all(|e| !e.animate.is_visible()));

    let shown = ticks.elements("tick", true);
    assert_eq!(shown.len(), 5);
    assert_eq!(shown[3].id, "tick-3");
    assert_eq!(shown[3].transition.delay_s, 1.5);
    assert_eq!(
        shown[0].animate.geometry,
        Geometry::Line {
            from: Point::new(100.0, 290.0),
            to: Point::new(100.0, 310.0),
        }
    );
}

#[test]
fn arrow_head_waits_for_body() {
    let arrow = ArrowAxis {
        from: 0.0,
        to: 600.0,
        y: 300.0,
    };
    let els = arrow.elements("axis", true);
    assert_eq!(els.len(), 2);
    assert_eq!(els[0].initial.path_length, 0.0);
    assert_eq!(els[0].animate.path_length, 1.0);
    assert_eq!(els[1].transition.delay_s, 1.0);
    let Geometry::Polyline { points } = &els[1].animate.geometry else {
        panic!("arrow head should be a polyline");
    };
    assert_eq!(points[0], Point::new(575.0, 290.0));
    assert_eq!(points[2], Point::new(575.0, 310.0));

    let hidden = arrow.elements("axis", false);
    assert!(hidden.iter().all(|e| e.animate.path_length == 0.0));
}

#[test]
fn tracking_segment_is_always_visible() {
    let seg = TrackingSegment {
        stroke: WATERMARK_COLOR,
        y: 300.0,
    };
    let el = seg.element("watermark", 0.0, 220.0);
    assert!(el.initial.is_visible() && el.animate.is_visible());
    assert_eq!(
        el.animate.geometry,
        Geometry::Line {
            from: Point::new(0.0, 300.0),
            to: Point::new(220.0, 300.0),
        }
    );
}
