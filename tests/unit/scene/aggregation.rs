use super::*;

const SQUARE: u64 = 3;

fn example() -> AggregationDiagram {
    AggregationDiagram::builder("example", 6)
        .ticks(100.0, 10.0, 0)
        .record(120.0, 0)
        .record(220.0, 1)
        .record(270.0, 2)
        .window(200.0, SQUARE, 4)
        .window(300.0, SQUARE, 5)
        .build()
        .unwrap()
}

fn rect_of(state: &VisualState, id: &str) -> (Point, f64) {
    match state.element(id).map(|e| &e.animate.geometry) {
        Some(Geometry::Rect {
            origin,
            corner_radius,
            ..
        }) => (*origin, *corner_radius),
        other => panic!("{id} is not a rect: {other:?}"),
    }
}

fn label_of(state: &VisualState, id: &str) -> (String, bool) {
    let el = state.element(id).unwrap();
    match &el.animate.geometry {
        Geometry::Text { content, .. } => (content.clone(), el.animate.is_visible()),
        other => panic!("{id} is not text: {other:?}"),
    }
}

#[test]
fn windows_end_at_next_multiple() {
    let d = example();
    assert_eq!(d.window_end(120.0), 200.0);
    assert_eq!(d.window_end(220.0), 300.0);
    assert_eq!(d.window_end(270.0), 300.0);
    assert_eq!(d.window_end(300.0), 300.0);
}

#[test]
fn counts_group_records_per_window() {
    let d = example();
    assert_eq!(d.aggregate_count(300.0), 2);
    assert_eq!(d.aggregate_count(200.0), 1);
    assert_eq!(d.aggregate_count(400.0), 0);
}

#[test]
fn records_square_up_at_threshold() {
    let d = example();
    let before = d.render(ShotIndex(SQUARE - 1));
    assert_eq!(rect_of(&before, "record-1"), (Point::new(205.0, 250.0), 30.0));
    assert_eq!(label_of(&before, "aggregate-300"), ("2".to_string(), false));

    let after = d.render(ShotIndex(SQUARE));
    assert_eq!(rect_of(&after, "record-1"), (Point::new(235.0, 250.0), 0.0));
    assert_eq!(rect_of(&after, "record-2"), (Point::new(235.0, 250.0), 0.0));
    assert_eq!(rect_of(&after, "record-0"), (Point::new(135.0, 250.0), 0.0));
    assert_eq!(label_of(&after, "aggregate-300"), ("2".to_string(), true));
    assert_eq!(label_of(&after, "aggregate-200"), ("1".to_string(), true));
}

#[test]
fn emitted_aggregates_slide_downstream() {
    let d = example();
    let s = d.render(ShotIndex(4));
    assert_eq!(rect_of(&s, "record-0").0.y, 325.0);
    assert_eq!(rect_of(&s, "record-1").0.y, 250.0);
    let Some(Geometry::Text { origin, .. }) =
        s.element("aggregate-200").map(|e| &e.animate.geometry)
    else {
        panic!("label missing");
    };
    assert_eq!(*origin, Point::new(145.0, 345.0));
}

#[test]
fn late_record_stays_a_circle() {
    let d = AggregationDiagram::builder("late", 8)
        .record(125.0, 1)
        .window(200.0, 2, 3)
        .record(160.0, 5)
        .build()
        .unwrap();
    assert_eq!(d.aggregate_count(200.0), 1);
    let s = d.render(ShotIndex(7));
    assert_eq!(rect_of(&s, "record-1"), (Point::new(145.0, 250.0), 30.0));
    assert_eq!(d.record_cue(&d.records()[1]).transform, Threshold::Never);
}

#[test]
fn record_arriving_before_aggregation_is_counted() {
    let d = AggregationDiagram::builder("ooo", 8)
        .record(230.0, 1)
        .record(250.0, 4)
        .window(300.0, 4, 5)
        .build()
        .unwrap();
    assert_eq!(d.aggregate_count(300.0), 2);
}

#[test]
fn watermark_trails_largest_event_time() {
    let d = AggregationDiagram::builder("wm", 5)
        .record(125.0, 1)
        .record(320.0, 2)
        .record(250.0, 3)
        .watermark(100.0)
        .build()
        .unwrap();
    assert_eq!(d.watermark(ShotIndex(0)), Some(-100.0));
    assert_eq!(d.watermark(ShotIndex(1)), Some(25.0));
    assert_eq!(d.watermark(ShotIndex(3)), Some(220.0));

    let s = d.render(ShotIndex(3));
    assert_eq!(
        s.element("uncertainty").unwrap().animate.geometry,
        Geometry::Line {
            from: Point::new(220.0, 300.0),
            to: Point::new(320.0, 300.0),
        }
    );
    assert!(example().watermark(ShotIndex(3)).is_none());
    assert!(example().render(ShotIndex(3)).element("watermark").is_none());
}

#[test]
fn ticks_render_on_top() {
    let s = example().render(ShotIndex(0));
    assert!(s.elements.last().unwrap().id.starts_with("tick-"));
}

#[test]
fn build_rejects_bad_definitions() {
    let err = AggregationDiagram::builder("bad", 1)
        .window(250.0, 1, 2)
        .build()
        .unwrap_err();
    assert!(matches!(err, DeckError::Validation(_)));

    assert!(
        AggregationDiagram::builder("bad", 1)
            .window(200.0, 3, 2)
            .build()
            .is_err()
    );
    assert!(
        AggregationDiagram::builder("bad", 1)
            .window(200.0, 1, 2)
            .window(200.0, 1, 2)
            .build()
            .is_err()
    );
    assert!(
        AggregationDiagram::builder("bad", 1)
            .record(f64::NAN, 0)
            .build()
            .is_err()
    );
    let err = AggregationDiagram::builder("bad", 1)
        .ticks(0.0, 10.0, 0)
        .build()
        .unwrap_err();
    assert!(matches!(err, DeckError::Geometry(_)));
}
