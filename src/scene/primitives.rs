//! Diagram building blocks shared by the aggregation scenes.

use crate::{
    animation::transition::Transition,
    foundation::color::Color,
    foundation::core::Point,
    foundation::error::{DeckError, DeckResult},
    visual::model::{Element, ElementState, Geometry, Paint},
};

/// Event-time axis and arrow color.
pub const AXIS_COLOR: Color = Color::rgb(0xff, 0x00, 0x55);
/// Records, ticks and aggregate labels.
pub const RECORD_COLOR: Color = Color::rgb(0x00, 0xcc, 0x88);
/// Watermark segment.
pub const WATERMARK_COLOR: Color = Color::rgb(0x00, 0x00, 0xff);
/// Segment between the watermark and the latest event time.
pub const UNCERTAINTY_COLOR: Color = Color::rgb(0xff, 0xa5, 0x00);
/// Slide text.
pub const TEXT_COLOR: Color = Color::rgb(0xef, 0xf6, 0xff);

const ARROWHEAD_BACK: f64 = 25.0;
const ARROWHEAD_SPREAD: f64 = 10.0;

/// Horizontal arrow that draws itself in: body first, head one second later.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ArrowAxis {
    /// Left end x.
    pub from: f64,
    /// Right end (arrow tip) x.
    pub to: f64,
    /// Vertical position.
    pub y: f64,
}

impl ArrowAxis {
    /// Body and head elements, drawn iff `show`.
    pub fn elements(&self, id: &str, show: bool) -> Vec<Element> {
        let body = Geometry::Line {
            from: Point::new(self.from, self.y),
            to: Point::new(self.to, self.y),
        };
        let head = Geometry::Polyline {
            points: vec![
                Point::new(self.to - ARROWHEAD_BACK, self.y - ARROWHEAD_SPREAD),
                Point::new(self.to, self.y),
                Point::new(self.to - ARROWHEAD_BACK, self.y + ARROWHEAD_SPREAD),
            ],
        };
        let drawn = if show { 1.0 } else { 0.0 };

        vec![
            Element {
                id: format!("{id}-body"),
                paint: Paint::stroke(AXIS_COLOR, 2.0),
                initial: ElementState::hidden(body.clone()).with_path_length(0.0),
                animate: ElementState::visible_if(body, show).with_path_length(drawn),
                transition: Transition::over(1.0),
            },
            Element {
                id: format!("{id}-head"),
                paint: Paint::stroke(AXIS_COLOR, 2.0),
                initial: ElementState::hidden(head.clone()).with_path_length(0.0),
                animate: ElementState::visible_if(head, show).with_path_length(drawn),
                transition: Transition::over(1.0).delayed(1.0),
            },
        ]
    }
}

/// Evenly spaced tick marks strictly between `from` and `to`.
#[derive(Clone, Debug, PartialEq)]
pub struct Ticks {
    positions: Vec<f64>,
    y: f64,
    height: f64,
}

impl Ticks {
    /// Default tick height.
    pub const DEFAULT_HEIGHT: f64 = 10.0;

    /// Upper bound on `(to - from) / spacing`.
    pub const MAX_TICKS: f64 = 10_000.0;

    /// Lay out `ceil((to - from) / spacing) - 1` ticks at `from + (i + 1) * spacing`.
    ///
    /// Fails fast on an inverted or empty range, on non-positive spacing and on a spacing so
    /// small that the range would hold more than [`Ticks::MAX_TICKS`] ticks.
    pub fn new(from: f64, to: f64, y: f64, spacing: f64) -> DeckResult<Self> {
        if !(from.is_finite() && to.is_finite()) || from >= to {
            return Err(DeckError::geometry(format!(
                "ticks: from must be less than to (from={from}, to={to})"
            )));
        }
        if !spacing.is_finite() || spacing <= 0.0 {
            return Err(DeckError::geometry(format!(
                "ticks: spacing must be > 0 (got {spacing})"
            )));
        }

        let slots = (to - from) / spacing;
        if slots > Self::MAX_TICKS {
            return Err(DeckError::geometry(format!(
                "ticks: spacing {spacing} over {from}..{to} exceeds {} ticks",
                Self::MAX_TICKS
            )));
        }

        let count = (slots.ceil() as usize).saturating_sub(1);
        let positions = (0..count)
            .map(|i| from + (i as f64 + 1.0) * spacing)
            .collect();
        Ok(Self {
            positions,
            y,
            height: Self::DEFAULT_HEIGHT,
        })
    }

    /// Override the tick height.
    pub fn with_height(self, height: f64) -> Self {
        Self { height, ..self }
    }

    /// Tick x positions, left to right.
    pub fn positions(&self) -> &[f64] {
        &self.positions
    }

    /// One line per tick, fading in one after another iff `show`.
    pub fn elements(&self, id: &str, show: bool) -> Vec<Element> {
        let half = self.height / 2.0;
        self.positions
            .iter()
            .enumerate()
            .map(|(i, &x)| {
                let line = Geometry::Line {
                    from: Point::new(x, self.y - half),
                    to: Point::new(x, self.y + half),
                };
                Element {
                    id: format!("{id}-{i}"),
                    paint: Paint::stroke(RECORD_COLOR, 1.5),
                    initial: ElementState::hidden(line.clone()),
                    animate: ElementState::visible_if(line, show),
                    transition: Transition::over(0.5).delayed(i as f64 * 0.5),
                }
            })
            .collect()
    }
}

/// Always-visible horizontal segment whose endpoints follow the current shot.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TrackingSegment {
    /// Stroke color.
    pub stroke: Color,
    /// Vertical position.
    pub y: f64,
}

impl TrackingSegment {
    /// Segment spanning `from..to` for this shot.
    pub fn element(&self, id: &str, from: f64, to: f64) -> Element {
        let line = Geometry::Line {
            from: Point::new(from, self.y),
            to: Point::new(to, self.y),
        };
        Element {
            id: id.to_string(),
            paint: Paint::stroke(self.stroke, 2.0),
            initial: ElementState::shown(line.clone()),
            animate: ElementState::shown(line),
            transition: Transition::default(),
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/scene/primitives.rs"]
mod tests;
