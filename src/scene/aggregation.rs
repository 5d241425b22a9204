use crate::{
    animation::transition::Transition,
    foundation::core::{Point, ShotIndex, Size},
    foundation::error::{DeckError, DeckResult},
    scene::{
        Scene,
        cue::{Cue, Threshold},
        primitives::{
            ArrowAxis, RECORD_COLOR, TrackingSegment, Ticks, UNCERTAINTY_COLOR, WATERMARK_COLOR,
        },
    },
    visual::model::{Element, ElementState, Geometry, Paint, VisualState},
};

const VIEW_BOX: Size = Size::new(600.0, 600.0);
/// Side of a record marker; circles and squares share it.
pub const RECORD_SIZE: f64 = 30.0;
const RECORD_Y: f64 = 250.0;
const LABEL_Y: f64 = 270.0;
const LABEL_FONT_SIZE: f64 = 16.0;
const EMIT_OFFSET: f64 = 75.0;
const DEFAULT_WINDOW_SIZE: f64 = 100.0;

/// A record marker: its event time and the shot it arrives at.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RecordSpec {
    /// Event time, also the marker's x coordinate.
    pub event_time: f64,
    /// Arrival shot.
    pub appear: ShotIndex,
}

/// When a window aggregates its on-time records and when it emits the aggregate.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct WindowCue {
    /// Exclusive-start, inclusive-end upper bound of the window.
    pub end: f64,
    /// Records become one square aggregate.
    pub aggregate: Threshold,
    /// The aggregate slides downstream.
    pub emit: Threshold,
}

/// Records placed on an event-time axis, grouped into fixed-size windows, aggregated and
/// emitted downstream, optionally with a watermark overlay.
#[derive(Clone, Debug, PartialEq)]
pub struct AggregationDiagram {
    name: String,
    terminal: ShotIndex,
    axis: ArrowAxis,
    axis_cue: Threshold,
    ticks: Option<(Ticks, Threshold)>,
    window_size: f64,
    records: Vec<RecordSpec>,
    windows: Vec<WindowCue>,
    watermark_delay: Option<f64>,
}

impl AggregationDiagram {
    /// Start a diagram with the given catalog name and terminal shot.
    pub fn builder(name: impl Into<String>, terminal: u64) -> AggregationBuilder {
        AggregationBuilder {
            name: name.into(),
            terminal: ShotIndex(terminal),
            axis: ArrowAxis {
                from: 0.0,
                to: VIEW_BOX.width,
                y: 300.0,
            },
            axis_cue: Threshold::at(0),
            ticks: None,
            window_size: DEFAULT_WINDOW_SIZE,
            records: Vec::new(),
            windows: Vec::new(),
            watermark_delay: None,
        }
    }

    /// Upper bound of the window containing `event_time`: `ceil(t / size) * size`.
    pub fn window_end(&self, event_time: f64) -> f64 {
        (event_time / self.window_size).ceil() * self.window_size
    }

    fn window_center(&self, end: f64) -> f64 {
        end - self.window_size / 2.0
    }

    fn window_for(&self, event_time: f64) -> Option<&WindowCue> {
        let end = self.window_end(event_time);
        self.windows.iter().find(|w| w.end == end)
    }

    /// Declared records in declaration order.
    pub fn records(&self) -> &[RecordSpec] {
        &self.records
    }

    /// Thresholds driving one record's marker.
    ///
    /// A record joins its window's aggregate only if it arrives no later than the window
    /// aggregates; late records stay circles forever.
    pub fn record_cue(&self, record: &RecordSpec) -> Cue {
        let arrival = Threshold::At(record.appear);
        match self.window_for(record.event_time) {
            Some(w) if arrival <= w.aggregate => Cue {
                appear: arrival,
                transform: w.aggregate,
                emit: w.emit,
            },
            _ => Cue {
                appear: arrival,
                transform: Threshold::Never,
                emit: Threshold::Never,
            },
        }
    }

    /// Number of records folded into the aggregate of the window ending at `window_end`.
    pub fn aggregate_count(&self, window_end: f64) -> usize {
        self.records
            .iter()
            .filter(|r| self.window_end(r.event_time) == window_end)
            .filter(|r| self.record_cue(r).transform != Threshold::Never)
            .count()
    }

    /// Largest event time among records that have arrived by `shot`, or 0.
    pub fn largest_event_time(&self, shot: ShotIndex) -> f64 {
        self.records
            .iter()
            .filter(|r| shot >= r.appear)
            .map(|r| r.event_time)
            .fold(0.0, f64::max)
    }

    /// Watermark position at `shot`: largest event time seen minus the fixed delay.
    pub fn watermark(&self, shot: ShotIndex) -> Option<f64> {
        self.watermark_delay
            .map(|delay| self.largest_event_time(shot) - delay)
    }

    fn record_element(&self, index: usize, record: &RecordSpec, shot: ShotIndex) -> Element {
        let state = self.record_cue(record).at(shot);
        let half = RECORD_SIZE / 2.0;
        let circle_x = record.event_time - half;
        let square_x = self.window_center(self.window_end(record.event_time)) - half;

        let marker = |x: f64, y: f64, corner_radius: f64| Geometry::Rect {
            origin: Point::new(x, y),
            size: Size::new(RECORD_SIZE, RECORD_SIZE),
            corner_radius,
        };
        let (x, radius) = if state.transformed {
            (square_x, 0.0)
        } else {
            (circle_x, RECORD_SIZE)
        };
        let y = RECORD_Y + if state.emitted { EMIT_OFFSET } else { 0.0 };

        Element {
            id: format!("record-{index}"),
            paint: Paint::stroke(RECORD_COLOR, 1.0),
            initial: ElementState::hidden(marker(circle_x, RECORD_Y, RECORD_SIZE)),
            animate: ElementState::visible_if(marker(x, y, radius), state.visible),
            transition: Transition::default(),
        }
    }

    fn label_element(&self, window: &WindowCue, shot: ShotIndex) -> Element {
        let cue = Cue {
            appear: window.aggregate,
            transform: Threshold::Never,
            emit: window.emit,
        };
        let state = cue.at(shot);
        let x = self.window_center(window.end) - 5.0;
        let y = LABEL_Y + if state.emitted { EMIT_OFFSET } else { 0.0 };
        let text = |y: f64| Geometry::Text {
            origin: Point::new(x, y),
            content: self.aggregate_count(window.end).to_string(),
        };

        Element {
            id: format!("aggregate-{}", window.end),
            paint: Paint::text(RECORD_COLOR, LABEL_FONT_SIZE),
            initial: ElementState::hidden(text(LABEL_Y)),
            animate: ElementState::visible_if(text(y), state.visible),
            transition: Transition::default(),
        }
    }
}

impl Scene for AggregationDiagram {
    fn name(&self) -> &str {
        &self.name
    }

    fn terminal_shot(&self) -> ShotIndex {
        self.terminal
    }

    fn render(&self, shot: ShotIndex) -> VisualState {
        let mut elements = self.axis.elements("axis", self.axis_cue.reached(shot));

        for (i, record) in self.records.iter().enumerate() {
            elements.push(self.record_element(i, record, shot));
        }
        for window in &self.windows {
            if window.aggregate != Threshold::Never {
                elements.push(self.label_element(window, shot));
            }
        }

        if let Some(watermark) = self.watermark(shot) {
            let largest = self.largest_event_time(shot);
            let wm = TrackingSegment {
                stroke: WATERMARK_COLOR,
                y: self.axis.y,
            };
            let uncertainty = TrackingSegment {
                stroke: UNCERTAINTY_COLOR,
                y: self.axis.y,
            };
            elements.push(wm.element("watermark", self.axis.from, watermark));
            elements.push(uncertainty.element("uncertainty", watermark, largest));
        }

        // Ticks go last so they sit on top of the axis and segments.
        if let Some((ticks, cue)) = &self.ticks {
            elements.extend(ticks.elements("tick", cue.reached(shot)));
        }

        VisualState {
            scene: self.name.clone(),
            shot,
            view_box: VIEW_BOX,
            elements,
        }
    }
}

/// Builder for [`AggregationDiagram`]. Geometry is validated in [`AggregationBuilder::build`].
#[derive(Clone, Debug)]
pub struct AggregationBuilder {
    name: String,
    terminal: ShotIndex,
    axis: ArrowAxis,
    axis_cue: Threshold,
    ticks: Option<(f64, f64, Threshold)>,
    window_size: f64,
    records: Vec<RecordSpec>,
    windows: Vec<WindowCue>,
    watermark_delay: Option<f64>,
}

impl AggregationBuilder {
    /// Shot at which the event-time axis draws in.
    pub fn timeline_at(mut self, shot: u64) -> Self {
        self.axis_cue = Threshold::at(shot);
        self
    }

    /// Tick marks every `spacing` along the axis, `height` tall, shown from `shot`.
    pub fn ticks(mut self, spacing: f64, height: f64, shot: u64) -> Self {
        self.ticks = Some((spacing, height, Threshold::at(shot)));
        self
    }

    /// Width of each event-time window (100 by default).
    pub fn window_size(mut self, size: f64) -> Self {
        self.window_size = size;
        self
    }

    /// Add a record with the given event time arriving at `shot`.
    pub fn record(mut self, event_time: f64, shot: u64) -> Self {
        self.records.push(RecordSpec {
            event_time,
            appear: ShotIndex(shot),
        });
        self
    }

    /// Aggregate the window ending at `end` at shot `aggregate` and emit it at `emit`.
    pub fn window(mut self, end: f64, aggregate: u64, emit: u64) -> Self {
        self.windows.push(WindowCue {
            end,
            aggregate: Threshold::at(aggregate),
            emit: Threshold::at(emit),
        });
        self
    }

    /// Overlay a watermark trailing the largest event time by `delay`.
    pub fn watermark(mut self, delay: f64) -> Self {
        self.watermark_delay = Some(delay);
        self
    }

    /// Validate and build.
    pub fn build(self) -> DeckResult<AggregationDiagram> {
        let ticks = match self.ticks {
            Some((spacing, height, cue)) => Some((
                Ticks::new(self.axis.from, self.axis.to, self.axis.y, spacing)?
                    .with_height(height),
                cue,
            )),
            None => None,
        };

        if !self.window_size.is_finite() || self.window_size <= 0.0 {
            return Err(DeckError::geometry(format!(
                "{}: window size must be > 0 (got {})",
                self.name, self.window_size
            )));
        }
        for r in &self.records {
            if !r.event_time.is_finite() || r.event_time < 0.0 {
                return Err(DeckError::validation(format!(
                    "{}: record event time must be finite and >= 0 (got {})",
                    self.name, r.event_time
                )));
            }
        }
        for (i, w) in self.windows.iter().enumerate() {
            if w.end <= 0.0 || (w.end / self.window_size).fract() != 0.0 {
                return Err(DeckError::validation(format!(
                    "{}: window end {} is not a positive multiple of {}",
                    self.name, w.end, self.window_size
                )));
            }
            if w.emit < w.aggregate {
                return Err(DeckError::validation(format!(
                    "{}: window {} emits before it aggregates",
                    self.name, w.end
                )));
            }
            if self.windows[..i].iter().any(|o| o.end == w.end) {
                return Err(DeckError::validation(format!(
                    "{}: duplicate window {}",
                    self.name, w.end
                )));
            }
        }
        if let Some(delay) = self.watermark_delay
            && (!delay.is_finite() || delay < 0.0)
        {
            return Err(DeckError::validation(format!(
                "{}: watermark delay must be finite and >= 0 (got {delay})",
                self.name
            )));
        }

        Ok(AggregationDiagram {
            name: self.name,
            terminal: self.terminal,
            axis: self.axis,
            axis_cue: self.axis_cue,
            ticks,
            window_size: self.window_size,
            records: self.records,
            windows: self.windows,
            watermark_delay: self.watermark_delay,
        })
    }
}

#[cfg(test)]
#[path = "../../tests/unit/scene/aggregation.rs"]
mod tests;
