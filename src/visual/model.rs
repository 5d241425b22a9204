use crate::{
    animation::transition::{Lerp, Transition},
    foundation::color::Color,
    foundation::core::{Point, ShotIndex, Size},
    foundation::error::{DeckError, DeckResult},
};

/// Shape of a visual element in scene (view box) coordinates.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Geometry {
    /// Straight segment.
    Line {
        /// Start point.
        from: Point,
        /// End point.
        to: Point,
    },
    /// Axis-aligned rectangle; a corner radius of half the side turns it into a circle.
    Rect {
        /// Top-left corner.
        origin: Point,
        /// Width and height.
        size: Size,
        /// `rx`/`ry` in SVG terms.
        corner_radius: f64,
    },
    /// Open polyline (arrowheads).
    Polyline {
        /// Vertices in drawing order.
        points: Vec<Point>,
    },
    /// Single line of text, `origin` is the left baseline point.
    Text {
        /// Baseline start.
        origin: Point,
        /// Text content.
        content: String,
    },
}

impl Lerp for Geometry {
    fn lerp(a: &Self, b: &Self, t: f64) -> Self {
        match (a, b) {
            (Self::Line { from: f0, to: t0 }, Self::Line { from: f1, to: t1 }) => Self::Line {
                from: <Point as Lerp>::lerp(f0, f1, t),
                to: <Point as Lerp>::lerp(t0, t1, t),
            },
            (
                Self::Rect {
                    origin: o0,
                    size: s0,
                    corner_radius: r0,
                },
                Self::Rect {
                    origin: o1,
                    size: s1,
                    corner_radius: r1,
                },
            ) => Self::Rect {
                origin: <Point as Lerp>::lerp(o0, o1, t),
                size: <Size as Lerp>::lerp(s0, s1, t),
                corner_radius: <f64 as Lerp>::lerp(r0, r1, t),
            },
            (Self::Polyline { points: p0 }, Self::Polyline { points: p1 })
                if p0.len() == p1.len() =>
            {
                Self::Polyline {
                    points: p0
                        .iter()
                        .zip(p1)
                        .map(|(a, b)| <Point as Lerp>::lerp(a, b, t))
                        .collect(),
                }
            }
            (Self::Text { origin: o0, .. }, Self::Text { origin: o1, content }) => Self::Text {
                origin: <Point as Lerp>::lerp(o0, o1, t),
                content: content.clone(),
            },
            // Shapes of different kinds cannot be blended.
            _ => b.clone(),
        }
    }
}

/// Animatable attributes of one element at one moment.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct ElementState {
    /// Shape and position.
    pub geometry: Geometry,
    /// Opacity in `[0, 1]`.
    pub opacity: f64,
    /// Drawn fraction of the stroke in `[0, 1]`.
    pub path_length: f64,
}

impl ElementState {
    /// Fully visible, fully drawn state.
    pub fn shown(geometry: Geometry) -> Self {
        Self {
            geometry,
            opacity: 1.0,
            path_length: 1.0,
        }
    }

    /// Invisible state with the stroke fully drawn.
    pub fn hidden(geometry: Geometry) -> Self {
        Self {
            opacity: 0.0,
            ..Self::shown(geometry)
        }
    }

    /// Shown iff `visible`.
    pub fn visible_if(geometry: Geometry, visible: bool) -> Self {
        if visible {
            Self::shown(geometry)
        } else {
            Self::hidden(geometry)
        }
    }

    /// Replace the drawn stroke fraction.
    pub fn with_path_length(self, path_length: f64) -> Self {
        Self {
            path_length,
            ..self
        }
    }

    /// Whether this state contributes any pixels.
    pub fn is_visible(&self) -> bool {
        self.opacity > 0.0
    }
}

impl Lerp for ElementState {
    fn lerp(a: &Self, b: &Self, t: f64) -> Self {
        Self {
            geometry: Geometry::lerp(&a.geometry, &b.geometry, t),
            opacity: <f64 as Lerp>::lerp(&a.opacity, &b.opacity, t).clamp(0.0, 1.0),
            path_length: <f64 as Lerp>::lerp(&a.path_length, &b.path_length, t).clamp(0.0, 1.0),
        }
    }
}

/// Static styling of an element. Never animated.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct Paint {
    /// Stroke color, if stroked.
    pub stroke: Option<Color>,
    /// Stroke width in view box units.
    pub stroke_width: f64,
    /// Fill color, if filled.
    pub fill: Option<Color>,
    /// Font size for text elements.
    pub font_size: f64,
}

impl Paint {
    /// Stroke-only paint.
    pub fn stroke(color: Color, width: f64) -> Self {
        Self {
            stroke: Some(color),
            stroke_width: width,
            fill: None,
            font_size: 16.0,
        }
    }

    /// Filled text paint.
    pub fn text(color: Color, font_size: f64) -> Self {
        Self {
            stroke: None,
            stroke_width: 0.0,
            fill: Some(color),
            font_size,
        }
    }
}

/// Declarative description of one element: where it starts when mounted, where it should
/// end up for the current shot, and how to get there.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct Element {
    /// Identifier, stable across shots of one scene.
    pub id: String,
    /// Static styling.
    pub paint: Paint,
    /// State on first mount.
    pub initial: ElementState,
    /// Target state for the current shot.
    pub animate: ElementState,
    /// Timing of the move to `animate`.
    pub transition: Transition,
}

/// Everything a scene shows for one shot, in painter's order.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct VisualState {
    /// Scene name.
    pub scene: String,
    /// Shot this state was rendered for.
    pub shot: ShotIndex,
    /// Logical canvas of the scene.
    pub view_box: Size,
    /// Elements back to front.
    pub elements: Vec<Element>,
}

impl VisualState {
    /// Look up an element by id.
    pub fn element(&self, id: &str) -> Option<&Element> {
        self.elements.iter().find(|e| e.id == id)
    }

    /// Ids of elements whose target state is visible.
    pub fn visible_ids(&self) -> Vec<&str> {
        self.elements
            .iter()
            .filter(|e| e.animate.is_visible())
            .map(|e| e.id.as_str())
            .collect()
    }

    /// Pretty-printed JSON dump, for inspecting a shot outside of SVG.
    pub fn to_json(&self) -> DeckResult<String> {
        serde_json::to_string_pretty(self).map_err(|e| {
            DeckError::serde(format!("serialize visual state '{}': {e}", self.scene))
        })
    }
}

#[cfg(test)]
#[path = "../../tests/unit/visual/model.rs"]
mod tests;
