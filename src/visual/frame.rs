use std::collections::HashMap;

use crate::{
    animation::transition::{Lerp, MotionConfig},
    foundation::core::Size,
    visual::model::{ElementState, Paint, VisualState},
};

/// One element with concrete attribute values.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct FrameNode {
    /// Element id.
    pub id: String,
    /// Static styling.
    pub paint: Paint,
    /// Resolved attributes.
    pub state: ElementState,
}

/// A visual state resolved at a moment in time, ready for serialization.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct Frame {
    /// Logical canvas.
    pub view_box: Size,
    /// Nodes back to front.
    pub nodes: Vec<FrameNode>,
}

impl Frame {
    /// Every element at its target state.
    pub fn settled(state: &VisualState) -> Self {
        Self {
            view_box: state.view_box,
            nodes: state
                .elements
                .iter()
                .map(|el| FrameNode {
                    id: el.id.clone(),
                    paint: el.paint.clone(),
                    state: el.animate.clone(),
                })
                .collect(),
        }
    }

    /// Resolve `next` at `elapsed_s` seconds after the shot change.
    ///
    /// Elements already present in `prev` move from their previous target; elements new to
    /// the scene (or every element when `prev` is `None`) start from their `initial` state.
    pub fn sample(
        prev: Option<&VisualState>,
        next: &VisualState,
        elapsed_s: f64,
        motion: &MotionConfig,
    ) -> Self {
        let previous: HashMap<&str, &ElementState> = prev
            .map(|p| {
                p.elements
                    .iter()
                    .map(|el| (el.id.as_str(), &el.animate))
                    .collect()
            })
            .unwrap_or_default();

        let nodes = next
            .elements
            .iter()
            .map(|el| {
                let from = previous.get(el.id.as_str()).copied().unwrap_or(&el.initial);
                let t = el.transition.progress(elapsed_s, motion);
                let state = if t >= 1.0 {
                    el.animate.clone()
                } else {
                    ElementState::lerp(from, &el.animate, t)
                };
                FrameNode {
                    id: el.id.clone(),
                    paint: el.paint.clone(),
                    state,
                }
            })
            .collect();

        Self {
            view_box: next.view_box,
            nodes,
        }
    }

    /// Wall seconds until every transition in `next` has settled.
    pub fn transition_secs(next: &VisualState, motion: &MotionConfig) -> f64 {
        next.elements
            .iter()
            .map(|el| el.transition.settle_secs(motion))
            .fold(0.0, f64::max)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/visual/frame.rs"]
mod tests;
