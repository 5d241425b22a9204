//! Shotdeck is a shot-by-shot slide deck about event-time windows, late records and
//! watermarks.
//!
//! A deck is an ordered list of [`Scene`]s. Each scene renders a pure [`VisualState`] for a
//! shot index; the [`Presentation`] controller owns the `(scene, shot)` position and hands
//! over to the next scene when the active one reaches its terminal shot.
//!
//! - Build scenes from the [`catalog`] or a [`DeckConfig`]
//! - Drive a [`Presentation`] with [`InputAdapter`] commands
//! - Resolve a [`Frame`] and serialize it with [`to_svg`], or rasterize with [`Rasterizer`]
#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod foundation;

pub(crate) mod animation;
pub(crate) mod config;
pub(crate) mod deck;
pub(crate) mod render;
pub(crate) mod scene;
pub(crate) mod visual;

pub use crate::foundation::color::Color;
pub use crate::foundation::core::{Point, SceneIndex, ShotIndex, Size};
pub use crate::foundation::error::{DeckError, DeckResult};

pub use crate::animation::ease::Ease;
pub use crate::animation::transition::{Lerp, MotionConfig, Transition};
pub use crate::config::DeckConfig;
pub use crate::deck::controller::{NavOutcome, Presentation};
pub use crate::deck::input::{InputAdapter, Key, NavCommand, command_for_key_name};
pub use crate::render::raster::{FrameRgba, Rasterizer, save_png};
pub use crate::render::svg::{RenderSettings, to_svg};
pub use crate::scene::aggregation::{
    AggregationBuilder, AggregationDiagram, RECORD_SIZE, RecordSpec, WindowCue,
};
pub use crate::scene::bullet::BulletSlide;
pub use crate::scene::cue::{Cue, CueState, Threshold};
pub use crate::scene::primitives::{ArrowAxis, Ticks, TrackingSegment};
pub use crate::scene::{CompletionSignal, Scene};
pub use crate::visual::frame::{Frame, FrameNode};
pub use crate::visual::model::{Element, ElementState, Geometry, Paint, VisualState};

/// The hand-authored scenes and their default order.
pub mod catalog {
    pub use crate::scene::catalog::{
        DEFAULT_ORDER, FUNDAMENTAL_TRADEOFF, INTRO, OUT_OF_ORDER, OUT_OF_ORDER_SUMMARY,
        OUT_OF_ORDER_WITH_WATERMARK, deck_from_names, default_deck, fundamental_tradeoff, intro,
        out_of_order, out_of_order_summary, out_of_order_with_watermark, scene_by_name,
        scene_names,
    };
}
