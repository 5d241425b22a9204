//! The hand-authored scenes of the talk and their default order.

use crate::{
    foundation::error::{DeckError, DeckResult},
    scene::{Scene, aggregation::AggregationDiagram, bullet::BulletSlide},
};

/// Scene names in default presentation order.
pub const DEFAULT_ORDER: [&str; 5] = [
    INTRO,
    OUT_OF_ORDER,
    OUT_OF_ORDER_SUMMARY,
    OUT_OF_ORDER_WITH_WATERMARK,
    FUNDAMENTAL_TRADEOFF,
];

/// Title slide.
pub const INTRO: &str = "intro";
/// Windows, aggregation and a late record without a watermark.
pub const OUT_OF_ORDER: &str = "out_of_order";
/// Recap of the out-of-order problem.
pub const OUT_OF_ORDER_SUMMARY: &str = "out_of_order_summary";
/// Same diagram driven by a watermark.
pub const OUT_OF_ORDER_WITH_WATERMARK: &str = "out_of_order_with_watermark";
/// Latency versus completeness.
pub const FUNDAMENTAL_TRADEOFF: &str = "fundamental_tradeoff";

/// Every scene the catalog can build.
pub fn scene_names() -> &'static [&'static str] {
    &DEFAULT_ORDER
}

/// Build one scene by catalog name.
pub fn scene_by_name(name: &str) -> DeckResult<Box<dyn Scene>> {
    let scene: Box<dyn Scene> = match name {
        INTRO => Box::new(intro()),
        OUT_OF_ORDER => Box::new(out_of_order()?),
        OUT_OF_ORDER_SUMMARY => Box::new(out_of_order_summary()),
        OUT_OF_ORDER_WITH_WATERMARK => Box::new(out_of_order_with_watermark()?),
        FUNDAMENTAL_TRADEOFF => Box::new(fundamental_tradeoff()),
        other => {
            return Err(DeckError::validation(format!(
                "unknown scene '{other}' (known: {})",
                DEFAULT_ORDER.join(", ")
            )));
        }
    };
    Ok(scene)
}

/// Build scenes in the given order.
pub fn deck_from_names<S: AsRef<str>>(names: &[S]) -> DeckResult<Vec<Box<dyn Scene>>> {
    names.iter().map(|n| scene_by_name(n.as_ref())).collect()
}

/// The default deck.
pub fn default_deck() -> DeckResult<Vec<Box<dyn Scene>>> {
    deck_from_names(&DEFAULT_ORDER)
}

/// Title slide.
pub fn intro() -> BulletSlide {
    BulletSlide::new(
        INTRO,
        "Correct and low-latency real-time streaming joins",
        [
            "I'm Neil Ramaswamy. I work at Databricks.",
            "I work on our streaming engine's runtime, mostly on performance",
            "Today: basics of streaming, all the way up to how we implement streaming joins",
        ],
    )
}

/// Ordered records are windowed, aggregated and emitted; then a late record arrives for a
/// window that was already emitted.
pub fn out_of_order() -> DeckResult<AggregationDiagram> {
    const TIMELINE: u64 = 0;
    const TICKS: u64 = 1;
    const CIRCLES_100_1: u64 = 2;
    const CIRCLES_100_2: u64 = 3;
    const CIRCLES_200_1: u64 = 4;
    const SQUARE_100: u64 = 5;
    const EMIT_100: u64 = 6;
    const CIRCLES_200_2: u64 = 7;
    const CIRCLES_300_1: u64 = 8;
    const SQUARE_200: u64 = 9;
    const EMIT_200: u64 = 10;
    const OOO_100: u64 = 11;
    const NUM_SHOTS: u64 = 12;

    AggregationDiagram::builder(OUT_OF_ORDER, NUM_SHOTS)
        .timeline_at(TIMELINE)
        .ticks(100.0, 20.0, TICKS)
        .record(125.0, CIRCLES_100_1)
        .record(175.0, CIRCLES_100_2)
        .record(230.0, CIRCLES_200_1)
        .record(270.0, CIRCLES_200_2)
        .record(420.0, CIRCLES_300_1)
        .record(160.0, OOO_100)
        .window(200.0, SQUARE_100, EMIT_100)
        .window(300.0, SQUARE_200, EMIT_200)
        .build()
}

/// Recap slide after the out-of-order diagram.
pub fn out_of_order_summary() -> BulletSlide {
    BulletSlide::new(
        OUT_OF_ORDER_SUMMARY,
        "Recap",
        [
            "Streaming engines are SQL engines that deal with out-of-order events",
            "To deal with out-of-orderness, they keep state (i.e. buffers of records) and at some point compute results",
            "Our goal: determine when we should compute results, to emit 1 definitive aggregate",
        ],
    )
}

/// The out-of-order diagram with a watermark deciding when windows close.
pub fn out_of_order_with_watermark() -> DeckResult<AggregationDiagram> {
    const TIMELINE: u64 = 0;
    const TICKS: u64 = 1;
    const REC_100_1: u64 = 2;
    const REC_100_2: u64 = 3;
    const REC_200_1: u64 = 4;
    const REC_200_2: u64 = 5;
    const REC_300_1: u64 = 6;
    // Watermark is now 320 - 100 = 220.
    const SQUARE_100: u64 = 7;
    const EMIT_100: u64 = 8;
    // Out-of-order record at 250, still ahead of the watermark.
    const OOO_200: u64 = 9;
    const REC_400_1: u64 = 10;
    // Watermark is now 420 - 100 = 320.
    const SQUARE_200: u64 = 11;
    const EMIT_200: u64 = 12;
    const NUM_SHOTS: u64 = 13;
    const WATERMARK_DELAY: f64 = 100.0;

    AggregationDiagram::builder(OUT_OF_ORDER_WITH_WATERMARK, NUM_SHOTS)
        .timeline_at(TIMELINE)
        .ticks(100.0, 10.0, TICKS)
        .record(125.0, REC_100_1)
        .record(175.0, REC_100_2)
        .record(230.0, REC_200_1)
        .record(270.0, REC_200_2)
        .record(320.0, REC_300_1)
        .record(250.0, OOO_200)
        .record(420.0, REC_400_1)
        .window(200.0, SQUARE_100, EMIT_100)
        .window(300.0, SQUARE_200, EMIT_200)
        .watermark(WATERMARK_DELAY)
        .build()
}

/// Latency versus completeness.
pub fn fundamental_tradeoff() -> BulletSlide {
    BulletSlide::new(
        FUNDAMENTAL_TRADEOFF,
        "The Fundamental Tradeoff of Streaming Systems",
        [
            "Emitting immediately is low latency, but low completeness",
            "Waiting longer is high latency, but high completeness",
            "Our choice of delay, from the delay distribution, configures this tradeoff",
        ],
    )
}

#[cfg(test)]
#[path = "../../tests/unit/scene/catalog.rs"]
mod tests;
