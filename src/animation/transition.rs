use crate::{
    animation::ease::Ease,
    foundation::core::{Point, Size},
    foundation::error::{DeckError, DeckResult},
};

/// Interpolation contract for animated attribute types.
pub trait Lerp: Sized {
    /// Interpolate from `a` to `b` with normalized factor `t` in `[0, 1]`.
    fn lerp(a: &Self, b: &Self, t: f64) -> Self;
}

impl Lerp for f64 {
    fn lerp(a: &Self, b: &Self, t: f64) -> Self {
        a + (b - a) * t
    }
}

impl Lerp for Point {
    fn lerp(a: &Self, b: &Self, t: f64) -> Self {
        a.lerp(*b, t)
    }
}

impl Lerp for Size {
    fn lerp(a: &Self, b: &Self, t: f64) -> Self {
        Size::new(
            <f64 as Lerp>::lerp(&a.width, &b.width, t),
            <f64 as Lerp>::lerp(&a.height, &b.height, t),
        )
    }
}

/// Timing of one element's move between two states.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
pub struct Transition {
    /// Seconds from start (after delay) to settled.
    pub duration_s: f64,
    /// Seconds to wait before starting.
    pub delay_s: f64,
    /// Progress curve.
    pub ease: Ease,
}

impl Default for Transition {
    fn default() -> Self {
        Self {
            duration_s: 0.3,
            delay_s: 0.0,
            ease: Ease::OutCubic,
        }
    }
}

impl Transition {
    /// Transition of `duration_s` seconds with no delay.
    pub fn over(duration_s: f64) -> Self {
        Self {
            duration_s,
            ..Self::default()
        }
    }

    /// Same transition, started `delay_s` seconds later.
    pub fn delayed(self, delay_s: f64) -> Self {
        Self { delay_s, ..self }
    }

    /// Eased progress in `[0, 1]` after `elapsed_s` wall seconds at the given speed.
    ///
    /// A deck-wide [`MotionConfig::ease`] replaces the transition's own curve.
    pub fn progress(self, elapsed_s: f64, motion: &MotionConfig) -> f64 {
        let ease = motion.ease.unwrap_or(self.ease);
        let delay = self.delay_s / motion.speed;
        let duration = self.duration_s / motion.speed;
        let local = elapsed_s - delay;
        if local <= 0.0 {
            return ease.apply(0.0);
        }
        if duration <= 0.0 {
            return 1.0;
        }
        ease.apply(local / duration)
    }

    /// Wall seconds until this transition settles at the given speed.
    pub fn settle_secs(self, motion: &MotionConfig) -> f64 {
        (self.delay_s + self.duration_s) / motion.speed
    }
}

/// Playback settings handed to the rendering collaborator at startup.
///
/// `speed` divides every delay and duration: `5.0` is the fast development mode.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct MotionConfig {
    /// Playback speed multiplier, finite and > 0.
    pub speed: f64,
    /// Curve used for every transition instead of each element's own.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ease: Option<Ease>,
}

impl Default for MotionConfig {
    fn default() -> Self {
        Self {
            speed: 1.0,
            ease: None,
        }
    }
}

impl MotionConfig {
    /// Speed used while iterating on the deck.
    pub const DEV_SPEED: f64 = 5.0;

    /// Build a validated config.
    pub fn new(speed: f64) -> DeckResult<Self> {
        let cfg = Self {
            speed,
            ..Self::default()
        };
        cfg.validate()?;
        Ok(cfg)
    }

    /// Development preset (5x faster).
    pub fn dev() -> Self {
        Self {
            speed: Self::DEV_SPEED,
            ..Self::default()
        }
    }

    /// Reject non-finite or non-positive speeds.
    pub fn validate(&self) -> DeckResult<()> {
        if !self.speed.is_finite() || self.speed <= 0.0 {
            return Err(DeckError::validation(format!(
                "motion.speed must be finite and > 0 (got {})",
                self.speed
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/transition.rs"]
mod tests;
