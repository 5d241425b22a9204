use crate::foundation::core::ShotIndex;

/// Shot at which an element enters a state, or never.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize)]
pub enum Threshold {
    /// Active from this shot on.
    At(ShotIndex),
    /// Never active.
    Never,
}

impl Threshold {
    /// Shorthand for `Threshold::At(ShotIndex(shot))`.
    pub const fn at(shot: u64) -> Self {
        Self::At(ShotIndex(shot))
    }

    /// `shot >= threshold`. Monotonic in `shot` by construction.
    pub fn reached(self, shot: ShotIndex) -> bool {
        match self {
            Self::At(t) => shot >= t,
            Self::Never => false,
        }
    }
}

/// Appear / transform / emit thresholds of one threshold-driven element.
///
/// Every visual element of a diagram is derived from a `Cue`: it becomes visible at
/// `appear`, switches to its transformed shape at `transform`, and moves downstream at
/// `emit`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize)]
pub struct Cue {
    /// Element becomes visible.
    pub appear: Threshold,
    /// Element switches to its transformed shape or position.
    pub transform: Threshold,
    /// Element slides downstream.
    pub emit: Threshold,
}

/// Which of a cue's thresholds have been reached at a shot.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CueState {
    /// `appear` reached.
    pub visible: bool,
    /// `transform` reached.
    pub transformed: bool,
    /// `emit` reached.
    pub emitted: bool,
}

impl Cue {
    /// Cue that only ever appears.
    pub const fn appear_at(shot: u64) -> Self {
        Self {
            appear: Threshold::at(shot),
            transform: Threshold::Never,
            emit: Threshold::Never,
        }
    }

    /// Evaluate the step function at `shot`.
    pub fn at(&self, shot: ShotIndex) -> CueState {
        CueState {
            visible: self.appear.reached(shot),
            transformed: self.transform.reached(shot),
            emitted: self.emit.reached(shot),
        }
    }
}
