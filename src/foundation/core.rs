pub use kurbo::{Point, Size};

/// Progress within the active scene.
///
/// Shots are never negative; navigation that would move below zero is handled by the
/// controller (it steps back a scene instead).
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize,
    serde::Deserialize,
)]
pub struct ShotIndex(pub u64);

impl ShotIndex {
    /// The first shot of every scene.
    pub const ZERO: Self = Self(0);

    /// Apply a signed delta; `None` when the result would be negative.
    pub fn offset(self, delta: i64) -> Option<Self> {
        let target = i128::from(self.0) + i128::from(delta);
        u64::try_from(target).ok().map(Self)
    }

    /// Previous shot, or `None` at shot 0.
    pub fn prev(self) -> Option<Self> {
        self.0.checked_sub(1).map(Self)
    }
}

impl std::fmt::Display for ShotIndex {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Position of the active scene within the deck (0-based).
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize,
    serde::Deserialize,
)]
pub struct SceneIndex(pub usize);

impl std::fmt::Display for SceneIndex {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
