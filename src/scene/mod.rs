use crate::{foundation::core::ShotIndex, visual::model::VisualState};

pub(crate) mod aggregation;
pub(crate) mod bullet;
pub(crate) mod catalog;
pub(crate) mod cue;
pub(crate) mod primitives;

/// One self-contained segment of the presentation.
///
/// `render` must be a pure function of `shot` and the scene's constants. Shots past
/// [`Scene::terminal_shot`] render the terminal visual state.
pub trait Scene: Send + Sync {
    /// Catalog name.
    fn name(&self) -> &str;

    /// Shot count `N`; reaching shot `N` completes the scene.
    fn terminal_shot(&self) -> ShotIndex;

    /// Visual description for `shot`.
    fn render(&self, shot: ShotIndex) -> VisualState;
}

/// Per-scene-instance completion detector.
///
/// Fires once each time the observed shot crosses onto the terminal shot. Re-observing the
/// terminal shot without leaving it does not fire again.
#[derive(Clone, Debug)]
pub struct CompletionSignal {
    terminal: ShotIndex,
    last: Option<ShotIndex>,
}

impl CompletionSignal {
    /// Fresh detector for a scene with the given terminal shot.
    pub fn new(terminal: ShotIndex) -> Self {
        Self {
            terminal,
            last: None,
        }
    }

    /// Record a rendered shot; `true` when this render completes the scene.
    pub fn observe(&mut self, shot: ShotIndex) -> bool {
        let fire = shot == self.terminal && self.last != Some(self.terminal);
        self.last = Some(shot);
        fire
    }
}
