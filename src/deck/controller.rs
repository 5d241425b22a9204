use crate::{
    foundation::core::{SceneIndex, ShotIndex},
    foundation::error::{DeckError, DeckResult},
    scene::{CompletionSignal, Scene},
    visual::model::VisualState,
};

/// What a navigation call did.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NavOutcome {
    /// Stayed in the same scene; now at `shot`.
    Shot {
        /// Active scene.
        scene: SceneIndex,
        /// New shot.
        shot: ShotIndex,
    },
    /// Moved to another scene at shot 0.
    SceneChanged {
        /// Scene that was active before.
        from: SceneIndex,
        /// Scene that is active now.
        to: SceneIndex,
    },
    /// The last scene completed; nothing further to transition to.
    PresentationOver {
        /// Last scene.
        scene: SceneIndex,
        /// Shot the presentation rests on.
        shot: ShotIndex,
    },
}

/// Owns the scene list and the `(scene, shot)` position.
///
/// Every mutation re-renders the active scene's completion check, so a scene that reaches
/// its terminal shot hands over to the next scene within the same call.
pub struct Presentation {
    scenes: Vec<Box<dyn Scene>>,
    scene_index: SceneIndex,
    shot_index: ShotIndex,
    completion: CompletionSignal,
}

impl std::fmt::Debug for Presentation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Presentation")
            .field("scenes", &self.scene_names())
            .field("scene_index", &self.scene_index)
            .field("shot_index", &self.shot_index)
            .finish()
    }
}

impl Presentation {
    /// Start at the first scene, shot 0.
    pub fn new(scenes: Vec<Box<dyn Scene>>) -> DeckResult<Self> {
        let Some(first) = scenes.first() else {
            return Err(DeckError::validation("presentation needs at least one scene"));
        };
        let completion = CompletionSignal::new(first.terminal_shot());
        let mut presentation = Self {
            scenes,
            scene_index: SceneIndex(0),
            shot_index: ShotIndex::ZERO,
            completion,
        };
        presentation.settle();
        Ok(presentation)
    }

    /// Current `(scene, shot)`.
    pub fn position(&self) -> (SceneIndex, ShotIndex) {
        (self.scene_index, self.shot_index)
    }

    /// Number of scenes in the deck.
    pub fn scene_count(&self) -> usize {
        self.scenes.len()
    }

    /// Scene names in deck order.
    pub fn scene_names(&self) -> Vec<&str> {
        self.scenes.iter().map(|s| s.name()).collect()
    }

    /// The active scene.
    pub fn current_scene(&self) -> &dyn Scene {
        self.scenes[self.scene_index.0].as_ref()
    }

    /// Whether the active scene is the last one.
    pub fn is_last_scene(&self) -> bool {
        self.scene_index.0 + 1 == self.scenes.len()
    }

    /// Visual state of the active scene at the current shot.
    #[tracing::instrument(skip(self), fields(scene = %self.scene_index, shot = %self.shot_index))]
    pub fn render(&self) -> VisualState {
        self.current_scene().render(self.shot_index)
    }

    /// Move `delta` shots; stepping below shot 0 goes back one scene (never before the
    /// first) and resets the shot to 0.
    #[tracing::instrument(skip(self))]
    pub fn advance(&mut self, delta: i64) -> NavOutcome {
        self.change_shot_index(self.shot_index.offset(delta))
    }

    /// Set the shot directly from numeric entry. No upper clamp; negative values behave
    /// like stepping back past shot 0.
    #[tracing::instrument(skip(self))]
    pub fn jump_to(&mut self, index: i64) -> NavOutcome {
        self.change_shot_index(u64::try_from(index).ok().map(ShotIndex))
    }

    /// Completion callback of the active scene.
    pub fn on_scene_complete(&mut self) -> NavOutcome {
        if self.is_last_scene() {
            tracing::info!(
                scene = %self.scene_index,
                shot = %self.shot_index,
                "presentation is over"
            );
            return NavOutcome::PresentationOver {
                scene: self.scene_index,
                shot: self.shot_index,
            };
        }

        let from = self.scene_index;
        self.enter_scene(SceneIndex(from.0 + 1));
        tracing::debug!(%from, to = %self.scene_index, "scene complete");
        // A scene with zero shots completes on entry and may chain to the end of the deck.
        match self.settle() {
            over @ NavOutcome::PresentationOver { .. } => over,
            _ => NavOutcome::SceneChanged {
                from,
                to: self.scene_index,
            },
        }
    }

    fn change_shot_index(&mut self, target: Option<ShotIndex>) -> NavOutcome {
        match target {
            Some(shot) => {
                self.shot_index = shot;
                self.settle()
            }
            None => {
                let from = self.scene_index;
                let to = SceneIndex(from.0.saturating_sub(1));
                if to != from {
                    self.enter_scene(to);
                    tracing::debug!(%from, %to, "stepped back a scene");
                    self.settle();
                    NavOutcome::SceneChanged { from, to }
                } else {
                    self.shot_index = ShotIndex::ZERO;
                    self.settle()
                }
            }
        }
    }

    fn enter_scene(&mut self, index: SceneIndex) {
        self.scene_index = index;
        self.shot_index = ShotIndex::ZERO;
        self.completion = CompletionSignal::new(self.current_scene().terminal_shot());
    }

    // Runs the active scene's completion check for the current shot.
    fn settle(&mut self) -> NavOutcome {
        if self.completion.observe(self.shot_index) {
            return self.on_scene_complete();
        }
        NavOutcome::Shot {
            scene: self.scene_index,
            shot: self.shot_index,
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/deck/controller.rs"]
mod tests;
