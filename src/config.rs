//! JSON deck configuration.

use std::{fs::File, io::BufReader, path::Path};

use crate::{
    animation::transition::MotionConfig,
    foundation::{
        color::Color,
        error::{DeckError, DeckResult},
    },
    render::svg::RenderSettings,
    scene::{Scene, catalog},
};

/// Deck-wide settings loaded from a JSON file.
///
/// Every field is optional:
///
/// ```json
/// { "scale": 2.0, "background": "#000000", "motion": { "speed": 5.0 }, "scenes": ["intro"] }
/// ```
///
/// `"background": null` renders on a transparent canvas.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct DeckConfig {
    /// Output pixels per view box unit.
    pub scale: f64,
    /// Canvas fill; `None` is transparent.
    pub background: Option<Color>,
    /// CSS font family for text.
    pub font_family: String,
    /// Transition playback speed.
    pub motion: MotionConfig,
    /// Scene names in presentation order; `None` uses the default order.
    pub scenes: Option<Vec<String>>,
}

impl Default for DeckConfig {
    fn default() -> Self {
        let render = RenderSettings::default();
        Self {
            scale: render.scale,
            background: render.background,
            font_family: render.font_family,
            motion: MotionConfig::default(),
            scenes: None,
        }
    }
}

impl DeckConfig {
    /// Parse a config from any JSON reader.
    pub fn from_reader<R: std::io::Read>(r: R) -> DeckResult<Self> {
        let cfg: Self = serde_json::from_reader(r)
            .map_err(|e| DeckError::validation(format!("parse deck config JSON: {e}")))?;
        cfg.validate()?;
        Ok(cfg)
    }

    /// Parse a config from a JSON file on disk.
    pub fn from_path(path: impl AsRef<Path>) -> DeckResult<Self> {
        let path = path.as_ref();
        let f = File::open(path).map_err(|e| {
            DeckError::validation(format!("open deck config '{}': {e}", path.display()))
        })?;
        Self::from_reader(BufReader::new(f))
    }

    /// Check ranges and scene names.
    pub fn validate(&self) -> DeckResult<()> {
        if !self.scale.is_finite() || self.scale <= 0.0 {
            return Err(DeckError::validation(format!(
                "scale must be finite and > 0 (got {})",
                self.scale
            )));
        }
        self.motion.validate()?;
        if let Some(scenes) = &self.scenes {
            if scenes.is_empty() {
                return Err(DeckError::validation("scenes must not be empty"));
            }
            let known = catalog::scene_names();
            if let Some(unknown) = scenes.iter().find(|s| !known.contains(&s.as_str())) {
                return Err(DeckError::validation(format!(
                    "scenes: unknown scene '{unknown}' (known: {})",
                    known.join(", ")
                )));
            }
        }
        Ok(())
    }

    /// SVG output settings derived from this config.
    pub fn render_settings(&self) -> RenderSettings {
        RenderSettings {
            scale: self.scale,
            background: self.background,
            font_family: self.font_family.clone(),
        }
    }

    /// Build the configured scenes in order.
    pub fn build_deck(&self) -> DeckResult<Vec<Box<dyn Scene>>> {
        match &self.scenes {
            Some(names) => catalog::deck_from_names(names),
            None => catalog::default_deck(),
        }
    }
}

#[cfg(test)]
#[path = "../tests/unit/config.rs"]
mod tests;
