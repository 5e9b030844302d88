use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::animation::clip::ClipMode;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Clip Playback", inline)]
#[serde(default)]
/// Clamp fractions and rate for a book's intrinsic page-turn clips.
pub struct PlaybackOptions {
    /// Fraction of a clip's duration that counts as fully open.
    #[schemars(title = "Open Fraction", range(min = 0.0, max = 1.0))]
    pub click_fraction: f32,
    /// Fraction of a clip's duration a hover preview turns to.
    #[schemars(title = "Hover Fraction", range(min = 0.0, max = 1.0))]
    pub hover_fraction: f32,
    /// Clip playback rate magnitude (applied in both directions).
    pub clip_rate: f32,
}

impl Default for PlaybackOptions {
    fn default() -> Self {
        Self {
            click_fraction: 0.9,
            hover_fraction: 0.2,
            clip_rate: 1.0,
        }
    }
}

impl PlaybackOptions {
    /// Forward clamp fraction for a playback mode.
    #[must_use]
    pub fn fraction(&self, mode: ClipMode) -> f32 {
        match mode {
            ClipMode::Click => self.click_fraction,
            ClipMode::Hover => self.hover_fraction,
        }
    }
}
