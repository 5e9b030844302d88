//! Centralized shelf options with TOML preset support.
//!
//! Every tunable constant of the shelf (orbit paths, timeline durations,
//! clip clamp fractions, scroll recovery, camera) is consolidated here.
//! Options serialize to/from TOML so a page can ship a preset next to its
//! book manifest.

mod camera;
mod orbit;
mod playback;
mod scroll;
mod timeline;

use std::path::Path;

pub use camera::CameraOptions;
pub use orbit::{OrbitOptions, OrbitPath};
pub use playback::PlaybackOptions;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
pub use scroll::ScrollOptions;
pub use timeline::TimelineOptions;

use crate::error::FolioError;

/// Top-level options container. All sub-structs use `#[serde(default)]` so
/// partial TOML files (e.g. only overriding `[scroll]`) work correctly.
#[derive(
    Debug, Clone, Serialize, Deserialize, PartialEq, Default, JsonSchema,
)]
#[serde(default)]
pub struct Options {
    /// Orbital placement paths.
    pub orbit: OrbitOptions,
    /// Open/close timeline layout.
    pub timeline: TimelineOptions,
    /// Clip clamp fractions.
    pub playback: PlaybackOptions,
    /// Scroll-reversal recovery.
    pub scroll: ScrollOptions,
    /// Camera projection and coupling.
    pub camera: CameraOptions,
}

impl Options {
    /// Generate JSON Schema describing the options.
    #[must_use]
    pub fn json_schema() -> schemars::Schema {
        schemars::schema_for!(Options)
    }

    /// Parse options from a TOML string. Missing fields use defaults.
    pub fn from_toml(content: &str) -> Result<Self, FolioError> {
        toml::from_str(content)
            .map_err(|e| FolioError::OptionsParse(e.to_string()))
    }

    /// Load options from a TOML file. Missing fields use defaults.
    pub fn load(path: &Path) -> Result<Self, FolioError> {
        let content = std::fs::read_to_string(path).map_err(FolioError::Io)?;
        Self::from_toml(&content)
    }

    /// Save options to a TOML file (pretty-printed).
    pub fn save(&self, path: &Path) -> Result<(), FolioError> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| FolioError::OptionsParse(e.to_string()))?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(FolioError::Io)?;
        }
        std::fs::write(path, content).map_err(FolioError::Io)
    }
}
