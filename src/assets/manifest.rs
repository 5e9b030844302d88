//! TOML book manifest and a loader that resolves ids against it.
//!
//! ```toml
//! [[book]]
//! id = "books/atlas.glb"
//! name = "Atlas"
//! position = [0.0, 0.0, 0.0]
//! rotation = [0.0, 0.0, 0.0]   # degrees
//!
//! [[book.clips]]
//! name = "PageTurn"
//! duration = 2.0
//!
//! [[book.surfaces]]
//! offset = [0.0, 0.2, 0.0]
//! radius = 0.35
//! ```

use std::path::Path;

use futures::future::{self, FutureExt, LocalBoxFuture};
use glam::Vec3;
use serde::{Deserialize, Serialize};

use super::{AssetLoader, ClipInfo, LoadedBook};
use crate::error::FolioError;
use crate::input::ClickSurface;
use crate::scene::Transform;

const BUILTIN: &str = include_str!("../../assets/books.toml");

/// Radius of the surface a book gets when its entry lists none.
const DEFAULT_SURFACE_RADIUS: f32 = 0.35;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
struct ClipEntry {
    name: String,
    duration: f32,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
struct SurfaceEntry {
    #[serde(default)]
    offset: [f32; 3],
    radius: f32,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
struct BookEntry {
    id: String,
    #[serde(default)]
    name: String,
    #[serde(default)]
    position: [f32; 3],
    #[serde(default)]
    rotation: [f32; 3],
    #[serde(default)]
    clips: Vec<ClipEntry>,
    #[serde(default = "default_surfaces")]
    surfaces: Vec<SurfaceEntry>,
}

fn default_surfaces() -> Vec<SurfaceEntry> {
    vec![SurfaceEntry {
        offset: [0.0; 3],
        radius: DEFAULT_SURFACE_RADIUS,
    }]
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
struct Manifest {
    #[serde(default, rename = "book")]
    books: Vec<BookEntry>,
}

impl BookEntry {
    fn to_loaded(&self) -> LoadedBook {
        let rotation = Vec3::from_array(self.rotation.map(f32::to_radians));
        LoadedBook {
            id: self.id.clone(),
            name: if self.name.is_empty() {
                self.id.clone()
            } else {
                self.name.clone()
            },
            transform: Transform::new(Vec3::from_array(self.position), rotation),
            clips: self
                .clips
                .iter()
                .map(|c| ClipInfo {
                    name: c.name.clone(),
                    duration: c.duration,
                })
                .collect(),
            surfaces: self
                .surfaces
                .iter()
                .map(|s| ClickSurface {
                    offset: Vec3::from_array(s.offset),
                    radius: s.radius,
                })
                .collect(),
        }
    }
}

/// Resolves book ids against a parsed manifest.
#[derive(Debug, Clone, Default)]
pub struct ManifestLoader {
    manifest: Manifest,
}

impl ManifestLoader {
    /// Parse a manifest from a TOML string.
    pub fn from_toml(content: &str) -> Result<Self, FolioError> {
        let manifest: Manifest = toml::from_str(content)
            .map_err(|e| FolioError::ManifestParse(e.to_string()))?;
        for book in &manifest.books {
            if let Some(clip) = book.clips.iter().find(|c| c.duration < 0.0) {
                return Err(FolioError::ManifestParse(format!(
                    "book '{}': clip '{}' has a negative duration",
                    book.id, clip.name
                )));
            }
        }
        Ok(Self { manifest })
    }

    /// Load a manifest file.
    pub fn load(path: &Path) -> Result<Self, FolioError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml(&content)
    }

    /// The manifest shipped with the crate.
    pub fn builtin() -> Result<Self, FolioError> {
        Self::from_toml(BUILTIN)
    }

    /// Ids in manifest order.
    pub fn ids(&self) -> Vec<String> {
        self.manifest.books.iter().map(|b| b.id.clone()).collect()
    }

    /// Resolve one id without going through the async loader.
    pub fn resolve(&self, id: &str) -> Result<LoadedBook, FolioError> {
        self.manifest
            .books
            .iter()
            .find(|b| b.id == id)
            .map(BookEntry::to_loaded)
            .ok_or_else(|| FolioError::asset_load(id, "not in manifest"))
    }
}

impl AssetLoader for ManifestLoader {
    fn load(&self, id: &str) -> LocalBoxFuture<'_, Result<LoadedBook, FolioError>> {
        future::ready(self.resolve(id)).boxed_local()
    }
}
