//! Crate-level error types.

use std::fmt;

/// Errors produced by the folio crate.
///
/// Only the edges of the crate fail: option files, book manifests, and
/// asset loads. Scene interaction never returns an error.
#[derive(Debug)]
pub enum FolioError {
    /// Generic I/O failure.
    Io(std::io::Error),
    /// TOML options parsing/serialization failure.
    OptionsParse(String),
    /// Book manifest parsing failure.
    ManifestParse(String),
    /// A single asset could not be resolved or loaded.
    AssetLoad {
        /// Opaque asset identifier that failed.
        id: String,
        /// Human-readable cause.
        reason: String,
    },
}

impl FolioError {
    /// Convenience constructor for a failed asset load.
    pub fn asset_load(id: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::AssetLoad {
            id: id.into(),
            reason: reason.into(),
        }
    }
}

impl fmt::Display for FolioError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(e) => write!(f, "I/O error: {e}"),
            Self::OptionsParse(msg) => {
                write!(f, "options parse error: {msg}")
            }
            Self::ManifestParse(msg) => {
                write!(f, "manifest parse error: {msg}")
            }
            Self::AssetLoad { id, reason } => {
                write!(f, "failed to load asset '{id}': {reason}")
            }
        }
    }
}

impl std::error::Error for FolioError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for FolioError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}
