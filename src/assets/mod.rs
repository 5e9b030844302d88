//! Book asset loading.
//!
//! Loading is asynchronous and per book: a batch issues one request per id
//! and completes when every request has resolved, successfully or not.
//! Failures are reported, never retried, and leave the slot empty.

pub mod manifest;

use futures::future::{join_all, LocalBoxFuture};

pub use self::manifest::ManifestLoader;
use crate::error::FolioError;
use crate::input::ClickSurface;
use crate::scene::Transform;

/// Clip metadata reported by a loader.
#[derive(Debug, Clone, PartialEq)]
pub struct ClipInfo {
    /// Clip name.
    pub name: String,
    /// Duration in seconds.
    pub duration: f32,
}

/// Everything the scene needs from one loaded book.
#[derive(Debug, Clone, PartialEq)]
pub struct LoadedBook {
    /// Asset id the book was requested by.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Transform the asset was authored at.
    pub transform: Transform,
    /// Intrinsic page-turn clips.
    pub clips: Vec<ClipInfo>,
    /// Pickable surfaces in book-local space.
    pub surfaces: Vec<ClickSurface>,
}

/// Source of book assets.
pub trait AssetLoader {
    /// Load one book by id.
    fn load(&self, id: &str) -> LocalBoxFuture<'_, Result<LoadedBook, FolioError>>;
}

/// Load every id concurrently. Results keep the order of `ids`, so the
/// result at position `i` belongs to slot `i`.
pub async fn load_batch<L>(loader: &L, ids: &[String]) -> Vec<Result<LoadedBook, FolioError>>
where
    L: AssetLoader + ?Sized,
{
    log::info!("loading {} books", ids.len());
    let results = join_all(ids.iter().map(|id| loader.load(id))).await;
    for result in &results {
        if let Err(e) = result {
            log::error!("{e}");
        }
    }
    results
}

#[cfg(test)]
mod tests {
    use futures::FutureExt;

    use super::*;

    struct OnlyEven;

    impl AssetLoader for OnlyEven {
        fn load(&self, id: &str) -> LocalBoxFuture<'_, Result<LoadedBook, FolioError>> {
            let id = id.to_owned();
            async move {
                let n: usize = id.parse().map_err(|_| FolioError::asset_load(&id, "bad id"))?;
                if n % 2 == 1 {
                    return Err(FolioError::asset_load(&id, "odd"));
                }
                Ok(LoadedBook {
                    name: format!("Book {n}"),
                    id,
                    transform: Transform::IDENTITY,
                    clips: Vec::new(),
                    surfaces: Vec::new(),
                })
            }
            .boxed_local()
        }
    }

    #[test]
    fn batch_keeps_slot_order_and_reports_failures() {
        let ids: Vec<String> = (0..4).map(|i| i.to_string()).collect();
        let results = load_batch(&OnlyEven, &ids).now_or_never().unwrap();
        assert_eq!(results.len(), 4);
        assert_eq!(results[0].as_ref().unwrap().name, "Book 0");
        assert!(matches!(
            &results[1],
            Err(FolioError::AssetLoad { id, .. }) if id == "1"
        ));
        assert!(results[2].is_ok());
        assert!(results[3].is_err());
    }

    #[test]
    fn empty_batch_resolves_immediately() {
        let results = load_batch(&OnlyEven, &[]).now_or_never().unwrap();
        assert!(results.is_empty());
    }
}
