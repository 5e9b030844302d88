//! Aggregate close-all handle.
//!
//! Every book closed by a close-all gets a oneshot settle signal. The
//! handle joins them and resolves to the number of books that actually
//! settled. It is [`Shared`], so every caller that asked for a close-all
//! while one was pending observes the same resolution.

use futures::channel::oneshot;
use futures::future::{join_all, FutureExt, LocalBoxFuture, Shared};

/// Shared handle to a pending (or finished) close-all.
///
/// Resolves with the number of books that reported closing. A signal
/// dropped without firing is not counted.
pub type CloseAll = Shared<LocalBoxFuture<'static, usize>>;

/// Join `signals` into one shareable handle. Empty input resolves at once.
pub(crate) fn aggregate(signals: Vec<oneshot::Receiver<()>>) -> CloseAll {
    async move {
        join_all(signals)
            .await
            .into_iter()
            .filter(Result::is_ok)
            .count()
    }
    .boxed_local()
    .shared()
}

/// Poll without a waker, for use from the frame tick.
pub(crate) fn poll_settled(handle: &CloseAll) -> Option<usize> {
    handle.clone().now_or_never()
}
