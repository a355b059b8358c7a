//! Async loading hook shared by the views.

use std::future::Future;

use dioxus::prelude::*;
use store::{LoadState, SourceError};

/// Run `load` as a resource and expose its progress as a [`LoadState`].
///
/// Signals read inside `load` become dependencies: when one changes the
/// in-flight request is dropped and a new one starts. Unmounting the calling
/// component drops it as well, so a late response never lands in a view that
/// is gone. Failures are logged here and surface as [`LoadState::Failed`].
pub fn use_loader<T, F, Fut>(mut load: F) -> Memo<LoadState<T>>
where
    T: Clone + PartialEq + 'static,
    F: FnMut() -> Fut + 'static,
    Fut: Future<Output = Result<T, SourceError>> + 'static,
{
    let outcome = use_resource(move || {
        let pending = load();
        async move {
            let result = pending.await;
            if let Err(err) = &result {
                tracing::warn!("Load failed: {err}");
            }
            result
        }
    });

    use_memo(move || LoadState::from_outcome((*outcome.read()).as_ref()))
}
