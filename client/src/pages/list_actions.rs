//! Background load/delete glue between `ListState` signals and REST helpers.
//!
//! Requests only run in the browser; on the server the list is left as is.

use std::future::Future;

use leptos::prelude::*;

use crate::state::lists::{Keyed, ListState};

/// Fetch rows into `list` in the background.
pub(crate) fn load_list<T, F, Fut>(list: RwSignal<ListState<T>>, fetch: F)
where
    T: Keyed + Send + Sync + 'static,
    F: FnOnce() -> Fut + 'static,
    Fut: Future<Output = Result<Vec<T>, String>> + 'static,
{
    #[cfg(feature = "hydrate")]
    {
        list.update(ListState::begin_load);
        leptos::task::spawn_local(async move {
            let result = fetch().await;
            if let Err(e) = &result {
                leptos::logging::warn!("list load failed: {e}");
            }
            list.try_update(|l| l.finish_load(result));
        });
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (list, fetch);
    }
}

/// Delete `id` from `collection` and drop the row once the backend agrees.
pub(crate) fn delete_row<T>(list: RwSignal<ListState<T>>, collection: &'static str, id: String)
where
    T: Keyed + Send + Sync + 'static,
{
    #[cfg(feature = "hydrate")]
    {
        list.update(|l| l.begin_delete(&id));
        leptos::task::spawn_local(async move {
            let result = crate::net::api::delete_resource(collection, &id).await;
            if let Err(e) = &result {
                leptos::logging::warn!("delete {collection}/{id} failed: {e}");
            }
            list.try_update(|l| l.finish_delete(&id, result));
        });
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (list, collection, id);
    }
}
