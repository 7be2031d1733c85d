//! Persistence seam for skill progress.
//!
//! SYSTEM CONTEXT
//! ==============
//! The progress page talks to the backend only through [`ProgressStore`], so
//! the save-then-resync flow in [`persist_update`] can be exercised against an
//! in-memory store in tests. [`HttpProgressStore`] is the browser impl.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "progress_store_test.rs"]
mod progress_store_test;

use super::types::ProgressRecord;
use crate::state::progress::SyncOutcome;

/// Backend operations the progress view depends on.
#[async_trait::async_trait(?Send)]
pub trait ProgressStore {
    /// Every progress record stored for `child_id`.
    async fn fetch(&self, child_id: &str) -> Result<Vec<ProgressRecord>, String>;

    /// Upsert one record. Returns the stored row when the backend echoes it.
    async fn save(&self, record: &ProgressRecord) -> Result<Option<ProgressRecord>, String>;
}

/// `ProgressStore` over the REST backend.
#[derive(Clone, Copy, Debug, Default)]
pub struct HttpProgressStore;

#[async_trait::async_trait(?Send)]
impl ProgressStore for HttpProgressStore {
    async fn fetch(&self, child_id: &str) -> Result<Vec<ProgressRecord>, String> {
        super::api::get_json(&super::api::progress_endpoint(child_id)).await
    }

    async fn save(&self, record: &ProgressRecord) -> Result<Option<ProgressRecord>, String> {
        super::api::send_json("PUT", "/api/progress", record).await
    }
}

/// Persist an edit that is already in the local cache.
///
/// No retries: a failed save is answered with one full refetch so the caller
/// can drop its optimistic value.
pub async fn persist_update(store: &dyn ProgressStore, record: ProgressRecord) -> SyncOutcome {
    match store.save(&record).await {
        Ok(stored) => SyncOutcome::Saved { sent: record, stored },
        Err(error) => {
            leptos::logging::warn!(
                "progress save failed: child={} sport={} skill={} error={error}",
                record.child_id,
                record.sport_name,
                record.skill_name
            );
            match store.fetch(&record.child_id).await {
                Ok(records) => SyncOutcome::Resynced { child_id: record.child_id, error, records },
                Err(refetch_error) => {
                    leptos::logging::warn!("progress refetch failed: child={} error={refetch_error}", record.child_id);
                    SyncOutcome::Reverted { child_id: record.child_id, error, refetch_error }
                }
            }
        }
    }
}
