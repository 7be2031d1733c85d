//! Skill-progress page for one child.
//!
//! SYSTEM CONTEXT
//! ==============
//! Route: `/progress/:child_id`. The page owns the `ProgressState` signal and
//! the persistence calls; `ProgressTracker` only renders and reports edits.
//!
//! DESIGN
//! ======
//! Every edit is written to the cache first and then persisted through
//! `persist_update`. Its outcome is folded back with `apply_outcome`, which
//! ignores replies for a child that is no longer open.

use leptos::prelude::*;
use leptos_router::hooks::{use_navigate, use_params_map};

use crate::components::nav_bar::NavBar;
use crate::components::progress_tracker::ProgressTracker;
use crate::components::session_gate::SessionGate;
use crate::net::types::{ProgressRecord, Role};
use crate::state::auth::AuthState;
use crate::state::progress::ProgressState;

fn fetch_progress(progress: RwSignal<ProgressState>, child_id: String) {
    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        use crate::net::progress_store::{HttpProgressStore, ProgressStore};

        let result = HttpProgressStore.fetch(&child_id).await;
        progress.try_update(|p| {
            if p.child_id.as_deref() != Some(child_id.as_str()) {
                return;
            }
            match result {
                Ok(records) => p.load(records),
                Err(e) => {
                    leptos::logging::warn!("progress load failed: child={child_id} error={e}");
                    p.load_failed(e);
                }
            }
        });
    });
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (progress, child_id);
    }
}

fn spawn_persist(progress: RwSignal<ProgressState>, record: ProgressRecord) {
    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        use crate::net::progress_store::{HttpProgressStore, persist_update};

        let outcome = persist_update(&HttpProgressStore, record).await;
        progress.try_update(|p| p.apply_outcome(outcome));
    });
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (progress, record);
    }
}

#[component]
pub fn ProgressPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    crate::util::auth::install_role_guard(auth, &[Role::Admin, Role::Coach, Role::Parent], use_navigate());

    let params = use_params_map();
    let progress = RwSignal::new(ProgressState::default());

    Effect::new(move || {
        let Some(child_id) = params.get().get("child_id").filter(|id| !id.is_empty()) else {
            return;
        };
        if !auth.get().allows(&[Role::Admin, Role::Coach, Role::Parent]) {
            return;
        }
        if progress.get_untracked().child_id.as_deref() == Some(child_id.as_str()) {
            return;
        }
        progress.update(|p| p.open(&child_id));
        fetch_progress(progress, child_id);
    });

    let on_update = Callback::new(move |(skill, percentage, notes): (String, f64, String)| {
        let mut sent = None;
        progress.update(|p| sent = p.apply_optimistic(&skill, percentage, &notes));
        if let Some(record) = sent {
            spawn_persist(progress, record);
        }
    });

    let on_add_skill = Callback::new(move |skill: String| {
        let mut sent = None;
        progress.update(|p| sent = p.add_skill(&skill));
        if let Some(record) = sent {
            spawn_persist(progress, record);
        }
    });

    view! {
        <div class="progress-page">
            <NavBar title="Skill Progress"/>
            <SessionGate>
                <ProgressTracker progress=progress on_update=on_update on_add_skill=on_add_skill/>
            </SessionGate>
        </div>
    }
}
