//! Coach dashboard: assigned athletes with progress links, plus videos.

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::components::nav_bar::NavBar;
use crate::components::session_gate::SessionGate;
use crate::components::tables::{ChildrenTable, VideosTable};
use crate::net::api;
use crate::net::types::{Child, Role, Video};
use crate::pages::list_actions::{delete_row, load_list};
use crate::state::auth::AuthState;
use crate::state::lists::ListState;

#[component]
pub fn CoachPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    crate::util::auth::install_role_guard(auth, &[Role::Coach, Role::Admin], use_navigate());

    let athletes = RwSignal::new(ListState::<Child>::default());
    let videos = RwSignal::new(ListState::<Video>::default());

    let user_id = crate::util::auth::session_user_id(auth);

    Effect::new(move || {
        let Some(user_id) = user_id.get() else {
            return;
        };
        load_list(athletes, move || async move { api::fetch_children_for_coach(&user_id).await });
        load_list(videos, || api::fetch_videos(None));
    });

    let delete_video = Callback::new(move |id: String| delete_row(videos, "videos", id));

    view! {
        <div class="dashboard-page">
            <NavBar title="Coach"/>
            <SessionGate>
                <section class="dashboard-page__section">
                    <h2>"My Athletes"</h2>
                    <ChildrenTable list=athletes show_progress=true/>
                </section>
                <section class="dashboard-page__section">
                    <h2>"Videos"</h2>
                    <VideosTable list=videos on_delete=delete_video/>
                </section>
            </SessionGate>
        </div>
    }
}
