//! Parent dashboard: own children with progress links, plus upcoming events.

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::components::nav_bar::NavBar;
use crate::components::session_gate::SessionGate;
use crate::components::tables::{ChildrenTable, EventsTable};
use crate::net::api;
use crate::net::types::{Child, Event, Role};
use crate::pages::list_actions::load_list;
use crate::state::auth::AuthState;
use crate::state::lists::{ListState, upcoming_events};

/// Local calendar date as `YYYY-MM-DD`.
fn today() -> String {
    #[cfg(feature = "hydrate")]
    {
        let now = js_sys::Date::new_0();
        format!("{:04}-{:02}-{:02}", now.get_full_year(), now.get_month() + 1, now.get_date())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        String::new()
    }
}

#[component]
pub fn ParentPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    crate::util::auth::install_role_guard(auth, &[Role::Parent, Role::Admin], use_navigate());

    let children = RwSignal::new(ListState::<Child>::default());
    let events = RwSignal::new(ListState::<Event>::default());

    let user_id = crate::util::auth::session_user_id(auth);

    Effect::new(move || {
        let Some(user_id) = user_id.get() else {
            return;
        };
        load_list(children, move || async move { api::fetch_children_for_parent(&user_id).await });
        load_list(events, || async { api::fetch_events().await.map(|all| upcoming_events(all, &today())) });
    });

    view! {
        <div class="dashboard-page">
            <NavBar title="Parent"/>
            <SessionGate>
                <section class="dashboard-page__section">
                    <h2>"My Children"</h2>
                    <ChildrenTable list=children show_progress=true/>
                </section>
                <section class="dashboard-page__section">
                    <h2>"Upcoming Events"</h2>
                    <EventsTable list=events/>
                </section>
            </SessionGate>
        </div>
    }
}
