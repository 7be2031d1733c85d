//! Admin dashboard: tabbed tables of athletes, coaches, programs, and events.
//!
//! SYSTEM CONTEXT
//! ==============
//! Each tab loads its collection the first time it is shown after sign-in and
//! again whenever the tab is re-selected, so rows deleted elsewhere drop out.

#[cfg(test)]
#[path = "admin_test.rs"]
mod admin_test;

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::components::nav_bar::NavBar;
use crate::components::session_gate::SessionGate;
use crate::components::tables::{ChildrenTable, CoachesTable, EventsTable, ProgramsTable};
use crate::net::api;
use crate::net::types::{Child, Coach, Event, Program, Role};
use crate::pages::list_actions::{delete_row, load_list};
use crate::state::auth::AuthState;
use crate::state::lists::ListState;
use crate::state::ui::{AdminTab, UiState};

/// The selected admin tab, notifying only when the tab changes.
pub(crate) fn selected_tab(ui: RwSignal<UiState>) -> Memo<AdminTab> {
    Memo::new(move |_| ui.with(|u| u.admin_tab))
}

#[component]
pub fn AdminPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let ui = expect_context::<RwSignal<UiState>>();
    crate::util::auth::install_role_guard(auth, &[Role::Admin], use_navigate());

    let children = RwSignal::new(ListState::<Child>::default());
    let coaches = RwSignal::new(ListState::<Coach>::default());
    let programs = RwSignal::new(ListState::<Program>::default());
    let events = RwSignal::new(ListState::<Event>::default());

    let tab = selected_tab(ui);
    let is_admin = Memo::new(move |_| auth.with(|a| a.allows(&[Role::Admin])));

    Effect::new(move || {
        if !is_admin.get() {
            return;
        }
        match tab.get() {
            AdminTab::Children => load_list(children, api::fetch_children),
            AdminTab::Coaches => load_list(coaches, api::fetch_coaches),
            AdminTab::Programs => load_list(programs, api::fetch_programs),
            AdminTab::Events => load_list(events, api::fetch_events),
        }
    });

    let delete_child = Callback::new(move |id: String| delete_row(children, AdminTab::Children.collection(), id));
    let delete_coach = Callback::new(move |id: String| delete_row(coaches, AdminTab::Coaches.collection(), id));
    let delete_program = Callback::new(move |id: String| delete_row(programs, AdminTab::Programs.collection(), id));
    let delete_event = Callback::new(move |id: String| delete_row(events, AdminTab::Events.collection(), id));

    view! {
        <div class="dashboard-page">
            <NavBar title="Admin"/>
            <SessionGate>
                <nav class="dashboard-page__tabs" role="tablist">
                    {AdminTab::ALL
                        .into_iter()
                        .map(|choice| {
                            view! {
                                <button
                                    class="dashboard-page__tab"
                                    class:dashboard-page__tab--active=move || tab.get() == choice
                                    role="tab"
                                    on:click=move |_| ui.update(|u| u.admin_tab = choice)
                                >
                                    {choice.label()}
                                </button>
                            }
                        })
                        .collect::<Vec<_>>()}
                </nav>
                <div class="dashboard-page__grid">
                    {move || match tab.get() {
                        AdminTab::Children => {
                            view! { <ChildrenTable list=children on_delete=delete_child show_progress=true/> }
                                .into_any()
                        }
                        AdminTab::Coaches => view! { <CoachesTable list=coaches on_delete=delete_coach/> }.into_any(),
                        AdminTab::Programs => {
                            view! { <ProgramsTable list=programs on_delete=delete_program/> }.into_any()
                        }
                        AdminTab::Events => view! { <EventsTable list=events on_delete=delete_event/> }.into_any(),
                    }}
                </div>
            </SessionGate>
        </div>
    }
}
