//! Landing route: forwards a signed-in user to their role dashboard.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::components::session_gate::SessionGate;
use crate::state::auth::AuthState;

#[component]
pub fn HomePage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let navigate = use_navigate();

    Effect::new(move || {
        if let Some(role) = auth.get().role() {
            navigate(role.home_path(), NavigateOptions { replace: true, ..NavigateOptions::default() });
        }
    });

    view! {
        <SessionGate>
            <p class="home-page__redirect">"Opening your dashboard..."</p>
        </SessionGate>
    }
}
