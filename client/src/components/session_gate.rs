//! Wrapper that renders page content only for a signed-in user.

use leptos::prelude::*;

use crate::state::auth::AuthState;

/// Shows `children` once the stored session is read and a user is present;
/// otherwise a loading line or a not-signed-in notice.
#[component]
pub fn SessionGate(children: ChildrenFn) -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();

    view! {
        <Show
            when=move || !auth.get().loading && auth.get().user.is_some()
            fallback=move || {
                view! {
                    <div class="session-gate">
                        <p>
                            {move || {
                                if auth.get().loading { "Loading..." } else { "You are not signed in." }
                            }}
                        </p>
                    </div>
                }
            }
        >
            {children()}
        </Show>
    }
}
