//! Shared role-guard helpers.
//!
//! SYSTEM CONTEXT
//! ==============
//! Dashboards are role-scoped. Every route component applies the same rule:
//! once the session is read, a user on a page their role may not open is sent
//! to their own dashboard. Visitors with no session stay put and see a notice.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;

use crate::net::types::Role;
use crate::state::auth::AuthState;

/// Where to send the user, if anywhere, for a page open to `allowed`.
#[must_use]
pub fn guard_redirect(state: &AuthState, allowed: &[Role]) -> Option<&'static str> {
    if state.loading {
        return None;
    }
    let role = state.role()?;
    if allowed.contains(&role) { None } else { Some(role.home_path()) }
}

/// Redirect whenever the loaded session's role is not in `allowed`.
pub fn install_role_guard<F>(auth: RwSignal<AuthState>, allowed: &'static [Role], navigate: F)
where
    F: Fn(&str, NavigateOptions) + Clone + 'static,
{
    Effect::new(move || {
        if let Some(path) = guard_redirect(&auth.get(), allowed) {
            navigate(path, NavigateOptions::default());
        }
    });
}

/// The signed-in user's id. Subscribers re-run only when the id itself
/// changes, not on every write to the session signal.
pub fn session_user_id(auth: RwSignal<AuthState>) -> Memo<Option<String>> {
    Memo::new(move |_| auth.with(AuthState::user_id))
}
