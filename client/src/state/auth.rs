//! Session state for the current browser user.
//!
//! SYSTEM CONTEXT
//! ==============
//! Populated once after hydration from the stored user blob. Pages read it to
//! pick the role dashboard and to scope their REST queries.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use crate::net::types::{Role, User};

/// Current user and whether the stored session has been read yet.
#[derive(Clone, Debug)]
pub struct AuthState {
    pub user: Option<User>,
    pub loading: bool,
}

impl Default for AuthState {
    /// Starts loading: server render cannot see browser storage.
    fn default() -> Self {
        Self { user: None, loading: true }
    }
}

impl AuthState {
    /// Settled state for a (possibly absent) stored user.
    #[must_use]
    pub fn from_user(user: Option<User>) -> Self {
        Self { user, loading: false }
    }

    #[must_use]
    pub fn role(&self) -> Option<Role> {
        self.user.as_ref().map(|u| u.role)
    }

    #[must_use]
    pub fn user_id(&self) -> Option<String> {
        self.user.as_ref().map(|u| u.id.clone())
    }

    /// Whether `role` may open a page restricted to `allowed`.
    #[must_use]
    pub fn allows(&self, allowed: &[Role]) -> bool {
        self.role().is_some_and(|r| allowed.contains(&r))
    }
}
