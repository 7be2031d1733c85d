//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns route-scoped orchestration (which lists to load, what to do
//! on delete or edit) and delegates rendering details to `components`.

pub mod admin;
pub mod coach;
pub mod home;
pub(crate) mod list_actions;
pub mod messages;
pub mod parent;
pub mod progress;
