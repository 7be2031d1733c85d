//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by domain (`auth`, `progress`, `messages`, etc.) so
//! individual pages can depend on small focused models. Each struct is plain
//! data; pages wrap them in `RwSignal` and provide them through context.

pub mod auth;
pub mod catalog;
pub mod lists;
pub mod messages;
pub mod progress;
pub mod ui;
