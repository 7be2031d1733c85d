//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render dashboard chrome, tables, and the progress editor while
//! reading/writing shared state from Leptos context providers or signals
//! handed down by their page.

pub mod nav_bar;
pub mod progress_tracker;
pub mod session_gate;
pub mod skill_row;
pub mod sport_tabs;
pub mod tables;
pub mod unread_badge;
