//! Networking modules for the REST backend.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` handles REST calls, `progress_store` is the persistence seam for the
//! progress tracker, and `types` defines the shared wire schema.

pub mod api;
pub mod progress_store;
pub mod types;
