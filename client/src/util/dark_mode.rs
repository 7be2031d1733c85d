//! Dark mode initialization and toggle.
//!
//! Reads the preference from `localStorage` and applies a `data-theme`
//! attribute to the `<html>` element. Toggle writes back to `localStorage` and
//! updates that attribute. Requires a browser environment.
//!
//! TRADE-OFFS
//! ==========
//! Preference persistence is best-effort browser-only behavior; SSR paths
//! safely no-op to keep server rendering deterministic.

#[cfg(test)]
#[path = "dark_mode_test.rs"]
mod dark_mode_test;

use super::session;

const STORAGE_KEY: &str = "academy_portal_dark";

/// Read the dark mode preference.
///
/// Returns the stored choice, or the system preference when none is stored.
pub fn read_preference() -> bool {
    if let Some(stored) = session::load_raw(STORAGE_KEY) {
        return stored == "true";
    }
    #[cfg(feature = "hydrate")]
    {
        web_sys::window()
            .and_then(|w| w.match_media("(prefers-color-scheme: dark)").ok().flatten())
            .map_or(false, |mq| mq.matches())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        false
    }
}

/// Apply the `data-theme` attribute on the `<html>` element.
pub fn apply(enabled: bool) {
    #[cfg(feature = "hydrate")]
    {
        if let Some(el) = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|doc| doc.document_element())
        {
            let _ = el.set_attribute("data-theme", theme_name(enabled));
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = enabled;
    }
}

/// Toggle dark mode and persist the new preference.
pub fn toggle(current: bool) -> bool {
    let next = !current;
    apply(next);
    session::save_raw(STORAGE_KEY, if next { "true" } else { "false" });
    next
}

#[cfg_attr(not(feature = "hydrate"), allow(dead_code))]
fn theme_name(enabled: bool) -> &'static str {
    if enabled { "dark" } else { "light" }
}
