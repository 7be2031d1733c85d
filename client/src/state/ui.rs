//! Local UI chrome state (theme, dashboard tabs).
//!
//! DESIGN
//! ======
//! Keeps transient presentation concerns out of domain state (`progress`,
//! `messages`) so rendering controls can evolve independently of REST data.

#[cfg(test)]
#[path = "ui_test.rs"]
mod ui_test;

/// UI state shared by every page.
#[derive(Clone, Debug, Default)]
pub struct UiState {
    pub dark_mode: bool,
    pub admin_tab: AdminTab,
}

/// Tables available on the admin dashboard.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum AdminTab {
    #[default]
    Children,
    Coaches,
    Programs,
    Events,
}

impl AdminTab {
    pub const ALL: [Self; 4] = [Self::Children, Self::Coaches, Self::Programs, Self::Events];

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Children => "Athletes",
            Self::Coaches => "Coaches",
            Self::Programs => "Programs",
            Self::Events => "Events",
        }
    }

    /// REST collection backing the tab.
    #[must_use]
    pub fn collection(self) -> &'static str {
        match self {
            Self::Children => "children",
            Self::Coaches => "coaches",
            Self::Programs => "programs",
            Self::Events => "events",
        }
    }
}
