//! Table state for the REST-backed dashboard lists.
//!
//! DESIGN
//! ======
//! Every dashboard table has the same lifecycle (load, show error, delete a
//! row), so one generic holder serves children, coaches, programs, events and
//! videos alike.

#[cfg(test)]
#[path = "lists_test.rs"]
mod lists_test;

use crate::net::types::{Child, Coach, Event, Program, Video};

/// Rows that can be addressed by backend id.
pub trait Keyed {
    fn key(&self) -> &str;
}

macro_rules! keyed_by_id {
    ($($ty:ty),* $(,)?) => {
        $(impl Keyed for $ty {
            fn key(&self) -> &str {
                &self.id
            }
        })*
    };
}

keyed_by_id!(Child, Coach, Program, Event, Video);

/// One table's rows plus request status.
#[derive(Clone, Debug)]
pub struct ListState<T> {
    pub items: Vec<T>,
    pub loading: bool,
    /// Row whose delete request is in flight.
    pub deleting: Option<String>,
    pub error: Option<String>,
}

impl<T> Default for ListState<T> {
    fn default() -> Self {
        Self { items: Vec::new(), loading: false, deleting: None, error: None }
    }
}

impl<T: Keyed> ListState<T> {
    pub fn begin_load(&mut self) {
        self.loading = true;
        self.error = None;
    }

    /// Apply a fetch result. A failed fetch keeps the rows already shown.
    pub fn finish_load(&mut self, result: Result<Vec<T>, String>) {
        self.loading = false;
        match result {
            Ok(items) => self.items = items,
            Err(e) => self.error = Some(e),
        }
    }

    pub fn begin_delete(&mut self, id: &str) {
        self.deleting = Some(id.to_owned());
        self.error = None;
    }

    /// Drop the row on success; keep it and surface the error otherwise.
    pub fn finish_delete(&mut self, id: &str, result: Result<(), String>) {
        if self.deleting.as_deref() == Some(id) {
            self.deleting = None;
        }
        match result {
            Ok(()) => self.items.retain(|item| item.key() != id),
            Err(e) => self.error = Some(e),
        }
    }
}

/// Events on or after `today` (`YYYY-MM-DD`), soonest first.
///
/// Only the calendar date part of each event's ISO 8601 `date` is compared,
/// so an event later today still counts as upcoming.
#[must_use]
pub fn upcoming_events(mut events: Vec<Event>, today: &str) -> Vec<Event> {
    events.retain(|e| calendar_date(&e.date) >= today);
    events.sort_by(|a, b| a.date.cmp(&b.date));
    events
}

fn calendar_date(raw: &str) -> &str {
    raw.split('T').next().unwrap_or(raw)
}
