//! Skill-progress editing state for one child.
//!
//! DESIGN
//! ======
//! `records` is what the view renders and is written optimistically on every
//! edit. `confirmed` is the server-acknowledged copy: the last fetched snapshot
//! plus every save the backend accepted since. When a save fails the view is
//! replaced by a fresh fetch, or by `confirmed` if that fetch fails too, so a
//! rejected edit never lingers on screen.
//!
//! Overlapping saves are independent; the outcome of each is applied to the
//! state as it is when the response lands.

#[cfg(test)]
#[path = "progress_test.rs"]
mod progress_test;

use crate::net::types::{ProgressRecord, clamp_percentage};
use crate::state::catalog;

/// Result of persisting one optimistic edit.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SyncOutcome {
    /// The backend stored the edit; `stored` is its echo, if any.
    Saved { sent: ProgressRecord, stored: Option<ProgressRecord> },
    /// The save failed and a refetch returned the server's records.
    Resynced { child_id: String, error: String, records: Vec<ProgressRecord> },
    /// The save failed and so did the refetch.
    Reverted { child_id: String, error: String, refetch_error: String },
}

impl SyncOutcome {
    fn child_id(&self) -> &str {
        match self {
            Self::Saved { sent, .. } => &sent.child_id,
            Self::Resynced { child_id, .. } | Self::Reverted { child_id, .. } => child_id,
        }
    }
}

/// Progress cache and tab selection for the open child.
#[derive(Clone, Debug, Default)]
pub struct ProgressState {
    pub child_id: Option<String>,
    pub records: Vec<ProgressRecord>,
    pub confirmed: Vec<ProgressRecord>,
    pub sports: Vec<String>,
    pub active_sport: String,
    pub loading: bool,
    pub error: Option<String>,
}

impl ProgressState {
    /// Reset for `child_id` and mark a fetch as in flight.
    pub fn open(&mut self, child_id: &str) {
        *self = Self {
            child_id: Some(child_id.to_owned()),
            sports: catalog::merge_sports(&[], &[]),
            loading: true,
            ..Self::default()
        };
        self.active_sport = self.sports.first().cloned().unwrap_or_default();
    }

    /// Replace the cache with a server snapshot.
    pub fn load(&mut self, records: Vec<ProgressRecord>) {
        self.sports = catalog::merge_sports(&self.sports, &records);
        if !self.sports.contains(&self.active_sport) {
            self.active_sport = self.sports.first().cloned().unwrap_or_default();
        }
        self.confirmed.clone_from(&records);
        self.records = records;
        self.loading = false;
        self.error = None;
    }

    /// Record a failed initial fetch.
    pub fn load_failed(&mut self, error: String) {
        self.loading = false;
        self.error = Some(format!("Could not load progress: {error}"));
    }

    /// Skills listed under the active tab.
    #[must_use]
    pub fn skills(&self) -> Vec<String> {
        self.skills_for(&self.active_sport)
    }

    /// Skills listed under `sport`: catalog defaults plus any with a record.
    #[must_use]
    pub fn skills_for(&self, sport: &str) -> Vec<String> {
        catalog::merge_skills(sport, &self.records)
    }

    /// Cached progress for `skill` under the active sport, or a zero record
    /// if the skill has never been touched. The zero record is not stored.
    #[must_use]
    pub fn skill_progress(&self, skill: &str) -> ProgressRecord {
        self.records
            .iter()
            .find(|r| r.is_for(&self.active_sport, skill))
            .cloned()
            .unwrap_or_else(|| ProgressRecord {
                child_id: self.child_id.clone().unwrap_or_default(),
                sport_name: self.active_sport.clone(),
                skill_name: skill.to_owned(),
                percentage: 0,
                notes: String::new(),
                last_updated: None,
            })
    }

    /// Write `(active_sport, skill)` into the cache ahead of the server and
    /// return the record to persist. `None` when no child is open or the
    /// skill name is blank.
    ///
    /// `skill` is the cache key and is used exactly as given, so rows loaded
    /// with untrimmed names are replaced rather than duplicated.
    pub fn apply_optimistic(&mut self, skill: &str, percentage: f64, notes: &str) -> Option<ProgressRecord> {
        let child_id = self.child_id.clone()?;
        if skill.trim().is_empty() || self.active_sport.is_empty() {
            return None;
        }
        let record = ProgressRecord {
            child_id,
            sport_name: self.active_sport.clone(),
            skill_name: skill.to_owned(),
            percentage: clamp_percentage(percentage),
            notes: notes.to_owned(),
            last_updated: None,
        };
        upsert(&mut self.records, record.clone());
        self.error = None;
        Some(record)
    }

    /// Add a skill under the active sport through the regular update path.
    /// Skills already listed are left alone so their progress is not reset.
    pub fn add_skill(&mut self, skill: &str) -> Option<ProgressRecord> {
        let skill = skill.trim();
        if skill.is_empty() || self.skills().iter().any(|s| s == skill) {
            return None;
        }
        self.apply_optimistic(skill, 0.0, "")
    }

    /// Offer a new sport tab and select it. Purely local; a record appears
    /// once a skill under it is edited. Returns `false` for a blank name.
    pub fn add_sport(&mut self, sport: &str) -> bool {
        let sport = sport.trim();
        if sport.is_empty() {
            return false;
        }
        if !self.sports.iter().any(|s| s == sport) {
            self.sports.push(sport.to_owned());
        }
        self.active_sport = sport.to_owned();
        true
    }

    /// Switch tabs. Unknown sports are ignored.
    pub fn select_sport(&mut self, sport: &str) {
        if self.sports.iter().any(|s| s == sport) {
            self.active_sport = sport.to_owned();
        }
    }

    /// Fold a persist result back into the cache.
    ///
    /// Outcomes for a child that is no longer open are dropped.
    pub fn apply_outcome(&mut self, outcome: SyncOutcome) {
        if self.child_id.as_deref() != Some(outcome.child_id()) {
            return;
        }
        match outcome {
            SyncOutcome::Saved { sent, stored } => {
                let stored = stored.unwrap_or_else(|| sent.clone());
                // A later local edit to the same skill wins over this echo.
                let still_current = self
                    .records
                    .iter()
                    .find(|r| r.is_for(&sent.sport_name, &sent.skill_name))
                    .is_some_and(|r| r.percentage == sent.percentage && r.notes == sent.notes);
                if still_current {
                    upsert(&mut self.records, stored.clone());
                }
                upsert(&mut self.confirmed, stored);
            }
            SyncOutcome::Resynced { error, records, .. } => {
                self.load(records);
                self.error = Some(format!("Could not save progress: {error}"));
            }
            SyncOutcome::Reverted { error, refetch_error, .. } => {
                self.records = self.confirmed.clone();
                self.error = Some(format!("Could not save progress: {error} (reload failed: {refetch_error})"));
            }
        }
    }
}

fn upsert(records: &mut Vec<ProgressRecord>, record: ProgressRecord) {
    match records
        .iter_mut()
        .find(|r| r.is_for(&record.sport_name, &record.skill_name))
    {
        Some(existing) => *existing = record,
        None => records.push(record),
    }
}
