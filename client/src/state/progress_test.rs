use super::*;
use crate::state::catalog::{DEFAULT_SPORTS, default_skills};

fn record(sport: &str, skill: &str, percentage: u8, notes: &str) -> ProgressRecord {
    ProgressRecord {
        child_id: "c1".to_owned(),
        sport_name: sport.to_owned(),
        skill_name: skill.to_owned(),
        percentage,
        notes: notes.to_owned(),
        last_updated: None,
    }
}

fn opened(records: Vec<ProgressRecord>) -> ProgressState {
    let mut state = ProgressState::default();
    state.open("c1");
    state.load(records);
    state
}

// =============================================================
// open / load
// =============================================================

#[test]
fn default_state_has_no_child() {
    let state = ProgressState::default();
    assert!(state.child_id.is_none());
    assert!(state.records.is_empty());
    assert!(state.sports.is_empty());
    assert!(!state.loading);
}

#[test]
fn open_selects_first_default_sport_and_marks_loading() {
    let mut state = ProgressState::default();
    state.open("c1");
    assert_eq!(state.child_id.as_deref(), Some("c1"));
    assert!(state.loading);
    assert_eq!(state.sports, DEFAULT_SPORTS.to_vec());
    assert_eq!(state.active_sport, DEFAULT_SPORTS[0]);
}

#[test]
fn open_discards_previous_child() {
    let mut state = opened(vec![record("Tennis", "Serve", 20, "")]);
    state.error = Some("stale".to_owned());
    state.open("c2");
    assert!(state.records.is_empty());
    assert!(state.confirmed.is_empty());
    assert!(state.error.is_none());
    assert!(!state.sports.contains(&"Tennis".to_owned()));
}

#[test]
fn load_merges_record_sports_after_defaults() {
    let state = opened(vec![record("Tennis", "Serve", 20, ""), record("Gymnastics", "Split", 5, "")]);
    assert_eq!(state.sports, vec!["Gymnastics", "Swimming", "Tennis"]);
    assert!(!state.loading);
    assert_eq!(state.confirmed, state.records);
}

#[test]
fn load_failed_sets_error_and_clears_loading() {
    let mut state = ProgressState::default();
    state.open("c1");
    state.load_failed("GET /api/progress/c1 failed: 500".to_owned());
    assert!(!state.loading);
    assert!(state.error.as_deref().unwrap().contains("500"));
}

// =============================================================
// skills / skill_progress
// =============================================================

#[test]
fn skills_for_unrecorded_default_lists_catalog() {
    let state = opened(vec![]);
    assert!(state.skills().contains(&"Backhandspring".to_owned()));
    assert_eq!(state.skills().len(), default_skills("Gymnastics").len());
}

#[test]
fn skills_never_hide_recorded_skill() {
    let state = opened(vec![record("Gymnastics", "Aerial", 30, "")]);
    assert!(state.skills().contains(&"Aerial".to_owned()));
    assert!(!state.skills_for("Swimming").contains(&"Aerial".to_owned()));
}

#[test]
fn skill_progress_untouched_is_zero_with_empty_notes() {
    let state = opened(vec![]);
    let progress = state.skill_progress("Backhandspring");
    assert_eq!(progress.percentage, 0);
    assert_eq!(progress.notes, "");
    assert_eq!(progress.child_id, "c1");
    assert_eq!(progress.sport_name, "Gymnastics");
    assert!(state.records.is_empty(), "read-time default is not stored");
}

#[test]
fn skill_progress_is_scoped_to_active_sport() {
    let mut state = opened(vec![record("Swimming", "Diving", 60, "brave")]);
    assert_eq!(state.skill_progress("Diving").percentage, 0);
    state.select_sport("Swimming");
    let progress = state.skill_progress("Diving");
    assert_eq!(progress.percentage, 60);
    assert_eq!(progress.notes, "brave");
}

// =============================================================
// apply_optimistic
// =============================================================

#[test]
fn apply_optimistic_inserts_then_replaces() {
    let mut state = opened(vec![]);
    let first = state.apply_optimistic("Backhandspring", 75.0, "good form").unwrap();
    assert_eq!(first.percentage, 75);
    assert_eq!(state.records.len(), 1);

    state.apply_optimistic("Backhandspring", 80.0, "better").unwrap();
    assert_eq!(state.records.len(), 1);
    let cached = state.skill_progress("Backhandspring");
    assert_eq!(cached.percentage, 80);
    assert_eq!(cached.notes, "better");
    assert!(state.confirmed.is_empty(), "confirmed only moves on server replies");
}

#[test]
fn apply_optimistic_replaces_loaded_row_with_untrimmed_name() {
    let mut state = opened(vec![record("Gymnastics", "Round-off ", 40, "")]);
    let sent = state.apply_optimistic("Round-off ", 80.0, "x").unwrap();
    assert_eq!(sent.skill_name, "Round-off ");
    assert_eq!(state.records.len(), 1);
    assert_eq!(state.skill_progress("Round-off ").percentage, 80);
    assert_eq!(state.skill_progress("Round-off ").notes, "x");
}

#[test]
fn apply_optimistic_clamps_percentage() {
    let mut state = opened(vec![]);
    assert_eq!(state.apply_optimistic("Split", 130.0, "").unwrap().percentage, 100);
    assert_eq!(state.apply_optimistic("Split", -3.0, "").unwrap().percentage, 0);
}

#[test]
fn apply_optimistic_requires_open_child_and_skill_name() {
    let mut closed = ProgressState::default();
    assert!(closed.apply_optimistic("Split", 10.0, "").is_none());

    let mut state = opened(vec![]);
    assert!(state.apply_optimistic("   ", 10.0, "").is_none());
    assert!(state.records.is_empty());
}

// =============================================================
// add_skill / add_sport / select_sport
// =============================================================

#[test]
fn add_skill_creates_zero_record() {
    let mut state = opened(vec![]);
    let sent = state.add_skill("  Aerial ").unwrap();
    assert_eq!(sent.skill_name, "Aerial");
    assert_eq!(sent.percentage, 0);
    assert!(state.skills().contains(&"Aerial".to_owned()));
}

#[test]
fn add_skill_existing_does_not_reset_progress() {
    let mut state = opened(vec![record("Gymnastics", "Split", 45, "close")]);
    assert!(state.add_skill("Split").is_none());
    assert!(state.add_skill("Cartwheel").is_none(), "catalog skills are already listed");
    assert_eq!(state.skill_progress("Split").percentage, 45);
}

#[test]
fn add_sport_appends_and_selects_without_records() {
    let mut state = opened(vec![]);
    assert!(state.add_sport("Judo"));
    assert_eq!(state.active_sport, "Judo");
    assert_eq!(state.sports.last().map(String::as_str), Some("Judo"));
    assert!(state.records.is_empty());
    assert!(state.skills().is_empty());
}

#[test]
fn add_sport_duplicate_selects_existing_tab() {
    let mut state = opened(vec![]);
    assert!(state.add_sport("Swimming"));
    assert_eq!(state.sports.iter().filter(|s| *s == "Swimming").count(), 1);
    assert_eq!(state.active_sport, "Swimming");
    assert!(!state.add_sport("  "));
}

#[test]
fn select_sport_ignores_unknown() {
    let mut state = opened(vec![]);
    state.select_sport("Curling");
    assert_eq!(state.active_sport, "Gymnastics");
}

#[test]
fn added_sport_survives_reload() {
    let mut state = opened(vec![]);
    state.add_sport("Judo");
    state.load(vec![record("Gymnastics", "Split", 10, "")]);
    assert!(state.sports.contains(&"Judo".to_owned()));
    assert_eq!(state.active_sport, "Judo");
}

// =============================================================
// apply_outcome
// =============================================================

#[test]
fn saved_outcome_confirms_record() {
    let mut state = opened(vec![]);
    let sent = state.apply_optimistic("Split", 30.0, "").unwrap();
    state.apply_outcome(SyncOutcome::Saved { sent: sent.clone(), stored: None });
    assert_eq!(state.confirmed, vec![sent.clone()]);
    assert_eq!(state.records, vec![sent]);
}

#[test]
fn stale_saved_echo_does_not_overwrite_newer_edit() {
    let mut state = opened(vec![]);
    let first = state.apply_optimistic("Split", 30.0, "").unwrap();
    state.apply_optimistic("Split", 60.0, "").unwrap();

    let echo = ProgressRecord { last_updated: Some("t1".to_owned()), ..first.clone() };
    state.apply_outcome(SyncOutcome::Saved { sent: first, stored: Some(echo.clone()) });

    assert_eq!(state.skill_progress("Split").percentage, 60);
    assert_eq!(state.confirmed, vec![echo]);
}

#[test]
fn resynced_outcome_replaces_cache_with_server_records() {
    let server = vec![record("Gymnastics", "Cartwheel", 40, "")];
    let mut state = opened(server.clone());
    state.apply_optimistic("Split", 90.0, "").unwrap();

    state.apply_outcome(SyncOutcome::Resynced {
        child_id: "c1".to_owned(),
        error: "boom".to_owned(),
        records: server.clone(),
    });

    assert_eq!(state.records, server);
    assert_eq!(state.confirmed, server);
    assert!(state.error.as_deref().unwrap().contains("boom"));
}

#[test]
fn reverted_outcome_restores_confirmed_records() {
    let server = vec![record("Gymnastics", "Split", 20, "")];
    let mut state = opened(server.clone());
    state.apply_optimistic("Split", 90.0, "").unwrap();

    state.apply_outcome(SyncOutcome::Reverted {
        child_id: "c1".to_owned(),
        error: "save".to_owned(),
        refetch_error: "reload".to_owned(),
    });

    assert_eq!(state.records, server);
    let error = state.error.unwrap();
    assert!(error.contains("save"));
    assert!(error.contains("reload"));
}

#[test]
fn outcome_for_other_child_is_ignored() {
    let mut state = opened(vec![]);
    state.apply_optimistic("Split", 90.0, "").unwrap();
    state.apply_outcome(SyncOutcome::Resynced {
        child_id: "someone-else".to_owned(),
        error: "boom".to_owned(),
        records: vec![],
    });
    assert_eq!(state.skill_progress("Split").percentage, 90);
    assert!(state.error.is_none());
}
