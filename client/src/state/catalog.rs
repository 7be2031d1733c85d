//! Built-in skill catalog and its merge with server records.
//!
//! The catalog lists the skills every child sees for a sport before any
//! progress exists. Records can name skills the catalog does not know; those
//! are appended after the defaults so nothing with a record is ever hidden.

#[cfg(test)]
#[path = "catalog_test.rs"]
mod catalog_test;

use crate::net::types::ProgressRecord;

/// Sports offered as tabs for every child, in display order.
pub const DEFAULT_SPORTS: [&str; 2] = ["Gymnastics", "Swimming"];

const GYMNASTICS_SKILLS: [&str; 6] = ["Forward Roll", "Cartwheel", "Handstand", "Bridge", "Backhandspring", "Split"];

const SWIMMING_SKILLS: [&str; 5] = ["Floating", "Freestyle", "Backstroke", "Breaststroke", "Diving"];

/// Default skills for `sport`. Unknown sports have none.
#[must_use]
pub fn default_skills(sport: &str) -> &'static [&'static str] {
    match sport {
        "Gymnastics" => &GYMNASTICS_SKILLS,
        "Swimming" => &SWIMMING_SKILLS,
        _ => &[],
    }
}

/// Skills to render for `sport`: defaults first, then any other skill named
/// by a record under that sport, in record order, without duplicates.
#[must_use]
pub fn merge_skills(sport: &str, records: &[ProgressRecord]) -> Vec<String> {
    let mut skills: Vec<String> = default_skills(sport).iter().map(|s| (*s).to_owned()).collect();
    for record in records.iter().filter(|r| r.sport_name == sport) {
        push_unique(&mut skills, &record.skill_name);
    }
    skills
}

/// Sports to offer as tabs: the current list (defaults on first load), then
/// any sport named by a record.
#[must_use]
pub fn merge_sports(current: &[String], records: &[ProgressRecord]) -> Vec<String> {
    let mut sports: Vec<String> = if current.is_empty() {
        DEFAULT_SPORTS.iter().map(|s| (*s).to_owned()).collect()
    } else {
        current.to_vec()
    };
    for record in records {
        push_unique(&mut sports, &record.sport_name);
    }
    sports
}

fn push_unique(list: &mut Vec<String>, name: &str) {
    if !list.iter().any(|existing| existing == name) {
        list.push(name.to_owned());
    }
}
