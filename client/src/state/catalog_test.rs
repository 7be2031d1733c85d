use super::*;

fn record(sport: &str, skill: &str) -> ProgressRecord {
    ProgressRecord {
        child_id: "c1".to_owned(),
        sport_name: sport.to_owned(),
        skill_name: skill.to_owned(),
        percentage: 10,
        notes: String::new(),
        last_updated: None,
    }
}

#[test]
fn default_skills_known_and_unknown_sports() {
    assert!(default_skills("Gymnastics").contains(&"Backhandspring"));
    assert!(default_skills("Swimming").contains(&"Freestyle"));
    assert!(default_skills("Tennis").is_empty());
}

#[test]
fn merge_skills_without_records_is_the_catalog() {
    let skills = merge_skills("Gymnastics", &[]);
    let expected: Vec<String> = default_skills("Gymnastics").iter().map(|s| (*s).to_owned()).collect();
    assert_eq!(skills, expected);
}

#[test]
fn merge_skills_appends_extra_skills_after_defaults_in_record_order() {
    let records = vec![
        record("Gymnastics", "Round-off"),
        record("Gymnastics", "Cartwheel"),
        record("Gymnastics", "Aerial"),
    ];
    let skills = merge_skills("Gymnastics", &records);
    let defaults = default_skills("Gymnastics").len();
    assert_eq!(skills.len(), defaults + 2);
    assert_eq!(skills[defaults], "Round-off");
    assert_eq!(skills[defaults + 1], "Aerial");
}

#[test]
fn merge_skills_ignores_other_sports_and_duplicates() {
    let records = vec![
        record("Swimming", "Treading"),
        record("Gymnastics", "Aerial"),
        record("Gymnastics", "Aerial"),
    ];
    let skills = merge_skills("Gymnastics", &records);
    assert!(!skills.contains(&"Treading".to_owned()));
    assert_eq!(skills.iter().filter(|s| *s == "Aerial").count(), 1);
}

#[test]
fn merge_skills_equals_defaults_union_record_skills() {
    let records = vec![
        record("Tennis", "Serve"),
        record("Tennis", "Volley"),
        record("Swimming", "Butterfly"),
    ];
    for sport in ["Gymnastics", "Swimming", "Tennis"] {
        let skills = merge_skills(sport, &records);
        let mut expected: Vec<String> = default_skills(sport).iter().map(|s| (*s).to_owned()).collect();
        for r in records.iter().filter(|r| r.sport_name == sport) {
            if !expected.contains(&r.skill_name) {
                expected.push(r.skill_name.clone());
            }
        }
        assert_eq!(skills, expected, "sport {sport}");
    }
}

#[test]
fn merge_sports_starts_from_defaults() {
    let sports = merge_sports(&[], &[record("Tennis", "Serve"), record("Gymnastics", "Split")]);
    assert_eq!(sports, vec!["Gymnastics", "Swimming", "Tennis"]);
}

#[test]
fn merge_sports_keeps_client_added_sports() {
    let current = vec!["Gymnastics".to_owned(), "Swimming".to_owned(), "Judo".to_owned()];
    let sports = merge_sports(&current, &[record("Tennis", "Serve")]);
    assert_eq!(sports, vec!["Gymnastics", "Swimming", "Judo", "Tennis"]);
}
