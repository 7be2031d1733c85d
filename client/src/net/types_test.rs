use super::*;

// =============================================================
// ProgressRecord serde
// =============================================================

#[test]
fn progress_record_reads_camel_case_payload() {
    let record: ProgressRecord = serde_json::from_value(serde_json::json!({
        "childId": 7,
        "sportName": "Gymnastics",
        "skillName": "Cartwheel",
        "percentage": 40,
        "notes": "steady",
        "lastUpdated": "2026-03-01T10:00:00Z"
    }))
    .unwrap();
    assert_eq!(record.child_id, "7");
    assert_eq!(record.sport_name, "Gymnastics");
    assert_eq!(record.skill_name, "Cartwheel");
    assert_eq!(record.percentage, 40);
    assert_eq!(record.notes, "steady");
    assert_eq!(record.last_updated.as_deref(), Some("2026-03-01T10:00:00Z"));
}

#[test]
fn progress_record_missing_or_null_notes_become_empty() {
    let missing: ProgressRecord = serde_json::from_value(serde_json::json!({
        "childId": "c1", "sportName": "Swimming", "skillName": "Float", "percentage": 10
    }))
    .unwrap();
    assert_eq!(missing.notes, "");

    let null: ProgressRecord = serde_json::from_value(serde_json::json!({
        "childId": "c1", "sportName": "Swimming", "skillName": "Float", "percentage": 10, "notes": null
    }))
    .unwrap();
    assert_eq!(null.notes, "");
    assert!(null.last_updated.is_none());
}

#[test]
fn progress_record_percentage_is_rounded_and_clamped() {
    let float: ProgressRecord = serde_json::from_value(serde_json::json!({
        "childId": "c1", "sportName": "S", "skillName": "K", "percentage": 62.6
    }))
    .unwrap();
    assert_eq!(float.percentage, 63);

    let over: ProgressRecord = serde_json::from_value(serde_json::json!({
        "childId": "c1", "sportName": "S", "skillName": "K", "percentage": 140
    }))
    .unwrap();
    assert_eq!(over.percentage, 100);

    let under: ProgressRecord = serde_json::from_value(serde_json::json!({
        "childId": "c1", "sportName": "S", "skillName": "K", "percentage": -5
    }))
    .unwrap();
    assert_eq!(under.percentage, 0);
}

#[test]
fn progress_record_rejects_string_percentage() {
    let result = serde_json::from_value::<ProgressRecord>(serde_json::json!({
        "childId": "c1", "sportName": "S", "skillName": "K", "percentage": "50"
    }));
    assert!(result.is_err());
}

#[test]
fn progress_record_serializes_camel_case_without_empty_timestamp() {
    let record = ProgressRecord {
        child_id: "c1".to_owned(),
        sport_name: "Gymnastics".to_owned(),
        skill_name: "Backhandspring".to_owned(),
        percentage: 75,
        notes: "good form".to_owned(),
        last_updated: None,
    };
    let value = serde_json::to_value(&record).unwrap();
    assert_eq!(
        value,
        serde_json::json!({
            "childId": "c1",
            "sportName": "Gymnastics",
            "skillName": "Backhandspring",
            "percentage": 75,
            "notes": "good form"
        })
    );
}

#[test]
fn progress_record_is_for_matches_sport_and_skill() {
    let record = ProgressRecord {
        child_id: "c1".to_owned(),
        sport_name: "Gymnastics".to_owned(),
        skill_name: "Split".to_owned(),
        percentage: 0,
        notes: String::new(),
        last_updated: None,
    };
    assert!(record.is_for("Gymnastics", "Split"));
    assert!(!record.is_for("Swimming", "Split"));
    assert!(!record.is_for("Gymnastics", "Bridge"));
}

// =============================================================
// clamp_percentage
// =============================================================

#[test]
fn clamp_percentage_handles_edges() {
    assert_eq!(clamp_percentage(0.0), 0);
    assert_eq!(clamp_percentage(100.0), 100);
    assert_eq!(clamp_percentage(100.4), 100);
    assert_eq!(clamp_percentage(-0.4), 0);
    assert_eq!(clamp_percentage(f64::NAN), 0);
    assert_eq!(clamp_percentage(f64::INFINITY), 100);
}

// =============================================================
// Identifiers and roles
// =============================================================

#[test]
fn user_accepts_mongo_style_id_and_role() {
    let user: User = serde_json::from_value(serde_json::json!({
        "_id": "65ab", "name": "Dana", "email": "dana@example.com", "role": "coach"
    }))
    .unwrap();
    assert_eq!(user.id, "65ab");
    assert_eq!(user.role, Role::Coach);
}

#[test]
fn user_role_defaults_to_parent() {
    let user: User = serde_json::from_value(serde_json::json!({ "id": 3, "name": "Sam" })).unwrap();
    assert_eq!(user.id, "3");
    assert_eq!(user.role, Role::Parent);
    assert!(user.email.is_none());
}

#[test]
fn role_home_paths_are_distinct() {
    assert_eq!(Role::Admin.home_path(), "/admin");
    assert_eq!(Role::Coach.home_path(), "/coach");
    assert_eq!(Role::Parent.home_path(), "/parent");
}

#[test]
fn child_optional_ids_accept_numbers_and_null() {
    let child: Child = serde_json::from_value(serde_json::json!({
        "id": "k1", "name": "Mia", "age": 9, "parentId": 12, "coachId": null
    }))
    .unwrap();
    assert_eq!(child.parent_id.as_deref(), Some("12"));
    assert!(child.coach_id.is_none());
    assert!(child.program_id.is_none());
    assert_eq!(child.age, Some(9));
}

#[test]
fn id_rejects_boolean() {
    let result = serde_json::from_value::<Coach>(serde_json::json!({ "id": true, "name": "X" }));
    assert!(result.is_err());
}

#[test]
fn message_read_defaults_false() {
    let message: Message = serde_json::from_value(serde_json::json!({
        "id": "m1", "senderId": "a", "receiverId": "b", "content": "hi"
    }))
    .unwrap();
    assert!(!message.read);
}

#[test]
fn new_message_serializes_camel_case() {
    let body = NewMessage { sender_id: "a".to_owned(), receiver_id: "b".to_owned(), content: "hello".to_owned() };
    assert_eq!(
        serde_json::to_value(&body).unwrap(),
        serde_json::json!({ "senderId": "a", "receiverId": "b", "content": "hello" })
    );
}

#[test]
fn unread_count_parses() {
    let count: UnreadCount = serde_json::from_str(r#"{"count":4}"#).unwrap();
    assert_eq!(count.count, 4);
}
