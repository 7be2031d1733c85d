use super::*;

fn message(id: &str, read: bool, created_at: Option<&str>) -> Message {
    Message {
        id: id.to_owned(),
        sender_id: "coach-1".to_owned(),
        receiver_id: "parent-1".to_owned(),
        content: format!("message {id}"),
        read,
        created_at: created_at.map(str::to_owned),
    }
}

#[test]
fn messages_state_defaults() {
    let state = MessagesState::default();
    assert_eq!(state.unread, 0);
    assert!(state.inbox.is_empty());
    assert!(!state.loading);
    assert!(!state.sending);
}

#[test]
fn finish_load_sorts_newest_first_and_counts_unread() {
    let mut state = MessagesState { loading: true, ..MessagesState::default() };
    state.finish_load("parent-1", Ok(vec![
        message("a", true, Some("2026-01-01T00:00:00Z")),
        message("b", false, Some("2026-03-01T00:00:00Z")),
        message("c", false, Some("2026-02-01T00:00:00Z")),
    ]));
    assert!(!state.loading);
    assert_eq!(state.inbox.iter().map(|m| m.id.as_str()).collect::<Vec<_>>(), vec!["b", "c", "a"]);
    assert_eq!(state.unread, 2);
}

#[test]
fn finish_load_ignores_unread_sent_by_user() {
    let mut state = MessagesState::default();
    let mut outgoing = message("out", false, None);
    outgoing.sender_id = "parent-1".to_owned();
    outgoing.receiver_id = "coach-1".to_owned();
    state.finish_load("parent-1", Ok(vec![outgoing, message("in", false, None)]));
    assert_eq!(state.unread, 1);
}

#[test]
fn finish_load_error_keeps_inbox() {
    let mut state = MessagesState::default();
    state.finish_load("parent-1", Ok(vec![message("a", false, None)]));
    state.finish_load("parent-1", Err("GET /api/messages/u1 failed: 500".to_owned()));
    assert_eq!(state.inbox.len(), 1);
    assert!(state.error.is_some());
}

#[test]
fn mark_read_decrements_once() {
    let mut state = MessagesState::default();
    state.finish_load("parent-1", Ok(vec![message("a", false, None)]));
    assert_eq!(state.unread, 1);
    assert!(state.mark_read("a"));
    assert_eq!(state.unread, 0);
    assert!(!state.mark_read("a"));
    assert!(!state.mark_read("missing"));
    assert_eq!(state.unread, 0);
}

#[test]
fn finish_send_prepends_echo() {
    let mut state = MessagesState { sending: true, ..MessagesState::default() };
    state.finish_load("parent-1", Ok(vec![message("a", true, None)]));
    state.finish_send(Ok(Some(message("b", true, None))));
    assert!(!state.sending);
    assert_eq!(state.inbox[0].id, "b");

    state.finish_send(Err("POST /api/messages failed: 400".to_owned()));
    assert_eq!(state.inbox.len(), 2);
    assert!(state.error.as_deref().unwrap().contains("400"));
}

#[test]
fn unread_badge_label_hides_zero_and_caps() {
    assert_eq!(unread_badge_label(0), None);
    assert_eq!(unread_badge_label(7).as_deref(), Some("7"));
    assert_eq!(unread_badge_label(99).as_deref(), Some("99"));
    assert_eq!(unread_badge_label(100).as_deref(), Some("99+"));
}
