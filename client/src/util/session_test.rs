use super::*;
use crate::net::types::Role;

#[test]
fn parse_user_blob_reads_plain_user() {
    let user = parse_user_blob(r#"{"id":"u1","name":"Dana","role":"admin"}"#).unwrap();
    assert_eq!(user.id, "u1");
    assert_eq!(user.role, Role::Admin);
}

#[test]
fn parse_user_blob_unwraps_user_envelope() {
    let user = parse_user_blob(r#"{"token":"t","user":{"_id":9,"name":"Sam","role":"coach"}}"#).unwrap();
    assert_eq!(user.id, "9");
    assert_eq!(user.role, Role::Coach);
}

#[test]
fn parse_user_blob_rejects_garbage() {
    assert!(parse_user_blob("not json").is_none());
    assert!(parse_user_blob(r#"{"name":"no id"}"#).is_none());
    assert!(parse_user_blob("null").is_none());
}

#[cfg(not(feature = "hydrate"))]
#[test]
fn storage_is_empty_outside_browser() {
    save_raw(USER_KEY, r#"{"id":"u1","name":"x"}"#);
    assert!(load_raw(USER_KEY).is_none());
    assert!(load_user().is_none());
}
