use super::*;
use crate::util::storage::MemoryStore;

// =============================================================
// Helpers
// =============================================================

fn make_profile() -> Profile {
    Profile {
        user_id: Some("1".to_owned()),
        full_name: Some("Asha Rao".to_owned()),
        email: Some("asha@example.com".to_owned()),
        ..Profile::default()
    }
}

const PROFILE_JSON: &str = r#"{"user_id":1,"full_name":"Asha Rao","email":"asha@example.com"}"#;

// =============================================================
// is_authenticated
// =============================================================

#[test]
fn is_authenticated_requires_both_keys_non_empty() {
    let cases: [(&[(&str, &str)], bool); 7] = [
        (&[], false),
        (&[("token", "t-1")], false),
        (&[("user", PROFILE_JSON)], false),
        (&[("token", ""), ("user", PROFILE_JSON)], false),
        (&[("token", "t-1"), ("user", "")], false),
        (&[("token", ""), ("user", "")], false),
        (&[("token", "t-1"), ("user", PROFILE_JSON)], true),
    ];
    for (entries, expected) in cases {
        let session = SessionStore::new(MemoryStore::with_entries(entries.iter().copied()));
        assert_eq!(session.is_authenticated(), expected, "entries: {entries:?}");
    }
}

#[test]
fn is_authenticated_is_false_when_storage_fails() {
    let store = MemoryStore::with_entries([("token", "t-1"), ("user", PROFILE_JSON)]);
    store.set_failing(true);
    assert!(!SessionStore::new(&store).is_authenticated());
}

// =============================================================
// user / try_user
// =============================================================

#[test]
fn user_decodes_stored_profile() {
    let session = SessionStore::new(MemoryStore::with_entries([("user", PROFILE_JSON)]));
    assert_eq!(session.user(), Some(make_profile()));
}

#[test]
fn user_is_none_when_absent() {
    let session = SessionStore::new(MemoryStore::new());
    assert_eq!(session.try_user(), Ok(None));
    assert_eq!(session.user(), None);
}

#[test]
fn corrupt_profile_fails_closed() {
    let session = SessionStore::new(MemoryStore::with_entries([("token", "t-1"), ("user", "{not json")]));
    assert!(matches!(session.try_user(), Err(SessionError::CorruptProfile(_))));
    assert_eq!(session.user(), None);
    assert!(session.is_authenticated());
    assert!(!session.has_valid_session());
}

#[test]
fn try_user_surfaces_storage_errors() {
    let store = MemoryStore::with_entries([("user", PROFILE_JSON)]);
    store.set_failing(true);
    let session = SessionStore::new(&store);
    assert_eq!(session.try_user(), Err(SessionError::Storage(StorageError::Unavailable)));
}

// =============================================================
// set_auth
// =============================================================

#[test]
fn set_auth_writes_token_and_profile() {
    let session = SessionStore::new(MemoryStore::new());
    session.set_auth("t-1", &make_profile()).unwrap();
    assert_eq!(session.token().as_deref(), Some("t-1"));
    assert_eq!(session.user(), Some(make_profile()));
    assert!(session.has_valid_session());
}

#[test]
fn set_auth_rolls_back_token_when_profile_write_fails() {
    let store = MemoryStore::new();
    store.fail_writes_to(USER_KEY);
    let session = SessionStore::new(&store);

    let result = session.set_auth("t-1", &make_profile());

    assert!(matches!(result, Err(SessionError::Storage(StorageError::Access(_)))));
    assert!(!store.contains(TOKEN_KEY));
    assert!(!store.contains(USER_KEY));
    assert!(!session.is_authenticated());
}

#[test]
fn set_auth_rejects_empty_token() {
    let store = MemoryStore::new();
    let session = SessionStore::new(&store);
    assert_eq!(session.set_auth("", &make_profile()), Err(SessionError::EmptyToken));
    assert!(store.is_empty());
}

// =============================================================
// clear_auth
// =============================================================

#[test]
fn clear_auth_removes_token_user_and_cart_together() {
    let store = MemoryStore::with_entries([
        ("token", "t-1"),
        ("user", PROFILE_JSON),
        ("cart", "[3,7,3]"),
        ("theme", "dark"),
    ]);
    SessionStore::new(&store).clear_auth().unwrap();
    assert!(!store.contains(TOKEN_KEY));
    assert!(!store.contains(USER_KEY));
    assert!(!store.contains(CART_KEY));
    assert!(store.contains("theme"));
}

#[test]
fn clear_auth_reports_storage_failure() {
    let store = MemoryStore::with_entries([("token", "t-1")]);
    store.set_failing(true);
    assert_eq!(SessionStore::new(&store).clear_auth(), Err(StorageError::Unavailable));
}
