use super::*;

// =============================================================
// MemoryStore
// =============================================================

#[test]
fn memory_store_get_missing_key_is_none() {
    let store = MemoryStore::new();
    assert_eq!(store.get("token"), Ok(None));
}

#[test]
fn memory_store_set_then_get_returns_value() {
    let store = MemoryStore::new();
    store.set("token", "abc").unwrap();
    assert_eq!(store.get("token"), Ok(Some("abc".to_owned())));
}

#[test]
fn memory_store_remove_absent_key_succeeds() {
    let store = MemoryStore::with_entries([("a", "1")]);
    assert_eq!(store.remove("b"), Ok(()));
    store.remove("a").unwrap();
    assert!(store.is_empty());
}

#[test]
fn memory_store_failing_mode_rejects_everything() {
    let store = MemoryStore::with_entries([("token", "abc")]);
    store.set_failing(true);
    assert_eq!(store.get("token"), Err(StorageError::Unavailable));
    assert_eq!(store.set("token", "x"), Err(StorageError::Unavailable));
    assert_eq!(store.remove("token"), Err(StorageError::Unavailable));

    store.set_failing(false);
    assert_eq!(store.get("token"), Ok(Some("abc".to_owned())));
}

#[test]
fn memory_store_failing_writes_only_affect_named_key() {
    let store = MemoryStore::new();
    store.fail_writes_to("user");
    assert!(matches!(store.set("user", "{}"), Err(StorageError::Access(_))));
    assert_eq!(store.set("token", "abc"), Ok(()));
    assert!(!store.contains("user"));
}

#[test]
fn store_is_usable_through_a_reference() {
    let store = MemoryStore::new();
    let by_ref = &store;
    by_ref.set("k", "v").unwrap();
    assert_eq!(store.get("k"), Ok(Some("v".to_owned())));
}

// =============================================================
// JSON helpers
// =============================================================

#[test]
fn save_json_then_load_json_returns_value() {
    let store = MemoryStore::new();
    save_json(&store, "cart", &vec![3_u64, 7, 3]).unwrap();
    assert_eq!(store.get("cart"), Ok(Some("[3,7,3]".to_owned())));
    assert_eq!(load_json::<Vec<u64>>(&store, "cart"), Some(vec![3, 7, 3]));
}

#[test]
fn load_json_malformed_value_is_none() {
    let store = MemoryStore::with_entries([("cart", "not json")]);
    assert_eq!(load_json::<Vec<u64>>(&store, "cart"), None);
}

#[test]
fn load_json_storage_failure_is_none() {
    let store = MemoryStore::with_entries([("cart", "[1]")]);
    store.set_failing(true);
    assert_eq!(load_json::<Vec<u64>>(&store, "cart"), None);
}

#[test]
fn save_json_propagates_write_failure() {
    let store = MemoryStore::new();
    store.set_failing(true);
    assert_eq!(save_json(&store, "cart", &[1_u64]), Err(StorageError::Unavailable));
}

// =============================================================
// LocalStorage outside the browser
// =============================================================

#[cfg(not(feature = "csr"))]
#[test]
fn local_storage_is_unavailable_without_browser() {
    assert_eq!(LocalStorage::open().unwrap_err(), StorageError::Unavailable);
}
