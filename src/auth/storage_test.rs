use super::*;

// =============================================================
// MemoryStorage
// =============================================================

#[test]
fn memory_storage_starts_empty() {
    let storage = MemoryStorage::new();
    assert_eq!(storage.get(TOKEN_KEY), None);
}

#[test]
fn memory_storage_set_then_get() {
    let storage = MemoryStorage::new();
    storage.set(TOKEN_KEY, "abc123").unwrap();
    assert_eq!(storage.get(TOKEN_KEY).as_deref(), Some("abc123"));
}

#[test]
fn memory_storage_set_overwrites() {
    let storage = MemoryStorage::with_item(TOKEN_KEY, "old");
    storage.set(TOKEN_KEY, "new").unwrap();
    assert_eq!(storage.get(TOKEN_KEY).as_deref(), Some("new"));
}

#[test]
fn memory_storage_remove_is_idempotent() {
    let storage = MemoryStorage::with_item(TOKEN_KEY, "abc123");
    storage.remove(TOKEN_KEY);
    storage.remove(TOKEN_KEY);
    assert_eq!(storage.get(TOKEN_KEY), None);
}

#[test]
fn memory_storage_keys_are_independent() {
    let storage = MemoryStorage::with_item("other", "x");
    storage.set(TOKEN_KEY, "abc123").unwrap();
    storage.remove("other");
    assert_eq!(storage.get(TOKEN_KEY).as_deref(), Some("abc123"));
}

// =============================================================
// LocalStorage outside the browser
// =============================================================

#[cfg(not(feature = "hydrate"))]
#[test]
fn local_storage_refuses_writes_without_browser() {
    let storage = LocalStorage;
    let err = storage.set(TOKEN_KEY, "abc123").unwrap_err();
    assert!(matches!(err, AuthError::Storage(ref msg) if msg == "localStorage unavailable"));
    assert_eq!(storage.get(TOKEN_KEY), None);
    storage.remove(TOKEN_KEY);
}
