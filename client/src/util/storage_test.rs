use super::*;

#[test]
fn memory_storage_set_get_remove() {
    let store = MemoryStorage::new();
    assert!(store.get("k").is_none());
    store.set("k", "v1");
    store.set("k", "v2");
    assert_eq!(store.get("k").as_deref(), Some("v2"));
    store.remove("k");
    assert!(store.get("k").is_none());
}

#[test]
fn memory_storage_remove_missing_is_noop() {
    let store = MemoryStorage::new();
    store.remove("absent");
    assert!(store.get("absent").is_none());
}

#[cfg(not(feature = "hydrate"))]
#[test]
fn browser_storage_is_inert_off_wasm() {
    for store in [BrowserStorage::local(), BrowserStorage::session()] {
        store.set("k", "v");
        assert!(store.get("k").is_none());
        store.remove("k");
    }
}
