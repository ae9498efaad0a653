use super::*;

// =============================================================
// MemoryStore slot semantics
// =============================================================

#[test]
fn missing_slot_reads_absent() {
    let store = MemoryStore::new();
    assert_eq!(store.read(Slot::Session), None);
    assert_eq!(store.read(Slot::Profile), None);
}

#[test]
fn write_then_read_round_trips_per_slot() {
    let store = MemoryStore::new();
    store.write(Slot::Session, "s-value");
    store.write(Slot::Profile, "p-value");
    assert_eq!(store.read(Slot::Session).as_deref(), Some("s-value"));
    assert_eq!(store.read(Slot::Profile).as_deref(), Some("p-value"));
}

#[test]
fn clear_removes_only_the_named_slot() {
    let store = MemoryStore::new();
    store.write(Slot::Session, "s");
    store.write(Slot::Profile, "p");
    store.clear(Slot::Session);
    assert_eq!(store.read(Slot::Session), None);
    assert_eq!(store.read(Slot::Profile).as_deref(), Some("p"));
}

#[test]
fn clear_of_missing_slot_is_a_no_op() {
    let store = MemoryStore::new();
    store.clear(Slot::Profile);
    assert_eq!(store.read(Slot::Profile), None);
}

#[test]
fn slot_keys_are_distinct() {
    assert_ne!(Slot::Session.key(), Slot::Profile.key());
}

// LocalStorageStore has no browser here; it must degrade to absence.
#[test]
fn local_storage_store_is_absent_off_browser() {
    let store = LocalStorageStore::new();
    store.write(Slot::Session, "ignored");
    assert_eq!(store.read(Slot::Session), None);
}
