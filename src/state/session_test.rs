use std::sync::Arc;
use std::sync::atomic::{AtomicBool, AtomicU32, Ordering};

use super::*;
use crate::storage::MemoryStore;

fn session(token: &str) -> Session {
    Session {
        access_token: token.to_owned(),
        refresh_token: format!("{token}-refresh"),
    }
}

fn profile(id: i64, role: &str) -> Profile {
    Profile {
        id,
        full_name: "Ada Admin".to_owned(),
        email: "ada@acme.test".to_owned(),
        phone: "555-0100".to_owned(),
        role: role.to_owned(),
    }
}

// =============================================================
// Joint nullity
// =============================================================

#[test]
fn starts_signed_out_on_empty_store() {
    let state = SessionState::new(Arc::new(MemoryStore::new()));
    assert_eq!(state.current(), None);
    assert!(!state.is_authenticated());
}

#[test]
fn set_then_clear_keeps_session_and_profile_joint() {
    let state = SessionState::new(Arc::new(MemoryStore::new()));

    state.set(session("t1"), profile(1, "ADMIN"));
    assert_eq!(state.session().is_some(), state.profile().is_some());
    assert!(state.is_authenticated());

    state.clear();
    assert_eq!(state.session(), None);
    assert_eq!(state.profile(), None);
}

#[test]
fn clear_is_idempotent() {
    let state = SessionState::new(Arc::new(MemoryStore::new()));
    state.set(session("t1"), profile(1, "ADMIN"));
    state.clear();
    state.clear();
    assert_eq!(state.current(), None);
}

// =============================================================
// Rehydration
// =============================================================

#[test]
fn rehydrates_identically_after_reload() {
    let store = Arc::new(MemoryStore::new());
    let state = SessionState::new(Arc::clone(&store) as Arc<dyn SlotStore>);
    state.set(session("t1"), profile(7, "MANAGER"));

    // Fresh state over the same store simulates a page reload.
    let reloaded = SessionState::new(store as Arc<dyn SlotStore>);
    assert_eq!(
        reloaded.current(),
        Some((session("t1"), profile(7, "MANAGER")))
    );
}

#[test]
fn corrupt_session_slot_fails_open_to_signed_out() {
    let store = Arc::new(MemoryStore::new());
    let seeded = SessionState::new(Arc::clone(&store) as Arc<dyn SlotStore>);
    seeded.set(session("t1"), profile(1, "ADMIN"));

    // Damage only the session slot; the profile slot stays well-formed.
    store.write(Slot::Session, "{not json");

    let reloaded = SessionState::new(Arc::clone(&store) as Arc<dyn SlotStore>);
    assert_eq!(reloaded.current(), None);
    // The inconsistent mirror is reset too.
    assert_eq!(store.read(Slot::Profile), None);
}

#[test]
fn lone_profile_slot_fails_open_to_signed_out() {
    let store = Arc::new(MemoryStore::new());
    store.write(
        Slot::Profile,
        &serde_json::to_string(&profile(1, "ADMIN")).unwrap(),
    );

    let state = SessionState::new(store as Arc<dyn SlotStore>);
    assert_eq!(state.current(), None);
}

#[test]
fn persisted_slots_use_camel_case_wire_format() {
    let store = Arc::new(MemoryStore::new());
    let state = SessionState::new(Arc::clone(&store) as Arc<dyn SlotStore>);
    state.set(session("t1"), profile(1, "ADMIN"));

    let raw = store.read(Slot::Session).unwrap();
    assert!(raw.contains("\"accessToken\":\"t1\""));
    let raw = store.read(Slot::Profile).unwrap();
    assert!(raw.contains("\"fullName\":\"Ada Admin\""));
}

// =============================================================
// Subscriptions
// =============================================================

#[test]
fn subscribers_fire_on_set_and_clear() {
    let state = SessionState::new(Arc::new(MemoryStore::new()));
    let fired = Arc::new(AtomicU32::new(0));

    let fired_in = Arc::clone(&fired);
    let id = state.subscribe(move || {
        fired_in.fetch_add(1, Ordering::SeqCst);
    });

    state.set(session("t1"), profile(1, "ADMIN"));
    state.clear();
    assert_eq!(fired.load(Ordering::SeqCst), 2);

    state.unsubscribe(id);
    state.set(session("t2"), profile(2, "EMPLOYEE"));
    assert_eq!(fired.load(Ordering::SeqCst), 2);
}

#[test]
fn subscriber_observes_the_new_state() {
    let state = SessionState::new(Arc::new(MemoryStore::new()));
    let seen = Arc::new(AtomicBool::new(false));

    let state_in = state.clone();
    let seen_in = Arc::clone(&seen);
    state.subscribe(move || seen_in.store(state_in.is_authenticated(), Ordering::SeqCst));

    state.set(session("t1"), profile(1, "ADMIN"));
    assert!(seen.load(Ordering::SeqCst));
}
