//! Tests for the in-memory key-value store

use super::common::sample_workouts_json;
use crate::services::memory_store::MemoryStore;
use crate::traits::KeyValueStore;

#[test]
fn test_get_observes_latest_set() {
    let mut store = MemoryStore::new();
    assert!(store.get("workouts").unwrap().is_none());

    let payload = sample_workouts_json();
    store.set("workouts", &payload).unwrap();
    assert_eq!(store.get("workouts").unwrap(), Some(payload));

    store.set("workouts", "[]").unwrap();
    assert_eq!(store.raw("workouts"), Some("[]"));
}

#[test]
fn test_seeded_values() {
    let store = MemoryStore::new().with_value("weights", "not json");
    assert_eq!(store.get("weights").unwrap().as_deref(), Some("not json"));
    assert!(store.get("workouts").unwrap().is_none());
}
