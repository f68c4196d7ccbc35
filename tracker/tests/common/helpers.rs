//! Test helpers and builder patterns for tracker tests
//!
//! Reduce boilerplate when standing up a tracker over seeded in-memory state.

use chrono::NaiveDate;
use shared::Workout;
use tracker::services::{FixedClock, MemoryStore};
use tracker::{Clock, EngineConfig, KeyValueStore, RecommendationEngine, Tracker, MARKERS_KEY, WORKOUTS_KEY};

use super::fixtures::TestFixtures;

/// Builder for test trackers with sensible defaults
pub struct TrackerBuilder {
    store: MemoryStore,
    today: NaiveDate,
    workouts: Vec<Workout>,
    engine: EngineConfig,
}

impl TrackerBuilder {
    pub fn new() -> Self {
        Self {
            store: MemoryStore::new(),
            today: TestFixtures::today(),
            workouts: Vec::new(),
            engine: EngineConfig::default(),
        }
    }

    pub fn with_workout(mut self, workout: Workout) -> Self {
        self.workouts.push(workout);
        self
    }

    /// Seed a raw backend value, bypassing serialization
    pub fn with_raw(mut self, key: &str, value: &str) -> Self {
        self.store = self.store.with_value(key, value);
        self
    }

    pub fn on(mut self, today: NaiveDate) -> Self {
        self.today = today;
        self
    }

    pub fn with_engine(mut self, engine: EngineConfig) -> Self {
        self.engine = engine;
        self
    }

    pub fn build(self) -> Tracker<MemoryStore, FixedClock> {
        let mut store = self.store;
        if !self.workouts.is_empty() {
            let json = serde_json::to_string(&self.workouts).unwrap();
            store = store.with_value(WORKOUTS_KEY, &json);
        }
        Tracker::with_engine(store, FixedClock(self.today), RecommendationEngine::new(self.engine))
    }
}

/// Common assertions and shortcuts
pub struct TestHelpers;

impl TestHelpers {
    /// Tracker holding leg, push and pull days in that order
    pub fn standard_tracker() -> Tracker<MemoryStore, FixedClock> {
        TrackerBuilder::new()
            .with_workout(TestFixtures::leg_day())
            .with_workout(TestFixtures::push_day())
            .with_workout(TestFixtures::pull_day())
            .build()
    }

    pub fn names_on<S: KeyValueStore, C: Clock>(tracker: &Tracker<S, C>, date: NaiveDate) -> Vec<String> {
        tracker
            .workouts_on(date)
            .iter()
            .map(|w| w.name().to_string())
            .collect()
    }

    /// Parse the persisted marker cache of a memory-backed tracker
    pub fn persisted_markers(tracker: &Tracker<MemoryStore, FixedClock>) -> serde_json::Value {
        tracker
            .store()
            .raw(MARKERS_KEY)
            .map(|raw| serde_json::from_str(raw).unwrap())
            .unwrap_or(serde_json::Value::Null)
    }

    pub fn assert_marker<S: KeyValueStore, C: Clock>(tracker: &Tracker<S, C>, date: NaiveDate, expected: bool) {
        assert_eq!(tracker.has_assignment(date), expected, "has_assignment({date})");
        assert_eq!(
            tracker.assigned_day_markers().get(&date).copied().unwrap_or(false),
            expected,
            "marker for {date}"
        );
    }
}
