//! Workout tracker library
//!
//! Tracks resistance-training workouts and recommends the next training
//! weight for an exercise from the reps and reps-in-reserve just achieved.
//! Presentation layers drive it through [`Tracker`], injecting a key-value
//! backend and a clock.

pub mod config;
pub mod core;
pub mod error;
pub mod services;
pub mod tracker;
pub mod traits;

// Re-export commonly used types
pub use config::TrackerConfig;
pub use core::{
    AssignOutcome, BodyWeightLog, EngineConfig, RecommendationEngine, ScheduleIndex, UpsertOutcome,
    WorkoutCollection,
};
pub use error::{TrackerError, TrackerResult};
pub use tracker::{Tracker, MARKERS_KEY, WEIGHTS_KEY, WORKOUTS_KEY};
pub use traits::{Clock, KeyValueStore, MockClock, MockKeyValueStore};
