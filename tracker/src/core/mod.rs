//! Core business logic modules
//!
//! Pure domain logic with no I/O dependencies: the recommendation engine,
//! the workout collection, the schedule index and the body-weight history.

pub mod body_weight;
pub mod engine;
pub mod schedule;
pub mod workouts;

pub use body_weight::BodyWeightLog;
pub use engine::{EngineConfig, RecommendationEngine, DEFAULT_TARGET_REPS, EPLEY_COEFFICIENT};
pub use schedule::{AssignOutcome, ScheduleIndex};
pub use workouts::{UpsertOutcome, WorkoutCollection};
