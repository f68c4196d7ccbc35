//! Service-specific tests
//!
//! Each backend has its own test file; shared helpers live in `common`.

#[cfg(test)]
mod memory_store;

#[cfg(test)]
pub mod common {
    use chrono::NaiveDate;
    use shared::{Exercise, TrainingSet, Workout};

    /// Serialized one-workout collection used as a backend payload
    pub fn sample_workouts_json() -> String {
        let mut workout = Workout::new(
            "Leg Day",
            "Strength",
            vec![Exercise::new("squat", vec![TrainingSet::new(100.0, 8, 2).unwrap()]).unwrap()],
        )
        .unwrap();
        workout.assign_day(NaiveDate::from_ymd_opt(2024, 1, 1).unwrap());
        serde_json::to_string(&vec![workout]).unwrap()
    }
}
