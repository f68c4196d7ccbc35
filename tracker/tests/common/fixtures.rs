//! Test fixtures and data for tracker tests

use chrono::NaiveDate;
use shared::{Exercise, TrainingSet, Workout};

/// Standard test data and fixtures
pub struct TestFixtures;

impl TestFixtures {
    pub const LEG_DAY: &'static str = "Leg Day";
    pub const PUSH_DAY: &'static str = "Push Day";
    pub const PULL_DAY: &'static str = "Pull Day";

    /// Monday the fixtures treat as "today"
    pub const TODAY: &'static str = "2024-03-04";

    pub fn date(iso: &str) -> NaiveDate {
        shared::parse_date(iso).expect("valid fixture date")
    }

    pub fn today() -> NaiveDate {
        Self::date(Self::TODAY)
    }

    pub fn set(weight: f64, reps: u32, rir: u8) -> TrainingSet {
        TrainingSet::new(weight, reps, rir).expect("valid fixture set")
    }

    /// Planned 8 reps @ RIR 2, last performed at 100 for 8 @ 2
    pub fn squat_with_history() -> Exercise {
        let mut squat = Exercise::new("Squat", vec![Self::set(100.0, 8, 2), Self::set(100.0, 8, 2)]).unwrap();
        squat.log(Self::set(95.0, 8, 2), Self::date("2024-02-19")).unwrap();
        squat.log(Self::set(100.0, 8, 2), Self::date("2024-02-26")).unwrap();
        squat
    }

    pub fn leg_day() -> Workout {
        Workout::new(
            Self::LEG_DAY,
            "Strength",
            vec![
                Self::squat_with_history(),
                Exercise::new("Walking Lunge", vec![Self::set(20.0, 12, 2)]).unwrap(),
            ],
        )
        .unwrap()
    }

    pub fn push_day() -> Workout {
        Workout::new(
            Self::PUSH_DAY,
            "Hypertrophy",
            vec![
                Exercise::new("Bench Press", vec![Self::set(80.0, 10, 2)]).unwrap(),
                Exercise::new("Overhead Press", vec![Self::set(45.0, 10, 2)]).unwrap(),
            ],
        )
        .unwrap()
    }

    pub fn pull_day() -> Workout {
        Workout::new(
            Self::PULL_DAY,
            "Hypertrophy",
            vec![Exercise::new("Barbell Row", vec![Self::set(70.0, 10, 1)]).unwrap()],
        )
        .unwrap()
    }
}
