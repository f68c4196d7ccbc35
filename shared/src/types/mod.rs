//! Core domain types shared by the tracker crates

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::errors::SharedResult;

pub mod body_weight;
pub mod exercise;
pub mod name;
pub mod set;
pub mod workout;

pub use body_weight::BodyWeightEntry;
pub use exercise::Exercise;
pub use name::{canonical_name, parse_date, same_name, DATE_FORMAT};
pub use set::{SetDraft, TrainingSet, MAX_RIR};
pub use workout::Workout;

/// Subsystem that emitted a log event
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Component {
    Store,
    Schedule,
    Engine,
    Weights,
    Backend,
    Cli,
}

impl fmt::Display for Component {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Component::Store => write!(f, "store"),
            Component::Schedule => write!(f, "schedule"),
            Component::Engine => write!(f, "engine"),
            Component::Weights => write!(f, "weights"),
            Component::Backend => write!(f, "backend"),
            Component::Cli => write!(f, "cli"),
        }
    }
}

/// Reps and reserve reported for a just-performed set
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Performance {
    pub reps: u32,
    pub rir: u8,
}

impl Performance {
    pub fn new(reps: u32, rir: u8) -> Self {
        Self { reps, rir }
    }

    /// Checked constructor for caller-supplied input: reps > 0 and RIR within range
    pub fn try_new(reps: u32, rir: u8) -> SharedResult<Self> {
        set::validate_reps(reps)?;
        set::validate_rir(rir)?;
        Ok(Self::new(reps, rir))
    }

    /// Reps performed plus reps left in reserve, a proxy for reps to failure
    pub fn reps_to_failure(&self) -> u32 {
        self.reps.saturating_add(self.rir as u32)
    }
}
