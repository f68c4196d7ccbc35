//! In-memory workout collection keyed by canonical workout name
//!
//! Pure collection logic with no I/O; [`crate::Tracker`] loads it from and
//! writes it back to the key-value backend as one document.

use serde::{Deserialize, Serialize};
use shared::{SharedError, SharedResult, Workout};

/// Ordered workouts, unique by canonical name
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct WorkoutCollection {
    workouts: Vec<Workout>,
}

/// What an upsert did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UpsertOutcome {
    Inserted,
    Replaced,
}

impl WorkoutCollection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build from a sequence, keeping the first workout for each canonical name
    pub fn from_workouts(workouts: Vec<Workout>) -> Self {
        let mut collection = Self::new();
        for workout in workouts {
            if collection.find_by_name(workout.name()).is_none() {
                collection.workouts.push(workout);
            }
        }
        collection
    }

    /// Build from a sequence, rejecting it if two workouts share a canonical name
    pub fn try_from_workouts(workouts: Vec<Workout>) -> SharedResult<Self> {
        let mut collection = Self::new();
        for workout in workouts {
            if collection.find_by_name(workout.name()).is_some() {
                return Err(SharedError::DuplicateName {
                    name: workout.name().to_string(),
                });
            }
            collection.workouts.push(workout);
        }
        Ok(collection)
    }

    pub fn as_slice(&self) -> &[Workout] {
        &self.workouts
    }

    pub fn iter(&self) -> impl Iterator<Item = &Workout> {
        self.workouts.iter()
    }

    pub fn len(&self) -> usize {
        self.workouts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.workouts.is_empty()
    }

    pub fn find_by_name(&self, name: &str) -> Option<&Workout> {
        self.workouts.iter().find(|w| w.matches(name))
    }

    pub fn find_by_name_mut(&mut self, name: &str) -> Option<&mut Workout> {
        self.workouts.iter_mut().find(|w| w.matches(name))
    }

    /// Replace the workout with the same name in place, or append
    ///
    /// Scheduled days of the replaced copy are merged into the new one, so
    /// editing a workout never drops it from the calendar.
    pub fn upsert(&mut self, mut workout: Workout) -> UpsertOutcome {
        match self.workouts.iter().position(|w| w.matches(workout.name())) {
            Some(index) => {
                workout.merge_schedule(&self.workouts[index]);
                self.workouts[index] = workout;
                UpsertOutcome::Replaced
            }
            None => {
                self.workouts.push(workout);
                UpsertOutcome::Inserted
            }
        }
    }

    /// Remove by canonical name; absent names are a no-op
    pub fn remove_by_name(&mut self, name: &str) -> Option<Workout> {
        let index = self.workouts.iter().position(|w| w.matches(name))?;
        Some(self.workouts.remove(index))
    }

    pub fn into_vec(self) -> Vec<Workout> {
        self.workouts
    }
}
