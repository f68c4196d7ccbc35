//! Workouts: named, typed, ordered exercise lists with their scheduled days

use std::collections::BTreeSet;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::exercise::Exercise;
use super::name::{canonical_name, require_name, same_name};
use crate::errors::{SharedError, SharedResult};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Workout {
    workout_name: String,
    #[serde(default)]
    workout_type: String,
    #[serde(default)]
    exercises: Vec<Exercise>,
    #[serde(default)]
    assigned_days: BTreeSet<NaiveDate>,
}

impl Workout {
    /// Create an unscheduled workout; requires a name and at least one exercise
    pub fn new(name: &str, workout_type: &str, exercises: Vec<Exercise>) -> SharedResult<Self> {
        let workout_name = require_name(name, "workoutName")?;
        if exercises.is_empty() {
            return Err(SharedError::NoExercises {
                workout: workout_name,
            });
        }

        Ok(Self {
            workout_name,
            workout_type: workout_type.trim().to_string(),
            exercises,
            assigned_days: BTreeSet::new(),
        })
    }

    /// Re-check a deserialized workout before it enters the store
    ///
    /// Requires a name and at least one exercise, validates every exercise,
    /// and canonicalizes exercise names.
    pub fn validated(mut self) -> SharedResult<Self> {
        self.workout_name = require_name(&self.workout_name, "workoutName")?;
        if self.exercises.is_empty() {
            return Err(SharedError::NoExercises {
                workout: self.workout_name,
            });
        }
        self.workout_type = self.workout_type.trim().to_string();
        self.exercises = self
            .exercises
            .into_iter()
            .map(Exercise::validated)
            .collect::<SharedResult<Vec<_>>>()?;
        Ok(self)
    }

    /// Display name as entered
    pub fn name(&self) -> &str {
        &self.workout_name
    }

    /// Lookup key for this workout
    pub fn key(&self) -> String {
        canonical_name(&self.workout_name)
    }

    pub fn matches(&self, name: &str) -> bool {
        same_name(&self.workout_name, name)
    }

    pub fn workout_type(&self) -> &str {
        &self.workout_type
    }

    pub fn exercises(&self) -> &[Exercise] {
        &self.exercises
    }

    pub fn exercises_mut(&mut self) -> impl Iterator<Item = &mut Exercise> {
        self.exercises.iter_mut()
    }

    pub fn exercise(&self, name: &str) -> Option<&Exercise> {
        self.exercises.iter().find(|e| e.matches(name))
    }

    pub fn exercise_mut(&mut self, name: &str) -> Option<&mut Exercise> {
        self.exercises.iter_mut().find(|e| e.matches(name))
    }

    /// Add an exercise at the end, or replace the one with the same canonical name in place
    pub fn add_exercise(&mut self, exercise: Exercise) {
        match self.exercises.iter().position(|e| e.matches(exercise.name())) {
            Some(index) => self.exercises[index] = exercise,
            None => self.exercises.push(exercise),
        }
    }

    pub fn remove_exercise(&mut self, name: &str) -> Option<Exercise> {
        let index = self.exercises.iter().position(|e| e.matches(name))?;
        Some(self.exercises.remove(index))
    }

    /// Move the exercise at `from` so it ends up at `to`
    pub fn move_exercise(&mut self, from: usize, to: usize) -> SharedResult<()> {
        let len = self.exercises.len();
        for index in [from, to] {
            if index >= len {
                return Err(SharedError::IndexOutOfRange { index, len });
            }
        }
        let exercise = self.exercises.remove(from);
        self.exercises.insert(to, exercise);
        Ok(())
    }

    pub fn assigned_days(&self) -> &BTreeSet<NaiveDate> {
        &self.assigned_days
    }

    pub fn is_assigned(&self, date: NaiveDate) -> bool {
        self.assigned_days.contains(&date)
    }

    /// Returns false when the day was already assigned
    pub fn assign_day(&mut self, date: NaiveDate) -> bool {
        self.assigned_days.insert(date)
    }

    /// Returns false when the day was not assigned
    pub fn unassign_day(&mut self, date: NaiveDate) -> bool {
        self.assigned_days.remove(&date)
    }

    /// Carry another copy's scheduled days into this one
    pub fn merge_schedule(&mut self, previous: &Workout) {
        self.assigned_days.extend(previous.assigned_days.iter().copied());
    }

    /// Same workout under a new name, keeping exercises and schedule
    pub fn renamed(mut self, name: &str) -> SharedResult<Self> {
        self.workout_name = require_name(name, "workoutName")?;
        Ok(self)
    }
}
