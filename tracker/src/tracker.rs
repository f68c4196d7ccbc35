//! Tracker repository
//!
//! Owns the injected key-value backend and clock, caches the loaded
//! collections, and exposes every operation the presentation layer calls:
//! the workout store, the schedule index, the recommendation engine and the
//! body-weight log.
//!
//! Each mutation works on a copy of the cached collection, writes the whole
//! collection back, and only then replaces the cache, so a failed write never
//! leaves a half-applied change behind.

use std::collections::BTreeMap;

use chrono::NaiveDate;
use serde::de::DeserializeOwned;
use serde::Serialize;
use shared::{
    logging, tracker_debug, tracker_info, tracker_warn, BodyWeightEntry, Component, Exercise, Performance, TrainingSet, Workout,
};

use crate::core::{
    schedule, AssignOutcome, BodyWeightLog, RecommendationEngine, ScheduleIndex, UpsertOutcome, WorkoutCollection,
};
use crate::error::TrackerResult;
use crate::traits::{Clock, KeyValueStore};

/// Backend key of the workouts document
pub const WORKOUTS_KEY: &str = "workouts";
/// Backend key of the body-weight document
pub const WEIGHTS_KEY: &str = "weights";
/// Backend key of the derived date -> has-assignment marker cache
pub const MARKERS_KEY: &str = "assignedDays";

/// Workout tracker over an injected backend and clock
pub struct Tracker<S, C>
where
    S: KeyValueStore,
    C: Clock,
{
    store: S,
    clock: C,
    engine: RecommendationEngine,

    workouts: WorkoutCollection,
    weights: BodyWeightLog,
}

impl<S, C> Tracker<S, C>
where
    S: KeyValueStore,
    C: Clock,
{
    /// Create a tracker with the default engine and load persisted state
    pub fn new(store: S, clock: C) -> Self {
        Self::with_engine(store, clock, RecommendationEngine::default())
    }

    pub fn with_engine(store: S, clock: C, engine: RecommendationEngine) -> Self {
        let mut tracker = Self {
            store,
            clock,
            engine,
            workouts: WorkoutCollection::new(),
            weights: BodyWeightLog::new(),
        };
        tracker.reload();
        tracker
    }

    /// Re-read both collections from the backend
    ///
    /// Unreadable data is logged and replaced by an empty collection.
    pub fn reload(&mut self) {
        let workouts: Vec<Workout> = self.read_document(WORKOUTS_KEY, Component::Store);
        self.workouts = WorkoutCollection::from_workouts(valid_workouts(workouts));
        self.weights = self.read_weights();

        tracker_debug!(
            Component::Store,
            workouts = self.workouts.len(),
            weights = self.weights.len(),
            "Reloaded tracker state"
        );
    }

    pub fn engine(&self) -> &RecommendationEngine {
        &self.engine
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn today(&self) -> NaiveDate {
        self.clock.today()
    }

    // ------------------------------------------------------------------
    // Workout store
    // ------------------------------------------------------------------

    /// Fresh read of every workout from the backend
    pub fn load_all(&mut self) -> Vec<Workout> {
        self.reload();
        self.workouts.as_slice().to_vec()
    }

    /// Cached workouts as of the last load or write
    pub fn workouts(&self) -> &[Workout] {
        self.workouts.as_slice()
    }

    /// Overwrite the whole persisted collection
    ///
    /// Every workout is validated first; one bad record rejects the whole call.
    pub fn save_all(&mut self, workouts: Vec<Workout>) -> TrackerResult<()> {
        let workouts = workouts
            .into_iter()
            .map(Workout::validated)
            .collect::<Result<Vec<_>, _>>()?;
        let next = WorkoutCollection::try_from_workouts(workouts)?;
        self.commit_workouts(next)
    }

    /// Insert or replace by workout name, keeping the stored copy's scheduled days
    pub fn upsert(&mut self, workout: Workout) -> TrackerResult<UpsertOutcome> {
        let workout = workout.validated()?;
        let mut next = self.workouts.clone();
        let name = workout.name().to_string();
        let outcome = next.upsert(workout);
        self.commit_workouts(next)?;

        tracker_info!(Component::Store, "Saved workout '{}' ({:?})", name, outcome);
        Ok(outcome)
    }

    /// Delete by canonical name; this also drops it from every scheduled date
    pub fn remove_by_name(&mut self, name: &str) -> TrackerResult<Option<Workout>> {
        let mut next = self.workouts.clone();
        let Some(removed) = next.remove_by_name(name) else {
            return Ok(None);
        };
        self.commit_workouts(next)?;

        tracker_info!(Component::Store, "Removed workout '{}'", removed.name());
        Ok(Some(removed))
    }

    pub fn find_by_name(&self, name: &str) -> Option<&Workout> {
        self.workouts.find_by_name(name)
    }

    /// Rename a workout, carrying its exercises and schedule over
    ///
    /// Returns false when `old` does not exist. Renaming onto another
    /// workout's name is rejected.
    pub fn rename_workout(&mut self, old: &str, new: &str) -> TrackerResult<bool> {
        let mut next = self.workouts.clone();
        let Some(existing) = next.remove_by_name(old) else {
            return Ok(false);
        };
        let renamed = existing.renamed(new)?;
        if next.find_by_name(renamed.name()).is_some() {
            return Err(shared::SharedError::DuplicateName {
                name: renamed.name().to_string(),
            }
            .into());
        }
        next.upsert(renamed);
        self.commit_workouts(next)?;
        Ok(true)
    }

    /// Archive every exercise's plan into its history, stamped with `date`
    /// (today when absent). Returns how many sets were archived, or `None` if
    /// the workout does not exist.
    pub fn complete_workout(&mut self, name: &str, date: Option<NaiveDate>) -> TrackerResult<Option<usize>> {
        let date = date.unwrap_or_else(|| self.clock.today());
        let mut next = self.workouts.clone();
        let Some(workout) = next.find_by_name_mut(name) else {
            return Ok(None);
        };

        let archived: usize = workout.exercises_mut().map(|e| e.archive_plan(date)).sum();
        self.commit_workouts(next)?;

        tracker_info!(Component::Store, "Archived {} sets for '{}' on {}", archived, name, date);
        Ok(Some(archived))
    }

    /// Log one performed set against an exercise of a workout
    ///
    /// Returns false when the workout or exercise does not exist.
    pub fn log_set(
        &mut self,
        workout: &str,
        exercise: &str,
        set: TrainingSet,
        date: Option<NaiveDate>,
    ) -> TrackerResult<bool> {
        let date = date.unwrap_or_else(|| self.clock.today());
        let mut next = self.workouts.clone();
        let Some(target) = next.find_by_name_mut(workout).and_then(|w| w.exercise_mut(exercise)) else {
            return Ok(false);
        };

        target.log(set, date)?;
        self.commit_workouts(next)?;
        Ok(true)
    }

    // ------------------------------------------------------------------
    // Schedule index
    // ------------------------------------------------------------------

    /// Schedule a workout on a date; repeated and unknown-workout calls change nothing
    pub fn assign(&mut self, name: &str, date: NaiveDate) -> TrackerResult<AssignOutcome> {
        let mut next = self.workouts.clone();
        let outcome = schedule::assign(&mut next, name, date);
        match outcome {
            AssignOutcome::Assigned => {
                self.commit_workouts(next)?;
                tracker_info!(Component::Schedule, "Assigned '{}' to {}", name, date);
            }
            AssignOutcome::AlreadyAssigned => {}
            AssignOutcome::UnknownWorkout => {
                tracker_debug!(Component::Schedule, "Ignoring assignment of unknown workout '{}'", name);
            }
        }
        Ok(outcome)
    }

    /// Remove a workout from a date; the date's marker clears with its last workout
    pub fn unassign(&mut self, name: &str, date: NaiveDate) -> TrackerResult<bool> {
        let mut next = self.workouts.clone();
        if !schedule::unassign(&mut next, name, date) {
            return Ok(false);
        }
        self.commit_workouts(next)?;

        tracker_info!(Component::Schedule, "Unassigned '{}' from {}", name, date);
        Ok(true)
    }

    pub fn workouts_on(&self, date: NaiveDate) -> Vec<&Workout> {
        schedule::workouts_on(&self.workouts, date)
    }

    /// First workout (in store order) assigned to `date`
    pub fn workout_for_today(&self, date: NaiveDate) -> Option<&Workout> {
        schedule::first_workout_on(&self.workouts, date)
    }

    /// [`Self::workout_for_today`] for the clock's current date
    pub fn todays_workout(&self) -> Option<&Workout> {
        self.workout_for_today(self.clock.today())
    }

    pub fn schedule(&self) -> ScheduleIndex {
        ScheduleIndex::build(&self.workouts)
    }

    pub fn assigned_day_markers(&self) -> BTreeMap<NaiveDate, bool> {
        self.schedule().markers()
    }

    pub fn has_assignment(&self, date: NaiveDate) -> bool {
        self.workouts.iter().any(|w| w.is_assigned(date))
    }

    // ------------------------------------------------------------------
    // Recommendation engine
    // ------------------------------------------------------------------

    pub fn estimate_next_weight(
        &self,
        exercise: Option<&Exercise>,
        performance: Performance,
        current_weight: Option<f64>,
    ) -> f64 {
        self.engine.estimate_next_weight(exercise, performance, current_weight)
    }

    pub fn recommend_for_rep_range(
        &self,
        exercise: Option<&Exercise>,
        performance: Performance,
        current_weight: Option<f64>,
        target_reps: Option<u32>,
    ) -> f64 {
        self.engine
            .recommend_for_rep_range(exercise, performance, current_weight, target_reps)
    }

    /// Rep-range recommendation for an exercise looked up by workout and exercise name
    ///
    /// Unknown names fall back to `current_weight` (or the engine minimum).
    pub fn recommend_for(
        &self,
        workout: &str,
        exercise: &str,
        performance: Performance,
        current_weight: Option<f64>,
    ) -> f64 {
        let exercise = self.find_by_name(workout).and_then(|w| w.exercise(exercise));
        self.recommend_for_rep_range(exercise, performance, current_weight, None)
    }

    // ------------------------------------------------------------------
    // Body weight
    // ------------------------------------------------------------------

    pub fn log_body_weight(&mut self, entry: BodyWeightEntry) -> TrackerResult<()> {
        let mut next = self.weights.clone();
        next.append(entry);
        self.write_document(WEIGHTS_KEY, &next)?;
        self.weights = next;
        Ok(())
    }

    /// Fresh read of the body-weight history in logging order
    pub fn load_body_weight_history(&mut self) -> Vec<BodyWeightEntry> {
        self.weights = self.read_weights();
        self.weights.entries().to_vec()
    }

    // ------------------------------------------------------------------
    // Persistence
    // ------------------------------------------------------------------

    /// Persist `next` as the workouts document, then refresh the marker cache
    fn commit_workouts(&mut self, next: WorkoutCollection) -> TrackerResult<()> {
        self.write_document(WORKOUTS_KEY, &next)?;
        self.workouts = next;

        // The marker map is rebuilt from the workouts on every load, so a
        // failed cache write only costs a stale file.
        let markers = self.assigned_day_markers();
        if let Err(e) = self.write_document(MARKERS_KEY, &markers) {
            logging::log_error(Component::Schedule, "Refreshing assigned-day markers", &e);
        }
        Ok(())
    }

    fn read_document<T>(&self, key: &str, component: Component) -> T
    where
        T: DeserializeOwned + Default,
    {
        let text = match self.store.get(key) {
            Ok(Some(text)) => text,
            Ok(None) => return T::default(),
            Err(e) => {
                logging::log_error(component, &format!("Reading '{key}'"), &e);
                return T::default();
            }
        };
        if text.trim().is_empty() {
            return T::default();
        }

        match serde_json::from_str(&text) {
            Ok(value) => value,
            Err(e) => {
                logging::log_recovered(component, key, &e);
                T::default()
            }
        }
    }

    fn read_weights(&self) -> BodyWeightLog {
        let mut weights: BodyWeightLog = self.read_document(WEIGHTS_KEY, Component::Weights);
        let dropped = weights.retain_valid();
        if dropped > 0 {
            tracker_warn!(Component::Weights, dropped, "Skipping invalid body-weight entries");
        }
        weights
    }

    fn write_document<T: Serialize>(&mut self, key: &str, value: &T) -> TrackerResult<()> {
        let text = serde_json::to_string(value)?;
        self.store.set(key, &text)
    }
}

/// Drop persisted workouts that fail validation, keeping the rest
fn valid_workouts(workouts: Vec<Workout>) -> Vec<Workout> {
    workouts
        .into_iter()
        .filter_map(|workout| {
            let name = workout.name().to_string();
            match workout.validated() {
                Ok(workout) => Some(workout),
                Err(e) => {
                    tracker_warn!(Component::Store, "Skipping invalid workout '{}': {}", name, e);
                    None
                }
            }
        })
        .collect()
}
