//! Schedule index: calendar dates to the workouts assigned on them
//!
//! The per-workout `assignedDays` sets are the source of truth. The index and
//! its "has assignment" markers are always rebuilt from them, never edited on
//! their own.

use std::collections::BTreeMap;

use chrono::NaiveDate;
use shared::Workout;

use super::workouts::WorkoutCollection;

/// Result of an assign request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AssignOutcome {
    Assigned,
    AlreadyAssigned,
    /// No workout by that name; nothing changed
    UnknownWorkout,
}

impl AssignOutcome {
    pub fn changed(self) -> bool {
        matches!(self, AssignOutcome::Assigned)
    }
}

/// Derived view from date to workout names in store order
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ScheduleIndex {
    days: BTreeMap<NaiveDate, Vec<String>>,
}

impl ScheduleIndex {
    pub fn build(workouts: &WorkoutCollection) -> Self {
        let mut days: BTreeMap<NaiveDate, Vec<String>> = BTreeMap::new();
        for workout in workouts.iter() {
            for date in workout.assigned_days() {
                days.entry(*date).or_default().push(workout.name().to_string());
            }
        }
        Self { days }
    }

    /// Names of the workouts on `date`, empty when unassigned
    pub fn names_on(&self, date: NaiveDate) -> &[String] {
        self.days.get(&date).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn has_assignment(&self, date: NaiveDate) -> bool {
        self.days.contains_key(&date)
    }

    /// Calendar highlight markers; only assigned dates appear
    pub fn markers(&self) -> BTreeMap<NaiveDate, bool> {
        self.days.keys().map(|date| (*date, true)).collect()
    }

    pub fn assigned_dates(&self) -> impl Iterator<Item = NaiveDate> + '_ {
        self.days.keys().copied()
    }
}

/// Schedule `name` on `date`; idempotent, and a no-op for unknown workouts
pub fn assign(workouts: &mut WorkoutCollection, name: &str, date: NaiveDate) -> AssignOutcome {
    let Some(workout) = workouts.find_by_name_mut(name) else {
        return AssignOutcome::UnknownWorkout;
    };
    if workout.assign_day(date) {
        AssignOutcome::Assigned
    } else {
        AssignOutcome::AlreadyAssigned
    }
}

/// Remove `date` from the workout's schedule; returns whether anything changed
pub fn unassign(workouts: &mut WorkoutCollection, name: &str, date: NaiveDate) -> bool {
    workouts
        .find_by_name_mut(name)
        .map(|workout| workout.unassign_day(date))
        .unwrap_or(false)
}

/// Every workout assigned on `date`, in store order
pub fn workouts_on(workouts: &WorkoutCollection, date: NaiveDate) -> Vec<&Workout> {
    workouts.iter().filter(|w| w.is_assigned(date)).collect()
}

/// The first workout assigned on `date` in store order
///
/// Single-workout flows consume only this one even when several share the day.
pub fn first_workout_on(workouts: &WorkoutCollection, date: NaiveDate) -> Option<&Workout> {
    workouts.iter().find(|w| w.is_assigned(date))
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::Exercise;

    fn day(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 3, d).unwrap()
    }

    fn collection(names: &[&str]) -> WorkoutCollection {
        WorkoutCollection::from_workouts(
            names
                .iter()
                .map(|name| {
                    Workout::new(name, "Strength", vec![Exercise::new("squat", vec![]).unwrap()]).unwrap()
                })
                .collect(),
        )
    }

    #[test]
    fn test_assign_is_idempotent() {
        let mut workouts = collection(&["Leg Day"]);
        assert_eq!(assign(&mut workouts, "Leg Day", day(1)), AssignOutcome::Assigned);
        let once: Vec<String> = workouts_on(&workouts, day(1)).iter().map(|w| w.name().to_string()).collect();

        assert_eq!(assign(&mut workouts, "leg day", day(1)), AssignOutcome::AlreadyAssigned);
        let twice: Vec<String> = workouts_on(&workouts, day(1)).iter().map(|w| w.name().to_string()).collect();
        assert_eq!(once, twice);
        assert_eq!(twice, vec!["Leg Day".to_string()]);
    }

    #[test]
    fn test_assign_unknown_workout_is_ignored() {
        let mut workouts = collection(&["Leg Day"]);
        assert_eq!(assign(&mut workouts, "Pull", day(1)), AssignOutcome::UnknownWorkout);
        assert!(!ScheduleIndex::build(&workouts).has_assignment(day(1)));
    }

    #[test]
    fn test_unassign_last_workout_clears_marker() {
        let mut workouts = collection(&["Leg Day", "Push"]);
        assign(&mut workouts, "Leg Day", day(1));
        assign(&mut workouts, "Push", day(1));

        assert!(unassign(&mut workouts, "Leg Day", day(1)));
        let index = ScheduleIndex::build(&workouts);
        assert!(index.has_assignment(day(1)));
        assert_eq!(index.names_on(day(1)), ["Push".to_string()]);

        assert!(unassign(&mut workouts, "Push", day(1)));
        assert!(!unassign(&mut workouts, "Push", day(1)));
        let index = ScheduleIndex::build(&workouts);
        assert!(!index.has_assignment(day(1)));
        assert!(index.names_on(day(1)).is_empty());
        assert!(index.markers().is_empty());
    }

    #[test]
    fn test_first_workout_follows_store_order() {
        let mut workouts = collection(&["Push", "Pull", "Legs"]);
        assign(&mut workouts, "Legs", day(2));
        assign(&mut workouts, "Pull", day(2));

        assert_eq!(workouts_on(&workouts, day(2)).len(), 2);
        assert_eq!(first_workout_on(&workouts, day(2)).unwrap().name(), "Pull");
        assert!(first_workout_on(&workouts, day(3)).is_none());
    }

    #[test]
    fn test_markers_cover_every_assigned_date() {
        let mut workouts = collection(&["Push", "Pull"]);
        assign(&mut workouts, "Push", day(1));
        assign(&mut workouts, "Pull", day(4));
        assign(&mut workouts, "Push", day(4));

        let markers = ScheduleIndex::build(&workouts).markers();
        assert_eq!(markers.len(), 2);
        assert_eq!(markers.get(&day(1)), Some(&true));
        assert_eq!(markers.get(&day(4)), Some(&true));
        assert_eq!(markers.get(&day(2)), None);
    }
}
