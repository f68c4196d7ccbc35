//! Exercises: a planned prescription plus a dated performance history

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::name::{canonical_name, same_name};
use super::set::TrainingSet;
use crate::errors::{SharedError, SharedResult};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Exercise {
    /// Canonical (lowercased) name
    name: String,
    /// Current or next-session plan
    #[serde(default)]
    sets: Vec<TrainingSet>,
    /// Cached copy of `sets[0].rir`
    #[serde(default)]
    rir: u8,
    /// Dated history, append-mostly
    #[serde(default)]
    logs: Vec<TrainingSet>,
}

impl Exercise {
    /// Create an exercise with a (possibly empty) plan
    pub fn new(name: &str, sets: Vec<TrainingSet>) -> SharedResult<Self> {
        let name = canonical_name(name);
        if name.is_empty() {
            return Err(SharedError::EmptyName {
                field: "exercise name".to_string(),
            });
        }
        for set in &sets {
            set.validate()?;
        }

        let rir = sets.first().map(TrainingSet::rir).unwrap_or(0);
        Ok(Self {
            name,
            sets,
            rir,
            logs: Vec::new(),
        })
    }

    /// Attach existing history, e.g. when importing
    pub fn with_logs(mut self, logs: Vec<TrainingSet>) -> Self {
        self.logs = logs;
        self
    }

    /// Re-check a deserialized exercise: canonical name, valid sets and logs,
    /// and the cached RIR taken from the first planned set
    pub fn validated(mut self) -> SharedResult<Self> {
        self.name = canonical_name(&self.name);
        if self.name.is_empty() {
            return Err(SharedError::EmptyName {
                field: "exercise name".to_string(),
            });
        }
        for set in self.sets.iter().chain(self.logs.iter()) {
            set.validate()?;
        }
        self.rir = self.sets.first().map(TrainingSet::rir).unwrap_or(0);
        Ok(self)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn matches(&self, name: &str) -> bool {
        same_name(&self.name, name)
    }

    pub fn sets(&self) -> &[TrainingSet] {
        &self.sets
    }

    pub fn rir(&self) -> u8 {
        self.rir
    }

    pub fn logs(&self) -> &[TrainingSet] {
        &self.logs
    }

    /// The first planned set, which carries the session's rep/RIR target
    pub fn planned(&self) -> Option<&TrainingSet> {
        self.sets.first()
    }

    /// Most recent log by date; later entries win ties and undated entries sort first
    pub fn latest_log(&self) -> Option<&TrainingSet> {
        self.logs
            .iter()
            .enumerate()
            .max_by_key(|(position, set)| (set.date(), *position))
            .map(|(_, set)| set)
    }

    /// Replace the plan and refresh the cached RIR
    pub fn replace_plan(&mut self, sets: Vec<TrainingSet>) -> SharedResult<()> {
        for set in &sets {
            set.validate()?;
        }
        self.rir = sets.first().map(TrainingSet::rir).unwrap_or(0);
        self.sets = sets;
        Ok(())
    }

    pub fn add_set(&mut self, set: TrainingSet) -> SharedResult<()> {
        set.validate()?;
        if self.sets.is_empty() {
            self.rir = set.rir();
        }
        self.sets.push(set);
        Ok(())
    }

    /// Append one performed set to the history, stamped with `date`
    pub fn log(&mut self, set: TrainingSet, date: NaiveDate) -> SharedResult<()> {
        set.validate()?;
        self.logs.push(set.on(date));
        Ok(())
    }

    /// Copy every planned set into the history with `date`; returns how many were archived
    pub fn archive_plan(&mut self, date: NaiveDate) -> usize {
        let archived: Vec<TrainingSet> = self.sets.iter().cloned().map(|set| set.on(date)).collect();
        let count = archived.len();
        self.logs.extend(archived);
        count
    }
}
