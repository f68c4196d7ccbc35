//! Append-only body-weight history

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use shared::BodyWeightEntry;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BodyWeightLog {
    entries: Vec<BodyWeightEntry>,
}

impl BodyWeightLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Entries are never merged, even when they share a date
    pub fn append(&mut self, entry: BodyWeightEntry) {
        self.entries.push(entry);
    }

    /// All entries in the order they were logged
    pub fn entries(&self) -> &[BodyWeightEntry] {
        &self.entries
    }

    pub fn latest(&self) -> Option<&BodyWeightEntry> {
        self.entries.last()
    }

    pub fn on(&self, date: NaiveDate) -> Vec<&BodyWeightEntry> {
        self.entries.iter().filter(|e| e.date() == date).collect()
    }

    /// Drop entries that fail validation; returns how many were removed
    pub fn retain_valid(&mut self) -> usize {
        let before = self.entries.len();
        self.entries.retain(|e| e.validate().is_ok());
        before - self.entries.len()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
