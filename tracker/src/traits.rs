//! Trait definitions with mockall annotations for testing
//!
//! These are the only collaborators the tracker consumes: a key-value
//! persistence capability and a calendar clock. Both are injected into
//! [`crate::Tracker`] so tests can run against mocks or in-memory doubles.

use chrono::NaiveDate;

use crate::error::TrackerResult;

/// Persisted key-value text storage
///
/// Each `set` replaces the whole value for its key. Implementations must make
/// a `get` after a `set` on the same key observe the new value.
#[mockall::automock]
pub trait KeyValueStore {
    /// Read the text stored under `key`, or `None` if nothing was written yet
    fn get(&self, key: &str) -> TrackerResult<Option<String>>;

    /// Overwrite the text stored under `key`
    fn set(&mut self, key: &str, value: &str) -> TrackerResult<()>;
}

/// Source of the current calendar date
#[mockall::automock]
pub trait Clock {
    fn today(&self) -> NaiveDate;
}
