//! Shared error types for the workout tracker
//!
//! Every variant here is a validation failure raised at the boundary, before
//! a value reaches the recommendation engine or the store.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum SharedError {
    #[error("Weight must be a positive number: {value}")]
    InvalidWeight { value: f64 },

    #[error("Reps must be at least 1: {value}")]
    InvalidReps { value: u32 },

    #[error("Reps in reserve must be between 0 and {max}: {value}")]
    InvalidRir { value: u8, max: u8 },

    #[error("Name cannot be empty: {field}")]
    EmptyName { field: String },

    #[error("Name is used more than once: {name}")]
    DuplicateName { name: String },

    #[error("Workout needs at least one exercise: {workout}")]
    NoExercises { workout: String },

    #[error("Invalid calendar date: {input}")]
    InvalidDate { input: String },

    #[error("Draft is missing a value: {field}")]
    IncompleteDraft { field: String },

    #[error("Index {index} out of range for {len} items")]
    IndexOutOfRange { index: usize, len: usize },
}

pub type SharedResult<T> = Result<T, SharedError>;
