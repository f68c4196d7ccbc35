//! Shared types for the workout tracker
//!
//! Contains the domain model (sets, exercises, workouts, body-weight entries),
//! its validation errors, and the logging setup used by every crate.

pub mod errors;
pub mod logging;
pub mod types;

pub use errors::*;
pub use types::*;
