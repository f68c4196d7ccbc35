//! Common test utilities and infrastructure
//!
//! Shared fixtures and builder helpers used across the tracker test suites.
#![allow(dead_code)]

pub mod fixtures;
pub mod helpers;

pub use fixtures::TestFixtures;
pub use helpers::{TestHelpers, TrackerBuilder};
