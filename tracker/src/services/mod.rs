//! Service implementations
//!
//! Real implementations of the collaborator traits: key-value backends and
//! clocks. These are the only parts of the crate that touch the outside world.

pub mod clock;
pub mod file_store;
pub mod memory_store;

#[cfg(test)]
mod tests;

pub use clock::{FixedClock, SystemClock};
pub use file_store::FileStore;
pub use memory_store::MemoryStore;
