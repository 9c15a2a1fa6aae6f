//! Validation utilities
//!
//! Walks a playlist through its public API to check the ring invariants.

mod structure;

pub use structure::validate_playlist;
