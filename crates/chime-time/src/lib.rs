//! CHIME Time - the authoritative device clock
//!
//! This crate implements the epoch clock:
//! - Monotonic advance between syncs, driven by a real-time tick source
//! - Discontinuous jumps (forward or backward) only via time-sync
//! - Pure reads for the evaluator

pub mod clock;

pub use clock::*;
