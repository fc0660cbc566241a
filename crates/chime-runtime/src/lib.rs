//! CHIME Runtime - the device tick loop
//!
//! This crate assembles the engine components into a running device:
//! - `Device`: single-threaded cooperative tick loop over clock, zone
//!   selector, alarm table, and sync handler
//! - `evaluate`: the per-tick render/alarm-match step
//! - `driver`: async loop that schedules ticks and moves messages and
//!   intents across the collaborator seam

pub mod device;
pub mod driver;
pub mod evaluate;

pub use device::*;
pub use driver::*;
pub use evaluate::*;
