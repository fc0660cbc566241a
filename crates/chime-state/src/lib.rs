//! CHIME State - device-local mutable state
//!
//! This crate holds everything the tick loop owns and mutates:
//! - Zone table (fixed at startup) and the zone selector
//! - Button latch and debounce state machine
//! - Alarm table with wholesale-replacement semantics

pub mod alarms;
pub mod button;
pub mod zones;

pub use alarms::*;
pub use button::*;
pub use zones::*;
