//! CHIME Core - Fundamental types and primitives
//!
//! This crate defines the core types used throughout the CHIME clock engine:
//! - Time zones and signed UTC offsets
//! - Local time-of-day derivation from an epoch
//! - Alarm value types and time-string parsing
//! - Device and zone configuration
//! - Outbound intents (render, sound, publish)
//! - Error taxonomy

pub mod alarm;
pub mod config;
pub mod error;
pub mod intent;
pub mod time;
pub mod zone;

pub use alarm::*;
pub use config::*;
pub use error::*;
pub use intent::*;
pub use time::*;
pub use zone::*;
