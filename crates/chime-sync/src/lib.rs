//! CHIME Sync - the state-update protocol
//!
//! This crate implements the three-channel sync protocol:
//! - Channel labels and payload codecs (JSON on the wire)
//! - Decode-and-apply paths for time-sync, zone-change, and alarm-sync
//! - The controller-side state model that produces snapshot and sync
//!   messages for a fleet of devices
//!
//! The three message kinds are deliberately independent: each is an
//! idempotent, order-free mutation, so any subsystem can re-sync on its
//! own after a transport reset without resending unrelated state.

pub mod channel;
pub mod controller;
pub mod handler;
pub mod message;

pub use channel::*;
pub use controller::*;
pub use handler::*;
pub use message::*;
