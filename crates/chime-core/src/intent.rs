//! Outbound intents
//!
//! The engine never touches a display, buzzer, or broker directly. Each
//! tick it emits intents; the collaborators that own the hardware and the
//! transport decide how to execute them.

use std::time::Duration;

use crate::LocalTime;

/// An abstract outbound action requested by the engine
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Intent {
    /// Show the current local time and zone name
    Render { time: LocalTime, zone: String },
    /// Sound the buzzer for the given duration
    ///
    /// Emitted on every tick of a matching minute; de-duplication is the
    /// buzzer collaborator's call, not the engine's.
    SoundAlarm { duration: Duration },
    /// Publish the newly selected zone so other observers stay consistent
    PublishZone { zone: String },
}

impl Intent {
    /// True for intents that must reach the transport collaborator
    pub fn is_publish(&self) -> bool {
        matches!(self, Intent::PublishZone { .. })
    }
}
