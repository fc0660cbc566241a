//! Channel labels for the sync protocol

use chime_core::{ChimeError, ChimeResult};

/// The three protocol channels
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Channel {
    /// Epoch override: `{"epoch": <uint32>}`
    TimeSync,
    /// Active zone selection: raw zone name string
    ZoneChange,
    /// Full alarm snapshot: `[{"time":"HH:MM","zone":"<name>"}, ...]`
    AlarmSync,
}

impl Channel {
    pub const ALL: [Channel; 3] = [Channel::TimeSync, Channel::ZoneChange, Channel::AlarmSync];

    /// Wire label for this channel
    pub fn as_str(self) -> &'static str {
        match self {
            Channel::TimeSync => "clock/sync",
            Channel::ZoneChange => "clock/zone",
            Channel::AlarmSync => "clock/alarms",
        }
    }

    /// Parse a wire label
    pub fn from_label(label: &str) -> ChimeResult<Self> {
        match label {
            "clock/sync" => Ok(Channel::TimeSync),
            "clock/zone" => Ok(Channel::ZoneChange),
            "clock/alarms" => Ok(Channel::AlarmSync),
            other => Err(ChimeError::UnknownChannel(other.to_string())),
        }
    }
}

impl std::fmt::Display for Channel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
