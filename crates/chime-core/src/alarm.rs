//! Alarm value types
//!
//! Alarms bind to a zone by name, not by index, so an alarm stays valid
//! even if the zone table ordering changes. A dangling name is tolerated:
//! such an alarm simply never matches.

use crate::{ChimeError, ChimeResult, LocalTime};

/// A single alarm entry
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Alarm {
    /// Local hour, 0..=23
    pub hour: u8,
    /// Local minute, 0..=59
    pub minute: u8,
    /// Name of the zone the alarm is expressed in
    pub zone_name: String,
}

impl Alarm {
    /// Parse an `HH:MM` time string into an alarm for the given zone
    ///
    /// Malformed strings and out-of-range digits are rejected, never
    /// clamped: a bad entry must not reach the table.
    pub fn parse(time: &str, zone_name: impl Into<String>) -> ChimeResult<Self> {
        let bytes = time.as_bytes();
        if bytes.len() != 5 || bytes[2] != b':' {
            return Err(ChimeError::malformed_entry(time, "expected HH:MM"));
        }
        if !bytes[0].is_ascii_digit()
            || !bytes[1].is_ascii_digit()
            || !bytes[3].is_ascii_digit()
            || !bytes[4].is_ascii_digit()
        {
            return Err(ChimeError::malformed_entry(time, "non-digit in HH:MM"));
        }

        let hour = (bytes[0] - b'0') * 10 + (bytes[1] - b'0');
        let minute = (bytes[3] - b'0') * 10 + (bytes[4] - b'0');

        if hour > 23 {
            return Err(ChimeError::malformed_entry(time, "hour out of range"));
        }
        if minute > 59 {
            return Err(ChimeError::malformed_entry(time, "minute out of range"));
        }

        Ok(Alarm {
            hour,
            minute,
            zone_name: zone_name.into(),
        })
    }

    /// Check whether this alarm matches a local time in the named zone
    ///
    /// Seconds are ignored: an alarm matches for its entire minute.
    pub fn matches(&self, local: LocalTime, zone_name: &str) -> bool {
        self.zone_name == zone_name && self.hour == local.hour && self.minute == local.minute
    }
}
