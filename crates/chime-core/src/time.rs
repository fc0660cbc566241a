//! Local time-of-day derivation
//!
//! The device clock counts UTC epoch seconds; everything the display and
//! the alarm matcher need is the local wall time for the active zone.
//! Zone math is a pure additive offset modulo 86400, double-modded so a
//! negative offset can never produce a negative second count.

use crate::zone::ZoneOffset;

/// Seconds in a civil day
pub const SECONDS_PER_DAY: u32 = 86_400;

/// Wall-clock time of day in some zone
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct LocalTime {
    pub hour: u8,
    pub minute: u8,
    pub second: u8,
}

impl LocalTime {
    /// Derive the local time of day from a UTC epoch and a zone offset
    pub fn from_epoch(epoch: u32, offset: ZoneOffset) -> Self {
        let day = SECONDS_PER_DAY as i64;
        let secs = (epoch % SECONDS_PER_DAY) as i64 + offset.as_seconds() as i64;
        let secs = ((secs % day) + day) % day;

        LocalTime {
            hour: (secs / 3600) as u8,
            minute: ((secs % 3600) / 60) as u8,
            second: (secs % 60) as u8,
        }
    }

    /// Seconds since local midnight
    #[inline]
    pub fn seconds_of_day(self) -> u32 {
        self.hour as u32 * 3600 + self.minute as u32 * 60 + self.second as u32
    }
}

impl std::fmt::Debug for LocalTime {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:02}:{:02}:{:02}", self.hour, self.minute, self.second)
    }
}

impl std::fmt::Display for LocalTime {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:02}:{:02}:{:02}", self.hour, self.minute, self.second)
    }
}
