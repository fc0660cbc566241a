//! Time zone primitives
//!
//! Zones are plain (offset, name) pairs fixed at configuration time.
//! There are no DST rules: a zone's offset is a constant number of
//! seconds east of UTC.

use crate::{ChimeError, ChimeResult};

/// Signed offset from UTC in seconds
///
/// INVARIANT: always within -12h..=+14h once constructed.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct ZoneOffset(i32);

impl ZoneOffset {
    /// Westernmost allowed offset (UTC-12:00)
    pub const MIN_SECONDS: i32 = -12 * 3600;
    /// Easternmost allowed offset (UTC+14:00)
    pub const MAX_SECONDS: i32 = 14 * 3600;

    pub const UTC: ZoneOffset = ZoneOffset(0);

    /// Construct from seconds east of UTC, validating the range
    pub fn from_seconds(seconds: i32) -> ChimeResult<Self> {
        if !(Self::MIN_SECONDS..=Self::MAX_SECONDS).contains(&seconds) {
            return Err(ChimeError::OffsetOutOfRange(seconds));
        }
        Ok(ZoneOffset(seconds))
    }

    /// Construct from whole hours east of UTC
    pub fn from_hours(hours: i32) -> ChimeResult<Self> {
        Self::from_seconds(hours * 3600)
    }

    /// Whole-hour offset known to be in range at compile time
    pub(crate) const fn hours(hours: i32) -> Self {
        ZoneOffset(hours * 3600)
    }

    #[inline]
    pub fn as_seconds(self) -> i32 {
        self.0
    }
}

impl std::fmt::Debug for ZoneOffset {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let sign = if self.0 < 0 { '-' } else { '+' };
        let abs = self.0.unsigned_abs();
        write!(f, "UTC{}{:02}:{:02}", sign, abs / 3600, (abs % 3600) / 60)
    }
}

/// A configured time zone
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TimeZone {
    /// Seconds east of UTC
    pub offset: ZoneOffset,
    /// Short display name, unique among configured zones
    pub name: String,
}

impl TimeZone {
    pub fn new(offset: ZoneOffset, name: impl Into<String>) -> Self {
        TimeZone {
            offset,
            name: name.into(),
        }
    }
}
