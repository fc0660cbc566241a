//! Clock implementations for the CHIME engine

use std::time::Instant;

use chime_core::LocalTime;
use chime_core::ZoneOffset;

/// The authoritative UTC epoch counter
///
/// INVARIANT: never decreases on its own; only a sync may move it
/// backward, and a sync overwrites unconditionally.
#[derive(Clone, Copy, Debug, Default)]
pub struct EpochClock {
    /// Current UTC epoch in seconds
    epoch: u32,
}

impl EpochClock {
    /// Create a clock at epoch zero (pre-sync state)
    pub fn new() -> Self {
        EpochClock::default()
    }

    /// Create a clock already set to a known epoch
    pub fn at(epoch: u32) -> Self {
        EpochClock { epoch }
    }

    /// Unconditionally overwrite the epoch from a sync message
    pub fn set_epoch(&mut self, epoch: u32) {
        self.epoch = epoch;
    }

    /// Advance by elapsed real time; saturates at the epoch ceiling
    pub fn advance(&mut self, delta_seconds: u32) {
        self.epoch = self.epoch.saturating_add(delta_seconds);
    }

    /// Current UTC epoch, pure read
    #[inline]
    pub fn current_epoch(&self) -> u32 {
        self.epoch
    }

    /// Local wall time for the given zone offset
    #[inline]
    pub fn local_time(&self, offset: ZoneOffset) -> LocalTime {
        LocalTime::from_epoch(self.epoch, offset)
    }
}

/// Real-time tick source backed by the monotonic OS clock
///
/// The epoch clock counts whole seconds while the tick loop runs several
/// times a second, so the fractional remainder of each read is carried
/// over instead of dropped. Over any run the sum of reported seconds
/// tracks real elapsed time to within one second.
pub struct TickSource {
    /// Instant of the last consumed read
    last_read: Instant,
    /// Sub-second remainder carried between reads, in nanoseconds
    carry_nanos: u64,
}

impl TickSource {
    pub fn new() -> Self {
        TickSource {
            last_read: Instant::now(),
            carry_nanos: 0,
        }
    }

    /// Whole seconds elapsed since the last read, remainder carried
    pub fn elapsed_whole_seconds(&mut self) -> u32 {
        let now = Instant::now();
        self.take_whole_seconds(now)
    }

    fn take_whole_seconds(&mut self, now: Instant) -> u32 {
        let elapsed = now.duration_since(self.last_read);
        self.last_read = now;

        let total = self.carry_nanos.saturating_add(elapsed.as_nanos() as u64);
        let seconds = total / 1_000_000_000;
        self.carry_nanos = total % 1_000_000_000;

        seconds.min(u32::MAX as u64) as u32
    }
}

impl Default for TickSource {
    fn default() -> Self {
        Self::new()
    }
}
