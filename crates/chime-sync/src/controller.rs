//! Controller-side state model
//!
//! The controller owns the canonical alarm list and zone selection for
//! a fleet of clock devices. It never talks to a broker itself: every
//! operation returns the `OutboundMessage`s the transport collaborator
//! must publish. Alarm updates always ship the full snapshot
//! (last-writer-wins), and every edit is paired with an immediate time
//! sync so a device that just woke up converges in one exchange.

use std::time::Duration;

use chime_core::{Alarm, ChimeError, ChimeResult, ZoneConfig};

use crate::{AlarmEntry, InboundMessage, OutboundMessage};

/// Canonical state held by the controller
#[derive(Debug)]
pub struct Controller {
    zone_names: Vec<String>,
    zone_index: usize,
    alarms: Vec<AlarmEntry>,
}

impl Controller {
    /// Build from the same zone configuration the devices use
    pub fn from_config(config: &ZoneConfig) -> ChimeResult<Self> {
        config.validate()?;
        Ok(Controller {
            zone_names: config.zones.iter().map(|z| z.name.clone()).collect(),
            zone_index: config.initial_index,
            alarms: Vec::new(),
        })
    }

    /// Name of the currently selected zone
    pub fn current_zone(&self) -> &str {
        &self.zone_names[self.zone_index]
    }

    /// Current canonical alarm list
    pub fn alarms(&self) -> &[AlarmEntry] {
        &self.alarms
    }

    /// Add an alarm and produce the messages to publish
    ///
    /// The time string and zone are validated up front: the controller
    /// is the one place a bad entry can be refused before it ever
    /// reaches the wire.
    pub fn add_alarm(
        &mut self,
        time: &str,
        zone: &str,
        now_epoch: u32,
    ) -> ChimeResult<Vec<OutboundMessage>> {
        if !self.zone_names.iter().any(|z| z == zone) {
            return Err(ChimeError::UnknownZone(zone.to_string()));
        }
        Alarm::parse(time, zone)?;

        self.alarms.push(AlarmEntry::new(time, zone));
        Ok(self.snapshot_and_sync(now_epoch))
    }

    /// Remove the alarm at `index` and produce the messages to publish
    pub fn remove_alarm(&mut self, index: usize, now_epoch: u32) -> ChimeResult<Vec<OutboundMessage>> {
        if index >= self.alarms.len() {
            return Err(ChimeError::IndexOutOfRange {
                index,
                count: self.alarms.len(),
            });
        }
        self.alarms.remove(index);
        Ok(self.snapshot_and_sync(now_epoch))
    }

    /// Advance the canonical zone and produce the zone-change publish
    pub fn cycle_zone(&mut self) -> OutboundMessage {
        self.zone_index = (self.zone_index + 1) % self.zone_names.len();
        OutboundMessage::ZoneChange {
            zone: self.current_zone().to_string(),
        }
    }

    /// Ingest a message published by a device
    ///
    /// Only zone changes matter here; a device advancing its zone by
    /// button keeps the controller's view consistent. Unknown names are
    /// ignored the same way the device ignores them.
    pub fn observe(&mut self, message: &InboundMessage) {
        if let InboundMessage::ZoneChange(name) = message {
            if let Some(index) = self.zone_names.iter().position(|z| z == name) {
                self.zone_index = index;
            } else {
                tracing::debug!(zone = %name, "ignoring zone report for unknown zone");
            }
        }
    }

    /// Time-sync message for the periodic cadence
    pub fn time_sync(&self, now_epoch: u32) -> OutboundMessage {
        OutboundMessage::TimeSync { epoch: now_epoch }
    }

    fn snapshot_and_sync(&self, now_epoch: u32) -> Vec<OutboundMessage> {
        vec![
            OutboundMessage::AlarmSnapshot {
                alarms: self.alarms.clone(),
            },
            OutboundMessage::TimeSync { epoch: now_epoch },
        ]
    }
}

/// Due-time logic for the periodic epoch sync
///
/// Pure arithmetic over epoch seconds; the caller owns the timer that
/// decides when to ask.
#[derive(Clone, Copy, Debug)]
pub struct SyncSchedule {
    interval_seconds: u32,
    next_due: u32,
}

impl SyncSchedule {
    /// Reference cadence: one sync every 15 minutes
    pub const DEFAULT_INTERVAL: Duration = Duration::from_secs(15 * 60);

    pub fn new(interval: Duration) -> Self {
        SyncSchedule {
            interval_seconds: interval.as_secs().min(u32::MAX as u64) as u32,
            next_due: 0,
        }
    }

    /// Whether a sync is due at the given epoch
    ///
    /// The first call is always due so a freshly started controller
    /// syncs its fleet immediately.
    pub fn due(&self, now_epoch: u32) -> bool {
        now_epoch >= self.next_due
    }

    /// Record that a sync was sent at the given epoch
    pub fn mark_sent(&mut self, now_epoch: u32) {
        self.next_due = now_epoch.saturating_add(self.interval_seconds);
    }
}

impl Default for SyncSchedule {
    fn default() -> Self {
        Self::new(Self::DEFAULT_INTERVAL)
    }
}
