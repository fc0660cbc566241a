//! Decode-and-apply paths for inbound sync messages
//!
//! Each of the three message kinds mutates exactly one component and
//! shares no state machine with the others. A malformed payload always
//! degrades to "retain previous valid state".

use chime_core::ChimeResult;
use chime_state::{AlarmTable, ReplaceReport, ZoneSelector, ZoneTable};
use chime_time::EpochClock;

use crate::InboundMessage;

/// What an applied message did to the device state
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ApplyOutcome {
    /// Epoch overwritten with this value
    EpochSet(u32),
    /// Zone change processed; false means the name was unknown and the
    /// selection was left untouched (intentional silent-ignore)
    ZoneSelected(bool),
    /// Alarm table replaced, with the per-entry breakdown
    AlarmsReplaced(ReplaceReport),
}

/// Counters kept across the handler's lifetime
#[derive(Clone, Copy, Debug, Default)]
pub struct SyncStats {
    /// Messages decoded and applied
    pub applied: u64,
    /// Payloads rejected before any state was touched
    pub decode_failures: u64,
}

/// Applies decoded sync messages to the device state
#[derive(Debug, Default)]
pub struct SyncHandler {
    stats: SyncStats,
}

impl SyncHandler {
    pub fn new() -> Self {
        SyncHandler::default()
    }

    /// Decode a raw labeled payload and apply it
    ///
    /// On a decode failure nothing is mutated and the error is returned
    /// for the caller to report; the device keeps running.
    pub fn handle_labeled(
        &mut self,
        label: &str,
        payload: &str,
        clock: &mut EpochClock,
        table: &ZoneTable,
        selector: &mut ZoneSelector,
        alarms: &mut AlarmTable,
    ) -> ChimeResult<ApplyOutcome> {
        let message = match InboundMessage::decode_labeled(label, payload) {
            Ok(message) => message,
            Err(err) => {
                self.stats.decode_failures += 1;
                tracing::warn!(label, %err, "dropping undecodable sync message");
                return Err(err);
            }
        };
        Ok(self.apply(message, clock, table, selector, alarms))
    }

    /// Apply a decoded message to the owning components
    pub fn apply(
        &mut self,
        message: InboundMessage,
        clock: &mut EpochClock,
        table: &ZoneTable,
        selector: &mut ZoneSelector,
        alarms: &mut AlarmTable,
    ) -> ApplyOutcome {
        self.stats.applied += 1;
        match message {
            InboundMessage::TimeSync(epoch) => {
                tracing::debug!(epoch, "epoch sync");
                clock.set_epoch(epoch);
                ApplyOutcome::EpochSet(epoch)
            }
            InboundMessage::ZoneChange(name) => {
                let known = table.index_by_name(&name).is_some();
                selector.set_by_name(table, &name);
                ApplyOutcome::ZoneSelected(known)
            }
            InboundMessage::AlarmSync(entries) => {
                let report = alarms
                    .replace_all(entries.iter().map(|e| (e.time.as_str(), e.zone.as_str())));
                tracing::debug!(kept = report.kept, dropped = report.dropped.len(), "alarm sync");
                ApplyOutcome::AlarmsReplaced(report)
            }
        }
    }

    pub fn stats(&self) -> SyncStats {
        self.stats
    }
}
