//! Per-tick evaluation: derive local time, render, match alarms

use std::time::Duration;

use chime_core::{Intent, LocalTime};
use chime_state::{AlarmTable, ZoneSelector, ZoneTable};
use chime_time::EpochClock;

/// What one evaluation pass produced
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TickOutput {
    /// Emitted every tick
    pub render: Intent,
    /// Emitted when an alarm matches the current minute and zone
    pub sound: Option<Intent>,
}

/// Derives display time and matches alarms against it
///
/// The evaluator carries no fired-this-minute latch: a matching alarm
/// produces a sound intent on every tick of its minute, and the buzzer
/// collaborator decides whether to de-duplicate. Coalescing stays
/// possible behind the intent without touching this interface.
#[derive(Clone, Copy, Debug)]
pub struct AlarmEvaluator {
    /// Duration attached to every sound intent
    alarm_duration: Duration,
}

impl AlarmEvaluator {
    pub fn new(alarm_duration: Duration) -> Self {
        AlarmEvaluator { alarm_duration }
    }

    /// Run one evaluation pass over the current device state
    pub fn evaluate(
        &self,
        clock: &EpochClock,
        table: &ZoneTable,
        selector: &ZoneSelector,
        alarms: &AlarmTable,
    ) -> TickOutput {
        let zone = selector.current(table);
        let local = LocalTime::from_epoch(clock.current_epoch(), zone.offset);

        let render = Intent::Render {
            time: local,
            zone: zone.name.clone(),
        };

        // First match wins: two alarms in the same minute and zone are
        // deliberately coalesced into one firing.
        let sound = alarms
            .alarms()
            .iter()
            .find(|alarm| alarm.matches(local, &zone.name))
            .map(|_| Intent::SoundAlarm {
                duration: self.alarm_duration,
            });

        TickOutput { render, sound }
    }
}
