//! Device runtime - the single-threaded cooperative tick loop

use std::collections::VecDeque;
use std::time::Instant;

use chime_core::{ChimeResult, DeviceConfig, Intent, ZoneConfig};
use chime_state::{AlarmTable, ButtonLatch, ButtonPoll, Debouncer, ZoneSelector, ZoneTable};
use chime_sync::SyncHandler;
use chime_time::{EpochClock, TickSource};

use crate::AlarmEvaluator;

/// An inbound payload waiting for the next tick
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Envelope {
    /// Channel label as received from the transport
    pub label: String,
    /// Raw payload string
    pub payload: String,
}

impl Envelope {
    pub fn new(label: impl Into<String>, payload: impl Into<String>) -> Self {
        Envelope {
            label: label.into(),
            payload: payload.into(),
        }
    }
}

/// Counters kept across the device's lifetime
#[derive(Clone, Copy, Debug, Default)]
pub struct RuntimeStats {
    pub ticks: u64,
    pub messages_applied: u64,
    pub messages_rejected: u64,
    pub inbound_dropped: u64,
    pub presses_consumed: u64,
    pub presses_bounced: u64,
    pub intents_emitted: u64,
}

/// The assembled clock device
///
/// All mutable state is owned by this struct and touched only from
/// `tick`; the one cross-context signal is the button latch, which the
/// input collaborator writes through its own cloned handle.
pub struct Device {
    config: DeviceConfig,
    clock: EpochClock,
    tick_source: TickSource,
    table: ZoneTable,
    selector: ZoneSelector,
    latch: ButtonLatch,
    debouncer: Debouncer,
    alarms: AlarmTable,
    sync: SyncHandler,
    evaluator: AlarmEvaluator,
    inbound: VecDeque<Envelope>,
    intents: VecDeque<Intent>,
    stats: RuntimeStats,
}

impl Device {
    /// Assemble a device from validated configuration
    pub fn new(zones: &ZoneConfig, config: DeviceConfig) -> ChimeResult<Self> {
        let table = ZoneTable::from_config(zones)?;
        let selector = ZoneSelector::new(&table, zones.initial_index)?;
        Ok(Device {
            clock: EpochClock::new(),
            tick_source: TickSource::new(),
            table,
            selector,
            latch: ButtonLatch::new(),
            debouncer: Debouncer::new(config.debounce_window),
            alarms: AlarmTable::new(),
            sync: SyncHandler::new(),
            evaluator: AlarmEvaluator::new(config.alarm_duration),
            inbound: VecDeque::new(),
            intents: VecDeque::new(),
            stats: RuntimeStats::default(),
            config,
        })
    }

    /// Handle for the input collaborator's interrupt context
    pub fn button_latch(&self) -> ButtonLatch {
        self.latch.clone()
    }

    /// Queue an inbound message for the next tick
    ///
    /// Bounded: when the buffer is full the message is dropped and
    /// counted, matching the rest of the engine's degrade-not-halt
    /// posture.
    pub fn queue_inbound(&mut self, envelope: Envelope) {
        if self.inbound.len() < self.config.max_inbound_buffer {
            self.inbound.push_back(envelope);
        } else {
            self.stats.inbound_dropped += 1;
            tracing::warn!(label = %envelope.label, "inbound buffer full, dropping message");
        }
    }

    /// Next intent for the collaborators, if any
    pub fn pop_intent(&mut self) -> Option<Intent> {
        self.intents.pop_front()
    }

    /// Execute one tick against the real clock
    pub fn tick(&mut self) {
        let elapsed = self.tick_source.elapsed_whole_seconds();
        self.step(elapsed, Instant::now());
    }

    /// Execute one tick with explicit time inputs
    ///
    /// The tick order is fixed: clock advance, inbound drain, button,
    /// evaluate. Tests and the simulator drive this directly.
    pub fn step(&mut self, elapsed_seconds: u32, now: Instant) {
        self.stats.ticks += 1;

        // Stage 1: advance the clock - never skipped
        self.clock.advance(elapsed_seconds);

        // Stage 2: drain inbound messages through the sync handler
        while let Some(envelope) = self.inbound.pop_front() {
            match self.sync.handle_labeled(
                &envelope.label,
                &envelope.payload,
                &mut self.clock,
                &self.table,
                &mut self.selector,
                &mut self.alarms,
            ) {
                Ok(_) => self.stats.messages_applied += 1,
                Err(_) => self.stats.messages_rejected += 1,
            }
        }

        // Stage 3: consume the debounced button press
        match self.debouncer.poll_at(&self.latch, now) {
            ButtonPoll::Pressed => {
                self.stats.presses_consumed += 1;
                let zone = self.selector.advance(&self.table);
                self.emit(Intent::PublishZone {
                    zone: zone.name.clone(),
                });
            }
            ButtonPoll::Bounced => self.stats.presses_bounced += 1,
            ButtonPoll::Idle => {}
        }

        // Stage 4: evaluate and render
        let output = self
            .evaluator
            .evaluate(&self.clock, &self.table, &self.selector, &self.alarms);
        self.emit(output.render);
        if let Some(sound) = output.sound {
            self.emit(sound);
        }
    }

    fn emit(&mut self, intent: Intent) {
        self.stats.intents_emitted += 1;
        self.intents.push_back(intent);
    }

    pub fn config(&self) -> &DeviceConfig {
        &self.config
    }

    pub fn stats(&self) -> RuntimeStats {
        self.stats
    }

    /// Current epoch, exposed for diagnostics
    pub fn current_epoch(&self) -> u32 {
        self.clock.current_epoch()
    }

    /// Name of the currently selected zone
    pub fn current_zone(&self) -> &str {
        &self.selector.current(&self.table).name
    }

    /// Number of alarms currently loaded
    pub fn alarm_count(&self) -> usize {
        self.alarms.len()
    }
}
