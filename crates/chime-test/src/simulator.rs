//! Simulated device - manual time, scripted inputs
//!
//! Wraps a real `Device` but drives `step` with hand-picked elapsed
//! seconds and instants, so scenarios control both the epoch clock and
//! the debounce timeline without sleeping.

use std::time::{Duration, Instant};

use chime_core::{DeviceConfig, Intent, ZoneConfig};
use chime_runtime::{Device, Envelope};
use chime_state::ButtonLatch;
use chime_sync::OutboundMessage;

/// A device under simulation
pub struct SimulatedDevice {
    device: Device,
    latch: ButtonLatch,
    /// Simulated wall instant used for debounce decisions
    now: Instant,
    /// Everything the device emitted, in order
    pub intents: Vec<Intent>,
}

impl SimulatedDevice {
    /// Device with the reference zone deployment and default tuning
    pub fn new() -> Self {
        Self::with_config(&ZoneConfig::default(), DeviceConfig::default())
    }

    pub fn with_config(zones: &ZoneConfig, config: DeviceConfig) -> Self {
        let device = Device::new(zones, config).expect("simulated config must be valid");
        let latch = device.button_latch();
        SimulatedDevice {
            device,
            latch,
            now: Instant::now(),
            intents: Vec::new(),
        }
    }

    /// Deliver an inbound message as the transport collaborator would
    pub fn receive(&mut self, label: &str, payload: &str) {
        self.device.queue_inbound(Envelope::new(label, payload));
    }

    /// Deliver a controller-produced message
    pub fn receive_outbound(&mut self, message: &OutboundMessage) {
        self.receive(message.channel().as_str(), &message.encode());
    }

    /// Press the button from the simulated interrupt context
    pub fn press_button(&mut self) {
        self.latch.press();
    }

    /// Run one tick after the given simulated time has passed
    pub fn tick_after(&mut self, elapsed: Duration) {
        self.now += elapsed;
        self.device.step(elapsed.as_secs() as u32, self.now);
        while let Some(intent) = self.device.pop_intent() {
            self.intents.push(intent);
        }
    }

    /// Run one tick with no time passing
    pub fn tick(&mut self) {
        self.tick_after(Duration::ZERO);
    }

    /// Last render intent, if any tick produced one
    pub fn last_render(&self) -> Option<&Intent> {
        self.intents
            .iter()
            .rev()
            .find(|i| matches!(i, Intent::Render { .. }))
    }

    /// Sound intents emitted so far
    pub fn sound_count(&self) -> usize {
        self.intents
            .iter()
            .filter(|i| matches!(i, Intent::SoundAlarm { .. }))
            .count()
    }

    /// Zone publishes emitted so far, in order
    pub fn published_zones(&self) -> Vec<&str> {
        self.intents
            .iter()
            .filter_map(|i| match i {
                Intent::PublishZone { zone } => Some(zone.as_str()),
                _ => None,
            })
            .collect()
    }

    pub fn device(&self) -> &Device {
        &self.device
    }
}

impl Default for SimulatedDevice {
    fn default() -> Self {
        Self::new()
    }
}
