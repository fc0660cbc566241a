//! Device configuration
//!
//! The zone list and tuning knobs are fixed at process start by a setup
//! collaborator; the engine only validates and reads them.

use std::time::Duration;

use crate::{ChimeError, ChimeResult, TimeZone, ZoneOffset};

/// Static zone list plus the initially selected zone
#[derive(Clone, Debug)]
pub struct ZoneConfig {
    /// Configured zones, at least one, names unique
    pub zones: Vec<TimeZone>,
    /// Index selected at startup
    pub initial_index: usize,
}

impl ZoneConfig {
    /// Validate the configured invariants
    ///
    /// Offsets are range-checked at `ZoneOffset` construction; this
    /// checks the table-level rules.
    pub fn validate(&self) -> ChimeResult<()> {
        if self.zones.is_empty() {
            return Err(ChimeError::InvalidConfig("zone list is empty".into()));
        }
        if self.initial_index >= self.zones.len() {
            return Err(ChimeError::InvalidConfig(format!(
                "initial index {} out of range (zones: {})",
                self.initial_index,
                self.zones.len()
            )));
        }
        for (i, zone) in self.zones.iter().enumerate() {
            if self.zones[..i].iter().any(|z| z.name == zone.name) {
                return Err(ChimeError::InvalidConfig(format!(
                    "duplicate zone name {:?}",
                    zone.name
                )));
            }
        }
        Ok(())
    }
}

impl Default for ZoneConfig {
    fn default() -> Self {
        // Reference deployment: summer offsets, Tashkent selected
        ZoneConfig {
            zones: vec![
                TimeZone::new(ZoneOffset::UTC, "UTC"),
                TimeZone::new(ZoneOffset::hours(2), "CET"),
                TimeZone::new(ZoneOffset::hours(5), "Tashkent"),
                TimeZone::new(ZoneOffset::hours(-4), "EST"),
            ],
            initial_index: 2,
        }
    }
}

/// Runtime tuning for the device loop
#[derive(Clone, Debug)]
pub struct DeviceConfig {
    /// Interval between evaluate-and-render ticks
    pub tick_interval: Duration,
    /// Minimum interval between two honored button presses
    pub debounce_window: Duration,
    /// How long a fired alarm sounds
    pub alarm_duration: Duration,
    /// Maximum inbound messages buffered between ticks
    pub max_inbound_buffer: usize,
}

impl Default for DeviceConfig {
    fn default() -> Self {
        DeviceConfig {
            tick_interval: Duration::from_millis(200),
            debounce_window: Duration::from_millis(200),
            alarm_duration: Duration::from_secs(3),
            max_inbound_buffer: 64,
        }
    }
}
