//! End-to-end scenarios for the clock engine

use std::time::Duration;

use chime_core::{DeviceConfig, Intent, LocalTime, TimeZone, ZoneConfig, ZoneOffset};
use chime_sync::{Controller, SyncSchedule};

use crate::SimulatedDevice;

fn two_zone_config() -> ZoneConfig {
    ZoneConfig {
        zones: vec![
            TimeZone::new(ZoneOffset::UTC, "UTC"),
            TimeZone::new(ZoneOffset::from_hours(2).unwrap(), "CET"),
        ],
        initial_index: 0,
    }
}

fn render_time(intent: &Intent) -> (LocalTime, &str) {
    match intent {
        Intent::Render { time, zone } => (*time, zone.as_str()),
        other => panic!("expected render intent, got {:?}", other),
    }
}

#[test]
fn test_sync_then_zone_select_scenario() {
    // Reference scenario: epoch 3600 (01:00:00 UTC), CET shows 03:00:00
    let mut sim = SimulatedDevice::with_config(&two_zone_config(), DeviceConfig::default());

    sim.receive("clock/sync", r#"{"epoch": 3600}"#);
    sim.receive("clock/zone", "CET");
    sim.tick();

    let (time, zone) = render_time(sim.last_render().unwrap());
    assert_eq!(zone, "CET");
    assert_eq!(format!("{}", time), "03:00:00");
}

#[test]
fn test_alarm_fires_in_matching_zone_only() {
    let mut sim = SimulatedDevice::with_config(&two_zone_config(), DeviceConfig::default());
    sim.receive("clock/sync", r#"{"epoch": 3600}"#);
    sim.receive(
        "clock/alarms",
        r#"[{"time":"03:00","zone":"CET"},{"time":"03:00","zone":"UTC"}]"#,
    );

    // Still on UTC: local time is 01:00, neither alarm matches
    sim.tick();
    assert_eq!(sim.sound_count(), 0);

    // Switch to CET: local time is 03:00, the CET alarm fires
    sim.receive("clock/zone", "CET");
    sim.tick();
    assert_eq!(sim.sound_count(), 1);
}

#[test]
fn test_debounced_button_single_advance() {
    let mut sim = SimulatedDevice::with_config(&two_zone_config(), DeviceConfig::default());

    // Two edges 50ms apart, under the 200ms window
    sim.press_button();
    sim.tick();
    sim.press_button();
    sim.tick_after(Duration::from_millis(50));

    assert_eq!(sim.published_zones(), vec!["CET"]);
    assert_eq!(sim.device().current_zone(), "CET");

    // A third edge after the window advances again, wrapping to UTC
    sim.press_button();
    sim.tick_after(Duration::from_millis(250));
    assert_eq!(sim.published_zones(), vec!["CET", "UTC"]);
}

#[test]
fn test_alarm_table_survives_transport_silence() {
    // A broker session reset means messages stop arriving; the alarm
    // table must retain the last snapshot, not clear.
    let mut sim = SimulatedDevice::new();
    sim.receive("clock/alarms", r#"[{"time":"05:01","zone":"Tashkent"}]"#);
    sim.tick();
    assert_eq!(sim.device().alarm_count(), 1);

    // A long quiet stretch of ticks (the "reconnect" gap)
    for _ in 0..20 {
        sim.tick_after(Duration::from_secs(3));
    }
    assert_eq!(sim.device().alarm_count(), 1);

    // Epoch 0 + 60s of drift-free ticking reaches 05:01 Tashkent local
    assert!(sim.sound_count() > 0);
}

#[test]
fn test_controller_roundtrip_to_device() {
    let config = ZoneConfig::default();
    let mut controller = Controller::from_config(&config).unwrap();
    let mut sim = SimulatedDevice::new();

    // Controller schedules 03:00 CET and pushes snapshot + sync;
    // epoch 3600 is 01:00:00 UTC.
    for message in controller.add_alarm("03:00", "CET", 3600).unwrap() {
        sim.receive_outbound(&message);
    }
    sim.receive_outbound(&controller.cycle_zone()); // Tashkent -> EST
    sim.tick();
    assert_eq!(sim.device().current_zone(), "EST");
    assert_eq!(sim.sound_count(), 0);

    // Move the controller selection onto CET and the alarm matches
    sim.receive_outbound(&controller.cycle_zone()); // EST -> UTC
    sim.receive_outbound(&controller.cycle_zone()); // UTC -> CET
    sim.tick();
    assert_eq!(sim.device().current_zone(), "CET");
    assert_eq!(sim.sound_count(), 1);
}

#[test]
fn test_device_button_keeps_controller_consistent() {
    let config = ZoneConfig::default();
    let mut controller = Controller::from_config(&config).unwrap();
    let mut sim = SimulatedDevice::new();

    sim.press_button();
    sim.tick();

    // The publish intent carries the new zone; feed it back to the
    // controller the way the transport would.
    let published = sim.published_zones();
    assert_eq!(published, vec!["EST"]);
    controller.observe(&chime_sync::InboundMessage::ZoneChange(
        published[0].to_string(),
    ));
    assert_eq!(controller.current_zone(), "EST");
}

#[test]
fn test_periodic_sync_corrects_drift() {
    let mut schedule = SyncSchedule::new(Duration::from_secs(900));
    let controller = Controller::from_config(&ZoneConfig::default()).unwrap();
    let mut sim = SimulatedDevice::new();

    // Device drifts ahead: its tick source over-reports by a minute
    sim.tick_after(Duration::from_secs(60));
    assert_eq!(sim.device().current_epoch(), 60);

    // Controller wall time is actually 10; cadence says sync is due
    let wall_epoch = 10;
    assert!(schedule.due(wall_epoch));
    sim.receive_outbound(&controller.time_sync(wall_epoch));
    schedule.mark_sent(wall_epoch);
    sim.tick();

    assert_eq!(sim.device().current_epoch(), wall_epoch);
    assert!(!schedule.due(wall_epoch));
}

#[test]
fn test_render_emitted_every_tick() {
    let mut sim = SimulatedDevice::new();
    for _ in 0..5 {
        sim.tick_after(Duration::from_millis(200));
    }
    let renders = sim
        .intents
        .iter()
        .filter(|i| matches!(i, Intent::Render { .. }))
        .count();
    assert_eq!(renders, 5);
}

#[test]
fn test_malformed_traffic_never_halts_the_device() {
    let mut sim = SimulatedDevice::new();
    sim.receive("clock/sync", "????");
    sim.receive("clock/zone", "Narnia");
    sim.receive("clock/alarms", "[{broken");
    sim.receive("clock/unknown", "x");
    sim.tick();

    // Every payload was rejected or ignored, state is untouched, and
    // the device still renders.
    assert_eq!(sim.device().current_epoch(), 0);
    assert_eq!(sim.device().current_zone(), "Tashkent");
    assert_eq!(sim.device().alarm_count(), 0);
    assert!(sim.last_render().is_some());
}
