//! Async driver for the device loop
//!
//! The core tick is synchronous; tokio only schedules it. The transport,
//! display, and buzzer sit behind `DeviceIo`, so the engine never sees a
//! socket or a pin.

use std::sync::Arc;

use parking_lot::Mutex;
use tokio::time::MissedTickBehavior;

use chime_core::Intent;

use crate::{Device, Envelope};

/// Collaborator seam for transport, display, and buzzer
pub trait DeviceIo {
    /// Inbound messages that arrived since the last poll
    fn poll_inbound(&mut self) -> Vec<Envelope>;

    /// Execute one intent (render, sound, or publish)
    fn deliver(&mut self, intent: Intent);

    /// True once the collaborator wants the loop to stop
    fn is_closed(&self) -> bool {
        false
    }
}

/// Run the device on a fixed tick interval until the io closes
///
/// The device sits behind a mutex because transport callbacks may queue
/// inbound work from another task; each tick holds the lock for one
/// whole pass, keeping the state single-threaded in practice.
pub async fn run_device<I>(device: Arc<Mutex<Device>>, io: &mut I)
where
    I: DeviceIo,
{
    let tick_interval = device.lock().config().tick_interval;
    let mut ticker = tokio::time::interval(tick_interval);
    ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

    loop {
        ticker.tick().await;
        if io.is_closed() {
            tracing::debug!("device io closed, stopping loop");
            return;
        }

        let mut dev = device.lock();
        for envelope in io.poll_inbound() {
            dev.queue_inbound(envelope);
        }
        dev.tick();
        while let Some(intent) = dev.pop_intent() {
            io.deliver(intent);
        }
    }
}
