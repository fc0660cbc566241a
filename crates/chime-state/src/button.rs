//! Button latch and debounce state machine
//!
//! The button edge is produced in an interrupt-style context and
//! consumed by the tick loop, so the handoff is a single atomic bool
//! with overwrite semantics: "an edge occurred since last consumed",
//! never a counter and never a queue.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::{Duration, Instant};

/// Single-producer/single-consumer press flag
///
/// Clone the handle into the input collaborator; any number of `press`
/// calls between two `take`s collapse into one pending edge.
#[derive(Clone, Debug, Default)]
pub struct ButtonLatch {
    pending: Arc<AtomicBool>,
}

impl ButtonLatch {
    pub fn new() -> Self {
        ButtonLatch::default()
    }

    /// Record an edge (producer side)
    pub fn press(&self) {
        self.pending.store(true, Ordering::Release);
    }

    /// Consume the pending edge, if any (consumer side)
    pub fn take(&self) -> bool {
        self.pending.swap(false, Ordering::AcqRel)
    }
}

/// Outcome of one debounce poll
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ButtonPoll {
    /// No edge pending
    Idle,
    /// Edge consumed, action should follow
    Pressed,
    /// Edge arrived inside the debounce window and was dropped
    Bounced,
}

/// Debounce state machine over the latch
///
/// The window is measured from the last *consumed* press. An edge seen
/// inside the window is dropped, not queued, so a burst of edges yields
/// at most one action per window.
#[derive(Debug)]
pub struct Debouncer {
    window: Duration,
    last_consumed: Option<Instant>,
}

impl Debouncer {
    pub fn new(window: Duration) -> Self {
        Debouncer {
            window,
            last_consumed: None,
        }
    }

    /// Poll the latch at the current instant
    pub fn poll(&mut self, latch: &ButtonLatch) -> ButtonPoll {
        self.poll_at(latch, Instant::now())
    }

    /// Poll the latch at an explicit instant (tick loop and tests)
    pub fn poll_at(&mut self, latch: &ButtonLatch, now: Instant) -> ButtonPoll {
        if !latch.take() {
            return ButtonPoll::Idle;
        }

        if let Some(last) = self.last_consumed {
            if now.duration_since(last) < self.window {
                return ButtonPoll::Bounced;
            }
        }

        self.last_consumed = Some(now);
        ButtonPoll::Pressed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const WINDOW: Duration = Duration::from_millis(200);

    #[test]
    fn test_first_press_honored() {
        let latch = ButtonLatch::new();
        let mut debouncer = Debouncer::new(WINDOW);
        let now = Instant::now();

        latch.press();
        assert_eq!(debouncer.poll_at(&latch, now), ButtonPoll::Pressed);
        assert_eq!(debouncer.poll_at(&latch, now), ButtonPoll::Idle);
    }

    #[test]
    fn test_press_inside_window_dropped() {
        let latch = ButtonLatch::new();
        let mut debouncer = Debouncer::new(WINDOW);
        let start = Instant::now();

        latch.press();
        assert_eq!(debouncer.poll_at(&latch, start), ButtonPoll::Pressed);

        // 50ms later: inside the window, dropped not queued
        latch.press();
        let at_50 = start + Duration::from_millis(50);
        assert_eq!(debouncer.poll_at(&latch, at_50), ButtonPoll::Bounced);

        // The dropped press must not fire later either
        let at_300 = start + Duration::from_millis(300);
        assert_eq!(debouncer.poll_at(&latch, at_300), ButtonPoll::Idle);
    }

    #[test]
    fn test_press_after_window_honored() {
        let latch = ButtonLatch::new();
        let mut debouncer = Debouncer::new(WINDOW);
        let start = Instant::now();

        latch.press();
        assert_eq!(debouncer.poll_at(&latch, start), ButtonPoll::Pressed);

        latch.press();
        let later = start + Duration::from_millis(250);
        assert_eq!(debouncer.poll_at(&latch, later), ButtonPoll::Pressed);
    }

    #[test]
    fn test_burst_collapses_to_one_edge() {
        let latch = ButtonLatch::new();
        let mut debouncer = Debouncer::new(WINDOW);
        let now = Instant::now();

        for _ in 0..10 {
            latch.press();
        }
        assert_eq!(debouncer.poll_at(&latch, now), ButtonPoll::Pressed);
        assert_eq!(debouncer.poll_at(&latch, now), ButtonPoll::Idle);
    }
}
