//! Cooperative interval timer.
//!
//! The timer never sleeps or spawns; the host loop passes the current
//! [`Instant`] to [`TickTimer::poll`], and at most one tick is due per poll.
//! When the host falls behind, the schedule restarts from `now` instead of
//! firing a burst of catch-up ticks.

use std::time::{Duration, Instant};

/// A re-armable interval timer driven by the caller's clock.
#[derive(Clone, Debug)]
pub struct TickTimer {
    interval: Duration,
    deadline: Option<Instant>,
}

impl TickTimer {
    #[must_use]
    pub fn new(interval: Duration) -> Self {
        Self {
            interval,
            deadline: None,
        }
    }

    #[must_use]
    pub fn interval(&self) -> Duration {
        self.interval
    }

    /// Change the interval. Clears any pending deadline.
    pub fn set_interval(&mut self, interval: Duration) {
        self.interval = interval;
        self.deadline = None;
    }

    /// Schedule the first tick one interval after `now`.
    pub fn arm(&mut self, now: Instant) {
        self.deadline = Some(now + self.interval);
    }

    /// Cancel the pending tick, if any.
    pub fn clear(&mut self) {
        self.deadline = None;
    }

    #[must_use]
    pub fn is_armed(&self) -> bool {
        self.deadline.is_some()
    }

    #[must_use]
    pub fn deadline(&self) -> Option<Instant> {
        self.deadline
    }

    /// Returns `true` if a tick is due at `now` and schedules the next one.
    pub fn poll(&mut self, now: Instant) -> bool {
        let Some(deadline) = self.deadline else {
            return false;
        };
        if now < deadline {
            return false;
        }
        let mut next = deadline + self.interval;
        if next <= now {
            next = now + self.interval;
        }
        self.deadline = Some(next);
        true
    }

    /// Time left until the pending tick, `None` when disarmed.
    #[must_use]
    pub fn time_until_due(&self, now: Instant) -> Option<Duration> {
        self.deadline
            .map(|deadline| deadline.saturating_duration_since(now))
    }
}
