use std::time::{Duration, Instant};

/// Fixed-cadence scheduler for simulation steps.
#[derive(Debug, Clone)]
pub struct Ticker {
    interval: Duration,
    last_tick: Instant,
}

impl Ticker {
    pub fn new(interval: Duration, now: Instant) -> Self {
        Self { interval, last_tick: now }
    }

    /// Restart the current interval from `now`.
    pub fn reset(&mut self, now: Instant) {
        self.last_tick = now;
    }

    /// Returns true when a full interval has passed since the last tick.
    ///
    /// Missed ticks are dropped rather than replayed, so one call yields at most one step.
    pub fn tick(&mut self, now: Instant) -> bool {
        if now.saturating_duration_since(self.last_tick) >= self.interval {
            self.last_tick = now;
            true
        } else {
            false
        }
    }

    /// Time left until the next tick is due.
    pub fn remaining(&self, now: Instant) -> Duration {
        self.interval.saturating_sub(now.saturating_duration_since(self.last_tick))
    }
}
