//! Fall timer - fires once the threshold has been exceeded, then restarts

use std::time::{Duration, Instant};

#[derive(Debug, Clone, Copy)]
pub struct FallTimer {
    interval: Duration,
    last_fire: Instant,
}

impl FallTimer {
    pub fn new(interval: Duration, now: Instant) -> Self {
        Self {
            interval,
            last_fire: now,
        }
    }

    /// Fire if more than `interval` has passed since the last fire.
    ///
    /// A fire moves the reference point to `now`, so a late poll yields one tick,
    /// not a burst.
    pub fn poll(&mut self, now: Instant) -> bool {
        if now.saturating_duration_since(self.last_fire) > self.interval {
            self.last_fire = now;
            return true;
        }
        false
    }

    /// Time left until the next poll can fire
    pub fn remaining(&self, now: Instant) -> Duration {
        self.interval
            .saturating_sub(now.saturating_duration_since(self.last_fire))
    }
}
