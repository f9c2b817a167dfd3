use std::time::{Duration, Instant};

/// Fixed-interval tick scheduling for the game loop.
///
/// The loop polls once per iteration and advances the simulation when a
/// tick is due. Ticks never overlap: the loop is single-threaded and one
/// poll fires at most one tick. Dropping the timer with the loop is the
/// only teardown.
#[derive(Debug, Clone)]
pub struct TickTimer {
    interval: Duration,
    last_fire: Instant,
}

impl TickTimer {
    /// Creates a timer whose first tick is one full interval from now.
    #[must_use]
    pub fn new(interval: Duration) -> Self {
        Self {
            interval,
            last_fire: Instant::now(),
        }
    }

    /// Returns the configured tick interval.
    #[must_use]
    pub fn interval(&self) -> Duration {
        self.interval
    }

    /// Returns true when an interval has elapsed since the last fire, and
    /// arms the next one.
    pub fn poll(&mut self, now: Instant) -> bool {
        if now.duration_since(self.last_fire) >= self.interval {
            self.last_fire = now;
            return true;
        }

        false
    }

    /// Restarts the interval from `now`, so the next tick is a full
    /// interval away. Used when the game is reset.
    pub fn restart(&mut self, now: Instant) {
        self.last_fire = now;
    }
}
