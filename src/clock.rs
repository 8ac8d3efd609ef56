use std::time::{Duration, Instant};

use crate::error::ConfigError;

/// Gates simulation steps to a fixed real-time cadence, independent of how
/// often the frame loop polls it.
#[derive(Debug, Clone, Copy)]
pub struct GameClock {
    interval: Duration,
    last_step: Instant,
}

impl GameClock {
    /// Creates a clock whose first step is due one `interval` after `now`.
    pub fn new(interval: Duration, now: Instant) -> Result<Self, ConfigError> {
        let mut clock = Self {
            interval: Duration::ZERO,
            last_step: now,
        };
        clock.configure(interval)?;
        Ok(clock)
    }

    /// Sets the minimum gap between two steps.
    pub fn configure(&mut self, interval: Duration) -> Result<(), ConfigError> {
        if interval.is_zero() {
            return Err(ConfigError::NonPositiveInterval);
        }

        self.interval = interval;
        Ok(())
    }

    /// Returns true at most once per elapsed interval.
    ///
    /// A `true` result moves the reference timestamp to `now`; the caller is
    /// expected to perform the step.
    pub fn should_step(&mut self, now: Instant) -> bool {
        if now.saturating_duration_since(self.last_step) < self.interval {
            return false;
        }

        self.last_step = now;
        true
    }

    /// Restarts the cadence from `now` so a new game does not step at once.
    pub fn reset(&mut self, now: Instant) {
        self.last_step = now;
    }

    #[must_use]
    pub fn interval(&self) -> Duration {
        self.interval
    }
}
