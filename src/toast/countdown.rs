// SPDX-License-Identifier: MPL-2.0
//! Pause-aware elapsed time accumulator behind auto-close.

use std::time::{Duration, Instant};

/// Accumulates unpaused time between ticks.
///
/// The first tick only records a baseline. Each later tick moves the
/// baseline forward and, unless paused, adds the time since the previous
/// tick to the elapsed total. Paused stretches are therefore never counted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Countdown {
    duration: Duration,
    elapsed: Duration,
    last_tick: Option<Instant>,
}

impl Countdown {
    #[must_use]
    pub fn new(duration: Duration) -> Self {
        Self {
            duration,
            elapsed: Duration::ZERO,
            last_tick: None,
        }
    }

    /// Records a tick at `now`. Returns `true` once the countdown expired.
    ///
    /// Expiry is only detected on an unpaused tick that accumulates time.
    pub fn tick(&mut self, now: Instant, paused: bool) -> bool {
        let Some(last) = self.last_tick.replace(now) else {
            return false;
        };
        if paused {
            return false;
        }
        self.elapsed += now.saturating_duration_since(last);
        self.is_expired()
    }

    #[must_use]
    pub fn duration(&self) -> Duration {
        self.duration
    }

    #[must_use]
    pub fn elapsed(&self) -> Duration {
        self.elapsed
    }

    #[must_use]
    pub fn remaining(&self) -> Duration {
        self.duration.saturating_sub(self.elapsed)
    }

    #[must_use]
    pub fn is_expired(&self) -> bool {
        self.elapsed >= self.duration
    }

    /// Fraction of time left, `1.0` when fresh and `0.0` once expired.
    #[must_use]
    pub fn progress(&self) -> f32 {
        if self.duration.is_zero() {
            return 0.0;
        }
        let fraction = self.elapsed.as_secs_f64() / self.duration.as_secs_f64();
        (1.0 - fraction).max(0.0) as f32
    }
}
