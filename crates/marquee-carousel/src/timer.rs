//! Auto-play timer handle.
//!
//! The timer does not sleep or spawn anything. The host feeds it elapsed
//! time from whatever loop it runs (a browser frame, a tokio interval, a
//! virtual clock in tests) and it reports how many times it fired.

use std::time::Duration;

/// A recurring timer owned by a single carousel.
///
/// Each armed timer gets a fresh generation number. Dropping the handle is
/// cancellation: there is no other copy that could keep firing.
#[derive(Debug)]
pub struct AutoPlayTimer {
    interval: Duration,
    elapsed: Duration,
    generation: u64,
}

impl AutoPlayTimer {
    /// Arm a timer. `interval` must be non-zero.
    pub(crate) fn arm(interval: Duration, generation: u64) -> Self {
        debug_assert!(!interval.is_zero());
        Self {
            interval,
            elapsed: Duration::ZERO,
            generation,
        }
    }

    /// Period between firings.
    pub fn interval(&self) -> Duration {
        self.interval
    }

    /// Generation this handle was armed with.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Time until the next firing.
    pub fn remaining(&self) -> Duration {
        self.interval - self.elapsed
    }

    /// Account for `elapsed` time and return the number of firings.
    pub fn advance(&mut self, elapsed: Duration) -> u64 {
        let total = self.elapsed.as_nanos() + elapsed.as_nanos();
        let period = self.interval.as_nanos();

        let fired = total / period;
        self.elapsed = Duration::from_nanos((total % period) as u64);

        fired as u64
    }
}
