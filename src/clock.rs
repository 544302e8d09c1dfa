use std::time::Duration;

/// Fixed-interval accumulator driving the simulation.
///
/// Durations are summed exactly (no floating point), so frame deltas adding up to the interval
/// always trigger a tick.
#[derive(Debug, Clone)]
pub struct Clock {
    interval: Duration,
    elapsed: Duration,
    min: Duration,
    max: Duration,
}

impl Clock {
    /// Create a clock ticking every `interval`, which is clamped to `[min, max]`.
    ///
    /// Panics if `min > max`.
    pub fn new(interval: Duration, min: Duration, max: Duration) -> Self {
        assert!(min <= max, "clock bounds are inverted");

        Self {
            interval: interval.clamp(min, max),
            elapsed: Duration::ZERO,
            min,
            max,
        }
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    pub fn elapsed(&self) -> Duration {
        self.elapsed
    }

    pub fn bounds(&self) -> (Duration, Duration) {
        (self.min, self.max)
    }

    /// Change the tick interval, clamped to the clock's bounds. Time already accumulated is kept.
    ///
    /// Returns the interval actually stored.
    pub fn set_interval(&mut self, interval: Duration) -> Duration {
        self.interval = interval.clamp(self.min, self.max);
        self.interval
    }

    /// Add `delta` to the accumulator. Once it reaches the interval the accumulator restarts from
    /// zero and `true` is returned.
    pub fn tick(&mut self, delta: Duration) -> bool {
        self.elapsed = self.elapsed.saturating_add(delta);

        if self.elapsed < self.interval {
            return false;
        }

        self.elapsed = Duration::ZERO;

        true
    }
}
