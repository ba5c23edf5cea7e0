//! Wall-clock throttling for periodic console output

use std::time::{Duration, Instant};

/// Fires at most once per interval.
///
/// The first firing happens one full interval after creation, never immediately.
pub struct ReminderTimer {
    last_fired: Instant,
    interval: Duration,
}

impl ReminderTimer {
    /// Create a timer that starts counting now.
    pub fn new(interval: Duration) -> Self {
        Self::starting_at(Instant::now(), interval)
    }

    /// Create a timer that starts counting at `start`.
    pub fn starting_at(start: Instant, interval: Duration) -> Self {
        Self {
            last_fired: start,
            interval,
        }
    }

    /// Returns true if at least one interval has passed since the last firing,
    /// and restarts the interval from `now` when it does.
    pub fn due(&mut self, now: Instant) -> bool {
        if now.saturating_duration_since(self.last_fired) >= self.interval {
            self.last_fired = now;
            true
        } else {
            false
        }
    }

    /// Configured interval
    pub fn interval(&self) -> Duration {
        self.interval
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_due_before_interval() {
        let start = Instant::now();
        let mut timer = ReminderTimer::starting_at(start, Duration::from_secs(2));
        assert!(!timer.due(start));
        assert!(!timer.due(start + Duration::from_millis(1999)));
    }

    #[test]
    fn test_due_restarts_interval() {
        let start = Instant::now();
        let mut timer = ReminderTimer::starting_at(start, Duration::from_secs(2));

        let first = start + Duration::from_secs(2);
        assert!(timer.due(first));
        // Counting restarts from the firing time
        assert!(!timer.due(first + Duration::from_secs(1)));
        assert!(timer.due(first + Duration::from_millis(2500)));
    }

    #[test]
    fn test_long_stall_fires_once() {
        let start = Instant::now();
        let mut timer = ReminderTimer::starting_at(start, Duration::from_secs(2));
        let late = start + Duration::from_secs(30);
        assert!(timer.due(late));
        assert!(!timer.due(late));
    }
}
