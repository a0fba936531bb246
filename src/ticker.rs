use std::time::{Duration, Instant};

/// Default tick interval in milliseconds
pub const DEFAULT_TICK_MS: u64 = 1000;

/// One-shot tick that is re-armed after each firing.
///
/// Only one deadline exists at a time, and nothing fires once the owner
/// stops asking, so a finished session leaves no pending tick behind.
#[derive(Debug)]
pub struct Ticker {
    interval: Duration,
    deadline: Instant,
}

impl Ticker {
    pub fn new(interval: Duration, now: Instant) -> Self {
        Self {
            interval,
            deadline: now + interval,
        }
    }

    /// Time left until the next tick
    pub fn remaining(&self, now: Instant) -> Duration {
        self.deadline.saturating_duration_since(now)
    }

    /// Fire if the deadline passed, scheduling the next one from `now`
    pub fn poll(&mut self, now: Instant) -> bool {
        if now < self.deadline {
            return false;
        }
        self.deadline = now + self.interval;
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tick_fires_once_per_deadline() {
        let start = Instant::now();
        let mut ticker = Ticker::new(Duration::from_millis(250), start);

        assert!(!ticker.poll(start));
        assert_eq!(ticker.remaining(start), Duration::from_millis(250));

        let later = start + Duration::from_millis(300);
        assert!(ticker.poll(later));
        assert!(!ticker.poll(later));
        assert_eq!(ticker.remaining(later), Duration::from_millis(250));
    }

    #[test]
    fn test_late_poll_does_not_burst() {
        let start = Instant::now();
        let mut ticker = Ticker::new(Duration::from_millis(100), start);

        let much_later = start + Duration::from_secs(5);
        assert!(ticker.poll(much_later));
        assert!(!ticker.poll(much_later + Duration::from_millis(50)));
    }
}
