use chrono::{DateTime, Local};

/// Source of the current wall-clock time.
///
/// Every transition that accrues time takes `now` from here, so tests can
/// drive the lifecycle without sleeping.
pub trait Clock {
    fn now(&self) -> DateTime<Local>;
}

/// Clock backed by the system time
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Local> {
        Local::now()
    }
}

#[cfg(test)]
pub use manual::ManualClock;

#[cfg(test)]
mod manual {
    use super::Clock;
    use chrono::{DateTime, Duration, Local, TimeZone};
    use std::cell::Cell;
    use std::rc::Rc;

    /// Hand-advanced clock for tests. Clones share the same time.
    #[derive(Debug, Clone)]
    pub struct ManualClock {
        now: Rc<Cell<DateTime<Local>>>,
    }

    impl ManualClock {
        pub fn new(start: DateTime<Local>) -> Self {
            Self {
                now: Rc::new(Cell::new(start)),
            }
        }

        /// 2024-05-01 09:00:00 local time
        pub fn fixed() -> Self {
            let start = Local
                .with_ymd_and_hms(2024, 5, 1, 9, 0, 0)
                .single()
                .unwrap_or_else(Local::now);
            Self::new(start)
        }

        pub fn advance(&self, by: Duration) {
            self.now.set(self.now.get() + by);
        }

        pub fn set(&self, to: DateTime<Local>) {
            self.now.set(to);
        }
    }

    impl Clock for ManualClock {
        fn now(&self) -> DateTime<Local> {
            self.now.get()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    #[test]
    fn test_manual_clock_advances() {
        let clock = ManualClock::fixed();
        let start = clock.now();
        clock.advance(Duration::seconds(5));
        assert_eq!(clock.now() - start, Duration::seconds(5));
    }

    #[test]
    fn test_manual_clock_clones_share_time() {
        let clock = ManualClock::fixed();
        let other = clock.clone();
        clock.advance(Duration::minutes(1));
        assert_eq!(clock.now(), other.now());
    }
}
