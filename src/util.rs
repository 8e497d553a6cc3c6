//! Time helpers: the clock abstraction used to timestamp posts.

use std::cell::Cell;
use std::rc::Rc;

use chrono::{DateTime, Duration, FixedOffset};

/// Source of post creation timestamps.
pub trait Clock {
    fn now(&self) -> DateTime<FixedOffset>;
}

/// Wall clock in the local timezone.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<FixedOffset> {
        chrono::Local::now().into()
    }
}

/// Deterministic clock for tests and demos.
///
/// Every call to [`Clock::now`] returns the current instant and then advances
/// it by `step`, so consecutive posts get strictly increasing timestamps.
#[derive(Debug, Clone)]
pub struct ManualClock {
    current: Cell<DateTime<FixedOffset>>,
    step: Duration,
}

impl ManualClock {
    pub fn new(start: DateTime<FixedOffset>, step: Duration) -> Self {
        Self {
            current: Cell::new(start),
            step,
        }
    }

    /// Start at the given RFC 3339 timestamp, ticking one second per reading.
    pub fn starting_at(timestamp: &str) -> Result<Self, chrono::ParseError> {
        let start = parse_timestamp(timestamp)?;
        Ok(Self::new(start, Duration::seconds(1)))
    }

    /// A clock that never advances; every post shares the same timestamp.
    pub fn frozen(at: DateTime<FixedOffset>) -> Self {
        Self::new(at, Duration::zero())
    }

    /// Jump forward without producing a reading.
    pub fn advance(&self, by: Duration) {
        self.current.set(self.current.get() + by);
    }

    /// The instant the next reading will return.
    pub fn peek(&self) -> DateTime<FixedOffset> {
        self.current.get()
    }
}

impl Clock for ManualClock {
    fn now(&self) -> DateTime<FixedOffset> {
        let now = self.current.get();
        self.current.set(now + self.step);
        now
    }
}

// Lets a test keep a handle on a clock it has handed to the network.
impl<C: Clock + ?Sized> Clock for Rc<C> {
    fn now(&self) -> DateTime<FixedOffset> {
        (**self).now()
    }
}

pub fn parse_timestamp(s: &str) -> Result<DateTime<FixedOffset>, chrono::ParseError> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Ok(dt);
    }
    // Example: 2025-08-20T15:23:45+0200
    let custom_format = "%Y-%m-%dT%H:%M:%S%z";
    DateTime::parse_from_str(s, custom_format)
}
