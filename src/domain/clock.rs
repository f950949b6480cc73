//! Time source for entry timestamps

use chrono::{Local, NaiveDate, Utc};

/// Supplies `updatedAt` timestamps and the default draft date
pub trait Clock {
    /// Milliseconds since the Unix epoch
    fn now_millis(&self) -> i64;

    /// Current local calendar date
    fn today(&self) -> NaiveDate;
}

/// Wall clock
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now_millis(&self) -> i64 {
        Utc::now().timestamp_millis()
    }

    fn today(&self) -> NaiveDate {
        Local::now().date_naive()
    }
}

impl<C: Clock + ?Sized> Clock for &C {
    fn now_millis(&self) -> i64 {
        (**self).now_millis()
    }

    fn today(&self) -> NaiveDate {
        (**self).today()
    }
}
