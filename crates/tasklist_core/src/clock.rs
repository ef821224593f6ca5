//! Calendar clock capability.
//!
//! Everything that needs "today" asks a `Clock`, so date-sensitive rules can
//! be exercised with a pinned day.

use chrono::{Local, NaiveDate};

/// Source of the current calendar date (no time-of-day component).
pub trait Clock {
    fn today(&self) -> NaiveDate;
}

/// Local system date.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn today(&self) -> NaiveDate {
        Local::now().date_naive()
    }
}

/// Clock pinned to one date.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedClock(pub NaiveDate);

impl Clock for FixedClock {
    fn today(&self) -> NaiveDate {
        self.0
    }
}
