//! Deadline value object.
//!
//! # Responsibility
//! - Parse the strict `dd-mm-yyyy` deadline form.
//! - Reject dates that already lie in the past.
//!
//! # Invariants
//! - A constructed `Deadline` is never earlier than the day it was parsed on.
//! - A `Deadline` is immutable once constructed.

use crate::clock::Clock;
use chrono::NaiveDate;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;
use std::error::Error;
use std::fmt::{Display, Formatter};

/// `chrono` format matching the accepted textual form.
pub const DEADLINE_FORMAT: &str = "%d-%m-%Y";

// chrono alone accepts single-digit days/months and signed years.
static DEADLINE_SHAPE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\d{2}-\d{2}-\d{4}$").expect("valid deadline regex"));

/// Calendar date a task is due on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(into = "String")]
pub struct Deadline {
    date: NaiveDate,
}

impl Deadline {
    /// Parses `raw` against the date reported by `clock`.
    pub fn parse(raw: &str, clock: &dyn Clock) -> Result<Self, DeadlineError> {
        Self::parse_on(raw, clock.today())
    }

    /// Parses `raw` as a deadline that must not precede `today`.
    ///
    /// # Errors
    /// - `InvalidFormat` when `raw` is not a real `dd-mm-yyyy` date.
    /// - `InPast` when the date is strictly before `today`.
    pub fn parse_on(raw: &str, today: NaiveDate) -> Result<Self, DeadlineError> {
        let trimmed = raw.trim();
        if !DEADLINE_SHAPE_RE.is_match(trimmed) {
            return Err(DeadlineError::InvalidFormat(trimmed.to_string()));
        }
        let date = NaiveDate::parse_from_str(trimmed, DEADLINE_FORMAT)
            .map_err(|_| DeadlineError::InvalidFormat(trimmed.to_string()))?;
        if date < today {
            return Err(DeadlineError::InPast(date));
        }

        Ok(Self { date })
    }

    pub fn date(&self) -> NaiveDate {
        self.date
    }

    /// Returns whether this deadline falls on the clock's current day.
    ///
    /// Evaluated on every call; a deadline created yesterday for today's date
    /// is "today" only once the day actually arrives.
    pub fn is_today(&self, clock: &dyn Clock) -> bool {
        self.is_on(clock.today())
    }

    pub fn is_on(&self, day: NaiveDate) -> bool {
        self.date == day
    }
}

impl Display for Deadline {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.date.format(DEADLINE_FORMAT))
    }
}

impl From<Deadline> for String {
    fn from(value: Deadline) -> Self {
        value.to_string()
    }
}

/// Deadline construction failures.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeadlineError {
    /// Text is not a real `dd-mm-yyyy` calendar date.
    InvalidFormat(String),
    /// Date lies strictly before the current day.
    InPast(NaiveDate),
}

impl Display for DeadlineError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidFormat(raw) => write!(
                f,
                "Deadline cannot be added; \"{raw}\" is not a dd-mm-yyyy date"
            ),
            Self::InPast(_) => write!(f, "Deadline cannot be added; is in the past"),
        }
    }
}

impl Error for DeadlineError {}
