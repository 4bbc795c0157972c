//! Calendar date primitives shared by every date picker adapter.
//!
//! Dates are proleptic Gregorian and carry no time of day, so comparisons and
//! week arithmetic never depend on time zones or daylight saving.
use std::fmt;

use chrono::{Datelike, Days, Local, NaiveDate};

pub use chrono::Weekday;

/// A calendar date expressed as year, month (1-12), and day.
///
/// Ordering is chronological.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CalendarDate(NaiveDate);

impl CalendarDate {
    /// Creates a calendar date if the values are valid.
    pub fn new(year: i32, month: u8, day: u8) -> Option<Self> {
        NaiveDate::from_ymd_opt(year, month.into(), day.into()).map(Self)
    }

    /// Returns the year.
    pub fn year(&self) -> i32 {
        self.0.year()
    }

    /// Returns the month (1-12).
    pub fn month(&self) -> u8 {
        self.0.month() as u8
    }

    /// Returns the day of the month (1-31).
    pub fn day(&self) -> u8 {
        self.0.day() as u8
    }

    /// Returns the current date in the local time zone.
    pub fn today() -> Self {
        Self(Local::now().date_naive())
    }

    /// Returns the month containing this date.
    pub fn year_month(&self) -> YearMonth {
        YearMonth {
            year: self.year(),
            month: self.month(),
        }
    }

    /// Returns the day of the week.
    pub fn weekday(&self) -> Weekday {
        self.0.weekday()
    }

    /// Returns the date shifted by `delta` days, or `None` past the
    /// supported range.
    pub fn add_days(&self, delta: i64) -> Option<Self> {
        let days = Days::new(delta.unsigned_abs());
        let shifted = if delta >= 0 {
            self.0.checked_add_days(days)
        } else {
            self.0.checked_sub_days(days)
        };
        shifted.map(Self)
    }

    /// Successive days starting at this one.
    pub fn iter_days(&self) -> impl Iterator<Item = CalendarDate> {
        self.0.iter_days().map(Self)
    }

    /// Whole days from `earlier` to this date; negative when `earlier` is
    /// later.
    pub fn days_since(&self, earlier: CalendarDate) -> i64 {
        self.0.signed_duration_since(earlier.0).num_days()
    }

    /// Returns the ISO-8601 week number of this date.
    ///
    /// Weeks start on Monday and week 1 is the week holding the year's first
    /// Thursday.
    pub fn week_number(&self) -> u32 {
        week_number(*self)
    }

    /// The underlying `chrono` date.
    pub fn naive(&self) -> NaiveDate {
        self.0
    }
}

impl From<NaiveDate> for CalendarDate {
    fn from(date: NaiveDate) -> Self {
        Self(date)
    }
}

impl From<CalendarDate> for NaiveDate {
    fn from(date: CalendarDate) -> Self {
        date.0
    }
}

impl fmt::Display for CalendarDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format("%Y-%m-%d"))
    }
}

/// A year and month pair used as the calendar navigation cursor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct YearMonth {
    year: i32,
    month: u8,
}

impl YearMonth {
    /// Creates a year/month pair if the values are valid.
    pub fn new(year: i32, month: u8) -> Option<Self> {
        NaiveDate::from_ymd_opt(year, month.into(), 1)?;
        Some(Self { year, month })
    }

    /// Returns the year.
    pub fn year(&self) -> i32 {
        self.year
    }

    /// Returns the month (1-12).
    pub fn month(&self) -> u8 {
        self.month
    }

    /// Returns the date for this month at the provided day.
    pub fn to_date(&self, day: u8) -> Option<CalendarDate> {
        CalendarDate::new(self.year, self.month, day)
    }

    /// Returns the first day of this month, clamped to the supported range.
    pub fn first_day(&self) -> CalendarDate {
        match self.to_date(1) {
            Some(date) => date,
            None if self.year < 0 => CalendarDate(NaiveDate::MIN),
            None => CalendarDate(NaiveDate::MAX),
        }
    }

    /// Number of days in this month.
    pub fn days_in_month(&self) -> u8 {
        days_in_month(self.year, self.month)
    }

    /// Adds or subtracts months, adjusting the year as needed.
    pub fn add_months(&self, delta: i32) -> Self {
        let total = self.year * 12 + (self.month as i32 - 1) + delta;
        let year = total.div_euclid(12);
        let month = (total.rem_euclid(12) + 1) as u8;
        Self { year, month }
    }

    /// Adds or subtracts whole years, keeping the month.
    pub fn add_years(&self, delta: i32) -> Self {
        Self {
            year: self.year + delta,
            month: self.month,
        }
    }

    /// Returns the same month in another year.
    pub fn with_year(&self, year: i32) -> Self {
        Self {
            year,
            month: self.month,
        }
    }

    /// Returns another month of the same year, or `None` for an invalid month.
    pub fn with_month(&self, month: u8) -> Option<Self> {
        Self::new(self.year, month)
    }
}

impl From<CalendarDate> for YearMonth {
    fn from(date: CalendarDate) -> Self {
        date.year_month()
    }
}

/// Returns the number of days in `month` of `year`, or 0 for an invalid
/// month.
pub fn days_in_month(year: i32, month: u8) -> u8 {
    (28..=31)
        .rev()
        .find(|&day| NaiveDate::from_ymd_opt(year, month.into(), day).is_some())
        .unwrap_or(0) as u8
}

/// Returns true for Gregorian leap years.
pub fn is_leap_year(year: i32) -> bool {
    NaiveDate::from_ymd_opt(year, 2, 29).is_some()
}

/// ISO-8601 week number.
pub fn week_number(date: CalendarDate) -> u32 {
    date.0.iso_week().week()
}
