mod consts;
mod ops;
mod prelude;
mod types;

pub use consts::*;
pub use types::{Weekday, days_in_month, is_leap_year, month_abbrev};

use crate::prelude::*;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;
use types::{days_before_month, days_before_year, month_label};

/// A calendar date in the proleptic Gregorian calendar.
///
/// `Date::new` stores its fields verbatim. Callers are trusted to pass a
/// real calendar date; use [`Date::try_new`] when the input needs checking.
/// Every derived value (weekday, day count, stepping) assumes a valid date
/// but never panics on an invalid one.
///
/// Ordering is lexicographic on `(year, month, day)`.
#[derive(
    Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display, Serialize, Deserialize,
)]
#[display(fmt = "{} {day}, {year}", "month_label(*month)")]
#[serde(try_from = "DateParts")]
pub struct Date {
    year: i32,
    month: u8,
    day: u8,
}

/// Error type for validated date construction.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DateError {
    /// Month is outside `1..=12`.
    #[error("Invalid month: {month} (must be 1-{max})", max = DECEMBER)]
    InvalidMonth { month: u8 },

    /// Day is zero or past the end of its month.
    #[error("Invalid day {day} for month {year}-{month:02} (must be 1-{max_day})")]
    InvalidDay {
        year: i32,
        month: u8,
        day: u8,
        max_day: u8,
    },
}

impl Date {
    /// Creates a date without validating it
    pub const fn new(year: i32, month: u8, day: u8) -> Self {
        Self { year, month, day }
    }

    /// Creates a date, checking that the month exists and the day falls
    /// inside it.
    ///
    /// # Errors
    /// Returns `DateError::InvalidMonth` if the month is outside 1-12 and
    /// `DateError::InvalidDay` if the day is 0 or past the end of the month.
    pub fn try_new(year: i32, month: u8, day: u8) -> Result<Self, DateError> {
        if !(JANUARY..=DECEMBER).contains(&month) {
            return Err(DateError::InvalidMonth { month });
        }
        let max_day = days_in_month(year, month);
        if !(MIN_DAY..=max_day).contains(&day) {
            return Err(DateError::InvalidDay {
                year,
                month,
                day,
                max_day,
            });
        }
        Ok(Self::new(year, month, day))
    }

    /// Whether this value names a real calendar date
    pub fn is_valid(&self) -> bool {
        Self::try_new(self.year, self.month, self.day).is_ok()
    }

    #[inline]
    pub const fn year(&self) -> i32 {
        self.year
    }

    #[inline]
    pub const fn month(&self) -> u8 {
        self.month
    }

    #[inline]
    pub const fn day(&self) -> u8 {
        self.day
    }

    /// Gregorian leap rule applied to this date's year
    pub const fn is_leap_year(&self) -> bool {
        is_leap_year(self.year)
    }

    /// Number of days in this date's month
    pub const fn days_in_month(&self) -> u8 {
        days_in_month(self.year, self.month)
    }

    /// Number of days `month` has in this date's year.
    ///
    /// Only the year of `self` is consulted, so February answers 29 or 28
    /// depending on whether the receiver's year is a leap year.
    pub const fn days_in_month_of(&self, month: u8) -> u8 {
        days_in_month(self.year, month)
    }

    /// English three-letter month abbreviation, `None` for months outside 1-12
    pub fn month_abbrev(&self) -> Option<&'static str> {
        month_abbrev(self.month)
    }

    /// Day of the week in `1..=7`, where 1 is Sunday and 7 is Saturday.
    ///
    /// Zeller's congruence with January and February counted as months 13
    /// and 14 of the previous year.
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn day_of_week(&self) -> u8 {
        let (m, y) = if self.month < 3 {
            (i64::from(self.month) + 12, i64::from(self.year) - 1)
        } else {
            (i64::from(self.month), i64::from(self.year))
        };
        let dow = (i64::from(self.day) + (13 * (m + 1)).div_euclid(5) + y + y.div_euclid(4)
            - y.div_euclid(100)
            + y.div_euclid(400))
        .rem_euclid(DAYS_PER_WEEK);
        match dow {
            0 => 7,
            n => n as u8,
        }
    }

    /// Day of the week as a [`Weekday`]
    pub fn weekday(&self) -> Weekday {
        Weekday::from_day_of_week(self.day_of_week())
    }

    /// Running day count where January 1 of year 1 is day 1.
    ///
    /// Dates before year 1 get counts of 0 and below, continuing the
    /// Gregorian cycle backwards.
    pub fn to_days(&self) -> i64 {
        days_before_year(self.year)
            + days_before_month(self.year, self.month)
            + i64::from(self.day)
    }

    /// Inverse of [`Date::to_days`].
    ///
    /// Day counts whose year does not fit in an `i32` wrap around.
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn from_days(days: i64) -> Self {
        let offset = days.saturating_sub(1);
        let cycles = offset.div_euclid(DAYS_PER_400_YEARS);
        let rem = offset.rem_euclid(DAYS_PER_400_YEARS);

        let (centuries, rem) = (rem / DAYS_PER_100_YEARS, rem % DAYS_PER_100_YEARS);
        let (quads, rem) = (rem / DAYS_PER_4_YEARS, rem % DAYS_PER_4_YEARS);
        let (years, rem) = (rem / DAYS_PER_YEAR, rem % DAYS_PER_YEAR);

        let year = (cycles * i64::from(GREGORIAN_CYCLE) + centuries * 100 + quads * 4 + years + 1)
            as i32;

        // last day of a 400- or 4-year cycle spills into the next year
        if centuries == 4 || years == 4 {
            return Self::new(year.wrapping_sub(1), DECEMBER, DECEMBER_LAST_DAY);
        }

        let mut month = JANUARY;
        let mut rem = rem;
        loop {
            let len = i64::from(days_in_month(year, month));
            if rem < len || month == DECEMBER {
                break;
            }
            rem -= len;
            month += 1;
        }
        Self::new(year, month, rem as u8 + MIN_DAY)
    }

    /// The day after this one
    pub const fn next_day(&self) -> Self {
        if self.day < self.days_in_month() {
            Self::new(self.year, self.month, self.day + 1)
        } else if self.month == DECEMBER {
            Self::new(self.year.wrapping_add(1), JANUARY, MIN_DAY)
        } else {
            Self::new(self.year, self.month.wrapping_add(1), MIN_DAY)
        }
    }

    /// The day before this one
    pub const fn previous_day(&self) -> Self {
        if self.day > MIN_DAY {
            Self::new(self.year, self.month, self.day - 1)
        } else if self.month == JANUARY {
            Self::new(self.year.wrapping_sub(1), DECEMBER, DECEMBER_LAST_DAY)
        } else {
            let month = self.month.wrapping_sub(1);
            Self::new(self.year, month, self.days_in_month_of(month))
        }
    }

    /// Moves `days` forward, or backward when negative. Zero returns `self`.
    pub fn add_days(&self, days: i64) -> Self {
        if days == 0 {
            return *self;
        }
        Self::from_days(self.to_days().saturating_add(days))
    }

    /// Moves `days` backward, or forward when negative
    pub fn sub_days(&self, days: i64) -> Self {
        self.add_days(days.saturating_neg())
    }

    /// Signed number of days from `other` to `self`, positive when `self`
    /// is later
    pub fn days_since(&self, other: &Self) -> i64 {
        self.to_days() - other.to_days()
    }

    pub fn equals(&self, other: &Self) -> bool {
        self == other
    }

    pub fn before(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Less
    }

    pub fn after(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Greater
    }
}

impl fmt::Debug for Date {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Date({}, {}, {})", self.year, self.month, self.day)
    }
}

/// Unvalidated field layout that deserialization checks through `try_new`
#[derive(Deserialize)]
struct DateParts {
    year: i32,
    month: u8,
    day: u8,
}

impl TryFrom<DateParts> for Date {
    type Error = DateError;

    fn try_from(parts: DateParts) -> Result<Self, Self::Error> {
        Self::try_new(parts.year, parts.month, parts.day)
    }
}

impl TryFrom<(i32, u8, u8)> for Date {
    type Error = DateError;

    fn try_from(value: (i32, u8, u8)) -> Result<Self, Self::Error> {
        Self::try_new(value.0, value.1, value.2)
    }
}

impl From<Date> for (i32, u8, u8) {
    fn from(date: Date) -> Self {
        (date.year, date.month, date.day)
    }
}
