use crate::consts::{
    CENTURY_CYCLE, DAYS_PER_YEAR, FEBRUARY, FEBRUARY_DAYS_COMMON, FEBRUARY_DAYS_LEAP,
    GREGORIAN_CYCLE, INVALID_MONTH_ABBREV, LEAP_YEAR_CYCLE, LONG_MONTH_DAYS, MONTH_ABBREVIATIONS,
    SHORT_MONTH_DAYS,
};
use crate::prelude::*;
use serde::{Deserialize, Serialize};

/// A day of the week, numbered the way [`Date::day_of_week`](crate::Date::day_of_week)
/// numbers it: Sunday is 1 and Saturday is 7.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display, Serialize, Deserialize,
)]
pub enum Weekday {
    Sunday = 1,
    Monday = 2,
    Tuesday = 3,
    Wednesday = 4,
    Thursday = 5,
    Friday = 6,
    Saturday = 7,
}

impl Weekday {
    /// All weekdays in numbering order, starting with Sunday
    pub const ALL: [Self; 7] = [
        Self::Sunday,
        Self::Monday,
        Self::Tuesday,
        Self::Wednesday,
        Self::Thursday,
        Self::Friday,
        Self::Saturday,
    ];

    /// Returns the weekday number in `1..=7`
    #[inline]
    pub const fn number(self) -> u8 {
        self as u8
    }

    /// Looks up a weekday by its number, `None` outside `1..=7`
    pub const fn from_number(number: u8) -> Option<Self> {
        match number {
            1 => Some(Self::Sunday),
            2 => Some(Self::Monday),
            3 => Some(Self::Tuesday),
            4 => Some(Self::Wednesday),
            5 => Some(Self::Thursday),
            6 => Some(Self::Friday),
            7 => Some(Self::Saturday),
            _ => None,
        }
    }

    // Callers only pass values produced by `day_of_week`, which are in 1..=7.
    pub(crate) const fn from_day_of_week(number: u8) -> Self {
        match Self::from_number(number) {
            Some(weekday) => weekday,
            None => Self::Saturday,
        }
    }

    /// The following day, wrapping Saturday back to Sunday
    pub const fn succ(self) -> Self {
        Self::from_day_of_week(self.number() % 7 + 1)
    }
}

// Helper functions

pub const fn is_leap_year(year: i32) -> bool {
    (year % LEAP_YEAR_CYCLE == 0 && year % CENTURY_CYCLE != 0) || (year % GREGORIAN_CYCLE == 0)
}

/// Length of `month` in `year`. Anything that is not a 30-day month or
/// February counts as 31 days, including months outside `1..=12`.
pub const fn days_in_month(year: i32, month: u8) -> u8 {
    match month {
        FEBRUARY if is_leap_year(year) => FEBRUARY_DAYS_LEAP,
        FEBRUARY => FEBRUARY_DAYS_COMMON,
        4 | 6 | 9 | 11 => SHORT_MONTH_DAYS,
        _ => LONG_MONTH_DAYS,
    }
}

/// Days in all years strictly before `year`, counting from year 1.
///
/// Years before 1 continue the same cycle backwards, so the result is
/// negative for them.
pub fn days_before_year(year: i32) -> i64 {
    let prior = i64::from(year) - 1;
    prior * DAYS_PER_YEAR + prior.div_euclid(i64::from(LEAP_YEAR_CYCLE))
        - prior.div_euclid(i64::from(CENTURY_CYCLE))
        + prior.div_euclid(i64::from(GREGORIAN_CYCLE))
}

/// Days in the months of `year` strictly before `month`
pub fn days_before_month(year: i32, month: u8) -> i64 {
    (1..month)
        .map(|m| i64::from(days_in_month(year, m)))
        .sum()
}

/// English three-letter abbreviation for `month`, `None` outside `1..=12`
pub fn month_abbrev(month: u8) -> Option<&'static str> {
    match month {
        0 => None,
        m => MONTH_ABBREVIATIONS.get(usize::from(m)).copied(),
    }
}

pub fn month_label(month: u8) -> &'static str {
    month_abbrev(month).unwrap_or(INVALID_MONTH_ABBREV)
}
