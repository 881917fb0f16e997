/// Month number for January
pub const JANUARY: u8 = 1;
/// Month number for February
pub const FEBRUARY: u8 = 2;
/// Month number for December
pub const DECEMBER: u8 = 12;

/// First day of month
pub const MIN_DAY: u8 = 1;
/// Last day of December
pub const DECEMBER_LAST_DAY: u8 = 31;

/// Days in February for leap years
pub const FEBRUARY_DAYS_LEAP: u8 = 29;
/// Days in February for common years
pub const FEBRUARY_DAYS_COMMON: u8 = 28;
/// Length of April, June, September and November
pub const SHORT_MONTH_DAYS: u8 = 30;
/// Length of every other month
pub const LONG_MONTH_DAYS: u8 = 31;

/// English month abbreviations (index 0 is unused, months are 1-indexed)
pub const MONTH_ABBREVIATIONS: [&str; 13] = [
    "", "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

/// Rendered in place of a month name when the month is outside `1..=12`
pub const INVALID_MONTH_ABBREV: &str = "BAD";

/// Leap year occurs every 4 years
pub(crate) const LEAP_YEAR_CYCLE: i32 = 4;
/// Century years are not leap years unless...
pub(crate) const CENTURY_CYCLE: i32 = 100;
/// ...they are divisible by 400 (Gregorian calendar correction)
pub(crate) const GREGORIAN_CYCLE: i32 = 400;

/// Days in a common year
pub(crate) const DAYS_PER_YEAR: i64 = 365;
/// Days in one full 4-year cycle
pub(crate) const DAYS_PER_4_YEARS: i64 = 4 * DAYS_PER_YEAR + 1;
/// Days in one full 100-year cycle (the century year is not leap)
pub(crate) const DAYS_PER_100_YEARS: i64 = 25 * DAYS_PER_4_YEARS - 1;
/// Days in one full 400-year Gregorian cycle
pub(crate) const DAYS_PER_400_YEARS: i64 = 4 * DAYS_PER_100_YEARS + 1;

/// Days in a week
pub(crate) const DAYS_PER_WEEK: i64 = 7;
