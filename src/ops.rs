//! Operator impls for day arithmetic on [`Date`].
//!
//! `Date - Date` and `Date - i64` are separate impls with separate outputs:
//! the first is a signed day difference, the second a new date.

use std::ops::{Add, AddAssign, Sub, SubAssign};

use crate::Date;

impl Add<i64> for Date {
    type Output = Self;

    #[inline]
    fn add(self, days: i64) -> Self {
        self.add_days(days)
    }
}

impl AddAssign<i64> for Date {
    #[inline]
    fn add_assign(&mut self, days: i64) {
        *self = self.add_days(days);
    }
}

impl Sub<i64> for Date {
    type Output = Self;

    #[inline]
    fn sub(self, days: i64) -> Self {
        self.sub_days(days)
    }
}

impl SubAssign<i64> for Date {
    #[inline]
    fn sub_assign(&mut self, days: i64) {
        *self = self.sub_days(days);
    }
}

/// Number of days between two dates, negative when `rhs` is later
impl Sub for Date {
    type Output = i64;

    #[inline]
    fn sub(self, rhs: Self) -> i64 {
        self.days_since(&rhs)
    }
}
