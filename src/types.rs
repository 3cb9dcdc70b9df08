use crate::consts::{
    CENTURY_CYCLE, DAYS_IN_MONTH, FEBRUARY, FEBRUARY_DAYS_LEAP, GREGORIAN_CYCLE, LEAP_YEAR_CYCLE,
    MAX_MONTH,
};
use crate::prelude::*;
use serde::{Deserialize, Serialize};

/// A detached `{day, month, year}` snapshot of a date.
///
/// Also the shape the [`Clock`](crate::Clock) collaborator reports "today" in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display)]
#[display(fmt = "{year:04}-{month:02}-{day:02}")]
pub struct DateDict {
    pub day: i32,
    pub month: i32,
    pub year: i32,
}

/// One populated slot of a month grid
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CalendarDay {
    /// Day of the month, starting at 1
    pub day: i32,
    /// Grid row, 0-based
    pub row: i32,
    /// ISO-8601 week number
    pub week: i32,
    /// Weekday, 0 = Monday
    pub weekday: i32,
}

// Helper functions

/// Snaps `value` into `lo..=hi`.
///
/// Unlike [`Ord::clamp`] this never panics: inverted bounds resolve to `lo`.
pub const fn clamp(value: i32, lo: i32, hi: i32) -> i32 {
    let capped = if value > hi { hi } else { value };
    if capped < lo { lo } else { capped }
}

pub const fn is_leap_year(year: i32) -> bool {
    (year % LEAP_YEAR_CYCLE == 0 && year % CENTURY_CYCLE != 0) || (year % GREGORIAN_CYCLE == 0)
}

/// Day count of a month that is already known to be in `1..=12`
pub const fn days_in_month(year: i32, month: i32) -> i32 {
    debug_assert!(month >= 1 && month <= MAX_MONTH);

    if month == FEBRUARY && is_leap_year(year) {
        FEBRUARY_DAYS_LEAP
    } else {
        DAYS_IN_MONTH[month as usize]
    }
}
