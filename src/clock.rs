//! Wall-clock and epoch collaborators, backed by `chrono`.

use chrono::{Datelike, Local, NaiveDate, Utc};

use crate::DateDict;

/// Source of "today" used to seed a date.
pub trait Clock {
    /// Returns today's calendar date, in UTC when `utc` is set and local time otherwise.
    fn today(&self, utc: bool) -> DateDict;
}

/// The host's system clock
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn today(&self, utc: bool) -> DateDict {
        let today = if utc {
            Utc::now().date_naive()
        } else {
            Local::now().date_naive()
        };
        to_dict(today)
    }
}

fn to_dict(date: NaiveDate) -> DateDict {
    // chrono keeps day <= 31 and month <= 12, so these never saturate
    DateDict {
        day: i32::try_from(date.day()).unwrap_or(i32::MAX),
        month: i32::try_from(date.month()).unwrap_or(i32::MAX),
        year: date.year(),
    }
}

/// Seconds since the Unix epoch at midnight UTC of the given calendar date.
///
/// Returns `None` when the triple does not name a real date.
pub fn unix_seconds(day: i32, month: i32, year: i32) -> Option<i64> {
    let day = u32::try_from(day).ok()?;
    let month = u32::try_from(month).ok()?;
    NaiveDate::from_ymd_opt(year, month, day)?
        .and_hms_opt(0, 0, 0)
        .map(|midnight| midnight.and_utc().timestamp())
}
