mod arith;
mod calendar;
mod clock;
mod consts;
mod format;
mod grid;
mod prelude;
mod types;

#[cfg(test)]
mod test_utils;

pub use clock::{Clock, SystemClock, unix_seconds};
pub use consts::*;
pub use format::FormatSpec;
pub use grid::{CalendarArray2d, CalendarDict};
pub use types::{CalendarDay, DateDict, clamp, days_in_month, is_leap_year};

use crate::prelude::*;
use log::{debug, trace};
use std::str::FromStr;

/// A calendar date that is always valid by construction.
///
/// Every write is clamped into range instead of rejected: day into
/// `1..=days_in_month`, month into `1..=12`, year into `min_year..=max_year`.
/// Setters mutate in place and return `&mut Self` so calls chain on the same value.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Display, serde::Serialize, serde::Deserialize)]
#[display(fmt = "{year:04}-{month:02}-{day:02}")]
#[serde(from = "DateRecord", into = "DateRecord")]
pub struct Date {
    day: i32,
    month: i32,
    year: i32,
    min_year: i32,
    max_year: i32,
}

/// Error produced when reading a date from its `YYYY-MM-DD` text form.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    #[error("Empty date string")]
    EmptyInput,

    /// Wrong number of components.
    #[error("Invalid date format: {0}")]
    InvalidFormat(String),

    /// A component that is not an integer.
    #[error("Invalid {component}: {value:?} is not a number")]
    InvalidComponent {
        component: &'static str,
        value: String,
    },
}

fn clamp_logged(field: &'static str, raw: i32, lo: i32, hi: i32) -> i32 {
    let value = clamp(raw, lo, hi);
    if value != raw {
        trace!("clamped {field} {raw} -> {value} (range {lo}..={hi})");
    }
    value
}

impl Date {
    /// Creates a date, filling omitted components from the local system date.
    pub fn new(day: Option<i32>, month: Option<i32>, year: Option<i32>) -> Self {
        Self::new_with_clock(&SystemClock, false, day, month, year)
    }

    /// Creates a date, filling omitted components from `clock`.
    pub fn new_with_clock<C: Clock + ?Sized>(
        clock: &C,
        utc: bool,
        day: Option<i32>,
        month: Option<i32>,
        year: Option<i32>,
    ) -> Self {
        let (Some(day), Some(month), Some(year)) = (day, month, year) else {
            let today = clock.today(utc);
            debug!("seeding date from clock: today is {today} (utc = {utc})");
            return Self::from_parts(
                day.unwrap_or(today.day),
                month.unwrap_or(today.month),
                year.unwrap_or(today.year),
            );
        };
        Self::from_parts(day, month, year)
    }

    /// Month and year are written first so the day is clamped against them.
    fn from_parts(day: i32, month: i32, year: i32) -> Self {
        let mut date = Self {
            day: MIN_DAY,
            month: JANUARY,
            year: DEFAULT_MIN_YEAR,
            min_year: DEFAULT_MIN_YEAR,
            max_year: DEFAULT_MAX_YEAR,
        };
        date.set_month(month).set_year(year).set_day(day);
        date
    }

    #[inline]
    pub const fn day(&self) -> i32 {
        self.day
    }

    #[inline]
    pub const fn month(&self) -> i32 {
        self.month
    }

    #[inline]
    pub const fn year(&self) -> i32 {
        self.year
    }

    #[inline]
    pub const fn min_year(&self) -> i32 {
        self.min_year
    }

    #[inline]
    pub const fn max_year(&self) -> i32 {
        self.max_year
    }

    /// Clamps a value meant for `min_year`/`max_year` into the outer range `1000..=9999`.
    pub fn clamp_year_bounds(value: i32) -> i32 {
        clamp_logged("year bound", value, MIN_YEAR_BOUND, MAX_YEAR_BOUND)
    }

    /// Clamps `year` (default: the current year) into `min_year..=max_year`.
    pub fn clamp_year(&self, year: Option<i32>) -> i32 {
        clamp_logged("year", year.unwrap_or(self.year), self.min_year, self.max_year)
    }

    /// Clamps `month` (default: the current month) into `1..=12`.
    pub fn clamp_month(&self, month: Option<i32>) -> i32 {
        clamp_logged("month", month.unwrap_or(self.month), JANUARY, MAX_MONTH)
    }

    /// Clamps `day` into the length of the given month.
    ///
    /// Month and year are clamped first, so the bound is always that of a real month.
    pub fn clamp_day(&self, day: Option<i32>, month: Option<i32>, year: Option<i32>) -> i32 {
        let max_day = self.days_in_month(month, year);
        clamp_logged("day", day.unwrap_or(self.day), MIN_DAY, max_day)
    }

    /// Number of days in `month` of `year`, both clamped first and defaulting to the current fields.
    pub fn days_in_month(&self, month: Option<i32>, year: Option<i32>) -> i32 {
        days_in_month(self.clamp_year(year), self.clamp_month(month))
    }

    /// Clamps a whole (day, month, year) triple, defaulting to the current fields.
    pub(crate) fn clamp_triple(
        &self,
        day: Option<i32>,
        month: Option<i32>,
        year: Option<i32>,
    ) -> (i32, i32, i32) {
        let month = self.clamp_month(month);
        let year = self.clamp_year(year);
        (self.clamp_day(day, Some(month), Some(year)), month, year)
    }

    /// Sets the day, clamped against the current month and year.
    pub fn set_day(&mut self, day: i32) -> &mut Self {
        self.day = self.clamp_day(Some(day), Some(self.month), Some(self.year));
        self
    }

    /// Sets the month. The day is left as is, even if the new month is shorter.
    pub fn set_month(&mut self, month: i32) -> &mut Self {
        self.month = self.clamp_month(Some(month));
        self
    }

    /// Sets the year. The day is left as is, even if February loses its leap day.
    pub fn set_year(&mut self, year: i32) -> &mut Self {
        self.year = self.clamp_year(Some(year));
        self
    }

    /// Sets the lower year bound. The current year is not re-clamped.
    pub fn set_min_year(&mut self, value: i32) -> &mut Self {
        self.min_year = Self::clamp_year_bounds(value);
        self
    }

    /// Sets the upper year bound. The current year is not re-clamped.
    pub fn set_max_year(&mut self, value: i32) -> &mut Self {
        self.max_year = Self::clamp_year_bounds(value);
        self
    }

    /// Sets both year bounds and then re-clamps the current year into them.
    pub fn with_bounds(&mut self, min_year: i32, max_year: i32) -> &mut Self {
        let year = self.year;
        self.set_min_year(min_year).set_max_year(max_year).set_year(year)
    }

    /// Resets the date to today from the system clock.
    pub fn set_today(&mut self, utc: bool) -> &mut Self {
        self.set_today_with(&SystemClock, utc)
    }

    /// Resets the date to today as reported by `clock`.
    pub fn set_today_with<C: Clock + ?Sized>(&mut self, clock: &C, utc: bool) -> &mut Self {
        let today = clock.today(utc);
        debug!("resetting date {self} to today {today} (utc = {utc})");
        self.set_month(today.month).set_year(today.year).set_day(today.day)
    }

    /// Returns a detached `{day, month, year}` snapshot.
    pub const fn get_dict(&self) -> DateDict {
        DateDict {
            day: self.day,
            month: self.month,
            year: self.year,
        }
    }
}

impl Default for Date {
    /// Today, in local time.
    fn default() -> Self {
        Self::new(None, None, None)
    }
}

impl From<&Date> for DateDict {
    fn from(date: &Date) -> Self {
        date.get_dict()
    }
}

impl FromStr for Date {
    type Err = ParseError;

    /// Reads `YYYY-MM-DD`. Out-of-range numbers are clamped like any other input.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(ParseError::EmptyInput);
        }

        let parts: Vec<&str> = trimmed.split(DATE_SEPARATOR).map(str::trim).collect();
        let [year, month, day] = parts.as_slice() else {
            return Err(ParseError::InvalidFormat(format!(
                "expected YYYY{DATE_SEPARATOR}MM{DATE_SEPARATOR}DD, found {} component(s) in {trimmed:?}",
                parts.len()
            )));
        };

        let year = parse_component("year", year)?;
        let month = parse_component("month", month)?;
        let day = parse_component("day", day)?;
        Ok(Self::from_parts(day, month, year))
    }
}

fn parse_component(component: &'static str, value: &str) -> Result<i32, ParseError> {
    let digits = value.strip_prefix('+').unwrap_or(value);
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return Err(ParseError::InvalidComponent {
            component,
            value: value.to_owned(),
        });
    }
    // too many digits for i32 saturates, and the clamp takes it from there
    Ok(digits.parse().unwrap_or(i32::MAX))
}

/// Serialized shape of a [`Date`], bounds included.
#[derive(serde::Serialize, serde::Deserialize)]
struct DateRecord {
    day: i32,
    month: i32,
    year: i32,
    min_year: i32,
    max_year: i32,
}

impl From<Date> for DateRecord {
    fn from(date: Date) -> Self {
        let Date {
            day,
            month,
            year,
            min_year,
            max_year,
        } = date;
        Self {
            day,
            month,
            year,
            min_year,
            max_year,
        }
    }
}

impl From<DateRecord> for Date {
    /// Restores a record as written. Each field is only held to the range a
    /// live date can reach, so a stale day or a year outside later-narrowed
    /// bounds comes back unchanged.
    fn from(record: DateRecord) -> Self {
        Self {
            day: clamp_logged("day", record.day, MIN_DAY, MAX_DAY),
            month: clamp_logged("month", record.month, JANUARY, MAX_MONTH),
            year: Self::clamp_year_bounds(record.year),
            min_year: Self::clamp_year_bounds(record.min_year),
            max_year: Self::clamp_year_bounds(record.max_year),
        }
    }
}
