use crate::consts::{CENTURY_CYCLE, GREGORIAN_CYCLE, LEAP_YEAR_CYCLE};
use crate::{
    DAYS_PER_WEEK, Date, JANUARY, LONG_YEAR_WEEKS, MARCH, MIN_DAY, SECONDS_PER_DAY,
    SHORT_YEAR_WEEKS, WEEKDAY_OFFSETS, YEAR_END_THURSDAY, YEAR_END_WEDNESDAY, unix_seconds,
};

/// Days the weekday has advanced by the end of `year`, counting leap days.
const fn year_shift(year: i32) -> i32 {
    year + year.div_euclid(LEAP_YEAR_CYCLE) - year.div_euclid(CENTURY_CYCLE)
        + year.div_euclid(GREGORIAN_CYCLE)
}

impl Date {
    /// Weekday of the given date, `0 = Monday` .. `6 = Sunday`.
    pub fn get_weekday(&self, day: Option<i32>, month: Option<i32>, year: Option<i32>) -> i32 {
        let (day, month, year) = self.clamp_triple(day, month, year);
        // January and February count as the tail of the previous year
        let shifted_year = if month < MARCH { year - 1 } else { year };
        let offset = WEEKDAY_OFFSETS[(month - 1) as usize] + day - 1;
        (year_shift(shifted_year) + offset).rem_euclid(DAYS_PER_WEEK)
    }

    /// Weekday of 31 December of `year`, `0 = Sunday` .. `6 = Saturday`.
    ///
    /// The year is not clamped: ISO week math asks about the year before `min_year`.
    pub fn get_last_week_day_of_year(&self, year: Option<i32>) -> i32 {
        year_shift(year.unwrap_or(self.year)).rem_euclid(DAYS_PER_WEEK)
    }

    /// 53 when the year ends on a Thursday or the previous one ended on a Wednesday, else 52.
    pub fn get_number_of_weeks_of_year(&self, year: Option<i32>) -> i32 {
        let year = year.unwrap_or(self.year);
        if self.get_last_week_day_of_year(Some(year)) == YEAR_END_THURSDAY
            || self.get_last_week_day_of_year(Some(year - 1)) == YEAR_END_WEDNESDAY
        {
            LONG_YEAR_WEEKS
        } else {
            SHORT_YEAR_WEEKS
        }
    }

    /// 1-based ordinal of the date within its year.
    pub fn get_iso_day_of_year(&self, day: Option<i32>, month: Option<i32>, year: Option<i32>) -> i32 {
        let (day, month, year) = self.clamp_triple(day, month, year);
        // clamped triples always name a real date, so both conversions succeed
        let elapsed = unix_seconds(day, month, year)
            .zip(unix_seconds(MIN_DAY, JANUARY, year))
            .map_or(0, |(at, start)| (at - start).div_euclid(SECONDS_PER_DAY));
        i32::try_from(elapsed).unwrap_or(0) + 1
    }

    /// ISO-8601 week number, wrapping into the neighbouring year at the edges.
    pub fn get_iso_week_number(&self, day: Option<i32>, month: Option<i32>, year: Option<i32>) -> i32 {
        let (day, month, year) = self.clamp_triple(day, month, year);
        let ordinal = self.get_iso_day_of_year(Some(day), Some(month), Some(year)) - 1;
        let iso_weekday =
            (self.get_last_week_day_of_year(Some(year - 1)) + ordinal).rem_euclid(DAYS_PER_WEEK) + 1;
        let week = (ordinal + 1 - iso_weekday + 10).div_euclid(DAYS_PER_WEEK);

        if week < 1 {
            self.get_number_of_weeks_of_year(Some(year - 1))
        } else if week > self.get_number_of_weeks_of_year(Some(year)) {
            1
        } else {
            week
        }
    }
}
