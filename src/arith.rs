use crate::{DECEMBER, Date, JANUARY, MAX_MONTH, MIN_DAY};

impl Date {
    /// Steps the date `max_iteration` days forward (`mode = true`) or backward.
    ///
    /// Each step re-reads the month length, so long walks carry across month
    /// and year boundaries one day at a time.
    pub fn increment_day(&mut self, mode: bool, max_iteration: u32) -> &mut Self {
        let step = if mode { 1 } else { -1 };
        for _ in 0..max_iteration {
            self.day += step;
            if self.day > self.days_in_month(None, None) {
                self.increment_month(true, 1);
                self.day = MIN_DAY;
            } else if self.day < MIN_DAY {
                self.increment_month(false, 1);
                self.day = self.days_in_month(None, None);
            }
        }
        self
    }

    /// Steps the month `max_iteration` times, wrapping into the next or previous year.
    ///
    /// The day is not re-clamped, so 31 January stepped forward reads 31 February
    /// until the day is next written.
    pub fn increment_month(&mut self, mode: bool, max_iteration: u32) -> &mut Self {
        let step = if mode { 1 } else { -1 };
        for _ in 0..max_iteration {
            self.month += step;
            if self.month > MAX_MONTH {
                self.month = JANUARY;
                self.year = self.clamp_year(Some(self.year + 1));
            } else if self.month < JANUARY {
                self.month = DECEMBER;
                self.year = self.clamp_year(Some(self.year - 1));
            }
        }
        self
    }

    /// Moves the year by `max_iteration`, then re-clamps the day against the new year.
    pub fn increment_year(&mut self, mode: bool, max_iteration: u32) -> &mut Self {
        let delta = i32::try_from(max_iteration).unwrap_or(i32::MAX);
        let target = if mode {
            self.year.saturating_add(delta)
        } else {
            self.year.saturating_sub(delta)
        };
        self.year = self.clamp_year(Some(target));
        let day = self.day;
        self.set_day(day)
    }
}

#[cfg(test)]
mod tests {
    use crate::test_utils::date;

    #[test]
    fn test_increment_day_cases() {
        struct TestCase {
            start: (i32, i32, i32),
            mode: bool,
            steps: u32,
            expected: &'static str,
            description: &'static str,
        }

        let cases = [
            TestCase {
                start: (14, 6, 2021),
                mode: true,
                steps: 1,
                expected: "2021-06-15",
                description: "mid-month step",
            },
            TestCase {
                start: (30, 4, 2023),
                mode: true,
                steps: 1,
                expected: "2023-05-01",
                description: "end of 30-day month",
            },
            TestCase {
                start: (28, 2, 2024),
                mode: true,
                steps: 1,
                expected: "2024-02-29",
                description: "into leap day",
            },
            TestCase {
                start: (28, 2, 2023),
                mode: true,
                steps: 1,
                expected: "2023-03-01",
                description: "past non-leap February",
            },
            TestCase {
                start: (31, 12, 2023),
                mode: true,
                steps: 1,
                expected: "2024-01-01",
                description: "new year",
            },
            TestCase {
                start: (1, 3, 2024),
                mode: false,
                steps: 1,
                expected: "2024-02-29",
                description: "back into leap day",
            },
            TestCase {
                start: (1, 1, 2024),
                mode: false,
                steps: 1,
                expected: "2023-12-31",
                description: "back into previous year",
            },
            TestCase {
                start: (30, 12, 2023),
                mode: true,
                steps: 5,
                expected: "2024-01-04",
                description: "multi-step across year end",
            },
            TestCase {
                start: (2, 3, 2023),
                mode: false,
                steps: 30,
                expected: "2023-01-31",
                description: "multi-step back across February",
            },
            TestCase {
                start: (1, 1, 2023),
                mode: true,
                steps: 365,
                expected: "2024-01-01",
                description: "whole year",
            },
            TestCase {
                start: (9, 9, 2009),
                mode: true,
                steps: 0,
                expected: "2009-09-09",
                description: "zero steps is a no-op",
            },
        ];

        for case in &cases {
            let (d, m, y) = case.start;
            let mut value = date(d, m, y);
            value.increment_day(case.mode, case.steps);
            assert_eq!(value.to_string(), case.expected, "{}", case.description);
        }
    }

    #[test]
    fn test_increment_day_round_trip() {
        for (d, m, y) in [(31, 1, 2023), (28, 2, 2023), (29, 2, 2024), (31, 12, 1999), (1, 1, 2000)] {
            let original = date(d, m, y);
            let mut value = original.clone();
            value.increment_day(true, 1).increment_day(false, 1);
            assert_eq!(value, original, "round trip from {original}");
        }
    }

    #[test]
    fn test_increment_day_from_stale_day() {
        let mut value = date(31, 1, 2023);
        value.set_month(2);
        value.increment_day(true, 1);
        assert_eq!(value.to_string(), "2023-03-01");
    }

    #[test]
    fn test_decrement_day_from_stale_day() {
        let mut value = date(31, 1, 2023);
        value.set_month(2);
        // 30 still exceeds February, so the step backward rolls forward
        value.increment_day(false, 1);
        assert_eq!(value.to_string(), "2023-03-01");

        let mut value = date(31, 3, 2023);
        value.set_month(4);
        // 30 fits April, so the stale day simply comes back into range
        value.increment_day(false, 1);
        assert_eq!(value.to_string(), "2023-04-30");
    }

    #[test]
    fn test_increment_day_at_year_bounds() {
        let mut value = date(31, 12, 9999);
        value.increment_day(true, 1);
        assert_eq!(value.to_string(), "9999-01-01", "year stays at max_year");

        let mut value = date(1, 1, 1000);
        value.increment_day(false, 1);
        assert_eq!(value.to_string(), "1000-12-31", "year stays at min_year");
    }

    #[test]
    fn test_increment_month_wraps_years() {
        let mut value = date(15, 11, 2022);
        value.increment_month(true, 3);
        assert_eq!(value.to_string(), "2023-02-15");

        value.increment_month(false, 14);
        assert_eq!(value.to_string(), "2021-12-15");
    }

    #[test]
    fn test_increment_month_leaves_day_stale() {
        let mut value = date(31, 1, 2023);
        let chained: *const crate::Date = value.increment_month(true, 1);
        assert!(std::ptr::eq(chained, &value));
        assert_eq!((value.day(), value.month()), (31, 2));
    }

    #[test]
    fn test_increment_year_reclamps_day() {
        let mut value = date(29, 2, 2024);
        value.increment_year(true, 1);
        assert_eq!(value.to_string(), "2025-02-28");

        let mut value = date(29, 2, 2024);
        value.increment_year(false, 4);
        assert_eq!(value.to_string(), "2020-02-29");
    }

    #[test]
    fn test_increment_year_clamps_to_bounds() {
        let mut value = date(1, 6, 9998);
        value.increment_year(true, 5);
        assert_eq!(value.year(), 9999);

        value.set_min_year(2000);
        value.increment_year(false, u32::MAX);
        assert_eq!(value.year(), 2000);
    }
}
