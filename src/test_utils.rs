use crate::{Clock, Date, DateDict};

/// A clock frozen at one local date and one UTC date.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock {
    pub today: DateDict,
    pub today_utc: DateDict,
}

impl FixedClock {
    pub const fn new(day: i32, month: i32, year: i32) -> Self {
        let today = DateDict { day, month, year };
        Self {
            today,
            today_utc: today,
        }
    }

    pub const fn with_utc(mut self, day: i32, month: i32, year: i32) -> Self {
        self.today_utc = DateDict { day, month, year };
        self
    }
}

impl Clock for FixedClock {
    fn today(&self, utc: bool) -> DateDict {
        if utc { self.today_utc } else { self.today }
    }
}

/// Builds a fully specified date without touching the system clock.
pub fn date(day: i32, month: i32, year: i32) -> Date {
    Date::new_with_clock(&FixedClock::new(1, 1, 2000), false, Some(day), Some(month), Some(year))
}
