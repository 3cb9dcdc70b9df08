use std::collections::BTreeMap;

use crate::{
    CALENDAR_COLUMNS, CALENDAR_ROWS, CALENDAR_SLOTS, CalendarDay, DAYS_PER_WEEK, Date, EMPTY_CELL,
    MIN_DAY, MONTH_NAMES, WEEKDAY_NAMES,
};

/// Slot index (`0..42`) to the day shown there, `None` for padding slots.
pub type CalendarDict = BTreeMap<usize, Option<CalendarDay>>;

/// Six rows of seven two-character cells.
pub type CalendarArray2d = [[String; CALENDAR_COLUMNS]; CALENDAR_ROWS];

impl Date {
    /// Lays the month out over 42 slots, starting at the weekday of its first day.
    pub fn get_calendar_dict(&self, month: Option<i32>, year: Option<i32>) -> CalendarDict {
        let month = self.clamp_month(month);
        let year = self.clamp_year(year);
        let first = self.get_weekday(Some(MIN_DAY), Some(month), Some(year));
        let length = self.days_in_month(Some(month), Some(year));

        (0..CALENDAR_SLOTS)
            .zip(0_i32..)
            .map(|(slot, index)| {
                let offset = index - first;
                let entry = (0..length).contains(&offset).then(|| {
                    let day = offset + 1;
                    CalendarDay {
                        day,
                        row: index / DAYS_PER_WEEK,
                        week: self.get_iso_week_number(Some(day), Some(month), Some(year)),
                        weekday: self.get_weekday(Some(day), Some(month), Some(year)),
                    }
                });
                (slot, entry)
            })
            .collect()
    }

    /// The month grid as text cells: zero-padded days, blanks for padding slots.
    pub fn get_calendar_array2d(&self, month: Option<i32>, year: Option<i32>) -> CalendarArray2d {
        let slots = self.get_calendar_dict(month, year);
        std::array::from_fn(|row| {
            std::array::from_fn(|column| {
                slots
                    .get(&(row * CALENDAR_COLUMNS + column))
                    .copied()
                    .flatten()
                    .map_or_else(|| EMPTY_CELL.to_owned(), |slot| format!("{:02}", slot.day))
            })
        })
    }

    /// Title, weekday header and grid rows, one per line.
    pub fn render_calendar(&self, month: Option<i32>, year: Option<i32>) -> String {
        let month = self.clamp_month(month);
        let year = self.clamp_year(year);

        let title = format!("{} {year}", MONTH_NAMES[(month - 1) as usize]);
        let header = WEEKDAY_NAMES
            .iter()
            .map(|name| &name[..2])
            .collect::<Vec<_>>()
            .join(" ");

        let mut lines = vec![title, header];
        lines.extend(
            self.get_calendar_array2d(Some(month), Some(year))
                .iter()
                .map(|row| row.join(" ")),
        );
        lines.join("\n")
    }

    /// Prints [`Date::render_calendar`] to stdout.
    pub fn print_calendar_array2d(&self, month: Option<i32>, year: Option<i32>) {
        println!("{}", self.render_calendar(month, year));
    }
}
