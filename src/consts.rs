/// Lowest year any bound may take (inclusive)
pub const MIN_YEAR_BOUND: i32 = 1000;
/// Highest year any bound may take (inclusive)
pub const MAX_YEAR_BOUND: i32 = 9999;

/// Default lower year bound for a new date
pub const DEFAULT_MIN_YEAR: i32 = 1000;
/// Default upper year bound for a new date
pub const DEFAULT_MAX_YEAR: i32 = 9999;

/// Maximum valid month (December)
pub const MAX_MONTH: i32 = 12;

/// First day of month, used for lower bounds
pub const MIN_DAY: i32 = 1;
/// Longest month length, the ceiling for a stored day
pub const MAX_DAY: i32 = 31;

/// Month number for January
pub const JANUARY: i32 = 1;
/// Month number for February
pub const FEBRUARY: i32 = 2;
/// Month number for March, the first month counted against the current year
pub const MARCH: i32 = 3;
/// Month number for December
pub const DECEMBER: i32 = 12;

/// Days in February for leap years
pub const FEBRUARY_DAYS_LEAP: i32 = 29;

/// Maximum days in each month (index 0 is unused, months are 1-indexed)
/// February shows 28 days (non-leap year default)
pub const DAYS_IN_MONTH: [i32; 13] = [
    0,  // index 0 unused (months are 1-indexed)
    31, // January
    28, // February (non-leap, adjusted by is_leap_year check)
    31, // March
    30, // April
    31, // May
    30, // June
    31, // July
    31, // August
    30, // September
    31, // October
    30, // November
    31, // December
];

/// Leap year occurs every 4 years
pub(crate) const LEAP_YEAR_CYCLE: i32 = 4;
/// Century years are not leap years unless...
pub(crate) const CENTURY_CYCLE: i32 = 100;
/// ...they are divisible by 400 (Gregorian calendar correction)
pub(crate) const GREGORIAN_CYCLE: i32 = 400;

/// Days in a week
pub const DAYS_PER_WEEK: i32 = 7;
/// Thursday as returned by `get_last_week_day_of_year` (Sunday = 0)
pub const YEAR_END_THURSDAY: i32 = 4;
/// Wednesday as returned by `get_last_week_day_of_year` (Sunday = 0)
pub const YEAR_END_WEDNESDAY: i32 = 3;

/// Weeks in a short ISO year
pub const SHORT_YEAR_WEEKS: i32 = 52;
/// Weeks in a long ISO year
pub const LONG_YEAR_WEEKS: i32 = 53;

/// Per-month weekday offsets (index `month - 1`)
pub const WEEKDAY_OFFSETS: [i32; 12] = [0, 3, 2, 5, 0, 3, 5, 1, 4, 6, 2, 4];

/// English weekday names, Monday first
pub const WEEKDAY_NAMES: [&str; 7] = [
    "Monday",
    "Tuesday",
    "Wednesday",
    "Thursday",
    "Friday",
    "Saturday",
    "Sunday",
];

/// English month names, January first
pub const MONTH_NAMES: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

/// Rows in a month grid
pub const CALENDAR_ROWS: usize = 6;
/// Columns in a month grid (one per weekday)
pub const CALENDAR_COLUMNS: usize = 7;
/// Total slots in a month grid
pub const CALENDAR_SLOTS: usize = CALENDAR_ROWS * CALENDAR_COLUMNS;
/// Cell text for a slot that falls outside the month
pub const EMPTY_CELL: &str = "  ";

/// Seconds in one day, used when converting epoch offsets
pub const SECONDS_PER_DAY: i64 = 86_400;

/// Date component separator (ISO 8601 format)
pub const DATE_SEPARATOR: char = '-';
/// Delimiter used by `join_formats` when none is given
pub const DEFAULT_DELIMITER: &str = "-";
