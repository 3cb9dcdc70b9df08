use crate::prelude::*;
use crate::{DEFAULT_DELIMITER, Date, MONTH_NAMES, WEEKDAY_NAMES};

/// How much of a component to render.
///
/// Text is measured by its length (`"mmm"` means 3), so pattern-like strings and
/// plain numbers select the same branch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, From)]
pub enum FormatSpec<'a> {
    Text(&'a str),
    Length(i32),
}

impl FormatSpec<'_> {
    /// The effective length the renderers dispatch on.
    pub fn length(&self) -> i32 {
        match *self {
            Self::Text(text) => i32::try_from(text.chars().count()).unwrap_or(i32::MAX),
            Self::Length(length) => length,
        }
    }
}

fn abbreviate(name: &str, length: usize) -> String {
    name.chars().take(length).collect()
}

impl Date {
    /// Renders a day: `1` plain, `2` zero-padded, `3`/`4` weekday abbreviated to 2/3
    /// letters, anything else the full weekday name.
    pub fn format_day<'a>(
        &self,
        format: impl Into<FormatSpec<'a>>,
        day: Option<i32>,
        month: Option<i32>,
        year: Option<i32>,
    ) -> String {
        let (day, month, year) = self.clamp_triple(day, month, year);
        let weekday = || WEEKDAY_NAMES[self.get_weekday(Some(day), Some(month), Some(year)) as usize];
        match format.into().length() {
            1 => day.to_string(),
            2 => format!("{day:02}"),
            3 => abbreviate(weekday(), 2),
            4 => abbreviate(weekday(), 3),
            _ => weekday().to_owned(),
        }
    }

    /// Renders a month: `1` plain, `2` zero-padded, `3` first three letters,
    /// anything else the full name.
    pub fn format_month<'a>(&self, format: impl Into<FormatSpec<'a>>, month: Option<i32>) -> String {
        let month = self.clamp_month(month);
        let name = MONTH_NAMES[(month - 1) as usize];
        match format.into().length() {
            1 => month.to_string(),
            2 => format!("{month:02}"),
            3 => abbreviate(name, 3),
            _ => name.to_owned(),
        }
    }

    /// Renders a year: the full number for lengths of 4 and up, otherwise the last two digits.
    pub fn format_year<'a>(&self, format: impl Into<FormatSpec<'a>>, year: Option<i32>) -> String {
        let year = self.clamp_year(year);
        if format.into().length() >= 4 {
            year.to_string()
        } else {
            format!("{:02}", year % 100)
        }
    }

    /// Joins already formatted parts in order, `-` unless another delimiter is given.
    pub fn join_formats<S: AsRef<str>>(parts: &[S], delimiter: Option<&str>) -> String {
        parts
            .iter()
            .map(AsRef::as_ref)
            .collect::<Vec<&str>>()
            .join(delimiter.unwrap_or(DEFAULT_DELIMITER))
    }
}
